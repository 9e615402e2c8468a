//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_registration(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Toasts render on top of everything else
    if let Some(toast) = app.state.toasts.current() {
        components::render_toast(frame, &toast.notification);
    }
}
