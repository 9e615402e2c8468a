//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{FieldKind, FormItem};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height in rows (top border + content + bottom border)
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the club banner
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let banner = Line::from(vec![
        Span::raw(" Join the "),
        Span::styled(
            "Run Club!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Unleash Your Potential - All Levels Welcome!",
            Style::default().fg(Color::Gray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(banner).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let status = if app.state.form.is_submitting() {
        Span::styled(" ● submitting ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(status);

    // Focus-specific hints
    spans.push(Span::styled(
        get_focus_hints(app.state.form.active_item()),
        Style::default().fg(Color::Gray),
    ));

    let error_count = app.state.form.errors().len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{error_count} field(s) need attention"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused form item
fn get_focus_hints(item: FormItem) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match item {
        FormItem::Field(field) => match field.kind() {
            FieldKind::Select => format!("←/→:choose  Tab:next  {submit}:submit"),
            FieldKind::Multiline => format!("Enter:newline  Tab:next  {submit}:submit"),
            FieldKind::Text | FieldKind::Numeric => {
                format!("Tab/Enter:next  S-Tab:prev  {submit}:submit")
            }
        },
        FormItem::PreferredDays => format!("←/→:day  Space:toggle  Tab:next  {submit}:submit"),
        FormItem::Submit => "Enter:submit  S-Tab:prev  Esc:dismiss".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;

    #[test]
    fn test_create_layout_splits_vertically() {
        let (header, main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(main.height, 24 - HEADER_HEIGHT - 1);
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(FormItem::Field(Field::ShirtSize)).contains("choose"));
        assert!(get_focus_hints(FormItem::Field(Field::RunningGoals)).contains("newline"));
        assert!(get_focus_hints(FormItem::PreferredDays).contains("toggle"));
        assert!(get_focus_hints(FormItem::Submit).starts_with("Enter:submit"));
    }
}
