//! Registration form rendering

use super::field_renderer::{draw_day_picker, draw_field};
use crate::app::App;
use crate::state::{Field, FormItem, RegistrationForm};
use crate::ui::components::{render_button, render_progress_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::time::Instant;

const FIELD_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 4;

const SUBMIT_LABEL: &str = "Start Your Running Journey!";
const SUBMITTING_LABEL: &str = "Processing...";

/// Draw the registration form in three sections side by side
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3), // Personal information
            Constraint::Ratio(1, 3), // Running experience + availability
            Constraint::Ratio(1, 3), // Emergency contact + submit
        ])
        .split(area);

    let form = &app.state.form;
    draw_personal_section(frame, columns[0], form);
    draw_running_section(frame, columns[1], form);
    draw_emergency_section(frame, columns[2], app);
}

/// Draw a section frame and return the area inside it
fn section(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) -> Rect {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn is_active(form: &RegistrationForm, item: FormItem) -> bool {
    form.active_item() == item
}

fn draw_form_field(frame: &mut Frame, area: Rect, form: &RegistrationForm, field: Field) {
    draw_field(
        frame,
        area,
        field,
        form.data().value(field),
        form.errors().get(field),
        is_active(form, FormItem::Field(field)),
    );
}

fn draw_personal_section(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    const FIELDS: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::ShirtSize,
    ];
    let focused = form
        .active_input()
        .is_some_and(|field| FIELDS.contains(&field));
    let inner = section(frame, area, "Personal Information", focused);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // First name
            Constraint::Length(FIELD_HEIGHT), // Last name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Phone
            Constraint::Length(FIELD_HEIGHT), // Age
            Constraint::Length(FIELD_HEIGHT), // Shirt size
            Constraint::Min(0),
        ])
        .split(inner);

    for (chunk, field) in chunks.iter().zip(FIELDS) {
        draw_form_field(frame, *chunk, form, field);
    }
}

fn draw_running_section(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let focused = matches!(
        form.active_item(),
        FormItem::Field(Field::ExperienceLevel)
            | FormItem::Field(Field::RunningGoals)
            | FormItem::PreferredDays
    );
    let inner = section(frame, area, "Running Experience", focused);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),     // Experience level
            Constraint::Length(MULTILINE_HEIGHT), // Running goals
            Constraint::Length(MULTILINE_HEIGHT), // Preferred days
            Constraint::Min(0),
        ])
        .split(inner);

    draw_form_field(frame, chunks[0], form, Field::ExperienceLevel);
    draw_form_field(frame, chunks[1], form, Field::RunningGoals);
    draw_day_picker(
        frame,
        chunks[2],
        &form.data().preferred_days,
        form.day_cursor,
        is_active(form, FormItem::PreferredDays),
    );
}

fn draw_emergency_section(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focused = matches!(
        form.active_item(),
        FormItem::Field(Field::EmergencyContact)
            | FormItem::Field(Field::EmergencyPhone)
            | FormItem::Field(Field::MedicalConditions)
            | FormItem::Submit
    );
    let inner = section(frame, area, "Emergency Contact", focused);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),     // Contact name
            Constraint::Length(FIELD_HEIGHT),     // Contact phone
            Constraint::Length(MULTILINE_HEIGHT), // Medical conditions
            Constraint::Length(BUTTON_HEIGHT),    // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_form_field(frame, chunks[0], form, Field::EmergencyContact);
    draw_form_field(frame, chunks[1], form, Field::EmergencyPhone);
    draw_form_field(frame, chunks[2], form, Field::MedicalConditions);

    if form.is_submitting() {
        let progress = app.state.submission_progress(Instant::now());
        render_progress_button(frame, chunks[3], SUBMITTING_LABEL, progress);
    } else {
        render_button(
            frame,
            chunks[3],
            SUBMIT_LABEL,
            is_active(form, FormItem::Submit),
            true,
        );
    }
}
