//! Field rendering utilities for forms

use crate::state::{day_name, find_option, Field, FieldKind, RUNNING_DAYS};
use chrono::Weekday;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Block around a field, with the error message (if any) along the bottom edge
fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a text, numeric, multi-line or select field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let block = field_block(field.label(), is_active, error);
    let content = match field.kind() {
        FieldKind::Select => select_lines(field, value, is_active),
        _ => text_lines(field, value, is_active),
    };
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn text_lines(field: Field, value: &str, is_active: bool) -> Vec<Line<'static>> {
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let mut spans = vec![];
        if is_active {
            spans.push(cursor);
        }
        spans.push(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        return vec![Line::from(spans)];
    }

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    // split('\n') keeps a trailing empty line so the cursor follows a fresh newline
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

fn select_lines(field: Field, value: &str, is_active: bool) -> Vec<Line<'static>> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled("◂ ", arrow_style)];
    match find_option(field, value) {
        Some((_, option)) => {
            spans.push(Span::styled(
                option.label,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            if !option.description.is_empty() {
                spans.push(Span::styled(
                    format!(" · {}", option.description),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        None => spans.push(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
    spans.push(Span::styled(" ▸", arrow_style));
    vec![Line::from(spans)]
}

/// Draw the weekday badges; selected days are filled, the cursor is underlined
pub fn draw_day_picker(
    frame: &mut Frame,
    area: Rect,
    selected: &[Weekday],
    cursor: usize,
    is_active: bool,
) {
    let block = field_block("Select your preferred running days", is_active, None);

    let mut badges = vec![];
    for (index, day) in RUNNING_DAYS.iter().enumerate() {
        let mut style = if selected.contains(day) {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && index == cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        badges.push(Span::styled(format!(" {} ", &day_name(*day)[..3]), style));
    }

    let hint = Line::from(Span::styled(
        "Don't worry, you can always change this later!",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(
        Paragraph::new(vec![Line::from(badges), hint])
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
