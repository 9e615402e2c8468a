//! Toast overlay component

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast
const TOAST_MAX_WIDTH: u16 = 48;

/// Render a notification in the bottom-right corner, above the status bar
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = TOAST_MAX_WIDTH.min(area.width).saturating_sub(padding) as usize;

    let wrapped_lines = wrap_text(&notification.description, max_line_width.max(1));

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(notification.title.chars().count()) as u16;
    let toast_width = (content_width + padding).min(TOAST_MAX_WIDTH).min(area.width);
    // Height: title + blank + description lines + hint + borders
    let toast_height = (2 + wrapped_lines.len() as u16 + 1 + 2).min(area.height);

    // Keep the status bar row visible
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width + 1),
        y: area.y + area.height.saturating_sub(toast_height + 1),
        width: toast_width,
        height: toast_height,
    };

    let accent = if notification.is_destructive() {
        Color::Red
    } else {
        Color::Green
    };

    frame.render_widget(Clear, toast_area);

    let mut content = vec![
        Line::from(Span::styled(
            notification.title.as_str(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for line in wrapped_lines {
        content.push(Line::from(line));
    }
    content.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" dismiss", Style::default().fg(Color::DarkGray)),
    ]));

    let toast = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(toast, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Some required fields are missing or invalid.", 20);
        assert_eq!(
            lines,
            vec!["Some required fields", "are missing or", "invalid."]
        );
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_render_toast_shows_title() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let notification = Notification::destructive("Please fix the errors", "Missing fields.");

        terminal
            .draw(|frame| render_toast(frame, &notification))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Please fix the errors"));
        assert!(text.contains("Missing fields."));
    }

    #[test]
    fn test_render_toast_in_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let notification = Notification::new("Welcome to the Run Club!", "Long description text");
        terminal
            .draw(|frame| render_toast(frame, &notification))
            .unwrap();
    }
}
