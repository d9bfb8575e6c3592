use crate::models::{Author, Message};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript entry as a small bubble: a header line with
/// the timestamp and state icon, the wrapped body, and a closing rail.
pub fn render_message(message: &Message, area: Rect) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message);
    let indent = indent_for(message);

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─".to_string(), style),
        Span::styled(
            message.timestamp.format("%H:%M").to_string(),
            style.add_modifier(Modifier::DIM),
        ),
        Span::styled(" ".to_string(), style),
        Span::styled(state_icon(message).to_string(), style),
    ]));

    let wrap_width = (area.width as usize).saturating_sub(4).max(1);
    for raw_line in message.text.lines() {
        if raw_line.is_empty() {
            lines.push(body_line("", style, indent));
            continue;
        }
        for wrapped in wrap(raw_line, wrap_width) {
            lines.push(body_line(&wrapped, style, indent));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn body_line(text: &str, style: Style, indent: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("│ ".to_string(), style),
        Span::styled(text.to_string(), style),
    ])
}

fn base_style(message: &Message) -> Style {
    let mut style = Style::default().fg(match message.author {
        Author::User => Color::Rgb(255, 223, 128),
        Author::Bot => Color::Rgb(144, 238, 144),
    });
    if message.pending {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn indent_for(message: &Message) -> &'static str {
    match message.author {
        Author::User => "  ",
        Author::Bot => "",
    }
}

fn state_icon(message: &Message) -> &'static str {
    if message.pending {
        "○"
    } else {
        "●"
    }
}
