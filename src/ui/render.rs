use std::cmp::Ordering;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, VALUE_NEGATIVE, VALUE_POSITIVE};
use figlet_rs::FIGfont;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    draw_value(frame, app.state().value(), body);

    let footer_widget = Footer::new(app.click_anywhere_increments());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_value(frame: &mut Frame<'_>, value: i64, body: ratatui::layout::Rect) {
    if body.height == 0 || body.width == 0 {
        return;
    }

    let mut lines = value_lines(value);
    if lines.len() as u16 > body.height {
        // Not enough rows for the large rendering; fall back to plain text.
        lines = vec![Line::from(value.to_string())];
    }

    let target = centered_rect_by_size(body.width, lines.len() as u16, body);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(value_style(value));
    frame.render_widget(paragraph, target);
}

/// Render the value as FIGlet art, falling back to plain text when the
/// bundled font is unavailable or the digits cannot be converted.
fn value_lines(value: i64) -> Vec<Line<'static>> {
    let text = value.to_string();

    if let Ok(font) = FIGfont::standard() {
        if let Some(figure) = font.convert(&text) {
            return figure
                .to_string()
                .lines()
                .map(|line| Line::from(line.to_string()))
                .collect();
        }
    }

    vec![Line::from(text)]
}

fn value_style(value: i64) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match value.cmp(&0) {
        Ordering::Greater => style.fg(VALUE_POSITIVE),
        Ordering::Less => style.fg(VALUE_NEGATIVE),
        Ordering::Equal => style.fg(HEADER_TEXT),
    }
}
