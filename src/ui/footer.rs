use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    click_anywhere: bool,
}

impl Footer {
    pub fn new(click_anywhere: bool) -> Self {
        Self { click_anywhere }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hint_line();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count; the hints carry box glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let used = hints.chars().count() + version.chars().count();
        let padding = content_width.saturating_sub(used);

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, style),
            Span::styled(" ".repeat(padding), style),
            Span::styled(version, style),
        ]);

        Paragraph::new(line)
            .style(style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }

    fn hint_line(&self) -> String {
        let mut pairs = vec![("+/↑", "Increment"), ("-/↓", "Decrement")];
        if self.click_anywhere {
            pairs.push(("Click", "Increment"));
        }
        pairs.push(("q", "Quit"));

        let mut line = String::from(" ");
        for (i, (key, label)) in pairs.iter().enumerate() {
            if i > 0 {
                line.push_str(" │ ");
            }
            line.push_str(key);
            line.push_str(": ");
            line.push_str(label);
        }
        line
    }
}
