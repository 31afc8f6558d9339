use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, BORDER, MUTED, STATUS_ERROR, STATUS_OK, TEXT};

pub const TITLE: &str = "English ↔ Urdu Translator";
pub const SUBTITLE: &str = "Paste English or Urdu text, choose a mode, and translate.";

pub struct Header<'a> {
    model: &'a str,
    key_configured: bool,
}

impl<'a> Header<'a> {
    pub fn new(model: &'a str, key_configured: bool) -> Self {
        Self {
            model,
            key_configured,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let separator_style = Style::default().fg(MUTED);
        let marker_style = if self.key_configured {
            Style::default().fg(STATUS_OK)
        } else {
            Style::default().fg(STATUS_ERROR)
        };
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("●", marker_style),
            Span::raw("  "),
            Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.model, Style::default().fg(TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(SUBTITLE, separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
