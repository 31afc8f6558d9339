use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{ACCENT, BORDER, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Ctrl+T: Translate │ Ctrl+L: Clear │ Ctrl+Y: Copy │ Tab: Settings │ PgUp/PgDn: History │ Ctrl+Q: Quit";

pub struct Footer<'a> {
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(HINTS, text_style)];
        let mut used = UnicodeWidthStr::width(HINTS);
        if let Some(notice) = self.notice {
            let notice = format!("  {notice}");
            used += UnicodeWidthStr::width(notice.as_str());
            spans.push(Span::styled(notice, Style::default().fg(ACCENT)));
        }

        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(UnicodeWidthStr::width(version.as_str()));
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
