use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::translate::LayoutOrientation;
use crate::ui::render::{oriented_lines, pane_block};
use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, BORDER, MUTED, TEXT};

/// Longest input excerpt shown under an entry's label, in chars.
const INPUT_HINT_CHARS: usize = 120;

/// Session history, newest entry first, starting at the session's scroll offset.
pub struct HistoryPane<'a> {
    session: &'a SessionState,
    reorder_rtl: bool,
}

impl<'a> HistoryPane<'a> {
    pub fn new(session: &'a SessionState, reorder_rtl: bool) -> Self {
        Self {
            session,
            reorder_rtl,
        }
    }

    /// `width` is the inner width available for wrapping.
    pub fn widget(&self, width: usize) -> Paragraph<'static> {
        let mut lines = Vec::new();
        let offset = self.session.history_offset();

        if self.session.history_len() == 0 {
            lines.push(Line::styled(
                "No translations yet.",
                Style::default().fg(MUTED),
            ));
        }

        for (index, entry) in self.session.history().enumerate().skip(offset) {
            if index > offset {
                lines.push(Line::styled(
                    "─".repeat(width.min(40)),
                    Style::default().fg(BORDER),
                ));
            }
            lines.push(Line::styled(
                format!("{}. {}", index + 1, entry.direction.label()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
            // Input reads in the other direction from its translation.
            let input_orientation = match entry.orientation {
                LayoutOrientation::Ltr => LayoutOrientation::Rtl,
                LayoutOrientation::Rtl => LayoutOrientation::Ltr,
            };
            lines.extend(oriented_lines(
                &input_hint(&entry.input),
                input_orientation,
                width,
                self.reorder_rtl,
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            ));
            lines.extend(oriented_lines(
                &entry.output,
                entry.orientation,
                width,
                self.reorder_rtl,
                Style::default().fg(TEXT),
            ));
        }

        let title = if offset > 0 {
            format!(
                "Translation history (from #{} of {}, PgUp for newer)",
                offset + 1,
                self.session.history_len()
            )
        } else {
            "Translation history".to_string()
        };
        Paragraph::new(lines).block(pane_block(&title, false))
    }
}

/// The input on one line, cut to [`INPUT_HINT_CHARS`].
fn input_hint(input: &str) -> String {
    let flat = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= INPUT_HINT_CHARS {
        return flat;
    }
    let mut hint: String = flat.chars().take(INPUT_HINT_CHARS).collect();
    hint.push('…');
    hint
}
