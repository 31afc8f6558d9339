use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::ui::app::{App, Focus};
use crate::ui::render::pane_block;
use crate::ui::settings::SettingId;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED, STATUS_ERROR, STATUS_OK, TEXT};

/// Settings sidebar: one row per [`SettingId`] plus the API key status.
pub struct Sidebar<'a> {
    app: &'a App,
}

impl<'a> Sidebar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let settings = self.app.settings();
        let sidebar_focused = self.app.focus() == Focus::Settings;
        let mut lines = Vec::new();

        for id in SettingId::ALL {
            let focused = sidebar_focused && settings.focused() == id;
            let row_style = if focused {
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };

            match id {
                SettingId::Model | SettingId::Direction => {
                    let value = match id {
                        SettingId::Model => settings.model().unwrap_or("-"),
                        _ => settings.direction().label(),
                    };
                    lines.push(Line::styled(id.label(), Style::default().fg(MUTED)));
                    lines.push(Line::from(vec![
                        Span::styled(format!(" ‹ {value} › "), row_style),
                    ]));
                }
                SettingId::ShowPrompt | SettingId::KeepHistory => {
                    let on = match id {
                        SettingId::ShowPrompt => settings.show_prompt(),
                        _ => settings.keep_history(),
                    };
                    let mark = if on { "[x]" } else { "[ ]" };
                    lines.push(Line::styled(format!("{mark} {}", id.label()), row_style));
                }
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::styled("API key", Style::default().fg(MUTED)));
        match self.app.key_warning() {
            None => lines.push(Line::styled(
                format!("✓ {} found", self.app.config().provider.api_key_env),
                Style::default().fg(STATUS_OK),
            )),
            Some(warning) => lines.push(Line::styled(
                format!("⚠ {warning}"),
                Style::default().fg(STATUS_ERROR),
            )),
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(pane_block("Settings", sidebar_focused))
    }
}
