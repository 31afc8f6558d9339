use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::translate::{LayoutOrientation, TranslationResult};
use crate::ui::app::{App, Focus};
use crate::ui::bidi::layout_lines;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::history::HistoryPane;
use crate::ui::layout::{body_layout, layout_regions};
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{BORDER, BORDER_FOCUSED, MUTED, STATUS_ERROR, STATUS_WARN, TEXT};
use crate::ui::translation::TranslationStatus;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.selected_model(), app.key_warning().is_none());
    frame.render_widget(header_widget.widget(), header);

    let panes = body_layout(body, app.settings().show_prompt());
    frame.render_widget(Sidebar::new(app).widget(), panes.sidebar);
    draw_input(frame, app, panes.input);
    draw_output(frame, app, panes.output);
    if let Some(prompt) = panes.prompt {
        draw_prompt(frame, app, prompt);
    }
    frame.render_widget(
        HistoryPane::new(app.session(), app.config().display.reorder_rtl)
            .widget(panes.history.width.saturating_sub(2) as usize),
        panes.history,
    );

    let footer_widget = Footer::new(app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);
}

pub(crate) fn pane_block<'a>(title: &str, focused: bool) -> Block<'a> {
    let border = if focused { BORDER_FOCUSED } else { BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
}

/// Lines for a translated text, aligned by its orientation.
pub(crate) fn oriented_lines(
    text: &str,
    orientation: LayoutOrientation,
    width: usize,
    reorder_rtl: bool,
    style: Style,
) -> Vec<Line<'static>> {
    let alignment = match orientation {
        LayoutOrientation::Ltr => Alignment::Left,
        LayoutOrientation::Rtl => Alignment::Right,
    };
    layout_lines(text, width, orientation, reorder_rtl)
        .into_iter()
        .map(|line| Line::styled(line, style).alignment(alignment))
        .collect()
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Input && !app.is_busy();
    let block = pane_block("Input text", focused);
    let inner = block.inner(area);

    let editor = app.editor();
    let wrapped = editor.wrap(inner.width as usize);
    let (row, col) = wrapped.cursor;
    let scroll = row.saturating_sub(inner.height.saturating_sub(1) as usize);

    let widget = if editor.text().is_empty() {
        Paragraph::new(Line::styled(
            "Paste or type English or Urdu text…",
            Style::default().fg(MUTED),
        ))
    } else {
        let rows: Vec<Line<'static>> = wrapped.rows.into_iter().map(Line::from).collect();
        Paragraph::new(rows).style(Style::default().fg(TEXT))
    };
    frame.render_widget(
        widget
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .block(block),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + col.min(inner.width.saturating_sub(1) as usize) as u16;
        let y = inner.y + (row - scroll).min(inner.height.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn draw_output(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = pane_block("Output", false);
    let width = block.inner(area).width as usize;
    let reorder = app.config().display.reorder_rtl;

    let lines = match app.translation() {
        TranslationStatus::Translating { .. } => {
            let spinner = app.translation().spinner().unwrap_or_default();
            vec![Line::styled(
                format!("{spinner} Translating…"),
                Style::default().fg(STATUS_WARN),
            )]
        }
        TranslationStatus::Failed {
            message,
            configuration,
        } => {
            let mut lines = vec![Line::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )];
            if *configuration {
                lines.push(Line::styled(
                    "Add the key and try again.",
                    Style::default().fg(MUTED),
                ));
            }
            if let Some(result) = app.session().last_result() {
                lines.push(Line::from(""));
                lines.extend(result_lines(result, width, reorder));
            }
            lines
        }
        TranslationStatus::Idle => match app.session().last_result() {
            Some(result) => result_lines(result, width, reorder),
            None => vec![Line::styled(
                "Translation will appear here.",
                Style::default().fg(MUTED),
            )],
        },
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn result_lines(result: &TranslationResult, width: usize, reorder: bool) -> Vec<Line<'static>> {
    oriented_lines(
        &result.output_text,
        result.orientation,
        width,
        reorder,
        Style::default().fg(TEXT),
    )
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = app
        .session()
        .last_result()
        .map(|result| result.instruction_used)
        .unwrap_or("No translation yet.");
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(MUTED))
            .wrap(Wrap { trim: false })
            .block(pane_block("System prompt", false)),
        area,
    );
}
