use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the settings sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 34;

/// Height of the input area, borders included.
const INPUT_HEIGHT: u16 = 8;

/// Height of the system prompt pane, borders included.
const PROMPT_HEIGHT: u16 = 6;

/// Split the screen into header, body and footer bars.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Panes inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLayout {
    pub sidebar: Rect,
    pub input: Rect,
    pub output: Rect,
    /// Present only while "show system prompt" is on.
    pub prompt: Option<Rect>,
    pub history: Rect,
}

pub fn body_layout(body: Rect, show_prompt: bool) -> BodyLayout {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)]).areas(body);

    if show_prompt {
        let [input, output, prompt, history] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(PROMPT_HEIGHT),
            Constraint::Percentage(30),
        ])
        .areas(main);
        BodyLayout {
            sidebar,
            input,
            output,
            prompt: Some(prompt),
            history,
        }
    } else {
        let [input, output, history] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(5),
            Constraint::Percentage(35),
        ])
        .areas(main);
        BodyLayout {
            sidebar,
            input,
            output,
            prompt: None,
            history,
        }
    }
}
