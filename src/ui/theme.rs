use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2d, 0xa4, 0x4e);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BORDER_FOCUSED: Color = Color::Rgb(0x2d, 0xa4, 0x4e);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
