use ratatui::style::Color;

/// Cat-in-the-Hat red.
pub const ACCENT: Color = Color::Rgb(0xd7, 0x26, 0x38);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LINK_TEXT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
