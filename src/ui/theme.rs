use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(0x6d, 0x4c, 0x41);
pub const ON_PRIMARY: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const SECONDARY_CONTAINER: Color = Color::Rgb(0xf8, 0xe1, 0xd4);
pub const ON_SECONDARY_CONTAINER: Color = Color::Rgb(0x2c, 0x16, 0x0c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOOTER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BORDER: Color = Color::Rgb(0xe9, 0x8a, 0x6a);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
