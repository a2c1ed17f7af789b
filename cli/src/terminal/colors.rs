use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 130, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const COMMENT: Color = Color::TrueColor { r: 140, g: 140, b: 140 };

pub const IPV4_ADDR: Color = Color::BrightGreen;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
