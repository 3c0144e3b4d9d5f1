use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x008080de);
pub const ACCENT: Color = Color::from_u32(0x00dea958);
pub const NEUTRAL: Color = Color::from_u32(0x00585858);
pub const BACKGROUND: Color = Color::from_u32(0x00101014);
pub const ERROR: Color = Color::from_u32(0x00d75f5f);
