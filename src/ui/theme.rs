use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub success: Color,   // Green
    pub number: Color,    // Orange for inline values
    pub type_name: Color, // Cyan for node headers
    pub edge: Color,      // Blue for edge targets
    pub border_focused: Color,
    pub border_normal: Color,
    pub selection_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    success: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    type_name: Color::Rgb(148, 226, 213),
    edge: Color::Rgb(137, 180, 250),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    selection_bg: Color::Rgb(50, 50, 70),
};
