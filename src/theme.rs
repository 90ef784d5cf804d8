use ratatui::style::Color;

/// A color theme applied to all visual elements.
///
/// High awareness and the glitch flag swap some of these at render time,
/// so the theme carries the "unsettled" variants alongside the normal ones.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    /// Alternating body color once awareness runs very high.
    pub snake_body_alt: Color,
    /// Head color while the glitch flag is set.
    pub glitch_head: Color,
    pub food: Color,
    /// Awareness food in its bright blink state.
    pub special_food_on: Color,
    /// Awareness food in its dim blink state.
    pub special_food_off: Color,
    pub border_fg: Color,
    /// Border color once the walls start weakening.
    pub border_alarm: Color,
    /// Crack overlay during the break-out.
    pub crack: Color,
    pub hud_fg: Color,
    pub message_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Default green-on-black look of the original.
pub const THEME_ARCADE: Theme = Theme {
    name: "Arcade",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_body_alt: Color::Blue,
    glitch_head: Color::Cyan,
    food: Color::Red,
    special_food_on: Color::Yellow,
    special_food_off: Color::LightYellow,
    border_fg: Color::DarkGray,
    border_alarm: Color::Red,
    crack: Color::White,
    hud_fg: Color::Gray,
    message_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Colder phosphor look.
pub const THEME_TERMINAL: Theme = Theme {
    name: "Terminal",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_body_alt: Color::Magenta,
    glitch_head: Color::LightMagenta,
    food: Color::Yellow,
    special_food_on: Color::LightCyan,
    special_food_off: Color::Cyan,
    border_fg: Color::DarkGray,
    border_alarm: Color::LightRed,
    crack: Color::White,
    hud_fg: Color::Gray,
    message_fg: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// All available themes in selection order.
pub const THEMES: &[Theme] = &[THEME_ARCADE, THEME_TERMINAL];

/// Looks a theme up by name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
