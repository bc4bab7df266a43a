use bevy::prelude::*;

// Button style definitions shared by the panel rows
pub struct ButtonStyle {
    pub normal: Color,
    pub hover: Color,
    pub pressed: Color,
}

impl ButtonStyle {
    pub const CHECKBOX_ROW: Self = Self {
        normal: Color::srgba(0.2, 0.2, 0.2, 0.0),
        hover: Color::srgba(0.3, 0.3, 0.3, 0.8),
        pressed: Color::srgba(0.2, 0.5, 0.8, 0.8),
    };

    pub fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hover,
            Interaction::None => self.normal,
        }
    }
}

pub fn checkbox_glyph(checked: bool) -> &'static str {
    use crate::common::constants::ui::*;

    if checked {
        CHECKED_GLYPH
    } else {
        UNCHECKED_GLYPH
    }
}
