//! Pokémon categories (elemental types) and their display colors.
use crate::Color;
use crate::text;

use std::fmt;

/// Color used for categories missing from the palette.
pub const FALLBACK_COLOR: Color = Color::rgb8(0x68, 0xA0, 0x90);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Type(String);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> String {
        text::capitalize(&self.0)
    }

    pub fn color(&self) -> Color {
        match self.0.as_str() {
            "normal" => Color::rgb8(0xA8, 0xA7, 0x7A),
            "fire" => Color::rgb8(0xEE, 0x81, 0x30),
            "water" => Color::rgb8(0x63, 0x90, 0xF0),
            "electric" => Color::rgb8(0xF7, 0xD0, 0x2C),
            "grass" => Color::rgb8(0x7A, 0xC7, 0x4C),
            "ice" => Color::rgb8(0x96, 0xD9, 0xD6),
            "fighting" => Color::rgb8(0xC2, 0x2E, 0x28),
            "poison" => Color::rgb8(0xA3, 0x3E, 0xA1),
            "ground" => Color::rgb8(0xE2, 0xBF, 0x65),
            "flying" => Color::rgb8(0xA9, 0x8F, 0xF3),
            "psychic" => Color::rgb8(0xF9, 0x55, 0x87),
            "bug" => Color::rgb8(0xA6, 0xB9, 0x1A),
            "rock" => Color::rgb8(0xB6, 0xA1, 0x36),
            "ghost" => Color::rgb8(0x73, 0x57, 0x97),
            "dragon" => Color::rgb8(0x6F, 0x35, 0xFC),
            "dark" => Color::rgb8(0x70, 0x57, 0x46),
            "steel" => Color::rgb8(0xB7, 0xB7, 0xCE),
            "fairy" => Color::rgb8(0xD6, 0x85, 0xAD),
            _ => FALLBACK_COLOR,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The one or two categories of a record, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Types {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl Types {
    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// `"Fire"` or `"Fire / Flying"`.
    pub fn label(&self) -> String {
        match &self.secondary {
            Some(secondary) => format!("{} / {}", self.primary.label(), secondary.label()),
            None => self.primary.label(),
        }
    }

    /// The primary category always wins.
    pub fn color(&self) -> Color {
        self.primary.color()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_label_is_capitalized_and_slash_joined() {
        let types = Types::dual(Type::new("fire"), Type::new("flying"));

        assert_eq!(types.label(), "Fire / Flying");
        assert_eq!(types.color(), Type::new("fire").color());
        assert_eq!(types.color(), Color::rgb8(0xEE, 0x81, 0x30));
    }

    #[test]
    fn unmapped_category_uses_fallback_color() {
        let types = Types::single(Type::new("stellar"));

        assert_eq!(types.label(), "Stellar");
        assert_eq!(types.color(), FALLBACK_COLOR);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Type::new("Water").color(), Type::new("water").color());
        assert_ne!(Type::new("WATER").color(), FALLBACK_COLOR);
    }

    #[test]
    fn iter_follows_slot_order() {
        let types = Types::dual(Type::new("grass"), Type::new("poison"));
        let names: Vec<_> = types.iter().map(Type::as_str).collect();

        assert_eq!(names, ["grass", "poison"]);
    }
}
