use crate::Color;
use crate::text;

/// The scale every stat bar is drawn against.
pub const MAX: u32 = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Stat {
    pub fn label(&self) -> String {
        match self.name.as_str() {
            "hp" => "HP".to_owned(),
            "attack" => "Atk".to_owned(),
            "defense" => "Def".to_owned(),
            "special-attack" => "Sp. Atk".to_owned(),
            "special-defense" => "Sp. Def".to_owned(),
            "speed" => "Speed".to_owned(),
            name => text::humanize(name),
        }
    }

    /// Width of the bar, in percent of [`MAX`].
    pub fn percentage(&self) -> f32 {
        (self.value as f32 / MAX as f32 * 100.0).min(100.0)
    }

    pub fn tier(&self) -> Tier {
        match self.value {
            0..50 => Tier::Poor,
            50..80 => Tier::Fair,
            80..100 => Tier::Good,
            _ => Tier::Excellent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Tier {
    pub fn color(self) -> Color {
        match self {
            Tier::Poor => Color::rgb8(0xF3, 0x44, 0x44),
            Tier::Fair => Color::rgb8(0xFF, 0x7F, 0x0F),
            Tier::Good => Color::rgb8(0xFF, 0xDD, 0x57),
            Tier::Excellent => Color::rgb8(0x23, 0xCD, 0x5E),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(value: u32) -> Stat {
        Stat {
            name: "attack".to_owned(),
            value,
        }
    }

    #[test]
    fn percentage_is_scaled_against_max() {
        let percentage = stat(100).percentage();

        assert!((percentage - 100.0 / 255.0 * 100.0).abs() < 1e-4);
        assert!((percentage - 39.2).abs() < 0.05);
    }

    #[test]
    fn percentage_is_clamped() {
        assert_eq!(stat(300).percentage(), 100.0);
        assert_eq!(stat(0).percentage(), 0.0);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(stat(49).tier(), Tier::Poor);
        assert_eq!(stat(50).tier(), Tier::Fair);
        assert_eq!(stat(99).tier(), Tier::Good);
        assert_eq!(stat(100).tier(), Tier::Excellent);
        assert_eq!(stat(100).tier().color(), Tier::Excellent.color());
    }

    #[test]
    fn labels_are_abbreviated() {
        let label = |name: &str| {
            Stat {
                name: name.to_owned(),
                value: 1,
            }
            .label()
        };

        assert_eq!(label("hp"), "HP");
        assert_eq!(label("special-attack"), "Sp. Atk");
        assert_eq!(label("accuracy"), "Accuracy");
    }
}
