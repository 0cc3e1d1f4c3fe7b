use crate::stat::Stat;
use crate::text;
use crate::types::{Type, Types};

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub types: Types,
    /// In decimetres.
    pub height: u32,
    /// In hectograms.
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub moves: Vec<String>,
    pub artwork: Option<String>,
    pub sprite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

impl Ability {
    pub fn label(&self) -> String {
        text::humanize(&self.name)
    }
}

impl Pokemon {
    /// Decodes a `/pokemon/{id}` document of the PokéAPI.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        struct Document {
            id: Id,
            name: String,
            height: u32,
            weight: u32,
            #[serde(default)]
            base_experience: Option<u32>,
            #[serde(default)]
            abilities: Vec<AbilitySlot>,
            types: Vec<TypeSlot>,
            #[serde(default)]
            stats: Vec<BaseStat>,
            #[serde(default)]
            moves: Vec<MoveEntry>,
            #[serde(default)]
            sprites: Sprites,
        }

        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        #[derive(Deserialize)]
        struct AbilitySlot {
            ability: Named,
            #[serde(default)]
            is_hidden: bool,
            slot: u32,
        }

        #[derive(Deserialize)]
        struct TypeSlot {
            slot: u32,
            #[serde(rename = "type")]
            type_: Named,
        }

        #[derive(Deserialize)]
        struct BaseStat {
            base_stat: u32,
            stat: Named,
        }

        #[derive(Deserialize)]
        struct MoveEntry {
            #[serde(rename = "move")]
            move_: Named,
        }

        #[derive(Default, Deserialize)]
        struct Sprites {
            #[serde(default)]
            front_default: Option<String>,
            #[serde(default)]
            other: Other,
        }

        #[derive(Default, Deserialize)]
        struct Other {
            #[serde(rename = "official-artwork", default)]
            official_artwork: Artwork,
        }

        #[derive(Default, Deserialize)]
        struct Artwork {
            #[serde(default)]
            front_default: Option<String>,
        }

        let mut document: Document = serde_json::from_slice(bytes)?;

        document.types.sort_by_key(|entry| entry.slot);
        document.abilities.sort_by_key(|entry| entry.slot);

        let mut types = document
            .types
            .into_iter()
            .map(|entry| Type::new(entry.type_.name));

        let Some(primary) = types.next() else {
            return Err(serde_json::Error::custom(format!(
                "pokemon {} has no types",
                document.id
            )));
        };

        Ok(Self {
            id: document.id,
            name: document.name,
            types: Types {
                primary,
                secondary: types.next(),
            },
            height: document.height,
            weight: document.weight,
            base_experience: document.base_experience,
            abilities: document
                .abilities
                .into_iter()
                .map(|entry| Ability {
                    name: entry.ability.name,
                    is_hidden: entry.is_hidden,
                })
                .collect(),
            stats: document
                .stats
                .into_iter()
                .map(|entry| Stat {
                    name: entry.stat.name,
                    value: entry.base_stat,
                })
                .collect(),
            moves: document
                .moves
                .into_iter()
                .map(|entry| entry.move_.name)
                .collect(),
            artwork: document.sprites.other.official_artwork.front_default,
            sprite: document.sprites.front_default,
        })
    }

    pub fn display_name(&self) -> String {
        text::humanize(&self.name)
    }

    /// `"#006"`
    pub fn number(&self) -> String {
        format!("#{:03}", self.id.number())
    }

    pub fn height_in_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_in_kilograms(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Id(u32);

impl Id {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
