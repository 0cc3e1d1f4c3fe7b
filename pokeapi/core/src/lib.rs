mod text;

pub mod catalog;
pub mod color;
pub mod identifier;
pub mod moves;
pub mod pokemon;
pub mod stat;
pub mod types;

pub use color::Color;
pub use identifier::Identifier;
pub use pokemon::Pokemon;
pub use stat::Stat;
pub use types::{Type, Types};
