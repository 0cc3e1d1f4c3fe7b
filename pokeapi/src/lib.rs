pub use pokeapi_core as core;

pub mod error;
pub mod loader;
pub mod pokemon;
pub mod session;

pub use crate::core::{Color, Identifier, catalog, identifier, moves, stat, types};
pub use error::Error;
pub use loader::Loader;
pub use pokemon::Pokemon;
pub use session::Session;

pub type Result<T, E = Error> = std::result::Result<T, E>;
