//! Static name tables. These hold no logic beyond index arithmetic.

mod items;
mod moves;
mod species;
mod types;

pub use items::item_name;
pub use moves::move_name;
pub use species::{pokedex_name, species_name, POKEDEX_SIZE};
pub use types::Type;
