pub mod charset;
pub mod error;
pub mod flags;
pub mod numeric;
pub mod record;
pub mod region;
pub mod save;
pub mod tables;

pub use error::{Error, Result};
pub use flags::{Badges, BattleStyle, Options, PokedexEntry, Sound, TextSpeed};
pub use record::{Creature, ItemEntry, Move, PartyStats};
pub use save::{BoxId, SaveFile, TimePlayed, TrainerInfo};
pub use tables::Type;
