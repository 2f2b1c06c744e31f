// Use cases layer: application workflows for the game.

pub mod game;
pub mod types;

pub use game::{Game, WorldSettings, world_task};
pub use types::WorldUpdate;
