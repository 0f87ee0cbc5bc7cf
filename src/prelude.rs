//! Commonly used types and utilities for ease of import.

pub use crate::{
    DataGrid, FleetComposition, Game, GameError, Orientation, Phase, Player, Score, Ship,
    ShotOutcome, Tile,
};

#[cfg(feature = "std")]
pub use crate::{cli::HotSeat, init_logging};
