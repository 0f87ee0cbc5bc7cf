#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
mod game;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
mod tile;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::{DataGrid, GridError};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use tile::*;
