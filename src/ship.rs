//! Ship placements and their derived combat status.

use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use crate::common::{GameError, PlacementError};
use crate::config::MIN_SHIP_LENGTH;
use crate::game::Game;
use crate::grid::DataGrid;
use crate::tile::Tile;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing `y`.
    Portrait,
    /// Extends along increasing `x`.
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Index of a ship within its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub usize);

/// Cells covered by a ship of `length` at (`x`, `y`), starting at the origin.
/// Stops early at the edge of the address space.
pub fn coordinates(
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map_while(move |i| match orientation {
        Orientation::Portrait => y.checked_add(i).map(|y| (x, y)),
        Orientation::Landscape => x.checked_add(i).map(|x| (x, y)),
    })
}

/// A ship placed on a player's grid.
///
/// Placement never changes after construction. Hit and sunk status are read
/// from the grid's tiles; once either becomes true it is remembered, since a
/// shot tile never recovers.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
    hit: Cell<bool>,
    sunk: Cell<bool>,
}

impl Ship {
    /// Place a ship of `length` at (`x`, `y`) on `grid`.
    ///
    /// The placement is validated again here even though `Game` checks it
    /// before constructing.
    pub fn new(
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
        grid: &DataGrid<Tile>,
    ) -> Result<Self, GameError> {
        if length < MIN_SHIP_LENGTH {
            return Err(PlacementError::InvalidLength { length }.into());
        }
        Game::validate_placement(x, y, length, orientation, grid)?;
        Ok(Ship {
            x,
            y,
            length,
            orientation,
            hit: Cell::new(false),
            sunk: Cell::new(false),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left-most covered cell.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Covered cells in order from the origin.
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        coordinates(self.x, self.y, self.length, self.orientation).collect()
    }

    /// Returns `true` if the ship covers (`x`, `y`).
    pub fn covers(&self, x: usize, y: usize) -> bool {
        coordinates(self.x, self.y, self.length, self.orientation).any(|c| c == (x, y))
    }

    /// Tiles under the ship on the grid it was placed on.
    pub fn tiles<'g>(&self, grid: &'g DataGrid<Tile>) -> Vec<&'g Tile> {
        coordinates(self.x, self.y, self.length, self.orientation)
            .filter_map(|(x, y)| grid.get(x, y))
            .collect()
    }

    fn shot_count(&self, grid: &DataGrid<Tile>) -> usize {
        self.tiles(grid).into_iter().filter(|t| t.is_shot()).count()
    }

    /// Returns `true` once any covered tile has been shot.
    pub fn is_hit(&self, grid: &DataGrid<Tile>) -> bool {
        if !self.hit.get() && self.tiles(grid).iter().any(|t| t.is_shot()) {
            self.hit.set(true);
        }
        self.hit.get()
    }

    /// Returns `true` once every covered tile has been shot.
    pub fn is_sunk(&self, grid: &DataGrid<Tile>) -> bool {
        if !self.sunk.get() && self.shot_count(grid) == self.length {
            self.sunk.set(true);
        }
        self.sunk.get()
    }

    /// Share of the ship that has been shot, as a rounded percentage.
    pub fn percentage_hit(&self, grid: &DataGrid<Tile>) -> u8 {
        let shot = self.shot_count(grid) as f64;
        libm::round(shot * 100.0 / self.length as f64) as u8
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?}, hit: {}, sunk: {} }}",
            self.length,
            self.x,
            self.y,
            self.orientation,
            self.hit.get(),
            self.sunk.get(),
        )
    }
}
