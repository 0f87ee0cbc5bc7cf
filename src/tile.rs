//! A single grid cell in combat.

use crate::ship::ShipId;

/// One cell of a player's grid: whether it was shot and which ship, if any,
/// sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    x: usize,
    y: usize,
    ship: Option<ShipId>,
    shot: bool,
}

impl Tile {
    /// Create an unshot tile, optionally covered by `ship`.
    pub fn new(x: usize, y: usize, ship: Option<ShipId>) -> Self {
        Self {
            x,
            y,
            ship,
            shot: false,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }

    pub fn is_shot(&self) -> bool {
        self.shot
    }

    /// Fleet index of the covering ship.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn coordinates(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Mark the tile as shot. Callers check `is_shot` first; shooting twice is
    /// a rules violation the tile itself does not detect.
    pub fn shoot(&mut self) -> &mut Self {
        self.shot = true;
        self
    }
}
