//! Common types for Battleships: players and engine errors.

use core::fmt;

use crate::grid::GridError;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans: 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Slot used for per-player arrays.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Why a fleet composition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// No entries at all.
    Empty,
    /// Text form could not be parsed as `length:count` pairs.
    Malformed,
    /// A length or count is zero.
    NonPositive { length: usize, count: usize },
    /// Ships shorter than the minimum length can never be placed.
    ShipTooShort { length: usize },
    /// A ship of this length fits on neither axis.
    ShipTooLong { length: usize },
    /// Ships would leave no room for misses.
    CoversGrid { covered: usize, area: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Empty => write!(f, "The fleet composition must not be empty"),
            FleetError::Malformed | FleetError::NonPositive { .. } => write!(
                f,
                "The fleet composition must map positive integers to positive integers"
            ),
            FleetError::ShipTooShort { length } => {
                write!(f, "Ships of length {} are too short to place", length)
            }
            FleetError::ShipTooLong { length } => write!(
                f,
                "Invalid number of ships given - no ship of length {} will fit on the grid!",
                length
            ),
            FleetError::CoversGrid { covered, area } => write!(
                f,
                "Too many ships specified - {} squares would cover the entire {} square grid!",
                covered, area
            ),
        }
    }
}

/// Why a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Length below the allowed minimum.
    InvalidLength { length: usize },
    /// Some or all of the ship lies outside the grid.
    OutOfBounds,
    /// Another ship already covers this point.
    Overlap { x: usize, y: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength { length } => {
                write!(f, "Placement not valid - a ship cannot have length {}", length)
            }
            PlacementError::OutOfBounds => write!(
                f,
                "Placement not valid - the entire ship does not fit within the grid"
            ),
            PlacementError::Overlap { x, y } => write!(
                f,
                "Placement not valid - overlapping another ship at point ({}, {})",
                x, y
            ),
        }
    }
}

/// Errors returned by Game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid error (e.g., target outside the grid).
    Grid(GridError),
    /// Grid smaller than the minimum on some axis.
    InvalidDimensions { columns: usize, rows: usize },
    /// Fleet composition failed validation.
    InvalidFleetComposition(FleetError),
    /// Fleet composition changed after placement began.
    FleetAlreadyLocked,
    /// No unplaced ship of this length remains for the active player.
    NoShipAvailable { length: usize },
    /// Ship placement is illegal.
    InvalidPlacement(PlacementError),
    /// Placement or start attempted once shooting has begun.
    GameAlreadyStarted,
    /// Start attempted while ships still await placement.
    FleetIncomplete,
    /// Same player tried to shoot twice in a row.
    OutOfTurn,
    /// Shot fired before the game started.
    GameNotStarted,
    /// Target tile was shot before.
    AlreadyShot { x: usize, y: usize },
    /// The game is over.
    GameAlreadyWon { winner: Player },
    /// Random placement gave up.
    UnableToPlaceShip { length: usize },
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl From<FleetError> for GameError {
    fn from(err: FleetError) -> Self {
        GameError::InvalidFleetComposition(err)
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
            GameError::InvalidDimensions { columns, rows } => write!(
                f,
                "The grid must be at least 5x5, got {}x{}",
                columns, rows
            ),
            GameError::InvalidFleetComposition(e) => write!(f, "{}", e),
            GameError::FleetAlreadyLocked => write!(
                f,
                "Cannot specify the number of ships - ship placement has already begun"
            ),
            GameError::NoShipAvailable { length } => write!(
                f,
                "There are no ships of length {} available for placement",
                length
            ),
            GameError::InvalidPlacement(e) => write!(f, "{}", e),
            GameError::GameAlreadyStarted => write!(f, "The game has already started"),
            GameError::FleetIncomplete => write!(
                f,
                "The game cannot start until both players have placed all of their ships"
            ),
            GameError::OutOfTurn => write!(
                f,
                "You may not shoot twice in a row - it is the other player's turn"
            ),
            GameError::GameNotStarted => write!(
                f,
                "You may not start shooting until the game is in progress"
            ),
            GameError::AlreadyShot { x, y } => {
                write!(f, "The target ({}, {}) has already been shot", x, y)
            }
            GameError::GameAlreadyWon { winner } => write!(
                f,
                "The game is won. The winner is player {}",
                winner.number()
            ),
            GameError::UnableToPlaceShip { length } => {
                write!(f, "Unable to find room for a ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
