use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    common::{GameError, PlacementError, Player},
    config::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_PLACEMENT_ATTEMPTS, MIN_GRID_SIZE},
    fleet::{default_fleet, FleetComposition},
    grid::DataGrid,
    ship::{self, Orientation, Ship, ShipId},
    tile::Tile,
};

/// Macro-state of a game. Phases only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Nothing placed yet; the fleet composition may still change.
    Initial,
    Placing,
    InProgress,
    /// Terminal.
    Won,
}

impl Phase {
    /// Numeric code of the phase, 0 through 3.
    pub fn code(self) -> u8 {
        match self {
            Phase::Initial => 0,
            Phase::Placing => 1,
            Phase::InProgress => 2,
            Phase::Won => 3,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Initial => "Beginning",
            Phase::Placing => "Placing ships",
            Phase::InProgress => "Game in progress",
            Phase::Won => "Game won",
        };
        write!(f, "{}", name)
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    /// Hit a ship that is still afloat.
    Hit,
    /// Hit the last intact tile of this ship in the target's fleet.
    Sunk(ShipId),
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Per-player tally, credited to the shooter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub shots: usize,
    pub hits: usize,
    pub kills: usize,
}

/// Two-player game: grids, fleets and the placement/shooting state machine.
#[derive(Debug, Clone)]
pub struct Game {
    active: Player,
    grids: [DataGrid<Tile>; 2],
    fleets: [Vec<Ship>; 2],
    composition: FleetComposition,
    /// Never `Won`; a game is won exactly when `winner` is set.
    phase: Phase,
    last_to_shoot: Option<Player>,
    winner: Option<Player>,
}

impl Game {
    /// Create a game with two empty `columns` × `rows` grids.
    pub fn new(columns: usize, rows: usize) -> Result<Self, GameError> {
        if columns < MIN_GRID_SIZE || rows < MIN_GRID_SIZE {
            return Err(GameError::InvalidDimensions { columns, rows });
        }
        Ok(Self::with_dimensions(columns, rows))
    }

    fn with_dimensions(columns: usize, rows: usize) -> Self {
        Self {
            active: Player::One,
            grids: [
                DataGrid::with_dimensions(columns, rows),
                DataGrid::with_dimensions(columns, rows),
            ],
            fleets: [Vec::new(), Vec::new()],
            composition: default_fleet(),
            phase: Phase::Initial,
            last_to_shoot: None,
            winner: None,
        }
    }

    /// Current phase.
    pub fn state(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Won
        } else {
            self.phase
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn columns(&self) -> usize {
        self.grids[0].column_count()
    }

    pub fn rows(&self) -> usize {
        self.grids[0].row_count()
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    /// Hand the turn to the other player.
    pub fn change_active_player(&mut self) -> &mut Self {
        self.active = self.active.opponent();
        self
    }

    /// Grid holding `player`'s ships and the shots fired at them.
    pub fn grid(&self, player: Player) -> &DataGrid<Tile> {
        &self.grids[player.index()]
    }

    pub fn active_player_grid(&self) -> &DataGrid<Tile> {
        self.grid(self.active_player())
    }

    pub fn inactive_player_grid(&self) -> &DataGrid<Tile> {
        self.grid(self.inactive_player())
    }

    /// Ships placed by `player`, in placement order.
    pub fn ships(&self, player: Player) -> &[Ship] {
        &self.fleets[player.index()]
    }

    pub fn active_player_ships(&self) -> &[Ship] {
        self.ships(self.active_player())
    }

    pub fn inactive_player_ships(&self) -> &[Ship] {
        self.ships(self.inactive_player())
    }

    pub fn fleet_composition(&self) -> &FleetComposition {
        &self.composition
    }

    /// Number of ships of `length` each player must place.
    pub fn ships_required(&self, length: usize) -> usize {
        self.composition.get(length)
    }

    /// Replace the fleet composition. Only allowed before the first placement.
    pub fn set_fleet_composition(
        &mut self,
        composition: FleetComposition,
    ) -> Result<&mut Self, GameError> {
        if self.state() > Phase::Initial {
            return Err(GameError::FleetAlreadyLocked);
        }
        composition.validate(self.columns(), self.rows())?;
        debug!("fleet composition set to {}", composition);
        self.composition = composition;
        Ok(self)
    }

    /// Ships `player` still has to place, by length. Exhausted lengths are
    /// omitted.
    pub fn ships_awaiting_placement(&self, player: Player) -> FleetComposition {
        let mut awaiting = self.composition.clone();
        for ship in self.ships(player) {
            awaiting.take(ship.length());
        }
        awaiting
    }

    /// Check whether a ship of `length` fits at (`x`, `y`) on `grid` without
    /// leaving it or crossing another ship.
    pub fn validate_placement(
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
        grid: &DataGrid<Tile>,
    ) -> Result<(), GameError> {
        if length < 1 {
            return Err(PlacementError::InvalidLength { length }.into());
        }
        let columns = grid.column_count();
        if x >= columns || (orientation == Orientation::Landscape && length > columns - x) {
            return Err(GameError::InvalidPlacement(PlacementError::OutOfBounds));
        }
        let rows = grid.row_count();
        if y >= rows || (orientation == Orientation::Portrait && length > rows - y) {
            return Err(GameError::InvalidPlacement(PlacementError::OutOfBounds));
        }
        for (cx, cy) in ship::coordinates(x, y, length, orientation) {
            if grid.get(cx, cy).is_some_and(Tile::is_occupied) {
                return Err(PlacementError::Overlap { x: cx, y: cy }.into());
            }
        }
        Ok(())
    }

    /// Place a ship on the active player's grid.
    pub fn place_ship(
        &mut self,
        x: usize,
        y: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<&mut Self, GameError> {
        if self.state() > Phase::Placing {
            return Err(GameError::GameAlreadyStarted);
        }
        let player = self.active_player();
        if self.ships_awaiting_placement(player).get(length) < 1 {
            return Err(GameError::NoShipAvailable { length });
        }
        let slot = player.index();
        Self::validate_placement(x, y, length, orientation, &self.grids[slot])?;
        let ship = Ship::new(x, y, length, orientation, &self.grids[slot])?;

        let id = ShipId(self.fleets[slot].len());
        for (cx, cy) in ship.coordinates() {
            self.grids[slot].set(cx, cy, Tile::new(cx, cy, Some(id)))?;
        }
        self.fleets[slot].push(ship);
        debug!(
            "{} placed a {}-ship at ({}, {}) {}",
            player, length, x, y, orientation
        );

        if self.phase < Phase::Placing {
            self.phase = Phase::Placing;
        }
        Ok(self)
    }

    /// Begin shooting once both fleets are complete. Player one fires first.
    pub fn start(&mut self) -> Result<&mut Self, GameError> {
        if self.state() > Phase::Placing {
            return Err(GameError::GameAlreadyStarted);
        }
        if !self.ships_awaiting_placement(Player::One).is_empty()
            || !self.ships_awaiting_placement(Player::Two).is_empty()
        {
            return Err(GameError::FleetIncomplete);
        }
        self.active = Player::One;
        self.phase = Phase::InProgress;
        info!(
            "game started on a {}x{} grid with fleet {}",
            self.columns(),
            self.rows(),
            self.composition
        );
        Ok(self)
    }

    /// Fire at (`x`, `y`) on the inactive player's grid. Returns `true` on a
    /// hit.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<bool, GameError> {
        self.fire(x, y).map(ShotOutcome::is_hit)
    }

    /// Fire at (`x`, `y`) and report whether the shot missed, hit or sank a
    /// ship.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameAlreadyWon { winner });
        }
        if self.state() < Phase::InProgress {
            return Err(GameError::GameNotStarted);
        }
        let shooter = self.active_player();
        if self.last_to_shoot == Some(shooter) {
            return Err(GameError::OutOfTurn);
        }
        let target = shooter.opponent().index();
        let grid = &mut self.grids[target];
        match grid.get(x, y) {
            Some(tile) if tile.is_shot() => return Err(GameError::AlreadyShot { x, y }),
            Some(_) => {}
            None => grid.set(x, y, Tile::new(x, y, None))?,
        }
        let ship = match grid.get_mut(x, y) {
            Some(tile) => tile.shoot().ship(),
            None => None,
        };
        self.last_to_shoot = Some(shooter);

        let Some(id) = ship else {
            debug!("{} missed at ({}, {})", shooter, x, y);
            return Ok(ShotOutcome::Miss);
        };
        let grid = &self.grids[target];
        let fleet = &self.fleets[target];
        let sunk = fleet.get(id.0).is_some_and(|s| s.is_sunk(grid));
        debug!("{} hit at ({}, {}), sunk: {}", shooter, x, y, sunk);
        if fleet.iter().all(|s| s.is_sunk(grid)) {
            self.winner = Some(shooter);
            info!("{} sank the last ship and wins", shooter);
        }
        Ok(if sunk {
            ShotOutcome::Sunk(id)
        } else {
            ShotOutcome::Hit
        })
    }

    /// Shots, hits and kills by `player`, derived from the opponent's grid
    /// and fleet.
    pub fn score(&self, player: Player) -> Score {
        let target = player.opponent();
        let grid = self.grid(target);
        let mut score = Score::default();
        for (_, tile) in grid.iter().filter(|(_, t)| t.is_shot()) {
            score.shots += 1;
            if tile.is_occupied() {
                score.hits += 1;
            }
        }
        score.kills = self
            .ships(target)
            .iter()
            .filter(|s| s.is_sunk(grid))
            .count();
        score
    }

    /// Returns a random legal origin and orientation for a ship of `length`
    /// on the active player's grid.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), GameError> {
        let (columns, rows) = (self.columns(), self.rows());
        let grid = self.active_player_grid();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            };
            let (max_x, max_y) = match orientation {
                Orientation::Landscape => (columns.checked_sub(length), Some(rows - 1)),
                Orientation::Portrait => (Some(columns - 1), rows.checked_sub(length)),
            };
            let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
                continue;
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if Self::validate_placement(x, y, length, orientation, grid).is_ok() {
                return Ok((x, y, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip { length })
    }

    /// Place every ship the active player still owes at random positions,
    /// longest first.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<&mut Self, GameError> {
        let awaiting = self.ships_awaiting_placement(self.active_player());
        let mut lengths: Vec<usize> = awaiting
            .iter()
            .flat_map(|(length, count)| core::iter::repeat(length).take(count))
            .collect();
        lengths.reverse();
        for length in lengths {
            let (x, y, orientation) = self.random_placement(rng, length)?;
            self.place_ship(x, y, length, orientation)?;
        }
        Ok(self)
    }
}

impl Default for Game {
    /// A 5×5 game with the default fleet.
    fn default() -> Self {
        Self::with_dimensions(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

#[cfg(test)]
impl Game {
    /// Default game forced into `phase`, for exercising guards that are hard
    /// to reach through play. A won game is built with `won_by`.
    pub(crate) fn with_phase(phase: Phase) -> Self {
        assert_ne!(phase, Phase::Won);
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Default game already won by `winner`, mid-shooting.
    pub(crate) fn won_by(winner: Player) -> Self {
        Self {
            winner: Some(winner),
            ..Self::with_phase(Phase::InProgress)
        }
    }
}
