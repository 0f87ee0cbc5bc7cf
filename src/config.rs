/// Smallest legal extent of either grid axis.
pub const MIN_GRID_SIZE: usize = 5;
pub const DEFAULT_COLUMNS: usize = 5;
pub const DEFAULT_ROWS: usize = 5;

/// Shortest ship a fleet may contain.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Fleet used until `Game::set_fleet_composition` is called: `(length, count)`.
pub const DEFAULT_FLEET: [(usize, usize); 3] = [(2, 1), (3, 1), (4, 1)];

/// Give up on random placement of a single ship after this many tries.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "BATTLESHIPS_LOG";
