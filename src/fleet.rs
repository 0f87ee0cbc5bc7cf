//! Fleet composition: how many ships of each length every player places.

use alloc::collections::BTreeMap;
use core::fmt;
use core::str::FromStr;

use crate::common::FleetError;
use crate::config::{DEFAULT_FLEET, MIN_SHIP_LENGTH};

/// Map from ship length to the number of ships of that length per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetComposition {
    ships: BTreeMap<usize, usize>,
}

impl FleetComposition {
    /// An empty composition. Not valid for a game on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `length`, replacing any previous entry.
    pub fn with(mut self, length: usize, count: usize) -> Self {
        self.ships.insert(length, count);
        self
    }

    /// Number of ships of `length`; 0 when absent.
    pub fn get(&self, length: usize) -> usize {
        self.ships.get(&length).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// `(length, count)` pairs, shortest ships first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ships.iter().map(|(&l, &c)| (l, c))
    }

    /// Total number of ships per player, saturating at `usize::MAX`.
    pub fn total_ships(&self) -> usize {
        self.ships
            .values()
            .fold(0usize, |total, &count| total.saturating_add(count))
    }

    /// Grid cells covered by one player's complete fleet, saturating at
    /// `usize::MAX`.
    pub fn covered_cells(&self) -> usize {
        self.iter().fold(0usize, |total, (length, count)| {
            total.saturating_add(length.saturating_mul(count))
        })
    }

    /// Remove one ship of `length`, dropping the entry once it reaches zero.
    pub(crate) fn take(&mut self, length: usize) {
        if let Some(count) = self.ships.get_mut(&length) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.ships.remove(&length);
            }
        }
    }

    /// Check the composition against a `columns` × `rows` grid.
    pub fn validate(&self, columns: usize, rows: usize) -> Result<(), FleetError> {
        if self.is_empty() {
            return Err(FleetError::Empty);
        }
        for (length, count) in self.iter() {
            if length == 0 || count == 0 {
                return Err(FleetError::NonPositive { length, count });
            }
            if length < MIN_SHIP_LENGTH {
                return Err(FleetError::ShipTooShort { length });
            }
            if length > columns && length > rows {
                return Err(FleetError::ShipTooLong { length });
            }
        }
        let covered = self.covered_cells();
        let area = columns.saturating_mul(rows);
        if covered >= area {
            return Err(FleetError::CoversGrid { covered, area });
        }
        Ok(())
    }
}

impl FromIterator<(usize, usize)> for FleetComposition {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        FleetComposition {
            ships: iter.into_iter().collect(),
        }
    }
}

/// The standard fleet: one ship each of length 2, 3 and 4.
pub fn default_fleet() -> FleetComposition {
    DEFAULT_FLEET.iter().copied().collect()
}

impl FromStr for FleetComposition {
    type Err = FleetError;

    /// Parse `"2:1,3:2"` style text. Whitespace around entries is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fleet = FleetComposition::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (length, count) = entry.split_once(':').ok_or(FleetError::Malformed)?;
            let length = length.trim().parse().map_err(|_| FleetError::Malformed)?;
            let count = count.trim().parse().map_err(|_| FleetError::Malformed)?;
            fleet = fleet.with(length, count);
        }
        Ok(fleet)
    }
}

impl fmt::Display for FleetComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (length, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", length, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let fleet: FleetComposition = " 4:1, 2:2 ,3:1".parse().unwrap();
        assert_eq!(fleet.get(2), 2);
        assert_eq!(fleet.covered_cells(), 11);
        assert_eq!(fleet.to_string(), "2:2,3:1,4:1");
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(
            "foo:bar".parse::<FleetComposition>().unwrap_err(),
            FleetError::Malformed
        );
        assert_eq!(
            "-2:1".parse::<FleetComposition>().unwrap_err(),
            FleetError::Malformed
        );
    }

    #[test]
    fn huge_counts_saturate() {
        let fleet = FleetComposition::new().with(2, usize::MAX).with(3, 1);
        assert_eq!(fleet.covered_cells(), usize::MAX);
        assert_eq!(fleet.total_ships(), usize::MAX);
    }

    #[test]
    fn take_drops_exhausted_lengths() {
        let mut fleet = default_fleet();
        fleet.take(3);
        assert_eq!(fleet, FleetComposition::new().with(2, 1).with(4, 1));
        fleet.take(7);
        assert_eq!(fleet.total_ships(), 2);
    }

    #[test]
    fn validation_rules() {
        assert_eq!(FleetComposition::new().validate(5, 5), Err(FleetError::Empty));
        assert_eq!(
            FleetComposition::new().with(3, 0).validate(5, 5),
            Err(FleetError::NonPositive { length: 3, count: 0 })
        );
        assert_eq!(
            FleetComposition::new().with(1, 2).validate(5, 5),
            Err(FleetError::ShipTooShort { length: 1 })
        );
        assert_eq!(
            FleetComposition::new().with(12, 1).validate(10, 10),
            Err(FleetError::ShipTooLong { length: 12 })
        );
        // Fits along the longer axis only.
        assert!(FleetComposition::new().with(7, 1).validate(5, 7).is_ok());
        assert_eq!(
            FleetComposition::new().with(5, 5).validate(5, 5),
            Err(FleetError::CoversGrid { covered: 25, area: 25 })
        );
    }
}
