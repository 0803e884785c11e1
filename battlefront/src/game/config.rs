// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Match configuration and its validation.
use thiserror::Error;

use crate::board::Dimensions;

/// Smallest allowed board side.
pub const MIN_BOARD_SIZE: usize = 5;

/// Smallest allowed fleet.
pub const MIN_VESSELS: usize = 5;

/// Largest fleet for a board with `size` cells per side: 30% of the cells, rounded down.
/// Returns `None` if the computation overflows.
pub fn max_vessels(size: usize) -> Option<usize> {
    size.checked_mul(size)
        .and_then(|cells| cells.checked_mul(3))
        .map(|n| n / 10)
}

/// Reason a match configuration was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("board size must be at least {}, got {0}", MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
    #[error("board size {0} is too large")]
    BoardTooLarge(usize),
    #[error("at least {} vessels are required, got {0}", MIN_VESSELS)]
    TooFewVessels(usize),
    #[error("at most {max} vessels fit on this board, got {count}")]
    TooManyVessels { count: usize, max: usize },
    #[error("{count} bonus tiles do not fit in the {free} cells left free")]
    TooManyBonusTiles { count: usize, free: usize },
}

/// Validated settings for a match. Both players use the same board size and fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MatchConfig {
    size: usize,
    vessel_count: usize,
    bonus_tiles: usize,
}

impl MatchConfig {
    /// Configure a match on a `size` x `size` board with `vessel_count` vessels per
    /// player and one bonus tile per row.
    pub fn new(size: usize, vessel_count: usize) -> Result<Self, ConfigError> {
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(size));
        }
        let max = max_vessels(size).ok_or(ConfigError::BoardTooLarge(size))?;
        if vessel_count < MIN_VESSELS {
            return Err(ConfigError::TooFewVessels(vessel_count));
        }
        if vessel_count > max {
            return Err(ConfigError::TooManyVessels {
                count: vessel_count,
                max,
            });
        }
        Self {
            size,
            vessel_count,
            bonus_tiles: 0,
        }
        .with_bonus_tiles(size)
    }

    /// Change the number of bonus tiles on each board.
    pub fn with_bonus_tiles(mut self, count: usize) -> Result<Self, ConfigError> {
        let free = self.size * self.size - self.vessel_count;
        if count > free {
            return Err(ConfigError::TooManyBonusTiles { count, free });
        }
        self.bonus_tiles = count;
        Ok(self)
    }

    /// Length of one side of each board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of vessels each player places.
    pub fn vessel_count(&self) -> usize {
        self.vessel_count
    }

    /// Number of bonus tiles on each board.
    pub fn bonus_tiles(&self) -> usize {
        self.bonus_tiles
    }

    /// Dimensions of each board.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_bounds() {
        assert_eq!(max_vessels(5), Some(7));
        assert_eq!(max_vessels(10), Some(30));
        assert!(MatchConfig::new(5, 7).is_ok());
        assert_eq!(
            MatchConfig::new(5, 8),
            Err(ConfigError::TooManyVessels { count: 8, max: 7 })
        );
        assert_eq!(MatchConfig::new(6, 4), Err(ConfigError::TooFewVessels(4)));
        assert_eq!(MatchConfig::new(4, 5), Err(ConfigError::BoardTooSmall(4)));
        assert_eq!(
            MatchConfig::new(usize::max_value(), 5),
            Err(ConfigError::BoardTooLarge(usize::max_value()))
        );
    }

    #[test]
    fn bonus_tiles_default_to_board_size() {
        let config = MatchConfig::new(8, 10).unwrap();
        assert_eq!(config.bonus_tiles(), 8);
        assert_eq!(config.with_bonus_tiles(54).unwrap().bonus_tiles(), 54);
        assert_eq!(
            config.with_bonus_tiles(55),
            Err(ConfigError::TooManyBonusTiles { count: 55, free: 54 })
        );
    }
}
