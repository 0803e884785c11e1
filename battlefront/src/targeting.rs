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

//! Target selection for automated players.
use std::collections::HashSet;

use log::trace;
use rand::Rng;

use crate::board::{Coordinate, Dimensions};

/// Chooses where an automated player fires next.
pub trait TargetingStrategy {
    /// Pick a cell on a board of `size` cells per side that is not in `revealed`.
    /// Returns `None` only when every cell of the board has been revealed.
    fn select_target(&mut self, size: usize, revealed: &HashSet<Coordinate>)
        -> Option<Coordinate>;
}

impl<T: TargetingStrategy + ?Sized> TargetingStrategy for Box<T> {
    fn select_target(
        &mut self,
        size: usize,
        revealed: &HashSet<Coordinate>,
    ) -> Option<Coordinate> {
        (**self).select_target(size, revealed)
    }
}

/// Fires at a uniformly random unrevealed cell. Keeps no memory between shots and makes
/// no attempt to follow up on hits.
#[derive(Debug, Clone)]
pub struct UniformTargeting<R> {
    rng: R,
}

impl<R: Rng> UniformTargeting<R> {
    /// Create a strategy drawing from the given generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Extract the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> TargetingStrategy for UniformTargeting<R> {
    fn select_target(
        &mut self,
        size: usize,
        revealed: &HashSet<Coordinate>,
    ) -> Option<Coordinate> {
        let dim = Dimensions::try_new(size)?;
        let unrevealed = dim.total_size().saturating_sub(revealed.len());
        if unrevealed == 0 {
            return None;
        }
        let cells = dim.coordinates();
        loop {
            let coord = self.rng.sample(&cells);
            if !revealed.contains(&coord) {
                return Some(coord);
            }
            trace!("target {} already revealed, drawing again", coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn never_picks_revealed_cells() {
        let mut strategy = UniformTargeting::new(StdRng::seed_from_u64(5));
        let revealed: HashSet<_> = Dimensions::new(5)
            .iter_coordinates()
            .flatten()
            .filter(|c| (c.row + c.col) % 3 != 0)
            .collect();
        for _ in 0..1000 {
            let coord = strategy.select_target(5, &revealed).unwrap();
            assert!(!revealed.contains(&coord));
            assert!(coord.row < 5 && coord.col < 5);
        }
    }

    #[test]
    fn finds_the_last_open_cell() {
        let mut strategy = UniformTargeting::new(StdRng::seed_from_u64(9));
        let mut revealed: HashSet<_> = Dimensions::new(5).iter_coordinates().flatten().collect();
        revealed.remove(&Coordinate::new(3, 1));
        assert_eq!(
            strategy.select_target(5, &revealed),
            Some(Coordinate::new(3, 1))
        );
    }

    #[test]
    fn exhausted_board_yields_none() {
        let mut strategy = UniformTargeting::new(StdRng::seed_from_u64(9));
        let revealed: HashSet<_> = Dimensions::new(5).iter_coordinates().flatten().collect();
        assert_eq!(strategy.select_target(5, &revealed), None);
        assert_eq!(strategy.select_target(0, &HashSet::new()), None);
    }

    #[test]
    fn covers_every_open_cell_eventually() {
        let mut strategy = UniformTargeting::new(StdRng::seed_from_u64(1));
        let revealed = HashSet::new();
        let seen: HashSet<_> = (0..2000)
            .filter_map(|_| strategy.select_target(5, &revealed))
            .collect();
        assert_eq!(seen.len(), 25);
    }
}
