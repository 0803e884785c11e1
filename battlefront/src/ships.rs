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

//! Vessels and the bookkeeping of their remaining cells.
use std::collections::HashSet;

use crate::{board::Coordinate, player::Player};

/// Index of a vessel within its owner's fleet.
pub type VesselId = usize;

/// Result of registering a hit against a single vessel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HitResult {
    /// The vessel was hit and still has cells left.
    StillAfloat,
    /// The vessel lost its last cell with this hit.
    JustSunk,
    /// The vessel does not (or no longer) occupy the coordinate.
    NotApplicable,
}

/// A destructible unit occupying one or more cells of its owner's board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// Player that placed this vessel.
    owner: Player,

    /// Cells of this vessel which have not been hit yet.
    remaining: HashSet<Coordinate>,

    /// Number of cells the vessel started with.
    len: usize,
}

impl Vessel {
    /// Create a vessel for `owner` covering the given cells. Duplicate coordinates are
    /// collapsed. Panics if `coords` is empty.
    pub fn new<I: IntoIterator<Item = Coordinate>>(owner: Player, coords: I) -> Self {
        let remaining: HashSet<_> = coords.into_iter().collect();
        assert!(!remaining.is_empty(), "a vessel needs at least one cell");
        Self {
            owner,
            len: remaining.len(),
            remaining,
        }
    }

    /// The player that owns this vessel.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Number of cells the vessel occupied when placed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Cells that have not been hit yet.
    pub fn remaining(&self) -> impl '_ + Iterator<Item = &Coordinate> {
        self.remaining.iter()
    }

    /// Number of cells that have not been hit yet.
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns true if the vessel still has an unhit cell at `coord`.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.remaining.contains(coord)
    }

    /// A vessel is destroyed once every one of its cells has been hit.
    pub fn destroyed(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remove `coord` from the vessel's remaining cells.
    pub fn register_hit(&mut self, coord: &Coordinate) -> HitResult {
        if !self.remaining.remove(coord) {
            HitResult::NotApplicable
        } else if self.remaining.is_empty() {
            HitResult::JustSunk
        } else {
            HitResult::StillAfloat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinks_exactly_once() {
        let mut vessel = Vessel::new(
            Player::P1,
            vec![Coordinate::new(0, 0), Coordinate::new(0, 1)],
        );
        assert_eq!(vessel.len(), 2);
        assert_eq!(
            vessel.register_hit(&Coordinate::new(3, 3)),
            HitResult::NotApplicable
        );
        assert_eq!(
            vessel.register_hit(&Coordinate::new(0, 0)),
            HitResult::StillAfloat
        );
        assert!(!vessel.destroyed());
        assert_eq!(
            vessel.register_hit(&Coordinate::new(0, 0)),
            HitResult::NotApplicable
        );
        assert_eq!(
            vessel.register_hit(&Coordinate::new(0, 1)),
            HitResult::JustSunk
        );
        assert!(vessel.destroyed());
        assert_eq!(
            vessel.register_hit(&Coordinate::new(0, 1)),
            HitResult::NotApplicable
        );
        assert_eq!(vessel.len(), 2);
    }

    #[test]
    #[should_panic]
    fn empty_vessel_panics() {
        Vessel::new(Player::P2, Vec::new());
    }
}
