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

//! Shot resolution against a single defending player.
use crate::{
    board::{Coordinate, ShotMark},
    player::Party,
    ships::VesselId,
};

/// What a shot found on the defender's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot struck a vessel. `sunk` is set when it was the vessel's last cell.
    Hit { vessel: VesselId, sunk: bool },
    /// The shot uncovered a bonus planet; the attacker fires again.
    Bonus,
    /// Nothing was there.
    Miss,
}

impl ShotOutcome {
    /// Returns true if the attacker keeps the turn.
    pub fn grants_bonus(&self) -> bool {
        *self == ShotOutcome::Bonus
    }

    /// Returns true if the shot sank a vessel.
    pub fn sunk(&self) -> bool {
        matches!(self, ShotOutcome::Hit { sunk: true, .. })
    }

    /// Mark recorded on the defender's board for this outcome.
    pub fn mark(&self) -> ShotMark {
        match self {
            ShotOutcome::Hit { .. } => ShotMark::Hit,
            ShotOutcome::Bonus => ShotMark::BonusFound,
            ShotOutcome::Miss => ShotMark::Miss,
        }
    }
}

/// Work out what a shot at `coord` would do to `defender` without changing anything.
///
/// Vessels are checked before bonus planets. Placement never puts both on one cell, so
/// the order only matters for readability.
pub fn resolve(defender: &Party, coord: Coordinate) -> ShotOutcome {
    if let Some((vessel, ship)) = defender
        .vessels()
        .iter()
        .enumerate()
        .find(|(_, ship)| ship.occupies(&coord))
    {
        ShotOutcome::Hit {
            vessel,
            sunk: ship.remaining_len() == 1,
        }
    } else if defender.board().is_bonus(&coord) && !defender.board().is_revealed(&coord) {
        ShotOutcome::Bonus
    } else {
        ShotOutcome::Miss
    }
}
