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

//! Errors used by the [`Board`][crate::board::Board] and the players placing and
//! shooting on it.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a vessel could not be placed on the given coordinates.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the coordinates lies outside the board.
    #[error("the requested position is outside the board")]
    OutOfBounds,
    /// One or more of the cells already holds a vessel or a bonus tile.
    #[error("the requested position was already occupied")]
    OccupiedCell,
    /// The same coordinate was listed twice for one vessel.
    #[error("the same cell was chosen twice for one vessel")]
    DuplicateCoordinate,
    /// A vessel must occupy at least one cell.
    #[error("a vessel needs at least one cell")]
    Empty,
    /// Every vessel the player is allowed has already been placed.
    #[error("all vessels have already been placed")]
    FleetComplete,
}

/// Error caused when attempting to place a vessel in an invalid position. Hands the
/// rejected placement back to the caller.
#[derive(Error)]
#[error("could not place vessel: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    placement: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason and the rejected placement.
    pub(crate) fn new(reason: CannotPlaceReason, placement: P) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the placement that was attempted.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Extract the placement from this error.
    pub fn into_placement(self) -> P {
        self.placement
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The match has already been decided.
    #[error("the match is already over")]
    AlreadyOver,

    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,

    /// The attacker already fired at that cell.
    #[error("that cell was already targeted")]
    DuplicateGuess,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
