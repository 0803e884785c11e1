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

//! Seams between the engine and whatever collects input and presents the match.
use crate::{
    board::{Board, CannotPlaceReason, CannotShootReason, Coordinate},
    game::{MatchSummary, ShotReport},
    player::Player,
};

/// Context handed to a [`CoordinateSource`] along with each request. Boards are
/// included so the source can show them before asking.
#[derive(Debug, Copy, Clone)]
pub enum Request<'a> {
    /// Choose the cell for vessel number `vessel` out of `total`.
    PlaceVessel {
        player: Player,
        name: &'a str,
        vessel: usize,
        total: usize,
        board: &'a Board,
    },
    /// Choose a cell on the opponent's board to fire at.
    Shot {
        player: Player,
        name: &'a str,
        own: &'a Board,
        target: &'a Board,
    },
}

/// Why a coordinate supplied by a [`CoordinateSource`] was not accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    Place(CannotPlaceReason),
    Shot(CannotShootReason),
}

/// Supplies coordinates for human players, one per call. Blocks until a coordinate is
/// available. Errors abort whatever operation requested the coordinate.
pub trait CoordinateSource {
    type Error;

    /// Produce the next coordinate for the given request.
    fn request_coordinate(&mut self, request: &Request<'_>) -> Result<Coordinate, Self::Error>;

    /// Called when a coordinate returned by this source was rejected. The request will
    /// be repeated afterwards.
    fn rejected(&mut self, _coord: Coordinate, _reason: Rejection) {}
}

impl<S: CoordinateSource + ?Sized> CoordinateSource for &mut S {
    type Error = S::Error;

    fn request_coordinate(&mut self, request: &Request<'_>) -> Result<Coordinate, Self::Error> {
        (**self).request_coordinate(request)
    }

    fn rejected(&mut self, coord: Coordinate, reason: Rejection) {
        (**self).rejected(coord, reason)
    }
}

/// Notification emitted while a match is played.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameEvent {
    /// The first shot is about to be requested.
    MatchStarted { first: Player },
    /// A shot was resolved.
    Shot(ShotReport),
    /// A player lost their last vessel, or play could not continue.
    MatchOver(MatchSummary),
}

/// Receives [`GameEvent`]s. Formatting them is entirely up to the implementor.
pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

/// Collects every event, mostly useful for inspecting a finished match.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
