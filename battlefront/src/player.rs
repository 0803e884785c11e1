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

//! Players and the setup of their fleets.
use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::{
    board::{Board, CannotPlaceReason, CannotShootReason, Coordinate, PlaceError, ShotError},
    game::{CoordinateSource, Rejection, Request},
    ships::{Vessel, VesselId},
};

/// Seat of a player in a match. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

/// Who picks the targets for a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Controller {
    /// Targets come from a [`CoordinateSource`].
    Human,
    /// Targets come from the match's targeting strategy.
    Automated,
}

/// One side of a match: a board, the fleet placed on it, and the record of shots this
/// player has fired at the opponent.
#[derive(Debug, Clone)]
pub struct Party {
    id: Player,
    name: String,
    controller: Controller,
    board: Board,

    /// Vessels placed so far, indexed by [`VesselId`].
    vessels: Vec<Vessel>,

    /// Number of vessels this player must place.
    vessel_count: usize,

    /// Coordinates this player has already fired at on the opponent's board.
    fired_at: HashSet<Coordinate>,

    ships_destroyed: usize,
    hits_scored: usize,
}

impl Party {
    /// Create a player with an empty board of `size` cells per side who must place
    /// `vessel_count` vessels.
    pub fn new<S: Into<String>>(
        id: Player,
        name: S,
        controller: Controller,
        size: usize,
        vessel_count: usize,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
            board: Board::new(size),
            vessels: Vec::with_capacity(vessel_count),
            vessel_count,
            fired_at: HashSet::new(),
            ships_destroyed: 0,
            hits_scored: 0,
        }
    }

    /// Seat of this player.
    pub fn id(&self) -> Player {
        self.id
    }

    /// Display name of this player.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Who chooses this player's targets.
    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub(crate) fn set_controller(&mut self, controller: Controller) {
        self.controller = controller;
    }

    /// This player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Vessels placed so far.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub(crate) fn vessel_mut(&mut self, id: VesselId) -> Option<&mut Vessel> {
        self.vessels.get_mut(id)
    }

    /// Number of vessels this player places in total.
    pub fn vessel_count(&self) -> usize {
        self.vessel_count
    }

    /// Number of vessels still to be placed.
    pub fn pending_vessels(&self) -> usize {
        self.vessel_count.saturating_sub(self.vessels.len())
    }

    /// Returns true once every vessel has been placed.
    pub fn ready(&self) -> bool {
        self.pending_vessels() == 0
    }

    /// Number of vessels still afloat.
    pub fn vessels_afloat(&self) -> usize {
        self.vessels.iter().filter(|v| !v.destroyed()).count()
    }

    /// Returns true if every one of this player's vessels has been destroyed.
    pub fn defeated(&self) -> bool {
        self.vessels.iter().all(Vessel::destroyed)
    }

    /// Coordinates this player has fired at.
    pub fn fired_at(&self) -> &HashSet<Coordinate> {
        &self.fired_at
    }

    /// Returns true if this player has already fired at `coord`.
    pub fn has_fired_at(&self, coord: &Coordinate) -> bool {
        self.fired_at.contains(coord)
    }

    /// Number of enemy vessels this player has destroyed.
    pub fn ships_destroyed(&self) -> usize {
        self.ships_destroyed
    }

    /// Score of this player. One point is awarded per enemy vessel destroyed.
    pub fn hits_scored(&self) -> usize {
        self.hits_scored
    }

    pub(crate) fn credit_sunk_vessel(&mut self) {
        self.ships_destroyed += 1;
        self.hits_scored += 1;
    }

    /// Check whether a new vessel could be placed on the given cells.
    pub fn validate_placement(&self, coords: &[Coordinate]) -> Result<(), CannotPlaceReason> {
        if self.ready() {
            return Err(CannotPlaceReason::FleetComplete);
        }
        self.board.validate_placement(coords)
    }

    /// Place a new vessel on the given cells, returning its id. If the placement is
    /// rejected, nothing changes and the coordinates are handed back in the error.
    pub fn add_vessel(
        &mut self,
        coords: Vec<Coordinate>,
    ) -> Result<VesselId, PlaceError<Vec<Coordinate>>> {
        if let Err(reason) = self.validate_placement(&coords) {
            return Err(PlaceError::new(reason, coords));
        }
        let id = self.vessels.len();
        if let Err(reason) = self.board.place_vessel(id, &coords) {
            return Err(PlaceError::new(reason, coords));
        }
        self.vessels.push(Vessel::new(self.id, coords));
        Ok(id)
    }

    /// Put a bonus planet on a specific free cell of this player's board.
    pub fn place_bonus_tile(&mut self, coord: Coordinate) -> Result<(), CannotPlaceReason> {
        self.board.place_bonus_tile(coord)
    }

    /// Place every remaining vessel on a single cell chosen by `source`. Rejected cells
    /// are reported back to the source and requested again.
    pub fn place_vessels_manually<S: CoordinateSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), S::Error> {
        while !self.ready() {
            let request = Request::PlaceVessel {
                player: self.id,
                name: &self.name,
                vessel: self.vessels.len() + 1,
                total: self.vessel_count,
                board: &self.board,
            };
            let coord = source.request_coordinate(&request)?;
            if let Err(err) = self.add_vessel(vec![coord]) {
                debug!("{} rejected placement at {}: {}", self.name, coord, err);
                source.rejected(coord, Rejection::Place(err.reason()));
            }
        }
        Ok(())
    }

    /// Place every remaining vessel on a single, uniformly chosen free cell. Returns the
    /// cells that were used.
    pub fn place_vessels_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Coordinate> {
        let cells = self.board.dimensions().coordinates();
        let mut placed = Vec::with_capacity(self.pending_vessels());
        while !self.ready() {
            let coord = rng.sample(&cells);
            if self.add_vessel(vec![coord]).is_ok() {
                placed.push(coord);
            }
        }
        debug!("{} placed vessels randomly at {:?}", self.name, placed);
        placed
    }

    /// Remember that this player fired at `coord`. Fails with
    /// [`CannotShootReason::DuplicateGuess`] without changing anything if it already
    /// did.
    pub fn record_guess(&mut self, coord: Coordinate) -> Result<(), ShotError> {
        if self.fired_at.insert(coord) {
            Ok(())
        } else {
            Err(ShotError::new(CannotShootReason::DuplicateGuess, coord))
        }
    }
}
