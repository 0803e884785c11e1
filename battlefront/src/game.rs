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

//! The match engine: setup of both players, shot resolution, turn order and the end of
//! the match.
//!
//! [`MatchSetup`] collects both players' fleets. Once both fleets are complete,
//! [`MatchSetup::start`] scatters the bonus planets and hands back a [`Match`], which
//! resolves shots one at a time with [`Match::fire`] or plays out whole matches through
//! the seams in [`driver`].

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    board::{CannotShootReason, Coordinate, ShotError},
    player::{Controller, Party, Player},
    ships::HitResult,
    targeting::TargetingStrategy,
};

pub use self::{
    config::{max_vessels, ConfigError, MatchConfig, MIN_BOARD_SIZE, MIN_VESSELS},
    driver::{CoordinateSource, EventSink, GameEvent, Rejection, Request},
    resolve::{resolve, ShotOutcome},
};

mod config;
pub mod driver;
mod resolve;

/// Builder for a [`Match`]. By default `P1` is a human called "Player" who fires first
/// and `P2` is the automated "Computer".
#[derive(Debug, Clone)]
pub struct MatchSetup {
    config: MatchConfig,
    parties: [Party; 2],
    first: Player,
}

impl MatchSetup {
    /// Begin setup of a match with the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        let party = |id, name: &str, controller| {
            Party::new(
                id,
                name,
                controller,
                config.size(),
                config.vessel_count(),
            )
        };
        Self {
            config,
            parties: [
                party(Player::P1, "Player", Controller::Human),
                party(Player::P2, "Computer", Controller::Automated),
            ],
            first: Player::P1,
        }
    }

    /// Rename a player.
    pub fn with_name<S: Into<String>>(mut self, player: Player, name: S) -> Self {
        self.parties[player.index()].set_name(name.into());
        self
    }

    /// Change who chooses a player's targets.
    pub fn with_controller(mut self, player: Player, controller: Controller) -> Self {
        self.parties[player.index()].set_controller(controller);
        self
    }

    /// Choose which player fires first.
    pub fn with_first(mut self, first: Player) -> Self {
        self.first = first;
        self
    }

    /// The configuration this match was set up with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The player who will fire first.
    pub fn first(&self) -> Player {
        self.first
    }

    /// Get the given player.
    pub fn party(&self, player: Player) -> &Party {
        &self.parties[player.index()]
    }

    /// Mutably get the given player, to place their vessels.
    pub fn party_mut(&mut self, player: Player) -> &mut Party {
        &mut self.parties[player.index()]
    }

    /// Checks if both fleets are complete and there is room left for the bonus planets.
    pub fn ready(&self) -> bool {
        let bonus = self.config.bonus_tiles();
        self.parties.iter().all(|party| {
            let board = party.board();
            party.ready()
                && bonus.saturating_sub(board.bonus_tiles().len()) <= board.free_count()
        })
    }

    /// Tries to start the match. If both players are ready, scatters the bonus planets
    /// over both boards and returns the [`Match`]. Otherwise returns self.
    pub fn start<R, T>(mut self, rng: &mut R, targeting: T) -> Result<Match<T>, Self>
    where
        R: Rng + ?Sized,
        T: TargetingStrategy,
    {
        if !self.ready() {
            return Err(self);
        }
        let bonus = self.config.bonus_tiles();
        for party in self.parties.iter_mut() {
            party.board_mut().place_bonus_tiles(rng, bonus);
        }
        info!(
            "match started on a {0}x{0} board with {1} vessels and {2} bonus tiles each",
            self.config.size(),
            self.config.vessel_count(),
            bonus
        );
        Ok(Match {
            config: self.config,
            parties: self.parties,
            attacker: self.first,
            first: self.first,
            turns_elapsed: 0,
            outcome: Outcome::InProgress,
            targeting,
        })
    }
}

/// Whether the match is still being played.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    InProgress,
    Won(Player),
}

/// Description of one resolved shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotReport {
    /// Player who fired.
    pub attacker: Player,
    /// Cell that was fired at.
    pub coord: Coordinate,
    /// What the shot found.
    pub outcome: ShotOutcome,
    /// Number of shots resolved in the match so far, including this one.
    pub turn: usize,
    /// Player who fires next, or the winner if this shot ended the match.
    pub next: Player,
    /// Set when this shot ended the match.
    pub winner: Option<Player>,
}

/// Final (or current) score of a match.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchSummary {
    /// The winner, if the match was decided.
    pub winner: Option<Player>,
    /// Name of the winner.
    pub winner_name: Option<String>,
    /// Vessels destroyed by the winner, or by the player to move if undecided.
    pub destroyed: usize,
    /// Vessels each player placed.
    pub placed: usize,
    /// Shots resolved, bonus shots included.
    pub turns: usize,
}

/// A match in progress between two players.
#[derive(Debug)]
pub struct Match<T> {
    config: MatchConfig,
    parties: [Party; 2],

    /// Player whose turn it currently is.
    attacker: Player,
    first: Player,

    turns_elapsed: usize,
    outcome: Outcome,

    /// Chooses targets for automated players.
    targeting: T,
}

impl<T: TargetingStrategy> Match<T> {
    /// The configuration of this match.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get the given player.
    pub fn party(&self, player: Player) -> &Party {
        &self.parties[player.index()]
    }

    /// Player whose turn it currently is.
    pub fn attacker(&self) -> Player {
        self.attacker
    }

    /// Player being fired upon this turn.
    pub fn defender(&self) -> Player {
        self.attacker.opponent()
    }

    /// Number of shots resolved so far.
    pub fn turns_elapsed(&self) -> usize {
        self.turns_elapsed
    }

    /// Whether the match is still in progress.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get the winner of the match, if it is over.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won(player) => Some(player),
        }
    }

    /// Score of the match so far.
    pub fn summary(&self) -> MatchSummary {
        let scorer = self.winner().unwrap_or(self.attacker);
        MatchSummary {
            winner: self.winner(),
            winner_name: self.winner().map(|p| self.party(p).name().to_owned()),
            destroyed: self.party(scorer).ships_destroyed(),
            placed: self.config.vessel_count(),
            turns: self.turns_elapsed,
        }
    }

    /// Fire the current attacker's shot at `coord` on the defender's board.
    ///
    /// A cell counts as already targeted if the attacker fired at it before or the
    /// defender's board already shows it. Rejected shots change nothing.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotReport, ShotError> {
        if self.outcome != Outcome::InProgress {
            return Err(ShotError::new(CannotShootReason::AlreadyOver, coord));
        }
        if !self.config.dimensions().contains(&coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        let attacker = self.attacker;
        let defender = attacker.opponent();
        if self.party(defender).board().is_revealed(&coord) {
            return Err(ShotError::new(CannotShootReason::DuplicateGuess, coord));
        }
        self.parties[attacker.index()].record_guess(coord)?;

        let outcome = resolve(self.party(defender), coord);
        self.apply(attacker, coord, outcome);
        self.turns_elapsed += 1;
        debug!(
            "turn {}: {:?} fired at {}: {:?}",
            self.turns_elapsed, attacker, coord, outcome
        );

        if !outcome.grants_bonus() {
            if self.party(defender).defeated() {
                info!(
                    "{:?} won after {} turns",
                    attacker, self.turns_elapsed
                );
                self.outcome = Outcome::Won(attacker);
            } else {
                self.attacker = defender;
            }
        }
        Ok(ShotReport {
            attacker,
            coord,
            outcome,
            turn: self.turns_elapsed,
            next: self.attacker,
            winner: self.winner(),
        })
    }

    /// Apply a resolved shot to both players.
    fn apply(&mut self, attacker: Player, coord: Coordinate, outcome: ShotOutcome) {
        let defender = &mut self.parties[attacker.opponent().index()];
        if let ShotOutcome::Hit { vessel, sunk } = outcome {
            let result = defender.vessel_mut(vessel).map(|v| v.register_hit(&coord));
            debug_assert_eq!(result == Some(HitResult::JustSunk), sunk);
        }
        defender.board_mut().reveal(coord, outcome.mark());
        if outcome.sunk() {
            self.parties[attacker.index()].credit_sunk_vessel();
        }
    }

    /// Ask the targeting strategy where the current attacker should fire.
    pub fn automated_target(&mut self) -> Option<Coordinate> {
        let board = self.parties[self.defender().index()].board();
        self.targeting.select_target(board.size(), board.revealed())
    }

    /// Play the match until it is decided. Human players' shots come from `source`, and
    /// rejected shots are reported back to it and requested again. Automated players
    /// use the targeting strategy. Every resolved shot is sent to `sink`.
    pub fn play<S, E>(&mut self, source: &mut S, sink: &mut E) -> Result<MatchSummary, S::Error>
    where
        S: CoordinateSource + ?Sized,
        E: EventSink + ?Sized,
    {
        if self.turns_elapsed == 0 && self.outcome == Outcome::InProgress {
            sink.notify(&GameEvent::MatchStarted { first: self.first });
        }
        while self.outcome == Outcome::InProgress {
            let attacker = self.party(self.attacker);
            let report = match attacker.controller() {
                Controller::Human => {
                    let request = Request::Shot {
                        player: attacker.id(),
                        name: attacker.name(),
                        own: attacker.board(),
                        target: self.party(self.defender()).board(),
                    };
                    let coord = source.request_coordinate(&request)?;
                    match self.fire(coord) {
                        Ok(report) => report,
                        Err(err) => {
                            debug!("rejected shot: {}", err);
                            source.rejected(coord, Rejection::Shot(err.reason()));
                            continue;
                        }
                    }
                }
                Controller::Automated => {
                    match self.automated_target().map(|coord| self.fire(coord)) {
                        Some(Ok(report)) => report,
                        Some(Err(err)) => {
                            warn!("targeting picked an invalid cell: {}", err);
                            break;
                        }
                        None => {
                            warn!("no cell left to target for {:?}", self.attacker);
                            break;
                        }
                    }
                }
            };
            sink.notify(&GameEvent::Shot(report));
        }
        let summary = self.summary();
        sink.notify(&GameEvent::MatchOver(summary.clone()));
        Ok(summary)
    }
}
