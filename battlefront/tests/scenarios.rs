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

use std::collections::VecDeque;

use battlefront::{
    board::{CannotPlaceReason, CannotShootReason, CellView, Coordinate, ShotMark},
    game::{
        CoordinateSource, GameEvent, MatchConfig, MatchSetup, Rejection, Request, ShotOutcome,
    },
    player::Player,
    targeting::UniformTargeting,
};
use rand::{rngs::StdRng, SeedableRng};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Plays back a fixed list of coordinates for every request and keeps what was asked.
#[derive(Default)]
struct Script {
    coords: VecDeque<Coordinate>,
    requests: Vec<String>,
    rejected: Vec<(Coordinate, Rejection)>,
}

impl Script {
    fn new<I: IntoIterator<Item = (usize, usize)>>(coords: I) -> Self {
        Self {
            coords: coords.into_iter().map(Coordinate::from).collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, PartialEq)]
struct OutOfInput;

impl CoordinateSource for Script {
    type Error = OutOfInput;

    fn request_coordinate(&mut self, request: &Request<'_>) -> Result<Coordinate, OutOfInput> {
        self.requests.push(match request {
            Request::PlaceVessel { vessel, total, .. } => format!("place {}/{}", vessel, total),
            Request::Shot { name, .. } => format!("shot {}", name),
        });
        self.coords.pop_front().ok_or(OutOfInput)
    }

    fn rejected(&mut self, coord: Coordinate, reason: Rejection) {
        self.rejected.push((coord, reason));
    }
}

/// 5x5 match. P1 holds vessels on a shifted diagonal with a planet at (4, 4); P2 holds
/// vessels on the main diagonal with a planet at (0, 4).
fn setup() -> MatchSetup {
    let config = MatchConfig::new(5, 5).unwrap().with_bonus_tiles(1).unwrap();
    let mut setup = MatchSetup::new(config).with_name(Player::P1, "Ada");
    let home = setup.party_mut(Player::P1);
    for i in 0..5 {
        home.add_vessel(vec![c(i, (i + 1) % 5)]).unwrap();
    }
    home.place_bonus_tile(c(4, 4)).unwrap();
    let away = setup.party_mut(Player::P2);
    for i in 0..5 {
        away.add_vessel(vec![c(i, i)]).unwrap();
    }
    away.place_bonus_tile(c(0, 4)).unwrap();
    setup
}

#[test]
fn vessel_at_center_sinks_and_passes_turn() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = setup()
        .start(&mut rng, UniformTargeting::new(StdRng::seed_from_u64(0)))
        .unwrap();

    let afloat = game.party(Player::P2).vessels_afloat();
    let report = game.fire(c(2, 2)).unwrap();
    assert_eq!(
        report.outcome,
        ShotOutcome::Hit {
            vessel: 2,
            sunk: true
        }
    );
    assert_eq!(game.party(Player::P2).vessels_afloat(), afloat - 1);
    assert_eq!(game.attacker(), Player::P2);
    assert_eq!(
        game.party(Player::P2).board().mark(&c(2, 2)),
        Some(ShotMark::Hit)
    );
}

#[test]
fn bonus_planet_grants_another_shot() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = setup()
        .start(&mut rng, UniformTargeting::new(StdRng::seed_from_u64(0)))
        .unwrap();

    let mut script = Script::new(vec![(0, 4), (3, 1)]);
    let mut events: Vec<GameEvent> = Vec::new();
    // P1 finds the planet, fires again and misses; P2 then fires; P1 runs out of input.
    assert_eq!(game.play(&mut script, &mut events), Err(OutOfInput));
    let shots: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Shot(report) => Some(*report),
            _ => None,
        })
        .collect();
    assert_eq!(shots[0].outcome, ShotOutcome::Bonus);
    assert_eq!(shots[0].next, Player::P1);
    assert_eq!(shots[1].attacker, Player::P1);
    assert_eq!(shots[1].outcome, ShotOutcome::Miss);
    assert_eq!(shots[2].attacker, Player::P2);
    assert_eq!(script.requests, vec!["shot Ada", "shot Ada", "shot Ada"]);
}

#[test]
fn repeated_target_is_rejected_and_asked_again() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = setup()
        .start(&mut rng, UniformTargeting::new(StdRng::seed_from_u64(0)))
        .unwrap();
    game.fire(c(4, 0)).unwrap();
    game.fire(c(4, 1)).unwrap();

    let revealed = game.party(Player::P2).board().revealed().clone();
    let afloat = game.party(Player::P2).vessels_afloat();
    let err = game.fire(c(4, 0)).unwrap_err();
    assert_eq!(err.reason(), CannotShootReason::DuplicateGuess);
    assert_eq!(game.party(Player::P2).board().revealed(), &revealed);
    assert_eq!(game.party(Player::P2).vessels_afloat(), afloat);

    let mut script = Script::new(vec![(4, 0), (9, 9)]);
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.play(&mut script, &mut events), Err(OutOfInput));
    assert_eq!(
        script.rejected,
        vec![
            (c(4, 0), Rejection::Shot(CannotShootReason::DuplicateGuess)),
            (c(9, 9), Rejection::Shot(CannotShootReason::OutOfBounds)),
        ]
    );
    assert_eq!(game.turns_elapsed(), 2);
}

#[test]
fn out_of_bounds_placement_is_rejected() {
    let config = MatchConfig::new(5, 5).unwrap();
    let mut setup = MatchSetup::new(config);
    let err = setup
        .party_mut(Player::P1)
        .add_vessel(vec![c(5, 2)])
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    assert_eq!(err.into_placement(), vec![c(5, 2)]);
    assert_eq!(setup.party(Player::P1).board().occupied_count(), 0);
    assert!(setup
        .party(Player::P1)
        .board()
        .render(false)
        .flatten()
        .all(|cell| cell == CellView::Empty));
}

#[test]
fn manual_placement_then_full_match() {
    let config = MatchConfig::new(5, 5).unwrap();
    let mut setup = MatchSetup::new(config);
    let mut placement = Script::new(vec![(0, 0), (0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    setup
        .party_mut(Player::P1)
        .place_vessels_manually(&mut placement)
        .unwrap();
    assert_eq!(placement.requests[0], "place 1/5");
    assert_eq!(placement.requests[2], "place 2/5");
    assert_eq!(placement.rejected.len(), 1);

    let mut rng = StdRng::seed_from_u64(21);
    setup.party_mut(Player::P2).place_vessels_randomly(&mut rng);
    let mut game = setup
        .start(&mut rng, UniformTargeting::new(StdRng::seed_from_u64(22)))
        .unwrap();

    // Sweep every cell of the computer's board in order; the human always has a fresh
    // target left until the match ends.
    let sweep = (0..5).flat_map(|row| (0..5).map(move |col| (row, col)));
    let mut script = Script::new(sweep);
    let mut events: Vec<GameEvent> = Vec::new();
    let summary = game.play(&mut script, &mut events).unwrap();
    let winner = summary.winner.unwrap();
    assert!(game.party(winner.opponent()).defeated());
    assert_eq!(summary.destroyed, 5);
    assert_eq!(summary.placed, 5);
    assert!(script.rejected.is_empty());
    assert_eq!(events.last(), Some(&GameEvent::MatchOver(summary)));
}
