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

use std::collections::HashSet;

use battlefront::{
    board::{CellContent, Coordinate},
    game::{max_vessels, Match, MatchConfig, MatchSetup, Outcome},
    player::{Controller, Player},
    targeting::{TargetingStrategy, UniformTargeting},
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn config() -> impl Strategy<Value = MatchConfig> {
    (5usize..12)
        .prop_flat_map(|size| (Just(size), 5..=max_vessels(size).unwrap()))
        .prop_map(|(size, vessels)| MatchConfig::new(size, vessels).unwrap())
}

fn random_match(config: MatchConfig, seed: u64) -> Match<UniformTargeting<StdRng>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut setup =
        MatchSetup::new(config).with_controller(Player::P1, Controller::Automated);
    setup.party_mut(Player::P1).place_vessels_randomly(&mut rng);
    setup.party_mut(Player::P2).place_vessels_randomly(&mut rng);
    let targeting = UniformTargeting::new(StdRng::seed_from_u64(seed.wrapping_add(1)));
    setup.start(&mut rng, targeting).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleets_never_overlap(config in config(), seed in any::<u64>()) {
        let game = random_match(config, seed);
        for &player in &[Player::P1, Player::P2] {
            let party = game.party(player);
            let board = party.board();
            let cells: usize = party.vessels().iter().map(|v| v.len()).sum();
            prop_assert_eq!(board.occupied_count(), cells);
            prop_assert_eq!(cells, config.vessel_count());
            prop_assert_eq!(board.bonus_tiles().len(), config.bonus_tiles());

            let mut seen = HashSet::new();
            for (id, vessel) in party.vessels().iter().enumerate() {
                prop_assert_eq!(vessel.owner(), player);
                for coord in vessel.remaining() {
                    prop_assert!(seen.insert(*coord));
                    prop_assert!(!board.is_bonus(coord));
                    prop_assert_eq!(board.content(coord), Some(CellContent::Occupied(id)));
                }
            }
        }
    }

    #[test]
    fn turns_follow_outcomes(config in config(), seed in any::<u64>()) {
        let mut game = random_match(config, seed);
        while game.winner().is_none() {
            let attacker = game.attacker();
            let coord = game.automated_target().unwrap();
            let afloat_before = game.party(attacker.opponent()).vessels_afloat();
            let report = game.fire(coord).unwrap();
            prop_assert_eq!(report.attacker, attacker);

            let defender = game.party(attacker.opponent());
            if report.outcome.sunk() {
                prop_assert_eq!(defender.vessels_afloat(), afloat_before - 1);
            } else {
                prop_assert_eq!(defender.vessels_afloat(), afloat_before);
            }

            match game.outcome() {
                Outcome::Won(winner) => {
                    prop_assert_eq!(winner, attacker);
                    prop_assert!(defender.defeated());
                    prop_assert!(!report.outcome.grants_bonus());
                }
                Outcome::InProgress => {
                    prop_assert!(!game.party(Player::P1).defeated());
                    prop_assert!(!game.party(Player::P2).defeated());
                    if report.outcome.grants_bonus() {
                        prop_assert_eq!(game.attacker(), attacker);
                    } else {
                        prop_assert_eq!(game.attacker(), attacker.opponent());
                    }
                }
            }
        }
        let summary = game.summary();
        prop_assert_eq!(summary.destroyed, config.vessel_count());
        prop_assert_eq!(
            summary.turns,
            game.party(Player::P1).fired_at().len() + game.party(Player::P2).fired_at().len()
        );
    }

    #[test]
    fn targeting_skips_revealed_cells(size in 5usize..10, seed in any::<u64>(), density in 0.0f64..0.95) {
        let mut rng = StdRng::seed_from_u64(seed);
        let revealed: HashSet<Coordinate> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coordinate::new(row, col)))
            .filter(|_| rng.gen_bool(density))
            .collect();
        let mut strategy = UniformTargeting::new(StdRng::seed_from_u64(seed ^ 0x5eed));
        for _ in 0..200 {
            match strategy.select_target(size, &revealed) {
                Some(coord) => {
                    prop_assert!(coord.row < size && coord.col < size);
                    prop_assert!(!revealed.contains(&coord));
                }
                None => prop_assert_eq!(revealed.len(), size * size),
            }
        }
    }
}
