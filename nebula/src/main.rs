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

use std::io::{self, BufRead};

use clap::{App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use battlefront::{
    game::{max_vessels, MatchConfig, MatchSetup, MIN_BOARD_SIZE, MIN_VESSELS},
    player::Player,
    targeting::UniformTargeting,
};

use crate::{
    display::{show_board, show_legend, EventPrinter},
    input::InputReader,
};

mod display;
mod input;
mod logging;

/// Largest board that still fits on a terminal.
const MAX_BOARD_SIZE: usize = 30;

const TITLE: &str = r"
   _  __     __        __       ___       __  __  __      ___               __
  / |/ /__  / /  __ __/ /__ _  / _ )___ _/ /_/ /_/ /__   / _/______  ___  / /_
 /    / -_)/ _ \/ // / / _ `/ / _  / _ `/ __/ __/ / -_) / _/ __/ _ \/ _ \/ __/
/_/|_/\__//_.__/\_,_/_/\_,_/ /____/\_,_/\__/\__/_/\__/ /_//_/  \___/_//_/\__/
";

fn main() -> io::Result<()> {
    logging::init_logging();
    let matches = App::new("Nebula Battlefront")
        .version("1.0")
        .about("Hidden-fleet space battle against the computer.")
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("your name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("length of one side of the board, at least 5")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ships")
                .short("c")
                .long("ships")
                .value_name("COUNT")
                .help("number of spaceships per player, between 5 and 30% of the cells")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("placement")
                .short("p")
                .long("placement")
                .value_name("PLACEMENT")
                .help("how to place your spaceships")
                .takes_value(true)
                .possible_values(&["manual", "random"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("first")
                .short("f")
                .long("first")
                .value_name("FIRST_PLAYER")
                .help("pre-specify which player goes first")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible match")
                .takes_value(true)
                .validator(|v| {
                    v.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("{} is not a valid seed", v))
                }),
        )
        .arg(
            Arg::with_name("yes")
                .short("y")
                .long("yes")
                .help("skip the title prompt"),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    match run(&matches, &mut input) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            println!("Goodbye!");
            Ok(())
        }
        other => other,
    }
}

/// Set up and play a single match.
fn run<B: BufRead>(matches: &ArgMatches, input: &mut InputReader<B>) -> io::Result<()> {
    let mut rng = match matches.value_of("seed").and_then(|s| s.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{}", TITLE);
    if !matches.is_present("yes")
        && !input.read_input_lower("Do you want to play Nebula Battlefront? (yes/no)", |input| {
            match input {
                "yes" | "y" => Some(true),
                "no" | "n" => Some(false),
                _ => {
                    println!("Invalid choice. Please enter 'yes' or 'no'.");
                    None
                }
            }
        })?
    {
        println!("Goodbye!");
        return Ok(());
    }

    let name = match matches.value_of("name") {
        Some(name) => name.to_owned(),
        None => input.read_input("Enter your name:", |input| {
            if input.is_empty() {
                None
            } else {
                Some(input.to_owned())
            }
        })?,
    };
    let config = choose_config(matches, input)?;
    let first = choose_first(matches, &mut rng);
    println!("Welcome to Nebula Battlefront, {}!", name);
    show_legend();

    let mut setup = MatchSetup::new(config)
        .with_name(Player::P1, name)
        .with_first(first);
    choose_placements(matches, &mut setup, input, &mut rng)?;
    setup.party_mut(Player::P2).place_vessels_randomly(&mut rng);

    let targeting = UniformTargeting::new(StdRng::seed_from_u64(rng.gen()));
    let mut game = setup.start(&mut rng, targeting).map_err(|_| {
        io::Error::new(io::ErrorKind::Other, "fleets were not fully placed")
    })?;
    info!("{:?} fires first", first);

    let mut printer = EventPrinter::new(
        game.party(Player::P1).name(),
        game.party(Player::P2).name(),
        Player::P1,
    );
    game.play(input, &mut printer)?;

    for &player in &[Player::P1, Player::P2] {
        println!();
        println!("{}'s board:", game.party(player).name());
        show_board(game.party(player).board(), false);
    }
    Ok(())
}

/// Choose the board size and the number of spaceships from args or cli input.
fn choose_config<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<MatchConfig> {
    let check_size = |size: usize| {
        if size < MIN_BOARD_SIZE {
            println!("Board size must be at least {}.", MIN_BOARD_SIZE);
            None
        } else if size > MAX_BOARD_SIZE {
            println!("Board size must be at most {}.", MAX_BOARD_SIZE);
            None
        } else {
            Some(size)
        }
    };
    let size = match matches
        .value_of("size")
        .and_then(|s| s.parse().ok())
        .and_then(check_size)
    {
        Some(size) => size,
        None => input.read_input(
            &format!("Enter the board size (min size = {}):", MIN_BOARD_SIZE),
            |input| match input.parse() {
                Ok(size) => check_size(size),
                Err(_) => {
                    println!("Invalid input. Please enter a whole number.");
                    None
                }
            },
        )?,
    };

    let max = max_vessels(size).unwrap_or(MIN_VESSELS);
    let from_args = matches
        .value_of("ships")
        .and_then(|s| s.parse().ok())
        .map(|count| MatchConfig::new(size, count));
    match from_args {
        Some(Ok(config)) => Ok(config),
        Some(Err(err)) => {
            println!("{}", err);
            read_ship_count(input, size, max)
        }
        None => read_ship_count(input, size, max),
    }
}

fn read_ship_count<B: BufRead>(
    input: &mut InputReader<B>,
    size: usize,
    max: usize,
) -> io::Result<MatchConfig> {
    input.read_input(
        &format!(
            "Enter the number of spaceships ({} to {}):",
            MIN_VESSELS, max
        ),
        |input| match input.parse() {
            Ok(count) => match MatchConfig::new(size, count) {
                Ok(config) => Some(config),
                Err(err) => {
                    println!("{}", err);
                    None
                }
            },
            Err(_) => {
                println!("Invalid input. Please enter a whole number.");
                None
            }
        },
    )
}

/// Choose which [`Player`] fires first. The human goes first unless told otherwise.
fn choose_first(matches: &ArgMatches, rng: &mut impl Rng) -> Player {
    match matches.value_of("first").map(str::to_ascii_lowercase).as_deref() {
        Some("computer") | Some("bot") => Player::P2,
        Some("random") | Some("rand") if rng.gen() => Player::P2,
        _ => Player::P1,
    }
}

/// Place the human's spaceships, manually or randomly.
fn choose_placements<B: BufRead>(
    matches: &ArgMatches,
    setup: &mut MatchSetup,
    input: &mut InputReader<B>,
    rng: &mut impl Rng,
) -> io::Result<()> {
    let manual = match matches.value_of("placement").map(str::to_ascii_lowercase) {
        Some(choice) => choice == "manual",
        None => {
            println!("How would you like to place your spaceships?");
            println!("1. Manually choose ship locations");
            println!("2. Have them placed randomly");
            input.read_input_lower("Enter your choice (1 or 2):", |input| match input {
                "1" | "manual" => Some(true),
                "2" | "random" => Some(false),
                _ => {
                    println!("Invalid choice. Please enter 1 or 2.");
                    None
                }
            })?
        }
    };
    let party = setup.party_mut(Player::P1);
    if manual {
        party.place_vessels_manually(input)?;
    } else {
        for coord in party.place_vessels_randomly(rng) {
            println!("{}'s spaceship placed at {}", party.name(), coord);
        }
    }
    Ok(())
}
