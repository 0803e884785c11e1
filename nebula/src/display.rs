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

//! Rendering of boards and match events on the terminal.
use std::fmt;

use battlefront::{
    board::{Board, CellView},
    game::{EventSink, GameEvent, ShotOutcome},
    player::Player,
};

/// Display helper that prints a single cell.
struct Glyph(CellView);

impl Glyph {
    fn symbol(&self) -> &'static str {
        match self.0 {
            CellView::Fog => "~",
            CellView::Empty => ".",
            CellView::Vessel => "A",
            CellView::Bonus => "@",
            CellView::Hit => "X",
            CellView::Miss => "o",
            CellView::BonusFound => "*",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Print the board. With `hide_occupied` set, only cells the opponent has uncovered
/// are shown.
pub fn show_board(board: &Board, hide_occupied: bool) {
    print!("   ");
    for i in 0..board.size() {
        print!("{:^3}", i);
    }
    println!();
    for (i, row) in board.render(hide_occupied).enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^3}", Glyph(cell));
        }
        println!();
    }
}

/// Print the legend for the board symbols.
pub fn show_legend() {
    println!(
        "Legend: {} unknown  {} open space  {} spaceship  {} planet  {} hit  {} miss  {} planet found",
        Glyph(CellView::Fog),
        Glyph(CellView::Empty),
        Glyph(CellView::Vessel),
        Glyph(CellView::Bonus),
        Glyph(CellView::Hit),
        Glyph(CellView::Miss),
        Glyph(CellView::BonusFound),
    );
}

/// Prints match events as plain sentences.
pub struct EventPrinter {
    names: [String; 2],
    human: Player,
}

impl EventPrinter {
    pub fn new(p1: &str, p2: &str, human: Player) -> Self {
        Self {
            names: [p1.to_owned(), p2.to_owned()],
            human,
        }
    }

    fn name(&self, player: Player) -> &str {
        match player {
            Player::P1 => &self.names[0],
            Player::P2 => &self.names[1],
        }
    }
}

impl EventSink for EventPrinter {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MatchStarted { first } => {
                println!("{} fires first.", self.name(*first));
            }
            GameEvent::Shot(report) => {
                let name = self.name(report.attacker);
                match report.outcome {
                    ShotOutcome::Hit { sunk: true, .. } => {
                        println!("{} destroyed a spaceship at {}.", name, report.coord)
                    }
                    ShotOutcome::Hit { sunk: false, .. } => {
                        println!("{} hit a spaceship at {}.", name, report.coord)
                    }
                    ShotOutcome::Bonus => println!(
                        "{} found extra munitions at {}, take another shot!",
                        name, report.coord
                    ),
                    ShotOutcome::Miss => {
                        println!("{} shot and found nothing at {}.", name, report.coord)
                    }
                }
            }
            GameEvent::MatchOver(summary) => match summary.winner {
                Some(winner) => {
                    println!(
                        "{} has destroyed {}/{} spaceships in {} rounds.",
                        self.name(winner),
                        summary.destroyed,
                        summary.placed,
                        summary.turns
                    );
                    if winner == self.human {
                        println!("Congratulations, you won!");
                    } else {
                        println!("Game over. Better luck next time!");
                    }
                }
                None => println!("The match ended without a winner."),
            },
        }
    }
}
