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

//! Line-based input from the player.
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;

use battlefront::{
    board::{CannotPlaceReason, CannotShootReason, Coordinate},
    game::{CoordinateSource, Rejection, Request},
};

use crate::display::show_board;

/// Parse a coordinate written as `row col`, `row,col` or `(row, col)`.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    static COORD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)\(?\s*
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)
        (?P<col>[0-9]+)
        \s*\)?$",
        )
        .unwrap()
    });
    let captures = COORD.captures(input)?;
    let row = captures.name("row")?.as_str().parse().ok()?;
    let col = captures.name("col")?.as_str().parse().ok()?;
    Some(Coordinate::new(row, col))
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Read a coordinate inside a board of `size` cells per side.
    fn read_coordinate(&mut self, prompt: &str, size: usize) -> io::Result<Coordinate> {
        self.read_input(prompt, |input| match parse_coordinate(input) {
            Some(coord) if coord.row < size && coord.col < size => Some(coord),
            Some(_) => {
                println!(
                    "Invalid coordinates. Please enter numbers between 0 and {}.",
                    size - 1
                );
                None
            }
            None => {
                println!("Invalid input. Please enter the row and column, eg. 2 3.");
                None
            }
        })
    }

    /// Helper to print the prompt, clear the string buffer and read a line. End of
    /// input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }
}

impl<B: BufRead> CoordinateSource for InputReader<B> {
    type Error = io::Error;

    fn request_coordinate(&mut self, request: &Request<'_>) -> io::Result<Coordinate> {
        match *request {
            Request::PlaceVessel {
                name,
                vessel,
                total,
                board,
                ..
            } => {
                println!();
                show_board(board, false);
                println!("Placing {}'s spaceship {} out of {}", name, vessel, total);
                self.read_coordinate("Enter the row and column (eg. 2 3):", board.size())
            }
            Request::Shot {
                name, own, target, ..
            } => {
                println!();
                println!("{}'s board:", name);
                show_board(own, false);
                println!();
                println!("Enemy board:");
                show_board(target, true);
                let prompt = format!("{}'s turn: enter the row and column (eg. 2 3):", name);
                self.read_coordinate(&prompt, target.size())
            }
        }
    }

    fn rejected(&mut self, coord: Coordinate, reason: Rejection) {
        match reason {
            Rejection::Place(CannotPlaceReason::OccupiedCell) => {
                println!("{} is already occupied. Choose another cell.", coord)
            }
            Rejection::Shot(CannotShootReason::DuplicateGuess) => {
                println!("You have already fired at {}. Try again.", coord)
            }
            Rejection::Place(reason) => println!("Cannot place at {}: {}.", coord, reason),
            Rejection::Shot(reason) => println!("Cannot fire at {}: {}.", coord, reason),
        }
    }
}
