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

//! Cell storage for the board.

use std::ops::{Index, IndexMut};

use crate::{
    board::{Coordinate, Dimensions},
    ships::VesselId,
};

/// What physically sits in a cell, independent of whether the opponent can see it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellContent {
    /// Open space.
    Empty,
    /// Part of the vessel with the given id.
    Occupied(VesselId),
    /// A bonus planet that grants an extra shot when found.
    Bonus,
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Empty
    }
}

/// Outcome recorded on a cell once it has been fired at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotMark {
    /// A vessel was struck.
    Hit,
    /// Nothing was there.
    Miss,
    /// A bonus planet was uncovered.
    BonusFound,
}

/// A single cell in the player's grid.
#[derive(Debug, Default, Copy, Clone)]
pub(super) struct GridCell {
    /// What occupies this cell.
    pub(super) content: CellContent,

    /// The recorded shot outcome, once the cell has been revealed.
    pub(super) mark: Option<ShotMark>,
}

/// Row-major cell storage.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        self.dim.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<&Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
