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

//! Types that make up a player's board.

use std::collections::HashSet;

use log::{debug, trace};
use rand::Rng;

use crate::ships::VesselId;

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, UniformCoordinate},
    dimensions::Dimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::{CellContent, ShotMark},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// What an observer sees when looking at one cell of a [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Hidden from this observer.
    Fog,
    /// Known to be open space that has not been fired at.
    Empty,
    /// An unhit vessel segment.
    Vessel,
    /// An undiscovered bonus planet.
    Bonus,
    /// A vessel segment that has been hit.
    Hit,
    /// A shot that found nothing.
    Miss,
    /// A bonus planet uncovered by a shot.
    BonusFound,
}

impl From<ShotMark> for CellView {
    fn from(mark: ShotMark) -> Self {
        match mark {
            ShotMark::Hit => CellView::Hit,
            ShotMark::Miss => CellView::Miss,
            ShotMark::BonusFound => CellView::BonusFound,
        }
    }
}

/// A single player's side of space: the cells holding their vessels and bonus planets,
/// and the record of which cells the opponent has uncovered.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cell contents and shot marks.
    grid: Grid,

    /// Cells whose true content has been disclosed to the opponent.
    revealed: HashSet<Coordinate>,

    /// Cells holding a bonus planet, found or not.
    bonus_tiles: HashSet<Coordinate>,
}

impl Board {
    /// Construct an empty board with `size` rows and columns.
    /// Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(Dimensions::new(size))
    }

    /// Construct an empty board with the given [`Dimensions`].
    pub fn with_dimensions(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            revealed: HashSet::new(),
            bonus_tiles: HashSet::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Length of one side of the board.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Cells that have been disclosed to the opponent.
    pub fn revealed(&self) -> &HashSet<Coordinate> {
        &self.revealed
    }

    /// Returns true if the cell has been disclosed to the opponent.
    pub fn is_revealed(&self, coord: &Coordinate) -> bool {
        self.revealed.contains(coord)
    }

    /// Cells holding a bonus planet.
    pub fn bonus_tiles(&self) -> &HashSet<Coordinate> {
        &self.bonus_tiles
    }

    /// Returns true if the cell holds a bonus planet.
    pub fn is_bonus(&self, coord: &Coordinate) -> bool {
        self.bonus_tiles.contains(coord)
    }

    /// What sits in the given cell. Returns `None` if the coordinate is out of bounds.
    pub fn content(&self, coord: &Coordinate) -> Option<CellContent> {
        self.grid.get(coord).map(|cell| cell.content)
    }

    /// The shot outcome recorded on the given cell, if it has been revealed.
    pub fn mark(&self, coord: &Coordinate) -> Option<ShotMark> {
        self.grid.get(coord).and_then(|cell| cell.mark)
    }

    /// Number of cells occupied by vessels.
    pub fn occupied_count(&self) -> usize {
        self.grid
            .cells
            .iter()
            .filter(|cell| matches!(cell.content, CellContent::Occupied(_)))
            .count()
    }

    /// Number of cells holding neither a vessel nor a bonus planet.
    pub fn free_count(&self) -> usize {
        self.grid
            .cells
            .iter()
            .filter(|cell| cell.content == CellContent::Empty)
            .count()
    }

    /// Check whether a vessel could be placed on the given cells without changing the
    /// board.
    pub fn validate_placement(&self, coords: &[Coordinate]) -> Result<(), CannotPlaceReason> {
        if coords.is_empty() {
            return Err(CannotPlaceReason::Empty);
        }
        let mut seen = HashSet::with_capacity(coords.len());
        for coord in coords {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(cell) if cell.content != CellContent::Empty => {
                    return Err(CannotPlaceReason::OccupiedCell)
                }
                Some(_) if !seen.insert(*coord) => {
                    return Err(CannotPlaceReason::DuplicateCoordinate)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Mark the given cells as occupied by the vessel `id`. Nothing is revealed. On
    /// error the board is left untouched.
    pub fn place_vessel(
        &mut self,
        id: VesselId,
        coords: &[Coordinate],
    ) -> Result<(), CannotPlaceReason> {
        self.validate_placement(coords)?;
        // Already ensured that every position is valid and not occupied.
        for coord in coords {
            self.grid[coord].content = CellContent::Occupied(id);
        }
        debug!("vessel {} placed on {:?}", id, coords);
        Ok(())
    }

    /// Put a bonus planet on one specific free cell.
    pub fn place_bonus_tile(&mut self, coord: Coordinate) -> Result<(), CannotPlaceReason> {
        self.validate_placement(&[coord])?;
        self.grid[&coord].content = CellContent::Bonus;
        self.bonus_tiles.insert(coord);
        Ok(())
    }

    /// Scatter bonus planets over free cells until the board holds `count` of them.
    ///
    /// Panics if `count` bonus planets cannot fit in the cells that are still free,
    /// since the search for free cells would otherwise never end.
    pub fn place_bonus_tiles<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        let missing = count.saturating_sub(self.bonus_tiles.len());
        assert!(
            missing <= self.free_count(),
            "cannot fit {} bonus tiles into {} free cells",
            missing,
            self.free_count()
        );
        let cells = self.grid.dim.coordinates();
        while self.bonus_tiles.len() < count {
            let coord = rng.sample(&cells);
            let cell = &mut self.grid[&coord];
            if cell.content == CellContent::Empty {
                cell.content = CellContent::Bonus;
                self.bonus_tiles.insert(coord);
            } else {
                trace!("bonus tile candidate {} already taken", coord);
            }
        }
        debug!("{} bonus tiles on the board", self.bonus_tiles.len());
    }

    /// Disclose the cell to the opponent and record what the shot found there. Calling
    /// this twice for the same cell overwrites the earlier mark.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn reveal(&mut self, coord: Coordinate, mark: ShotMark) {
        self.grid[&coord].mark = Some(mark);
        self.revealed.insert(coord);
    }

    /// Project the board for display. Revealed cells always show their shot mark. Other
    /// cells show their content, or [`CellView::Fog`] when `hide_occupied` is set. The
    /// iterator's item is another iterator over a single row.
    pub fn render<'a>(
        &'a self,
        hide_occupied: bool,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellView>> {
        let grid = &self.grid;
        grid.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| {
                let cell = &grid[&coord];
                match (cell.mark, cell.content) {
                    (Some(mark), _) => mark.into(),
                    (None, _) if hide_occupied => CellView::Fog,
                    (None, CellContent::Empty) => CellView::Empty,
                    (None, CellContent::Occupied(_)) => CellView::Vessel,
                    (None, CellContent::Bonus) => CellView::Bonus,
                }
            })
        })
    }
}
