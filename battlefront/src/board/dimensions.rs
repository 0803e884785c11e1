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

//! Dimensions of a square board.
use std::borrow::Borrow;

use rand::distributions::Uniform;

use crate::board::Coordinate;

/// Square dimensions of a board. Every board has the same number of rows and columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows, which is also the number of columns.
    size: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with `size` rows and `size` columns.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("Dimensions must be nonzero"),
            None => panic!(
                "Dimensions too large: {} * {} > {}",
                size,
                size,
                usize::max_value()
            ),
        }
    }

    /// Create new [`Dimensions`] with `size` rows and `size` columns.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Length of one side of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.size, idx % self.size)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Distribution that picks any cell on the board with equal probability.
    pub fn coordinates(&self) -> Uniform<Coordinate> {
        Uniform::new(
            Coordinate::new(0, 0),
            Coordinate::new(self.size, self.size),
        )
    }

    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.size && c.col < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_round_trips_corners() {
        let dim = Dimensions::new(6);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(5, 5)), Some(35));
        assert_eq!(dim.un_linearize(13), Coordinate::new(2, 1));
        assert_eq!(dim.try_linearize(&Coordinate::new(6, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 6)), None);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Dimensions::try_new(0).is_none());
        assert!(Dimensions::try_new(usize::max_value()).is_none());
    }

    #[test]
    fn iter_coordinates_is_row_major() {
        let rows: Vec<Vec<Coordinate>> = Dimensions::new(5)
            .iter_coordinates()
            .map(|row| row.collect())
            .collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[1][3], Coordinate::new(1, 3));
    }
}
