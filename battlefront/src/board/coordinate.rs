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

use std::fmt;

use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformSampler},
        Distribution, Uniform,
    },
    Rng,
};

/// The coordinates of a cell in a [`Board`][crate::board::Board].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: usize,
    /// Column of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl SampleUniform for Coordinate {
    type Sampler = UniformCoordinate;
}

/// Samples coordinates uniformly from the rectangle between two corners. Each axis is
/// sampled independently.
#[derive(Debug, Copy, Clone)]
pub struct UniformCoordinate {
    row: Uniform<usize>,
    col: Uniform<usize>,
}

impl UniformSampler for UniformCoordinate {
    type X = Coordinate;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: Uniform::new(low.row, high.row),
            col: Uniform::new(low.col, high.col),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: Uniform::new_inclusive(low.row, high.row),
            col: Uniform::new_inclusive(low.col, high.col),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Coordinate::new(self.row.sample(rng), self.col.sample(rng))
    }
}
