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

//! Turn engine for Nebula Battlefront, a two-player game of hidden fleets in space.
//!
//! Each player hides single-cell vessels and a handful of bonus planets on a square
//! board. Players take turns firing at the other's board; uncovering a planet grants an
//! immediate extra shot, and the first player to lose every vessel loses the match.
//!
//! The crate performs no I/O. Human input arrives through
//! [`CoordinateSource`][game::CoordinateSource], progress is reported through
//! [`EventSink`][game::EventSink], and all randomness comes from generators supplied by
//! the caller.

pub mod board;
pub mod game;
pub mod player;
pub mod ships;
pub mod targeting;
