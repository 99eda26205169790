// This crate is part of the rcon-web-api project.
//
// Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see https://www.gnu.org/licenses.

//! Types for working with Source dedicated servers (srcds).
//!
//! Everything in here is plain data and parsing; there is no I/O.

#[macro_use]
mod macros;

pub mod status;

#[doc(inline)]
pub use status::{Player, Status};
