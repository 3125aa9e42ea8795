// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

pub use crate::config::{Config, ReportFormat};
pub use crate::errors::FixtureError;
pub use crate::fixture::{Expectation, Fixture, catalogue, find};
pub use crate::for_in::test_for_in;
pub use crate::harness::{Assertions, Harness};
pub use crate::runner::{FixtureResult, Outcome, RunReport, run_fixture, run_fixtures};

pub mod config;
mod errors;
pub mod fixture;
pub mod for_in;
pub mod harness;
pub mod runner;
