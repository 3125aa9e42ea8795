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

use forin_var::Error;
use thiserror::Error;

/// Ways a fixture run can end other than passing. All of them are fatal to the run.
#[derive(Debug, Error, Clone)]
pub enum FixtureError {
    #[error("Assertion failed: {0}")]
    Assertion(String),
    #[error("Fixture raised {0}")]
    Value(#[from] Error),
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),
}
