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

use crate::errors::FixtureError;
use tracing::{trace, warn};

/// What a fixture body may use to check its results.
pub trait Harness {
    /// Fail the run with `diagnostic` unless `condition` holds.
    fn assert(&mut self, condition: bool, diagnostic: &str) -> Result<(), FixtureError>;
}

/// Counts the checks made; stops at the first failing one.
#[derive(Debug, Default)]
pub struct Assertions {
    checked: usize,
}

impl Assertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> usize {
        self.checked
    }
}

impl Harness for Assertions {
    fn assert(&mut self, condition: bool, diagnostic: &str) -> Result<(), FixtureError> {
        self.checked += 1;
        if condition {
            trace!(check = self.checked, diagnostic, "assertion held");
            return Ok(());
        }
        warn!(check = self.checked, diagnostic, "assertion failed");
        Err(FixtureError::Assertion(diagnostic.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_fails() {
        let mut h = Assertions::new();
        h.assert(true, "first").unwrap();
        let err = h.assert(false, "q == 7").unwrap_err();
        assert!(matches!(err, FixtureError::Assertion(ref d) if d == "q == 7"));
        assert_eq!(h.checked(), 2);
        assert_eq!(err.to_string(), "Assertion failed: q == 7");
    }
}
