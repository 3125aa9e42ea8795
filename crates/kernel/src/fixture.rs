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

//! The catalogue of for-in fixtures.
//!
//! `forin` is the regression fixture as written: it builds a record of two named functions,
//! runs the for-in loop over it, and asserts the result is loosely equal to `7`. The loop
//! produces the string `"7whatever"`, which converts to NaN, so that assertion fails. The
//! fixture is kept verbatim and marked as a known discrepancy; `forin-value` checks what
//! the loop actually produces.

use crate::errors::FixtureError;
use crate::for_in::test_for_in;
use crate::harness::Harness;
use forin_var::{
    E_NOTFN, E_THROWN, Record, loose_eq, v_arrow, v_fn, v_int, v_str, v_string,
};
use tracing::debug;

/// What a fixture is expected to do when run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    Pass,
    /// The fixture is believed to be wrong as written and is expected to fail; the
    /// string says why.
    KnownDiscrepancy(&'static str),
}

pub type FixtureBody = fn(&Record, &mut dyn Harness) -> Result<(), FixtureError>;

#[derive(Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub description: &'static str,
    pub expectation: Expectation,
    build: fn() -> Record,
    body: FixtureBody,
}

impl Fixture {
    pub fn new(
        name: &'static str,
        description: &'static str,
        expectation: Expectation,
        build: fn() -> Record,
        body: FixtureBody,
    ) -> Self {
        Self {
            name,
            description,
            expectation,
            build,
            body,
        }
    }

    /// A fresh copy of the record this fixture runs against.
    pub fn record(&self) -> Record {
        (self.build)()
    }

    pub fn run(&self, harness: &mut dyn Harness) -> Result<(), FixtureError> {
        let record = self.record();
        debug!(fixture = self.name, properties = record.len(), "running fixture");
        (self.body)(&record, harness)
    }
}

/// `{ foo: function testForIn1() { return 7; }, bar: function testForIn2() { return "whatever"; } }`
pub fn forin_record() -> Record {
    Record::build([
        ("foo", v_fn("testForIn1", || Ok(v_int(7)))),
        ("bar", v_fn("testForIn2", || Ok(v_str("whatever")))),
    ])
}

fn empty_record() -> Record {
    Record::empty()
}

fn single_property_record() -> Record {
    Record::build([("only", v_arrow(|| Ok(v_str("x"))))])
}

fn non_callable_record() -> Record {
    Record::build([
        ("foo", v_fn("testForIn1", || Ok(v_int(7)))),
        ("bar", v_int(42)),
    ])
}

fn throwing_record() -> Record {
    Record::build([
        ("ok", v_arrow(|| Ok(v_str("a")))),
        (
            "boom",
            v_fn("thrower", || {
                Err(E_THROWN.with_msg_and_value(|| "thrower raised".into(), v_str("boom")))
            }),
        ),
    ])
}

fn forin_verbatim(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    let q = v_string(test_for_in(record)?);
    harness.assert(loose_eq(&q, &v_int(7)), "q == 7")
}

fn forin_value(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    let q = test_for_in(record)?;
    harness.assert(q == "7whatever", "q === \"7whatever\"")
}

fn expect_empty(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    let q = test_for_in(record)?;
    harness.assert(q.is_empty(), "q === \"\"")
}

fn expect_x(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    let q = test_for_in(record)?;
    harness.assert(q == "x", "q === \"x\"")
}

fn expect_not_callable(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    match test_for_in(record) {
        Ok(q) => harness.assert(false, &format!("expected E_NOTFN, got {q:?}")),
        Err(e) => harness.assert(e == E_NOTFN, &format!("expected E_NOTFN, got {e}")),
    }
}

fn expect_thrown(record: &Record, harness: &mut dyn Harness) -> Result<(), FixtureError> {
    match test_for_in(record) {
        Ok(q) => harness.assert(false, &format!("expected a throw, got {q:?}")),
        Err(e) => {
            harness.assert(e == E_THROWN, &format!("expected E_THROWN, got {e}"))?;
            harness.assert(
                e.value() == Some(&v_str("boom")),
                "thrown value is \"boom\"",
            )
        }
    }
}

pub fn catalogue() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "forin",
            description: "for-in over two functions, asserting q == 7 as written",
            expectation: Expectation::KnownDiscrepancy(
                "the loop yields \"7whatever\", which converts to NaN and is not == 7",
            ),
            build: forin_record,
            body: forin_verbatim,
        },
        Fixture {
            name: "forin-value",
            description: "for-in over two functions, asserting the accumulated string",
            expectation: Expectation::Pass,
            build: forin_record,
            body: forin_value,
        },
        Fixture {
            name: "empty-record",
            description: "for-in over a record with no properties",
            expectation: Expectation::Pass,
            build: empty_record,
            body: expect_empty,
        },
        Fixture {
            name: "single-property",
            description: "for-in over a record with one function",
            expectation: Expectation::Pass,
            build: single_property_record,
            body: expect_x,
        },
        Fixture {
            name: "non-callable",
            description: "for-in reaching a property that is not a function",
            expectation: Expectation::Pass,
            build: non_callable_record,
            body: expect_not_callable,
        },
        Fixture {
            name: "throwing-callable",
            description: "for-in reaching a function that throws",
            expectation: Expectation::Pass,
            build: throwing_record,
            body: expect_thrown,
        },
    ]
}

pub fn find(name: &str) -> Result<Fixture, FixtureError> {
    catalogue()
        .into_iter()
        .find(|f| f.name == name)
        .ok_or_else(|| FixtureError::UnknownFixture(name.to_string()))
}
