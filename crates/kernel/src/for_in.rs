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

//! The `for (name in record) acc += record[name]()` loop.

use forin_var::{Error, Record, concat};
use tracing::{debug, trace};

/// Enumerate `record`'s own properties in definition order, call each value, and
/// concatenate the string forms of the results.
///
/// The first lookup or call that fails aborts the pass; nothing accumulated so far is
/// returned.
#[tracing::instrument(level = "debug", skip(record), fields(properties = record.len()))]
pub fn test_for_in(record: &Record) -> Result<String, Error> {
    let mut accumulator = String::new();
    for name in record.keys() {
        let value = record.get(&name)?;
        let result = value.call()?;
        trace!(property = %name, ?result, "invoked");
        concat(&mut accumulator, &result);
    }
    debug!(result = %accumulator, "enumeration complete");
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forin_var::{E_NOTFN, E_THROWN, v_arrow, v_fn, v_int, v_str};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_number_then_string() {
        let record = Record::build([
            ("foo", v_fn("testForIn1", || Ok(v_int(7)))),
            ("bar", v_fn("testForIn2", || Ok(v_str("whatever")))),
        ]);
        assert_eq!(test_for_in(&record).unwrap(), "7whatever");
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(test_for_in(&Record::empty()).unwrap(), "");
    }

    #[test]
    fn test_single_property() {
        let record = Record::build([("only", v_arrow(|| Ok(v_str("x"))))]);
        assert_eq!(test_for_in(&record).unwrap(), "x");
    }

    #[test]
    fn test_definition_order_drives_output() {
        let forward = Record::build([
            ("a", v_arrow(|| Ok(v_str("1")))),
            ("b", v_arrow(|| Ok(v_str("2")))),
        ]);
        let reversed = Record::build([
            ("b", v_arrow(|| Ok(v_str("2")))),
            ("a", v_arrow(|| Ok(v_str("1")))),
        ]);
        assert_eq!(test_for_in(&forward).unwrap(), "12");
        assert_eq!(test_for_in(&reversed).unwrap(), "21");
    }

    #[test]
    fn test_each_property_invoked_once() {
        let calls: Vec<Arc<AtomicUsize>> = (0..5).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let record = Record::build(calls.iter().enumerate().map(|(i, counter)| {
            let counter = counter.clone();
            (
                format!("p{i}"),
                v_arrow(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(v_int(i as i64))
                }),
            )
        }));
        assert_eq!(test_for_in(&record).unwrap(), "01234");
        for counter in &calls {
            assert_eq!(counter.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_wide_record() {
        let record =
            Record::build((0..4096).map(|i| (format!("p{i}"), v_arrow(|| Ok(v_str("ab"))))));
        let q = test_for_in(&record).unwrap();
        assert_eq!(q.len(), 8192);
        assert!(q.starts_with("abab") && q.ends_with("abab"));
    }

    #[test]
    fn test_non_callable_aborts() {
        let after = Arc::new(AtomicUsize::new(0));
        let after_c = after.clone();
        let record = Record::build([
            ("first", v_arrow(|| Ok(v_int(1)))),
            ("plain", v_int(42)),
            (
                "later",
                v_arrow(move || {
                    after_c.fetch_add(1, Ordering::SeqCst);
                    Ok(v_int(2))
                }),
            ),
        ]);
        let err = test_for_in(&record).unwrap_err();
        assert!(err == E_NOTFN);
        assert_eq!(after.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_thrown_value_propagates() {
        let record = Record::build([(
            "boom",
            v_arrow(|| Err(E_THROWN.with_msg_and_value(|| "boom".into(), v_str("boom")))),
        )]);
        let err = test_for_in(&record).unwrap_err();
        assert!(err == E_THROWN);
        assert_eq!(err.value(), Some(&v_str("boom")));
    }
}
