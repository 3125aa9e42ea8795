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

use crate::{Error, ErrorCode::E_PROPNF, var::Var, variant::Variant};
use arcstr::ArcStr;
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// An object's own properties, in the order they were defined.
///
/// Records are immutable once built.
#[derive(Clone, Default)]
pub struct Record(Arc<IndexMap<ArcStr, Var>>);

impl Record {
    /// Build a record the way an object literal is evaluated: properties are defined left to
    /// right, and a repeated name keeps its first position but takes the last value.
    pub fn build<K, I>(pairs: I) -> Self
    where
        K: Into<ArcStr>,
        I: IntoIterator<Item = (K, Var)>,
    {
        let mut properties = IndexMap::new();
        for (name, value) in pairs {
            properties.insert(name.into(), value);
        }
        Record(Arc::new(properties))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Enumerate own property names in definition order.
    /// Every call starts a new enumeration.
    pub fn keys(&self) -> PropertyNames {
        PropertyNames {
            record: self.clone(),
            position: 0,
        }
    }

    pub fn get(&self, name: &str) -> Result<Var, Error> {
        match self.0.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(E_PROPNF.with_msg(|| format!("Property not found: {name:?}"))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Var)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records compare by identity.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl From<Record> for Var {
    fn from(r: Record) -> Self {
        Var::from_variant(Variant::Object(r))
    }
}

/// A single pass over a record's property names. Holds its own handle on the record, so
/// it is independent of any other enumeration in progress.
pub struct PropertyNames {
    record: Record,
    position: usize,
}

impl Iterator for PropertyNames {
    type Item = ArcStr;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, _) = self.record.0.get_index(self.position)?;
        self.position += 1;
        Some(name.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PropertyNames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{E_PROPNF, v_int, v_str};
    use pretty_assertions::assert_eq;

    fn names(r: &Record) -> Vec<String> {
        r.keys().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_insertion_order() {
        let r = Record::build([("zeta", v_int(1)), ("alpha", v_int(2)), ("mid", v_int(3))]);
        assert_eq!(names(&r), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_enumeration() {
        let r = Record::empty();
        assert!(r.is_empty());
        assert_eq!(r.keys().next(), None);
    }

    #[test]
    fn test_duplicate_name_keeps_position_takes_last_value() {
        let r = Record::build([("a", v_int(1)), ("b", v_int(2)), ("a", v_int(3))]);
        assert_eq!(names(&r), vec!["a", "b"]);
        assert_eq!(r.get("a").unwrap(), v_int(3));
    }

    #[test]
    fn test_fresh_enumeration_per_call() {
        let r = Record::build([("x", v_int(1)), ("y", v_int(2))]);
        let mut first = r.keys();
        assert_eq!(first.next().as_deref(), Some("x"));
        // A second enumeration starts over regardless of the first one's progress.
        let second: Vec<_> = r.keys().collect();
        assert_eq!(second.len(), 2);
        assert_eq!(first.next().as_deref(), Some("y"));
        assert_eq!(first.next(), None);
    }

    #[test]
    fn test_missing_property() {
        let r = Record::build([("foo", v_str("bar"))]);
        let err = r.get("baz").unwrap_err();
        assert!(err == E_PROPNF);
    }


    #[test]
    fn test_size_hint_tracks_progress() {
        let r = Record::build([("a", v_int(1)), ("b", v_int(2))]);
        let mut it = r.keys();
        assert_eq!(it.len(), 2);
        it.next();
        assert_eq!(it.len(), 1);
    }
}
