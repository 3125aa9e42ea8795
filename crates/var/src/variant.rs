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

use crate::lambda::Lambda;
use crate::record::Record;
use arcstr::ArcStr;
use std::fmt::{Debug, Formatter};

/// Our series of types
#[derive(Clone)]
pub enum Variant {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(ArcStr),
    Object(Record),
    Function(Lambda),
}

impl Debug for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Undefined => write!(f, "Undefined"),
            Variant::Null => write!(f, "Null"),
            Variant::Bool(b) => write!(f, "{}", *b),
            Variant::Number(n) => write!(f, "Number({n})"),
            Variant::Str(s) => write!(f, "String({:?})", s.as_str()),
            Variant::Object(r) => write!(f, "Object([size = {}, items = {r:?}])", r.len()),
            Variant::Function(l) => write!(f, "{l:?}"),
        }
    }
}

/// Strict equality: same kind and same value. NaN is unequal to everything, including
/// itself; objects and functions are equal only to themselves.
impl PartialEq<Self> for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Undefined, Variant::Undefined) => true,
            (Variant::Null, Variant::Null) => true,
            (Variant::Bool(s), Variant::Bool(o)) => s == o,
            (Variant::Number(s), Variant::Number(o)) => s == o,
            (Variant::Str(s), Variant::Str(o)) => s == o,
            (Variant::Object(s), Variant::Object(o)) => s.ptr_eq(o),
            (Variant::Function(s), Variant::Function(o)) => s.ptr_eq(o),
            _ => false,
        }
    }
}
