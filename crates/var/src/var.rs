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

use crate::ErrorCode::E_NOTFN;
use crate::lambda::Lambda;
use crate::record::Record;
use crate::variant::Variant;
use crate::{Error, VarType};
use arcstr::ArcStr;
use std::fmt::{Debug, Formatter};

#[derive(Clone)]
pub struct Var(Variant);

impl Debug for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.variant())
    }
}

impl Var {
    pub fn from_variant(variant: Variant) -> Self {
        Var(variant)
    }

    pub fn mk_undefined() -> Self {
        Var(Variant::Undefined)
    }

    pub fn mk_null() -> Self {
        Var(Variant::Null)
    }

    pub fn mk_bool(b: bool) -> Self {
        Var(Variant::Bool(b))
    }

    pub fn mk_number(n: f64) -> Self {
        Var(Variant::Number(n))
    }

    pub fn mk_str(s: &str) -> Self {
        Var(Variant::Str(ArcStr::from(s)))
    }

    pub fn mk_string(s: String) -> Self {
        Var(Variant::Str(ArcStr::from(s)))
    }

    pub fn mk_record(r: Record) -> Self {
        Var(Variant::Object(r))
    }

    pub fn mk_function(l: Lambda) -> Self {
        Var(Variant::Function(l))
    }

    pub fn variant(&self) -> &Variant {
        &self.0
    }

    pub fn type_code(&self) -> VarType {
        match self.variant() {
            Variant::Undefined => VarType::TYPE_UNDEFINED,
            Variant::Null => VarType::TYPE_NULL,
            Variant::Bool(_) => VarType::TYPE_BOOL,
            Variant::Number(_) => VarType::TYPE_NUMBER,
            Variant::Str(_) => VarType::TYPE_STR,
            Variant::Object(_) => VarType::TYPE_OBJECT,
            Variant::Function(_) => VarType::TYPE_FUNCTION,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.variant(), Variant::Function(_))
    }

    /// Call this value with no arguments.
    /// Anything other than a function is Err(E_NOTFN).
    pub fn call(&self) -> Result<Var, Error> {
        match self.variant() {
            Variant::Function(l) => l.call(),
            _ => Err(E_NOTFN.with_msg(|| {
                format!("{} is not a function", self.type_code().typeof_name())
            })),
        }
    }

    /// The `===` operator.
    pub fn strict_eq(&self, other: &Var) -> bool {
        self.variant() == other.variant()
    }
}

pub fn v_undefined() -> Var {
    Var::mk_undefined()
}

pub fn v_null() -> Var {
    Var::mk_null()
}

pub fn v_bool(b: bool) -> Var {
    Var::mk_bool(b)
}

pub fn v_number(n: f64) -> Var {
    Var::mk_number(n)
}

pub fn v_int(i: i64) -> Var {
    Var::mk_number(i as f64)
}

pub fn v_str(s: &str) -> Var {
    Var::mk_str(s)
}

pub fn v_string(s: String) -> Var {
    Var::mk_string(s)
}

pub fn v_record<K, I>(pairs: I) -> Var
where
    K: Into<ArcStr>,
    I: IntoIterator<Item = (K, Var)>,
{
    Var::mk_record(Record::build(pairs))
}

pub fn v_fn<F>(name: &str, body: F) -> Var
where
    F: Fn() -> Result<Var, Error> + Send + Sync + 'static,
{
    Var::mk_function(Lambda::new(Some(name), body))
}

pub fn v_arrow<F>(body: F) -> Var
where
    F: Fn() -> Result<Var, Error> + Send + Sync + 'static,
{
    Var::mk_function(Lambda::anonymous(body))
}

impl From<i64> for Var {
    fn from(i: i64) -> Self {
        v_int(i)
    }
}

impl From<f64> for Var {
    fn from(n: f64) -> Self {
        Var::mk_number(n)
    }
}

impl From<bool> for Var {
    fn from(b: bool) -> Self {
        Var::mk_bool(b)
    }
}

impl From<&str> for Var {
    fn from(s: &str) -> Self {
        Var::mk_str(s)
    }
}

impl From<String> for Var {
    fn from(s: String) -> Self {
        Var::mk_string(s)
    }
}

impl From<Lambda> for Var {
    fn from(l: Lambda) -> Self {
        Var::mk_function(l)
    }
}

impl PartialEq<Self> for Var {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::E_NOTFN;

    #[test]
    fn test_number_pack_unpack() {
        let n = Var::mk_number(42.0);
        match n.variant() {
            Variant::Number(n) => assert_eq!(*n, 42.0),
            _ => panic!("Expected number"),
        }
    }

    #[test]
    fn test_call_function() {
        let f = v_fn("testForIn1", || Ok(v_int(7)));
        assert!(f.is_callable());
        assert_eq!(f.call().unwrap(), v_int(7));
    }

    #[test]
    fn test_call_non_callable() {
        for v in [v_int(7), v_str("x"), v_undefined(), v_null(), v_record::<&str, _>([])] {
            let err = v.call().unwrap_err();
            assert!(err == E_NOTFN, "{v:?} should not be callable");
        }
    }

    #[test]
    fn test_callable_errors_propagate() {
        let f = v_arrow(|| Err(E_NOTFN.msg("inner")));
        let err = f.call().unwrap_err();
        assert_eq!(err.message(), "inner");
    }

    #[test]
    fn test_nan_not_strict_equal_to_itself() {
        let nan = v_number(f64::NAN);
        assert!(!nan.strict_eq(&nan));
    }

    #[test]
    fn test_records_compare_by_identity() {
        let a = Var::mk_record(Record::build([("x", v_int(1))]));
        let b = Var::mk_record(Record::build([("x", v_int(1))]));
        assert!(a.strict_eq(&a.clone()));
        assert!(!a.strict_eq(&b));
    }
}
