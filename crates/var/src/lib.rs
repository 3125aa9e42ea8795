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

pub mod coerce;
mod error;
mod lambda;
mod record;
#[allow(clippy::module_inception)]
mod var;
mod variant;

pub use coerce::{concat, loose_eq, number_to_string, to_display_string, to_number};
pub use error::{Error, ErrorCode, ErrorCode::*};
pub use lambda::{Invocable, Lambda};
pub use record::{PropertyNames, Record};
pub use var::{
    Var, v_arrow, v_bool, v_fn, v_int, v_null, v_number, v_record, v_str, v_string, v_undefined,
};
pub use variant::Variant;

use strum::Display;

/// Kinds of value, in the order `typeof` distinguishes them (plus `null`).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Display)]
#[allow(non_camel_case_types)]
pub enum VarType {
    #[strum(serialize = "UNDEFINED")]
    TYPE_UNDEFINED = 0,
    #[strum(serialize = "NULL")]
    TYPE_NULL = 1,
    #[strum(serialize = "BOOL")]
    TYPE_BOOL = 2,
    #[strum(serialize = "NUMBER")]
    TYPE_NUMBER = 3,
    #[strum(serialize = "STR")]
    TYPE_STR = 4,
    #[strum(serialize = "OBJECT")]
    TYPE_OBJECT = 5,
    #[strum(serialize = "FUNCTION")]
    TYPE_FUNCTION = 6,
}

impl VarType {
    /// What the `typeof` operator reports for values of this type.
    pub fn typeof_name(&self) -> &'static str {
        match self {
            VarType::TYPE_UNDEFINED => "undefined",
            VarType::TYPE_NULL => "object",
            VarType::TYPE_BOOL => "boolean",
            VarType::TYPE_NUMBER => "number",
            VarType::TYPE_STR => "string",
            VarType::TYPE_OBJECT => "object",
            VarType::TYPE_FUNCTION => "function",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeof_names() {
        assert_eq!(v_null().type_code().typeof_name(), "object");
        assert_eq!(v_fn("f", || Ok(v_undefined())).type_code().typeof_name(), "function");
        assert_eq!(v_int(7).type_code().typeof_name(), "number");
    }

    #[test]
    fn test_type_literals() {
        assert_eq!(VarType::TYPE_STR.to_string(), "STR");
        assert_eq!(v_record([("a", v_int(1))]).type_code().to_string(), "OBJECT");
    }
}
