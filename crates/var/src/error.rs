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

use crate::var::Var;
use ErrorCode::*;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

#[derive(Clone)]
pub struct Error {
    pub err_type: ErrorCode,
    pub msg: Option<Box<String>>,
    /// For `E_THROWN`, the value the callable raised.
    pub value: Option<Box<Var>>,
}

impl Error {
    pub fn new(err_type: ErrorCode, msg: Option<String>, value: Option<Var>) -> Self {
        Self {
            err_type,
            msg: msg.map(Box::new),
            value: value.map(Box::new),
        }
    }

    /// The value carried by this error, if any (the thrown value for `E_THROWN`).
    pub fn value(&self) -> Option<&Var> {
        self.value.as_deref()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.msg {
            Some(msg) => write!(f, "{}({msg:?})", self.err_type),
            None => write!(f, "{}", self.err_type),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.msg.is_some() {
            write!(f, "{} ({})", self.err_type, self.message())
        } else {
            write!(f, "{}", self.err_type)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Lookup of a name absent from the record.
    E_PROPNF,
    /// Invocation of a value that is not a function.
    E_NOTFN,
    /// A callable raised; the raised value travels in `Error::value`.
    E_THROWN,
}

impl ErrorCode {
    pub fn msg<S: ToString>(self, s: S) -> Error {
        Error::new(self, Some(s.to_string()), None)
    }

    pub fn with_msg<F>(self, f: F) -> Error
    where
        F: FnOnce() -> String,
    {
        Error::new(self, Some(f()), None)
    }

    pub fn with_msg_and_value<F>(self, f: F, value: Var) -> Error
    where
        F: FnOnce() -> String,
    {
        Error::new(self, Some(f()), Some(value))
    }
}

impl From<ErrorCode> for String {
    fn from(val: ErrorCode) -> Self {
        match val {
            E_PROPNF => "E_PROPNF".into(),
            E_NOTFN => "E_NOTFN".into(),
            E_THROWN => "E_THROWN".into(),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s: String = (*self).into();
        write!(f, "{s}")
    }
}

impl PartialEq<ErrorCode> for Error {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.err_type == *other
    }
}

impl From<ErrorCode> for Error {
    fn from(val: ErrorCode) -> Self {
        Error::new(val, None, None)
    }
}

impl std::error::Error for Error {}

impl Error {
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(msg) = &self.msg {
            return msg.deref().clone();
        }
        // Default message if one not provided.
        match self.err_type {
            E_PROPNF => "Property not found".into(),
            E_NOTFN => "Value is not a function".into(),
            E_THROWN => "Uncaught exception".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v_str;

    #[test]
    fn test_default_messages() {
        assert_eq!(Error::from(E_PROPNF).message(), "Property not found");
        assert_eq!(Error::from(E_NOTFN).to_string(), "E_NOTFN");
    }

    #[test]
    fn test_display_with_message() {
        let e = E_PROPNF.msg("no property `baz`");
        assert_eq!(e.to_string(), "E_PROPNF (no property `baz`)");
        assert!(e == E_PROPNF);
    }

    #[test]
    fn test_thrown_value_carried() {
        let e = E_THROWN.with_msg_and_value(|| "boom".to_string(), v_str("boom"));
        assert_eq!(e.value(), Some(&v_str("boom")));
    }
}
