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

use crate::{Error, Var};
use arcstr::ArcStr;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Anything that can be called with no arguments to produce a value.
pub trait Invocable: Send + Sync {
    fn call(&self) -> Result<Var, Error>;
}

impl<F> Invocable for F
where
    F: Fn() -> Result<Var, Error> + Send + Sync,
{
    fn call(&self) -> Result<Var, Error> {
        self()
    }
}

/// Function value: an invocable body plus the name it was declared with, if any.
#[derive(Clone)]
pub struct Lambda(pub Arc<LambdaInner>);

pub struct LambdaInner {
    pub name: Option<ArcStr>,
    pub body: Box<dyn Invocable>,
}

impl Lambda {
    pub fn new<F>(name: Option<&str>, body: F) -> Self
    where
        F: Fn() -> Result<Var, Error> + Send + Sync + 'static,
    {
        Self::from_invocable(name, Box::new(body))
    }

    /// An anonymous function, as produced by an arrow expression.
    pub fn anonymous<F>(body: F) -> Self
    where
        F: Fn() -> Result<Var, Error> + Send + Sync + 'static,
    {
        Self::new(None, body)
    }

    pub fn from_invocable(name: Option<&str>, body: Box<dyn Invocable>) -> Self {
        Self(Arc::new(LambdaInner {
            name: name.map(ArcStr::from),
            body,
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn call(&self) -> Result<Var, Error> {
        self.0.body.call()
    }

    /// Functions are equal only to themselves.
    pub fn ptr_eq(&self, other: &Lambda) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Lambda {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda({})", self.name().unwrap_or("<anonymous>"))
    }
}
