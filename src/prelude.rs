//! # All imports for basic usage

pub use crate::api::{self, *};
pub use crate::{
    Mode, Outcome, Session,
    cache::{self, CacheHelper, FileCacher},
    compare::{Structural, structural_equals},
    config::{self, Config, OnFatal},
    error::{self, Error, Failure},
    location::{Resolver, SourceLocation},
    value::Value,
};
