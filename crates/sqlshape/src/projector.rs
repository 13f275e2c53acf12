// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Public entry points: cache lookup, resolution on a miss, rendering.

use std::num::NonZeroUsize;
use std::sync::{Arc, OnceLock};

use crate::cache::ShapeCache;
use crate::config::{Config, DEFAULT_CACHE_CAPACITY};
use crate::error::{Error, Result};
use crate::render;
use crate::resolve::{resolve_record, FieldSpec};
use crate::shape::Record;

static GLOBAL: OnceLock<Projector> = OnceLock::new();

/// Derives column projections for record types, caching each shape.
///
/// A process normally uses [`Projector::global`]; tests build isolated
/// instances with a small capacity.
///
/// ```
/// use sqlshape::{Projector, Shape};
///
/// #[derive(Shape)]
/// pub struct Account {
///     pub id: i64,
///     pub display_name: String,
/// }
///
/// let projector = Projector::with_capacity(std::num::NonZeroUsize::new(8).unwrap());
/// assert_eq!(projector.expression_of::<Account>(), r#""id","display_name""#);
/// ```
pub struct Projector {
    cache: ShapeCache,
}

impl Projector {
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: ShapeCache::new(capacity),
        }
    }

    /// Build a projector from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `cache_capacity` is 0.
    pub fn from_config(config: &Config) -> Result<Self> {
        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or(Error::ZeroCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    /// Process-wide projector built from `Config::default()`.
    pub fn global() -> &'static Projector {
        GLOBAL.get_or_init(|| Self::from_config(&Config::default()).unwrap_or_default())
    }

    /// Quoted `SELECT` list for the record behind `value`.
    ///
    /// Values are never inspected: `&None::<&T>` gives the same result as a
    /// populated `T`, and `&()` gives an empty string.
    pub fn expression<R: Record + ?Sized>(&self, _value: &R) -> String {
        self.expression_of::<R>()
    }

    /// Column names for the record behind `value`, unquoted.
    pub fn names<R: Record + ?Sized>(&self, _value: &R) -> Vec<String> {
        self.names_of::<R>()
    }

    #[must_use]
    pub fn expression_of<R: Record + ?Sized>(&self) -> String {
        self.fields::<R>()
            .map(|fields| render::expression(&fields))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn names_of<R: Record + ?Sized>(&self) -> Vec<String> {
        self.fields::<R>()
            .map(|fields| render::names(&fields))
            .unwrap_or_default()
    }

    /// Cache backing this projector.
    #[must_use]
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    fn fields<R: Record + ?Sized>(&self) -> Option<Arc<[FieldSpec]>> {
        let record = R::record_type()?;
        Some(
            self.cache
                .get_or_build(record, || resolve_record(Some(record))),
        )
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::with_capacity(default_capacity())
    }
}

fn default_capacity() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

/// Quoted `SELECT` list for `value`, using the process-wide projector.
///
/// ```
/// use sqlshape::Shape;
///
/// #[derive(Shape)]
/// pub struct Theme {
///     pub primary_color: String,
/// }
///
/// #[derive(Shape)]
/// pub struct User {
///     pub username: String,
///     #[allow(non_snake_case)]
///     pub FullName: String,
///     pub email: String,
///     #[db("id")]
///     pub alias: String,
///     #[db("theme,json")]
///     pub theme: Theme,
///     #[db("-")]
///     pub last_seen: u64,
/// }
///
/// let sql = format!("SELECT {} FROM users WHERE id = $1", sqlshape::expression(&None::<User>));
/// assert_eq!(
///     sql,
///     r#"SELECT "username","full_name","email","id","theme" FROM users WHERE id = $1"#
/// );
/// ```
pub fn expression<R: Record + ?Sized>(value: &R) -> String {
    Projector::global().expression(value)
}

/// Column names for `value`, using the process-wide projector.
pub fn names<R: Record + ?Sized>(value: &R) -> Vec<String> {
    Projector::global().names(value)
}
