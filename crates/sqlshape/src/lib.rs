// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # sqlshape - SQL column projections from Rust structs
//!
//! Derive [`Shape`] on a struct and get a `SELECT` list that follows its
//! fields, so queries never enumerate columns by hand and never drift from
//! the type they decode into.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlshape::Shape;
//!
//! #[derive(Shape)]
//! pub struct Theme {
//!     pub primary_color: String,
//!     pub text_color: String,
//! }
//!
//! #[derive(Shape)]
//! pub struct Profile {
//!     pub id: i64,
//!     pub theme: Theme,
//!     #[db("settings,json")]
//!     pub settings: Theme,
//! }
//!
//! assert_eq!(
//!     sqlshape::expression(&None::<Profile>),
//!     r#""id","theme.primary_color" as "theme.primary_color","theme.text_color" as "theme.text_color","theme","settings""#
//! );
//! ```
//!
//! ## Field rules
//!
//! - Only plain `pub` fields are columns.
//! - Names default to the `snake_case` form of the identifier.
//! - `#[db("name")]` sets the column name verbatim, `#[db("-")]` skips the
//!   field, `#[db("name,json")]` or `#[db(",json")]` keeps a record as one
//!   opaque column.
//! - `#[db(flatten)]` promotes the fields of an embedded record in place.
//! - A field whose type is a record expands to `outer.inner` columns (aliased
//!   in the expression), followed by the bare `outer` column.
//! - A repeated column name keeps its first occurrence.
//!
//! Resolved shapes are cached per type in a bounded LRU cache, see
//! [`Projector`].

pub mod cache;
pub mod config;
pub mod error;
pub mod projector;
pub mod render;
pub mod resolve;
pub mod shape;

pub use cache::{LookupStats, ShapeCache};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use projector::{expression, names, Projector};
pub use resolve::{FieldKind, FieldSpec};
pub use shape::{FieldDescriptor, Record, RecordType, Shape, ShapeDescriptor};

// Derive macro (for #[derive(sqlshape::Shape)])
pub use sqlshape_codegen::Shape;

#[doc(hidden)]
pub use shape::__private;
