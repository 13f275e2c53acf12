// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for projector construction.
//!
//! Projection itself never fails: absent types and empty shapes resolve to an
//! empty result.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache capacity must hold at least one shape.
    #[error("Invalid cache capacity: 0 (must be at least 1)")]
    ZeroCapacity,
}

/// Convenient alias for results using the crate `Error` type.
pub type Result<T> = core::result::Result<T, Error>;
