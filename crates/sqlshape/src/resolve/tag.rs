// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `db` tag grammar: `"-"`, `"name"`, `"name,json"`, `",json"`.
//!
//! A tag is opaque JSON only when its last option is `json`. Options in
//! between are accepted and ignored.

/// Parsed `db` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag<'a> {
    /// Explicit column name, used verbatim.
    pub name: Option<&'a str>,
    /// Opaque JSON column, never expanded.
    pub json: bool,
    /// Field excluded from the projection.
    pub ignored: bool,
}

impl<'a> Tag<'a> {
    #[must_use]
    pub fn parse(raw: Option<&'a str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        if raw == "-" {
            return Self {
                ignored: true,
                ..Self::default()
            };
        }

        let mut parts = raw.split(',');
        let name = parts.next().filter(|name| !name.is_empty());
        let json = parts.last() == Some("json");

        Self {
            name,
            json,
            ignored: false,
        }
    }
}
