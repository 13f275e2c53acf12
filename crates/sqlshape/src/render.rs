// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Rendering of resolved columns into a `SELECT` list or plain names.

use crate::resolve::FieldSpec;

/// Quoted, comma-joined projection: `"a","b.c" as "b.c"`.
#[must_use]
pub fn expression(specs: &[FieldSpec]) -> String {
    let mut out = String::with_capacity(specs.iter().map(|s| s.name.len() * 2 + 8).sum());

    for (idx, spec) in specs.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        push_quoted(&mut out, &spec.name);
        if spec.needs_alias() {
            out.push_str(" as ");
            push_quoted(&mut out, &spec.name);
        }
    }

    out
}

/// Column names in order, unquoted.
#[must_use]
pub fn names(specs: &[FieldSpec]) -> Vec<String> {
    specs.iter().map(|spec| spec.name.clone()).collect()
}

fn push_quoted(out: &mut String, ident: &str) {
    out.push('"');
    for ch in ident.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
