// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field resolution: shape descriptor -> ordered column list.
//!
//! Walks declared fields in order, promoting `#[db(flatten)]` records in
//! place, expanding nested records into `outer.inner` columns and applying
//! `db` tags. Pure: no I/O, no shared state.

pub mod naming;
pub mod tag;

use std::any::TypeId;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::shape::{RecordType, ShapeDescriptor};
use naming::snake_case;
use tag::Tag;

/// How a column was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Plain,
    /// Tagged `,json`: one column, never expanded.
    JsonOpaque,
    /// Sub-field of a nested record, named `outer.inner`.
    NestedExpanded,
}

/// One resolved column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Final SQL column identifier, never empty.
    pub name: String,
    /// Dotted source path for nested columns, empty otherwise.
    pub path: String,
    pub kind: FieldKind,
    /// Position among all emitted columns.
    pub declaration_order: usize,
}

impl FieldSpec {
    /// Names containing `.` are rendered with an alias to stay one
    /// addressable result column.
    #[must_use]
    pub fn needs_alias(&self) -> bool {
        self.name.contains('.')
    }
}

struct Column {
    name: String,
    path: String,
    kind: FieldKind,
}

/// Resolve the record behind `record`, or nothing when there is none.
#[must_use]
pub fn resolve_record(record: Option<RecordType>) -> Vec<FieldSpec> {
    record
        .map(|record| resolve(&record.describe()))
        .unwrap_or_default()
}

/// Resolve a descriptor into its ordered, de-duplicated column list.
///
/// The walk starts with `shape.id` on the expansion stack, so a record
/// nested in itself becomes one plain column at the first level.
#[must_use]
pub fn resolve(shape: &ShapeDescriptor) -> Vec<FieldSpec> {
    dedup(collect(shape, &mut vec![shape.id]))
}

/// Raw columns of `shape` in emission order, duplicates included.
///
/// `expanding` holds the records currently being walked, so a record nested
/// in itself is emitted as a single column instead of recursing forever.
fn collect(shape: &ShapeDescriptor, expanding: &mut Vec<TypeId>) -> Vec<Column> {
    let mut columns = Vec::with_capacity(shape.fields.len());

    for field in &shape.fields {
        let tag = Tag::parse(field.tag);
        if tag.ignored {
            continue;
        }

        if field.embedded {
            if let Some(record) = field.nested {
                if let Some(promoted) = walk_nested(record, shape, expanding) {
                    columns.extend(promoted);
                }
            }
            continue;
        }

        if !field.exported {
            continue;
        }

        let name = match tag.name {
            Some(name) => name.to_owned(),
            None => snake_case(field.ident),
        };
        if name.is_empty() {
            continue;
        }

        if tag.json {
            columns.push(Column {
                name,
                path: String::new(),
                kind: FieldKind::JsonOpaque,
            });
            continue;
        }

        if let Some(record) = field.nested {
            if let Some(inner) = walk_nested(record, shape, expanding) {
                columns.extend(inner.into_iter().map(|column| {
                    let dotted = format!("{name}.{}", column.name);
                    Column {
                        name: dotted.clone(),
                        path: dotted,
                        kind: FieldKind::NestedExpanded,
                    }
                }));
            }
        }

        columns.push(Column {
            name,
            path: String::new(),
            kind: FieldKind::Plain,
        });
    }

    columns
}

fn walk_nested(
    record: RecordType,
    parent: &ShapeDescriptor,
    expanding: &mut Vec<TypeId>,
) -> Option<Vec<Column>> {
    if expanding.contains(&record.id()) {
        log::debug!(
            "[resolve] {} nests {} recursively, not expanding",
            parent.type_name,
            record.name()
        );
        return None;
    }

    expanding.push(record.id());
    let columns = collect(&record.describe(), expanding);
    expanding.pop();
    Some(columns)
}

/// Keep the first column for each name and number the survivors.
fn dedup(columns: Vec<Column>) -> Vec<FieldSpec> {
    let mut seen = HashSet::with_capacity(columns.len());
    let mut specs = Vec::with_capacity(columns.len());

    for column in columns {
        if !seen.insert(column.name.clone()) {
            continue;
        }
        specs.push(FieldSpec {
            declaration_order: specs.len(),
            name: column.name,
            path: column.path,
            kind: column.kind,
        });
    }

    specs
}
