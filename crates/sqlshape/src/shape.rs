// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape descriptors: the facts `#[derive(Shape)]` records about a struct.
//!
//! A `ShapeDescriptor` lists every declared field in declaration order, with
//! its visibility, raw `db` tag, embedding flag and the record type reachable
//! from its type. No column rule is applied here; the resolver does that.

use std::any::TypeId;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A struct whose fields can be projected as SQL columns.
///
/// Implemented by `#[derive(Shape)]`. Manual implementations are possible
/// but must list fields in declaration order.
pub trait Shape: 'static {
    /// Describe the declared fields of this type.
    fn describe() -> ShapeDescriptor;
}

/// Anything that may lead to a [`Shape`] type: the record itself, a
/// reference or smart pointer to it, an `Option` of it, or `()` for "no type
/// information".
///
/// Resolution is type-driven: `None::<&User>` resolves exactly like a
/// populated `User`.
pub trait Record {
    /// Record type reachable from `Self`, if any.
    fn record_type() -> Option<RecordType>;
}

/// Identity and descriptor entry point for one `Shape` type.
#[derive(Clone, Copy)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    describe: fn() -> ShapeDescriptor,
}

impl RecordType {
    #[must_use]
    pub fn of<S: Shape>() -> Self {
        Self {
            id: TypeId::of::<S>(),
            name: std::any::type_name::<S>(),
            describe: S::describe,
        }
    }

    /// Cache key for this type.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn describe(&self) -> ShapeDescriptor {
        (self.describe)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Declared fields of one struct.
#[derive(Debug, Clone)]
pub struct ShapeDescriptor {
    /// Identity of the described type, same key as [`RecordType::id`].
    pub id: TypeId,
    pub type_name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl ShapeDescriptor {
    /// Descriptor for `S`, usually called as `ShapeDescriptor::new::<Self>`.
    #[must_use]
    pub fn new<S: Shape>(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            id: TypeId::of::<S>(),
            type_name,
            fields,
        }
    }
}

/// One declared field, as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identifier, without any `r#` prefix.
    pub ident: &'static str,
    /// Declared plain `pub`.
    pub exported: bool,
    /// Raw value of `#[db("...")]`.
    pub tag: Option<&'static str>,
    /// Declared with `#[db(flatten)]`.
    pub embedded: bool,
    /// Record reachable from the field type, if it is one.
    pub nested: Option<RecordType>,
}

impl FieldDescriptor {
    /// Exported scalar field with no tag.
    #[must_use]
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            exported: true,
            tag: None,
            embedded: false,
            nested: None,
        }
    }

    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    #[must_use]
    pub const fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub fn nested(mut self, record: Option<RecordType>) -> Self {
        self.nested = record;
        self
    }

    #[must_use]
    pub fn embedded(mut self, record: Option<RecordType>) -> Self {
        self.embedded = true;
        self.nested = record;
        self
    }
}

impl Record for () {
    fn record_type() -> Option<RecordType> {
        None
    }
}

impl<T: Record> Record for Option<T> {
    fn record_type() -> Option<RecordType> {
        T::record_type()
    }
}

macro_rules! forward_record {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Record + ?Sized> Record for $ptr {
                fn record_type() -> Option<RecordType> {
                    T::record_type()
                }
            }
        )*
    };
}

forward_record!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Support code for `#[derive(Shape)]`. Not public API.
#[doc(hidden)]
pub mod __private {
    use super::{Record, RecordType};
    use std::marker::PhantomData;

    /// Compile-time probe telling record field types from plain columns.
    ///
    /// `(&Probe::<T>::new()).record_type()` picks [`RecordProbe`] when
    /// `T: Record` and falls back to [`ScalarProbe`] through autoref
    /// otherwise.
    pub struct Probe<T: ?Sized>(PhantomData<fn() -> *const T>);

    impl<T: ?Sized> Probe<T> {
        #[must_use]
        pub const fn new() -> Self {
            Self(PhantomData)
        }
    }

    pub trait RecordProbe {
        fn record_type(&self) -> Option<RecordType>;
    }

    impl<T: Record + ?Sized> RecordProbe for Probe<T> {
        fn record_type(&self) -> Option<RecordType> {
            T::record_type()
        }
    }

    pub trait ScalarProbe {
        fn record_type(&self) -> Option<RecordType>;
    }

    impl<T: ?Sized> ScalarProbe for &Probe<T> {
        fn record_type(&self) -> Option<RecordType> {
            None
        }
    }
}
