// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(non_snake_case)] // Field identifiers exercise name derivation
#![allow(dead_code)] // Shapes are never constructed with data

//! Projection integration tests
//!
//! Validates `#[derive(Shape)]` + resolution + rendering through the public API.

use sqlshape::resolve::{resolve, resolve_record};
use sqlshape::{FieldKind, Projector, Record, Shape};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::SystemTime;

#[derive(Shape)]
pub struct User {
    pub Username: String,
    pub FullName: String,
    pub Email: String,
    #[db("id")]
    pub Alias: String,
    #[db("theme,json")]
    pub Theme: Theme,
    #[db("-")]
    pub LastSeen: SystemTime,
}

#[derive(Shape, Default)]
pub struct Theme {
    pub PrimaryColor: String,
    pub SecondaryColor: String,
    pub TextColor: String,
    pub TextUppercase: bool,
    pub FontFamilyHeadings: String,
    pub FontFamilyBody: String,
    pub FontFamilyDefault: String,
}

#[derive(Shape, Default)]
pub struct Mock {
    pub Automatic: String,
    #[db("tagged")]
    pub Tagged: String,
    pub OneTwo: String,
    #[db("CamelCase")]
    pub CamelCase: String,
    #[db("-")]
    pub Ignored: String,
}

#[derive(Shape)]
pub struct MockEmbed {
    pub Before: i32,
    #[db(flatten)]
    mock: Mock,
    pub After: String,
}

#[derive(Shape)]
pub struct NumericMock {
    pub Number: i64,
}

#[derive(Shape)]
pub struct MockSimpleMultiEmbed {
    #[db(flatten)]
    mock: Mock,
    #[db(flatten)]
    numeric: NumericMock,
}

#[derive(Shape)]
pub struct MockMultiEmbed {
    pub A: String,
    #[db(flatten)]
    mock: Mock,
    pub B: String,
    #[db(flatten)]
    numeric: Box<NumericMock>,
    pub C: String,
}

#[derive(Shape)]
pub struct EmptyEmbed;

#[derive(Shape)]
pub struct NameMock {
    #[db(flatten)]
    empty: EmptyEmbed,
    pub Name: String,
}

#[derive(Shape)]
pub struct Unexported {
    unexported: i32,
    pub(crate) restricted: i32,
}

#[derive(Shape)]
pub struct Single {
    pub One: i32,
}

#[derive(Shape)]
pub struct Duplicated {
    pub Automatic: String,
    #[db("tagged")]
    pub Tagged: String,
    pub OneTwo: String,
    #[db("CamelCase")]
    pub CamelCase: String,
    #[db("-")]
    pub Ignored: String,
    pub Copy: String,
    #[db("copy")]
    pub Duplicated: String,
}

#[derive(Shape)]
pub struct JsonMock {
    pub ID: String,
    pub Name: String,
    pub Code: String,
    pub IsActive: bool,
    #[db("theme,json")]
    pub Theme: Theme,
    pub CreatedAt: SystemTime,
    pub ModifiedAt: SystemTime,
}

#[derive(Shape)]
pub struct HasNestedMock {
    pub ID: String,
    pub Name: String,
    pub Code: String,
    pub IsActive: bool,
    pub Theme: Theme,
    pub CreatedAt: SystemTime,
    pub ModifiedAt: SystemTime,
}

#[derive(Shape)]
pub struct HasPointerNestedMock {
    pub ID: String,
    pub Name: String,
    pub Code: String,
    pub IsActive: bool,
    pub Theme: Option<Box<Theme>>,
    pub CreatedAt: SystemTime,
    pub ModifiedAt: SystemTime,
}

#[derive(Shape)]
pub struct RegularFieldWithDots {
    #[db("regular.field.with.dots")]
    pub RegularFieldWithDots: String,
}

#[derive(Shape)]
pub struct Tree {
    pub Label: String,
    pub Parent: Option<Arc<Tree>>,
    pub Children: Vec<Tree>,
}

#[derive(Shape)]
pub struct Page<T> {
    pub Items: Vec<T>,
    pub Cursor: T,
    pub Total: u64,
}

#[derive(Shape)]
pub struct RawIdents {
    pub r#type: String,
    pub r#Match: String,
}

const NESTED: &str = r#""id","name","code","is_active","theme.primary_color" as "theme.primary_color","theme.secondary_color" as "theme.secondary_color","theme.text_color" as "theme.text_color","theme.text_uppercase" as "theme.text_uppercase","theme.font_family_headings" as "theme.font_family_headings","theme.font_family_body" as "theme.font_family_body","theme.font_family_default" as "theme.font_family_default","theme","created_at","modified_at""#;

const MOCK: &str = r#""automatic","tagged","one_two","CamelCase""#;

fn projector() -> Projector {
    Projector::with_capacity(NonZeroUsize::new(64).expect("capacity"))
}

#[test]
fn test_user_expression() {
    let sql = format!(
        "SELECT {} WHERE id = $1",
        sqlshape::expression(&None::<User>)
    );
    assert_eq!(
        sql,
        r#"SELECT "username","full_name","email","id","theme" WHERE id = $1"#
    );
}

#[test]
fn test_user_names() {
    assert_eq!(
        sqlshape::names(&None::<User>).join("\n"),
        "username\nfull_name\nemail\nid\ntheme"
    );
}

#[test]
fn test_mock_and_cached() {
    let projector = projector();
    let mock = Mock {
        Automatic: "auto string".into(),
        Tagged: "tag string".into(),
        ..Mock::default()
    };
    assert_eq!(projector.expression(&mock), MOCK);
    assert_eq!(projector.expression(&mock), MOCK);
    assert_eq!(projector.expression(&Mock::default()), MOCK);
    assert_eq!(projector.cache().len(), 1);
    assert_eq!(projector.cache().stats().misses, 1);
}

#[test]
fn test_empty_and_unexported() {
    let projector = projector();
    assert_eq!(projector.expression(&EmptyEmbed), "");
    assert_eq!(projector.expression_of::<Unexported>(), "");
    assert_eq!(projector.expression_of::<&Unexported>(), "");
    assert!(projector.names_of::<Unexported>().is_empty());
}

#[test]
fn test_single() {
    let projector = projector();
    assert_eq!(projector.expression_of::<Single>(), r#""one""#);
    assert_eq!(projector.expression_of::<&Single>(), r#""one""#);
}

#[test]
fn test_duplicated() {
    assert_eq!(
        projector().expression_of::<Duplicated>(),
        r#""automatic","tagged","one_two","CamelCase","copy""#
    );
}

#[test]
fn test_embed() {
    let projector = projector();
    assert_eq!(
        projector.expression_of::<MockEmbed>(),
        r#""before","automatic","tagged","one_two","CamelCase","after""#
    );
    assert_eq!(projector.expression_of::<NumericMock>(), r#""number""#);
    assert_eq!(
        projector.expression_of::<MockSimpleMultiEmbed>(),
        r#""automatic","tagged","one_two","CamelCase","number""#
    );
    assert_eq!(
        projector.expression_of::<MockMultiEmbed>(),
        r#""a","automatic","tagged","one_two","CamelCase","b","number","c""#
    );
    assert_eq!(projector.expression(&None::<Box<NameMock>>), r#""name""#);
}

#[test]
fn test_pointer() {
    let projector = projector();
    let mock = Mock::default();
    assert_eq!(projector.expression(&&mock), MOCK);
    assert_eq!(projector.expression(&Box::new(Mock::default())), MOCK);
    assert_eq!(projector.expression(&Arc::new(Mock::default())), MOCK);
}

#[test]
fn test_json() {
    let want = r#""id","name","code","is_active","theme","created_at","modified_at""#;
    let projector = projector();
    assert_eq!(projector.expression_of::<Box<JsonMock>>(), want);

    let uninitialized: Option<&JsonMock> = None;
    assert_eq!(projector.expression(&uninitialized), want);
}

#[test]
fn test_untyped() {
    assert_eq!(sqlshape::expression(&()), "");
    assert!(sqlshape::names(&()).is_empty());
    assert_eq!(projector().expression(&None::<()>), "");
}

#[test]
fn test_nested() {
    let projector = projector();
    assert_eq!(projector.expression_of::<HasNestedMock>(), NESTED);
    assert_eq!(projector.expression_of::<&HasPointerNestedMock>(), NESTED);
}

#[test]
fn test_nested_names() {
    let names = projector().names_of::<HasNestedMock>();
    assert_eq!(names.len(), 14);
    assert_eq!(names[4], "theme.primary_color");
    assert_eq!(names[11], "theme");
}

#[test]
fn test_regular_field_with_dots() {
    assert_eq!(
        projector().expression_of::<RegularFieldWithDots>(),
        r#""regular.field.with.dots" as "regular.field.with.dots""#
    );
}

#[test]
fn test_self_reference_terminates() {
    assert_eq!(
        projector().expression_of::<Tree>(),
        r#""label","parent","children""#
    );
}

#[test]
fn test_descriptor_and_record_resolve_alike() {
    let from_descriptor = resolve(&<Tree as Shape>::describe());
    let from_record = resolve_record(<Tree as Record>::record_type());
    assert_eq!(from_descriptor, from_record);
    assert_eq!(from_descriptor.len(), 3);
    assert_eq!(<Tree as Shape>::describe().id, std::any::TypeId::of::<Tree>());
}

#[test]
fn test_generic_parameters_are_plain() {
    assert_eq!(
        projector().expression_of::<Page<Theme>>(),
        r#""items","cursor","total""#
    );
}

#[test]
fn test_raw_identifiers() {
    assert_eq!(
        projector().expression_of::<RawIdents>(),
        r#""type","match""#
    );
}

#[test]
fn test_descriptor_facts() {
    let shape = <MockEmbed as Shape>::describe();
    assert_eq!(shape.type_name, "MockEmbed");
    assert_eq!(shape.fields.len(), 3);
    assert!(shape.fields[1].embedded);
    assert!(!shape.fields[1].exported);
    assert!(shape.fields[1].nested.is_some());
    assert!(shape.fields[0].nested.is_none());

    let user = <User as Shape>::describe();
    assert_eq!(user.fields[3].tag, Some("id"));
    assert_eq!(user.fields[4].tag, Some("theme,json"));
    assert!(user.fields[4].nested.is_some());
}

#[test]
fn test_resolved_kinds_serialize() {
    let specs = resolve(&<HasNestedMock as Shape>::describe());
    assert_eq!(specs[4].kind, FieldKind::NestedExpanded);
    assert_eq!(specs[4].path, "theme.primary_color");

    let json = serde_json::to_value(&specs[4]).expect("serialize");
    assert_eq!(json["name"], "theme.primary_color");
    assert_eq!(json["kind"], "NestedExpanded");
    assert_eq!(json["declaration_order"], 4);
}
