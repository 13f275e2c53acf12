// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(dead_code)] // Shapes are never constructed with data

//! SQLite smoke test
//!
//! Runs rendered projections against an in-memory SQLite database to check
//! that quoting and aliasing produce valid, addressable result columns.

use rusqlite::Connection;
use sqlshape::Shape;

#[derive(Shape)]
pub struct Theme {
    pub primary_color: String,
    pub text_color: String,
}

#[derive(Shape)]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[db("settings,json")]
    pub settings: Theme,
    pub theme: Theme,
    #[db("-")]
    pub password_hash: String,
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory database");
    conn.execute_batch(
        r#"
        CREATE TABLE accounts (
            "id" INTEGER PRIMARY KEY,
            "username" TEXT NOT NULL,
            "settings" TEXT NOT NULL,
            "theme.primary_color" TEXT NOT NULL,
            "theme.text_color" TEXT NOT NULL,
            "theme" TEXT
        );
        INSERT INTO accounts VALUES (1, 'ada', '{"dark":true}', '#000000', '#ffffff', NULL);
        "#,
    )
    .expect("create schema");
    conn
}

#[test]
fn test_select_with_rendered_expression() {
    let conn = setup();
    let sql = format!(
        "SELECT {} FROM accounts WHERE id = ?1",
        sqlshape::expression(&None::<Account>)
    );

    let mut stmt = conn.prepare(&sql).expect("prepare");
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(columns, sqlshape::names(&None::<Account>));

    let (username, primary): (String, String) = stmt
        .query_row([1], |row| {
            Ok((
                row.get("username")?,
                row.get("theme.primary_color")?,
            ))
        })
        .expect("query row");
    assert_eq!(username, "ada");
    assert_eq!(primary, "#000000");
}
