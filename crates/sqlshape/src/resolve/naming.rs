// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default column names derived from field identifiers.

/// Convert a word-capitalized identifier to `snake_case`.
///
/// A run of capitals is one word: `UserID` becomes `user_id` and
/// `HTTPServer` becomes `http_server`. Already snake-cased identifiers are
/// returned unchanged.
#[must_use]
pub fn snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            if idx > 0 && !out.ends_with('_') {
                let prev = chars[idx - 1];
                let next_is_lower = chars.get(idx + 1).is_some_and(|c| c.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
