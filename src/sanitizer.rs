// ABOUTME: Cosmetic cleanup of model output before display
// ABOUTME: Replaces stray <br> and <div> tags; not a security boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Response sanitizer.
//!
//! Only four literal tags are touched. The output is NOT safe for embedding in
//! HTML; it is plain text meant for a terminal or a markdown viewer.

/// Literal replacements, applied in order
const REPLACEMENTS: [(&str, &str); 4] = [
    ("<br>", " "),
    ("</br>", " "),
    ("<div>", ""),
    ("</div>", ""),
];

/// Remove `<br>`, `</br>`, `<div>` and `</div>` from model output.
///
/// Replacement repeats until nothing changes, so removing one tag cannot leave
/// another one behind (`"<di<div>v>"` becomes `""`) and the function is
/// idempotent.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.to_owned();
    loop {
        let next = REPLACEMENTS
            .iter()
            .fold(current.clone(), |text, (from, to)| text.replace(from, to));
        if next == current {
            return next;
        }
        current = next;
    }
}
