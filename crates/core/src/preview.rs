// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sig_domain::{HierarchyConfig, Level, LocationEntry};
use std::fmt::Write;

/// Shown when no entry has any level filled in.
pub const EMPTY_PREVIEW: &str =
    "No entries yet. Add location hierarchy entries to build the preview.";

/// Renders the hierarchy as an indented tree, one block per populated entry.
///
/// A level is only nested under its parent when the parent is filled in.
/// Codes and the time zone override are listed under Level 4, and only once
/// all four levels are filled in.
#[must_use]
pub fn hierarchy_preview(config: &HierarchyConfig) -> String {
    let mut out: String = String::new();

    for entry in config.entries.iter().filter(|e| e.is_populated()) {
        let depth: usize = render_levels(&mut out, entry);
        if depth < Level::ALL.len() {
            continue;
        }
        let indent: String = "  ".repeat(depth);

        let codes: Vec<&str> = entry.active_codes().collect();
        if !codes.is_empty() {
            let _ = writeln!(out, "{indent}(Codes: {})", codes.join(", "));
        }
        if !entry.timezone.trim().is_empty() {
            let _ = writeln!(out, "{indent}[Time Zone: {}]", entry.timezone.trim());
        }
    }

    if out.is_empty() {
        return String::from(EMPTY_PREVIEW);
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_levels(out: &mut String, entry: &LocationEntry) -> usize {
    let mut depth: usize = 0;
    for level in Level::ALL {
        let name: &str = entry.level(level).trim();
        if name.is_empty() {
            break;
        }
        let _ = writeln!(out, "{}\u{2022} {name}", "  ".repeat(depth));
        depth += 1;
    }
    depth
}
