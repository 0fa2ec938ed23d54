// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub const REASONS_JSON: &str = r#"[
  {
    "ID": "1008",
    "Callout Reason Drop-Down Label": "Odor",
    "Use?": "x",
    "Default?": "",
    "Verbiage": "Odor complaint"
  },
  {
    "ID": 1023,
    "Callout Reason Drop-Down Label": "Fire",
    "Use?": "",
    "Default?": "x",
    "Verbiage": "Fire reported"
  },
  {
    "ID": "2000",
    "Callout Reason Drop-Down Label": "Flood"
  }
]"#;

pub const DESCRIPTIONS_JSON: &str = r#"{
  "Trouble Locations": {
    "description": "Locations that need special handling.",
    "fields": {
      "Location List": {
        "description": "List each trouble location.",
        "example": "Substation 12"
      },
      "Escalation": {
        "description": "Who is called first.",
        "best_practices": "Keep the list short."
      }
    }
  },
  "Additions": {
    "description": "Anything else."
  }
}"#;
