//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a temporary directory with `HOME` pointed at it
//! and the `TREEDIT_*` variables cleared, so user configuration on the host
//! never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 5] = [
    "TREEDIT_CONFIG",
    "TREEDIT_OUTPUT_FORMAT",
    "TREEDIT_CONFIRM_MERGES",
    "TREEDIT_STRICT_IDENTITY",
    "TREEDIT_LOG_MODE",
];

/// Snapshot used by most tests.
///
/// ```text
/// project/
/// ├── src/
/// │   ├── main.rs
/// │   └── lib.rs
/// ├── docs/
/// │   └── guide.md
/// └── README.md
/// ```
#[allow(dead_code)]
pub const PROJECT_SNAPSHOT: &str = r#"{
  "id": "root",
  "name": "project",
  "is_dir": true,
  "children": [
    {
      "id": "src",
      "name": "src",
      "is_dir": true,
      "children": [
        { "id": "main", "name": "main.rs", "is_dir": false },
        { "id": "lib", "name": "lib.rs", "is_dir": false }
      ]
    },
    {
      "id": "docs",
      "name": "docs",
      "is_dir": true,
      "children": [
        { "id": "guide", "name": "guide.md", "is_dir": false }
      ]
    },
    { "id": "readme", "name": "README.md", "is_dir": false }
  ]
}"#;

/// Rendering of [`PROJECT_SNAPSHOT`].
#[allow(dead_code)]
pub const PROJECT_TEXT: &str = "project/
├── src/
│   ├── main.rs
│   └── lib.rs
├── docs/
│   └── guide.md
└── README.md
";

/// Isolated environment for running the binary.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Command builder for the treedit binary, isolated from host config.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("treedit").expect("Failed to find treedit binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the environment and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard project snapshot.
    pub fn snapshot(&self) -> PathBuf {
        self.write("snapshot.json", PROJECT_SNAPSHOT)
    }

    /// Write an edited text.
    pub fn text(&self, contents: &str) -> PathBuf {
        self.write("edited.txt", contents)
    }

    /// Run a command expected to succeed and parse its stdout as JSON.
    pub fn json_output(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run treedit");

        assert!(
            output.status.success(),
            "treedit {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the child of `node` with the given name.
#[allow(dead_code)]
pub fn child<'a>(node: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    node["children"]
        .as_array()
        .expect("node has no children array")
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("no child named {name}"))
}
