//! Classification of a single edited line.
//!
//! A line carries two things: how deep it is nested, and the entry name with
//! its directory marker. Both have to cope with hand-edited text, so the level
//! falls back to plain indentation when the connector glyphs are gone, and the
//! name is only stripped of a complete connector token.

use super::format::INDENT_WIDTH;

/// Glyphs that start a connector.
const BRANCH_GLYPHS: [char; 2] = ['├', '└'];
/// Dash run that follows a branch glyph in a connector.
const CONNECTOR_DASHES: &str = "──";

/// One non-root line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry {
    /// Nesting level; children of the root are at level 1.
    pub level: usize,
    /// Entry name without connector or directory slash.
    pub name: String,
    /// Whether the line ended with `/`.
    pub is_dir: bool,
}

impl LineEntry {
    /// Classify a raw line.
    ///
    /// # Examples
    ///
    /// ```
    /// use treedit::text::LineEntry;
    ///
    /// let entry = LineEntry::parse("│   └── docs/");
    /// assert_eq!(entry.level, 2);
    /// assert_eq!(entry.name, "docs");
    /// assert!(entry.is_dir);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let (name, is_dir) = extract_name(line);
        Self {
            level: nesting_level(line),
            name: name.to_string(),
            is_dir,
        }
    }
}

/// Nesting level of a line.
///
/// With a branch glyph, the level is its character column divided by the
/// indent width, plus one. Without one, it is the number of leading
/// whitespace characters divided by the indent width.
#[must_use]
pub fn nesting_level(line: &str) -> usize {
    match line.chars().position(|c| BRANCH_GLYPHS.contains(&c)) {
        Some(column) => column / INDENT_WIDTH + 1,
        None => line.chars().take_while(|c| c.is_whitespace()).count() / INDENT_WIDTH,
    }
}

/// Entry name and directory flag of a line.
///
/// The structural prefix is removed only when it is complete: a run of `│`,
/// `├`, `└` and whitespace ending in `├──` or `└──` followed by whitespace.
/// A name such as `─ notes.txt` or `└draft` is returned untouched.
#[must_use]
pub fn extract_name(line: &str) -> (&str, bool) {
    let trimmed = line.trim();
    let name = strip_connector(trimmed).unwrap_or(trimmed);
    match name.strip_suffix('/') {
        Some(dir_name) => (dir_name, true),
        None => (name, false),
    }
}

fn is_structural(c: char) -> bool {
    c == '│' || BRANCH_GLYPHS.contains(&c) || c.is_whitespace()
}

fn strip_connector(trimmed: &str) -> Option<&str> {
    let run_end = trimmed
        .char_indices()
        .find(|&(_, c)| !is_structural(c))
        .map_or(trimmed.len(), |(at, _)| at);

    // The dashes end the structural run, so the branch glyph must be its last
    // character.
    let (glyph_at, glyph) = trimmed[..run_end].char_indices().next_back()?;
    if !BRANCH_GLYPHS.contains(&glyph) {
        return None;
    }

    let after_dashes = trimmed[glyph_at + glyph.len_utf8()..].strip_prefix(CONNECTOR_DASHES)?;
    let name = after_dashes.trim_start();
    if name.len() == after_dashes.len() || name.is_empty() {
        return None;
    }
    Some(name)
}
