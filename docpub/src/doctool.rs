//! Doc-tool configuration files.
//!
//! Doxygen configuration is line-oriented `KEY = value` text. This module
//! models such a file as a list of lines so that a handful of fields can be
//! rewritten while every other line, comments and all, is preserved as
//! read. Append lines (`KEY += value`) and backslash-continued values are
//! passed through untouched; they are never looked up or rewritten.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Key holding the project name in a Doxygen configuration.
pub const PROJECT_NAME: &str = "PROJECT_NAME";
/// Key holding the project version in a Doxygen configuration.
pub const PROJECT_NUMBER: &str = "PROJECT_NUMBER";
/// Key naming the root output directory of a Doxygen run.
pub const OUTPUT_DIRECTORY: &str = "OUTPUT_DIRECTORY";
/// Key naming the HTML output directory, relative to [`OUTPUT_DIRECTORY`].
pub const HTML_OUTPUT: &str = "HTML_OUTPUT";

#[derive(Debug, Clone)]
enum Line {
    /// A plain `KEY = value` assignment. The raw text is kept so untouched
    /// assignments round-trip exactly; it is re-rendered only on rewrite.
    Assignment {
        key: String,
        value: String,
        raw: String,
    },
    /// Any other line: comments, blanks, appends, continued values.
    Other(String),
}

/// An in-memory doc-tool configuration file.
///
/// Lookup and rewrite operate on plain assignments only. When a key is
/// assigned more than once the last assignment wins, matching how the tool
/// itself reads the file.
#[derive(Debug, Clone)]
pub struct ToolConfigFile {
    lines: Vec<Line>,
}

impl ToolConfigFile {
    /// Load a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolConfig`] when `path` does not name a regular
    /// file, or [`Error::Io`] when reading fails.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ToolConfig {
                path: path.to_path_buf(),
                reason: "doesn't exist or is not a file".to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        let mut lines = Vec::new();
        let mut continued = false;
        for raw in contents.lines() {
            if continued {
                lines.push(Line::Other(raw.to_string()));
            } else {
                lines.push(parse_line(raw));
            }
            continued = raw.trim_end().ends_with('\\');
        }
        Self { lines }
    }

    /// The value of the last plain assignment of `key`, with surrounding
    /// quotes stripped. `None` when the file never assigns the key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            Line::Assignment {
                key: line_key,
                value,
                ..
            } if line_key == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Rewrite the last plain assignment of `key`, or append one when the
    /// file has none.
    pub fn set(&mut self, key: &str, value: &str) {
        let rendered = render(key, value);
        let existing = self.lines.iter_mut().rev().find_map(|line| match line {
            Line::Assignment { key: line_key, .. } if line_key == key => Some(line),
            _ => None,
        });
        match existing {
            Some(line) => {
                *line = Line::Assignment {
                    key: key.to_string(),
                    value: value.to_string(),
                    raw: rendered,
                };
            }
            None => self.lines.push(Line::Assignment {
                key: key.to_string(),
                value: value.to_string(),
                raw: rendered,
            }),
        }
    }

    /// Write the file back out, one line per stored line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when writing fails.
    pub fn store(&self, path: &Path) -> Result<()> {
        let mut contents = String::new();
        for line in &self.lines {
            let raw = match line {
                Line::Assignment { raw, .. } | Line::Other(raw) => raw,
            };
            contents.push_str(raw);
            contents.push('\n');
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

fn parse_line(raw: &str) -> Line {
    match parse_assignment(raw) {
        Some((key, value)) => Line::Assignment {
            key,
            value,
            raw: raw.to_string(),
        },
        None => Line::Other(raw.to_string()),
    }
}

/// Split a plain `KEY = value` line. Comments, appends (`+=`), lines with
/// continued values, and anything without a bare key all return `None`.
fn parse_assignment(raw: &str) -> Option<(String, String)> {
    if raw.trim_start().starts_with('#') || raw.trim_end().ends_with('\\') {
        return None;
    }
    let eq = raw.find('=')?;
    let key = raw[..eq].trim();
    if key.is_empty() || key.ends_with('+') || key.contains(char::is_whitespace) {
        return None;
    }
    let value = unquote(raw[eq + 1..].trim());
    Some((key.to_string(), value.to_string()))
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

fn render(key: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{key} =")
    } else if value.contains(char::is_whitespace) {
        format!("{key} = \"{value}\"")
    } else {
        format!("{key} = {value}")
    }
}
