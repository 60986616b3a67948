//! Minimal INI document store backing each configuration domain.
//!
//! Values are stored as strings and parsed on read with caller-supplied
//! defaults; section order and key insertion order are preserved when the
//! document is written back out.

use thiserror::Error;

/// Strings accepted as `true` by [`IniDocument::get_bool`], case-insensitive.
const TRUE_VALUES: &[&str] = &["true", "yes", "on", "1"];

/// Strings accepted as `false` by [`IniDocument::get_bool`], case-insensitive.
const FALSE_VALUES: &[&str] = &["false", "no", "off", "0"];

/// Error type for INI parsing.
#[derive(Error, Debug)]
pub enum IniError {
    /// A line could not be interpreted as a section header or key/value pair.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// An ordered collection of named sections of string key/value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

/// A named group of key/value pairs within a document.
#[derive(Debug, Clone, PartialEq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, creating the section if needed.
    ///
    /// Keys within a section are unique: setting an existing key replaces
    /// its value in place.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let index = match self.sections.iter().position(|s| s.name == section) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        let entries = &mut self.sections[index].entries;
        if let Some(entry) = entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Gets a value as a string, returning `default` when absent.
    #[must_use]
    pub fn get(&self, section: &str, key: &str, default: &str) -> String {
        self.lookup(section, key)
            .unwrap_or(default)
            .to_string()
    }

    /// Gets a value as a boolean, returning `default` when absent or
    /// unparseable.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`,
    /// case-insensitively.
    #[must_use]
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.lookup(section, key) {
            Some(value) => {
                let lowered = value.trim().to_ascii_lowercase();
                if TRUE_VALUES.contains(&lowered.as_str()) {
                    true
                } else if FALSE_VALUES.contains(&lowered.as_str()) {
                    false
                } else {
                    default
                }
            }
            None => default,
        }
    }

    /// Gets a value as an integer, returning `default` when absent or
    /// unparseable.
    #[must_use]
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.lookup(section, key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Iterates over all `(section, key, value)` triples in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|section| {
            section
                .entries
                .iter()
                .map(|(key, value)| (section.name.as_str(), key.as_str(), value.as_str()))
        })
    }

    /// Parses a document from INI-style text.
    ///
    /// `[section]` headers introduce sections, `key = value` lines populate
    /// them; blank lines and `;`/`#` comment lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `IniError::Parse` for a malformed header, a key/value pair
    /// outside any section, or a line without a `=` separator.
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut document = Self::new();
        let mut current_section: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| IniError::Parse {
                    line: index + 1,
                    reason: "unterminated section header".to_string(),
                })?;
                current_section = Some(name.trim().to_string());
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| IniError::Parse {
                line: index + 1,
                reason: "expected 'key = value'".to_string(),
            })?;
            let section = current_section.as_deref().ok_or_else(|| IniError::Parse {
                line: index + 1,
                reason: "key/value pair outside any section".to_string(),
            })?;

            document.set(section, key.trim(), value.trim());
        }

        Ok(document)
    }

    /// Serializes the document back to INI-style text.
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        let mut output = String::new();
        for section in &self.sections {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.entries {
                output.push_str(&format!("{} = {}\n", key, value));
            }
        }
        output
    }

    /// Finds a raw value, if present.
    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
