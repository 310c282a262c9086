//! Human-readable rendering of a config store
//!
//! Neither output is a serialization format.

use crate::config::ConfigStore;
use crate::value::{Map, Value};
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration ({}", self.name())?;
        if let Some(env) = self.environment() {
            write!(f, ", env={}", env)?;
        }
        writeln!(f, "):")?;
        write_map(f, self.data(), 2)
    }
}

fn write_map(f: &mut fmt::Formatter<'_>, map: &Map, indent: usize) -> fmt::Result {
    for (key, value) in map {
        match value {
            Value::Map(nested) => {
                writeln!(f, "{:indent$}{}:", "", key, indent = indent)?;
                write_map(f, nested, indent + 2)?;
            }
            other => writeln!(f, "{:indent$}{}: {}", "", key, other, indent = indent)?,
        }
    }
    Ok(())
}

/// `"database"` -> `"Database"`, `"API"` -> `"Api"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl ConfigStore {
    /// Write a section header and one `- key: value` line per entry.
    pub fn write_section<W: Write>(&self, section_name: &str, out: &mut W) -> io::Result<()> {
        let empty = Value::Map(Map::new());
        let section = self.get_path_or(section_name, &empty);

        writeln!(out, "{} Configuration:", capitalize(section_name))?;
        if let Value::Map(entries) = section {
            for (key, value) in entries {
                writeln!(out, "  - {}: {}", key, value)?;
            }
        }
        Ok(())
    }

    /// Print a section to stdout.
    pub fn display_section(&self, section_name: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_section(section_name, &mut handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn store(src: &str, env: Option<&str>) -> ConfigStore {
        let raw: serde_yaml::Value = serde_yaml::from_str(src).expect("yaml");
        let data = match Value::from_yaml(raw).expect("convert") {
            Value::Map(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        };
        ConfigStore::from_map("app", env.map(str::to_string), data)
    }

    fn section(store: &ConfigStore, name: &str) -> String {
        let mut out = Vec::new();
        store.write_section(name, &mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_readable_representation() {
        let store = store(
            "db:\n  host: localhost\n  pool:\n    size: 4\ndebug: true\ntags: [a, b]\n",
            Some("dev"),
        );
        insta::assert_snapshot!(store.to_string(), @r"
        Configuration (app, env=dev):
          db:
            host: localhost
            pool:
              size: 4
          debug: true
          tags: [a, b]
        ");
    }

    #[test]
    fn test_readable_representation_without_env() {
        let store = store("z: 1\na: 2\n", None);
        assert_eq!(store.to_string(), "Configuration (app):\n  z: 1\n  a: 2\n");
    }

    #[test]
    fn test_write_section() {
        let store = store("database:\n  host: db.local\n  opts: {ssl: true}\n", None);
        assert_eq!(
            section(&store, "database"),
            "Database Configuration:\n  - host: db.local\n  - opts: {ssl: true}\n"
        );
    }

    #[test]
    fn test_write_nested_and_missing_sections() {
        let store = store("a:\n  b:\n    c: 1\nscalar: 5\n", None);
        assert_eq!(section(&store, "a.b"), "A.b Configuration:\n  - c: 1\n");
        assert_eq!(section(&store, "missing"), "Missing Configuration:\n");
        assert_eq!(section(&store, "scalar"), "Scalar Configuration:\n");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("database"), "Database");
        assert_eq!(capitalize("API"), "Api");
        assert_eq!(capitalize(""), "");
    }
}
