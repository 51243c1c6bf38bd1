//! SQL script handling.

use std::path::PathBuf;

/// File name of the yoga reference data script.
pub const YOGA_SCRIPT: &str = "yoga_data.sql";

/// Location of the yoga script shipped alongside this crate.
pub fn default_script_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(YOGA_SCRIPT)
}

/// Splits a script into executable statements.
///
/// The split is purely textual: every `;` ends a statement, fragments are
/// trimmed and empty ones dropped. A `;` inside a string literal, a comment
/// or a procedural body breaks that statement apart, so scripts fed through
/// here must not contain any.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_delimiter_is_dropped() {
        let statements = split_statements("INSERT INTO x VALUES (1);  ; INSERT INTO x VALUES (2);");
        assert_eq!(
            statements,
            vec!["INSERT INTO x VALUES (1)", "INSERT INTO x VALUES (2)"]
        );
    }

    #[test]
    fn test_missing_trailing_delimiter() {
        let statements = split_statements("SELECT 1;\n\nSELECT 2");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_whitespace_only_script() {
        assert!(split_statements(" \n\t ;; \n").is_empty());
        assert!(split_statements("").is_empty());
    }

    #[test]
    fn test_multiline_statement_is_trimmed_not_rewritten() {
        let script = "\n  INSERT INTO yoga_asanas (name)\n  VALUES ('Tadasana');\n";
        assert_eq!(
            split_statements(script),
            vec!["INSERT INTO yoga_asanas (name)\n  VALUES ('Tadasana')"]
        );
    }

    #[test]
    fn test_semicolon_in_literal_splits_statement() {
        // Known limitation of the textual split
        let statements = split_statements("INSERT INTO x VALUES ('a;b')");
        assert_eq!(statements, vec!["INSERT INTO x VALUES ('a", "b')"]);
    }

    #[test]
    fn test_shipped_script_is_split_into_statements() {
        let script = std::fs::read_to_string(default_script_path()).unwrap();
        let statements = split_statements(&script);
        assert!(!statements.is_empty());
        assert!(
            statements
                .iter()
                .all(|s| s.starts_with("INSERT INTO yoga_asanas"))
        );
    }
}
