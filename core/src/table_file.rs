//! Reading and writing the `#=BIT` rules format.
//!
//! The format is line-oriented text: the first non-empty line is a header
//! beginning with `#=BIT`; every following line is blank, a comment
//! (`#=...`), a rule separator (`------...`), or a data line of the form
//! `<input> <output> [ignored extra fields]`.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::rules::RuleTable;

/// Load ordered rule pairs from a `#=BIT` file.
pub fn load_rules(path: &Path) -> Result<Vec<(String, String)>, Error> {
    if !path.exists() {
        return Err(Error::RuleSourceNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|err| Error::InvalidFormat(format!("{}: {err}", path.display())))?;
    parse_rules(&content)
}

/// Parse the `#=BIT` format from an in-memory string.
///
/// A data line whose input token already appeared updates the earlier
/// entry's output in place, keeping its position — ordered-mapping
/// semantics, so tie-breaking positions in the compiled table stay stable.
pub fn parse_rules(content: &str) -> Result<Vec<(String, String)>, Error> {
    let mut lines = content.lines();
    let header = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line.trim(),
            None => return Err(Error::InvalidFormat("missing #=BIT header".to_string())),
        }
    };
    if !header.starts_with("#=BIT") {
        return Err(Error::InvalidFormat(format!("invalid header: {header}")));
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("#=") || line.starts_with("------") {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(input), Some(output)) = (fields.next(), fields.next()) else {
            // Not enough fields to form a rule; skip like a comment.
            continue;
        };
        match pairs.iter_mut().find(|(existing, _)| existing.as_str() == input) {
            Some(entry) => entry.1 = output.to_string(),
            None => pairs.push((input.to_string(), output.to_string())),
        }
    }

    if pairs.is_empty() {
        return Err(Error::EmptyRuleSource);
    }
    Ok(pairs)
}

/// Write a compiled table to `path` in the round-trippable subset of the
/// load format (header plus `input output` data lines).
pub fn write_table(table: &RuleTable, path: &Path) -> Result<(), Error> {
    fs::write(path, table.to_table_format()).map_err(|source| Error::SerializationFailure {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_lines() {
        let pairs = parse_rules("#=BIT\nch S\nsh Z\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("ch".to_string(), "S".to_string()),
                ("sh".to_string(), "Z".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments_separators_and_blanks() {
        let content = "#=BIT header text\n\n#= a comment\n------\nch S\n\nbad\nsh Z extra ignored\n";
        let pairs = parse_rules(content).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("ch".to_string(), "S".to_string()),
                ("sh".to_string(), "Z".to_string()),
            ]
        );
    }

    #[test]
    fn header_may_follow_blank_lines() {
        assert!(parse_rules("\n\n#=BIT\na b\n").is_ok());
    }

    #[test]
    fn missing_header_is_invalid() {
        assert!(matches!(
            parse_rules("ch S\n"),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(parse_rules(""), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn no_data_lines_is_empty_source() {
        assert!(matches!(
            parse_rules("#=BIT\n#= only comments\n"),
            Err(Error::EmptyRuleSource)
        ));
    }

    #[test]
    fn duplicate_input_updates_in_place() {
        let pairs = parse_rules("#=BIT\na 1\nb 2\na 3\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("libvoynich_no_such_table.bit");
        assert!(matches!(
            load_rules(&path),
            Err(Error::RuleSourceNotFound(_))
        ));
    }
}
