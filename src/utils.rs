/// Split a comma-separated list of variable names
///
/// Each entry is trimmed and entries that end up empty are dropped. Order and
/// duplicates are kept as given.
pub fn parse_env_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_names_single() {
        assert_eq!(parse_env_names("MY_VAR"), vec!["MY_VAR"]);
    }

    #[test]
    fn test_parse_env_names_multiple() {
        assert_eq!(
            parse_env_names("VAR1,VAR2,VAR3"),
            vec!["VAR1", "VAR2", "VAR3"]
        );
    }

    #[test]
    fn test_parse_env_names_skips_blank_entries() {
        assert_eq!(parse_env_names("A,,B"), vec!["A", "B"]);
        assert_eq!(parse_env_names(" A , B "), vec!["A", "B"]);
        assert_eq!(parse_env_names("A,  ,\tB"), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_env_names_only_separators() {
        assert!(parse_env_names(",,").is_empty());
        assert!(parse_env_names(" , ,, ").is_empty());
    }

    #[test]
    fn test_parse_env_names_keeps_duplicates() {
        assert_eq!(parse_env_names("X,Y,X"), vec!["X", "Y", "X"]);
    }
}
