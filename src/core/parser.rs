//! Command line tokenizer.
//!
//! Input is split on whitespace: token 0 names the command, the rest are
//! arguments. Arguments beginning with `-` are flags; whether a flag is
//! accepted is decided later against the command's grammar.

/// A submitted line split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub args: Vec<String>,
}

/// Parses a line. Returns `None` for blank input.
pub fn parse_line(input: &str) -> Option<ParsedLine> {
    let mut tokens = input.split_whitespace();
    let name = tokens.next()?.to_string();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedLine { name, args })
}

/// A lone `-` is an operand, not a flag.
pub fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// The command-name token of a partially typed line (may be empty).
pub fn first_token(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_line("  echo   hello \t world ").unwrap();
        assert_eq!(parsed.name, "echo");
        assert_eq!(parsed.args, ["hello", "world"]);
    }

    #[test]
    fn test_is_flag() {
        assert!(is_flag("-l"));
        assert!(is_flag("--json"));
        assert!(!is_flag("-"));
        assert!(!is_flag("nord"));
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token(""), "");
        assert_eq!(first_token("  he"), "he");
        assert_eq!(first_token("help me"), "help");
    }
}
