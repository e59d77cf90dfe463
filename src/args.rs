//! Looks up a single named value in a raw argument list.
//!
//! Accepted shapes, with or without one or two leading dashes:
//! - `name` / `-name` / `--name` is a boolean flag and yields [`FLAG_VALUE`]
//! - `name=value`, `--name="value"`, `-name='value'` yield `value`
//! - `name=` yields [`FLAG_VALUE`]

/// Value reported for a flag given without `=value`
pub const FLAG_VALUE: &str = "true";

/// Find the value for `name` in `args`, which includes the program name
/// at index 0.
pub fn lookup(name: &str, args: &[String]) -> Option<String> {
    if args.len() < 2 {
        return None;
    }
    args.iter()
        .map(|arg| clean_name(arg))
        .filter(|arg| has_valid_start(arg))
        .find_map(|arg| match_arg(arg, name))
}

/// Strip at most two leading dashes
fn clean_name(arg: &str) -> &str {
    let arg = arg.strip_prefix('-').unwrap_or(arg);
    arg.strip_prefix('-').unwrap_or(arg)
}

fn has_valid_start(arg: &str) -> bool {
    arg.chars()
        .next()
        .map(|c| c.is_alphanumeric() || c == '_')
        .unwrap_or(false)
}

fn match_arg(arg: &str, name: &str) -> Option<String> {
    if arg == name {
        return Some(FLAG_VALUE.to_string());
    }
    let (key, value) = arg.split_once('=')?;
    if key != name {
        return None;
    }
    if value.is_empty() {
        return Some(FLAG_VALUE.to_string());
    }
    let value = remove_quotes(value);
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Drop a leading and a trailing quote, each checked on its own
fn remove_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        std::iter::once("./app")
            .chain(tokens.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_boolean_flag() {
        assert_eq!(lookup("active", &argv(&["-active"])).as_deref(), Some("true"));
        assert_eq!(lookup("active", &argv(&["--active"])).as_deref(), Some("true"));
        assert_eq!(lookup("active", &argv(&["active"])).as_deref(), Some("true"));
    }

    #[test]
    fn test_assignment() {
        assert_eq!(lookup("name", &argv(&["--name=123"])).as_deref(), Some("123"));
        assert_eq!(lookup("name", &argv(&["--name=\"123\""])).as_deref(), Some("123"));
        assert_eq!(lookup("name", &argv(&["-name='123'"])).as_deref(), Some("123"));
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let args = argv(&["--url=postgres://h/db?sslmode=require"]);
        assert_eq!(
            lookup("url", &args).as_deref(),
            Some("postgres://h/db?sslmode=require")
        );
    }

    #[test]
    fn test_trailing_equals_is_flag() {
        assert_eq!(lookup("verbose", &argv(&["--verbose="])).as_deref(), Some("true"));
    }

    #[test]
    fn test_mismatched_quotes_left_alone() {
        assert_eq!(lookup("name", &argv(&["--name=\"abc"])).as_deref(), Some("abc"));
        assert_eq!(lookup("name", &argv(&["--name=abc'"])).as_deref(), Some("abc"));
        assert_eq!(lookup("name", &argv(&["--name='abc\""])).as_deref(), Some("abc"));
        assert_eq!(lookup("name", &argv(&["--name=a\"b"])).as_deref(), Some("a\"b"));
    }

    #[test]
    fn test_empty_quoted_value_is_not_found() {
        assert_eq!(lookup("name", &argv(&["--name=\"\""])), None);
        assert_eq!(
            lookup("name", &argv(&["--name=''", "--name=later"])).as_deref(),
            Some("later")
        );
    }

    #[test]
    fn test_third_dash_is_kept() {
        assert_eq!(lookup("name", &argv(&["---name=1"])), None);
        assert_eq!(lookup("-name", &argv(&["---name=1"])), None);
    }

    #[test]
    fn test_invalid_start_is_skipped() {
        assert_eq!(lookup("x", &argv(&["--=x", "-.x", ""])), None);
    }

    #[test]
    fn test_needs_at_least_two_tokens() {
        assert_eq!(lookup("active", &["active".to_string()]), None);
        assert_eq!(lookup("active", &[]), None);
    }

    #[test]
    fn test_prefix_of_name_does_not_match() {
        let args = argv(&["--port_number=1", "--portal"]);
        assert_eq!(lookup("port", &args), None);
    }

    #[test]
    fn test_first_match_wins() {
        let args = argv(&["--level=1", "--level=2"]);
        assert_eq!(lookup("level", &args).as_deref(), Some("1"));
    }
}
