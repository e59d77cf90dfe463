use crate::{
    args,
    options::{ExtractorOptions, Source},
};
use std::{collections::HashMap, env};

/// Point-in-time copy of the process environment and argument list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    env: HashMap<String, String>,
    args: Vec<String>,
}

impl Snapshot {
    /// An empty snapshot, for building fixtures
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current process environment and `argv`
    pub fn capture() -> Self {
        Self {
            env: env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            args: env::args_os()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Replace the argument list; the first token is the program name
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Insert `key` unless it is already present
    pub fn set_env_default(&mut self, key: String, value: String) {
        self.env.entry(key).or_insert(value);
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Ask one source for `name`, after applying that source's case style
    pub fn lookup(&self, source: Source, name: &str, options: &ExtractorOptions) -> Option<Resolved> {
        let key = options.case_for(source).apply(name);
        let value = match source {
            Source::OsEnv => self.env_var(&key).map(str::to_string),
            Source::CmdArgs => args::lookup(&key, &self.args),
        }
        .filter(|v| !v.is_empty())?;

        Some(Resolved { value, source, key })
    }
}

/// A value found for a canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
    /// The case-transformed key that matched
    pub key: String,
}

/// Walk the precedence list and return the first non-empty value
pub fn resolve(name: &str, options: &ExtractorOptions, snapshot: &Snapshot) -> Option<Resolved> {
    options
        .source_precedence
        .iter()
        .find_map(|source| snapshot.lookup(*source, name, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseStyle;

    fn defaults() -> ExtractorOptions {
        let mut options = ExtractorOptions::new();
        options.merge_with_default();
        options
    }

    fn both_sources() -> Snapshot {
        Snapshot::new()
            .with_env("DB_HOST", "from-env")
            .with_args(["./app", "--db_host=from-args"])
    }

    #[test]
    fn test_env_first() {
        let options = defaults().with_precedence([Source::OsEnv, Source::CmdArgs]);
        let resolved = resolve("db_HOST", &options, &both_sources()).unwrap();

        assert_eq!(resolved.value, "from-env");
        assert_eq!(resolved.source, Source::OsEnv);
        assert_eq!(resolved.key, "DB_HOST");
    }

    #[test]
    fn test_args_first() {
        let options = defaults().with_precedence([Source::CmdArgs, Source::OsEnv]);
        let resolved = resolve("db_HOST", &options, &both_sources()).unwrap();

        assert_eq!(resolved.value, "from-args");
        assert_eq!(resolved.source, Source::CmdArgs);
        assert_eq!(resolved.key, "db_host");
    }

    #[test]
    fn test_falls_through_to_later_source() {
        let snapshot = Snapshot::new().with_args(["./app", "-db_host=cli"]);
        let resolved = resolve("db_HOST", &defaults(), &snapshot).unwrap();

        assert_eq!(resolved.value, "cli");
        assert_eq!(resolved.source, Source::CmdArgs);
    }

    #[test]
    fn test_empty_env_value_is_not_found() {
        let snapshot = Snapshot::new()
            .with_env("PORT", "")
            .with_args(["./app", "--port=9000"]);
        let resolved = resolve("PORT", &defaults(), &snapshot).unwrap();

        assert_eq!(resolved.source, Source::CmdArgs);
        assert_eq!(resolved.value, "9000");
    }

    #[test]
    fn test_not_found_anywhere() {
        assert_eq!(resolve("missing", &defaults(), &both_sources()), None);
    }

    #[test]
    fn test_source_not_in_precedence_is_ignored() {
        let options = defaults().with_precedence([Source::CmdArgs]);
        let snapshot = Snapshot::new().with_env("PORT", "1");

        assert_eq!(resolve("PORT", &options, &snapshot), None);
    }

    #[test]
    fn test_each_source_uses_its_own_case() {
        let options = defaults()
            .with_env_case(CaseStyle::Kebab)
            .with_cmd_args_case(CaseStyle::LowerCamel)
            .with_precedence([Source::CmdArgs, Source::OsEnv]);
        let snapshot = Snapshot::new()
            .with_env("max-conn", "5")
            .with_args(["./app", "--maxConn=7"]);

        assert_eq!(resolve("MAX_CONN", &options, &snapshot).unwrap().value, "7");

        let options = options.with_precedence([Source::OsEnv]);
        assert_eq!(resolve("MAX_CONN", &options, &snapshot).unwrap().value, "5");
    }

    #[test]
    fn test_set_env_default_does_not_override() {
        let mut snapshot = Snapshot::new().with_env("PORT", "1");
        snapshot.set_env_default("PORT".to_string(), "2".to_string());
        snapshot.set_env_default("HOST".to_string(), "h".to_string());

        assert_eq!(snapshot.env_var("PORT"), Some("1"));
        assert_eq!(snapshot.env_var("HOST"), Some("h"));
    }
}
