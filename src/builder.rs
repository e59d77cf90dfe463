use crate::{
    field::Extract,
    options::{ExtractorOptions, Source},
};
use colored::Colorize;
use std::{fmt, fs, path::Path};

/// Input to an extraction run: options plus the records to fill
///
/// # Example
/// ```rust
/// use config_bindr::{Extract, ExtractorArgs, ExtractorOptions, Snapshot, extract_from};
///
/// #[derive(Extract, Default)]
/// pub struct Database {
///     #[field(name = "HOST")]
///     pub host: String,
///     pub port: i64,
/// }
///
/// let mut db = Database { port: 5432, ..Default::default() };
/// let snapshot = Snapshot::new().with_env("DB_HOST", "localhost");
///
/// let args = ExtractorArgs::new(ExtractorOptions::new()).config(&mut db, "db");
/// extract_from(args, snapshot).unwrap();
///
/// assert_eq!(db.host, "localhost");
/// assert_eq!(db.port, 5432);
/// ```
pub struct ExtractorArgs<'a> {
    pub options: ExtractorOptions,
    /// Records paired with the prefix of their lookup names
    pub configs: Vec<(&'a mut dyn Extract, String)>,
}

impl<'a> ExtractorArgs<'a> {
    pub fn new(options: ExtractorOptions) -> Self {
        Self {
            options,
            configs: Vec::new(),
        }
    }

    /// Add a record; an empty prefix leaves its names as they are
    pub fn config(mut self, target: &'a mut dyn Extract, prefix: impl Into<String>) -> Self {
        self.configs.push((target, prefix.into()));
        self
    }
}

impl fmt::Debug for ExtractorArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorArgs")
            .field("options", &self.options)
            .field(
                "prefixes",
                &self.configs.iter().map(|(_, p)| p).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Append the `_` separator to a non-empty prefix that lacks it
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('_') {
        prefix.to_string()
    } else {
        format!("{}_", prefix)
    }
}

/// Prefix and lookup name joined into the key looked up in every source
pub fn canonical_name(prefix: &str, name: &str) -> String {
    format!("{}{}", normalize_prefix(prefix), name)
}

/// What happened to one field during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub canonical: String,
    /// Key queried in the environment
    pub env_key: String,
    /// Key matched against command-line tokens
    pub cli_key: String,
    /// Type tag of the field
    pub kind: &'static str,
    /// The source that supplied the value; `None` when the field kept its value
    pub source: Option<Source>,
}

/// Summary of an extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub bindings: Vec<Binding>,
}

impl Report {
    pub fn bound(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(|b| b.source.is_some())
    }

    pub fn unbound(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(|b| b.source.is_none())
    }

    pub fn get(&self, canonical: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.canonical == canonical)
    }

    /// Write a markdown table of every considered field
    ///
    /// # Example
    /// ```no_run
    /// use config_bindr::{Extract, ExtractorArgs, ExtractorOptions, extract};
    ///
    /// #[derive(Extract, Default)]
    /// pub struct Server {
    ///     pub port: i64,
    /// }
    ///
    /// let mut server = Server::default();
    /// let report = extract(ExtractorArgs::new(ExtractorOptions::new()).config(&mut server, "")).unwrap();
    /// report.write_docs("CONFIG.md").unwrap();
    /// ```
    pub fn write_docs(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.to_markdown())
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("## Configuration Summary\n\n");
        md.push_str("| Name | Environment | Argument | Type | Source |\n");
        md.push_str("|------|-------------|----------|------|--------|\n");
        for binding in &self.bindings {
            let source = binding
                .source
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            md.push_str(&format!(
                "| {} | {} | --{} | {} | {} |\n",
                binding.canonical, binding.env_key, binding.cli_key, binding.kind, source
            ));
        }

        md
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bindings {
            match binding.source {
                Some(source) => writeln!(
                    f,
                    "  {} <- {}",
                    binding.canonical.magenta().bold(),
                    source.to_string().cyan()
                )?,
                None => writeln!(f, "  {} (unchanged)", binding.canonical.magenta())?,
            }
        }
        Ok(())
    }
}
