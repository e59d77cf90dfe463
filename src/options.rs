use crate::case::CaseStyle;
use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const DEFAULT_ENV_CASE: CaseStyle = CaseStyle::ScreamingSnake;
pub const DEFAULT_CMD_ARGS_CASE: CaseStyle = CaseStyle::Snake;
pub const DEFAULT_SOURCE_PRECEDENCE: [Source; 2] = [Source::OsEnv, Source::CmdArgs];

/// A place values can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Process environment variables
    OsEnv,
    /// Raw command-line tokens
    CmdArgs,
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OSEnv" | "os-env" | "env" => Ok(Self::OsEnv),
            "CMDArgs" | "cmd-args" | "args" => Ok(Self::CmdArgs),
            _ => Err(format!("unknown source '{}', expected 'env' or 'args'", s)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OsEnv => write!(f, "OSEnv"),
            Self::CmdArgs => write!(f, "CMDArgs"),
        }
    }
}

/// Knobs for a single extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorOptions {
    /// Path of a dotenv file loaded before resolution, e.g. `./env/.env.prod`
    pub env_file: Option<PathBuf>,
    /// Treat a missing `env_file` as empty instead of an error
    pub omit_env_file_if_not_exist: bool,
    /// Skip fields that carry no explicit name tag
    pub omit_not_tagged: bool,
    /// Case style for environment lookups, [`DEFAULT_ENV_CASE`] when unset
    pub env_name_case: Option<CaseStyle>,
    /// Case style for command-line lookups, [`DEFAULT_CMD_ARGS_CASE`] when unset
    pub cmd_args_name_case: Option<CaseStyle>,
    /// Order in which sources are consulted; the first hit wins
    pub source_precedence: Vec<Source>,
}

impl ExtractorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_file(mut self, path: impl AsRef<Path>) -> Self {
        self.env_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn omit_missing_env_file(mut self, omit: bool) -> Self {
        self.omit_env_file_if_not_exist = omit;
        self
    }

    pub fn omit_not_tagged(mut self, omit: bool) -> Self {
        self.omit_not_tagged = omit;
        self
    }

    pub fn with_env_case(mut self, style: CaseStyle) -> Self {
        self.env_name_case = Some(style);
        self
    }

    pub fn with_cmd_args_case(mut self, style: CaseStyle) -> Self {
        self.cmd_args_name_case = Some(style);
        self
    }

    pub fn with_precedence(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.source_precedence = sources.into_iter().collect();
        self
    }

    /// Fill every unset option with its default
    pub fn merge_with_default(&mut self) {
        if self.env_name_case.is_none() {
            self.env_name_case = Some(DEFAULT_ENV_CASE);
        }
        if self.cmd_args_name_case.is_none() {
            self.cmd_args_name_case = Some(DEFAULT_CMD_ARGS_CASE);
        }
        if self.source_precedence.is_empty() {
            self.source_precedence = DEFAULT_SOURCE_PRECEDENCE.to_vec();
        }
    }

    pub fn env_case(&self) -> CaseStyle {
        self.env_name_case.unwrap_or(DEFAULT_ENV_CASE)
    }

    pub fn cmd_args_case(&self) -> CaseStyle {
        self.cmd_args_name_case.unwrap_or(DEFAULT_CMD_ARGS_CASE)
    }

    pub fn case_for(&self, source: Source) -> CaseStyle {
        match source {
            Source::OsEnv => self.env_case(),
            Source::CmdArgs => self.cmd_args_case(),
        }
    }
}
