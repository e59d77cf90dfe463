use colored::Colorize;
use std::{fmt, path::PathBuf};

/// How a [`ConfigError`] should be treated by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad input data; the caller decides what to do with it
    Reported,
    /// The configuration record itself is declared wrong and cannot be bound
    Fatal,
}

/// Errors that can occur while binding configuration values
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The env file does not exist and missing files are not tolerated
    EnvFileMissing { path: PathBuf },
    /// The env file exists but could not be read or parsed
    EnvFileLoad { path: PathBuf, reason: String },
    /// An integer field received a value that does not parse as base-10
    InvalidInteger {
        key: String,
        value: String,
        type_name: &'static str,
    },
    /// A boolean field received a value outside the accepted token set
    InvalidBoolean { key: String, value: String },
    /// A field with no coercion rule received a value
    UnsupportedType { key: String, type_name: &'static str },
}

impl ConfigError {
    pub fn severity(&self) -> Severity {
        match self {
            ConfigError::EnvFileMissing { .. }
            | ConfigError::EnvFileLoad { .. }
            | ConfigError::InvalidInteger { .. } => Severity::Reported,
            ConfigError::InvalidBoolean { .. } | ConfigError::UnsupportedType { .. } => {
                Severity::Fatal
            }
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Panic on fatal errors, hand reported ones back to the caller
    ///
    /// ```should_panic
    /// use config_bindr::ConfigError;
    ///
    /// let err = ConfigError::UnsupportedType { key: "TAGS".into(), type_name: "Vec<String>" };
    /// let _ = err.escalate();
    /// ```
    pub fn escalate(self) -> Self {
        if self.is_fatal() {
            panic!("{}", self);
        }
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvFileMissing { path } => {
                write!(
                    f,
                    "the configuration file doesn't exist: {}",
                    path.display().to_string().magenta().bold()
                )
            }
            ConfigError::EnvFileLoad { path, reason } => {
                writeln!(
                    f,
                    "{}: Could not load env file",
                    path.display().to_string().magenta().bold()
                )?;
                write!(f, "\tReason: {}", reason)
            }
            ConfigError::InvalidInteger {
                key,
                value,
                type_name,
            } => {
                writeln!(
                    f,
                    "{}: Invalid integer {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                write!(f, "\tExpected: base-10 {}", type_name.cyan())
            }
            ConfigError::InvalidBoolean { key, value } => {
                writeln!(
                    f,
                    "{}: Invalid boolean value {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                write!(f, "\tExpected: one of {}", "true, false, 1, 0".cyan())
            }
            ConfigError::UnsupportedType { key, type_name } => {
                write!(
                    f,
                    "{}: Unsupported field type {}",
                    key.magenta().bold(),
                    type_name.red(),
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
