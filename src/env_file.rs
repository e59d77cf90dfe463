use crate::{error::ConfigError, options::ExtractorOptions, source::Snapshot};
use std::path::{Path, PathBuf};

/// A dotenv file to preload before resolution
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    omit_if_missing: bool,
}

impl EnvFile {
    pub fn new(path: impl AsRef<Path>, omit_if_missing: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            omit_if_missing,
        }
    }

    /// The env file configured in `options`, if any
    pub fn from_options(options: &ExtractorOptions) -> Option<Self> {
        options
            .env_file
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
            .map(|path| Self::new(path, options.omit_env_file_if_not_exist))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(false)` when the file is absent and that is tolerated
    fn check_exists(&self) -> Result<bool, ConfigError> {
        if self.path.exists() {
            return Ok(true);
        }
        if self.omit_if_missing {
            tracing::debug!(path = %self.path.display(), "env file not found, skipping");
            return Ok(false);
        }
        Err(ConfigError::EnvFileMissing {
            path: self.path.clone(),
        })
    }

    fn load_error(&self, err: dotenvy::Error) -> ConfigError {
        ConfigError::EnvFileLoad {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }

    /// Load into the process environment. Variables that are already set win.
    pub fn load_into_process(&self) -> Result<(), ConfigError> {
        if !self.check_exists()? {
            return Ok(());
        }
        dotenvy::from_path(&self.path).map_err(|e| self.load_error(e))?;
        tracing::debug!(path = %self.path.display(), "loaded env file into process environment");
        Ok(())
    }

    /// Merge into `snapshot`. Variables already in the snapshot win.
    pub fn load_into(&self, snapshot: &mut Snapshot) -> Result<(), ConfigError> {
        if !self.check_exists()? {
            return Ok(());
        }
        let entries = dotenvy::from_path_iter(&self.path).map_err(|e| self.load_error(e))?;
        let mut count = 0usize;
        for entry in entries {
            let (key, value) = entry.map_err(|e| self.load_error(e))?;
            snapshot.set_env_default(key, value);
            count += 1;
        }
        tracing::debug!(path = %self.path.display(), count, "loaded env file into snapshot");
        Ok(())
    }
}
