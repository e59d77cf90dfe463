//! Bind values from the environment, command-line arguments and an optional
//! dotenv file onto typed configuration structs.
//!
//! ```rust
//! use config_bindr::{Extract, ExtractorArgs, ExtractorOptions, Snapshot, extract_from};
//!
//! #[derive(Extract, Default)]
//! pub struct Server {
//!     #[field(name = "PORT")]
//!     pub port: i64,
//!     pub debug: bool,
//! }
//!
//! let mut server = Server::default();
//! let snapshot = Snapshot::new()
//!     .with_env("PORT", "8080")
//!     .with_args(["./server", "-debug"]);
//!
//! extract_from(ExtractorArgs::new(ExtractorOptions::new()).config(&mut server, ""), snapshot).unwrap();
//!
//! assert_eq!(server.port, 8080);
//! assert!(server.debug);
//! ```

extern crate self as config_bindr;

pub mod args;
pub mod builder;
pub mod case;
pub mod env_file;
pub mod error;
pub mod extractor;
pub mod field;
pub mod options;
pub mod source;

// Re-export main types
pub use builder::{Binding, ExtractorArgs, Report};
pub use case::{CaseStyle, transform};
pub use env_file::EnvFile;
pub use error::{ConfigError, Severity};
pub use extractor::{extract, extract_from, extract_or_panic};
pub use field::{Extract, FieldSlot, FieldValue, IntegerSlot};
pub use options::{ExtractorOptions, Source};
pub use source::{Resolved, Snapshot};

// Re-export macro
pub use config_bindr_macros::Extract;
