use crate::{
    builder::{Binding, ExtractorArgs, Report, canonical_name},
    env_file::EnvFile,
    error::ConfigError,
    field::{Extract, FieldValue},
    options::{ExtractorOptions, Source},
    source::{Snapshot, resolve},
};

/// Accepted spellings of a boolean value
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Store `raw` into `value`, leaving it untouched on failure
fn coerce(value: FieldValue<'_>, key: &str, raw: &str) -> Result<(), ConfigError> {
    match value {
        FieldValue::Int(slot) => slot.assign(raw).map_err(|_| ConfigError::InvalidInteger {
            key: key.to_string(),
            value: raw.to_string(),
            type_name: slot.type_name(),
        }),
        FieldValue::Str(slot) => {
            *slot = raw.to_string();
            Ok(())
        }
        FieldValue::Bool(slot) => {
            *slot = parse_bool(raw).ok_or_else(|| ConfigError::InvalidBoolean {
                key: key.to_string(),
                value: raw.to_string(),
            })?;
            Ok(())
        }
        FieldValue::Unsupported(type_name) => Err(ConfigError::UnsupportedType {
            key: key.to_string(),
            type_name,
        }),
    }
}

/// Bind every field of one record, appending to `report`
fn extract_config(
    target: &mut dyn Extract,
    prefix: &str,
    options: &ExtractorOptions,
    snapshot: &Snapshot,
    report: &mut Report,
) -> Result<(), ConfigError> {
    for field in target.fields() {
        if !field.writable {
            tracing::trace!(field = field.ident, "skipping read-only field");
            continue;
        }
        let Some(name) = field.lookup_name(options.omit_not_tagged) else {
            tracing::trace!(field = field.ident, "skipping untagged field");
            continue;
        };
        let canonical = canonical_name(prefix, name);
        let mut binding = Binding {
            env_key: options.case_for(Source::OsEnv).apply(&canonical),
            cli_key: options.case_for(Source::CmdArgs).apply(&canonical),
            kind: field.value.kind(),
            canonical,
            source: None,
        };

        match resolve(&binding.canonical, options, snapshot) {
            Some(resolved) => {
                coerce(field.value, &resolved.key, &resolved.value)?;
                tracing::debug!(
                    field = field.ident,
                    key = %resolved.key,
                    source = %resolved.source,
                    "bound field"
                );
                binding.source = Some(resolved.source);
            }
            None => {
                tracing::trace!(field = field.ident, name = %binding.canonical, "no value found");
            }
        }
        report.bindings.push(binding);
    }
    Ok(())
}

fn run(args: ExtractorArgs<'_>, snapshot: &Snapshot) -> Result<Report, ConfigError> {
    let ExtractorArgs { options, configs } = args;
    let mut report = Report::default();
    for (target, prefix) in configs {
        extract_config(target, &prefix, &options, snapshot, &mut report)?;
    }
    Ok(report)
}

/// Bind values from the process environment and argument list
///
/// The env file, if configured, is loaded into the process environment
/// first. Records are filled in order; the first error stops the run and
/// leaves already bound fields in place.
pub fn extract(mut args: ExtractorArgs<'_>) -> Result<Report, ConfigError> {
    args.options.merge_with_default();
    if let Some(file) = EnvFile::from_options(&args.options) {
        file.load_into_process()?;
    }
    let snapshot = Snapshot::capture();
    run(args, &snapshot)
}

/// Bind values from `snapshot` without touching the process
///
/// The env file, if configured, is merged into the snapshot.
pub fn extract_from(mut args: ExtractorArgs<'_>, mut snapshot: Snapshot) -> Result<Report, ConfigError> {
    args.options.merge_with_default();
    if let Some(file) = EnvFile::from_options(&args.options) {
        file.load_into(&mut snapshot)?;
    }
    run(args, &snapshot)
}

/// Like [`extract`], panicking on any error
pub fn extract_or_panic(args: ExtractorArgs<'_>) -> Report {
    match extract(args) {
        Ok(report) => report,
        Err(e) => panic!("Configuration failed:\n  - {}", e),
    }
}
