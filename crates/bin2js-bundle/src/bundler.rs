//! Bundle writer

use crate::config::BundleConfig;
use crate::template;
use bin2js_core::{Bin2JsError, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// What a bundling run produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleSummary {
    /// Registration lines written, one per input
    pub entries: usize,
    /// Distinct asset names, i.e. registry size once the bundle loads
    pub assets: usize,
    /// Total input bytes embedded
    pub bytes: u64,
}

/// Writes input files into a JavaScript asset bundle
pub struct Bundler {
    config: BundleConfig,
}

impl Bundler {
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Write the bundle for `inputs` into `writer`.
    ///
    /// Inputs are read one at a time, in order, and each registration line is
    /// written as soon as its file has been read. The first unreadable input
    /// aborts the run.
    pub fn bundle_to<W, P>(&self, inputs: &[P], writer: &mut W) -> Result<BundleSummary>
    where
        W: Write,
        P: AsRef<Path>,
    {
        let mut summary = BundleSummary::default();
        let mut seen = HashSet::new();

        writer.write_all(template::header(&self.config.global).as_bytes())?;

        for input in inputs {
            let path = input.as_ref();
            let name = path.to_str().ok_or_else(|| Bin2JsError::InvalidName {
                path: path.to_path_buf(),
            })?;
            let data = fs::read(path).map_err(|source| Bin2JsError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;

            if !seen.insert(name.to_string()) {
                log::warn!("Asset '{}' given more than once; the last copy wins", name);
            }
            log::debug!("Registering asset '{}' ({} bytes)", name, data.len());

            writer.write_all(template::registration_line(name, &data).as_bytes())?;
            summary.entries += 1;
            summary.bytes += data.len() as u64;
        }

        writer.write_all(template::footer(&self.config.global).as_bytes())?;
        writer.flush()?;

        summary.assets = seen.len();
        Ok(summary)
    }

    /// Write the bundle for `inputs` to the configured output file.
    ///
    /// An existing output is overwritten. If any input cannot be read the
    /// partially written output is removed before the error is returned.
    pub fn run<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<BundleSummary> {
        let output = &self.config.output;
        log::trace!("Creating output {}", output.display());

        let file = fs::File::create(output).map_err(|source| Bin2JsError::WriteOutput {
            path: output.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        match self.bundle_to(inputs, &mut writer) {
            Ok(summary) => {
                log::info!(
                    "Wrote {} asset(s), {} bytes, to {}",
                    summary.assets,
                    summary.bytes,
                    output.display()
                );
                Ok(summary)
            }
            Err(err) => {
                drop(writer);
                if let Err(e) = fs::remove_file(output) {
                    log::warn!("Could not remove partial output {}: {}", output.display(), e);
                }
                Err(match err {
                    Bin2JsError::Io(source) => Bin2JsError::WriteOutput {
                        path: output.clone(),
                        source,
                    },
                    other => other,
                })
            }
        }
    }
}
