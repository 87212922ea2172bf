//! Bundle command: write the input files into js/assets.js

use anyhow::Result;
use bin2js_bundle::{BundleConfig, Bundler};
use std::path::PathBuf;

pub fn run(files: &[PathBuf]) -> Result<()> {
    let bundler = Bundler::new(BundleConfig::default());
    let summary = bundler.run(files)?;

    log::debug!(
        "{} input(s) registered as {} asset(s)",
        summary.entries,
        summary.assets
    );
    Ok(())
}
