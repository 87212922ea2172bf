//! bin2js Bundle - JavaScript asset bundle generation
//!
//! Writes binary files into a self-invoking JS module that registers each one
//! as an `Asset` and exposes `getAsset` / `listAssets` on the global object,
//! and reads such modules back into an [`AssetRegistry`](bin2js_core::AssetRegistry).

mod bundler;
mod config;
pub mod reader;
pub mod template;

pub use bundler::{BundleSummary, Bundler};
pub use config::BundleConfig;
pub use reader::parse_bundle;
