//! bin2js Core - Foundational types for bin2js
//!
//! This crate provides the types the bundler and the CLI share:
//! - `Asset` - A named blob and its byte-array reconstruction
//! - `AssetRegistry` - Name to asset mapping with last-write-wins semantics
//! - `escape` - The `\xNN` hex-escape codec
//! - Error types and Result alias

mod asset;
mod error;
pub mod escape;
mod registry;

pub use asset::Asset;
pub use error::{Bin2JsError, Result};
pub use registry::AssetRegistry;
