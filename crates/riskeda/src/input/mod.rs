//! Input loading and dataset handling.

mod loader;
mod source;

pub use loader::{Loader, LoaderConfig};
pub use source::{Dataset, SourceMetadata};
