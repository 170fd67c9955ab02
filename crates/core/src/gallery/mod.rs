//! Media gallery collaborator.
//!
//! Wraps the system media library: register a file as a gallery asset and
//! group it into a named album. Album creation must be idempotent —
//! repeated saves into the same album must not fail merely because the
//! album already exists.

mod error;
mod traits;
mod types;

pub use error::GalleryError;
pub use traits::GalleryWriter;
pub use types::AssetHandle;
