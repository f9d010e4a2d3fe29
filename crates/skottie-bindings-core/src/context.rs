//! Platform context capability seam.
//!
//! The embedding application supplies one context per installation. It is
//! moved into `install_bindings` and from there shared by the factory and
//! every handle the factory constructs.

use crate::error::BindingError;

/// Opaque capability object provided by the embedder.
///
/// Fetching is synchronous: embedded hosts hand over sources that are
/// already local (bundled assets, caches). Adapters implement this and
/// pass it into `install_bindings`.
pub trait PlatformContext {
    /// Produce the raw bytes behind a URI-addressed animation source,
    /// e.g. a bundled dotLottie archive resolved by the host application.
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, BindingError>;
}
