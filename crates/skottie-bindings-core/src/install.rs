//! The binding installer.
//!
//! Publishes one ctor into a host scripting runtime's global namespace.
//! The runtime seam keeps the installer independent of any concrete
//! engine's binding mechanism: adapters implement [`HostRuntime`] and
//! call [`install_bindings`] once at startup.

use std::sync::Arc;

use serde_json::Value;

use crate::backend::SkottieBackend;
use crate::config::BindingConfig;
use crate::context::PlatformContext;
use crate::error::BindingError;
use crate::factory::SkottieFactory;
use crate::handle::SkottieHandle;

/// Global key scripts read the ctor from.
pub const SKOTTIE_CTOR_GLOBAL: &str = "SkiaApi_SkottieCtor";

/// Display name declared for the registered callable.
pub const SKOTTIE_CTOR_NAME: &str = "SkottieCtor";

/// Declared argument count: one source descriptor.
pub const SKOTTIE_CTOR_ARITY: u32 = 1;

/// A host-invocable function: one marshalled argument in, handle out.
pub type HostCallable = Box<dyn FnMut(Value) -> Result<SkottieHandle, BindingError>>;

/// Seam over a scripting runtime's global namespace.
///
/// Registration is an unconditional assignment: registering the same key
/// twice replaces the earlier callable (last write wins). Failures stay
/// in the runtime's own error type.
pub trait HostRuntime {
    type Error;

    /// Expose `callable` to scripts as a global function under `key`,
    /// declared with the given display name and argument count.
    fn register_ctor(
        &mut self,
        key: &str,
        display_name: &str,
        arity: u32,
        callable: HostCallable,
    ) -> Result<(), Self::Error>;
}

/// Install the Skottie ctor into `runtime`.
///
/// Builds one factory bound to `ctx` and `backend`, wraps it as a
/// one-argument callable, and stores it under [`SKOTTIE_CTOR_GLOBAL`].
/// Nothing is validated or recovered at this layer; errors propagate
/// from the runtime unchanged.
pub fn install_bindings<R: HostRuntime>(
    runtime: &mut R,
    ctx: Arc<dyn PlatformContext>,
    backend: Arc<dyn SkottieBackend>,
) -> Result<(), R::Error> {
    install_bindings_with(runtime, ctx, backend, BindingConfig::default())
}

/// Like [`install_bindings`], with explicit defaults for every handle the
/// installed ctor constructs.
pub fn install_bindings_with<R: HostRuntime>(
    runtime: &mut R,
    ctx: Arc<dyn PlatformContext>,
    backend: Arc<dyn SkottieBackend>,
    config: BindingConfig,
) -> Result<(), R::Error> {
    let mut factory = SkottieFactory::with_config(ctx, backend, config);
    log::debug!("installing global ctor binding {SKOTTIE_CTOR_GLOBAL}");
    runtime.register_ctor(
        SKOTTIE_CTOR_GLOBAL,
        SKOTTIE_CTOR_NAME,
        SKOTTIE_CTOR_ARITY,
        Box::new(move |raw| factory.make(&raw)),
    )
}
