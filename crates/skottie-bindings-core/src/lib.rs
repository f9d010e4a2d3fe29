//! Host-agnostic Skottie binding layer.
//!
//! This crate owns everything between an embedded scripting runtime and
//! the (external) Skottie/Skia engine: the source-descriptor model, the
//! factory that turns descriptors into playback handles, the handle
//! registry, and the installer that publishes the factory as a global
//! ctor. Concrete runtimes plug in through the [`HostRuntime`] seam;
//! the engine plugs in through [`SkottieBackend`].

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod handle;
pub mod ids;
pub mod install;
pub mod registry;
pub mod source;

// Re-exports for adapters.
pub use backend::{AnimationInfo, SkottieAnimation, SkottieBackend};
pub use config::BindingConfig;
pub use context::PlatformContext;
pub use error::BindingError;
pub use factory::SkottieFactory;
pub use handle::{ControllerEvent, PlaybackState, ResizeMode, SkottieHandle};
pub use ids::{HandleId, IdAllocator};
pub use install::{
    install_bindings, install_bindings_with, HostCallable, HostRuntime, SKOTTIE_CTOR_ARITY,
    SKOTTIE_CTOR_GLOBAL, SKOTTIE_CTOR_NAME,
};
pub use registry::{HandleRegistry, PropertyCommand};
pub use source::AnimationSource;
