//! The native factory wrapped by the installed ctor.

use std::sync::Arc;

use serde_json::Value;

use crate::backend::SkottieBackend;
use crate::config::BindingConfig;
use crate::context::PlatformContext;
use crate::error::BindingError;
use crate::handle::SkottieHandle;
use crate::ids::IdAllocator;
use crate::source::AnimationSource;

/// Builds [`SkottieHandle`]s from one-argument source descriptors.
///
/// One factory is created per installation and captured by the registered
/// ctor. The platform context and backend are shared across every handle
/// the factory constructs; the config seeds each handle's controller.
pub struct SkottieFactory {
    ctx: Arc<dyn PlatformContext>,
    backend: Arc<dyn SkottieBackend>,
    config: BindingConfig,
    ids: IdAllocator,
}

impl SkottieFactory {
    pub fn new(ctx: Arc<dyn PlatformContext>, backend: Arc<dyn SkottieBackend>) -> Self {
        Self::with_config(ctx, backend, BindingConfig::default())
    }

    pub fn with_config(
        ctx: Arc<dyn PlatformContext>,
        backend: Arc<dyn SkottieBackend>,
        config: BindingConfig,
    ) -> Self {
        Self {
            ctx,
            backend,
            config,
            ids: IdAllocator::new(),
        }
    }

    /// Construct a handle from the raw ctor argument.
    ///
    /// Inline documents go to the backend as-is; URI sources are fetched
    /// through the platform context first.
    pub fn make(&mut self, raw: &Value) -> Result<SkottieHandle, BindingError> {
        let source = AnimationSource::resolve(raw)?;
        let bytes = match &source {
            AnimationSource::InlineJson(json) => json.as_bytes().to_vec(),
            AnimationSource::DotLottieUri(uri) => self.ctx.fetch(uri)?,
        };
        let animation = self.backend.make_animation(&bytes)?;
        let id = self.ids.alloc_handle();
        log::debug!(
            "built skottie handle {:?} ({} source, {} bytes)",
            id,
            source.kind(),
            bytes.len()
        );
        let mut handle = SkottieHandle::new(id, animation);
        handle.set_speed(self.config.speed);
        handle.set_looping(self.config.looping);
        handle.set_resize_mode(self.config.resize_mode);
        if self.config.auto_play {
            handle.play();
        }
        Ok(handle)
    }
}
