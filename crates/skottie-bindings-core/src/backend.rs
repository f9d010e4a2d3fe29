//! Seam over the rendering/animation engine.
//!
//! The engine itself (Skia plus its Skottie module) is not part of this
//! workspace. Embedders implement these traits and pass them into
//! `install_bindings`, the same way resolver callbacks are passed into
//! prebind-style APIs.

use serde::{Deserialize, Serialize};

use crate::error::BindingError;

/// Static facts about a built animation, as reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationInfo {
    /// Intrinsic clip duration in seconds.
    pub duration: f32,
    pub fps: f32,
    pub width: f32,
    pub height: f32,
}

/// A built animation owned by the engine.
pub trait SkottieAnimation {
    fn info(&self) -> AnimationInfo;
}

/// Constructs engine animations from raw Lottie/dotLottie bytes.
pub trait SkottieBackend {
    fn make_animation(&self, bytes: &[u8]) -> Result<Box<dyn SkottieAnimation>, BindingError>;
}
