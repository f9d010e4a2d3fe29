//! Factory-level defaults for constructed handles.

use serde::{Deserialize, Serialize};

use crate::handle::ResizeMode;

/// Defaults applied to every handle a factory constructs.
///
/// These mirror the view-level props embedders usually fix once per
/// installation rather than per handle. Keep this minimal; expand as
/// needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BindingConfig {
    /// Start playback immediately on construction.
    pub auto_play: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub resize_mode: ResizeMode,
    /// Playback rate multiplier.
    pub speed: f32,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            auto_play: false,
            looping: false,
            resize_mode: ResizeMode::default(),
            speed: 1.0,
        }
    }
}
