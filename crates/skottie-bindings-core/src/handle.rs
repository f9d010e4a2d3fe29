//! Skottie handles and their playback controller.
//!
//! A handle pairs an engine-built animation with the per-view playback
//! state scripts drive imperatively: start/pause/reset, normalized
//! progress, speed, loop flag, resize mode, and an optional duration
//! override. Hosts call `update(dt)` once per frame and forward the
//! emitted events.

use serde::{Deserialize, Serialize};

use crate::backend::{AnimationInfo, SkottieAnimation};
use crate::ids::HandleId;

/// How the animation is fitted into its host surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Cover,
    Contain,
    Stretch,
}

impl Default for ResizeMode {
    fn default() -> Self {
        ResizeMode::Contain
    }
}

/// Run state of one handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Discrete signals emitted while stepping a handle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ControllerEvent {
    /// The clip reached its end. Emitted once per completed pass when
    /// looping, once total otherwise.
    Finished { handle: HandleId },
}

/// One constructed animation plus its playback controller.
pub struct SkottieHandle {
    id: HandleId,
    animation: Box<dyn SkottieAnimation>,
    state: PlaybackState,
    progress: f32,
    speed: f32,
    looping: bool,
    resize_mode: ResizeMode,
    duration_override: Option<f32>,
}

impl core::fmt::Debug for SkottieHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkottieHandle")
            .field("id", &self.id)
            .field("animation", &self.animation.info())
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("speed", &self.speed)
            .field("looping", &self.looping)
            .field("resize_mode", &self.resize_mode)
            .field("duration_override", &self.duration_override)
            .finish()
    }
}

impl SkottieHandle {
    pub fn new(id: HandleId, animation: Box<dyn SkottieAnimation>) -> Self {
        Self {
            id,
            animation,
            state: PlaybackState::Stopped,
            progress: 0.0,
            speed: 1.0,
            looping: false,
            resize_mode: ResizeMode::default(),
            duration_override: None,
        }
    }

    #[inline]
    pub fn id(&self) -> HandleId {
        self.id
    }

    #[inline]
    pub fn info(&self) -> AnimationInfo {
        self.animation.info()
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Normalized position in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[inline]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    /// Effective clip duration in seconds, honoring any override.
    pub fn duration(&self) -> f32 {
        self.duration_override
            .unwrap_or_else(|| self.animation.info().duration)
    }

    pub fn fps(&self) -> f32 {
        self.animation.info().fps
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Rewind to the beginning and stop.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.state = PlaybackState::Stopped;
    }

    /// Move the playhead without changing run state. Clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Playback rate multiplier. Reverse playback is not part of the
    /// surface; negative rates clamp to zero.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    /// Stretch or compress playback so the clip spans `duration` seconds.
    /// `None` restores the intrinsic duration.
    pub fn set_duration_override(&mut self, duration: Option<f32>) {
        self.duration_override = duration.filter(|d| *d > 0.0);
    }

    /// Advance playback by `dt` seconds of host time.
    pub fn update(&mut self, dt: f32) -> Option<ControllerEvent> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        let duration = self.duration();
        if duration <= 0.0 {
            // Zero-length clip: a single step completes the pass.
            self.progress = 1.0;
            if !self.looping {
                self.state = PlaybackState::Stopped;
            }
            return Some(ControllerEvent::Finished { handle: self.id });
        }
        self.progress += dt * self.speed / duration;
        if self.progress < 1.0 {
            return None;
        }
        if self.looping {
            // Keep the fractional part of the current pass.
            self.progress -= self.progress.floor();
        } else {
            self.progress = 1.0;
            self.state = PlaybackState::Stopped;
        }
        Some(ControllerEvent::Finished { handle: self.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Still;

    impl SkottieAnimation for Still {
        fn info(&self) -> AnimationInfo {
            AnimationInfo {
                duration: 2.0,
                fps: 30.0,
                width: 100.0,
                height: 100.0,
            }
        }
    }

    fn handle() -> SkottieHandle {
        SkottieHandle::new(HandleId(0), Box::new(Still))
    }

    #[test]
    fn defaults_match_view_contract() {
        let h = handle();
        assert_eq!(h.state(), PlaybackState::Stopped);
        assert_eq!(h.resize_mode(), ResizeMode::Contain);
        assert_eq!(h.progress(), 0.0);
        assert!(!h.is_looping());
    }

    #[test]
    fn progress_is_clamped() {
        let mut h = handle();
        h.set_progress(1.5);
        assert_eq!(h.progress(), 1.0);
        h.set_progress(-0.25);
        assert_eq!(h.progress(), 0.0);
    }

    #[test]
    fn duration_override_replaces_intrinsic() {
        let mut h = handle();
        assert_eq!(h.duration(), 2.0);
        h.set_duration_override(Some(4.0));
        assert_eq!(h.duration(), 4.0);
        h.set_duration_override(None);
        assert_eq!(h.duration(), 2.0);
        // Non-positive overrides are ignored.
        h.set_duration_override(Some(0.0));
        assert_eq!(h.duration(), 2.0);
    }
}
