//! Controller state machine, looping, and finish-event behavior.

use skottie_bindings_core::{
    AnimationInfo, ControllerEvent, HandleId, PlaybackState, SkottieAnimation, SkottieHandle,
};

struct Clip {
    duration: f32,
}

impl SkottieAnimation for Clip {
    fn info(&self) -> AnimationInfo {
        AnimationInfo {
            duration: self.duration,
            fps: 30.0,
            width: 256.0,
            height: 256.0,
        }
    }
}

fn handle(duration: f32) -> SkottieHandle {
    SkottieHandle::new(HandleId(1), Box::new(Clip { duration }))
}

#[test]
fn update_advances_only_while_playing() {
    let mut h = handle(2.0);
    assert_eq!(h.update(0.5), None);
    assert_eq!(h.progress(), 0.0);

    h.play();
    assert_eq!(h.update(0.5), None);
    assert!((h.progress() - 0.25).abs() < 1e-6);

    h.pause();
    assert_eq!(h.state(), PlaybackState::Paused);
    assert_eq!(h.update(0.5), None);
    assert!((h.progress() - 0.25).abs() < 1e-6);

    h.play();
    assert_eq!(h.state(), PlaybackState::Playing);
}

#[test]
fn pause_is_a_noop_unless_playing() {
    let mut h = handle(1.0);
    h.pause();
    assert_eq!(h.state(), PlaybackState::Stopped);
}

#[test]
fn reaching_the_end_stops_and_finishes_once() {
    let mut h = handle(1.0);
    h.play();
    assert_eq!(
        h.update(1.5),
        Some(ControllerEvent::Finished { handle: HandleId(1) })
    );
    assert_eq!(h.progress(), 1.0);
    assert_eq!(h.state(), PlaybackState::Stopped);
    // Finished is not re-emitted once stopped.
    assert_eq!(h.update(1.0), None);
}

#[test]
fn looping_wraps_and_finishes_every_pass() {
    let mut h = handle(1.0);
    h.set_looping(true);
    h.play();

    assert_eq!(h.update(0.6), None);
    assert_eq!(
        h.update(0.6),
        Some(ControllerEvent::Finished { handle: HandleId(1) })
    );
    assert!((h.progress() - 0.2).abs() < 1e-5);
    assert_eq!(h.state(), PlaybackState::Playing);

    // A large step still wraps into [0, 1) and reports the pass.
    assert_eq!(
        h.update(2.5),
        Some(ControllerEvent::Finished { handle: HandleId(1) })
    );
    assert!(h.progress() < 1.0);
    assert_eq!(h.state(), PlaybackState::Playing);
}

#[test]
fn speed_scales_the_advance() {
    let mut h = handle(2.0);
    h.set_speed(2.0);
    h.play();
    h.update(0.5);
    assert!((h.progress() - 0.5).abs() < 1e-6);
}

#[test]
fn duration_override_rescales_playback() {
    let mut h = handle(2.0);
    h.set_duration_override(Some(4.0));
    h.play();
    h.update(1.0);
    assert!((h.progress() - 0.25).abs() < 1e-6);
}

#[test]
fn reset_rewinds_and_stops() {
    let mut h = handle(1.0);
    h.play();
    h.update(0.5);
    h.reset();
    assert_eq!(h.progress(), 0.0);
    assert_eq!(h.state(), PlaybackState::Stopped);
}

#[test]
fn zero_length_clip_finishes_on_first_step() {
    let mut h = handle(0.0);
    h.play();
    assert_eq!(
        h.update(0.016),
        Some(ControllerEvent::Finished { handle: HandleId(1) })
    );
    assert_eq!(h.progress(), 1.0);
    assert_eq!(h.state(), PlaybackState::Stopped);
}

#[test]
fn set_progress_moves_the_playhead_without_running() {
    let mut h = handle(1.0);
    h.set_progress(0.75);
    assert_eq!(h.state(), PlaybackState::Stopped);
    assert!((h.progress() - 0.75).abs() < 1e-6);
}
