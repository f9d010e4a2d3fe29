//! Live-handle registry and property dispatch.
//!
//! Host views address handles by id and drive them through small property
//! commands, mirroring a `setProperty(id, key, value)` surface without
//! stringly-typed keys on the Rust side.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::BindingError;
use crate::handle::{ResizeMode, SkottieHandle};
use crate::ids::HandleId;

/// Property-style commands a host view applies to a registered handle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PropertyCommand {
    Start,
    Pause,
    Reset,
    SetProgress { progress: f32 },
    SetScaleType { mode: ResizeMode },
    SetSpeed { speed: f32 },
    SetLooping { looping: bool },
}

/// Id-keyed store of live handles.
#[derive(Default)]
pub struct HandleRegistry {
    handles: HashMap<HandleId, SkottieHandle>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under its own id.
    pub fn insert(&mut self, handle: SkottieHandle) -> HandleId {
        let id = handle.id();
        self.handles.insert(id, handle);
        id
    }

    pub fn remove(&mut self, id: HandleId) -> Option<SkottieHandle> {
        self.handles.remove(&id)
    }

    pub fn get(&self, id: HandleId) -> Option<&SkottieHandle> {
        self.handles.get(&id)
    }

    pub fn get_mut(&mut self, id: HandleId) -> Option<&mut SkottieHandle> {
        self.handles.get_mut(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Apply one command to the handle registered under `id`.
    pub fn apply(&mut self, id: HandleId, cmd: PropertyCommand) -> Result<(), BindingError> {
        let handle = self
            .handles
            .get_mut(&id)
            .ok_or(BindingError::HandleNotFound { id: id.0 })?;
        match cmd {
            PropertyCommand::Start => handle.play(),
            PropertyCommand::Pause => handle.pause(),
            PropertyCommand::Reset => handle.reset(),
            PropertyCommand::SetProgress { progress } => handle.set_progress(progress),
            PropertyCommand::SetScaleType { mode } => handle.set_resize_mode(mode),
            PropertyCommand::SetSpeed { speed } => handle.set_speed(speed),
            PropertyCommand::SetLooping { looping } => handle.set_looping(looping),
        }
        Ok(())
    }
}
