use std::collections::HashMap;
use crate::api::game::EngineContext;
use crate::api::types::SoundEvent;
use crate::assets::manifest::SoundManifest;

/// Registry of named sound cues, built from a `SoundManifest`.
///
/// Owned by one game session and released with it. Playing is
/// fire-and-forget: unknown names and a released registry are logged and
/// ignored, never surfaced as errors.
pub struct SoundRegistry {
    sounds: HashMap<String, SoundEvent>,
    released: bool,
}

impl SoundRegistry {
    /// Build a registry from a parsed SoundManifest.
    pub fn from_manifest(manifest: &SoundManifest) -> Self {
        let sounds = manifest
            .sounds
            .iter()
            .map(|(name, desc)| (name.clone(), SoundEvent(desc.event_id)))
            .collect();
        Self {
            sounds,
            released: false,
        }
    }

    /// Look up a cue by name. Returns None if not found or released.
    pub fn get(&self, name: &str) -> Option<SoundEvent> {
        self.sounds.get(name).copied()
    }

    /// Queue the named cue on the context. Returns whether it was queued.
    pub fn play(&self, ctx: &mut EngineContext, name: &str) -> bool {
        match self.get(name) {
            Some(event) => ctx.emit_sound(event),
            None => {
                if !self.released {
                    log::debug!("no sound registered as '{}'", name);
                }
                false
            }
        }
    }

    /// Drop every cue. Safe to call more than once.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        log::debug!("releasing {} sound cues", self.sounds.len());
        self.sounds.clear();
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
