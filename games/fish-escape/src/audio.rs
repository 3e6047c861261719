//! Sound cues and the manifest that maps them to host assets.

use std::collections::HashMap;

use tidepool_engine::{EngineContext, MusicDescriptor, SoundDescriptor, SoundManifest, SoundRegistry};

const MANIFEST_JSON: &str = include_str!("../assets/sounds.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fish jump.
    Shoot,
    /// Hamster hop.
    EnemyAction,
    /// Star collected.
    PowerUp,
    /// Fish caught.
    Hit,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Shoot,
        SoundEffect::EnemyAction,
        SoundEffect::PowerUp,
        SoundEffect::Hit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::EnemyAction => "enemyAction",
            SoundEffect::PowerUp => "powerUp",
            SoundEffect::Hit => "hit",
        }
    }

    fn fallback_id(self) -> u32 {
        self as u32
    }
}

/// Built-in manifest used when the bundled one cannot be parsed.
pub fn fallback_manifest() -> SoundManifest {
    let sounds: HashMap<String, SoundDescriptor> = SoundEffect::ALL
        .iter()
        .map(|effect| {
            let desc = SoundDescriptor {
                path: format!("audio/{}.mp3", effect.name()),
                event_id: effect.fallback_id(),
                volume: 1.0,
            };
            (effect.name().to_owned(), desc)
        })
        .collect();
    SoundManifest {
        sounds,
        music: Some(MusicDescriptor {
            path: "audio/background.mp3".to_owned(),
            volume: 0.3,
            looped: true,
        }),
    }
}

/// Parse a manifest, falling back to the built-in cues on bad input.
pub fn manifest_from(json: &str) -> SoundManifest {
    match SoundManifest::from_json(json) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::warn!("sound manifest unreadable ({}), using built-in cues", e);
            fallback_manifest()
        }
    }
}

pub fn bundled_manifest() -> SoundManifest {
    manifest_from(MANIFEST_JSON)
}

/// Session-owned cue player. Fire-and-forget: a cue that cannot be queued is
/// logged by the registry and otherwise ignored.
pub struct Sounds {
    registry: SoundRegistry,
}

impl Sounds {
    pub fn new(manifest: &SoundManifest) -> Self {
        let registry = SoundRegistry::from_manifest(manifest);
        for effect in SoundEffect::ALL {
            if registry.get(effect.name()).is_none() {
                log::warn!("sound manifest has no '{}' cue", effect.name());
            }
        }
        Self { registry }
    }

    pub fn play(&self, ctx: &mut EngineContext, effect: SoundEffect) {
        self.registry.play(ctx, effect.name());
    }

    pub fn release(&mut self) {
        self.registry.release();
    }

    pub fn is_released(&self) -> bool {
        self.registry.is_released()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidepool_engine::SoundEvent;

    #[test]
    fn bundled_manifest_has_every_cue() {
        let manifest = bundled_manifest();
        for effect in SoundEffect::ALL {
            assert!(manifest.sounds.contains_key(effect.name()), "{}", effect.name());
        }
        let music = manifest.music.unwrap();
        assert_eq!(music.volume, 0.3);
        assert!(music.looped);
    }

    #[test]
    fn malformed_manifest_falls_back() {
        let manifest = manifest_from("{ not json");
        assert_eq!(manifest, fallback_manifest());
        assert_eq!(manifest.sounds["hit"].event_id, 3);
    }

    #[test]
    fn cues_resolve_to_manifest_ids() {
        let sounds = Sounds::new(&bundled_manifest());
        let mut ctx = EngineContext::new();
        sounds.play(&mut ctx, SoundEffect::PowerUp);
        sounds.play(&mut ctx, SoundEffect::Shoot);
        assert_eq!(ctx.sounds, vec![SoundEvent(2), SoundEvent(0)]);
    }

    #[test]
    fn released_sounds_stay_silent() {
        let mut sounds = Sounds::new(&bundled_manifest());
        sounds.release();
        sounds.release();
        let mut ctx = EngineContext::new();
        sounds.play(&mut ctx, SoundEffect::Hit);
        assert!(ctx.sounds.is_empty());
        assert!(sounds.is_released());
    }
}
