use std::collections::HashMap;
use serde::Deserialize;

/// Audio manifest describing every sound a game can trigger.
/// Shipped as a local JSON asset and shared with the host's player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoundManifest {
    /// Named effects: name → event id + asset.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
    /// Optional looping background track.
    #[serde(default)]
    pub music: Option<MusicDescriptor>,
}

/// Describes a one-shot sound effect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    pub event_id: u32,
    /// Playback volume, 0.0 to 1.0 (default: 1.0).
    #[serde(default = "default_volume")]
    pub volume: f32,
}

/// Describes the background track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MusicDescriptor {
    pub path: String,
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default = "default_looped")]
    pub looped: bool,
}

fn default_volume() -> f32 {
    1.0
}

fn default_looped() -> bool {
    true
}

impl SoundManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
