//! Score and session bookkeeping, plus the telemetry the UI reads.

use glam::Vec2;
use serde::Serialize;

use crate::hamster::Heading;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    score: u32,
    pub stars_collected: u32,
    pub catches: u32,
    /// Last pursuit direction. Recorded only; nothing reads it back yet.
    pub heading: Heading,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn collect(&mut self, points: u32) -> u32 {
        self.stars_collected += 1;
        self.score = self.score.saturating_add(points);
        self.score
    }

    /// Take away points, never going below zero.
    pub fn penalize(&mut self, points: u32) -> u32 {
        self.catches += 1;
        self.score = self.score.saturating_sub(points);
        self.score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self {
            x: v.x.round(),
            y: v.y.round(),
        }
    }
}

/// Read-only snapshot published once per frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Telemetry {
    pub score: u32,
    pub elapsed_seconds: u32,
    pub player_position: Point,
    /// Smoothed frames per second, unrounded.
    pub frame_rate: f32,
    pub stars: usize,
    pub heading: Heading,
    pub mobile: bool,
    pub hint: &'static str,
}

impl Telemetry {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
