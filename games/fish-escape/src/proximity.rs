//! Distance checks run after each integration step: star pickups and catches.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tidepool_engine::{EngineContext, EntityId};

use crate::audio::{SoundEffect, Sounds};
use crate::entities::{self, tags};
use crate::kinematics;
use crate::state::GameState;
use crate::tuning::{
    CATCH_PENALTY, CATCH_RADIUS, COLLECT_RADIUS, SAFE_RESPAWN, STAR_POINTS, STAR_SPAWN_X,
    STAR_SPAWN_Y,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProximityReport {
    /// Stars removed this step, with where they were.
    pub collected: Vec<(EntityId, Vec2)>,
    /// Replacement stars, one per collected star.
    pub spawned: Vec<EntityId>,
    pub caught: bool,
}

/// Seeded source of replacement star positions.
pub struct StarSpawner {
    rng: Pcg32,
}

impl StarSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform point in the upper band of the level.
    pub fn next_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(STAR_SPAWN_X.0..=STAR_SPAWN_X.1),
            self.rng.random_range(STAR_SPAWN_Y.0..=STAR_SPAWN_Y.1),
        )
    }
}

/// Run both checks for one step. Does nothing if the fish is gone.
///
/// The star set is snapshotted first, so a replacement spawned on top of the
/// fish waits for the next step.
pub fn scan(
    ctx: &mut EngineContext,
    fish: EntityId,
    hamster: EntityId,
    spawner: &mut StarSpawner,
    state: &mut GameState,
    sounds: &Sounds,
) -> ProximityReport {
    let mut report = ProximityReport::default();
    let Some(fish_pos) = ctx.position(fish) else {
        return report;
    };

    for star in ctx.scene.ids_by_tag(tags::STAR) {
        let Some(star_pos) = ctx.position(star) else {
            continue;
        };
        if fish_pos.distance(star_pos) >= COLLECT_RADIUS || !ctx.despawn(star) {
            continue;
        }
        state.collect(STAR_POINTS);
        sounds.play(ctx, SoundEffect::PowerUp);
        let replacement = entities::spawn_star(ctx, spawner.next_position());
        report.collected.push((star, star_pos));
        report.spawned.push(replacement);
    }

    if let Some(hamster_pos) = ctx.position(hamster) {
        if fish_pos.distance(hamster_pos) < CATCH_RADIUS {
            sounds.play(ctx, SoundEffect::Hit);
            state.penalize(CATCH_PENALTY);
            ctx.set_position(fish, SAFE_RESPAWN);
            kinematics::set_velocity(ctx, fish, Vec2::ZERO);
            report.caught = true;
        }
    }

    report
}
