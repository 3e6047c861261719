use glam::Vec2;
use tidepool_engine::{EngineContext, EntityId, Game, GameConfig, GameEvent, InputQueue};

use crate::audio::{self, SoundEffect, Sounds};
use crate::controls::ControlResolver;
use crate::entities;
use crate::hamster;
use crate::level;
use crate::movement;
use crate::proximity::{self, StarSpawner};
use crate::state::{GameState, Telemetry};
use crate::tuning::{
    FISH_SPAWN, FISH_TURN_SPEED, GRAVITY, HAMSTER_SPAWN, HAMSTER_TURN_SPEED, PIXELS_PER_METER,
    WORLD_H, WORLD_W,
};

/// Game event kinds for the host UI.
pub mod events {
    /// a = new score.
    pub const SCORE: f32 = 1.0;
    /// a, b = where the star was.
    pub const STAR_COLLECTED: f32 = 2.0;
    /// a = score after the penalty.
    pub const CAUGHT: f32 = 3.0;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Actors {
    fish: EntityId,
    hamster: EntityId,
}

pub struct FishEscape {
    actors: Option<Actors>,
    controls: ControlResolver,
    state: GameState,
    spawner: StarSpawner,
    sounds: Sounds,
}

impl FishEscape {
    pub fn new() -> Self {
        Self {
            actors: None,
            controls: ControlResolver::new(f32::INFINITY, Vec2::new(WORLD_W, WORLD_H)),
            state: GameState::new(),
            spawner: StarSpawner::new(0),
            sounds: Sounds::new(&audio::bundled_manifest()),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn controls(&self) -> &ControlResolver {
        &self.controls
    }

    pub fn fish(&self) -> Option<EntityId> {
        self.actors.map(|a| a.fish)
    }

    pub fn hamster(&self) -> Option<EntityId> {
        self.actors.map(|a| a.hamster)
    }

    pub fn telemetry(&self, ctx: &EngineContext) -> Telemetry {
        let player = self
            .fish()
            .and_then(|fish| ctx.position(fish))
            .unwrap_or(Vec2::ZERO);
        Telemetry {
            score: self.state.score(),
            elapsed_seconds: ctx.clock.elapsed_seconds(),
            player_position: player.into(),
            frame_rate: ctx.clock.frame_rate,
            stars: ctx.scene.count_by_tag(entities::tags::STAR),
            heading: self.state.heading,
            mobile: self.controls.is_mobile(),
            hint: self.controls.hint(),
        }
    }
}

impl Default for FishEscape {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for FishEscape {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            gravity: GRAVITY,
            length_unit: PIXELS_PER_METER,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.controls = ControlResolver::new(ctx.viewport.x, Vec2::new(WORLD_W, WORLD_H));
        self.spawner = StarSpawner::new(ctx.seed);
        self.state = GameState::new();

        level::build(ctx);
        let fish = entities::spawn_fish(ctx, FISH_SPAWN);
        let hamster = entities::spawn_hamster(ctx, HAMSTER_SPAWN);
        entities::spawn_initial_stars(ctx);
        self.actors = Some(Actors { fish, hamster });

        log::info!(
            "fish escape: {} entities, touch controls {}",
            ctx.scene.len(),
            if self.controls.is_mobile() { "on" } else { "off" }
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let Some(Actors { fish, hamster }) = self.actors else {
            return;
        };

        self.controls.apply_all(input.iter());

        if let Some(steering) = movement::drive(ctx, fish, self.controls.state()) {
            if steering.jumped {
                self.sounds.play(ctx, SoundEffect::Shoot);
            }
        }

        if let Some(pursuit) = hamster::pursue(ctx, hamster, fish) {
            self.state.heading = pursuit.heading;
            if pursuit.jumped {
                self.sounds.play(ctx, SoundEffect::EnemyAction);
            }
        }

        entities::update_facing(ctx, fish, FISH_TURN_SPEED);
        entities::update_facing(ctx, hamster, HAMSTER_TURN_SPEED);
    }

    fn post_physics(&mut self, ctx: &mut EngineContext) {
        let Some(Actors { fish, hamster }) = self.actors else {
            return;
        };

        let report = proximity::scan(
            ctx,
            fish,
            hamster,
            &mut self.spawner,
            &mut self.state,
            &self.sounds,
        );
        for (_, pos) in &report.collected {
            ctx.emit_event(GameEvent {
                kind: events::STAR_COLLECTED,
                a: pos.x,
                b: pos.y,
                c: 0.0,
            });
        }
        if report.caught {
            ctx.emit_event(GameEvent::scalar(events::CAUGHT, self.state.score() as f32));
        }
        if !report.collected.is_empty() || report.caught {
            ctx.emit_event(GameEvent::scalar(events::SCORE, self.state.score() as f32));
        }

        entities::animate(ctx, fish);
    }

    fn snapshot_json(&self, ctx: &EngineContext) -> Option<String> {
        match self.telemetry(ctx).to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("telemetry not published: {}", e);
                None
            }
        }
    }

    fn teardown(&mut self, _ctx: &mut EngineContext) {
        if self.actors.take().is_none() && self.sounds.is_released() {
            return;
        }
        self.controls.reset();
        self.sounds.release();
        log::info!("fish escape: final score {}", self.state.score());
    }
}
