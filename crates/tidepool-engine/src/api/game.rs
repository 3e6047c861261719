use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::api::types::{EntityId, SoundEvent, GameEvent};
use crate::components::entity::Entity;
use crate::input::queue::InputQueue;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, ColliderMaterial, PhysicsBody, PhysicsWorld};
use glam::Vec2;

/// Session parameters a game hands the runner before `init`.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Seconds per simulation step.
    pub fixed_dt: f32,
    /// Playfield size in world pixels.
    pub world_width: f32,
    pub world_height: f32,
    /// Capacity of the instance buffer the host reads each frame.
    pub max_instances: usize,
    /// Per-frame caps on queued cues and events.
    pub max_sounds: usize,
    pub max_events: usize,
    /// World-space acceleration; positive y pulls down the screen.
    #[cfg(feature = "physics")]
    pub gravity: Vec2,
    /// World units per solver meter.
    #[cfg(feature = "physics")]
    pub length_unit: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_sounds: 32,
            max_events: 32,
            #[cfg(feature = "physics")]
            gravity: Vec2::ZERO,
            #[cfg(feature = "physics")]
            length_unit: 1.0,
        }
    }
}

/// Hooks a game implements to be driven by the runner.
///
/// Per fixed step the runner calls `update`, integrates physics, then calls
/// `post_physics`. Anything that must observe settled positions belongs in
/// `post_physics`.
pub trait Game {
    /// Queried once, before the context exists.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the level and actors for a fresh session.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Pre-integration tick: read input, apply forces and velocities.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Post-integration tick: proximity checks, scoring, respawns.
    fn post_physics(&mut self, _ctx: &mut EngineContext) {}

    /// Read-only snapshot for the host UI, serialized as JSON.
    fn snapshot_json(&self, _ctx: &EngineContext) -> Option<String> {
        None
    }

    /// Release game-owned resources. Must tolerate being called twice.
    fn teardown(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    pub clock: FrameClock,
    /// Host viewport size in CSS pixels, set before `Game::init`.
    pub viewport: Vec2,
    /// Session seed handed over by the host, set before `Game::init`.
    pub seed: u64,
    max_sounds: usize,
    max_events: usize,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Build a context whose physics and capacities follow the game's config.
    pub fn from_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut world = PhysicsWorld::new(config.gravity);
            world.set_dt(config.fixed_dt);
            world.set_length_unit(config.length_unit);
            world
        };
        Self {
            scene: Scene::new(),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            clock: FrameClock::new(config.fixed_dt),
            viewport: Vec2::new(config.world_width, config.world_height),
            seed: 0,
            max_sounds: config.max_sounds,
            max_events: config.max_events,
            next_id: 1,
            #[cfg(feature = "physics")]
            physics,
        }
    }

    /// Ids are never reused within a context.
    pub fn next_id(&mut self) -> EntityId {
        let issued = self.next_id;
        self.next_id = issued + 1;
        EntityId(issued)
    }

    /// Queue a sound cue for the host. Cues past the per-frame cap are dropped.
    pub fn emit_sound(&mut self, event: SoundEvent) -> bool {
        if self.sounds.len() >= self.max_sounds {
            log::debug!("sound queue full, dropping cue {}", event.0);
            return false;
        }
        self.sounds.push(event);
        true
    }

    /// Queue a game event for the host UI. Events past the per-frame cap are dropped.
    pub fn emit_event(&mut self, event: GameEvent) -> bool {
        if self.events.len() >= self.max_events {
            log::debug!("event queue full, dropping kind {}", event.kind);
            return false;
        }
        self.events.push(event);
        true
    }

    /// Forget this frame's cues and events once the host has read them.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Add a body-less entity (markers, decorations). Returns its ID.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Whether the entity is still in the scene.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.scene.contains(id)
    }

    /// Current position: the body's position when it has one, else the entity's.
    pub fn position(&self, id: EntityId) -> Option<Vec2> {
        let entity = self.scene.get(id)?;
        #[cfg(feature = "physics")]
        if let Some(body) = &entity.body {
            return Some(self.physics.body_position(body).0);
        }
        Some(entity.pos)
    }

    #[cfg(feature = "physics")]
    fn body_of(&self, id: EntityId) -> Option<PhysicsBody> {
        self.scene.get(id).and_then(|e| e.body)
    }

    /// Add an entity together with its rigid body, placed at `desc.position`.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let body = self.physics.create_body(entity.id, &desc, material);
        self.spawn(entity.with_pos(desc.position).with_body(body))
    }

    /// Remove an entity and its body. `false` when it was already gone.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let Some(entity) = self.scene.despawn(id) else {
            return false;
        };
        #[cfg(feature = "physics")]
        if let Some(body) = &entity.body {
            self.physics.remove_body(body);
        }
        #[cfg(not(feature = "physics"))]
        let _ = entity;
        true
    }

    /// Push on a body during the next step only. Body-less ids are ignored.
    #[cfg(feature = "physics")]
    pub fn apply_force(&mut self, id: EntityId, force: Vec2) {
        if let Some(body) = self.body_of(id) {
            self.physics.apply_force(&body, force);
        }
    }

    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec2) {
        if let Some(body) = self.body_of(id) {
            self.physics.set_velocity(&body, velocity);
        }
    }

    /// Zero for entities without a body.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.body_of(id)
            .map_or(Vec2::ZERO, |body| self.physics.velocity(&body))
    }

    /// Move an entity and its body without touching velocity.
    #[cfg(feature = "physics")]
    pub fn set_position(&mut self, id: EntityId, pos: Vec2) {
        let Some(entity) = self.scene.get_mut(id) else {
            return;
        };
        entity.pos = pos;
        if let Some(body) = &entity.body {
            self.physics.set_position(body, pos);
        }
    }

    /// Integrate one step and copy body poses onto their entities.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.physics.step();
        let physics = &self.physics;
        self.scene
            .iter_mut()
            .filter_map(|entity| entity.body.map(|body| (entity, body)))
            .for_each(|(entity, body)| {
                (entity.pos, entity.rotation) = physics.body_position(&body);
            });
    }

    /// Destroy every entity and body and drop queued cues.
    /// Returns how many entities were removed; a second call returns 0.
    pub fn teardown(&mut self) -> usize {
        let entities = self.scene.drain();
        #[cfg(feature = "physics")]
        for entity in &entities {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
        self.clear_frame_data();
        entities.len()
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_queue_is_capped() {
        let mut ctx = EngineContext::from_config(&GameConfig {
            max_sounds: 2,
            ..GameConfig::default()
        });
        assert!(ctx.emit_sound(SoundEvent(0)));
        assert!(ctx.emit_sound(SoundEvent(1)));
        assert!(!ctx.emit_sound(SoundEvent(2)));
        assert_eq!(ctx.sounds, vec![SoundEvent(0), SoundEvent(1)]);

        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn marker_position_comes_from_entity() {
        let mut ctx = EngineContext::new();
        let id = ctx.next_id();
        ctx.spawn(Entity::new(id).with_pos(Vec2::new(310.0, 305.0)));
        assert_eq!(ctx.position(id), Some(Vec2::new(310.0, 305.0)));
        assert!(ctx.despawn(id));
        assert!(!ctx.despawn(id));
        assert_eq!(ctx.position(id), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }
}

#[cfg(test)]
#[cfg(feature = "physics")]
mod physics_tests {
    use super::*;
    use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};

    fn spawn_box(ctx: &mut EngineContext, pos: Vec2) -> EntityId {
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id),
            BodyDesc::dynamic(ColliderDesc::rect(50.0, 35.0)).with_position(pos),
            ColliderMaterial::default(),
        )
    }

    #[test]
    fn spawn_with_body_creates_entity_and_physics() {
        let mut ctx = EngineContext::new();
        let id = spawn_box(&mut ctx, Vec2::new(700.0, 300.0));

        assert_eq!(ctx.scene.len(), 1);
        assert_eq!(ctx.physics.body_count(), 1);
        assert_eq!(ctx.scene.get(id).unwrap().pos, Vec2::new(700.0, 300.0));
        assert_eq!(ctx.position(id), Some(Vec2::new(700.0, 300.0)));
    }

    #[test]
    fn despawn_cleans_up_physics() {
        let mut ctx = EngineContext::new();
        let id = spawn_box(&mut ctx, Vec2::ZERO);
        assert!(ctx.despawn(id));
        assert_eq!(ctx.scene.len(), 0);
        assert_eq!(ctx.physics.body_count(), 0);
    }

    #[test]
    fn set_position_moves_body_and_entity() {
        let mut ctx = EngineContext::new();
        let id = spawn_box(&mut ctx, Vec2::new(400.0, 300.0));
        ctx.set_position(id, Vec2::new(100.0, 200.0));
        assert_eq!(ctx.scene.get(id).unwrap().pos, Vec2::new(100.0, 200.0));
        let body_pos = ctx.position(id).unwrap();
        assert!((body_pos - Vec2::new(100.0, 200.0)).length() < 0.001);
    }

    #[test]
    fn missing_entities_are_skipped() {
        let mut ctx = EngineContext::new();
        let ghost = EntityId(99);
        ctx.apply_force(ghost, Vec2::X);
        ctx.set_velocity(ghost, Vec2::X);
        ctx.set_position(ghost, Vec2::X);
        assert_eq!(ctx.velocity(ghost), Vec2::ZERO);
        assert!(!ctx.is_alive(ghost));
    }

    #[test]
    fn step_physics_syncs_positions() {
        let mut ctx = EngineContext::from_config(&GameConfig {
            gravity: Vec2::new(0.0, 800.0),
            ..GameConfig::default()
        });
        let id = spawn_box(&mut ctx, Vec2::new(100.0, 0.0));

        for _ in 0..10 {
            ctx.step_physics();
        }

        let entity = ctx.scene.get(id).unwrap();
        assert!(entity.pos.y > 0.0, "Entity should have moved down: y={}", entity.pos.y);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut ctx = EngineContext::new();
        spawn_box(&mut ctx, Vec2::ZERO);
        spawn_box(&mut ctx, Vec2::new(100.0, 0.0));
        ctx.emit_sound(SoundEvent(3));

        assert_eq!(ctx.teardown(), 2);
        assert_eq!(ctx.physics.body_count(), 0);
        assert!(ctx.sounds.is_empty());
        assert_eq!(ctx.teardown(), 0);
    }
}
