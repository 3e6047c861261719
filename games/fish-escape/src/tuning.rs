//! Tuning constants, fixed for the life of a session.
//!
//! Gameplay values are in logical units: positions in world pixels,
//! velocities in pixels per tick, forces in pixel-mass per square
//! millisecond. `kinematics` converts them for the physics world, which
//! integrates in seconds.

use glam::Vec2;
use tidepool_engine::ColliderMaterial;

// World
pub const WORLD_W: f32 = 800.0;
pub const WORLD_H: f32 = 500.0;
pub const WALL_THICKNESS: f32 = 20.0;

/// Fixed steps per second.
pub const TICK_HZ: f32 = 60.0;
/// Logical force (ms⁻²) to physics-world force (s⁻²).
pub const FORCE_TO_WORLD: f32 = 1.0e6;
/// 0.8 × 0.001 px/ms² expressed in px/s².
pub const GRAVITY: Vec2 = Vec2::new(0.0, 800.0);
/// Solver tolerances are tuned for meters; one meter is about a fish.
pub const PIXELS_PER_METER: f32 = 50.0;
/// Velocity decay handed to the solver for the two actors.
pub const AIR_FRICTION: f32 = 0.01;
pub const DENSITY: f32 = 0.001;

// Actors
pub const FISH_SIZE: Vec2 = Vec2::new(60.0, 45.0);
pub const HAMSTER_SIZE: Vec2 = Vec2::new(50.0, 35.0);
pub const STAR_RADIUS: f32 = 12.0;
pub const FISH_SPAWN: Vec2 = Vec2::new(100.0, 300.0);
pub const HAMSTER_SPAWN: Vec2 = Vec2::new(700.0, 300.0);
pub const INITIAL_STARS: [Vec2; 5] = [
    Vec2::new(200.0, 200.0),
    Vec2::new(400.0, 150.0),
    Vec2::new(600.0, 250.0),
    Vec2::new(150.0, 100.0),
    Vec2::new(650.0, 100.0),
];

pub const FISH_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.2,
    friction: 0.5,
    static_friction: 0.8,
    density: DENSITY,
};

pub const HAMSTER_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.3,
    friction: 0.5,
    static_friction: 0.8,
    density: DENSITY,
};

pub const PLATFORM_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.0,
    friction: 0.3,
    static_friction: 0.5,
    density: DENSITY,
};

// Fish movement
pub const MOVE_FORCE: f32 = 0.01;
pub const MAX_RUN_SPEED: f32 = 5.0;
/// |vy| below this counts as standing on something.
pub const GROUND_SPEED_EPSILON: f32 = 1.0;
pub const JUMP_FORCE: f32 = 0.03;
pub const AIR_DRAG: f32 = 0.95;

// Hamster
pub const HAMSTER_SPEED: f32 = 1.5;
/// Fish must be at least this far above (negative dy) to trigger a jump.
pub const HAMSTER_JUMP_RISE: f32 = -30.0;
pub const HAMSTER_JUMP_REACH: f32 = 100.0;
pub const HAMSTER_JUMP_FORCE: f32 = 0.02;

// Facing
pub const FISH_TURN_SPEED: f32 = 0.5;
pub const HAMSTER_TURN_SPEED: f32 = 0.3;

// Proximity and scoring
pub const COLLECT_RADIUS: f32 = 40.0;
pub const CATCH_RADIUS: f32 = 50.0;
pub const STAR_POINTS: u32 = 100;
pub const CATCH_PENALTY: u32 = 50;
pub const SAFE_RESPAWN: Vec2 = Vec2::new(100.0, 200.0);
pub const STAR_SPAWN_X: (f32, f32) = (50.0, 750.0);
pub const STAR_SPAWN_Y: (f32, f32) = (50.0, 200.0);

// Cosmetics
/// Peak swim wobble in radians.
pub const SWIM_WOBBLE: f32 = 0.06;
/// Wobble phase speed, radians per millisecond.
pub const SWIM_RATE: f32 = 0.005;
/// One full star turn takes this many seconds.
pub const STAR_SPIN_PERIOD: f32 = 2.0;

// Touch controls
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
pub const TOUCH_RADIUS: f32 = 30.0;
/// Distance of the control row above the bottom edge.
pub const TOUCH_ROW_INSET: f32 = 80.0;
