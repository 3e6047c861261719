use glam::Vec2;
use rapier2d::prelude::*;

use crate::api::types::EntityId;

fn to_na(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

fn from_na(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Whether the solver moves a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl From<BodyType> for RigidBodyType {
    fn from(kind: BodyType) -> Self {
        match kind {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Collision shape, centered on the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    /// Axis-aligned box from its full size.
    pub fn rect(width: f32, height: f32) -> Self {
        Self::Cuboid {
            half_width: 0.5 * width,
            half_height: 0.5 * height,
        }
    }

    fn shape(&self) -> SharedShape {
        match *self {
            Self::Ball { radius } => SharedShape::ball(radius),
            Self::Cuboid { half_width, half_height } => SharedShape::cuboid(half_width, half_height),
        }
    }

    fn from_shape(shape: &dyn Shape) -> Option<Self> {
        if let Some(ball) = shape.as_ball() {
            return Some(Self::Ball { radius: ball.radius });
        }
        let half = shape.as_cuboid()?.half_extents;
        Some(Self::Cuboid {
            half_width: half.x,
            half_height: half.y,
        })
    }
}

/// Surface and mass properties of a collider.
///
/// Rapier resolves contacts with a single Coulomb coefficient, so only
/// `friction` reaches the solver. `static_friction` travels with the material
/// for hosts and tooling that display or tune it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub static_friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.1,
            friction: 0.3,
            static_friction: 0.5,
            density: 0.001,
        }
    }
}

impl ColliderMaterial {
    fn collider(&self, shape: &ColliderDesc) -> Collider {
        ColliderBuilder::new(shape.shape())
            .restitution(self.restitution)
            .friction(self.friction)
            .density(self.density)
            .build()
    }
}

/// Everything needed to insert one body with a single collider.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub gravity_scale: f32,
    pub fixed_rotation: bool,
    pub collider: ColliderDesc,
    pub linear_damping: f32,
}

impl BodyDesc {
    fn of(body_type: BodyType, collider: ColliderDesc) -> Self {
        Self {
            body_type,
            position: Vec2::ZERO,
            gravity_scale: 1.0,
            fixed_rotation: false,
            collider,
            linear_damping: 0.0,
        }
    }

    /// A body pushed around by gravity, forces and contacts.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self::of(BodyType::Dynamic, collider)
    }

    /// Static scenery: no gravity, no rotation.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            gravity_scale: 0.0,
            fixed_rotation: true,
            ..Self::of(BodyType::Fixed, collider)
        }
    }

    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    pub fn with_fixed_rotation(self, fixed_rotation: bool) -> Self {
        Self { fixed_rotation, ..self }
    }

    /// Per-second velocity decay applied by the solver.
    pub fn with_linear_damping(self, linear_damping: f32) -> Self {
        Self { linear_damping, ..self }
    }

    fn rigid_body(&self, owner: EntityId) -> RigidBody {
        let axes = if self.fixed_rotation {
            LockedAxes::ROTATION_LOCKED
        } else {
            LockedAxes::empty()
        };
        RigidBodyBuilder::new(self.body_type.into())
            .translation(to_na(self.position))
            .gravity_scale(self.gravity_scale)
            .linear_damping(self.linear_damping)
            .locked_axes(axes)
            .user_data(u128::from(owner.0))
            .build()
    }
}

/// Rapier handles for one entity's body and collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
    pub material: ColliderMaterial,
}

/// Pipeline state that only `step` and body removal need.
struct Solver {
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    queries: QueryPipeline,
}

impl Solver {
    fn new() -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            queries: QueryPipeline::new(),
        }
    }
}

/// Rigid-body world in screen space (y down).
///
/// Forces added with [`PhysicsWorld::apply_force`] act for exactly one step:
/// they are cleared as soon as the step that integrates them finishes.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    solver: Solver,
    bodies: RigidBodySet,
    colliders: ColliderSet,
}

impl PhysicsWorld {
    /// Positive y gravity pulls bodies toward the bottom of the screen.
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: to_na(gravity),
            params: IntegrationParameters::default(),
            solver: Solver::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
        }
    }

    pub fn set_dt(&mut self, dt: f32) {
        self.params.dt = dt;
    }

    /// World units per meter. Scales the solver's internal tolerances so
    /// pixel-sized worlds settle like meter-sized ones.
    pub fn set_length_unit(&mut self, units_per_meter: f32) {
        self.params.length_unit = units_per_meter;
    }

    fn body(&self, body: &PhysicsBody) -> Option<&RigidBody> {
        self.bodies.get(body.body_handle)
    }

    fn body_mut(&mut self, body: &PhysicsBody) -> Option<&mut RigidBody> {
        self.bodies.get_mut(body.body_handle)
    }

    /// Insert a body with one collider. The owning entity id rides along in
    /// the body's `user_data`.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let body_handle = self.bodies.insert(desc.rigid_body(entity_id));
        let collider_handle = self.colliders.insert_with_parent(
            material.collider(&desc.collider),
            body_handle,
            &mut self.bodies,
        );
        PhysicsBody {
            body_handle,
            collider_handle,
            material,
        }
    }

    /// Drop a body along with its collider. `false` if it was already gone.
    pub fn remove_body(&mut self, body: &PhysicsBody) -> bool {
        let solver = &mut self.solver;
        let removed = self.bodies.remove(
            body.body_handle,
            &mut solver.islands,
            &mut self.colliders,
            &mut solver.impulse_joints,
            &mut solver.multibody_joints,
            true,
        );
        removed.is_some()
    }

    pub fn contains(&self, body: &PhysicsBody) -> bool {
        self.bodies.contains(body.body_handle)
    }

    /// Integrate one step, then clear every user force.
    pub fn step(&mut self) {
        let solver = &mut self.solver;
        solver.pipeline.step(
            &self.gravity,
            &self.params,
            &mut solver.islands,
            &mut solver.broad_phase,
            &mut solver.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut solver.impulse_joints,
            &mut solver.multibody_joints,
            &mut solver.ccd,
            Some(&mut solver.queries),
            &(),
            &(),
        );
        self.bodies
            .iter_mut()
            .for_each(|(_, rb)| rb.reset_forces(false));
    }

    /// Queue a force for the next step only.
    pub fn apply_force(&mut self, body: &PhysicsBody, force: Vec2) {
        if let Some(rb) = self.body_mut(body) {
            rb.add_force(to_na(force), true);
        }
    }

    pub fn pending_force(&self, body: &PhysicsBody) -> Vec2 {
        self.body(body)
            .map_or(Vec2::ZERO, |rb| from_na(&rb.user_force()))
    }

    pub fn set_velocity(&mut self, body: &PhysicsBody, velocity: Vec2) {
        if let Some(rb) = self.body_mut(body) {
            rb.set_linvel(to_na(velocity), true);
        }
    }

    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.body(body).map_or(Vec2::ZERO, |rb| from_na(rb.linvel()))
    }

    /// Teleport a body. Velocity is left untouched.
    pub fn set_position(&mut self, body: &PhysicsBody, position: Vec2) {
        if let Some(rb) = self.body_mut(body) {
            rb.set_translation(to_na(position), true);
        }
    }

    /// Translation and angle; origin and zero for a removed body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.body(body).map_or((Vec2::ZERO, 0.0), |rb| {
            (from_na(rb.translation()), rb.rotation().angle())
        })
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_shape(&self, body: &PhysicsBody) -> Option<ColliderDesc> {
        let collider = self.colliders.get(body.collider_handle)?;
        ColliderDesc::from_shape(collider.shape())
    }

    pub fn is_dynamic(&self, body: &PhysicsBody) -> bool {
        self.body(body).is_some_and(|rb| rb.is_dynamic())
    }
}
