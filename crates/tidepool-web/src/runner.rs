use glam::Vec2;
use tidepool_engine::{
    build_render_buffer, EngineContext, FixedTimestep, FrameRateMeter, Game, GameConfig,
    InputEvent, InputQueue, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates one runner through `export_game!` and exposes
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    meter: FrameRateMeter,
    config: GameConfig,
    initialized: bool,
    shut_down: bool,
    /// Flat buffer of sound event IDs for host reads.
    sound_buffer: Vec<u8>,
    /// Latest telemetry published by the game.
    snapshot: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            meter: FrameRateMeter::new(),
            sound_buffer: Vec::with_capacity(config.max_sounds),
            snapshot: String::new(),
            initialized: false,
            shut_down: false,
            config,
            game,
        }
    }

    /// Start the session. The viewport and seed are visible to `Game::init`.
    pub fn init(&mut self, viewport_width: f32, viewport_height: f32, seed: u64) {
        if self.initialized {
            log::warn!("init called on a running session, ignoring");
            return;
        }
        self.ctx.viewport = Vec2::new(viewport_width, viewport_height);
        self.ctx.seed = seed;
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.is_running() {
            self.input.push(event);
        }
    }

    /// Run one host frame: fixed steps, then render and telemetry buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.clock.frame_rate = self.meter.sample(dt);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            #[cfg(feature = "physics")]
            self.ctx.step_physics();
            self.game.post_physics(&mut self.ctx);
            self.ctx.clock.advance();
        }

        // Events wait for the next frame that runs at least one step.
        if steps > 0 {
            self.input.drain();
        }

        self.publish();
    }

    /// End the session: game resources first, then every entity and body.
    /// Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        if !self.initialized {
            return;
        }
        self.game.teardown(&mut self.ctx);
        let removed = self.ctx.teardown();
        self.input.drain();
        self.timestep.reset();
        self.render_buffer.clear();
        self.sound_buffer.clear();
        log::info!("session ended, {} entities released", removed);
    }

    pub fn is_running(&self) -> bool {
        self.initialized && !self.shut_down
    }

    fn publish(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }

        if let Some(json) = self.game.snapshot_json(&self.ctx) {
            self.snapshot = json;
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Mutable access for hosts and tests that stage a scene directly.
    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn sound_events(&self) -> &[u8] {
        &self.sound_buffer
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn frame_rate(&self) -> f32 {
        self.ctx.clock.frame_rate
    }

    pub fn snapshot_json(&self) -> &str {
        &self.snapshot
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
