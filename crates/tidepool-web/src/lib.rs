pub mod runner;

pub use runner::GameRunner;

#[doc(hidden)]
pub use console_error_panic_hook;
#[doc(hidden)]
pub use console_log;
#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use tidepool_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates the `thread_local!` storage for the single `GameRunner`, a
/// `with_runner()` helper and every export the host calls: session
/// lifecycle, input handlers and data accessors. Calls made before
/// `game_init` or after `game_destroy` are logged and ignored.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// pub mod game;
/// use game::MyGame;
///
/// tidepool_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must implement `tidepool_engine::Game` and provide
/// `fn new() -> Self`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        $crate::log::debug!("{}: no session, call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        /// Start a session, tearing down any previous one first.
        #[wasm_bindgen]
        pub fn game_init(viewport_width: f32, viewport_height: f32, seed: u32) {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let previous = RUNNER.with(|cell| cell.borrow_mut().take());
            if let Some(mut runner) = previous {
                runner.shutdown();
            }

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            runner.init(viewport_width, viewport_height, seed as u64);
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            $crate::log::info!("{}: initialized", $game_name);
        }

        /// End the session. Safe to call more than once.
        #[wasm_bindgen]
        pub fn game_destroy() {
            let previous = RUNNER.with(|cell| cell.borrow_mut().take());
            if let Some(mut runner) = previous {
                runner.shutdown();
                $crate::log::info!("{}: destroyed", $game_name);
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::PointerDown { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::PointerUp { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::PointerMove { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave(id: u32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::PointerLeave { id }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::tidepool_engine::InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            with_runner(|r| r.sound_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_frame_rate() -> f32 {
            with_runner(|r| r.frame_rate()).unwrap_or(0.0)
        }

        /// Latest telemetry snapshot, or an empty string without a session.
        #[wasm_bindgen]
        pub fn get_snapshot_json() -> String {
            with_runner(|r| r.snapshot_json().to_owned()).unwrap_or_default()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
