use fish_escape::entities::tags;
use fish_escape::game::events;
use fish_escape::FishEscape;
use glam::Vec2;
use serde_json::Value;
use tidepool_engine::{GameEvent, InputEvent};
use tidepool_web::GameRunner;

const FRAME: f32 = 1.0 / 60.0;

fn session(viewport_width: f32) -> GameRunner<FishEscape> {
    let mut runner = GameRunner::new(FishEscape::new());
    runner.init(viewport_width, 720.0, 42);
    runner
}

fn snapshot(runner: &GameRunner<FishEscape>) -> Value {
    serde_json::from_str(runner.snapshot_json()).unwrap()
}

fn run(runner: &mut GameRunner<FishEscape>, frames: u32) {
    for _ in 0..frames {
        runner.tick(FRAME);
    }
}

#[test]
fn fresh_session_publishes_scene_and_telemetry() {
    let runner = session(1280.0);
    // 4 walls, 15 platforms, fish, hamster, 5 stars.
    assert_eq!(runner.instance_count(), 26);
    assert_eq!(runner.world_width(), 800.0);
    assert_eq!(runner.world_height(), 500.0);

    let snap = snapshot(&runner);
    assert_eq!(snap["score"], 0);
    assert_eq!(snap["elapsedSeconds"], 0);
    assert_eq!(snap["stars"], 5);
    assert_eq!(snap["mobile"], false);
}

#[test]
fn elapsed_time_follows_fixed_steps() {
    let mut runner = session(1280.0);
    run(&mut runner, 150);
    assert_eq!(runner.context().clock.ticks, 150);
    assert_eq!(snapshot(&runner)["elapsedSeconds"], 2);
    assert!((runner.frame_rate() - 60.0).abs() < 0.5);
}

#[test]
fn star_pickup_scores_and_replaces() {
    let mut runner = session(1280.0);
    let fish = runner.game().fish().unwrap();
    runner.context_mut().set_position(fish, Vec2::new(400.0, 150.0));

    runner.tick(FRAME);

    let snap = snapshot(&runner);
    assert_eq!(snap["score"], 100);
    assert_eq!(snap["stars"], 5);
    assert!(runner.sound_events().contains(&2));
    assert_eq!(
        runner.context().events.last(),
        Some(&GameEvent::scalar(events::SCORE, 100.0))
    );

    for star in runner.context().scene.ids_by_tag(tags::STAR) {
        let pos = runner.context().position(star).unwrap();
        assert!(pos.x >= 50.0 && pos.x <= 750.0 && pos.y >= 50.0 && pos.y <= 200.0);
    }
}

#[test]
fn catch_sends_fish_back_to_safety() {
    let mut runner = session(1280.0);
    let fish = runner.game().fish().unwrap();
    let hamster = runner.game().hamster().unwrap();
    runner.context_mut().set_position(fish, Vec2::new(400.0, 240.0));
    runner.context_mut().set_position(hamster, Vec2::new(420.0, 240.0));

    runner.tick(FRAME);

    let snap = snapshot(&runner);
    assert_eq!(snap["score"], 0);
    assert_eq!(snap["playerPosition"]["x"], 100.0);
    assert_eq!(snap["playerPosition"]["y"], 200.0);
    assert!(runner.sound_events().contains(&3));
    assert_eq!(runner.game().state().catches, 1);
}

#[test]
fn held_key_runs_the_fish() {
    let mut runner = session(1280.0);
    let fish = runner.game().fish().unwrap();
    run(&mut runner, 60);
    let start = runner.context().position(fish).unwrap();

    runner.push_input(InputEvent::KeyDown { key_code: 39 });
    run(&mut runner, 30);
    let moved = runner.context().position(fish).unwrap();
    assert!(moved.x > start.x + 10.0, "{:?} -> {:?}", start, moved);

    runner.push_input(InputEvent::KeyUp { key_code: 39 });
    run(&mut runner, 120);
    let vx = runner.context().velocity(fish).x / 60.0;
    assert!(vx.abs() < 0.5, "fish should coast to a stop, vx = {}", vx);
}

#[test]
fn touch_controls_drive_the_fish_on_small_screens() {
    let mut runner = session(390.0);
    let fish = runner.game().fish().unwrap();
    run(&mut runner, 60);
    let start = runner.context().position(fish).unwrap();

    runner.push_input(InputEvent::PointerDown { id: 7, x: 130.0, y: 420.0 });
    run(&mut runner, 30);
    assert!(runner.game().controls().state().right);
    assert!(runner.context().position(fish).unwrap().x > start.x + 10.0);

    runner.push_input(InputEvent::PointerLeave { id: 7 });
    runner.tick(FRAME);
    assert!(!runner.game().controls().state().right);
    assert_eq!(snapshot(&runner)["mobile"], true);
}

#[test]
fn shutdown_twice_releases_once() {
    let mut runner = session(1280.0);
    run(&mut runner, 10);
    runner.shutdown();
    runner.shutdown();

    assert!(!runner.is_running());
    assert!(runner.context().scene.is_empty());
    assert_eq!(runner.context().physics.body_count(), 0);
    assert!(runner.game().fish().is_none());

    runner.tick(FRAME);
    assert_eq!(runner.context().clock.ticks, 10);
}
