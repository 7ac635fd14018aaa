use glam::Vec2;
use pretty_assertions::assert_eq;
use skyletters_core::random::{ConstantSource, ScriptedSource};
use skyletters_core::{Animation, Dice, PhaseKind, Scene, SceneConfig};
use skyletters_platform::recording::{ManualScheduler, RecordingSurface};
use skyletters_platform::Viewport;

fn config_for(strings: &[&str]) -> SceneConfig {
    SceneConfig {
        strings: strings.iter().map(|row| row.to_string()).collect(),
        ..SceneConfig::default()
    }
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 1.0)
}

#[test]
fn single_letter_runs_its_whole_lifecycle() {
    let surface = RecordingSurface::new();
    let mut scene = Scene::new(config_for(&["Q"]), viewport(), Box::new(ConstantSource(0.5)), &surface);
    assert_eq!(scene.letters()[0].target(), Vec2::ZERO);

    let mut surface = RecordingSurface::new();
    let mut history = vec![scene.letters()[0].phase()];
    let mut ticks = 0;
    while !scene.tick(&mut surface) {
        ticks += 1;
        let phase = scene.letters()[0].phase();
        if history.last() != Some(&phase) {
            history.push(phase);
        }
        assert!(ticks < 5_000, "letter never finished");
    }

    // spawn 70 + reach 56 + contemplate 261 + balloon spawn 9 + inflate 21, then flight
    assert!(ticks > 70 + 56 + 261 + 9 + 21);
    assert_eq!(
        history,
        vec![PhaseKind::Firework, PhaseKind::Contemplate, PhaseKind::Balloon]
    );
    assert_eq!(scene.letters()[0].phase(), PhaseKind::Done);
    assert!(scene.all_done());
}

#[test]
fn trail_caps_hold_for_every_letter_on_every_tick() {
    let config = config_for(&["CAPS", "HOLD"]);
    let trail_cap = config.firework.trail_points;
    let shard_cap = config.shard.trail_points;
    let surface = RecordingSurface::new();
    let mut scene = Scene::new(config, viewport(), Box::new(Dice::seeded(3)), &surface);
    let mut surface = RecordingSurface::new();
    for _ in 0..600 {
        scene.tick(&mut surface);
        surface.take_calls();
        for letter in scene.letters() {
            if let Some(len) = letter.firework_trail_len() {
                assert!(len <= trail_cap);
            }
            assert!(letter.shards().iter().all(|shard| shard.trail_len() <= shard_cap));
            assert!(letter.shards().iter().all(|shard| shard.is_alive()));
        }
    }
}

#[test]
fn same_seed_draws_the_same_frames() {
    let run = || {
        let surface = RecordingSurface::new();
        let mut scene = Scene::new(config_for(&["SEED"]), viewport(), Box::new(Dice::seeded(42)), &surface);
        let mut surface = RecordingSurface::new();
        for _ in 0..300 {
            scene.tick(&mut surface);
        }
        surface.take_calls()
    };
    assert_eq!(run(), run());
}

#[test]
fn animation_loops_forever() {
    let mut config = config_for(&["GO"]);
    config.timing.restart_pause_ticks = 5;
    let mut surface = RecordingSurface::new();
    let mut animation = Animation::with_rng(
        config,
        viewport(),
        Box::new(ScriptedSource::new(vec![0.2, 0.8, 0.4])),
        &surface,
    );
    let mut scheduler = ManualScheduler::default();

    let mut restarts = 0;
    let mut was_pausing = false;
    for _ in 0..6_000 {
        animation.frame(&mut surface, &mut scheduler);
        surface.take_calls();
        if was_pausing && !animation.is_pausing() {
            restarts += 1;
            assert!(animation
                .scene()
                .letters()
                .iter()
                .all(|letter| letter.phase() == PhaseKind::Firework && !letter.is_launched()));
        }
        was_pausing = animation.is_pausing();
    }
    assert!(restarts >= 2, "expected repeated restarts, got {restarts}");
    assert_eq!(scheduler.requested(), 6_000);
}

#[test]
fn resize_mid_animation_rebuilds_from_scratch() {
    let surface = RecordingSurface::new();
    let mut animation = Animation::with_rng(
        config_for(&["WIDE", "ROW"]),
        viewport(),
        Box::new(ConstantSource(0.9)),
        &surface,
    );
    let mut surface = RecordingSurface::new();
    let mut scheduler = ManualScheduler::default();
    for _ in 0..300 {
        animation.frame(&mut surface, &mut scheduler);
    }
    assert!(animation
        .scene()
        .letters()
        .iter()
        .any(|letter| letter.phase() != PhaseKind::Firework));

    animation.notify_resize(Viewport::new(1600.0, 900.0, 1.5));
    animation.frame(&mut surface, &mut scheduler);

    let scene = animation.scene();
    assert_eq!(scene.letters().len(), 7);
    // spawn delay is floor(140 * 0.9) = 126, so one frame in nobody has launched
    assert!(scene
        .letters()
        .iter()
        .all(|letter| letter.phase() == PhaseKind::Firework && !letter.is_launched()));
    assert_eq!(scene.viewport().half_height(), 450.0);
}
