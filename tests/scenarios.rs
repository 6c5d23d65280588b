//! End-to-end runs through the public API

use cat_runner::Tuning;
use cat_runner::sim::{
    DamageClass, GameEvent, GamePhase, Item, ItemKind, Obstacle, ObstacleKind, Rect, ScriptedRandom,
    Simulation, TickInput, autopilot_input,
};

const IDLE: TickInput = TickInput {
    move_left: false,
    move_right: false,
    jump: false,
    start: false,
};

#[test]
fn first_tick_from_fresh_start() {
    let mut sim = Simulation::new(2024, Tuning::default()).expect("valid tuning");
    assert_eq!(sim.player.health, 100.0);
    assert_eq!(sim.world.score, 0);
    assert_eq!(sim.world.scroll_speed, 3.0);

    sim.start();
    sim.tick(&IDLE);

    assert!((sim.player.health - 99.95).abs() < 1e-4);
    assert_eq!(sim.world.score, 1);
    assert!((sim.world.scroll_speed - 3.001).abs() < 1e-6);
    assert_eq!(sim.phase, GamePhase::Playing);
}

#[test]
fn decay_to_zero_ends_run_once() {
    let mut sim = Simulation::new(2024, Tuning::default()).expect("valid tuning");
    sim.start();
    sim.player.health = 0.03;
    sim.tick(&IDLE);
    sim.tick(&IDLE);
    sim.tick(&IDLE);

    assert_eq!(sim.player.health, 0.0);
    assert_eq!(sim.phase, GamePhase::GameOver);
    let game_overs = sim
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);
}

#[test]
fn high_damage_for_k_ticks() {
    let tuning = Tuning {
        health_decay: 0.0,
        ..Tuning::default()
    };
    let mut sim = Simulation::with_random(tuning, ScriptedRandom::new([0.5])).expect("valid tuning");
    sim.start();
    sim.obstacles.push(Obstacle {
        rect: Rect::new(0.0, 300.0, 300.0, 50.0),
        kind: ObstacleKind::Fixed,
        damage: DamageClass::High,
    });

    let k = 7;
    for _ in 0..k {
        sim.tick(&IDLE);
    }
    assert_eq!(sim.player.health, 100.0 - k as f32 * 4.0);
}

#[test]
fn health_pickup_is_clamped() {
    let tuning = Tuning {
        health_decay: 0.0,
        ..Tuning::default()
    };
    let mut sim = Simulation::with_random(tuning, ScriptedRandom::new([0.5])).expect("valid tuning");
    sim.start();
    sim.player.health = 90.0;
    sim.items.push(Item {
        rect: Rect::new(60.0, 320.0, 20.0, 20.0),
        kind: ItemKind::Health,
        value: 20.0,
    });
    sim.tick(&IDLE);

    assert_eq!(sim.player.health, 100.0);
    // Survival point plus pickup bonus
    assert_eq!(sim.world.score, 51);
    assert!(sim.items.is_empty());
    assert!(sim.drain_events().contains(&GameEvent::ItemCollected {
        kind: ItemKind::Health,
        value: 20.0,
    }));
}

#[test]
fn idle_runner_eventually_dies() {
    let mut sim = Simulation::new(99, Tuning::default()).expect("valid tuning");
    sim.start();
    // Passive decay alone ends a run in 2000 ticks
    for _ in 0..2100 {
        sim.tick(&IDLE);
    }
    assert!(sim.is_over());
    assert_eq!(sim.player.health, 0.0);
}

#[test]
fn reset_starts_a_clean_run() {
    let mut sim = Simulation::new(5, Tuning::default()).expect("valid tuning");
    sim.start();
    for _ in 0..2100 {
        sim.tick(&IDLE);
    }
    assert!(sim.is_over());
    // Game over is terminal until reset
    assert!(!sim.start());

    sim.reset();
    let snap = sim.snapshot();
    assert_eq!(snap.phase, GamePhase::Waiting);
    assert!(snap.obstacles.is_empty());
    assert!(snap.items.is_empty());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.scroll_speed, 3.0);

    assert!(sim.start());
    sim.tick(&IDLE);
    assert_eq!(sim.world.score, 1);
}

fn ticks_survived(seed: u64, autopilot: bool) -> u64 {
    let mut sim = Simulation::new(seed, Tuning::default()).expect("valid tuning");
    sim.start();
    for _ in 0..5000 {
        let input = if autopilot { autopilot_input(&sim) } else { IDLE };
        sim.tick(&input);
        if sim.is_over() {
            break;
        }
    }
    sim.world.ticks
}

#[test]
fn autopilot_outlives_idle_runner() {
    let seeds = [1, 2, 3, 4, 5];
    let idle: u64 = seeds.iter().map(|&s| ticks_survived(s, false)).sum();
    let piloted: u64 = seeds.iter().map(|&s| ticks_survived(s, true)).sum();
    assert!(piloted > idle, "autopilot {} <= idle {}", piloted, idle);
}

#[test]
fn spawned_obstacles_follow_the_cursor() {
    let mut sim = Simulation::new(77, Tuning::default()).expect("valid tuning");
    sim.start();
    // Cursor starts 850 out and closes at >= 3 per tick
    for _ in 0..16 {
        sim.tick(&IDLE);
    }
    assert!(sim.obstacles.is_empty());
    for _ in 0..3 {
        sim.tick(&IDLE);
    }
    assert_eq!(sim.obstacles.len(), 1);
    let first = &sim.obstacles[0];
    assert!(first.rect.left() <= sim.tuning.viewport.width);
    assert!((first.rect.bottom() - sim.world.ground_y).abs() < 1e-3);
    assert!(sim.world.obstacle_cursor > sim.tuning.viewport.width);
}
