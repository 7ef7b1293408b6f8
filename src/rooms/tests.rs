//! Rooms domain: tests for the boundary gate census and progression.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{BoundaryGate, EnemySpawner};
use crate::combat::Health;
use crate::content::{BoundaryDef, ConfigError, EnemyArchetypeDef, RegionDef, TrackDef};
use crate::movement::BoundaryService;

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Hands out sequential ids and records where each enemy was placed.
#[derive(Default)]
struct CountingSpawner {
    next: u32,
    spawned: Vec<(String, f32)>,
}

impl EnemySpawner<u32> for CountingSpawner {
    fn spawn(&mut self, archetype: &str, rail_position: f32) -> u32 {
        self.next += 1;
        self.spawned.push((archetype.to_string(), rail_position));
        self.next
    }
}

fn region(id: &str, spawn_count: u32, rail_position: f32, boundary_index: usize) -> RegionDef {
    RegionDef {
        id: id.to_string(),
        archetype: "grunt".to_string(),
        spawn_count,
        rail_position,
        offset_range: (-1.0, 1.0),
        boundary_index,
    }
}

/// Two boundaries: 0 at 30 guarded by regions a and b, 1 at 60 guarded by c.
fn test_track() -> TrackDef {
    TrackDef {
        rail_length: 100.0,
        origin: (0.0, 0.0),
        player_start: 0.0,
        seed: 1,
        archetypes: vec![EnemyArchetypeDef {
            id: "grunt".to_string(),
            health: 10.0,
            radius: 0.5,
        }],
        boundaries: vec![
            BoundaryDef { rail_limit: 30.0 },
            BoundaryDef { rail_limit: 60.0 },
        ],
        regions: vec![
            region("a", 2, 20.0, 0),
            region("b", 1, 25.0, 0),
            region("c", 3, 50.0, 1),
        ],
    }
}

fn activated_gate() -> (BoundaryGate<u32>, CountingSpawner) {
    let mut gate = BoundaryGate::from_def(&test_track()).unwrap();
    let mut spawner = CountingSpawner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let index = gate.take_pending_activation().unwrap();
    assert_eq!(gate.activate_boundary(index, &mut spawner, &mut rng), None);
    (gate, spawner)
}

// -----------------------------------------------------------------------------
// Construction tests
// -----------------------------------------------------------------------------

#[test]
fn test_gate_starts_locked_with_boundary_zero_pending() {
    let mut gate = BoundaryGate::<u32>::from_def(&test_track()).unwrap();
    assert_eq!(gate.current_boundary_index(), 0);
    assert!(!gate.is_lifted(0));
    assert!(!gate.is_lifted(1));
    assert_eq!(gate.take_pending_activation(), Some(0));
    assert_eq!(gate.take_pending_activation(), None);
}

#[test]
fn test_gate_rejects_invalid_track() {
    let mut track = test_track();
    track.regions[0].boundary_index = 5;
    assert!(matches!(
        BoundaryGate::<u32>::from_def(&track),
        Err(ConfigError::UnknownBoundary { index: 5, .. })
    ));
}

// -----------------------------------------------------------------------------
// Activation tests
// -----------------------------------------------------------------------------

#[test]
fn test_activation_spawns_only_that_boundarys_regions() {
    let (gate, spawner) = activated_gate();
    assert_eq!(spawner.spawned.len(), 3);
    assert_eq!(gate.census_for_boundary(0), 3);
    assert_eq!(gate.census_for_boundary(1), 0);
    assert_eq!(gate.region("a").unwrap().live(), &[1, 2]);
    assert_eq!(gate.region("b").unwrap().live(), &[3]);
    assert!(gate.region("c").unwrap().live().is_empty());
}

#[test]
fn test_spawn_positions_within_offset_range() {
    let (_, spawner) = activated_gate();
    for (archetype, position) in &spawner.spawned[..2] {
        assert_eq!(archetype, "grunt");
        assert!((19.0..=21.0).contains(position));
    }
    assert!((24.0..=26.0).contains(&spawner.spawned[2].1));
}

#[test]
fn test_spawn_positions_clamped_to_rail() {
    let mut track = test_track();
    track.regions[0].rail_position = 0.0;
    track.regions[0].offset_range = (-5.0, -2.0);
    let mut gate = BoundaryGate::<u32>::from_def(&track).unwrap();
    let mut spawner = CountingSpawner::default();
    gate.activate_boundary(0, &mut spawner, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(spawner.spawned[0].1, 0.0);
    assert_eq!(spawner.spawned[1].1, 0.0);
}

#[test]
fn test_same_seed_same_spawn_positions() {
    let (_, first) = activated_gate();
    let (_, second) = activated_gate();
    assert_eq!(first.spawned, second.spawned);
}

#[test]
fn test_activation_happens_once() {
    let (mut gate, mut spawner) = activated_gate();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    assert_eq!(gate.activate_boundary(0, &mut spawner, &mut rng), None);
    assert_eq!(spawner.spawned.len(), 3);
    assert_eq!(gate.census_for_boundary(0), 3);
}

#[test]
fn test_empty_boundary_lifts_on_activation() {
    let mut track = test_track();
    track.regions[2].spawn_count = 0;
    let mut gate = BoundaryGate::<u32>::from_def(&track).unwrap();
    let mut spawner = CountingSpawner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(gate.activate_boundary(1, &mut spawner, &mut rng), Some(1));
    assert!(gate.is_lifted(1));
}

#[test]
fn test_unknown_boundary_activation_is_noop() {
    let mut gate = BoundaryGate::<u32>::from_def(&test_track()).unwrap();
    let mut spawner = CountingSpawner::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(gate.activate_boundary(9, &mut spawner, &mut rng), None);
    assert!(spawner.spawned.is_empty());
}

// -----------------------------------------------------------------------------
// Census and removal tests
// -----------------------------------------------------------------------------

#[test]
fn test_removing_every_enemy_lifts_boundary() {
    let (mut gate, _) = activated_gate();
    assert!(gate.remove_enemy(1).is_empty());
    assert!(gate.remove_enemy(3).is_empty());
    assert_eq!(gate.census_for_boundary(0), 1);
    assert!(!gate.is_lifted(0));

    assert_eq!(gate.remove_enemy(2), vec![0]);
    assert_eq!(gate.census_for_boundary(0), 0);
    assert!(gate.is_lifted(0));
}

#[test]
fn test_removal_is_idempotent() {
    let (mut gate, _) = activated_gate();
    gate.remove_enemy(1);
    gate.remove_enemy(1);
    assert_eq!(gate.census_for_boundary(0), 2);
    assert_eq!(gate.region("a").unwrap().live(), &[2]);
}

#[test]
fn test_unknown_id_does_not_lift_occupied_boundary() {
    let (mut gate, _) = activated_gate();
    assert!(gate.remove_enemy(99).is_empty());
    assert!(!gate.is_lifted(0));
}

#[test]
fn test_unactivated_boundary_never_lifts_from_census() {
    let mut gate = BoundaryGate::<u32>::from_def(&test_track()).unwrap();
    // Census of boundary 0 is trivially zero before its regions spawn
    assert!(gate.remove_enemy(42).is_empty());
    assert!(!gate.is_lifted(0));
}

#[test]
fn test_lift_is_one_way_and_idempotent() {
    let (mut gate, _) = activated_gate();
    assert!(gate.lift_boundary(0));
    assert!(!gate.lift_boundary(0));
    assert!(gate.is_lifted(0));

    // Later removals never re-lock it
    gate.remove_enemy(1);
    assert!(gate.is_lifted(0));
    assert!(gate.remove_enemy(2).is_empty());
    assert!(!gate.lift_boundary(7));
}

// -----------------------------------------------------------------------------
// BoundaryService tests
// -----------------------------------------------------------------------------

#[test]
fn test_locked_boundary_clamps_progress() {
    let (gate, _) = activated_gate();
    assert_eq!(gate.clamp_to_active_boundary(45.0), 30.0);
    assert_eq!(gate.clamp_to_active_boundary(12.0), 12.0);
    assert_eq!(gate.clamp_to_active_boundary(30.0), 30.0);
}

#[test]
fn test_lifted_boundary_stops_clamping() {
    let (mut gate, _) = activated_gate();
    for id in 1..=3 {
        gate.remove_enemy(id);
    }
    assert_eq!(gate.clamp_to_active_boundary(45.0), 45.0);
}

#[test]
fn test_passing_lifted_boundary_advances_and_queues_next() {
    let (mut gate, mut spawner) = activated_gate();
    gate.check_within_boundary(30.0);
    assert_eq!(gate.current_boundary_index(), 0);

    for id in 1..=3 {
        gate.remove_enemy(id);
    }
    gate.check_within_boundary(29.0);
    assert_eq!(gate.current_boundary_index(), 0);
    gate.check_within_boundary(31.0);
    assert_eq!(gate.current_boundary_index(), 1);
    assert_eq!(gate.take_pending_activation(), Some(1));

    let mut rng = ChaCha8Rng::seed_from_u64(4);
    assert_eq!(gate.activate_boundary(1, &mut spawner, &mut rng), None);
    assert_eq!(gate.census_for_boundary(1), 3);
    assert_eq!(gate.clamp_to_active_boundary(80.0), 60.0);
}

#[test]
fn test_past_last_boundary_nothing_clamps() {
    let (mut gate, mut spawner) = activated_gate();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for id in 1..=3 {
        gate.remove_enemy(id);
    }
    gate.check_within_boundary(31.0);
    gate.activate_boundary(1, &mut spawner, &mut rng);
    for id in 4..=6 {
        gate.remove_enemy(id);
    }
    assert!(gate.is_lifted(1));
    gate.check_within_boundary(61.0);
    assert_eq!(gate.current_boundary_index(), 2);
    assert_eq!(gate.take_pending_activation(), None);
    assert_eq!(gate.clamp_to_active_boundary(99.0), 99.0);
    gate.check_within_boundary(99.0);
    assert_eq!(gate.current_boundary_index(), 2);
}

// -----------------------------------------------------------------------------
// Strike to lift tests
// -----------------------------------------------------------------------------

/// One dash strike: each killing blow retires the enemy from the gate.
/// Returns the boundaries lifted by this strike.
fn strike(
    gate: &mut BoundaryGate<u32>,
    health: &mut HashMap<u32, Health>,
    amount: f32,
    targets: &[u32],
) -> Vec<usize> {
    let mut lifted = Vec::new();
    for target in targets {
        let Some(enemy) = health.get_mut(target) else {
            continue;
        };
        if enemy.strike(amount) {
            lifted.extend(gate.remove_enemy(*target));
        }
    }
    lifted
}

#[test]
fn test_killing_the_last_guard_lifts_its_boundary() {
    let (mut gate, _) = activated_gate();
    let mut health: HashMap<u32, Health> =
        (1..=3).map(|id| (id, Health::new(10.0))).collect();

    assert!(strike(&mut gate, &mut health, 6.0, &[1, 2, 3]).is_empty());
    assert_eq!(gate.census_for_boundary(0), 3);

    assert!(strike(&mut gate, &mut health, 6.0, &[1, 3]).is_empty());
    assert_eq!(gate.census_for_boundary(0), 1);
    assert_eq!(gate.clamp_to_active_boundary(45.0), 30.0);

    assert_eq!(strike(&mut gate, &mut health, 6.0, &[2]), vec![0]);
    assert!(gate.is_lifted(0));
    assert_eq!(gate.clamp_to_active_boundary(45.0), 45.0);

    // Corpses and unknown targets never lift anything again
    assert!(strike(&mut gate, &mut health, 6.0, &[1, 2, 3, 9]).is_empty());
    assert_eq!(gate.census_for_boundary(0), 0);
}

#[test]
fn test_strike_on_next_boundary_guards_leaves_current_locked() {
    let (mut gate, mut spawner) = activated_gate();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    gate.activate_boundary(1, &mut spawner, &mut rng);
    let mut health: HashMap<u32, Health> =
        (1..=6).map(|id| (id, Health::new(10.0))).collect();

    assert_eq!(strike(&mut gate, &mut health, 10.0, &[4, 5, 6]), vec![1]);
    assert!(!gate.is_lifted(0));
    assert_eq!(gate.clamp_to_active_boundary(45.0), 30.0);

    assert_eq!(strike(&mut gate, &mut health, 10.0, &[1, 2, 3]), vec![0]);
}
