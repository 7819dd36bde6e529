#![allow(clippy::float_cmp)]

use super::*;

fn small(count: usize) -> FieldParams {
    FieldParams { count, ..FieldParams::default() }
}

// =============================================================
// FieldParams
// =============================================================

#[test]
fn default_params_match_constants() {
    let params = FieldParams::default();
    assert_eq!(params.count, 55);
    assert_eq!(params.speed, 0.4);
    assert_eq!(params.link_distance, 90.0);
    assert_eq!(params.link_opacity, 0.12);
}

// =============================================================
// EngineCore: seeding
// =============================================================

#[test]
fn seeded_creates_requested_count() {
    let core = EngineCore::seeded(FieldParams::default(), 800.0, 600.0, 1);
    assert_eq!(core.particles.len(), 55);
}

#[test]
fn seeded_is_deterministic() {
    let a = EngineCore::seeded(small(10), 800.0, 600.0, 42);
    let b = EngineCore::seeded(small(10), 800.0, 600.0, 42);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn different_seeds_differ() {
    let a = EngineCore::seeded(small(10), 800.0, 600.0, 1);
    let b = EngineCore::seeded(small(10), 800.0, 600.0, 2);
    assert_ne!(a.particles, b.particles);
}

#[test]
fn empty_field_has_no_links() {
    let core = EngineCore::seeded(small(0), 800.0, 600.0, 1);
    assert!(core.particles.is_empty());
    assert!(core.links().is_empty());
}

// =============================================================
// EngineCore: stepping
// =============================================================

#[test]
fn step_keeps_particles_in_bounds() {
    let mut core = EngineCore::seeded(FieldParams::default(), 200.0, 100.0, 9);
    for _ in 0..5_000 {
        core.step();
        for p in &core.particles {
            assert!((0.0..=200.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }
}

#[test]
fn step_preserves_particle_count() {
    let mut core = EngineCore::seeded(FieldParams::default(), 200.0, 100.0, 5);
    for _ in 0..100 {
        core.step();
    }
    assert_eq!(core.particles.len(), 55);
}

#[test]
fn resize_changes_wrap_bounds() {
    let mut core = EngineCore::seeded(small(1), 400.0, 400.0, 5);
    core.particles[0] = Particle { x: 150.0, y: 10.0, vx: 0.1, vy: 0.0, ..core.particles[0] };
    core.resize(100.0, 100.0);
    core.step();
    assert_eq!(core.particles[0].x, 0.0);
    assert_eq!(core.width, 100.0);
    assert_eq!(core.height, 100.0);
}

// =============================================================
// EngineCore: links
// =============================================================

#[test]
fn links_respect_configured_distance() {
    let mut core = EngineCore::seeded(small(2), 400.0, 400.0, 5);
    core.particles[0].x = 0.0;
    core.particles[0].y = 0.0;
    core.particles[1].x = 50.0;
    core.particles[1].y = 0.0;
    assert_eq!(core.links().len(), 1);

    core.params.link_distance = 40.0;
    assert!(core.links().is_empty());
}
