use effects_core::constants::*;
use effects_core::{max_live_particles, FlowDirection, ParticleLedger, ParticleSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn live_particles_never_exceed_bound() {
    let bound = max_live_particles(PARTICLE_LIFETIME, PARTICLE_SPAWN_PERIOD);
    assert_eq!(bound, 5);

    let mut ledger = ParticleLedger::new(PARTICLE_LIFETIME);
    let mut now = Duration::ZERO;
    // Ten seconds of spawning; removal runs before each spawn tick
    for _ in 0..34 {
        ledger.expire(now);
        ledger.spawn(now);
        assert!(ledger.live() <= bound, "live={} at {:?}", ledger.live(), now);
        now += PARTICLE_SPAWN_PERIOD;
    }
    assert_eq!(ledger.peak(), bound);
    assert_eq!(ledger.spawned(), 34);
}

#[test]
fn particles_expire_exactly_at_lifetime() {
    let mut ledger = ParticleLedger::new(PARTICLE_LIFETIME);
    let id = ledger.spawn(Duration::from_millis(200));
    assert!(ledger.expire(Duration::from_millis(1699)).is_empty());
    assert_eq!(ledger.expire(Duration::from_millis(1700)), vec![id]);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn bound_holds_for_other_periods() {
    for period_ms in [50u64, 100, 250, 300, 400, 700, 1500, 2000] {
        let period = Duration::from_millis(period_ms);
        let bound = max_live_particles(PARTICLE_LIFETIME, period);
        let mut ledger = ParticleLedger::new(PARTICLE_LIFETIME);
        let mut now = Duration::ZERO;
        for _ in 0..100 {
            ledger.expire(now);
            ledger.spawn(now);
            assert!(ledger.live() <= bound, "period {}ms", period_ms);
            now += period;
        }
    }
}

#[test]
fn zero_period_has_no_bound() {
    assert_eq!(max_live_particles(PARTICLE_LIFETIME, Duration::ZERO), usize::MAX);
}

#[test]
fn random_offsets_stay_in_band() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let spec = ParticleSpec::random(
            FlowDirection::Left,
            PARTICLE_BAND_HALF_PX,
            PARTICLE_LIFETIME,
            &mut rng,
        );
        assert!(spec.y_offset_px >= -PARTICLE_BAND_HALF_PX);
        assert!(spec.y_offset_px < PARTICLE_BAND_HALF_PX);
    }
}

#[test]
fn direction_selects_color_and_keyframes() {
    let left = ParticleSpec {
        direction: FlowDirection::Left,
        y_offset_px: -4.5,
        lifetime: PARTICLE_LIFETIME,
    };
    assert_eq!(left.top(), "calc(50% + -4.5px)");
    assert_eq!(left.background(), "#3b82f6");
    assert_eq!(left.box_shadow(), "0 0 10px #3b82f6");
    assert_eq!(left.animation(), "flowLeft 1.5s ease-in-out forwards");

    let right = ParticleSpec {
        direction: FlowDirection::Right,
        y_offset_px: 12.0,
        lifetime: PARTICLE_LIFETIME,
    };
    assert_eq!(right.top(), "calc(50% + 12px)");
    assert_eq!(right.background(), "#10b981");
    assert_eq!(right.animation(), "flowRight 1.5s ease-in-out forwards");
    assert_eq!(right.left(), "0");
}

#[test]
fn each_direction_has_its_own_container() {
    assert_eq!(FlowDirection::Left.container_id(), "flow-left-particles");
    assert_eq!(FlowDirection::Right.container_id(), "flow-right-particles");
}

#[test]
fn style_properties_cover_every_visual() {
    let spec = ParticleSpec {
        direction: FlowDirection::Right,
        y_offset_px: 0.0,
        lifetime: PARTICLE_LIFETIME,
    };
    let names: Vec<&str> = spec.style_properties().iter().map(|(k, _)| *k).collect();
    assert_eq!(names, ["top", "background", "box-shadow", "left", "animation"]);
}

#[test]
fn sweep_drops_only_entries_overdue_by_a_lifetime() {
    let mut ledger = ParticleLedger::new(PARTICLE_LIFETIME);
    // timer for this one never fired
    let lost = ledger.spawn(Duration::ZERO);
    let fresh = ledger.spawn(Duration::from_millis(2400));
    let now = Duration::from_millis(3000);

    let stale = ledger.expire(now.saturating_sub(PARTICLE_LIFETIME));
    assert_eq!(stale, vec![lost]);
    assert_eq!(ledger.live(), 1);
    // the fresh particle's own timer still retires it
    assert!(ledger.retire(fresh));
    assert!(!ledger.retire(lost));
    assert_eq!(ledger.peak(), 2);
}

#[test]
fn early_sweep_is_a_no_op() {
    let mut ledger = ParticleLedger::new(PARTICLE_LIFETIME);
    ledger.spawn(Duration::from_millis(100));
    // before one lifetime has passed the sweep time saturates to zero
    assert!(ledger.expire(Duration::from_millis(900).saturating_sub(PARTICLE_LIFETIME)).is_empty());
    assert_eq!(ledger.live(), 1);
}
