use effects_core::constants::REVEAL_STAGGER;
use effects_core::{stagger_delay, stagger_delay_css, RevealState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[test]
fn first_intersection_reveals() {
    let state = RevealState::default();
    assert_eq!(state, RevealState::Pending);
    assert_eq!(state.observe(false), RevealState::Pending);
    assert_eq!(state.observe(true), RevealState::Revealed);
}

#[test]
fn reveal_is_monotonic_under_any_sequence() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut state = RevealState::Pending;
        let mut seen_intersection = false;
        for _ in 0..20 {
            let hit = rng.gen_bool(0.3);
            seen_intersection |= hit;
            let was = state;
            state = state.observe(hit);
            if was.is_revealed() {
                assert!(state.is_revealed());
            }
            assert_eq!(state.is_revealed(), seen_intersection);
        }
    }
}

#[test]
fn children_are_staggered_by_index() {
    assert_eq!(stagger_delay(0, REVEAL_STAGGER), Duration::ZERO);
    assert_eq!(stagger_delay(3, REVEAL_STAGGER), Duration::from_millis(300));
    assert_eq!(stagger_delay_css(0, REVEAL_STAGGER), "0s");
    assert_eq!(stagger_delay_css(1, REVEAL_STAGGER), "0.1s");
    assert_eq!(stagger_delay_css(3, REVEAL_STAGGER), "0.3s");
    assert_eq!(stagger_delay_css(12, REVEAL_STAGGER), "1.2s");
}
