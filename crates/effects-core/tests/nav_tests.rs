use effects_core::constants::{
    MENU_BUTTON_ACTIVE_CLASS, MENU_OPEN_CLASS, NAV_SHADOW_THRESHOLD_PX, SCROLL_TARGET_MARGIN_PX,
};
use effects_core::{header_height, scroll_target_top, shadow_visible, MenuState, NavWiring};

#[test]
fn shadow_is_pure_function_of_offset() {
    assert!(!shadow_visible(0.0, NAV_SHADOW_THRESHOLD_PX));
    assert!(!shadow_visible(49.9, NAV_SHADOW_THRESHOLD_PX));
    assert!(!shadow_visible(50.0, NAV_SHADOW_THRESHOLD_PX));
    assert!(shadow_visible(50.5, NAV_SHADOW_THRESHOLD_PX));
    assert!(shadow_visible(5000.0, NAV_SHADOW_THRESHOLD_PX));
    // Same answer no matter how we got there
    for offset in [10.0, 80.0, 50.0, 51.0, 50.0] {
        assert_eq!(shadow_visible(offset, 50.0), offset > 50.0);
    }
}

#[test]
fn scroll_target_subtracts_header_and_margin() {
    // Already scrolled to 400, target 600px below the viewport top
    assert_eq!(scroll_target_top(600.0, 400.0, 80.0, SCROLL_TARGET_MARGIN_PX), 900.0);
    // Target at absolute 1000 from the top of the page
    assert_eq!(scroll_target_top(1000.0, 0.0, 80.0, SCROLL_TARGET_MARGIN_PX), 900.0);
}

#[test]
fn scroll_target_can_go_above_page_top() {
    assert_eq!(scroll_target_top(10.0, 0.0, 80.0, 20.0), -90.0);
}

#[test]
fn menu_toggle_is_bistable() {
    let start = MenuState::default();
    assert_eq!(start, MenuState::Closed);
    assert!(start.toggle().is_open());
    assert_eq!(start.toggle().toggle(), start);

    for clicks in 0..9 {
        let mut state = MenuState::Closed;
        for _ in 0..clicks {
            state = state.toggle();
        }
        assert_eq!(state.is_open(), clicks % 2 == 1);
    }
}

#[test]
fn close_forces_closed() {
    assert_eq!(MenuState::Open.close(), MenuState::Closed);
    assert_eq!(MenuState::Closed.close(), MenuState::Closed);
}

#[test]
fn menu_and_links_work_without_a_header_bar() {
    let wiring = NavWiring::for_elements(false, true, true, 3);
    assert!(!wiring.scroll_shadow);
    assert!(wiring.menu_toggle);
    assert!(wiring.fragment_links);
    assert!(wiring.any());
    // No header to clear: only the margin is subtracted
    assert_eq!(
        scroll_target_top(1000.0, 0.0, header_height(None), SCROLL_TARGET_MARGIN_PX),
        980.0
    );
    assert_eq!(header_height(Some(80.0)), 80.0);
}

#[test]
fn each_nav_behavior_needs_only_its_own_elements() {
    let wiring = NavWiring::for_elements(true, false, true, 0);
    assert!(wiring.scroll_shadow);
    assert!(!wiring.menu_toggle);
    assert!(!wiring.fragment_links);

    let wiring = NavWiring::for_elements(false, true, false, 1);
    assert!(!wiring.menu_toggle);
    assert!(wiring.fragment_links);

    assert!(!NavWiring::for_elements(false, false, false, 0).any());
}

#[test]
fn menu_classes_stay_paired_with_state() {
    assert_eq!(
        MenuState::Open.class_flags(),
        [(MENU_OPEN_CLASS, true), (MENU_BUTTON_ACTIVE_CLASS, true)]
    );
    assert_eq!(
        MenuState::Closed.class_flags(),
        [(MENU_OPEN_CLASS, false), (MENU_BUTTON_ACTIVE_CLASS, false)]
    );
    for open in [false, true] {
        let state = MenuState::from_open_class(open);
        assert_eq!(state.is_open(), open);
        let [(_, links_on), (_, button_on)] = state.class_flags();
        assert_eq!(links_on, button_on);
        assert_eq!(links_on, open);
    }
}

#[test]
fn fragment_scroll_closes_an_open_menu() {
    // open via the toggle, then follow an in-page link
    let state = MenuState::from_open_class(false).toggle();
    assert!(state.is_open());
    let state = state.close();
    assert_eq!(state, MenuState::Closed);
    assert!(state.class_flags().iter().all(|(_, on)| !on));
    // the next toggle opens it again
    assert!(state.toggle().is_open());
}
