use std::time::Duration;

// Shared tuning constants for every page effect. `EffectsConfig::default()`
// is built from these.

// Flow particles
pub const PARTICLE_SPAWN_PERIOD: Duration = Duration::from_millis(300);
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(1500);
pub const PARTICLE_BAND_HALF_PX: f64 = 15.0; // vertical jitter around the container centre
pub const PARTICLE_CLASS: &str = "flow-particle";
pub const PARTICLE_EASING: &str = "ease-in-out";
pub const PARTICLE_GLOW_PX: u32 = 10;

pub const FLOW_LEFT_CONTAINER_ID: &str = "flow-left-particles";
pub const FLOW_RIGHT_CONTAINER_ID: &str = "flow-right-particles";
pub const FLOW_LEFT_COLOR: &str = "#3b82f6"; // blue
pub const FLOW_RIGHT_COLOR: &str = "#10b981"; // green

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the section that must be visible
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
pub const REVEAL_SECTION_SELECTOR: &str = "section";
pub const REVEAL_CHILD_SELECTOR: &str = ".problem-card, .use-case-card, .feature, .module, .step";
pub const SECTION_PENDING_CLASS: &str = "animate-section";
pub const CHILD_PENDING_CLASS: &str = "animate-child";
pub const REVEALED_CLASS: &str = "animate-in";

// Navigation
pub const NAV_SELECTOR: &str = ".nav";
pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const MENU_OPEN_CLASS: &str = "mobile-open";
pub const MENU_BUTTON_ACTIVE_CLASS: &str = "active";
pub const NAV_SHADOW_THRESHOLD_PX: f64 = 50.0;
pub const NAV_SHADOW: &str = "0 4px 30px rgba(0, 0, 0, 0.3)";
pub const SCROLL_TARGET_MARGIN_PX: f64 = 20.0; // gap left between the fixed header and the target

// Parallax / tilt
pub const HERO_GRID_SELECTOR: &str = ".hero-grid";
pub const PIPELINE_SELECTOR: &str = ".pipeline-viz";
pub const PARALLAX_FACTOR: f64 = 0.3;
pub const TILT_DIVISOR_PX: f64 = 150.0; // cursor pixels per degree of rotation
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_ENTER_TRANSITION: &str = "transform 0.1s ease";
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.5s ease";

// Readouts
pub const READOUT_SELECTOR: &str = ".readout-item";
pub const READOUT_PERIOD: Duration = Duration::from_millis(2000);
pub const READOUT_FREQ_KHZ: (f64, f64) = (1.1, 1.3);
pub const READOUT_AMP_V: (f64, f64) = (3.0, 3.4);

// Style installation
pub const STYLE_ELEMENT_ID: &str = "pipeline-effects-styles";
pub const CONFIG_DATA_PREFIX: &str = "data-effects-";
