//! Named style definitions the effects rely on.
//!
//! Rules are registered up front and grouped by the behavior that needs them.
//! The web side installs the assembled sheet once, under a fixed element id.

use std::time::Duration;

/// Format a duration the way CSS time values are written (`1.5s`, `0.1s`, `0s`).
pub fn css_seconds(d: Duration) -> String {
    format!("{}s", d.as_secs_f64())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub name: &'static str,
    pub css: &'static str,
}

const FLOW_LEFT: StyleRule = StyleRule {
    name: "flowLeft",
    css: "@keyframes flowLeft {
    0% { left: 0; opacity: 0; }
    20% { opacity: 1; }
    80% { opacity: 1; }
    100% { left: 100%; opacity: 0; }
}",
};

const FLOW_RIGHT: StyleRule = StyleRule {
    name: "flowRight",
    css: "@keyframes flowRight {
    0% { left: 0; opacity: 0; }
    20% { opacity: 1; }
    80% { opacity: 1; }
    100% { left: 100%; opacity: 0; }
}",
};

const REVEAL_SECTION: StyleRule = StyleRule {
    name: "reveal-section",
    css: ".animate-section {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.animate-section.animate-in {
    opacity: 1;
    transform: translateY(0);
}",
};

const REVEAL_CHILD: StyleRule = StyleRule {
    name: "reveal-child",
    css: ".animate-child {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.5s ease, transform 0.5s ease;
}
.animate-child.animate-in {
    opacity: 1;
    transform: translateY(0);
}",
};

const REVEAL_HERO: StyleRule = StyleRule {
    name: "reveal-hero",
    css: ".hero {
    opacity: 1 !important;
    transform: none !important;
}",
};

const MOBILE_MENU: StyleRule = StyleRule {
    name: "mobile-menu",
    css: "@media (max-width: 768px) {
    .nav-links.mobile-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: rgba(255, 255, 255, 0.98);
        padding: 1.5rem;
        gap: 1rem;
        border-bottom: 1px solid var(--border-color);
        animation: slideDown 0.3s ease;
    }
    .nav-links.mobile-open a {
        padding: 0.75rem 0;
    }
    .mobile-menu-btn.active span:first-child {
        transform: rotate(45deg) translate(5px, 5px);
    }
    .mobile-menu-btn.active span:last-child {
        transform: rotate(-45deg) translate(5px, -5px);
    }
    @keyframes slideDown {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
}",
};

/// Behaviors that contribute rules to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleGroup {
    Particles,
    Reveal,
    MobileMenu,
}

impl StyleGroup {
    pub fn rules(self) -> &'static [StyleRule] {
        match self {
            StyleGroup::Particles => &[FLOW_LEFT, FLOW_RIGHT],
            StyleGroup::Reveal => &[REVEAL_SECTION, REVEAL_CHILD, REVEAL_HERO],
            StyleGroup::MobileMenu => &[MOBILE_MENU],
        }
    }
}

/// An ordered set of rules with unique names.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every rule of `group`; rules already present are skipped.
    pub fn with_group(mut self, group: StyleGroup) -> Self {
        for rule in group.rules() {
            self.push(*rule);
        }
        self
    }

    pub fn push(&mut self, rule: StyleRule) -> bool {
        if self.contains(rule.name) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn css(&self) -> String {
        self.rules
            .iter()
            .map(|r| r.css)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
