use log::Level;

use crate::scroll::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Stage changes and teardown show up in the console locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Spring tuning per section as (stiffness, damping)
pub const HERO_SPRING: SpringConfig = SpringConfig::new(50.0, 20.0);
pub const GALLERY_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0);
pub const PERFORMANCE_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0);
pub const DISPLAY_SPRING: SpringConfig = SpringConfig::new(40.0, 20.0);
// Underdamped, the tilt overshoots slightly before settling
pub const TILT_SPRING: SpringConfig = SpringConfig::new(100.0, 10.0);

/// Pixels scrolled before the nav compresses into its island.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Delay before the hero fades in after mount, in milliseconds.
pub const HERO_REVEAL_DELAY_MS: u32 = 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for spring in [HERO_SPRING, GALLERY_SPRING, PERFORMANCE_SPRING, DISPLAY_SPRING, TILT_SPRING] {
            assert!(spring.validate().is_ok(), "{spring:?}");
        }
    }

    #[test]
    fn staged_sections_do_not_overshoot() {
        // overshoot would flicker the active stage around a boundary
        assert!(PERFORMANCE_SPRING.damping_ratio() >= 1.0);
    }
}
