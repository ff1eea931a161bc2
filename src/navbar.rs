//! Scroll-reactive header.
//!
//! [`NavbarScroll`] turns each scroll position into one [`NavbarAction`]:
//! pinned near the top, an optional stretch band, then hide-on-scroll-down and
//! show-on-scroll-up (only within `show_at` of the top).

use crate::config::NavbarConfig;

/// Inline transform applied while the navbar stretches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch {
    pub translate_y: f64,
    pub scale_y: f64,
    pub skew_y: f64,
    pub opacity: f64,
}

impl Stretch {
    fn at(distance: f64) -> Self {
        Self {
            translate_y: -distance * 0.6,
            scale_y: 1.0 - distance / 500.0,
            skew_y: -(distance / 80.0),
            opacity: 1.0 - distance / 120.0,
        }
    }

    /// CSS `transform` value.
    pub fn transform(&self) -> String {
        format!(
            "translateY({}px) scaleY({}) skewY({}deg)",
            self.translate_y, self.scale_y, self.skew_y
        )
    }
}

/// What the header should do after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavbarAction {
    /// Cancel any pending hide, show the bar and clear inline styles
    Pin,
    /// Cancel any pending hide, show the bar with this transform
    Stretch(Stretch),
    /// Hide the bar after the delay (replacing a pending hide)
    ScheduleHide { delay_ms: u32 },
    /// Cancel any pending hide and show the bar
    Show,
    /// Leave the bar as it is
    None,
}

/// Navbar scroll state: the previous scroll position.
#[derive(Debug, Clone)]
pub struct NavbarScroll {
    config: NavbarConfig,
    last_scroll: f64,
}

impl NavbarScroll {
    pub fn new(config: NavbarConfig) -> Self {
        Self {
            config,
            last_scroll: 0.0,
        }
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> NavbarAction {
        let config = &self.config;
        let last = self.last_scroll;
        self.last_scroll = scroll_y;

        if scroll_y < config.fixed_until {
            return NavbarAction::Pin;
        }

        if scroll_y < config.hide_at {
            let distance = (scroll_y - config.fixed_until).min(config.max_stretch);
            return NavbarAction::Stretch(Stretch::at(distance));
        }

        if scroll_y > last {
            NavbarAction::ScheduleHide {
                delay_ms: config.hide_delay_ms,
            }
        } else if scroll_y < last && scroll_y < config.show_at {
            NavbarAction::Show
        } else {
            NavbarAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    fn navbar() -> NavbarScroll {
        NavbarScroll::new(NavbarConfig::default())
    }

    #[test]
    fn test_pinned_near_top() {
        let mut navbar = navbar();
        assert_eq!(navbar.on_scroll(0.0), NavbarAction::Pin);
        assert_eq!(navbar.on_scroll(299.0), NavbarAction::Pin);
        assert_eq!(navbar.last_scroll(), 299.0);
    }

    #[test]
    fn test_hides_when_scrolling_down() {
        let mut navbar = navbar();
        navbar.on_scroll(100.0);
        assert_eq!(
            navbar.on_scroll(400.0),
            NavbarAction::ScheduleHide { delay_ms: 10 }
        );
        assert_eq!(
            navbar.on_scroll(2000.0),
            NavbarAction::ScheduleHide { delay_ms: 10 }
        );
    }

    #[test]
    fn test_shows_when_scrolling_up_near_top() {
        let mut navbar = navbar();
        navbar.on_scroll(900.0);
        // Scrolling up but still far down the page
        assert_eq!(navbar.on_scroll(860.0), NavbarAction::None);
        assert_eq!(navbar.on_scroll(700.0), NavbarAction::Show);
        // Same position again
        assert_eq!(navbar.on_scroll(700.0), NavbarAction::None);
    }

    #[test]
    fn test_stretch_band() {
        let mut navbar = NavbarScroll::new(NavbarConfig {
            fixed_until: 100.0,
            hide_at: 400.0,
            ..NavbarConfig::default()
        });

        let NavbarAction::Stretch(stretch) = navbar.on_scroll(160.0) else {
            panic!("expected stretch");
        };
        assert_close(stretch.translate_y, -36.0);
        assert_close(stretch.scale_y, 0.88);
        assert_close(stretch.skew_y, -0.75);
        assert_close(stretch.opacity, 0.5);

        // Distance is capped at max_stretch
        let NavbarAction::Stretch(capped) = navbar.on_scroll(390.0) else {
            panic!("expected stretch");
        };
        assert_close(capped.opacity, 0.0);
        assert_close(capped.translate_y, -72.0);
        assert!(capped.transform().ends_with("skewY(-1.5deg)"));
    }

    #[test]
    fn test_default_band_is_empty() {
        let mut navbar = navbar();
        for y in [300.0, 301.0, 350.0] {
            assert!(!matches!(navbar.on_scroll(y), NavbarAction::Stretch(_)));
        }
    }
}
