//! Global constants for the folio page

/// Navbar stays pinned while the page is scrolled less than this (px)
pub const NAVBAR_FIXED_UNTIL: f64 = 300.0;

/// Navbar starts hiding past this scroll position (px)
pub const NAVBAR_HIDE_AT: f64 = 300.0;

/// Scrolling up only brings the navbar back above this position (px)
pub const NAVBAR_SHOW_AT: f64 = 850.0;

/// Delay before a scheduled navbar hide takes effect (ms)
pub const NAVBAR_HIDE_DELAY_MS: u32 = 10;

/// Longest stretch distance applied to the navbar (px)
pub const NAVBAR_MAX_STRETCH: f64 = 120.0;

/// Fixed navbar height subtracted from anchor scroll targets (px)
pub const ANCHOR_OFFSET: f64 = 70.0;

/// Cascade step between gallery items after a group switch (ms)
pub const GALLERY_STAGGER_STEP_MS: u64 = 50;

/// Entry animation for items revealed by a filter change
pub const GALLERY_FILTER_ANIMATION: &str = "fadeInUp 0.5s ease";

/// Group shown when the page does not mark one as active
pub const DEFAULT_GALLERY_GROUP: &str = "gallery-tattoos";

/// Intersection ratio that triggers the generic reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection ratio that triggers the gallery/about reveal
pub const ELEGANT_REVEAL_THRESHOLD: f64 = 0.15;

/// Delay between elements revealed in the same observer batch (ms)
pub const ELEGANT_REVEAL_STAGGER_MS: u32 = 100;

/// Root margin shared by the reveal observers
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Intersection ratio that starts a stat counter
pub const STATS_THRESHOLD: f64 = 0.5;

/// Total stat counter animation time (ms)
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Counter frame interval, roughly 60 FPS (ms)
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// Submissions earlier than this after page ready are treated as bots (ms)
pub const FORM_MIN_FILL_MS: u64 = 3000;

/// Maximum number of images attached to a contact form
pub const FORM_MAX_ATTACHMENTS: usize = 5;

/// Only forms posting to this host are bound
pub const FORM_ENDPOINT_HOST: &str = "formbold.com";

/// Hero background parallax factor
pub const HERO_PARALLAX_SPEED: f64 = 0.5;

/// Delay before the body is marked loaded after DOMContentLoaded (ms)
pub const LOADED_CLASS_DELAY_MS: i32 = 100;

/// Styled console lines printed on start: (`%c`-prefixed text, CSS).
pub const CONSOLE_BANNER: [(&str, &str); 3] = [
    (
        "%cToyooner - Tatuador Guest en Barcelona",
        "font-size: 20px; font-weight: bold; color: #7dd3fc;",
    ),
    ("%cRealismo, Blackwork Dark", "font-size: 14px; color: #a3a3a3;"),
    (
        "%c¿Interesado en el código? Contáctame en @toyooner",
        "font-size: 12px; color: #7dd3fc;",
    ),
];
