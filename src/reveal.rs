//! Scroll-triggered reveal animations.
//!
//! Each [`RevealKind`] names the elements it applies to, how they are prepared
//! before they scroll into view, and what happens once they intersect. The
//! browser binding feeds observer batches through [`plan_batch`].

use crate::config::RevealConfig;

/// A DOM write used to prepare or reveal an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    SetStyle(&'static str, &'static str),
    AddClass(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Contact items, FAQ items and stats fade up once
    Generic,
    /// Gallery items and the about image, cascading within a batch
    Elegant,
    /// Whole sections slide up; they stay observed
    Section,
}

impl RevealKind {
    pub const ALL: [RevealKind; 3] = [RevealKind::Generic, RevealKind::Elegant, RevealKind::Section];

    pub fn selector(&self) -> &'static str {
        match self {
            RevealKind::Generic => ".contact-item, .faq-item, .stat-item",
            RevealKind::Elegant => ".portfolio-item, .about-image",
            RevealKind::Section => "section",
        }
    }

    pub fn threshold(&self, config: &RevealConfig) -> f64 {
        match self {
            RevealKind::Generic | RevealKind::Section => config.threshold,
            RevealKind::Elegant => config.elegant_threshold,
        }
    }

    /// Root margin, if the observer uses one.
    pub fn root_margin<'a>(&self, config: &'a RevealConfig) -> Option<&'a str> {
        match self {
            RevealKind::Generic | RevealKind::Elegant => Some(config.root_margin.as_str()),
            RevealKind::Section => None,
        }
    }

    /// Writes applied when the page starts, before anything is visible.
    pub fn prepare(&self) -> &'static [Mutation] {
        match self {
            RevealKind::Generic => &[Mutation::SetStyle("opacity", "0")],
            RevealKind::Elegant => &[Mutation::AddClass("elegant-scroll-reveal")],
            RevealKind::Section => &[
                Mutation::SetStyle("opacity", "0"),
                Mutation::SetStyle("transform", "translateY(20px)"),
                Mutation::SetStyle("transition", "opacity 0.6s ease, transform 0.6s ease"),
            ],
        }
    }

    /// Writes applied when the element intersects.
    pub fn reveal(&self) -> &'static [Mutation] {
        match self {
            RevealKind::Generic => &[Mutation::SetStyle("animation", "fadeInUp 0.8s ease forwards")],
            RevealKind::Elegant => &[Mutation::AddClass("visible")],
            RevealKind::Section => &[
                Mutation::SetStyle("opacity", "1"),
                Mutation::SetStyle("transform", "translateY(0)"),
            ],
        }
    }

    /// Whether the element stops being observed after its first reveal.
    pub fn reveals_once(&self) -> bool {
        !matches!(self, RevealKind::Section)
    }
}

/// What to do with one entry of an observer batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    /// Position of the entry in the batch
    pub entry: usize,
    pub delay_ms: u32,
    pub unobserve: bool,
}

/// Plan reveals for an observer batch, given which entries intersect.
///
/// Elegant reveals are delayed by the entry's position in the batch.
pub fn plan_batch(kind: RevealKind, intersecting: &[bool], config: &RevealConfig) -> Vec<RevealPlan> {
    intersecting
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .map(|(entry, _)| RevealPlan {
            entry,
            delay_ms: match kind {
                RevealKind::Elegant => entry as u32 * config.elegant_stagger_ms,
                RevealKind::Generic | RevealKind::Section => 0,
            },
            unobserve: kind.reveals_once(),
        })
        .collect()
}
