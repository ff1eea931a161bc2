//! Group selection and category filtering.
//!
//! [`GallerySelector`] owns the catalog and the filter state. Every change
//! returns a [`FilterChange`] describing which items to show (and how to
//! animate them), which to hide, and which control is now active. The visible
//! set itself is never cached: [`GallerySelector::visible_set`] recomputes it
//! on demand.

use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, GalleryItem, GroupId, ItemId, VisibleSet};

/// Delay between consecutive items cascading in after a group switch.
pub const DEFAULT_STAGGER_STEP: Duration = Duration::from_millis(50);

/// Filter value that matches every category.
const ALL: &str = "all";

/// Category filter within the active group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every item of the group
    #[default]
    All,
    /// Only items with this category tag
    Category(String),
}

impl CategoryFilter {
    /// Parse a control's filter value; `"all"` selects everything.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// Value as written on the filter control.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }
}

/// Current group and category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub group: GroupId,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(group: GroupId) -> Self {
        Self {
            group,
            category: CategoryFilter::All,
        }
    }

    pub fn admits(&self, item: &GalleryItem) -> bool {
        item.group == self.group && self.category.matches(&item.category)
    }
}

/// Control that must be the single active one in its button row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveControl {
    /// Selector button targeting this group
    Group(GroupId),
    /// Filter button carrying this value
    Category(CategoryFilter),
}

/// How a newly shown item enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAnimation {
    /// Fixed-duration fade/slide-in, all items at once
    FadeIn,
    /// Same animation delayed so items cascade in
    Cascade { delay: Duration },
}

impl EntryAnimation {
    /// CSS `animation` value built on `base` (name, duration, easing).
    pub fn css(&self, base: &str) -> String {
        match self {
            EntryAnimation::FadeIn => base.to_string(),
            EntryAnimation::Cascade { delay } => {
                format!("{} {}ms forwards", base, delay.as_millis())
            }
        }
    }
}

/// An item to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownItem {
    pub id: ItemId,
    pub animation: EntryAnimation,
}

/// Observable effect of a filter or group change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    pub active: ActiveControl,
    /// Visible items in document order
    pub shown: Vec<ShownItem>,
    /// Every other catalog item
    pub hidden: Vec<ItemId>,
}

/// Anything that can produce the current visible set on request.
pub trait VisibleSource {
    fn visible_set(&self) -> VisibleSet;
}

impl VisibleSource for VisibleSet {
    fn visible_set(&self) -> VisibleSet {
        self.clone()
    }
}

/// Derive the visible set for a filter state, in document order.
pub fn compute_visible_set(catalog: &Catalog, state: &FilterState) -> VisibleSet {
    catalog
        .iter()
        .filter(|item| state.admits(item))
        .map(Rc::clone)
        .collect()
}

/// Tracks the active gallery group and category filter.
#[derive(Debug, Clone)]
pub struct GallerySelector {
    catalog: Catalog,
    state: FilterState,
    stagger_step: Duration,
}

impl GallerySelector {
    /// Create a selector showing `group` with no category filter.
    pub fn new(catalog: Catalog, group: GroupId) -> Self {
        Self {
            catalog,
            state: FilterState::new(group),
            stagger_step: DEFAULT_STAGGER_STEP,
        }
    }

    /// Use a different cascade step for group switches.
    pub fn with_stagger_step(mut self, step: Duration) -> Self {
        self.stagger_step = step;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn stagger_step(&self) -> Duration {
        self.stagger_step
    }

    /// Switch the displayed gallery collection.
    ///
    /// The category filter is kept and re-applied to the new group's items.
    /// Shown items cascade in, each delayed by its position times the stagger
    /// step.
    pub fn set_group(&mut self, group: GroupId) -> FilterChange {
        log::debug!("🗂️ Switching gallery group to {}", group);
        self.state.group = group;

        let step = self.stagger_step;
        let (shown, hidden) = self.partition(|position| EntryAnimation::Cascade {
            delay: step * position as u32,
        });

        FilterChange {
            active: ActiveControl::Group(self.state.group.clone()),
            shown,
            hidden,
        }
    }

    /// Filter the active group by category (or show all of it).
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> FilterChange {
        log::debug!("🗂️ Filtering {} by '{}'", self.state.group, filter.as_str());
        self.state.category = filter;

        let (shown, hidden) = self.partition(|_| EntryAnimation::FadeIn);

        FilterChange {
            active: ActiveControl::Category(self.state.category.clone()),
            shown,
            hidden,
        }
    }

    /// Recompute the visible set from the current state.
    pub fn visible_set(&self) -> VisibleSet {
        compute_visible_set(&self.catalog, &self.state)
    }

    fn partition(
        &self,
        animation_for: impl Fn(usize) -> EntryAnimation,
    ) -> (Vec<ShownItem>, Vec<ItemId>) {
        let mut shown = Vec::new();
        let mut hidden = Vec::new();

        for item in self.catalog.iter() {
            if self.state.admits(item) {
                shown.push(ShownItem {
                    id: item.id.clone(),
                    animation: animation_for(shown.len()),
                });
            } else {
                hidden.push(item.id.clone());
            }
        }

        (shown, hidden)
    }
}

impl VisibleSource for GallerySelector {
    fn visible_set(&self) -> VisibleSet {
        GallerySelector::visible_set(self)
    }
}
