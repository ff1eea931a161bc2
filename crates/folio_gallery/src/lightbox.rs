//! Lightbox navigation state machine.
//!
//! ```text
//!  Closed --activate--> Open --next/prev--> Open
//!    ^                   |
//!    +------close--------+
//! ```
//!
//! Activation pulls a fresh [`VisibleSet`] and freezes it into a
//! [`LightboxSession`]; later filter changes never reach an open session.
//! Navigation wraps around both ends, so the index is always in range.

use crate::filter::VisibleSource;
use crate::input::{dispatch, LightboxInput, Transition};
use crate::model::{GalleryItem, ImageRef, ItemId, VisibleSet};
use crate::preload::{adjacent_images, ImagePreloader, NoopPreloader};
use crate::wrap::{next_index, prev_index};

/// What the viewer should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxFrame {
    /// Item being shown
    pub id: ItemId,
    /// 0-based position in the snapshot
    pub index: usize,
    /// Snapshot length
    pub total: usize,
    pub image: ImageRef,
    pub caption: String,
}

impl LightboxFrame {
    fn of(item: &GalleryItem, index: usize, total: usize) -> Self {
        Self {
            id: item.id.clone(),
            index,
            total,
            image: item.image.clone(),
            caption: item.caption.clone(),
        }
    }
}

/// An open viewing session over a frozen visible set.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxSession {
    snapshot: VisibleSet,
    index: usize,
}

impl LightboxSession {
    /// Open at `item`'s position, or at 0 if the item is not in the set.
    ///
    /// Returns `None` for an empty set.
    pub fn open(snapshot: VisibleSet, item: &ItemId) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        let index = snapshot.position(item).unwrap_or_else(|| {
            log::debug!("🔍 Item {} is no longer visible, opening at start", item);
            0
        });
        Some(Self { snapshot, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Always false; a session is never created over an empty set.
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn snapshot(&self) -> &VisibleSet {
        &self.snapshot
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.snapshot.get(self.index)
    }

    pub fn advance(&mut self) {
        self.index = next_index(self.index, self.snapshot.len());
    }

    pub fn retreat(&mut self) {
        self.index = prev_index(self.index, self.snapshot.len());
    }

    pub fn frame(&self) -> Option<LightboxFrame> {
        self.current()
            .map(|item| LightboxFrame::of(item, self.index, self.snapshot.len()))
    }

    /// Images adjacent to the current one, previous first.
    pub fn neighbours(&self) -> Vec<ImageRef> {
        adjacent_images(&self.snapshot, self.index)
    }
}

/// Viewer state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(LightboxSession),
}

/// Result of a transition that changed what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxUpdate {
    /// Viewer became visible; page scroll must be locked
    Opened(LightboxFrame),
    /// Viewer moved to another frame
    Moved(LightboxFrame),
    /// Viewer was dismissed; page scroll must be restored
    Closed,
}

/// The lightbox: state machine plus the preloader it warms neighbours with.
#[derive(Debug, Default)]
pub struct Lightbox<P = NoopPreloader> {
    state: LightboxState,
    preloader: P,
}

impl<P: ImagePreloader> Lightbox<P> {
    pub fn new(preloader: P) -> Self {
        Self {
            state: LightboxState::Closed,
            preloader,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn session(&self) -> Option<&LightboxSession> {
        match &self.state {
            LightboxState::Open(session) => Some(session),
            LightboxState::Closed => None,
        }
    }

    pub fn preloader(&self) -> &P {
        &self.preloader
    }

    /// Open the viewer on `item`, pulling the visible set from `source` now.
    ///
    /// An already open session is replaced. An empty set leaves the lightbox
    /// closed, closing a session that was open.
    pub fn activate(
        &mut self,
        item: &ItemId,
        source: &impl VisibleSource,
    ) -> Option<LightboxUpdate> {
        let snapshot = source.visible_set();
        let Some(session) = LightboxSession::open(snapshot, item) else {
            log::warn!("🔍 Ignoring activation of {}: nothing is visible", item);
            return self.close();
        };

        log::debug!(
            "🔍 Lightbox opened at {}/{}",
            session.index() + 1,
            session.len()
        );
        let frame = session.frame()?;
        warm_neighbours(&self.preloader, &session);
        self.state = LightboxState::Open(session);
        Some(LightboxUpdate::Opened(frame))
    }

    /// Show the next item, wrapping to the first.
    pub fn next(&mut self) -> Option<LightboxUpdate> {
        self.step(LightboxSession::advance)
    }

    /// Show the previous item, wrapping to the last.
    pub fn prev(&mut self) -> Option<LightboxUpdate> {
        self.step(LightboxSession::retreat)
    }

    /// Dismiss the viewer and discard the snapshot.
    pub fn close(&mut self) -> Option<LightboxUpdate> {
        match std::mem::take(&mut self.state) {
            LightboxState::Open(_) => {
                log::debug!("🔍 Lightbox closed");
                Some(LightboxUpdate::Closed)
            }
            LightboxState::Closed => None,
        }
    }

    /// Apply a transition.
    pub fn apply(&mut self, transition: Transition) -> Option<LightboxUpdate> {
        match transition {
            Transition::Next => self.next(),
            Transition::Prev => self.prev(),
            Transition::Close => self.close(),
        }
    }

    /// Route raw input through the dispatch table.
    pub fn handle(&mut self, input: LightboxInput) -> Option<LightboxUpdate> {
        let transition = dispatch(input, self.is_open())?;
        self.apply(transition)
    }

    fn step(&mut self, move_index: fn(&mut LightboxSession)) -> Option<LightboxUpdate> {
        let LightboxState::Open(session) = &mut self.state else {
            return None;
        };
        move_index(session);
        let frame = session.frame()?;
        warm_neighbours(&self.preloader, session);
        Some(LightboxUpdate::Moved(frame))
    }
}

fn warm_neighbours(preloader: &impl ImagePreloader, session: &LightboxSession) {
    for image in session.neighbours() {
        preloader.preload(&image);
    }
}
