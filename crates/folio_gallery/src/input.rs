//! Lightbox input arbitration.
//!
//! Pointer and keyboard events all converge on three transitions. The mapping
//! lives in one table so it can be checked without a document.

/// Keys the lightbox cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Clickable lightbox controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Close,
}

/// Raw input reaching the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxInput {
    /// Global keydown
    Key(Key),
    /// Click on one of the lightbox controls
    ControlClick(Control),
    /// Click that landed on the dimmed overlay; `on_backdrop` is false when
    /// it bubbled up from the image or a control
    BackdropClick { on_backdrop: bool },
}

impl LightboxInput {
    /// Control clicks must not bubble to the overlay and close it a second time.
    pub fn stops_propagation(&self) -> bool {
        matches!(self, LightboxInput::ControlClick(_))
    }
}

/// State machine transition requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Prev,
    Next,
    Close,
}

const KEY_TABLE: &[(Key, Transition)] = &[
    (Key::Escape, Transition::Close),
    (Key::ArrowLeft, Transition::Prev),
    (Key::ArrowRight, Transition::Next),
];

const CONTROL_TABLE: &[(Control, Transition)] = &[
    (Control::Prev, Transition::Prev),
    (Control::Next, Transition::Next),
    (Control::Close, Transition::Close),
];

/// Resolve an input to a transition, or `None` if it should be ignored.
///
/// Keyboard input only counts while the lightbox is open.
pub fn dispatch(input: LightboxInput, is_open: bool) -> Option<Transition> {
    match input {
        LightboxInput::Key(key) => {
            if !is_open {
                return None;
            }
            KEY_TABLE
                .iter()
                .find(|(bound, _)| *bound == key)
                .map(|(_, transition)| *transition)
        }
        LightboxInput::ControlClick(control) => CONTROL_TABLE
            .iter()
            .find(|(bound, _)| *bound == control)
            .map(|(_, transition)| *transition),
        LightboxInput::BackdropClick { on_backdrop } => on_backdrop.then_some(Transition::Close),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_names() {
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom_key("Enter"), Key::Other);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }

    #[test]
    fn test_keys_while_open() {
        assert_eq!(
            dispatch(LightboxInput::Key(Key::Escape), true),
            Some(Transition::Close)
        );
        assert_eq!(
            dispatch(LightboxInput::Key(Key::ArrowLeft), true),
            Some(Transition::Prev)
        );
        assert_eq!(
            dispatch(LightboxInput::Key(Key::ArrowRight), true),
            Some(Transition::Next)
        );
        assert_eq!(dispatch(LightboxInput::Key(Key::Other), true), None);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight, Key::Other] {
            assert_eq!(dispatch(LightboxInput::Key(key), false), None);
        }
    }

    #[test]
    fn test_controls() {
        assert_eq!(
            dispatch(LightboxInput::ControlClick(Control::Next), true),
            Some(Transition::Next)
        );
        assert_eq!(
            dispatch(LightboxInput::ControlClick(Control::Prev), true),
            Some(Transition::Prev)
        );
        assert_eq!(
            dispatch(LightboxInput::ControlClick(Control::Close), true),
            Some(Transition::Close)
        );
        assert!(LightboxInput::ControlClick(Control::Close).stops_propagation());
        assert!(!LightboxInput::Key(Key::Escape).stops_propagation());
    }

    #[test]
    fn test_backdrop_only_closes_on_itself() {
        assert_eq!(
            dispatch(LightboxInput::BackdropClick { on_backdrop: true }, true),
            Some(Transition::Close)
        );
        assert_eq!(
            dispatch(LightboxInput::BackdropClick { on_backdrop: false }, true),
            None
        );
    }
}
