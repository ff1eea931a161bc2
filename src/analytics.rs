//! Analytics event pings for contact links and the contact form.

/// A `gtag('event', action, {...})` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub category: &'static str,
    pub label: &'static str,
    pub value: Option<u32>,
}

/// Id of the form whose submissions are tracked.
pub const TRACKED_FORM_ID: &str = "tattooFormES";

/// Event for a link click, if the link is tracked.
pub fn link_event(href: &str) -> Option<AnalyticsEvent> {
    if href.contains("wa.me") {
        Some(AnalyticsEvent {
            action: "click",
            category: "Contact",
            label: "WhatsApp Button",
            value: Some(1),
        })
    } else if href.contains("instagram.com") {
        Some(AnalyticsEvent {
            action: "click",
            category: "Social",
            label: "Instagram Link",
            value: Some(1),
        })
    } else {
        None
    }
}

/// Event for a contact form submission.
pub fn form_submit_event() -> AnalyticsEvent {
    AnalyticsEvent {
        action: "submit",
        category: "Form",
        label: "Contact Form",
        value: None,
    }
}

/// Link selectors whose clicks are tracked.
pub const TRACKED_LINKS: &str = "a[href*=\"wa.me\"], a[href*=\"instagram.com\"]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_and_instagram_links() {
        let event = link_event("https://wa.me/34600000000").unwrap();
        assert_eq!((event.category, event.label), ("Contact", "WhatsApp Button"));
        assert_eq!(event.value, Some(1));

        let event = link_event("https://www.instagram.com/toyooner").unwrap();
        assert_eq!((event.category, event.label), ("Social", "Instagram Link"));
    }

    #[test]
    fn test_untracked_link() {
        assert_eq!(link_event("#portfolio"), None);
        assert_eq!(link_event("mailto:hello@example.com"), None);
    }

    #[test]
    fn test_form_submit_has_no_value() {
        let event = form_submit_event();
        assert_eq!(event.action, "submit");
        assert_eq!(event.value, None);
    }
}
