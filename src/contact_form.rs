//! Contact form flow: attachment limits, the anti-bot delay and submission state.
//!
//! The POST itself is opaque I/O done by the browser binding; this module only
//! decides what the form shows before, during and after it.

use std::time::Duration;

use web_time::Instant;

use crate::config::FormConfig;

/// Language of a form, taken from its id (`tattooFormEN`, `tattooFormES`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    pub fn from_form_id(id: &str) -> Self {
        if id.contains("EN") { Lang::En } else { Lang::Es }
    }

    pub fn too_many_attachments(&self, max: usize) -> String {
        match self {
            Lang::En => format!("Max {max} images allowed."),
            Lang::Es => format!("Máximo {max} imágenes permitidas."),
        }
    }

    pub fn sending(&self) -> &'static str {
        match self {
            Lang::En => "Sending...",
            Lang::Es => "Enviando...",
        }
    }

    pub fn success(&self) -> &'static str {
        match self {
            Lang::En => "Success! Inquiry sent.",
            Lang::Es => "¡Éxito! Consulta enviada correctamente.",
        }
    }

    pub fn failure(&self) -> &'static str {
        match self {
            Lang::En => "Error. Please try again.",
            Lang::Es => "Hubo un error. Inténtalo de nuevo.",
        }
    }
}

/// Message colours.
pub const SUCCESS_COLOR: &str = "#28a745";
pub const ERROR_COLOR: &str = "#dc3545";

/// Result of checking the selected attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentCheck {
    /// Show previews for all files
    Accepted,
    /// Alert with this message and clear the input
    Rejected(String),
}

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    /// Request in flight; the button is disabled
    Sending,
    Succeeded,
    Failed,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Post the form; show `button_text` on the disabled button meanwhile
    Send { button_text: &'static str },
    /// Filled in faster than a person could; drop silently
    TooFast,
    /// A request is already in flight
    Busy,
}

/// Text and colour for the form's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub color: &'static str,
}

/// State of one contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    lang: Lang,
    config: FormConfig,
    ready_at: Instant,
    state: SubmitState,
    /// Button label to restore after a submission
    original_button_text: Option<String>,
}

impl ContactForm {
    /// Start tracking a form; the anti-bot timer starts at `ready_at`.
    pub fn new(form_id: &str, config: FormConfig, ready_at: Instant) -> Self {
        Self {
            lang: Lang::from_form_id(form_id),
            config,
            ready_at,
            state: SubmitState::Idle,
            original_button_text: None,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Check the number of selected files.
    pub fn check_attachments(&self, count: usize) -> AttachmentCheck {
        if count > self.config.max_attachments {
            AttachmentCheck::Rejected(self.lang.too_many_attachments(self.config.max_attachments))
        } else {
            AttachmentCheck::Accepted
        }
    }

    /// Decide whether a submit at `now` goes out.
    pub fn begin_submit(&mut self, now: Instant, button_text: &str) -> SubmitDecision {
        if self.state == SubmitState::Sending {
            return SubmitDecision::Busy;
        }
        if elapsed(self.ready_at, now) < self.config.min_fill_time() {
            log::debug!("📨 Dropping submission sent too soon after page load");
            return SubmitDecision::TooFast;
        }

        self.state = SubmitState::Sending;
        self.original_button_text = Some(button_text.to_string());
        SubmitDecision::Send {
            button_text: self.lang.sending(),
        }
    }

    /// Record the response. Returns the status line and the button text to restore.
    pub fn finish_submit(&mut self, ok: bool) -> (StatusMessage, String) {
        self.state = if ok {
            SubmitState::Succeeded
        } else {
            SubmitState::Failed
        };

        let message = if ok {
            StatusMessage {
                text: self.lang.success(),
                color: SUCCESS_COLOR,
            }
        } else {
            StatusMessage {
                text: self.lang.failure(),
                color: ERROR_COLOR,
            }
        };

        (message, self.original_button_text.take().unwrap_or_default())
    }
}

fn elapsed(from: Instant, to: Instant) -> Duration {
    to.checked_duration_since(from).unwrap_or_default()
}

/// Whether a form posts to the external form endpoint.
pub fn targets_endpoint(action: &str, endpoint_host: &str) -> bool {
    !endpoint_host.is_empty() && action.contains(endpoint_host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str) -> (ContactForm, Instant) {
        let ready = Instant::now();
        (ContactForm::new(id, FormConfig::default(), ready), ready)
    }

    #[test]
    fn test_language_from_id() {
        assert_eq!(Lang::from_form_id("tattooFormEN"), Lang::En);
        assert_eq!(Lang::from_form_id("tattooFormES"), Lang::Es);
        assert_eq!(Lang::from_form_id(""), Lang::Es);
    }

    #[test]
    fn test_attachment_limit() {
        let (en, _) = form("tattooFormEN");
        assert_eq!(en.check_attachments(0), AttachmentCheck::Accepted);
        assert_eq!(en.check_attachments(5), AttachmentCheck::Accepted);
        assert_eq!(
            en.check_attachments(6),
            AttachmentCheck::Rejected("Max 5 images allowed.".to_string())
        );

        let (es, _) = form("tattooFormES");
        assert_eq!(
            es.check_attachments(9),
            AttachmentCheck::Rejected("Máximo 5 imágenes permitidas.".to_string())
        );
    }

    #[test]
    fn test_too_fast_submission_dropped() {
        let (mut form, ready) = form("tattooFormEN");
        let decision = form.begin_submit(ready + Duration::from_millis(2999), "Send");
        assert_eq!(decision, SubmitDecision::TooFast);
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_successful_submission_cycle() {
        let (mut form, ready) = form("tattooFormEN");
        let now = ready + Duration::from_secs(10);

        assert_eq!(
            form.begin_submit(now, "Send inquiry"),
            SubmitDecision::Send {
                button_text: "Sending..."
            }
        );
        assert_eq!(form.begin_submit(now, "Sending..."), SubmitDecision::Busy);

        let (message, restore) = form.finish_submit(true);
        assert_eq!(message.text, "Success! Inquiry sent.");
        assert_eq!(message.color, SUCCESS_COLOR);
        assert_eq!(restore, "Send inquiry");
        assert_eq!(form.state(), &SubmitState::Succeeded);
    }

    #[test]
    fn test_failed_submission_can_retry() {
        let (mut form, ready) = form("tattooFormES");
        let now = ready + Duration::from_secs(4);

        form.begin_submit(now, "Enviar");
        let (message, restore) = form.finish_submit(false);
        assert_eq!(message.text, "Hubo un error. Inténtalo de nuevo.");
        assert_eq!(message.color, ERROR_COLOR);
        assert_eq!(restore, "Enviar");

        assert!(matches!(
            form.begin_submit(now, "Enviar"),
            SubmitDecision::Send { .. }
        ));
    }

    #[test]
    fn test_endpoint_match() {
        assert!(targets_endpoint("https://formbold.com/s/abc", "formbold.com"));
        assert!(!targets_endpoint("/contact", "formbold.com"));
        assert!(!targets_endpoint("/contact", ""));
    }
}
