//! Contact terminal state machine.
//!
//! The contact section renders a fake terminal whose transcript logs every
//! step of a submission. All transitions live here, independent of the DOM
//! and of the transport; the component only shuttles keystrokes in and hands
//! the payload to `fetch` when `begin_submit` accepts one.

use serde::Serialize;
use thiserror::Error;

/// Form-relay endpoint. Accepts the JSON payload, answers with a bare status.
pub const FORM_ENDPOINT: &str = "/api/form-submit";

/// Transcript lines shown before any interaction.
pub const BOOT_LINES: [&str; 3] = [
    "Establishing secure channel...",
    "Connection established.",
    "Ready to receive transmission.",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.surname,
            &self.email,
            &self.subject,
            &self.message,
        ]
    }

    /// Every field must carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Terminal result of one transmission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Any 2xx status.
    Accepted,
    /// Server answered outside the 2xx range.
    Rejected(u16),
    /// The request never completed.
    Unreachable,
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted
        } else {
            Self::Rejected(status)
        }
    }
}

/// Transport-level failure surfaced to the log before folding into
/// [`SubmitOutcome::Unreachable`].
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("couldn't serialize form payload")]
    Serialize(#[from] serde_json::Error),
    #[error("network or server is unavailable")]
    Unreachable,
}

#[derive(Debug, Clone)]
pub struct Transmission {
    pub form: ContactForm,
    transcript: Vec<String>,
    sending: bool,
    submitted: bool,
}

impl Default for Transmission {
    fn default() -> Self {
        Self::new()
    }
}

impl Transmission {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            transcript: BOOT_LINES.iter().map(|s| s.to_string()).collect(),
            sending: false,
            submitted: false,
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn sending(&self) -> bool {
        self.sending
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Start a submission attempt. Returns the payload to transmit, or `None`
    /// when a send is already in flight or a field is blank; both are silent
    /// no-ops with no transcript entry.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.sending || !self.form.is_complete() {
            return None;
        }
        self.transcript.push(format!(
            "> {} {} | {} | {}",
            self.form.name, self.form.surname, self.form.email, self.form.subject
        ));
        self.transcript
            .push(format!("Sending packet to {FORM_ENDPOINT}..."));
        self.sending = true;
        Some(self.form.clone())
    }

    /// Record the result of the attempt. `sending` is dropped last in every
    /// arm so a never-settling transport is the only way to stay stuck.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => {
                self.transcript
                    .push("Message queued. Will respond via preferred channel.".to_string());
                self.form.clear();
                self.submitted = true;
            }
            SubmitOutcome::Rejected(status) => {
                self.transcript
                    .push(format!("Transmission failed. Status: {status}"));
            }
            SubmitOutcome::Unreachable => {
                self.transcript
                    .push("Transmission failed. Network or server is unavailable.".to_string());
            }
        }
        self.sending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Engines".into(),
            message: "Let's talk difference engines.".into(),
        }
    }

    #[test]
    fn boot_transcript_is_seeded() {
        let tx = Transmission::new();
        assert_eq!(tx.transcript().len(), 3);
        assert_eq!(tx.transcript()[0], BOOT_LINES[0]);
    }

    #[test]
    fn accepted_submit_logs_confirms_and_clears() {
        let mut tx = Transmission::new();
        tx.form = filled();
        let payload = tx.begin_submit().expect("complete form should transmit");
        assert_eq!(payload, filled());
        assert!(tx.sending());
        // echo + sending lines, in order
        assert_eq!(
            tx.transcript()[3],
            "> Ada Lovelace | ada@example.com | Engines"
        );
        assert!(tx.transcript()[4].starts_with("Sending packet to /api/form-submit"));

        tx.finish_submit(SubmitOutcome::from_status(201));
        assert_eq!(tx.transcript().len(), 6);
        assert!(tx.transcript()[5].starts_with("Message queued"));
        assert_eq!(tx.form, ContactForm::default());
        assert!(tx.submitted());
        assert!(!tx.sending());
    }

    #[test]
    fn blank_field_is_a_silent_noop() {
        let mut tx = Transmission::new();
        tx.form = filled();
        tx.form.email = "   ".into();
        assert!(tx.begin_submit().is_none());
        assert_eq!(tx.transcript().len(), 3);
        assert!(!tx.sending());
        assert!(!tx.submitted());
    }

    #[test]
    fn rejected_submit_logs_status_and_keeps_fields() {
        let mut tx = Transmission::new();
        tx.form = filled();
        tx.begin_submit().unwrap();
        tx.finish_submit(SubmitOutcome::from_status(500));
        assert_eq!(tx.transcript().len(), 6);
        assert_eq!(tx.transcript()[5], "Transmission failed. Status: 500");
        assert_eq!(tx.form, filled());
        assert!(!tx.submitted());
        assert!(!tx.sending());
    }

    #[test]
    fn unreachable_transport_logs_generic_failure() {
        let mut tx = Transmission::new();
        tx.form = filled();
        tx.begin_submit().unwrap();
        tx.finish_submit(SubmitOutcome::Unreachable);
        assert_eq!(
            tx.transcript().last().map(String::as_str),
            Some("Transmission failed. Network or server is unavailable.")
        );
        assert_eq!(tx.form, filled());
        assert!(!tx.sending());
    }

    #[test]
    fn resubmit_while_sending_is_a_noop() {
        let mut tx = Transmission::new();
        tx.form = filled();
        tx.begin_submit().unwrap();
        let lines = tx.transcript().len();
        assert!(tx.begin_submit().is_none());
        assert_eq!(tx.transcript().len(), lines);
    }

    #[test]
    fn form_remains_usable_after_failure() {
        let mut tx = Transmission::new();
        tx.form = filled();
        tx.begin_submit().unwrap();
        tx.finish_submit(SubmitOutcome::Rejected(503));
        // second attempt goes through again
        assert!(tx.begin_submit().is_some());
        tx.finish_submit(SubmitOutcome::Accepted);
        assert!(tx.submitted());
    }

    #[test]
    fn outcome_classification_covers_the_2xx_range() {
        assert_eq!(SubmitOutcome::from_status(200), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_status(299), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_status(301), SubmitOutcome::Rejected(301));
        assert_eq!(SubmitOutcome::from_status(404), SubmitOutcome::Rejected(404));
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["surname"], "Lovelace");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Engines");
        assert_eq!(json["message"], "Let's talk difference engines.");
    }
}
