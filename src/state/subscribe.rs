//! Newsletter form state. Nothing is submitted anywhere; the form only walks
//! through its states on timers owned by the component.

use super::email::is_valid_email_shape;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscribeStatus {
    #[default]
    Idle,
    Submitting,
    Subscribed,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Trimmed address that passed validation.
    Accepted(String),
    Rejected,
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscribeFlow {
    status: SubscribeStatus,
}

impl SubscribeFlow {
    pub fn status(&self) -> SubscribeStatus {
        self.status
    }

    /// Starts a submission. Ignored from submit until the "Subscribed!"
    /// state has been cleared by [`SubscribeFlow::finish`].
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Busy;
        }

        let email = raw.trim();
        if is_valid_email_shape(email) {
            self.status = SubscribeStatus::Submitting;
            SubmitOutcome::Accepted(email.to_string())
        } else {
            self.status = SubscribeStatus::Invalid;
            SubmitOutcome::Rejected
        }
    }

    pub fn complete(&mut self) {
        if self.status == SubscribeStatus::Submitting {
            self.status = SubscribeStatus::Subscribed;
        }
    }

    /// Clears the "Subscribed!" state; a no-op in any other state.
    pub fn finish(&mut self) {
        if self.status == SubscribeStatus::Subscribed {
            self.status = SubscribeStatus::Idle;
        }
    }

    /// Drops the validation error unless a later submission replaced it.
    pub fn clear_error(&mut self) {
        if self.status == SubscribeStatus::Invalid {
            self.status = SubscribeStatus::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.status = SubscribeStatus::Idle;
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            SubscribeStatus::Submitting | SubscribeStatus::Subscribed
        )
    }

    pub fn button_label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self.status {
            SubscribeStatus::Submitting => "Subscribing...",
            SubscribeStatus::Subscribed => "Subscribed!",
            SubscribeStatus::Idle | SubscribeStatus::Invalid => idle_label,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.status == SubscribeStatus::Invalid).then_some(INVALID_EMAIL_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_walks_through_states() {
        let mut flow = SubscribeFlow::default();
        assert_eq!(
            flow.submit("  reader@reswap.co "),
            SubmitOutcome::Accepted("reader@reswap.co".to_string())
        );
        assert!(flow.is_busy());
        assert_eq!(flow.button_label("Subscribe"), "Subscribing...");

        flow.complete();
        assert_eq!(flow.status(), SubscribeStatus::Subscribed);
        assert_eq!(flow.button_label("Subscribe"), "Subscribed!");

        flow.reset();
        assert_eq!(flow.button_label("Subscribe"), "Subscribe");
    }

    #[test]
    fn test_invalid_submission_sets_error() {
        let mut flow = SubscribeFlow::default();
        assert_eq!(flow.submit("not-an-email"), SubmitOutcome::Rejected);
        assert_eq!(flow.error_message(), Some(INVALID_EMAIL_MESSAGE));
        assert!(!flow.is_busy());

        flow.reset();
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut flow = SubscribeFlow::default();
        flow.submit("a@b.co");
        assert_eq!(flow.submit("c@d.co"), SubmitOutcome::Busy);
        assert_eq!(flow.status(), SubscribeStatus::Submitting);
    }

    #[test]
    fn test_submit_while_subscribed_is_ignored() {
        let mut flow = SubscribeFlow::default();
        flow.submit("a@b.co");
        flow.complete();

        assert!(flow.is_busy());
        assert_eq!(flow.submit("c@d.co"), SubmitOutcome::Busy);
        assert_eq!(flow.status(), SubscribeStatus::Subscribed);

        flow.finish();
        assert_eq!(
            flow.submit("c@d.co"),
            SubmitOutcome::Accepted("c@d.co".to_string())
        );
    }

    #[test]
    fn test_finish_does_not_cancel_a_later_submission() {
        let mut flow = SubscribeFlow::default();
        flow.submit("a@b.co");
        flow.finish();
        assert_eq!(flow.status(), SubscribeStatus::Submitting);
        assert_eq!(flow.button_label("Subscribe"), "Subscribing...");
    }

    #[test]
    fn test_clear_error_only_from_invalid() {
        let mut flow = SubscribeFlow::default();
        flow.submit("nope");
        flow.clear_error();
        assert_eq!(flow.status(), SubscribeStatus::Idle);

        flow.submit("a@b.co");
        flow.clear_error();
        assert_eq!(flow.status(), SubscribeStatus::Submitting);
    }

    #[test]
    fn test_complete_only_from_submitting() {
        let mut flow = SubscribeFlow::default();
        flow.complete();
        assert_eq!(flow.status(), SubscribeStatus::Idle);
    }
}
