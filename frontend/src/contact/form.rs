use log::{error, info, warn};
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::contact::error::ContactError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    General,
    Shipping,
    Tracking,
    Support,
    Partnership,
    Careers,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::General,
        ServiceType::Shipping,
        ServiceType::Tracking,
        ServiceType::Support,
        ServiceType::Partnership,
        ServiceType::Careers,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceType::General => "general",
            ServiceType::Shipping => "shipping",
            ServiceType::Tracking => "tracking",
            ServiceType::Support => "support",
            ServiceType::Partnership => "partnership",
            ServiceType::Careers => "careers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::General => "General Inquiry",
            ServiceType::Shipping => "Shipping Quote",
            ServiceType::Tracking => "Tracking Issue",
            ServiceType::Support => "Customer Support",
            ServiceType::Partnership => "Partnership",
            ServiceType::Careers => "Careers",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
    ServiceType,
}

/// What the user has typed so far. `phone`, `company` and `service_type` are
/// shown on the page but never leave the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub service_type: ServiceType,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::ServiceType => match ServiceType::from_value(&value) {
                Some(service) => self.service_type = service,
                None => warn!("Ignoring unknown service type {:?}", value),
            },
        }
    }

    /// The payload sent to the backend: the four required fields and nothing else.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub subject: String,

    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_sending(self) -> bool {
        self == SubmissionStatus::Sending
    }
}

/// Owns the draft and the status of one contact form.
///
/// A submission is split in two halves so the page can await the network in
/// between: [`begin_submit`](Self::begin_submit) flips the status to
/// `Sending` and hands out the payload, [`finish_submit`](Self::finish_submit)
/// settles it. While `Sending`, further submits are refused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormController {
    draft: ContactDraft,
    status: SubmissionStatus,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Edits never touch the status; a success or error banner stays up until
    /// the next submit.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn can_submit(&self) -> bool {
        !self.status.is_sending() && self.draft.to_submission().validate().is_ok()
    }

    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactError> {
        if self.status.is_sending() {
            return Err(ContactError::AlreadySending);
        }

        let submission = self.draft.to_submission();
        submission.validate()?;

        self.status = SubmissionStatus::Sending;
        Ok(submission)
    }

    /// Settles the in-flight submission. `Sending` is always left behind,
    /// whichever way the request went.
    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) {
        if !self.status.is_sending() {
            warn!("Contact submission settled while not sending ({:?})", self.status);
        }

        match outcome {
            Ok(()) => {
                info!("Contact message sent");
                self.draft = ContactDraft::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                error!("Error sending message: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use super::*;
    use crate::contact::client::{interpret_response, ContactTransport};

    struct RecordingTransport {
        reply: fn() -> Result<(), ContactError>,
        sent: RefCell<Vec<Value>>,
    }

    impl RecordingTransport {
        fn new(reply: fn() -> Result<(), ContactError>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn requests(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl ContactTransport for RecordingTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
            let payload = serde_json::to_value(submission).expect("serialize submission");
            self.sent.borrow_mut().push(payload);
            (self.reply)()
        }
    }

    fn accepted() -> Result<(), ContactError> {
        interpret_response(200, r#"{"success":true}"#)
    }

    fn refused() -> Result<(), ContactError> {
        interpret_response(200, r#"{"success":false}"#)
    }

    fn unreachable_host() -> Result<(), ContactError> {
        Err(ContactError::Network("connection refused".to_string()))
    }

    fn filled() -> ContactFormController {
        let mut form = ContactFormController::new();
        form.update_field(Field::Name, "Ada Lovelace".to_string());
        form.update_field(Field::Email, "ada@example.com".to_string());
        form.update_field(Field::Phone, "555-1234".to_string());
        form.update_field(Field::Company, "Analytical Engines".to_string());
        form.update_field(Field::ServiceType, "shipping".to_string());
        form.update_field(Field::Subject, "Quote".to_string());
        form.update_field(Field::Message, "Two crates to London.".to_string());
        form
    }

    async fn submit(form: &mut ContactFormController, transport: &RecordingTransport) {
        match form.begin_submit() {
            Ok(submission) => {
                let outcome = transport.send(&submission).await;
                form.finish_submit(outcome);
            }
            Err(e) => warn!("submit refused: {}", e),
        }
    }

    #[tokio::test]
    async fn incomplete_drafts_never_reach_the_network() {
        let required = [Field::Name, Field::Email, Field::Subject, Field::Message];
        for missing in required {
            let transport = RecordingTransport::new(accepted);
            let mut form = filled();
            form.update_field(missing, String::new());

            assert!(!form.can_submit(), "{:?} left empty", missing);
            submit(&mut form, &transport).await;

            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert_eq!(transport.requests(), 0);
        }
    }

    #[test]
    fn whitespace_only_and_malformed_email_are_incomplete() {
        let mut form = filled();
        form.update_field(Field::Subject, "   ".to_string());
        assert!(matches!(form.begin_submit(), Err(ContactError::Incomplete(_))));

        let mut form = filled();
        form.update_field(Field::Email, "not-an-address".to_string());
        assert!(matches!(form.begin_submit(), Err(ContactError::Incomplete(_))));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn begin_submit_marks_sending_before_any_request() {
        let mut form = filled();
        assert!(form.can_submit());

        form.begin_submit().expect("complete draft");

        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn success_clears_the_draft() {
        let transport = RecordingTransport::new(accepted);
        let mut form = filled();

        submit(&mut form, &transport).await;

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.draft(), &ContactDraft::default());
        assert_eq!(form.draft().service_type, ServiceType::General);
        assert_eq!(transport.requests(), 1);
    }

    #[tokio::test]
    async fn rejection_keeps_the_draft_for_retry() {
        let transport = RecordingTransport::new(refused);
        let mut form = filled();
        let before = form.draft().clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft(), &before);
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn network_failure_keeps_the_draft() {
        let transport = RecordingTransport::new(unreachable_host);
        let mut form = filled();
        let before = form.draft().clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft(), &before);
    }

    #[tokio::test]
    async fn payload_carries_only_the_four_contact_fields() {
        let transport = RecordingTransport::new(accepted);
        let mut form = filled();

        submit(&mut form, &transport).await;

        let sent = transport.sent.borrow();
        assert_eq!(
            sent[0],
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Quote",
                "message": "Two crates to London.",
            })
        );
    }

    #[tokio::test]
    async fn second_submit_while_sending_is_refused() {
        let transport = RecordingTransport::new(accepted);
        let mut form = filled();

        let submission = form.begin_submit().expect("first submit");
        assert!(matches!(form.begin_submit(), Err(ContactError::AlreadySending)));

        let outcome = transport.send(&submission).await;
        form.finish_submit(outcome);

        assert_eq!(transport.requests(), 1);
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn edits_after_an_error_leave_the_status_alone() {
        let transport = RecordingTransport::new(refused);
        let mut form = filled();
        submit(&mut form, &transport).await;

        form.update_field(Field::Message, "Three crates to London.".to_string());

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft().message, "Three crates to London.");
    }

    #[tokio::test]
    async fn resubmitting_after_an_error_can_succeed() {
        let mut form = filled();
        submit(&mut form, &RecordingTransport::new(unreachable_host)).await;
        assert_eq!(form.status(), SubmissionStatus::Error);

        submit(&mut form, &RecordingTransport::new(accepted)).await;
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn unknown_service_type_is_ignored() {
        let mut draft = ContactDraft::default();
        draft.set(Field::ServiceType, "tracking".to_string());
        draft.set(Field::ServiceType, "teleportation".to_string());
        assert_eq!(draft.service_type, ServiceType::Tracking);
    }
}
