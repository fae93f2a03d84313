mod rules;
mod transport;

pub use rules::{validate_field, FieldKind, FieldSpec, Rule};
#[cfg(target_arch = "wasm32")]
pub use transport::RelayTransport;
pub use transport::{Transport, TransportError, RELAY_ENDPOINT};

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// The contact form's declared field set. The controller is parameterized by
/// a field table, so adding or removing a field (a `subject`, say) is a
/// configuration change here rather than a second form implementation.
pub static CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full Name",
        error_label: "Name",
        placeholder: "Enter your full name",
        kind: FieldKind::Text,
        rules: &[Rule::Required],
        char_cap: None,
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        error_label: "Email",
        placeholder: "Enter your email address",
        kind: FieldKind::Email,
        rules: &[Rule::Required, Rule::Email],
        char_cap: None,
    },
    FieldSpec {
        name: "message",
        label: "Message",
        error_label: "Message",
        placeholder: "Enter your message",
        kind: FieldKind::Textarea,
        rules: &[Rule::Required, Rule::MinLength(10)],
        char_cap: Some(500),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has validation errors")]
    Invalid,
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// JSON payload handed to the transport: exactly the declared field set, as
/// string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission(BTreeMap<&'static str, String>);

impl Submission {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// State machine behind the contact form: field values, per-field errors,
/// and the submission lifecycle. Holds no Leptos types; the component layer
/// keeps one instance in a signal and drives it from DOM events.
///
/// Values and errors always carry the same key set (the declared fields), and
/// the transport is only ever invoked once per submission, after the whole
/// form validates.
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, Option<String>>,
    status: SubmissionStatus,
}

impl FormModel {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        let values = fields.iter().map(|f| (f.name, String::new())).collect();
        let errors = fields.iter().map(|f| (f.name, None)).collect();
        Self {
            fields,
            values,
            errors,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).and_then(|e| e.as_deref())
    }

    /// Derived character count for length-tracked fields.
    pub fn char_count(&self, name: &str) -> usize {
        self.value(name).chars().count()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Writes the value and immediately re-validates just this field, so the
    /// error entry clears the moment the input becomes valid. Unknown names
    /// are a no-op; field sets are vetted when declared, not per keystroke.
    pub fn update_field(&mut self, name: &str, value: String) {
        let Some(spec) = self.spec(name) else {
            return;
        };
        let error = validate_field(spec, &value);
        self.values.insert(spec.name, value);
        self.errors.insert(spec.name, error);
    }

    /// Validates every declared field, rewriting the error map wholesale.
    /// Returns whether the form as a whole is valid. This is the gate before
    /// submission.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for spec in self.fields {
            let error = validate_field(spec, self.value(spec.name));
            valid &= error.is_none();
            self.errors.insert(spec.name, error);
        }
        valid
    }

    /// Gate-and-dispatch half of the submission lifecycle. Runs the
    /// whole-form gate and, when it passes, transitions to Submitting and
    /// hands back the serialized payload for the transport. At most one
    /// submission may be in flight per form instance.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if !self.validate_all() {
            return Err(SubmitError::Invalid);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(self.payload())
    }

    /// Completion half: back to Idle regardless of outcome. Success clears
    /// the form; failure preserves the typed input so the visitor can retry.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) -> Result<(), SubmitError> {
        self.status = SubmissionStatus::Idle;
        match result {
            Ok(()) => {
                self.clear();
                Ok(())
            }
            Err(err) => Err(SubmitError::Transport(err)),
        }
    }

    /// One full submission lifecycle against the given transport: exactly one
    /// `send` when the form validates, none otherwise, no automatic retry.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> Result<(), SubmitError> {
        let submission = self.begin_submit()?;
        let result = transport.send(&submission).await;
        self.finish_submit(result)
    }

    /// Restores values and errors to their initial empty state. An in-flight
    /// request is not cancelled; this touches presentation state only.
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        for spec in self.fields {
            self.values.insert(spec.name, String::new());
            self.errors.insert(spec.name, None);
        }
    }

    fn payload(&self) -> Submission {
        Submission(
            self.fields
                .iter()
                .map(|spec| (spec.name, self.value(spec.name).to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct SpyTransport {
        calls: RefCell<Vec<Submission>>,
        fail: bool,
    }

    impl SpyTransport {
        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for SpyTransport {
        async fn send(&self, submission: &Submission) -> Result<(), TransportError> {
            self.calls.borrow_mut().push(submission.clone());
            if self.fail {
                Err(TransportError::Request("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn fill_valid(form: &mut FormModel) {
        form.update_field("name", "Jo".to_string());
        form.update_field("email", "a@b.com".to_string());
        form.update_field("message", "this is long enough".to_string());
    }

    fn assert_initial(form: &FormModel) {
        for spec in form.fields() {
            assert_eq!(form.value(spec.name), "");
            assert_eq!(form.error(spec.name), None);
        }
    }

    #[test]
    fn new_form_is_empty_and_idle() {
        let form = FormModel::new(CONTACT_FIELDS);
        assert_initial(&form);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn update_field_sets_then_clears_error() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("email", "bad-email".to_string());
        assert_eq!(form.error("email"), Some("Invalid email format"));
        assert!(!form.validate_all());

        form.update_field("email", "a@b.com".to_string());
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn update_field_unknown_name_is_noop() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("phone", "555-0100".to_string());
        assert_eq!(form.value("phone"), "");
        assert_initial(&form);
    }

    #[test]
    fn char_count_tracks_message_field() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        assert_eq!(form.char_count("message"), 0);
        form.update_field("message", "hello there".to_string());
        assert_eq!(form.char_count("message"), 11);
    }

    #[test]
    fn blank_name_fails_whole_form() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("email", "a@b.com".to_string());
        form.update_field("message", "hello".to_string());
        assert!(!form.validate_all());
        assert_eq!(form.error("name"), Some("Name is required"));
    }

    #[test]
    fn malformed_email_fails_whole_form() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("name", "Jo".to_string());
        form.update_field("email", "bad-email".to_string());
        form.update_field("message", "this is long enough".to_string());
        assert!(!form.validate_all());
        assert_eq!(form.error("email"), Some("Invalid email format"));
    }

    #[test]
    fn short_message_fails_whole_form() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("name", "Jo".to_string());
        form.update_field("email", "a@b.com".to_string());
        form.update_field("message", "short".to_string());
        assert!(!form.validate_all());
        assert!(form
            .error("message")
            .expect("short message should have an error")
            .contains("at least 10"));
    }

    #[tokio::test]
    async fn submit_skips_transport_when_invalid() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        form.update_field("name", "Jo".to_string());
        let spy = SpyTransport::default();

        let res = form.submit(&spy).await;
        assert_eq!(res, Err(SubmitError::Invalid));
        assert_eq!(spy.call_count(), 0);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        // typed input survives the failed gate
        assert_eq!(form.value("name"), "Jo");
    }

    #[tokio::test]
    async fn submit_sends_exactly_once_when_valid() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);
        let spy = SpyTransport::default();

        let res = form.submit(&spy).await;
        assert_eq!(res, Ok(()));
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn successful_submit_clears_form() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);
        let spy = SpyTransport::default();

        form.submit(&spy).await.expect("submission should succeed");
        assert_initial(&form);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn failed_submit_preserves_input() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);
        let spy = SpyTransport::failing();

        let res = form.submit(&spy).await;
        assert!(matches!(res, Err(SubmitError::Transport(_))));
        assert_eq!(spy.call_count(), 1);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.value("name"), "Jo");
        assert_eq!(form.value("email"), "a@b.com");
        assert_eq!(form.value("message"), "this is long enough");
    }

    #[test]
    fn payload_is_exactly_the_declared_field_set() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);

        let submission = form.begin_submit().expect("valid form should submit");
        assert_eq!(submission.len(), 3);
        assert_eq!(submission.value("name"), Some("Jo"));
        assert_eq!(submission.value("email"), Some("a@b.com"));
        assert_eq!(submission.value("message"), Some("this is long enough"));

        let json = serde_json::to_value(&submission).expect("payload should serialize");
        let obj = json.as_object().expect("payload should be a JSON object");
        assert_eq!(obj.len(), 3);
        assert!(obj.values().all(|v| v.is_string()));
    }

    #[test]
    fn second_submit_is_rejected_while_in_flight() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);

        form.begin_submit().expect("first submit should dispatch");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));

        form.finish_submit(Ok(()))
            .expect("completion should succeed");
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);
        form.update_field("email", "bad-email".to_string());
        assert!(form.error("email").is_some());

        form.reset();
        assert_initial(&form);
    }

    #[test]
    fn reset_does_not_cancel_in_flight_submission() {
        let mut form = FormModel::new(CONTACT_FIELDS);
        fill_valid(&mut form);
        form.begin_submit().expect("valid form should submit");

        form.reset();
        assert!(form.is_submitting());
        assert_initial(&form);
    }

    #[test]
    fn field_set_is_configuration() {
        static WITH_SUBJECT: &[FieldSpec] = &[
            FieldSpec {
                name: "name",
                label: "Full Name",
                error_label: "Name",
                placeholder: "",
                kind: FieldKind::Text,
                rules: &[Rule::Required],
                char_cap: None,
            },
            FieldSpec {
                name: "subject",
                label: "Subject",
                error_label: "Subject",
                placeholder: "",
                kind: FieldKind::Text,
                rules: &[Rule::Required],
                char_cap: None,
            },
        ];

        let mut form = FormModel::new(WITH_SUBJECT);
        form.update_field("name", "Jo".to_string());
        assert!(!form.validate_all());
        assert_eq!(form.error("subject"), Some("Subject is required"));

        form.update_field("subject", "Hello".to_string());
        assert!(form.validate_all());
        let submission = form.begin_submit().expect("valid form should submit");
        assert_eq!(submission.len(), 2);
        assert_eq!(submission.value("subject"), Some("Hello"));
    }
}
