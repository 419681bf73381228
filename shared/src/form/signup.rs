use crate::api::TenantApi;
use crate::config::FrontendConfig;
use crate::entity::signup::{SignupField, SignupInput, SignupPayload};
use crate::entity::strength::PasswordStrength;
use crate::entity::validation::ValidationResult;
use crate::errors::{FrontendError, FrontendResult, SIGNUP_FAILED_MESSAGE};
use crate::form::{BusyFlag, InFlight};
use crate::form::view::{Alert, AlertKind, FormView, StrengthMeter, SubmitButton};

use tracing::{info, instrument, warn};

pub const SIGNUP_SUCCESS_MESSAGE: &str =
    "A confirmation email has been sent. Please activate your account from the link in the email.";

/// Transient state of one tenant signup form.
#[derive(Debug, Clone)]
pub struct SignupForm {
    input: SignupInput,
    min_password_score: u8,
    show_password: bool,
    submitted: bool,
    busy: bool,
    error: Option<String>,
    success: Option<String>,
}

impl SignupForm {
    pub fn new(min_password_score: u8) -> Self {
        Self {
            input: SignupInput::default(),
            min_password_score,
            show_password: false,
            submitted: false,
            busy: false,
            error: None,
            success: None,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.min_password_score)
    }

    pub fn with_input(mut self, input: SignupInput) -> Self {
        self.input = input;
        self
    }

    pub fn input(&self) -> &SignupInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut SignupInput {
        &mut self.input
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_strength(&self) -> PasswordStrength {
        self.input.password_strength()
    }

    /// Current validation state of the fields.
    pub fn errors(&self) -> ValidationResult<SignupField> {
        self.input.validate(self.min_password_score)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && self.errors().is_valid()
    }

    /// Start a submission: clear banners, validate, and take the busy flag.
    /// Returns the payload to send when the form is valid.
    pub fn begin_submit(&mut self) -> FrontendResult<SignupPayload> {
        if self.busy {
            return Err(FrontendError::SubmissionInFlight);
        }

        self.error = None;
        self.success = None;
        self.submitted = true;

        let errors = self.errors();
        if !errors.is_valid() {
            info!(invalid = errors.len(), "signup blocked by validation");
            return Err(FrontendError::InvalidForm(errors.len()));
        }

        self.busy = true;
        Ok(self.input.to_payload())
    }

    /// Finish a submission with the API outcome and release the busy flag.
    pub fn complete_submit(
        &mut self,
        outcome: FrontendResult<Option<String>>,
    ) -> FrontendResult<String> {
        self.busy = false;

        match outcome {
            Ok(message) => {
                let message = message.unwrap_or_else(|| SIGNUP_SUCCESS_MESSAGE.to_string());
                self.input = SignupInput {
                    tenant_id: self.input.tenant_id.as_ref().map(|_| String::new()),
                    ..SignupInput::default()
                };
                self.submitted = false;
                self.success = Some(message.clone());
                Ok(message)
            }
            Err(e) => {
                warn!("signup failed: {}", e);
                self.error = Some(e.user_message(SIGNUP_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    #[instrument(skip(self, api), name = "form.signup.submit")]
    pub async fn submit<A>(&mut self, api: &A) -> FrontendResult<String>
    where
        A: TenantApi + Sync + ?Sized,
    {
        let payload = self.begin_submit()?;
        let in_flight = InFlight(self);
        let outcome = api.signup(&payload).await;
        in_flight.0.complete_submit(outcome)
    }

    pub fn view(&self) -> FormView<SignupField> {
        let errors = self.errors();
        let mut alerts = Vec::new();

        if let Some(success) = &self.success {
            alerts.push(Alert::new(AlertKind::Success, success.clone()));
        }
        if let Some(error) = &self.error {
            alerts.push(Alert::new(AlertKind::Error, error.clone()));
        }
        if self.submitted && !errors.is_valid() && self.success.is_none() {
            alerts.push(Alert::summary(errors.messages()));
        }

        let disabled = self.busy || !errors.is_valid();

        // Inline markers only appear once the user has tried to submit
        let field_errors = if self.submitted {
            errors
        } else {
            ValidationResult::new()
        };

        let strength_meter = if self.input.password.is_empty() {
            None
        } else {
            Some(StrengthMeter::from(self.password_strength()))
        };

        FormView {
            alerts,
            invalid_fields: field_errors.fields().collect(),
            field_errors,
            strength_meter,
            show_password: self.show_password,
            submit: SubmitButton {
                label: if self.busy { "Sending…" } else { "Create tenant" },
                disabled,
            },
        }
    }
}

impl BusyFlag for SignupForm {
    fn release_busy(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::HttpApiClient;
    use crate::entity::login::LoginPayload;

    use async_trait::async_trait;
    use mockito::Server;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::timeout;

    /// Records every payload and answers with a fixed outcome.
    struct MockTenantApi {
        calls: Mutex<Vec<SignupPayload>>,
        reply: fn() -> FrontendResult<Option<String>>,
    }

    impl MockTenantApi {
        fn new(reply: fn() -> FrontendResult<Option<String>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TenantApi for MockTenantApi {
        async fn signup(&self, payload: &SignupPayload) -> FrontendResult<Option<String>> {
            self.calls.lock().unwrap().push(payload.clone());
            (self.reply)()
        }

        async fn login(&self, _payload: &LoginPayload) -> FrontendResult<Option<String>> {
            panic!("signup form must not call login")
        }
    }

    /// Never answers, like a request still on the wire.
    struct StalledApi;

    #[async_trait]
    impl TenantApi for StalledApi {
        async fn signup(&self, _payload: &SignupPayload) -> FrontendResult<Option<String>> {
            std::future::pending().await
        }

        async fn login(&self, _payload: &LoginPayload) -> FrontendResult<Option<String>> {
            std::future::pending().await
        }
    }

    fn valid_input() -> SignupInput {
        SignupInput {
            tenant_name: "山田商事".to_string(),
            tenant_id: None,
            email: " Admin@Example.com ".to_string(),
            password: "Str0ng!Passw0rd".to_string(),
            password_confirm: "Str0ng!Passw0rd".to_string(),
            agree_to_terms: true,
        }
    }

    fn valid_form() -> SignupForm {
        SignupForm::new(4).with_input(valid_input())
    }

    #[tokio::test]
    async fn test_invalid_form_issues_no_request() {
        let api = MockTenantApi::new(|| Ok(None));
        let mut form = SignupForm::new(4).with_input(SignupInput {
            agree_to_terms: false,
            ..valid_input()
        });

        let result = form.submit(&api).await;

        assert!(matches!(result, Err(FrontendError::InvalidForm(1))));
        assert_eq!(api.call_count(), 0);
        assert!(form.is_submitted());
        assert!(!form.is_busy());

        let view = form.view();
        assert_eq!(view.invalid_fields, vec![SignupField::AgreeToTerms]);
        assert_eq!(
            view.alert(AlertKind::Warning).unwrap().messages,
            vec![SignupField::AgreeToTerms.message().to_string()]
        );
        assert_eq!(
            serde_json::to_value(&view).unwrap()["fieldErrors"],
            serde_json::json!({ "agreeToTerms": SignupField::AgreeToTerms.message() })
        );
    }

    #[tokio::test]
    async fn test_request_issued_iff_validation_is_empty() {
        let inputs = [
            valid_input(),
            SignupInput::default(),
            SignupInput {
                password_confirm: "other".to_string(),
                ..valid_input()
            },
            SignupInput {
                tenant_id: Some("impcode123".to_string()),
                ..valid_input()
            },
            SignupInput {
                email: "admin@example".to_string(),
                ..valid_input()
            },
        ];

        for input in inputs {
            let api = MockTenantApi::new(|| Ok(None));
            let mut form = SignupForm::new(4).with_input(input.clone());
            let expected_valid = form.errors().is_valid();

            let _ = form.submit(&api).await;

            assert_eq!(
                api.call_count() == 1,
                expected_valid,
                "input {:?}",
                input
            );
        }
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let api = MockTenantApi::new(|| Ok(Some("Welcome aboard".to_string())));
        let mut form = valid_form();
        form.toggle_password_visibility();

        let message = form.submit(&api).await.unwrap();

        assert_eq!(message, "Welcome aboard");
        assert_eq!(form.input(), &SignupInput::default());
        assert!(!form.is_submitted());
        assert_eq!(form.success_message(), Some("Welcome aboard"));

        let sent = api.calls.lock().unwrap()[0].clone();
        assert_eq!(sent.email, "admin@example.com");

        let view = form.view();
        assert_eq!(view.alerts, vec![Alert::new(AlertKind::Success, "Welcome aboard")]);
        assert!(view.invalid_fields.is_empty());
        assert!(view.strength_meter.is_none());
        assert!(view.show_password);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let api = MockTenantApi::new(|| Ok(None));
        let mut form = valid_form();

        assert_eq!(form.submit(&api).await.unwrap(), SIGNUP_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_failure_preserves_input() {
        let api = MockTenantApi::new(|| {
            Err(FrontendError::Rejected {
                status: 400,
                message: None,
            })
        });
        let mut form = valid_form();

        assert!(form.submit(&api).await.is_err());
        assert_eq!(form.input(), &valid_input());
        assert_eq!(form.error_message(), Some(SIGNUP_FAILED_MESSAGE));
        assert!(!form.is_busy());
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_network_failure_banner() {
        let api = MockTenantApi::new(|| Err(FrontendError::Network("refused".to_string())));
        let mut form = valid_form();

        let _ = form.submit(&api).await;

        assert_eq!(form.error_message(), Some(crate::errors::NETWORK_FAILED_MESSAGE));
    }

    #[test]
    fn test_busy_flag_blocks_second_submission() {
        let mut form = valid_form();

        assert!(form.begin_submit().is_ok());
        assert!(form.is_busy());
        assert!(!form.can_submit());
        assert!(form.view().submit.disabled);
        assert_eq!(form.view().submit.label, "Sending…");

        assert!(matches!(
            form.begin_submit(),
            Err(FrontendError::SubmissionInFlight)
        ));

        let _ = form.complete_submit(Err(FrontendError::Rejected {
            status: 500,
            message: Some("try later".to_string()),
        }));
        assert!(!form.is_busy());
        assert_eq!(form.error_message(), Some("try later"));

        // Resubmitting clears the old banner
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.error_message(), None);
    }

    #[tokio::test]
    async fn test_cancelled_submit_releases_busy_flag() {
        let mut form = valid_form();

        let result = timeout(Duration::from_millis(20), form.submit(&StalledApi)).await;

        assert!(result.is_err());
        assert!(!form.is_busy());
        assert!(form.can_submit());
        assert_eq!(form.input(), &valid_input());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_view_before_submit_hides_markers() {
        let mut form = SignupForm::new(4);
        form.input_mut().password = "abc".to_string();

        let view = form.view();
        assert!(view.alerts.is_empty());
        assert!(view.invalid_fields.is_empty());
        assert!(view.field_errors.is_empty());
        assert_eq!(
            serde_json::to_value(&view).unwrap()["fieldErrors"],
            serde_json::json!({})
        );
        assert!(view.submit.disabled);
        assert_eq!(view.strength_meter.unwrap().label, "weak");
    }

    #[test]
    fn test_tenant_id_field_survives_reset() {
        let mut form = SignupForm::new(4).with_input(SignupInput {
            tenant_id: Some("impcode123".to_string()),
            ..valid_input()
        });

        form.begin_submit().unwrap();
        form.complete_submit(Ok(None)).unwrap();

        assert_eq!(form.input().tenant_id, Some(String::new()));
    }

    #[tokio::test]
    async fn test_end_to_end_success_over_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/public/tenants/signup")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Check your inbox"}"#)
            .create_async()
            .await;

        let config = FrontendConfig::new(
            &server.url(),
            "/public/tenants/signup",
            "/api/login",
            4,
        );
        let api = HttpApiClient::new(config.clone()).unwrap();
        let mut form = SignupForm::from_config(&config).with_input(valid_input());

        let result = form.submit(&api).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Check your inbox");
        assert_eq!(form.input(), &SignupInput::default());
        assert_eq!(
            form.view().alert(AlertKind::Success).unwrap().messages,
            vec!["Check your inbox".to_string()]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_rejection_over_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/public/tenants/signup")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"This email is already registered"}"#)
            .create_async()
            .await;

        let config = FrontendConfig::new(
            &server.url(),
            "/public/tenants/signup",
            "/api/login",
            4,
        );
        let api = HttpApiClient::new(config.clone()).unwrap();
        let mut form = SignupForm::from_config(&config).with_input(valid_input());

        let result = form.submit(&api).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FrontendError::Rejected { status: 400, .. })
        ));
        assert_eq!(form.input(), &valid_input());
        assert_eq!(
            form.view().alert(AlertKind::Error).unwrap().messages,
            vec!["This email is already registered".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_server() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/public/tenants/signup")
            .expect(0)
            .create_async()
            .await;

        let config = FrontendConfig::new(
            &server.url(),
            "/public/tenants/signup",
            "/api/login",
            4,
        );
        let api = HttpApiClient::new(config.clone()).unwrap();
        let mut form = SignupForm::from_config(&config);

        assert!(form.submit(&api).await.is_err());
        mock.assert_async().await;
    }
}
