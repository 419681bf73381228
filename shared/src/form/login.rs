use crate::api::TenantApi;
use crate::entity::login::{LoginField, LoginInput, LoginPayload};
use crate::entity::validation::ValidationResult;
use crate::errors::{FrontendError, FrontendResult, LOGIN_FAILED_MESSAGE};
use crate::form::{BusyFlag, InFlight};
use crate::form::view::{Alert, AlertKind, FormView, SubmitButton};

use tracing::{info, instrument, warn};

pub const LOGIN_PROMPT_MESSAGE: &str = "Enter your tenant ID, email address and password.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in.";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    input: LoginInput,
    show_password: bool,
    submitted: bool,
    busy: bool,
    error: Option<String>,
    success: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: LoginInput) -> Self {
        self.input = input;
        self
    }

    pub fn input(&self) -> &LoginInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LoginInput {
        &mut self.input
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn errors(&self) -> ValidationResult<LoginField> {
        self.input.validate()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn begin_submit(&mut self) -> FrontendResult<LoginPayload> {
        if self.busy {
            return Err(FrontendError::SubmissionInFlight);
        }

        self.error = None;
        self.success = None;
        self.submitted = true;

        let errors = self.errors();
        if !errors.is_valid() {
            info!(invalid = errors.len(), "login blocked by validation");
            return Err(FrontendError::InvalidForm(errors.len()));
        }

        self.busy = true;
        Ok(self.input.to_payload())
    }

    /// On success only the password is cleared; tenant and email stay filled.
    pub fn complete_submit(
        &mut self,
        outcome: FrontendResult<Option<String>>,
    ) -> FrontendResult<String> {
        self.busy = false;

        match outcome {
            Ok(message) => {
                let message = message.unwrap_or_else(|| LOGIN_SUCCESS_MESSAGE.to_string());
                self.input.password.clear();
                self.submitted = false;
                self.success = Some(message.clone());
                Ok(message)
            }
            Err(e) => {
                warn!("login failed: {}", e);
                self.error = Some(e.user_message(LOGIN_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    #[instrument(skip(self, api), name = "form.login.submit")]
    pub async fn submit<A>(&mut self, api: &A) -> FrontendResult<String>
    where
        A: TenantApi + Sync + ?Sized,
    {
        let payload = self.begin_submit()?;
        let in_flight = InFlight(self);
        let outcome = api.login(&payload).await;
        in_flight.0.complete_submit(outcome)
    }

    pub fn view(&self) -> FormView<LoginField> {
        let errors = self.errors();
        let mut alerts = Vec::new();

        if let Some(success) = &self.success {
            alerts.push(Alert::new(AlertKind::Success, success.clone()));
        }
        if let Some(error) = &self.error {
            alerts.push(Alert::new(AlertKind::Error, error.clone()));
        }
        if self.submitted && !errors.is_valid() {
            alerts.push(Alert::summary(errors.messages()));
        }
        if alerts.is_empty() {
            alerts.push(Alert::new(AlertKind::Info, LOGIN_PROMPT_MESSAGE));
        }

        let field_errors = if self.submitted {
            errors
        } else {
            ValidationResult::new()
        };

        FormView {
            alerts,
            invalid_fields: field_errors.fields().collect(),
            field_errors,
            strength_meter: None,
            show_password: self.show_password,
            submit: SubmitButton {
                label: if self.busy { "Signing in…" } else { "Log in" },
                disabled: self.busy,
            },
        }
    }
}

impl BusyFlag for LoginForm {
    fn release_busy(&mut self) {
        self.busy = false;
    }
}
