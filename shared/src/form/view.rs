use crate::entity::strength::PasswordStrength;
use crate::entity::validation::ValidationResult;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A banner. Validation summaries carry one message per invalid field.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub messages: Vec<String>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            messages: vec![message.into()],
        }
    }

    pub fn summary(messages: Vec<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            messages,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    pub score: u8,
    pub label: &'static str,
    pub percent: u8,
}

impl From<PasswordStrength> for StrengthMeter {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            score: strength.score(),
            label: strength.label(),
            percent: strength.percent(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Snapshot of everything a form page renders.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormView<F: Ord> {
    pub alerts: Vec<Alert>,
    /// Fields to mark invalid; empty until the first submit attempt
    pub invalid_fields: Vec<F>,
    /// Inline message per invalid field, keyed like `invalid_fields`
    pub field_errors: ValidationResult<F>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_meter: Option<StrengthMeter>,
    pub show_password: bool,
    pub submit: SubmitButton,
}

impl<F: Ord> FormView<F> {
    pub fn alert(&self, kind: AlertKind) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.kind == kind)
    }
}
