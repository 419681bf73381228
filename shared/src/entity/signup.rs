use crate::entity::strength::PasswordStrength;
use crate::entity::validation::ValidationResult;
use crate::utils::password::score_password;
use crate::utils::regex::{is_alphanumeric_id, is_valid_email, normalize_email};

use serde::{Deserialize, Serialize};

pub const TENANT_NAME_MIN_CHARS: usize = 2;
pub const TENANT_NAME_MAX_CHARS: usize = 80;

/// Signup form fields, in the order they appear on the page.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    TenantName,
    TenantId,
    Email,
    Password,
    PasswordConfirm,
    AgreeToTerms,
}

impl SignupField {
    pub fn message(&self) -> &'static str {
        match self {
            SignupField::TenantName => "Company name must be between 2 and 80 characters",
            SignupField::TenantId => "Tenant ID may only contain letters and numbers",
            SignupField::Email => "Please provide a valid email address",
            SignupField::Password => {
                "Password must be at least 12 characters and include uppercase, lowercase, numbers and symbols"
            }
            SignupField::PasswordConfirm => "Password confirmation does not match",
            SignupField::AgreeToTerms => "Please agree to the terms of service",
        }
    }
}

/// Raw values as typed into the signup form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupInput {
    pub tenant_name: String,
    pub tenant_id: Option<String>,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub agree_to_terms: bool,
}

/// JSON body sent to the signup endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupPayload {
    pub tenant_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tenant_id: Option<String>,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

impl SignupInput {
    pub fn password_strength(&self) -> PasswordStrength {
        score_password(&self.password)
    }

    /// Run every check and collect all failures; nothing short-circuits.
    pub fn validate(&self, min_password_score: u8) -> ValidationResult<SignupField> {
        let mut result = ValidationResult::new();

        let name_len = self.tenant_name.trim().chars().count();
        result.check(
            SignupField::TenantName,
            !(TENANT_NAME_MIN_CHARS..=TENANT_NAME_MAX_CHARS).contains(&name_len),
            SignupField::TenantName.message(),
        );

        if let Some(tenant_id) = &self.tenant_id {
            result.check(
                SignupField::TenantId,
                !is_alphanumeric_id(tenant_id.trim()),
                SignupField::TenantId.message(),
            );
        }

        result.check(
            SignupField::Email,
            !is_valid_email(&self.email),
            SignupField::Email.message(),
        );

        result.check(
            SignupField::PasswordConfirm,
            self.password != self.password_confirm,
            SignupField::PasswordConfirm.message(),
        );

        result.check(
            SignupField::Password,
            !self.password_strength().meets(min_password_score),
            SignupField::Password.message(),
        );

        result.check(
            SignupField::AgreeToTerms,
            !self.agree_to_terms,
            SignupField::AgreeToTerms.message(),
        );

        result
    }

    /// Normalized request body. The password is sent as typed.
    pub fn to_payload(&self) -> SignupPayload {
        SignupPayload {
            tenant_name: self.tenant_name.trim().to_string(),
            tenant_id: self.tenant_id.as_deref().map(|id| id.trim().to_string()),
            email: normalize_email(&self.email),
            password: self.password.clone(),
            agree_terms: self.agree_to_terms,
        }
    }
}
