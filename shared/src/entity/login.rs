use crate::entity::validation::ValidationResult;
use crate::utils::regex::{is_alphanumeric_id, is_valid_email, normalize_email};

use serde::{Deserialize, Serialize};

pub const LOGIN_PASSWORD_MIN_CHARS: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LoginField {
    TenantId,
    Email,
    Password,
}

impl LoginField {
    pub fn message(&self) -> &'static str {
        match self {
            LoginField::TenantId => "Tenant ID is required and may only contain letters and numbers",
            LoginField::Email => "Please provide a valid email address",
            LoginField::Password => "Password must be at least 8 characters",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginInput {
    pub tenant_id: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    pub tenant_id: String,
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> ValidationResult<LoginField> {
        let mut result = ValidationResult::new();

        let tenant_id = self.tenant_id.trim();
        result.check(
            LoginField::TenantId,
            tenant_id.is_empty() || !is_alphanumeric_id(tenant_id),
            LoginField::TenantId.message(),
        );

        result.check(
            LoginField::Email,
            !is_valid_email(&self.email),
            LoginField::Email.message(),
        );

        result.check(
            LoginField::Password,
            self.password.chars().count() < LOGIN_PASSWORD_MIN_CHARS,
            LoginField::Password.message(),
        );

        result
    }

    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload {
            tenant_id: self.tenant_id.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password.clone(),
        }
    }
}
