use crate::entity::strength::{PasswordCriteria, PasswordStrength};

/// Length at which a password earns the length point.
pub const STRONG_PASSWORD_LENGTH: usize = 12;

/// Which of the five strength criteria `password` satisfies.
pub fn evaluate_criteria(password: &str) -> PasswordCriteria {
    let mut criteria = PasswordCriteria::empty();

    if password.chars().count() >= STRONG_PASSWORD_LENGTH {
        criteria |= PasswordCriteria::MIN_LENGTH;
    }
    for c in password.chars() {
        let flag = match c {
            'A'..='Z' => PasswordCriteria::UPPERCASE,
            'a'..='z' => PasswordCriteria::LOWERCASE,
            '0'..='9' => PasswordCriteria::DIGIT,
            _ => PasswordCriteria::SYMBOL,
        };
        criteria |= flag;
    }

    criteria
}

/// Score a password from 0 to 5. Total: every input has a score.
pub fn score_password(password: &str) -> PasswordStrength {
    PasswordStrength::from_criteria(evaluate_criteria(password))
}
