pub mod login;
pub mod signup;
pub mod strength;
pub mod validation;
