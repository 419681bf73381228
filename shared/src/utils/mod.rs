pub mod env;
pub mod password;
pub mod regex;
