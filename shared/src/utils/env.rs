use std::str::FromStr;

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn get_env(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Read and parse an environment variable, falling back to `default` when
/// unset or unparseable.
pub fn get_env_parsed<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}
