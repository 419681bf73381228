use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field error messages. A field without an entry is valid.
///
/// `F` is an ordered field enum, so iteration follows the order the fields
/// appear on the form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationResult<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for ValidationResult<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ValidationResult<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` when `failed` holds.
    pub fn check(&mut self, field: F, failed: bool, message: impl Into<String>) {
        if failed {
            self.errors.insert(field, message.into());
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_error(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    /// Messages in form order, for the error summary.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        First,
        Second,
    }

    #[test]
    fn test_check_records_only_failures() {
        let mut result = ValidationResult::new();
        result.check(Field::Second, true, "second is wrong");
        result.check(Field::First, false, "first is wrong");

        assert!(!result.is_valid());
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(Field::Second), Some("second is wrong"));
        assert_eq!(result.get(Field::First), None);
    }

    #[test]
    fn test_messages_follow_field_order() {
        let mut result = ValidationResult::new();
        result.check(Field::Second, true, "b");
        result.check(Field::First, true, "a");

        assert_eq!(result.messages(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::First, Field::Second]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result: ValidationResult<Field> = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.is_empty());
        assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
    }
}
