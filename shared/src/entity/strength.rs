use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Password properties that each add one point to the strength score.
    #[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
    pub struct PasswordCriteria: u8 {
        const MIN_LENGTH = 0b0_0001;
        const UPPERCASE  = 0b0_0010;
        const LOWERCASE  = 0b0_0100;
        const DIGIT      = 0b0_1000;
        const SYMBOL     = 0b1_0000;
    }
}

impl std::fmt::Display for PasswordCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Strength score in `0..=5`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    pub const MAX: u8 = 5;

    const LABELS: [&'static str; 6] = [
        "very weak",
        "weak",
        "fair",
        "good",
        "strong",
        "very strong",
    ];

    pub fn from_criteria(criteria: PasswordCriteria) -> Self {
        // Five flags, so the popcount never exceeds MAX
        Self(criteria.bits().count_ones() as u8)
    }

    pub fn score(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        Self::LABELS[usize::from(self.0.min(Self::MAX))]
    }

    /// Width of the strength meter, 0 to 100.
    pub fn percent(&self) -> u8 {
        (u16::from(self.0.min(Self::MAX)) * 100 / u16::from(Self::MAX)) as u8
    }

    pub fn meets(&self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/{})", self.label(), self.0, Self::MAX)
    }
}
