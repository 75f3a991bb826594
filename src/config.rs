// ============================================================================
// Formatter Configuration
// Unit labels and sign handling for currency phrases
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Amount Policy
// ============================================================================

/// How a negative decimal amount is split into rupees and paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativeAmountPolicy {
    /// Floor the raw amount, then take paise from what is left.
    /// - -1.50 floors to -2 rupees with 50 paise left over
    /// - The negative rupee part is never spelled, so this gives "fifty paise"
    /// - Compatible with the historical output
    #[default]
    Floor,

    /// Split the absolute value and put "negative" in front.
    /// - -1.50 gives "negative one rupee and fifty paise"
    /// - Matches how `to_words` treats negative integers
    SignPrefixed,
}

// ============================================================================
// Formatter Configuration
// ============================================================================

/// Labels and policies used by [`CurrencyFormatter`](crate::currency::CurrencyFormatter).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatterConfig {
    /// Major unit label, singular ("rupee")
    pub rupee_unit: String,

    /// Minor unit label ("paise"). Never pluralized.
    pub paise_unit: String,

    /// Appended to the major unit when the count is above one ("s")
    pub plural_suffix: String,

    /// Word between the rupee and paise parts ("and")
    pub conjunction: String,

    /// Splitting rule for negative amounts
    pub negative_amounts: NegativeAmountPolicy,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::new("rupee".to_string(), "paise".to_string())
    }
}

impl FormatterConfig {
    /// Create a configuration with the given unit labels and default
    /// suffix, conjunction and sign handling.
    pub fn new(rupee_unit: String, paise_unit: String) -> Self {
        Self {
            rupee_unit,
            paise_unit,
            plural_suffix: "s".to_string(),
            conjunction: "and".to_string(),
            negative_amounts: NegativeAmountPolicy::default(),
        }
    }

    /// Builder method: Set the plural suffix of the major unit
    pub fn with_plural_suffix(mut self, suffix: String) -> Self {
        self.plural_suffix = suffix;
        self
    }

    /// Builder method: Set the conjunction between rupees and paise
    pub fn with_conjunction(mut self, conjunction: String) -> Self {
        self.conjunction = conjunction;
        self
    }

    /// Builder method: Set the negative amount policy
    pub fn with_negative_amounts(mut self, policy: NegativeAmountPolicy) -> Self {
        self.negative_amounts = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        check_label("Rupee unit", &self.rupee_unit)?;
        check_label("Paise unit", &self.paise_unit)?;
        check_label("Conjunction", &self.conjunction)?;

        // The suffix is glued to the unit, so it may be empty but not padded
        if self.plural_suffix.trim() != self.plural_suffix {
            return Err("Plural suffix cannot contain surrounding whitespace".to_string());
        }

        Ok(())
    }
}

fn check_label(name: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} cannot be empty", name));
    }
    if value.trim() != value {
        return Err(format!("{} cannot contain surrounding whitespace", name));
    }
    Ok(())
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FormatterConfig {
    /// Historical behavior: rupee/paise labels, floored negative amounts
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Rupee/paise labels with negative amounts spelled like negative integers
    pub fn signed() -> Self {
        Self::default().with_negative_amounts(NegativeAmountPolicy::SignPrefixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.rupee_unit, "rupee");
        assert_eq!(config.paise_unit, "paise");
        assert_eq!(config.plural_suffix, "s");
        assert_eq!(config.conjunction, "and");
        assert_eq!(config.negative_amounts, NegativeAmountPolicy::Floor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FormatterConfig::new("taka".to_string(), "poisha".to_string())
            .with_plural_suffix(String::new())
            .with_conjunction("plus".to_string())
            .with_negative_amounts(NegativeAmountPolicy::SignPrefixed);

        assert_eq!(config.rupee_unit, "taka");
        assert_eq!(config.plural_suffix, "");
        assert_eq!(config.conjunction, "plus");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty = FormatterConfig::new(String::new(), "paise".to_string());
        assert_eq!(
            empty.validate(),
            Err("Rupee unit cannot be empty".to_string())
        );

        let padded = FormatterConfig::default().with_conjunction(" and ".to_string());
        assert_eq!(
            padded.validate(),
            Err("Conjunction cannot contain surrounding whitespace".to_string())
        );

        let suffix = FormatterConfig::default().with_plural_suffix("s ".to_string());
        assert!(suffix.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(FormatterConfig::legacy(), FormatterConfig::default());
        assert_eq!(
            FormatterConfig::signed().negative_amounts,
            NegativeAmountPolicy::SignPrefixed
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = FormatterConfig::signed();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormatterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
