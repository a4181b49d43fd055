//! Configuration for a showcase run
//!
//! The defaults reproduce the standard demo: a 15% discount, a "PC"
//! compatibility pass and a switch of the first tablet to the advanced
//! strategy before checking it against "Mac".

use super::compatibility::CompatibilityKind;
use super::errors::ShowcaseError;

pub const DEFAULT_SEPARATOR: &str = "--------------------------------------";

#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Discount requested for every tablet in the discount phase
    pub discount_percent: f64,
    /// Device checked for every tablet in the compatibility phase
    pub check_device: String,
    /// Device checked after the strategy switch
    pub swap_device: String,
    /// Catalog position of the tablet whose strategy is switched
    pub swap_index: usize,
    /// Strategy installed by the switch
    pub swap_strategy: CompatibilityKind,
    /// Line printed after each tablet
    pub separator: String,
}

impl ShowcaseConfig {
    pub fn new() -> Self {
        Self {
            discount_percent: 15.0,
            check_device: "PC".to_string(),
            swap_device: "Mac".to_string(),
            swap_index: 0,
            swap_strategy: CompatibilityKind::Advanced,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_discount(mut self, discount_percent: f64) -> Self {
        self.discount_percent = discount_percent;
        self
    }

    pub fn with_check_device(mut self, device: &str) -> Self {
        self.check_device = device.to_string();
        self
    }

    /// Set which tablet is switched, to what strategy, and the device checked afterwards
    pub fn with_swap(mut self, index: usize, strategy: CompatibilityKind, device: &str) -> Self {
        self.swap_index = index;
        self.swap_strategy = strategy;
        self.swap_device = device.to_string();
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Reject settings the showcase cannot run with
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if !self.discount_percent.is_finite() || self.discount_percent < 0.0 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "discount must be a non-negative number, got {}",
                self.discount_percent
            )));
        }
        if self.separator.is_empty() {
            return Err(ShowcaseError::InvalidConfig("separator must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self::new()
    }
}
