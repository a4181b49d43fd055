use super::errors::ShowcaseError;
use log::debug;
use std::io::Write;

/// Interchangeable compatibility check owned by a single tablet
///
/// A strategy carries no state: it only decides how the compatibility
/// message for a device and a brand is worded.
pub trait CompatibilityStrategy {
    /// Short strategy name used for logging and inspection
    fn name(&self) -> &'static str;

    /// Produce the message lines for `device` on a tablet of `brand`
    fn report(&self, device: &str, brand: &str) -> Vec<String>;

    /// Write the compatibility message to `out`
    fn check_compatibility(
        &self,
        device: &str,
        brand: &str,
        out: &mut dyn Write,
    ) -> Result<(), ShowcaseError> {
        debug!("[{}] checking {} against {}", self.name(), brand, device);
        for line in self.report(device, brand) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Plain compatibility check
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompatibility;

impl CompatibilityStrategy for DefaultCompatibility {
    fn name(&self) -> &'static str {
        "default"
    }

    fn report(&self, device: &str, brand: &str) -> Vec<String> {
        vec![
            format!("Checking compatibility with {}...", device),
            format!("{} tablets are compatible with {}.", brand, device),
        ]
    }
}

/// Advanced compatibility check with the "enhanced" wording
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedCompatibility;

impl CompatibilityStrategy for AdvancedCompatibility {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn report(&self, device: &str, brand: &str) -> Vec<String> {
        vec![
            format!("Performing advanced compatibility check for {}...", device),
            format!("{} tablets have enhanced compatibility with {}.", brand, device),
        ]
    }
}

/// Selector for the available compatibility strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityKind {
    Default,
    Advanced,
}

impl Default for CompatibilityKind {
    fn default() -> Self {
        CompatibilityKind::Default
    }
}

impl CompatibilityKind {
    /// Create a fresh, exclusively owned strategy of this kind
    pub fn into_strategy(self) -> Box<dyn CompatibilityStrategy> {
        match self {
            CompatibilityKind::Default => Box::new(DefaultCompatibility),
            CompatibilityKind::Advanced => Box::new(AdvancedCompatibility),
        }
    }
}
