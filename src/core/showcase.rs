use super::catalog::TabletCatalog;
use super::config::ShowcaseConfig;
use super::errors::ShowcaseError;
use super::tablet::DiscountQuote;
use log::info;
use std::io::Write;

pub const DISCOUNT_HEADER: &str = "<=== Discount Calculation ===>";
pub const COMPATIBILITY_HEADER: &str = "<=== Compatibility Check Demo ===>";
pub const STRATEGY_SWAP_HEADER: &str = "<=== Changing Strategy at Runtime ===>";

/// What a showcase run did
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseSummary {
    /// Model name and quote for every tablet, in catalog order
    pub quotes: Vec<(String, DiscountQuote)>,
    pub compatibility_checks: usize,
    /// Model whose strategy was switched
    pub swapped_model: String,
}

/// Drives the demo over a catalog
///
/// Runs three phases in order: discounts, compatibility checks, and a
/// strategy switch on one tablet followed by a fresh check.
pub struct Showcase {
    config: ShowcaseConfig,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Result<Self, ShowcaseError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Run all three phases against `catalog`, writing the transcript to `out`
    pub fn run(
        &self,
        catalog: &mut TabletCatalog,
        out: &mut dyn Write,
    ) -> Result<ShowcaseSummary, ShowcaseError> {
        info!("showcase: {} tablets", catalog.len());

        let quotes = self.run_discount_phase(catalog, out)?;
        writeln!(out)?;
        let compatibility_checks = self.run_compatibility_phase(catalog, out)?;
        writeln!(out)?;
        let swapped_model = self.run_strategy_swap_phase(catalog, out)?;

        Ok(ShowcaseSummary {
            quotes,
            compatibility_checks,
            swapped_model,
        })
    }

    /// Show every tablet's info followed by its discount computation
    pub fn run_discount_phase(
        &self,
        catalog: &TabletCatalog,
        out: &mut dyn Write,
    ) -> Result<Vec<(String, DiscountQuote)>, ShowcaseError> {
        writeln!(out, "{}", DISCOUNT_HEADER)?;
        let mut quotes = Vec::with_capacity(catalog.len());
        for tablet in catalog.iter() {
            tablet.display_info(out)?;
            let quote = tablet.calculate_discount(self.config.discount_percent, out)?;
            writeln!(out, "{}", self.config.separator)?;
            quotes.push((tablet.model().to_string(), quote));
        }
        Ok(quotes)
    }

    /// Check every tablet against the configured device
    pub fn run_compatibility_phase(
        &self,
        catalog: &TabletCatalog,
        out: &mut dyn Write,
    ) -> Result<usize, ShowcaseError> {
        writeln!(out, "{}", COMPATIBILITY_HEADER)?;
        let mut checks = 0;
        for tablet in catalog.iter() {
            tablet.check_compatibility(&self.config.check_device, out)?;
            writeln!(out, "{}", self.config.separator)?;
            checks += 1;
        }
        Ok(checks)
    }

    /// Switch one tablet's strategy and check it again
    pub fn run_strategy_swap_phase(
        &self,
        catalog: &mut TabletCatalog,
        out: &mut dyn Write,
    ) -> Result<String, ShowcaseError> {
        writeln!(out, "{}", STRATEGY_SWAP_HEADER)?;
        let tablet = catalog.get_mut(self.config.swap_index)?;
        tablet.set_compatibility_strategy(self.config.swap_strategy.into_strategy());
        tablet.check_compatibility(&self.config.swap_device, out)?;
        Ok(tablet.model().to_string())
    }
}
