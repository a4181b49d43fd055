use super::brands::Brand;
use super::compatibility::CompatibilityStrategy;
use super::errors::ShowcaseError;
use super::types::{format_amount, TabletSpecs};
use log::{debug, info};
use std::io::Write;

/// Outcome of one discount calculation
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountQuote {
    pub base_price: f64,
    pub requested_discount: f64,
    pub applied_discount: f64,
    pub final_price: f64,
    /// Lines announced by the brand while adjusting the discount
    pub notes: Vec<String>,
}

/// A graphic tablet product
///
/// The tablet exclusively owns its brand behavior and its compatibility
/// strategy. The strategy can be replaced at any time, which drops the
/// previous one.
pub struct GraphicTablet {
    specs: TabletSpecs,
    brand: Box<dyn Brand>,
    compatibility: Box<dyn CompatibilityStrategy>,
}

impl GraphicTablet {
    pub fn new(
        specs: TabletSpecs,
        brand: Box<dyn Brand>,
        compatibility: Box<dyn CompatibilityStrategy>,
    ) -> Self {
        Self {
            specs,
            brand,
            compatibility,
        }
    }

    pub fn specs(&self) -> &TabletSpecs {
        &self.specs
    }

    pub fn model(&self) -> &str {
        self.specs.model()
    }

    pub fn brand_name(&self) -> &'static str {
        self.brand.name()
    }

    /// Name of the compatibility strategy currently held
    pub fn compatibility_name(&self) -> &'static str {
        self.compatibility.name()
    }

    /// Run the discount steps without producing output
    ///
    /// The order is fixed: brand bonus, then validation, then pricing.
    pub fn quote_discount(&self, discount_percent: f64) -> DiscountQuote {
        let mut final_discount = discount_percent;
        let mut notes = Vec::new();

        if let Some(note) = self.brand.apply_brand_specific_discount(&mut final_discount) {
            notes.push(note);
        }
        self.brand.validate_discount(&mut final_discount);

        let final_price = self.specs.price * (1.0 - final_discount / 100.0);
        debug!(
            "[{}] requested {}%, applied {}%, final price {}",
            self.specs.model, discount_percent, final_discount, final_price
        );

        DiscountQuote {
            base_price: self.specs.price,
            requested_discount: discount_percent,
            applied_discount: final_discount,
            final_price,
            notes,
        }
    }

    /// Calculate the discounted price and print the computation
    pub fn calculate_discount(
        &self,
        discount_percent: f64,
        out: &mut dyn Write,
    ) -> Result<DiscountQuote, ShowcaseError> {
        writeln!(out, "Calculating discount for {}:", self.specs.model)?;
        let quote = self.quote_discount(discount_percent);
        for note in &quote.notes {
            writeln!(out, "{}", note)?;
        }
        writeln!(out, "Base price: ${}", format_amount(quote.base_price))?;
        writeln!(out, "Applied discount: {}%", format_amount(quote.applied_discount))?;
        writeln!(out, "Final price: ${}", format_amount(quote.final_price))?;
        Ok(quote)
    }

    /// Delegate the compatibility check to the held strategy
    pub fn check_compatibility(&self, device: &str, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        self.compatibility
            .check_compatibility(device, self.brand.name(), out)
    }

    /// Base info lines followed by the brand's extra line
    pub fn info_lines(&self) -> Vec<String> {
        vec![
            format!("Model: {}", self.specs.model),
            format!("Brand: {}", self.brand.name()),
            format!("Price: ${}", format_amount(self.specs.price)),
            format!("Active Area: {}", self.specs.active_area),
            format!("Pressure Levels: {}", self.specs.pressure_levels),
            self.brand.extra_info(),
        ]
    }

    pub fn display_info(&self, out: &mut dyn Write) -> Result<(), ShowcaseError> {
        for line in self.info_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Replace the compatibility strategy, dropping the previous one
    pub fn set_compatibility_strategy(&mut self, strategy: Box<dyn CompatibilityStrategy>) {
        info!(
            "[{}] compatibility strategy {} -> {}",
            self.specs.model,
            self.compatibility.name(),
            strategy.name()
        );
        self.compatibility = strategy;
    }
}

impl std::fmt::Debug for GraphicTablet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicTablet")
            .field("specs", &self.specs)
            .field("brand", &self.brand.name())
            .field("compatibility", &self.compatibility.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::brands::{Gaomon, Wacom, XpPen};
    use crate::core::compatibility::{AdvancedCompatibility, DefaultCompatibility};

    fn wacom() -> GraphicTablet {
        GraphicTablet::new(
            TabletSpecs::new("Wacom Intuos M", 150.99, "257mm", 4096),
            Box::new(Wacom::new(true)),
            Box::new(DefaultCompatibility),
        )
    }

    fn xp_pen() -> GraphicTablet {
        GraphicTablet::new(
            TabletSpecs::new("XP-Pen Deco 01 V2", 60.12, "302mm", 8192),
            Box::new(XpPen::new(8)),
            Box::new(AdvancedCompatibility),
        )
    }

    fn gaomon() -> GraphicTablet {
        GraphicTablet::new(
            TabletSpecs::new("GAOMON M10K Pro", 47.40, "247mm", 8192),
            Box::new(Gaomon::new(true)),
            Box::new(DefaultCompatibility),
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<(), ShowcaseError>,
    {
        let mut out: Vec<u8> = Vec::new();
        let sink: &mut dyn Write = &mut out;
        f(sink).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wacom_discount_gets_bonus() {
        let quote = wacom().quote_discount(15.0);
        assert_eq!(quote.applied_discount, 20.0);
        assert!(approx(quote.final_price, 120.792));
        assert_eq!(quote.notes.len(), 1);
    }

    #[test]
    fn test_xp_pen_discount_within_ceiling() {
        let quote = xp_pen().quote_discount(15.0);
        assert_eq!(quote.applied_discount, 15.0);
        assert!(approx(quote.final_price, 51.102));
        assert!(quote.notes.is_empty());
    }

    #[test]
    fn test_gaomon_discount_unchanged() {
        let quote = gaomon().quote_discount(15.0);
        assert_eq!(quote.applied_discount, 15.0);
        assert!(approx(quote.final_price, 40.29));
    }

    #[test]
    fn test_discount_clamped_to_thirty() {
        assert_eq!(gaomon().quote_discount(50.0).applied_discount, 30.0);
        // 28 + 5 bonus exceeds the ceiling
        assert_eq!(wacom().quote_discount(28.0).applied_discount, 30.0);
    }

    #[test]
    fn test_xp_pen_never_exceeds_twenty_five() {
        for input in [25.5, 27.0, 30.0, 99.0] {
            assert_eq!(xp_pen().quote_discount(input).applied_discount, 25.0);
        }
    }

    #[test]
    fn test_calculate_discount_output() {
        let tablet = wacom();
        let text = render(|out| tablet.calculate_discount(15.0, out).map(|_| ()));
        assert_eq!(
            text,
            "Calculating discount for Wacom Intuos M:\n\
             Applying Wacom brand bonus: +5% discount\n\
             Base price: $150.99\n\
             Applied discount: 20%\n\
             Final price: $120.792\n"
        );
    }

    #[test]
    fn test_display_info_order() {
        let tablet = gaomon();
        let text = render(|out| tablet.display_info(out));
        assert_eq!(
            text,
            "Model: GAOMON M10K Pro\n\
             Brand: Gaomon\n\
             Price: $47.4\n\
             Active Area: 247mm\n\
             Pressure Levels: 8192\n\
             No Battery in pen: Yes\n"
        );
    }

    #[test]
    fn test_display_info_is_idempotent() {
        let tablet = xp_pen();
        let first = render(|out| tablet.display_info(out));
        let second = render(|out| tablet.display_info(out));
        assert_eq!(first, second);
        assert_eq!(tablet.info_lines().len(), 6);
    }

    #[test]
    fn test_check_compatibility_passes_brand() {
        let tablet = xp_pen();
        let text = render(|out| tablet.check_compatibility("PC", out));
        assert_eq!(
            text,
            "Performing advanced compatibility check for PC...\n\
             XP-Pen tablets have enhanced compatibility with PC.\n"
        );
    }

    #[test]
    fn test_strategy_replacement_is_immediate() {
        let mut tablet = wacom();
        assert_eq!(tablet.compatibility_name(), "default");

        tablet.set_compatibility_strategy(Box::new(AdvancedCompatibility));
        assert_eq!(tablet.compatibility_name(), "advanced");

        let text = render(|out| tablet.check_compatibility("Mac", out));
        assert_eq!(
            text,
            "Performing advanced compatibility check for Mac...\n\
             Wacom tablets have enhanced compatibility with Mac.\n"
        );
    }
}
