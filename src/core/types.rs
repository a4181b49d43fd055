/// Number of significant digits used when rendering prices and percentages.
pub const SIGNIFICANT_DIGITS: i32 = 6;

/// Attributes shared by every graphic tablet regardless of brand
#[derive(Debug, Clone, PartialEq)]
pub struct TabletSpecs {
    pub(crate) model: String,
    pub(crate) price: f64,
    pub(crate) active_area: String,
    pub(crate) pressure_levels: u32,
}

impl TabletSpecs {
    /// Create a new set of tablet specs
    pub fn new(model: &str, price: f64, active_area: &str, pressure_levels: u32) -> Self {
        Self {
            model: model.to_string(),
            price,
            active_area: active_area.to_string(),
            pressure_levels,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn active_area(&self) -> &str {
        &self.active_area
    }

    pub fn pressure_levels(&self) -> u32 {
        self.pressure_levels
    }
}

/// Render a number with at most six significant digits, dropping trailing zeros.
///
/// This matches the default formatting of a plain text stream, so `150.99 * 0.8`
/// renders as `120.792` rather than exposing floating point noise. Values of a
/// million or more are rendered in full instead of switching to exponent form.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let rendered = format!("{:.*}", decimals, value);

    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}
