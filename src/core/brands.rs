use log::debug;

/// Ceiling applied to every discount by the base validation step
pub const MAX_DISCOUNT_PERCENT: f64 = 30.0;
/// Extra discount granted on every Wacom tablet
pub const WACOM_BONUS_PERCENT: f64 = 5.0;
/// XP-Pen's own ceiling, checked before the base one
pub const XP_PEN_MAX_DISCOUNT_PERCENT: f64 = 25.0;

/// Lower `discount` to `max` if it exceeds it
pub fn clamp_discount(discount: &mut f64, max: f64) {
    if *discount > max {
        debug!("clamping discount {} to {}", discount, max);
        *discount = max;
    }
}

/// Base validation step: no discount may exceed `MAX_DISCOUNT_PERCENT`
pub fn base_validate_discount(discount: &mut f64) {
    clamp_discount(discount, MAX_DISCOUNT_PERCENT);
}

/// Brand-specific behavior of a tablet
///
/// Each brand names itself, contributes one extra info line and may
/// customize the two discount steps. The bonus step always runs before
/// validation.
pub trait Brand {
    /// Fixed brand name
    fn name(&self) -> &'static str;

    /// The single brand-specific line appended to the tablet info
    fn extra_info(&self) -> String;

    /// Adjust the discount for the brand. Returns a note to print when the
    /// brand actually changed it.
    fn apply_brand_specific_discount(&self, _discount: &mut f64) -> Option<String> {
        None
    }

    /// Restrict the discount to what the brand allows
    fn validate_discount(&self, discount: &mut f64) {
        base_validate_discount(discount);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Wacom: adds a brand bonus to every discount
#[derive(Debug, Clone, PartialEq)]
pub struct Wacom {
    pub touch_screen: bool,
}

impl Wacom {
    pub fn new(touch_screen: bool) -> Self {
        Self { touch_screen }
    }
}

impl Brand for Wacom {
    fn name(&self) -> &'static str {
        "Wacom"
    }

    fn extra_info(&self) -> String {
        format!("Touch screen: {}", yes_no(self.touch_screen))
    }

    fn apply_brand_specific_discount(&self, discount: &mut f64) -> Option<String> {
        *discount += WACOM_BONUS_PERCENT;
        debug!("[Wacom] bonus raised discount to {}", discount);
        Some("Applying Wacom brand bonus: +5% discount".to_string())
    }
}

/// XP-Pen: caps discounts lower than the base rule
#[derive(Debug, Clone, PartialEq)]
pub struct XpPen {
    pub shortcut_keys: u32,
}

impl XpPen {
    pub fn new(shortcut_keys: u32) -> Self {
        Self { shortcut_keys }
    }
}

impl Brand for XpPen {
    fn name(&self) -> &'static str {
        "XP-Pen"
    }

    fn extra_info(&self) -> String {
        format!("Shortcut Keys: {}", self.shortcut_keys)
    }

    fn validate_discount(&self, discount: &mut f64) {
        debug!("[XP-Pen] brand ceiling {}", XP_PEN_MAX_DISCOUNT_PERCENT);
        clamp_discount(discount, XP_PEN_MAX_DISCOUNT_PERCENT);
        base_validate_discount(discount);
    }
}

/// Gaomon: uses the base discount rules unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct Gaomon {
    pub no_battery_pen: bool,
}

impl Gaomon {
    pub fn new(no_battery_pen: bool) -> Self {
        Self { no_battery_pen }
    }
}

impl Brand for Gaomon {
    fn name(&self) -> &'static str {
        "Gaomon"
    }

    fn extra_info(&self) -> String {
        format!("No Battery in pen: {}", yes_no(self.no_battery_pen))
    }
}
