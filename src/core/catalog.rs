use super::brands::{Brand, Gaomon, Wacom, XpPen};
use super::compatibility::CompatibilityKind;
use super::errors::ShowcaseError;
use super::tablet::GraphicTablet;
use super::types::TabletSpecs;
use log::debug;

/// Fluent construction of a single tablet
pub struct TabletBuilder {
    model: String,
    price: f64,
    active_area: String,
    pressure_levels: u32,
    compatibility: CompatibilityKind,
}

impl TabletBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            price: 0.0,
            active_area: String::new(),
            pressure_levels: 0,
            compatibility: CompatibilityKind::default(),
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn active_area(mut self, active_area: &str) -> Self {
        self.active_area = active_area.to_string();
        self
    }

    pub fn pressure_levels(mut self, pressure_levels: u32) -> Self {
        self.pressure_levels = pressure_levels;
        self
    }

    pub fn compatibility(mut self, kind: CompatibilityKind) -> Self {
        self.compatibility = kind;
        self
    }

    /// Finish the tablet with its brand behavior
    pub fn build<B: Brand + 'static>(self, brand: B) -> GraphicTablet {
        let specs = TabletSpecs::new(&self.model, self.price, &self.active_area, self.pressure_levels);
        GraphicTablet::new(specs, Box::new(brand), self.compatibility.into_strategy())
    }
}

/// Ordered collection of tablets, each owned by the catalog alone
#[derive(Debug, Default)]
pub struct TabletCatalog {
    tablets: Vec<GraphicTablet>,
}

impl TabletCatalog {
    pub fn new() -> Self {
        Self { tablets: Vec::new() }
    }

    /// The three-tablet lineup used by the showcase
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.push(
            TabletBuilder::new("Wacom Intuos M")
                .price(150.99)
                .active_area("257mm")
                .pressure_levels(4096)
                .compatibility(CompatibilityKind::Default)
                .build(Wacom::new(true)),
        );
        catalog.push(
            TabletBuilder::new("XP-Pen Deco 01 V2")
                .price(60.12)
                .active_area("302mm")
                .pressure_levels(8192)
                .compatibility(CompatibilityKind::Advanced)
                .build(XpPen::new(8)),
        );
        catalog.push(
            TabletBuilder::new("GAOMON M10K Pro")
                .price(47.40)
                .active_area("247mm")
                .pressure_levels(8192)
                .compatibility(CompatibilityKind::Default)
                .build(Gaomon::new(true)),
        );
        catalog
    }

    pub fn push(&mut self, tablet: GraphicTablet) {
        debug!("catalog: added {} ({})", tablet.model(), tablet.brand_name());
        self.tablets.push(tablet);
    }

    pub fn len(&self) -> usize {
        self.tablets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tablets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GraphicTablet> {
        self.tablets.iter()
    }

    pub fn get(&self, index: usize) -> Option<&GraphicTablet> {
        self.tablets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut GraphicTablet, ShowcaseError> {
        self.tablets
            .get_mut(index)
            .ok_or(ShowcaseError::TabletNotFound(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = TabletCatalog::standard();
        let models: Vec<&str> = catalog.iter().map(|t| t.model()).collect();
        assert_eq!(models, vec!["Wacom Intuos M", "XP-Pen Deco 01 V2", "GAOMON M10K Pro"]);

        let brands: Vec<&str> = catalog.iter().map(|t| t.brand_name()).collect();
        assert_eq!(brands, vec!["Wacom", "XP-Pen", "Gaomon"]);
    }

    #[test]
    fn test_standard_catalog_strategies() {
        let catalog = TabletCatalog::standard();
        let strategies: Vec<&str> = catalog.iter().map(|t| t.compatibility_name()).collect();
        assert_eq!(strategies, vec!["default", "advanced", "default"]);
    }

    #[test]
    fn test_builder_defaults() {
        let tablet = TabletBuilder::new("Blank").build(Gaomon::new(false));
        assert_eq!(tablet.specs().price(), 0.0);
        assert_eq!(tablet.specs().active_area(), "");
        assert_eq!(tablet.specs().pressure_levels(), 0);
        assert_eq!(tablet.compatibility_name(), "default");
    }

    #[test]
    fn test_get_mut_out_of_range() {
        let mut catalog = TabletCatalog::standard();
        assert!(catalog.get_mut(2).is_ok());
        assert_eq!(catalog.get_mut(3).unwrap_err(), ShowcaseError::TabletNotFound(3));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TabletCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get(0).is_none());
    }
}
