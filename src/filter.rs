use std::collections::BTreeSet;

use crate::catalog::Cuisine;

/// Lower end of the price range. No control changes it.
pub const PRICE_FLOOR: u32 = 0;
/// Upper end of the price slider
pub const PRICE_MAX: u32 = 1000;
/// Slider granularity
pub const PRICE_STEP: u32 = 50;

/// Cuisine and price selections made in the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    cuisines: BTreeSet<Cuisine>,
    price_ceiling: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            cuisines: BTreeSet::new(),
            price_ceiling: PRICE_MAX,
        }
    }
}

impl FilterState {
    pub fn cuisines(&self) -> &BTreeSet<Cuisine> {
        &self.cuisines
    }

    pub fn is_selected(&self, cuisine: Cuisine) -> bool {
        self.cuisines.contains(&cuisine)
    }

    /// Select the cuisine if it is not selected, deselect it otherwise.
    pub fn toggle_cuisine(&mut self, cuisine: Cuisine) {
        if !self.cuisines.remove(&cuisine) {
            self.cuisines.insert(cuisine);
        }
    }

    /// `(floor, ceiling)` in rupees
    pub fn price_range(&self) -> (u32, u32) {
        (PRICE_FLOOR, self.price_ceiling)
    }

    pub fn price_ceiling(&self) -> u32 {
        self.price_ceiling
    }

    /// Clamp to the slider range and snap to the nearest step.
    pub fn set_price_ceiling(&mut self, value: u32) {
        let clamped = value.min(PRICE_MAX);
        let snapped = (clamped + PRICE_STEP / 2) / PRICE_STEP * PRICE_STEP;
        self.price_ceiling = snapped.min(PRICE_MAX);
    }
}

/// The collapsible panel: open flag plus the selections it edits
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    open: bool,
    state: FilterState,
}

impl FilterPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close button and "Apply Filters" both end up here.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FilterState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_selection() {
        let mut filters = FilterState::default();
        filters.toggle_cuisine(Cuisine::Italian);
        let before = filters.clone();

        filters.toggle_cuisine(Cuisine::Chinese);
        assert!(filters.is_selected(Cuisine::Chinese));
        filters.toggle_cuisine(Cuisine::Chinese);

        assert_eq!(filters, before);
    }

    #[test]
    fn price_ceiling_is_clamped_and_snapped() {
        let mut filters = FilterState::default();
        assert_eq!(filters.price_range(), (0, 1000));

        filters.set_price_ceiling(500);
        assert_eq!(filters.price_range(), (0, 500));

        filters.set_price_ceiling(730);
        assert_eq!(filters.price_ceiling(), 750);

        filters.set_price_ceiling(4000);
        assert_eq!(filters.price_ceiling(), 1000);

        filters.set_price_ceiling(0);
        assert_eq!(filters.price_range(), (0, 0));
    }

    #[test]
    fn panel_close_keeps_selections() {
        let mut panel = FilterPanel::default();
        panel.toggle();
        assert!(panel.is_open());
        panel.state_mut().toggle_cuisine(Cuisine::Desserts);
        panel.close();
        assert!(!panel.is_open());
        assert!(panel.state().is_selected(Cuisine::Desserts));
    }
}
