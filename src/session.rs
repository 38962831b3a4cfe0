//! Per-session sales progress and the tap transition.

use crate::catalog::{select_index, Catalog, ItemRecord};
use crate::snapshot::SessionSnapshot;

/// Sales progress for one session.
///
/// `active` always equals `select_index(catalog, units_sold)`; the three
/// fields only change together through [`SessionState::apply_tap`] or
/// [`SessionState::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    units_sold: u64,
    total_revenue: u64,
    active: usize,
}

/// What the presentation layer needs after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel<'a> {
    pub total_revenue: u64,
    pub units_sold: u64,
    pub image_ref: &'a str,
}

impl SessionState {
    /// Fresh session: nothing sold, first tier active.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            units_sold: 0,
            total_revenue: 0,
            active: select_index(catalog, 0),
        }
    }

    pub fn units_sold(&self) -> u64 {
        self.units_sold
    }

    pub fn total_revenue(&self) -> u64 {
        self.total_revenue
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item<'a>(&self, catalog: &'a Catalog) -> &'a ItemRecord {
        catalog.get(self.active).unwrap_or_else(|| catalog.last())
    }

    /// Sell one unit of the active item, then re-select the tier.
    pub fn apply_tap(&self, catalog: &Catalog) -> Self {
        let price = self.active_item(catalog).unit_price;
        let units_sold = self.units_sold.saturating_add(1);
        Self {
            units_sold,
            total_revenue: self.total_revenue.saturating_add(price),
            active: select_index(catalog, units_sold),
        }
    }

    pub fn render_model<'a>(&self, catalog: &'a Catalog) -> RenderModel<'a> {
        RenderModel {
            total_revenue: self.total_revenue,
            units_sold: self.units_sold,
            image_ref: &self.active_item(catalog).image_ref,
        }
    }

    pub fn snapshot(&self, catalog: &Catalog) -> SessionSnapshot {
        SessionSnapshot {
            units_sold: self.units_sold,
            total_revenue: self.total_revenue,
            active_item: self.active_item(catalog).image_ref.clone(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The active item is recomputed from `units_sold`; a stored item that
    /// disagrees is replaced.
    pub fn restore(snapshot: &SessionSnapshot, catalog: &Catalog) -> Self {
        let active = select_index(catalog, snapshot.units_sold);
        match catalog.position(&snapshot.active_item) {
            None => tracing::warn!(
                stored = %snapshot.active_item,
                selected = %catalog.items()[active].image_ref,
                "Snapshot active item is not in the catalog, reselecting"
            ),
            Some(stored) if stored != active => tracing::warn!(
                stored = %snapshot.active_item,
                selected = %catalog.items()[active].image_ref,
                units_sold = snapshot.units_sold,
                "Snapshot active item does not match catalog tier, reselecting"
            ),
            Some(_) => {}
        }

        Self {
            units_sold: snapshot.units_sold,
            total_revenue: snapshot.total_revenue,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{select_item, ItemRecord};

    fn abc() -> Catalog {
        Catalog::new(vec![
            ItemRecord::new("A", 5, 0),
            ItemRecord::new("B", 10, 5),
            ItemRecord::new("C", 15, 10),
        ])
        .unwrap()
    }

    fn tap_n(catalog: &Catalog, n: usize) -> SessionState {
        (0..n).fold(SessionState::new(catalog), |state, _| {
            state.apply_tap(catalog)
        })
    }

    #[test]
    fn fresh_state_shows_first_item() {
        let catalog = abc();
        let state = SessionState::new(&catalog);
        assert_eq!(state.units_sold(), 0);
        assert_eq!(state.total_revenue(), 0);
        assert_eq!(state.active_item(&catalog).image_ref, "A");
    }

    #[test]
    fn five_taps_reach_second_tier() {
        let catalog = abc();
        let state = tap_n(&catalog, 5);
        assert_eq!(state.units_sold(), 5);
        assert_eq!(state.total_revenue(), 25);
        assert_eq!(state.active_item(&catalog).image_ref, "B");
    }

    #[test]
    fn ten_taps_reach_third_tier() {
        let catalog = abc();
        let state = tap_n(&catalog, 10);
        assert_eq!(state.units_sold(), 10);
        // 5 taps at A (5) + 5 taps at B (10)
        assert_eq!(state.total_revenue(), 75);
        assert_eq!(state.active_item(&catalog).image_ref, "C");
    }

    #[test]
    fn revenue_uses_price_active_before_each_tap() {
        let catalog = Catalog::default();
        let mut state = SessionState::new(&catalog);
        let mut expected = 0;
        for _ in 0..250 {
            expected += state.active_item(&catalog).unit_price;
            state = state.apply_tap(&catalog);
            assert_eq!(
                state.active_item(&catalog),
                select_item(&catalog, state.units_sold())
            );
        }
        assert_eq!(state.units_sold(), 250);
        assert_eq!(state.total_revenue(), expected);
    }

    #[test]
    fn render_model_exposes_active_image() {
        let catalog = abc();
        let state = tap_n(&catalog, 7);
        let model = state.render_model(&catalog);
        assert_eq!(model.units_sold, 7);
        assert_eq!(model.total_revenue, 45);
        assert_eq!(model.image_ref, "B");
    }

    #[test]
    fn restore_keeps_consistent_active_item() {
        let catalog = abc();
        let state = tap_n(&catalog, 6);
        let restored = SessionState::restore(&state.snapshot(&catalog), &catalog);
        assert_eq!(restored, state);
        assert_eq!(catalog.position("B"), Some(restored.active_index()));
    }

    #[test]
    fn restore_reselects_inconsistent_active_item() {
        let catalog = abc();
        let snapshot = SessionSnapshot {
            units_sold: 12,
            total_revenue: 100,
            active_item: "A".to_string(),
        };
        let state = SessionState::restore(&snapshot, &catalog);
        assert_eq!(state.units_sold(), 12);
        assert_eq!(state.total_revenue(), 100);
        assert_eq!(state.active_item(&catalog).image_ref, "C");
    }
}
