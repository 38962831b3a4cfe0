use std::sync::{Arc, OnceLock};

use crate::catalog::{Catalog, ItemRecord};
use crate::session::{RenderModel, SessionState};
use crate::snapshot::SessionSnapshot;
use crate::ui::mvi::UiState;

/// Sales screen state: the shared catalog plus this session's progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesState {
    catalog: Arc<Catalog>,
    session: SessionState,
}

/// Built-in catalog shared by every default state, so taking the state
/// out of `App` during dispatch does not rebuild it.
fn default_catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    Arc::clone(CATALOG.get_or_init(|| Arc::new(Catalog::default())))
}

impl Default for SalesState {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl UiState for SalesState {}

impl SalesState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let session = SessionState::new(&catalog);
        Self { catalog, session }
    }

    pub(super) fn with_session(self, session: SessionState) -> Self {
        Self {
            catalog: self.catalog,
            session,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn units_sold(&self) -> u64 {
        self.session.units_sold()
    }

    pub fn total_revenue(&self) -> u64 {
        self.session.total_revenue()
    }

    pub fn active_item(&self) -> &ItemRecord {
        self.session.active_item(&self.catalog)
    }

    pub fn render_model(&self) -> RenderModel<'_> {
        self.session.render_model(&self.catalog)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_catalog() {
        let state = SalesState::default();
        assert_eq!(state.catalog().len(), 13);
        assert_eq!(state.units_sold(), 0);
        assert_eq!(state.total_revenue(), 0);
        assert_eq!(state.active_item().image_ref, "cupcake");
    }

    #[test]
    fn default_states_share_one_catalog() {
        let first = SalesState::default();
        let second = SalesState::default();
        assert!(Arc::ptr_eq(&first.catalog, &second.catalog));
    }
}
