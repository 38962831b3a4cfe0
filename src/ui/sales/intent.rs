use crate::snapshot::SessionSnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SalesIntent {
    /// The dessert was tapped: sell one unit.
    Tap,
    /// Replace progress with a saved snapshot.
    Restore { snapshot: SessionSnapshot },
    /// Start over from nothing sold.
    Reset,
}

impl Intent for SalesIntent {}
