//! Dessert catalog and the tier selection rule.
//!
//! A catalog is an ordered, immutable list of items. Each item becomes the
//! active display candidate once the cumulative sales count reaches its
//! activation threshold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one item")]
    Empty,

    #[error(
        "Catalog item {index} has threshold {threshold}, lower than the previous threshold {previous}"
    )]
    Unsorted {
        index: usize,
        previous: u64,
        threshold: u64,
    },
}

/// A sellable item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Opaque reference to the display asset (e.g. "cupcake").
    #[serde(rename = "image")]
    pub image_ref: String,
    /// Price earned per unit sold while this item is active.
    #[serde(rename = "price")]
    pub unit_price: u64,
    /// Minimum cumulative units sold at which this item becomes active.
    #[serde(rename = "threshold")]
    pub activation_threshold: u64,
}

impl ItemRecord {
    pub fn new(image_ref: impl Into<String>, unit_price: u64, activation_threshold: u64) -> Self {
        Self {
            image_ref: image_ref.into(),
            unit_price,
            activation_threshold,
        }
    }
}

/// Non-empty list of items sorted by activation threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ItemRecord>,
}

impl Catalog {
    /// Build a catalog, checking it is non-empty and sorted ascending
    /// (non-decreasing) by activation threshold.
    pub fn new(items: Vec<ItemRecord>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, pair) in items.windows(2).enumerate() {
            if pair[1].activation_threshold < pair[0].activation_threshold {
                return Err(CatalogError::Unsorted {
                    index: index + 1,
                    previous: pair[0].activation_threshold,
                    threshold: pair[1].activation_threshold,
                });
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> &ItemRecord {
        &self.items[0]
    }

    pub fn last(&self) -> &ItemRecord {
        &self.items[self.items.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    /// Index of the first item with the given asset reference.
    pub fn position(&self, image_ref: &str) -> Option<usize> {
        self.items.iter().position(|item| item.image_ref == image_ref)
    }
}

impl Default for Catalog {
    /// The built-in dessert list.
    fn default() -> Self {
        Self {
            items: default_desserts(),
        }
    }
}

/// Built-in desserts, cheapest first.
pub fn default_desserts() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("cupcake", 5, 0),
        ItemRecord::new("donut", 10, 5),
        ItemRecord::new("eclair", 15, 20),
        ItemRecord::new("froyo", 30, 50),
        ItemRecord::new("gingerbread", 50, 100),
        ItemRecord::new("honeycomb", 100, 200),
        ItemRecord::new("icecreamsandwich", 500, 500),
        ItemRecord::new("jellybean", 1000, 1000),
        ItemRecord::new("kitkat", 2000, 2000),
        ItemRecord::new("lollipop", 3000, 4000),
        ItemRecord::new("marshmallow", 4000, 8000),
        ItemRecord::new("nougat", 5000, 16000),
        ItemRecord::new("oreo", 6000, 20000),
    ]
}

/// Index of the item that should be displayed after `units_sold` sales.
///
/// Returns the last item whose threshold has been reached. If no threshold
/// is reached yet, the first item is returned.
pub fn select_index(catalog: &Catalog, units_sold: u64) -> usize {
    let reached = catalog
        .items
        .partition_point(|item| item.activation_threshold <= units_sold);
    reached.saturating_sub(1)
}

/// The item that should be displayed after `units_sold` sales.
pub fn select_item(catalog: &Catalog, units_sold: u64) -> &ItemRecord {
    &catalog.items[select_index(catalog, units_sold)]
}
