//! Inventory reporting: pure derivations over the product catalog.

use std::any::Any;
use std::collections::BTreeMap;

use depot_states::{State, state_assign_impl};

use crate::{Product, TableQuery};

/// Reports page state (sort order of the breakdown table).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportsState {
    pub query: TableQuery,
}

impl State for ReportsState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub products: u64,
    pub units: u64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub total_products: u64,
    pub total_units: u64,
    pub total_value: f64,
    pub categories: Vec<CategoryBreakdown>,
}

/// Aggregate the catalog: totals plus a per-category breakdown sorted by
/// category name. Inventory value is Σ price × stock.
pub fn inventory_summary(products: &[Product]) -> InventorySummary {
    let mut categories: BTreeMap<&str, CategoryBreakdown> = BTreeMap::new();

    for product in products {
        let entry = categories
            .entry(product.category.as_str())
            .or_insert_with(|| CategoryBreakdown {
                category: product.category.clone(),
                products: 0,
                units: 0,
                value: 0.0,
            });
        entry.products += 1;
        entry.units += u64::from(product.stock);
        entry.value += product.price * f64::from(product.stock);
    }

    let categories: Vec<CategoryBreakdown> = categories.into_values().collect();
    InventorySummary {
        total_products: products.len() as u64,
        total_units: categories.iter().map(|c| c.units).sum(),
        total_value: categories.iter().map(|c| c.value).sum(),
        categories,
    }
}
