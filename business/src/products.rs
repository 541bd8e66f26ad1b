//! Product catalog: model, mock data and the products page state.
//!
//! The catalog is a plain in-memory array seeded from mock data; "create"
//! prepends to it with no validation, no duplicate-id check and no
//! persistence.

use std::any::Any;

use depot_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }

    pub const ALL: [Self; 3] = [Self::Active, Self::Draft, Self::Archived];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Ustr,
    pub name: String,
    pub category: String,
    pub vendor: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
}

/// Hard-coded catalog used to seed the products page.
pub fn mock_products() -> Vec<Product> {
    let raw: [(&str, &str, &str, &str, f64, u32, ProductStatus); 10] = [
        ("prod-1", "Wireless Barcode Scanner", "Electronics", "Zebra Tech", 189.0, 42, ProductStatus::Active),
        ("prod-2", "Thermal Label Printer", "Electronics", "Zebra Tech", 349.0, 18, ProductStatus::Active),
        ("prod-3", "Warehouse Shelving Unit", "Furniture", "SteelCo", 1250.0, 7, ProductStatus::Active),
        ("prod-4", "Packing Station Desk", "Furniture", "SteelCo", 820.0, 4, ProductStatus::Draft),
        ("prod-5", "Handheld Inventory Tablet", "Electronics", "Panasonic", 999.0, 25, ProductStatus::Active),
        ("prod-6", "Forklift Charging Dock", "Electronics", "Crown Equipment", 2890.0, 2, ProductStatus::Archived),
        ("prod-7", "Ergonomic Office Chair", "Furniture", "Herman Miller", 1395.0, 11, ProductStatus::Active),
        ("prod-8", "Pallet Jack", "Furniture", "Crown Equipment", 449.0, 9, ProductStatus::Active),
        ("prod-9", "RFID Gate Reader", "Electronics", "Impinj", 3400.0, 3, ProductStatus::Draft),
        ("prod-10", "Conference Table", "Furniture", "Herman Miller", 2100.0, 1, ProductStatus::Archived),
    ];

    raw.into_iter()
        .map(
            |(id, name, category, vendor, price, stock, status)| Product {
                id: Ustr::from(id),
                name: name.to_owned(),
                category: category.to_owned(),
                vendor: vendor.to_owned(),
                price,
                stock,
                status,
            },
        )
        .collect()
}

/// Grid vs table presentation of the same collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

/// Create-dialog inputs. Passed through unchecked on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub vendor: String,
    pub price: String,
    pub stock: String,
    pub status: ProductStatus,
}

/// State owned by the products page.
#[derive(Debug)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub view_mode: ViewMode,
    /// This page's dialog is a plain local flag, not a route query.
    pub create_open: bool,
    pub query: crate::TableQuery,
    pub form: ProductForm,
    next_id: u32,
}

impl Default for ProductsState {
    fn default() -> Self {
        let products = mock_products();
        let next_id = products.len() as u32 + 1;
        Self {
            products,
            view_mode: ViewMode::default(),
            create_open: false,
            query: crate::TableQuery::default(),
            form: ProductForm::default(),
            next_id,
        }
    }
}

impl ProductsState {
    pub fn open_create(&mut self) {
        self.create_open = true;
        self.form = ProductForm::default();
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
        self.form = ProductForm::default();
    }

    /// Prepend a product built from the form and close the dialog.
    ///
    /// Unparseable numbers become zero; nothing else is validated and ids
    /// are never checked for uniqueness.
    pub fn create_from_form(&mut self) -> Ustr {
        let id = Ustr::from(&format!("prod-{}", self.next_id));
        self.next_id += 1;

        let form = std::mem::take(&mut self.form);
        let product = Product {
            id,
            name: form.name,
            category: form.category,
            vendor: form.vendor,
            price: form.price.trim().parse().unwrap_or(0.0),
            stock: form.stock.trim().parse().unwrap_or(0),
            status: form.status,
        };
        log::info!("products: created {id}");

        self.products.insert(0, product);
        self.create_open = false;
        id
    }

    /// Base collection both views render: everything, or everything except
    /// archived when the settings hide them.
    pub fn catalog(&self, show_archived: bool) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| show_archived || product.status != ProductStatus::Archived)
            .collect()
    }
}

impl State for ProductsState {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_prepends_and_closes_dialog() {
        let mut state = ProductsState::default();
        let before = state.products.len();

        state.open_create();
        state.form.name = "Forklift".to_owned();
        state.form.price = "24999.5".to_owned();
        state.form.stock = "2".to_owned();

        let id = state.create_from_form();

        assert!(!state.create_open);
        assert_eq!(state.products.len(), before + 1);
        assert_eq!(state.products[0].id, id);
        assert_eq!(state.products[0].name, "Forklift");
        assert_eq!(state.products[0].price, 24999.5);
        assert_eq!(state.products[0].stock, 2);
    }

    #[test]
    fn create_passes_garbage_through_as_zero() {
        let mut state = ProductsState::default();
        state.open_create();
        state.form.price = "not a number".to_owned();

        state.create_from_form();
        assert_eq!(state.products[0].price, 0.0);
    }

    #[test]
    fn generated_ids_are_sequential() {
        let mut state = ProductsState::default();
        let first = state.create_from_form();
        let second = state.create_from_form();

        assert_ne!(first, second);
        assert!(second.as_str().starts_with("prod-"));
    }

    #[test]
    fn catalog_hides_archived_on_request() {
        let state = ProductsState::default();
        let all = state.catalog(true).len();
        let visible = state.catalog(false).len();

        let archived = state
            .products
            .iter()
            .filter(|p| p.status == ProductStatus::Archived)
            .count();
        assert_eq!(all - visible, archived);
        assert!(archived > 0, "mock data should include archived products");
    }

    #[test]
    fn both_views_share_one_collection() {
        let mut state = ProductsState::default();
        let ids_grid: Vec<Ustr> = state.catalog(true).iter().map(|p| p.id).collect();

        state.view_mode = ViewMode::Table;
        let ids_table: Vec<Ustr> = state.catalog(true).iter().map(|p| p.id).collect();

        assert_eq!(ids_grid, ids_table);
    }
}
