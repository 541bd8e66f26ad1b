//! Grid rendering of the product catalog: one framed tile per product.

use depot_business::{CellValue, Product};
use egui::{Frame, Margin, RichText, Ui};

use crate::utils::colors::product_status_color;
use crate::widgets::status_badge;

const TILE_WIDTH: f32 = 190.0;

pub fn product_grid(ui: &mut Ui, products: &[Product], currency: &str) {
    if products.is_empty() {
        ui.weak("No products in the catalog");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for product in products {
            product_tile(ui, product, currency);
        }
    });
}

fn product_tile(ui: &mut Ui, product: &Product, currency: &str) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(TILE_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new("📦").size(28.0));
                ui.label(RichText::new(&product.name).strong());
                ui.weak(&product.category);
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(CellValue::Money(product.price).display(currency)).strong(),
                    );
                    ui.weak(format!("{} in stock", product.stock));
                });
                ui.add_space(4.0);
                status_badge(
                    ui,
                    product.status.label(),
                    product_status_color(product.status),
                );
            });
        });
}

#[cfg(test)]
mod product_grid_tests {
    use super::*;
    use depot_business::mock_products;
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn every_product_appears_as_a_tile() {
        let products = mock_products();
        let harness = Harness::new_ui(move |ui| {
            product_grid(ui, &products, "$");
        });

        for product in mock_products() {
            assert!(
                harness.query_by_label_contains(&product.name).is_some(),
                "tile for '{}' should render",
                product.name
            );
        }
    }

    #[test]
    fn empty_catalog_shows_placeholder() {
        let harness = Harness::new_ui(|ui| {
            product_grid(ui, &[], "$");
        });

        assert!(harness.query_by_label_contains("No products").is_some());
    }
}
