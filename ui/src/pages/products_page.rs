//! Products catalog page: grid/table toggle over one in-memory array plus a
//! local create dialog. Both views read the same collection, so they stay
//! consistent without extra synchronization.

use depot_business::{
    AppConfig, CellValue, Column, FilterOption, Page, Product, ProductStatus, ProductsState,
    SettingsState, ViewMode,
};
use egui::{RichText, Ui, Window};

use crate::state::State;
use crate::utils::colors::product_status_color;
use crate::widgets::{DataTable, product_grid, status_badge};

const CATEGORY_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Electronics",
        value: "Electronics",
    },
    FilterOption {
        label: "Furniture",
        value: "Furniture",
    },
];

const STATUS_FILTERS: &[FilterOption] = &[
    FilterOption {
        label: "Active",
        value: "Active",
    },
    FilterOption {
        label: "Draft",
        value: "Draft",
    },
    FilterOption {
        label: "Archived",
        value: "Archived",
    },
];

fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column::new("name", "Product Name", |p: &Product| {
            CellValue::Text(p.name.clone())
        })
        .sortable()
        .searchable()
        .render(|p, ui| {
            ui.horizontal(|ui| {
                ui.label("📦");
                ui.strong(&p.name);
            });
        }),
        Column::new("category", "Category", |p: &Product| {
            CellValue::Text(p.category.clone())
        })
        .sortable()
        .filterable(CATEGORY_FILTERS),
        Column::new("vendor", "Vendor", |p: &Product| {
            CellValue::Text(p.vendor.clone())
        })
        .sortable(),
        Column::new("price", "Price", |p: &Product| CellValue::Money(p.price)).sortable(),
        Column::new("stock", "Stock", |p: &Product| {
            CellValue::Count(u64::from(p.stock))
        })
        .sortable(),
        Column::new("status", "Status", |p: &Product| {
            CellValue::Badge(p.status.label().to_owned())
        })
        .sortable()
        .filterable(STATUS_FILTERS)
        .render(|p, ui| {
            status_badge(ui, p.status.label(), product_status_color(p.status));
        }),
        Column::new("actions", "Actions", |_p: &Product| CellValue::Empty).render(|_p, ui| {
            ui.menu_button("⋯", |ui| {
                ui.label(RichText::new("Actions").small());
                let _ = ui.button("Edit Details");
                let _ = ui.button("Update Stock");
                let _ = ui.button("Archive Product");
            });
        }),
    ]
}

pub fn products_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;
    let settings = *ctx.state::<SettingsState>();
    let currency = ctx.state::<AppConfig>().currency.clone();

    let mut products = std::mem::take(ctx.state_mut::<ProductsState>());

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Products");
            ui.weak("Manage your product catalog and listings.");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Add Product").clicked() {
                products.open_create();
            }
            ui.selectable_value(&mut products.view_mode, ViewMode::Table, "☰ Table");
            ui.selectable_value(&mut products.view_mode, ViewMode::Grid, "▦ Grid");
        });
    });
    ui.add_space(12.0);

    // Both views read the same underlying array.
    let visible: Vec<Product> = products
        .catalog(settings.show_archived)
        .into_iter()
        .cloned()
        .collect();

    let mut clicked_id = None;
    match products.view_mode {
        ViewMode::Grid => product_grid(ui, &visible, &currency),
        ViewMode::Table => {
            let columns = product_columns();
            let table = DataTable::new("products", &columns, &currency)
                .compact(settings.compact_tables);
            if let Some(product) = table.show(ui, &visible, &mut products.query).clicked {
                clicked_id = Some(product.id);
            }
        }
    }

    if let Some(id) = clicked_id {
        log::info!("navigate to {}", Page::Products.detail_path(id.as_str()));
    }

    if products.create_open {
        product_create_dialog(ui, &mut products);
    }

    *ctx.state_mut::<ProductsState>() = products;
}

fn product_create_dialog(ui: &mut Ui, products: &mut ProductsState) {
    let mut open = true;

    Window::new("Add Product")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.weak("Add a new product to the catalog.");
            ui.add_space(8.0);

            egui::Grid::new("product_form")
                .num_columns(2)
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut products.form.name);
                    ui.end_row();

                    ui.label("Category:");
                    ui.text_edit_singleline(&mut products.form.category);
                    ui.end_row();

                    ui.label("Vendor:");
                    ui.text_edit_singleline(&mut products.form.vendor);
                    ui.end_row();

                    ui.label("Price:");
                    ui.text_edit_singleline(&mut products.form.price);
                    ui.end_row();

                    ui.label("Stock:");
                    ui.text_edit_singleline(&mut products.form.stock);
                    ui.end_row();

                    ui.label("Status:");
                    egui::ComboBox::from_id_salt("product_status")
                        .selected_text(products.form.status.label())
                        .show_ui(ui, |ui| {
                            for status in ProductStatus::ALL {
                                ui.selectable_value(
                                    &mut products.form.status,
                                    status,
                                    status.label(),
                                );
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Create").strong()).clicked() {
                    products.create_from_form();
                }
                if ui.button("Cancel").clicked() {
                    products.close_create();
                }
            });
        });

    if !open {
        products.close_create();
    }
}
