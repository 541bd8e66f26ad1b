//! Reports page: inventory summary derived from the live product catalog.

use depot_business::{
    AppConfig, CategoryBreakdown, CellValue, Column, ProductsState, ReportsState, SettingsState,
    StatCard, inventory_summary,
};
use egui::Ui;

use crate::state::State;
use crate::widgets::{DataTable, stats_card};

fn breakdown_columns() -> Vec<Column<CategoryBreakdown>> {
    vec![
        Column::new("category", "Category", |c: &CategoryBreakdown| {
            CellValue::Text(c.category.clone())
        })
        .sortable(),
        Column::new("products", "Products", |c: &CategoryBreakdown| {
            CellValue::Count(c.products)
        })
        .sortable(),
        Column::new("units", "Units", |c: &CategoryBreakdown| {
            CellValue::Count(c.units)
        })
        .sortable(),
        Column::new("value", "Inventory Value", |c: &CategoryBreakdown| {
            CellValue::Money(c.value)
        })
        .sortable(),
    ]
}

pub fn reports_page(state: &mut State, ui: &mut Ui) {
    let ctx = &mut state.ctx;
    let currency = ctx.state::<AppConfig>().currency.clone();
    let compact = ctx.state::<SettingsState>().compact_tables;

    let summary = inventory_summary(&ctx.state::<ProductsState>().products);

    ui.heading("Reports");
    ui.weak("Inventory totals derived from the current catalog.");
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        stats_card(
            ui,
            &StatCard {
                title: "Total Products",
                icon: "📦",
                value: summary.total_products.to_string(),
                description: "Catalog entries".to_owned(),
            },
        );
        stats_card(
            ui,
            &StatCard {
                title: "Units in Stock",
                icon: "🗃",
                value: summary.total_units.to_string(),
                description: "Across all products".to_owned(),
            },
        );
        stats_card(
            ui,
            &StatCard {
                title: "Inventory Value",
                icon: "💰",
                value: CellValue::Money(summary.total_value).display(&currency),
                description: "Price × stock".to_owned(),
            },
        );
    });
    ui.add_space(12.0);

    ui.strong("By category");
    ui.add_space(6.0);

    let mut query = std::mem::take(&mut ctx.state_mut::<ReportsState>().query);
    let columns = breakdown_columns();
    DataTable::new("category_breakdown", &columns, &currency)
        .compact(compact)
        .show(ui, &summary.categories, &mut query);
    ctx.state_mut::<ReportsState>().query = query;
}
