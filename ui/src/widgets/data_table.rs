//! Generic data table widget.
//!
//! Renders any row type against a declarative `Column` configuration:
//! sortable headers toggle ascending/descending, a search box filters
//! searchable columns by case-insensitive substring, and filterable columns
//! get a value-equality dropdown. The query logic itself lives in
//! `depot_business::TableQuery`; this widget only draws and feeds events
//! back into it.

use depot_business::{Column, TableQuery};
use egui::{Button, RichText, Sense, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

const ROW_HEIGHT: f32 = 30.0;
const ROW_HEIGHT_COMPACT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 26.0;

pub struct DataTable<'a, R> {
    pub id_salt: &'a str,
    pub columns: &'a [Column<R>],
    pub currency: &'a str,
    pub compact: bool,
    /// The management template draws its own search input; pages using the
    /// built-in controls leave this on.
    pub show_search: bool,
}

pub struct DataTableResponse<'r, R> {
    pub clicked: Option<&'r R>,
}

impl<'a, R> DataTable<'a, R> {
    pub fn new(id_salt: &'a str, columns: &'a [Column<R>], currency: &'a str) -> Self {
        Self {
            id_salt,
            columns,
            currency,
            compact: false,
            show_search: true,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn show_search(mut self, show_search: bool) -> Self {
        self.show_search = show_search;
        self
    }

    pub fn show<'r>(
        &self,
        ui: &mut Ui,
        rows: &'r [R],
        query: &mut TableQuery,
    ) -> DataTableResponse<'r, R> {
        self.controls(ui, query);

        let visible = query.apply(self.columns, rows);
        let row_height = if self.compact {
            ROW_HEIGHT_COMPACT
        } else {
            ROW_HEIGHT
        };

        let mut clicked = None;
        TableBuilder::new(ui)
            .id_salt(self.id_salt)
            .striped(true)
            .sense(Sense::click())
            .columns(
                TableColumn::remainder().at_least(70.0),
                self.columns.len(),
            )
            .header(HEADER_HEIGHT, |mut header| {
                for column in self.columns {
                    header.col(|ui| {
                        self.header_cell(ui, column, query);
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, visible.len(), |mut row| {
                    let record = visible[row.index()];
                    for column in self.columns {
                        row.col(|ui| match column.render {
                            Some(render) => render(record, ui),
                            None => {
                                ui.label((column.value)(record).display(self.currency));
                            }
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some(record);
                    }
                });
            });

        if visible.is_empty() {
            ui.add_space(8.0);
            ui.weak("No matching records");
        }

        DataTableResponse { clicked }
    }

    fn controls(&self, ui: &mut Ui, query: &mut TableQuery) {
        let has_search = self.show_search && self.columns.iter().any(|c| c.searchable);
        let has_filters = self.columns.iter().any(|c| c.filterable);
        if !has_search && !has_filters {
            return;
        }

        ui.horizontal(|ui| {
            if has_search {
                ui.add(
                    egui::TextEdit::singleline(&mut query.search)
                        .hint_text("Search...")
                        .desired_width(220.0),
                );
            }

            for column in self.columns.iter().filter(|c| c.filterable) {
                let selected_label = query
                    .filter(column.key)
                    .and_then(|value| {
                        column
                            .filter_options
                            .iter()
                            .find(|option| option.value == value)
                            .map(|option| option.label)
                    })
                    .unwrap_or(column.label);

                egui::ComboBox::from_id_salt((self.id_salt, column.key))
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        if ui
                            .selectable_label(query.filter(column.key).is_none(), "All")
                            .clicked()
                        {
                            query.set_filter(column.key, None);
                        }
                        for option in column.filter_options {
                            let active = query.filter(column.key) == Some(option.value);
                            if ui.selectable_label(active, option.label).clicked() {
                                query.set_filter(column.key, Some(option.value));
                            }
                        }
                    });
            }
        });
        ui.add_space(6.0);
    }

    fn header_cell(&self, ui: &mut Ui, column: &Column<R>, query: &mut TableQuery) {
        if column.sortable {
            let text = match query.sort_direction(column.key) {
                Some(direction) => format!("{} {}", column.label, direction.arrow()),
                None => column.label.to_owned(),
            };
            if ui
                .add(Button::new(RichText::new(text).strong()).frame(false))
                .clicked()
            {
                query.toggle_sort(column.key);
            }
        } else {
            ui.strong(column.label);
        }
    }
}
