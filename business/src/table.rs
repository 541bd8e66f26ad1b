//! Declarative column configuration and the client-side query engine behind
//! the data table widget.
//!
//! A page declares its `Column<R>` list once; a mutable [`TableQuery`] holds
//! the user's sort/search/filter choices and [`TableQuery::apply`] projects
//! the full in-memory collection through them on every frame. Everything is
//! synchronous; the target scale is dozens of rows.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use egui::Ui;

/// A displayable, sortable, searchable cell value produced by a column's
/// `value` accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Plain numeric value.
    Number(f64),
    /// Integer quantity (stock counts and the like).
    Count(u64),
    /// Currency amount; displayed with the configured symbol and thousands
    /// separators.
    Money(f64),
    /// Short status text rendered as a pill.
    Badge(String),
    Empty,
}

impl CellValue {
    /// Display string. `currency` only affects `Money`.
    pub fn display(&self, currency: &str) -> String {
        match self {
            Self::Text(text) | Self::Badge(text) => text.clone(),
            Self::Number(value) => trim_zeros(*value),
            Self::Count(value) => value.to_string(),
            Self::Money(value) => format!("{currency}{}", group_thousands(*value)),
            Self::Empty => String::new(),
        }
    }

    /// Lowercased haystack for the search predicate.
    pub fn search_text(&self) -> String {
        match self {
            Self::Text(text) | Self::Badge(text) => text.to_lowercase(),
            Self::Number(value) => trim_zeros(*value),
            Self::Count(value) => value.to_string(),
            Self::Money(value) => trim_zeros(*value),
            Self::Empty => String::new(),
        }
    }

    /// Value-equality predicate for filterable columns.
    pub fn matches_filter(&self, expected: &str) -> bool {
        self.search_text() == expected.to_lowercase()
    }

    /// Default comparison: numbers numerically, text case-insensitively,
    /// `Empty` first. Mixed kinds order by kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.search_text().cmp(&other.search_text()),
        }
    }

    fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(value) | Self::Money(value) => Some(*value),
            Self::Count(value) => Some(*value as f64),
            Self::Text(_) | Self::Badge(_) | Self::Empty => None,
        }
    }
}

fn trim_zeros(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// `1234567.5` -> `1,234,567.50`, `1200` -> `1,200`.
fn group_thousands(value: f64) -> String {
    let formatted = trim_zeros(value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

/// One choice in a filterable column's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Declarative column configuration, immutable for the table's lifetime.
///
/// `value` feeds sorting, search and filters; `render` only overrides how
/// the cell is drawn.
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub searchable: bool,
    pub filterable: bool,
    pub filter_options: &'static [FilterOption],
    pub value: fn(&R) -> CellValue,
    pub render: Option<fn(&R, &mut Ui)>,
}

impl<R> Column<R> {
    pub fn new(key: &'static str, label: &'static str, value: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            label,
            sortable: false,
            searchable: false,
            filterable: false,
            filter_options: &[],
            value,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn filterable(mut self, options: &'static [FilterOption]) -> Self {
        self.filterable = true;
        self.filter_options = options;
        self
    }

    pub fn render(mut self, render: fn(&R, &mut Ui)) -> Self {
        self.render = Some(render);
        self
    }
}

/// The user's current sort/search/filter choices for one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableQuery {
    pub sort: Option<(&'static str, SortDirection)>,
    pub search: String,
    filters: BTreeMap<&'static str, &'static str>,
}

impl TableQuery {
    /// Header click: first click sorts ascending, clicking again flips the
    /// direction, clicking another column starts ascending there.
    pub fn toggle_sort(&mut self, key: &'static str) {
        self.sort = match self.sort {
            Some((current, direction)) if current == key => Some((key, direction.toggled())),
            _ => Some((key, SortDirection::Ascending)),
        };
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        match self.sort {
            Some((current, direction)) if current == key => Some(direction),
            _ => None,
        }
    }

    /// `None` clears the filter for that column.
    pub fn set_filter(&mut self, key: &'static str, value: Option<&'static str>) {
        match value {
            Some(value) => {
                self.filters.insert(key, value);
            }
            None => {
                self.filters.remove(key);
            }
        }
    }

    pub fn filter(&self, key: &str) -> Option<&'static str> {
        self.filters.get(key).copied()
    }

    pub fn clear(&mut self) {
        self.sort = None;
        self.search.clear();
        self.filters.clear();
    }

    /// Project `rows` through the active filters, search and sort. Pure and
    /// recomputed per call; the input order is preserved for unsorted
    /// queries.
    pub fn apply<'r, R>(&self, columns: &[Column<R>], rows: &'r [R]) -> Vec<&'r R> {
        let mut selected: Vec<&R> = rows
            .iter()
            .filter(|row| self.matches(columns, row))
            .collect();

        if let Some((key, direction)) = self.sort
            && let Some(column) = columns.iter().find(|c| c.key == key && c.sortable)
        {
            selected.sort_by(|a, b| {
                let ordering = (column.value)(a).compare(&(column.value)(b));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        selected
    }

    fn matches<R>(&self, columns: &[Column<R>], row: &R) -> bool {
        for (key, expected) in &self.filters {
            let Some(column) = columns.iter().find(|c| c.key == *key) else {
                continue;
            };
            if !(column.value)(row).matches_filter(expected) {
                return false;
            }
        }

        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = columns
                .iter()
                .filter(|c| c.searchable)
                .any(|c| (c.value)(row).search_text().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        category: &'static str,
        price: f64,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| CellValue::Text(r.name.to_owned()))
                .sortable()
                .searchable(),
            Column::new("category", "Category", |r: &Row| {
                CellValue::Text(r.category.to_owned())
            })
            .filterable(&[
                FilterOption {
                    label: "Electronics",
                    value: "Electronics",
                },
                FilterOption {
                    label: "Furniture",
                    value: "Furniture",
                },
            ]),
            Column::new("price", "Price", |r: &Row| CellValue::Money(r.price)).sortable(),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Desk",
                category: "Furniture",
                price: 320.0,
            },
            Row {
                name: "anvil",
                category: "Hardware",
                price: 90.0,
            },
            Row {
                name: "Camera",
                category: "Electronics",
                price: 1250.0,
            },
            Row {
                name: "Bookshelf",
                category: "Furniture",
                price: 180.0,
            },
        ]
    }

    #[test]
    fn unsorted_query_preserves_input_order() {
        let columns = columns();
        let rows = rows();
        let query = TableQuery::default();

        let names: Vec<&str> = query.apply(&columns, &rows).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Desk", "anvil", "Camera", "Bookshelf"]);
    }

    #[test]
    fn sort_descending_reverses_ascending() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();

        query.toggle_sort("price");
        let ascending: Vec<&str> = query.apply(&columns, &rows).iter().map(|r| r.name).collect();

        query.toggle_sort("price");
        let descending: Vec<&str> = query.apply(&columns, &rows).iter().map(|r| r.name).collect();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(ascending, vec!["anvil", "Bookshelf", "Desk", "Camera"]);
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        query.toggle_sort("name");

        let names: Vec<&str> = query.apply(&columns, &rows).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["anvil", "Bookshelf", "Camera", "Desk"]);
    }

    #[test]
    fn toggling_another_column_starts_ascending() {
        let mut query = TableQuery::default();
        query.toggle_sort("price");
        query.toggle_sort("price");
        assert_eq!(query.sort, Some(("price", SortDirection::Descending)));

        query.toggle_sort("name");
        assert_eq!(query.sort, Some(("name", SortDirection::Ascending)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        query.search = "CAM".to_owned();

        let hits = query.apply(&columns, &rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Camera");
    }

    #[test]
    fn search_is_idempotent() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        query.search = "e".to_owned();

        let once: Vec<Row> = query
            .apply(&columns, &rows)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&Row> = query.apply(&columns, &once);

        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a == *b));
    }

    #[test]
    fn search_only_touches_searchable_columns() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        // "Furniture" appears only in the category column, which is not
        // searchable.
        query.search = "furniture".to_owned();

        assert!(query.apply(&columns, &rows).is_empty());
    }

    #[test]
    fn filter_restricts_by_value_equality() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        query.set_filter("category", Some("Furniture"));

        let names: Vec<&str> = query.apply(&columns, &rows).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Desk", "Bookshelf"]);

        query.set_filter("category", None);
        assert_eq!(query.apply(&columns, &rows).len(), 4);
    }

    #[test]
    fn filter_and_search_compose() {
        let columns = columns();
        let rows = rows();
        let mut query = TableQuery::default();
        query.set_filter("category", Some("Furniture"));
        query.search = "book".to_owned();

        let hits = query.apply(&columns, &rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bookshelf");
    }

    #[test]
    fn empty_rows_stay_empty() {
        let columns = columns();
        let mut query = TableQuery::default();
        query.toggle_sort("name");
        query.search = "x".to_owned();

        assert!(query.apply(&columns, &[]).is_empty());
    }

    #[test]
    fn money_display_groups_thousands() {
        assert_eq!(CellValue::Money(1250.0).display("$"), "$1,250");
        assert_eq!(CellValue::Money(1234567.5).display("$"), "$1,234,567.50");
        assert_eq!(CellValue::Money(90.0).display("₱"), "₱90");
    }

    #[test]
    fn mixed_kinds_order_numbers_first() {
        let number = CellValue::Count(3);
        let text = CellValue::Text("three".to_owned());
        assert_eq!(number.compare(&text), Ordering::Less);
        assert_eq!(text.compare(&number), Ordering::Greater);
    }
}
