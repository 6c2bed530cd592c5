//! Results table component.
//!
//! A typed render tree for the search results region. Builders turn
//! shopcarts into rows; the askama template in `partials/results_table.html`
//! turns rows into markup.
//!
//! # Layout
//!
//! ```text
//! | ID | Customer ID | Items   | Product ID | Price | Quantity |
//! | 3  | 1001        | 2 items |            |       |          |   <- summary row
//! |    |             |         | 11         | $1.50 | 2        |   <- item row
//! |    |             |         | 12         | $3.00 | 1        |   <- item row
//! ```

use serde::{Deserialize, Serialize};
use shopcart_core::{CartItem, Shopcart};

/// Column definition for the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Whether the table came from a single lookup or a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// One shopcart, from retrieve or search by id.
    Single,
    /// Any number of shopcarts, from a collection search.
    List,
}

/// Whether a row summarizes a shopcart or shows one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Summary,
    Item,
}

/// One `<td>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Element id; empty for none.
    pub id: String,
    /// Cell text (escaped on render).
    pub text: String,
    /// Highlighted item cell in listings.
    pub active: bool,
}

impl TableCell {
    /// An empty placeholder cell.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// A cell with text and no id.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A cell with an element id.
    #[must_use]
    pub fn with_id(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            active: false,
        }
    }

    /// Mark the cell active when it has content.
    #[must_use]
    fn activate(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// One `<tr>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Element id; empty for none.
    pub id: String,
    /// Summary or item row.
    pub kind: RowKind,
    /// Exactly one cell per column.
    pub cells: Vec<TableCell>,
}

/// The rendered search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsTable {
    /// Single lookup or listing.
    pub kind: TableKind,
    /// Header columns.
    pub columns: Vec<TableColumn>,
    /// Body rows in display order.
    pub rows: Vec<TableRow>,
}

/// The six columns every results table shows.
#[must_use]
pub fn columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("id", "ID"),
        TableColumn::new("customer_id", "Customer ID"),
        TableColumn::new("items", "Items"),
        TableColumn::new("product_id", "Product ID"),
        TableColumn::new("price", "Price"),
        TableColumn::new("quantity", "Quantity"),
    ]
}

impl ResultsTable {
    /// Table for one shopcart.
    #[must_use]
    pub fn single(shopcart: &Shopcart) -> Self {
        let mut rows = vec![summary_row(shopcart, String::new())];
        rows.extend(shopcart.items.iter().map(|item| item_row(item, false)));

        Self {
            kind: TableKind::Single,
            columns: columns(),
            rows,
        }
    }

    /// Table for a listing. Summary rows carry `row_<index>`.
    #[must_use]
    pub fn list(shopcarts: &[Shopcart]) -> Self {
        let rows = shopcarts
            .iter()
            .enumerate()
            .flat_map(|(i, shopcart)| {
                std::iter::once(summary_row(shopcart, format!("row_{i}")))
                    .chain(shopcart.items.iter().map(|item| item_row(item, true)))
            })
            .collect();

        Self {
            kind: TableKind::List,
            columns: columns(),
            rows,
        }
    }

    /// Rows summarizing a shopcart.
    pub fn summary_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Summary)
    }

    /// Rows showing an item.
    pub fn item_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Item)
    }

    /// Find a cell by element id.
    #[must_use]
    pub fn cell(&self, id: &str) -> Option<&TableCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.id == id)
    }

    /// True when the table has no body rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn summary_row(shopcart: &Shopcart, row_id: String) -> TableRow {
    TableRow {
        id: row_id,
        kind: RowKind::Summary,
        cells: vec![
            TableCell::with_id(format!("shopcart-id-{}", shopcart.id), shopcart.id.to_string()),
            TableCell::with_id(
                format!("customer-id-{}", shopcart.customer_id),
                shopcart.customer_id.to_string(),
            ),
            TableCell::text(format!("{} items", shopcart.item_count())),
            TableCell::blank(),
            TableCell::blank(),
            TableCell::blank(),
        ],
    }
}

fn item_row(item: &CartItem, active: bool) -> TableRow {
    TableRow {
        id: String::new(),
        kind: RowKind::Item,
        cells: vec![
            TableCell::blank(),
            TableCell::blank(),
            TableCell::blank(),
            TableCell::with_id(
                format!("product-id-{}", item.product_id),
                item.product_id.to_string(),
            )
            .activate(active),
            TableCell::text(item.unit_price().display()).activate(active),
            TableCell::text(item.quantity.to_string()).activate(active),
        ],
    }
}
