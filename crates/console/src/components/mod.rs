//! Reusable UI components.
//!
//! Typed render trees plus the askama templates that turn them into markup.

pub mod render;
pub mod results_table;

pub use render::{FlashTemplate, ResultsTableTemplate, render_flash, render_results};
pub use results_table::{ResultsTable, RowKind, TableCell, TableColumn, TableKind, TableRow};
