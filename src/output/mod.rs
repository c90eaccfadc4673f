//! Output formatting module
//!
//! Handles the output formats shared by every command: table, CSV, JSON, YAML

mod common;
mod document;
mod table;

pub use common::{escape_csv, print_json, print_yaml};
pub use document::{cell, column_header, lookup, output_response, RenderOptions};
pub use table::{render_csv, render_table};
