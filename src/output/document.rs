//! Rendering of JSON:API documents returned by API commands

use serde_json::Value;

use super::common::{print_json, print_yaml};
use super::table::{render_csv, render_table};
use crate::cli::OutputFormat;
use crate::hcp::ApiResponse;

/// Options that shape how a response is printed
pub struct RenderOptions<'a> {
    /// Attribute keys to show, see [`lookup`]
    pub columns: &'a [&'a str],
    pub format: OutputFormat,
    pub no_header: bool,
    /// Printed when the API answers without a body
    pub done_message: &'a str,
}

/// Print an API response in the requested format
pub fn output_response(response: &ApiResponse, options: &RenderOptions<'_>) {
    let doc = match response {
        ApiResponse::NoContent => {
            match options.format {
                OutputFormat::Table | OutputFormat::Csv => println!("{}", options.done_message),
                OutputFormat::Json | OutputFormat::Yaml => eprintln!("{}", options.done_message),
            }
            return;
        }
        ApiResponse::Document(doc) => doc,
    };

    let data = doc.get("data").unwrap_or(doc);
    match options.format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Yaml => print_yaml(data),
        OutputFormat::Table | OutputFormat::Csv => {
            let csv = options.format == OutputFormat::Csv;
            let rendered = match data {
                Value::Array(items) => {
                    let headers = table_headers(options.columns);
                    let rows = table_rows(items, options.columns);
                    let headers = (!options.no_header).then_some(headers.as_slice());
                    if csv {
                        render_csv(headers, &rows)
                    } else {
                        render_table(headers, &rows)
                    }
                }
                Value::Null => "No data returned".to_string(),
                item => {
                    let rows = key_value_rows(item, options.columns);
                    if csv {
                        render_csv(None, &rows)
                    } else {
                        render_table(None, &rows)
                    }
                }
            };
            println!("{}", rendered);
        }
    }
}

/// Header for a column key: `created-at` -> `CREATED AT`,
/// `relationships.workspace.data.id` -> `WORKSPACE`
pub fn column_header(key: &str) -> String {
    let label = match key.strip_prefix("relationships.") {
        Some(rest) => rest.split('.').next().unwrap_or(rest),
        None => key.rsplit('.').next().unwrap_or(key),
    };
    label.replace(['-', '_'], " ").to_uppercase()
}

/// Find a column value in a JSON:API resource object.
///
/// Keys resolve inside `attributes` (dotted for nesting), except `relationships.*`
/// which resolves from the resource root.
pub fn lookup<'v>(item: &'v Value, key: &str) -> Option<&'v Value> {
    let (mut current, path) = match key.strip_prefix("relationships.") {
        Some(rest) => (item.get("relationships")?, rest),
        None => (item.get("attributes")?, key),
    };
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Display text for a JSON value
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| cell(Some(v)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

fn id_of(item: &Value) -> String {
    cell(item.get("id"))
}

fn table_headers(columns: &[&str]) -> Vec<String> {
    std::iter::once("ID".to_string())
        .chain(columns.iter().map(|c| column_header(c)))
        .collect()
}

fn table_rows(items: &[Value], columns: &[&str]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            std::iter::once(id_of(item))
                .chain(columns.iter().map(|c| cell(lookup(item, c))))
                .collect()
        })
        .collect()
}

/// Key/value rows for a single resource; with no columns every scalar attribute is shown
fn key_value_rows(item: &Value, columns: &[&str]) -> Vec<Vec<String>> {
    let mut rows = vec![vec!["ID".to_string(), id_of(item)]];
    if columns.is_empty() {
        if let Some(Value::Object(attrs)) = item.get("attributes") {
            for (key, value) in attrs {
                if !value.is_object() {
                    rows.push(vec![column_header(key), cell(Some(value))]);
                }
            }
        }
    } else {
        for key in columns {
            rows.push(vec![column_header(key), cell(lookup(item, key))]);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workspace() -> Value {
        json!({
            "id": "ws-1",
            "type": "workspaces",
            "attributes": {
                "name": "prod",
                "locked": false,
                "resource-count": 12,
                "tag-names": ["a", "b"],
                "permissions": {"can-update": true}
            },
            "relationships": {
                "project": {"data": {"id": "prj-1", "type": "projects"}}
            }
        })
    }

    #[test]
    fn test_column_header() {
        assert_eq!(column_header("created-at"), "CREATED AT");
        assert_eq!(column_header("permissions.can-update"), "CAN UPDATE");
        assert_eq!(column_header("relationships.project.data.id"), "PROJECT");
    }

    #[test]
    fn test_lookup_attribute_and_relationship() {
        let ws = workspace();
        assert_eq!(lookup(&ws, "name"), Some(&json!("prod")));
        assert_eq!(lookup(&ws, "permissions.can-update"), Some(&json!(true)));
        assert_eq!(
            lookup(&ws, "relationships.project.data.id"),
            Some(&json!("prj-1"))
        );
        assert_eq!(lookup(&ws, "missing"), None);
    }

    #[test]
    fn test_cell_formatting() {
        let ws = workspace();
        assert_eq!(cell(lookup(&ws, "name")), "prod");
        assert_eq!(cell(lookup(&ws, "locked")), "false");
        assert_eq!(cell(lookup(&ws, "resource-count")), "12");
        assert_eq!(cell(lookup(&ws, "tag-names")), "a,b");
        assert_eq!(cell(None), "");
    }

    #[test]
    fn test_table_rows_start_with_id() {
        let rows = table_rows(&[workspace()], &["name", "locked"]);
        assert_eq!(rows, vec![vec!["ws-1", "prod", "false"]]);
        assert_eq!(table_headers(&["name", "locked"]), vec!["ID", "NAME", "LOCKED"]);
    }

    #[test]
    fn test_key_value_rows_all_scalars_when_no_columns() {
        let rows = key_value_rows(&workspace(), &[]);
        assert_eq!(rows[0], vec!["ID", "ws-1"]);
        assert!(rows.iter().any(|r| r[0] == "NAME" && r[1] == "prod"));
        assert!(rows.iter().any(|r| r[0] == "TAG NAMES" && r[1] == "a,b"));
        assert!(!rows.iter().any(|r| r[0] == "PERMISSIONS"));
    }

    #[test]
    fn test_output_response_does_not_panic() {
        let doc = ApiResponse::Document(json!({"data": [workspace()]}));
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ] {
            output_response(
                &doc,
                &RenderOptions {
                    columns: &["name"],
                    format,
                    no_header: false,
                    done_message: "Done",
                },
            );
        }
    }
}
