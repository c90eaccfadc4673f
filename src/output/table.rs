//! Table and CSV rendering

use comfy_table::{presets::NOTHING, Table};

use super::common::escape_csv;

/// Render rows as an aligned table; `headers` of `None` prints a bare key/value grid
pub fn render_table(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if let Some(headers) = headers {
        table.set_header(headers.to_vec());
    }
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

/// Render rows as CSV
pub fn render_csv(headers: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if let Some(headers) = headers {
        lines.push(
            headers
                .iter()
                .map(|h| escape_csv(h))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    for row in rows {
        lines.push(row.iter().map(|c| escape_csv(c)).collect::<Vec<_>>().join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["ID".to_string(), "NAME".to_string()]
    }

    #[test]
    fn test_render_table_with_header() {
        let out = render_table(
            Some(&headers()),
            &[vec!["ws-1".to_string(), "prod".to_string()]],
        );
        assert!(out.contains("ID"));
        assert!(out.contains("NAME"));
        assert!(out.contains("ws-1"));
        assert!(out.contains("prod"));
    }

    #[test]
    fn test_render_table_empty() {
        let out = render_table(Some(&headers()), &[]);
        assert!(out.contains("ID"));
    }

    #[test]
    fn test_render_csv() {
        let out = render_csv(
            Some(&headers()),
            &[vec!["ws-1".to_string(), "a,b".to_string()]],
        );
        assert_eq!(out, "ID,NAME\nws-1,\"a,b\"");
    }

    #[test]
    fn test_render_csv_without_header() {
        let out = render_csv(None, &[vec!["k".to_string(), "v".to_string()]]);
        assert_eq!(out, "k,v");
    }
}
