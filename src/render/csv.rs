//! CSV rendering.
//!
//! Header names are written bare; every data field goes through
//! [`quote_csv_field`]. Rows are newline terminated.

use crate::utils::quote_csv_field;

pub const HISTORY_COLUMNS: &[&str] =
    &["url", "title", "host", "visit_count", "frecency", "visit_date"];
pub const BOOKMARK_COLUMNS: &[&str] = &["parent_path", "title", "url"];
pub const FRECENCY_COLUMNS: &[&str] = &["url", "title", "frecency"];

pub fn render_csv<R, F>(columns: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = F>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let mut out = columns.join(",");
    out.push('\n');
    for row in rows {
        let fields: Vec<String> = row.into_iter().map(|f| quote_csv_field(f.as_ref())).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn header_then_quoted_rows() {
        let rows = vec![
            vec!["/Dev/".to_string(), "Say \"hi\"".to_string(), "https://x.org/".to_string()],
            vec!["/".to_string(), "plain, comma".to_string(), "https://y.org/".to_string()],
        ];
        let out = render_csv(BOOKMARK_COLUMNS, rows);
        assert_eq!(
            out,
            "parent_path,title,url\n\
             \"/Dev/\",\"Say 'hi'\",\"https://x.org/\"\n\
             \"/\",\"plain, comma\",\"https://y.org/\"\n"
        );
    }

    #[test]
    fn empty_table_is_header_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(render_csv(FRECENCY_COLUMNS, rows), "url,title,frecency\n");
    }
}
