use std::path::PathBuf;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_str(name: &str) -> String {
    fixture(name).display().to_string()
}

/// Split table markup into its `<tr>…</tr>` rows.
pub fn rows(table: &str) -> Vec<&str> {
    table
        .split("<tr>")
        .skip(1)
        .map(|r| r.split("</tr>").next().unwrap_or_default())
        .collect()
}

/// Text of the `<th>` cell of a row.
pub fn row_label(row: &str) -> &str {
    row.split("<th>")
        .nth(1)
        .and_then(|r| r.split("</th>").next())
        .unwrap_or_default()
}
