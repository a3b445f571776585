//! Console formatting of a catalog: JSON, Table, and Markdown output.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, CatalogRow};

/// Header of the title column.
pub const TITLE_HEADER: &str = "Title";
/// Header of the link column.
pub const LINK_HEADER: &str = "GitHub Link";

/// Output format for a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Json,
    Table,
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!(
                "unknown format '{other}' (expected xlsx, json, table, or markdown)"
            )),
        }
    }
}

/// Format a catalog for the console.
///
/// [`OutputFormat::Xlsx`] is written to disk by [`crate::xlsx::write_xlsx`];
/// here it falls back to the table layout.
#[must_use]
pub fn format_catalog(catalog: &Catalog, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(catalog),
        OutputFormat::Table | OutputFormat::Xlsx => format_table(catalog),
        OutputFormat::Markdown => format_markdown(catalog),
    }
}

fn format_json(catalog: &Catalog) -> String {
    serde_json::to_string_pretty(catalog).unwrap_or_else(|_| "{}".to_string())
}

fn cells(row: &CatalogRow) -> [&str; 2] {
    [row.title.as_str(), row.link.as_str()]
}

fn format_table(catalog: &Catalog) -> String {
    if catalog.rows.is_empty() {
        return "(no titled notes)".to_string();
    }

    let headers = [TITLE_HEADER, LINK_HEADER];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &catalog.rows {
        for (i, cell) in cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();

    let header: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    output.push_str(header.join(" | ").trim_end());
    output.push('\n');

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    for row in &catalog.rows {
        let vals: Vec<String> = cells(row)
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect();
        output.push_str(vals.join(" | ").trim_end());
        output.push('\n');
    }

    output
}

fn escape_markdown_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn format_markdown(catalog: &Catalog) -> String {
    if catalog.rows.is_empty() {
        return "*No titled notes*\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("| {TITLE_HEADER} | {LINK_HEADER} |\n"));
    output.push_str("| --- | --- |\n");

    for row in &catalog.rows {
        output.push_str(&format!(
            "| {} | [{}]({}) |\n",
            escape_markdown_cell(&row.title),
            escape_markdown_cell(&row.file_name),
            row.link
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::link_for;

    fn sample_catalog() -> Catalog {
        let rows: Vec<CatalogRow> = ["01-Intro.md", "02-Layouts.md"]
            .iter()
            .map(|name| CatalogRow {
                title: crate::catalog::title_without_prefix(name),
                link: link_for("https://example.org/", name),
                file_name: name.to_string(),
            })
            .collect();
        Catalog { total: 2, rows }
    }

    #[test]
    fn format_as_json() {
        let output = format_catalog(&sample_catalog(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["rows"][0]["title"], "Intro");
        assert_eq!(parsed["rows"][1]["link"], "https://example.org/02-Layouts.md");
    }

    #[test]
    fn format_as_table() {
        let output = format_catalog(&sample_catalog(), OutputFormat::Table);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Title"));
        assert!(lines[0].contains("GitHub Link"));
        assert!(lines[1].contains("-+-"));
        assert!(lines[2].starts_with("Intro  "));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn format_as_markdown() {
        let output = format_catalog(&sample_catalog(), OutputFormat::Markdown);
        assert!(output.starts_with("| Title | GitHub Link |\n| --- | --- |\n"));
        assert!(output.contains("| Intro | [01-Intro.md](https://example.org/01-Intro.md) |\n"));
    }

    #[test]
    fn format_empty_catalog() {
        let empty = Catalog::default();
        assert_eq!(
            format_catalog(&empty, OutputFormat::Table),
            "(no titled notes)"
        );
        assert_eq!(
            format_catalog(&empty, OutputFormat::Markdown),
            "*No titled notes*\n"
        );
    }

    #[test]
    fn format_parses_from_flag_values() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
