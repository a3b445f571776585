//! Spreadsheet output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use mdnum_core::error::{MdnumError, Result};

use crate::catalog::Catalog;
use crate::formatter::{LINK_HEADER, TITLE_HEADER};

/// Default spreadsheet file name, created inside the notes directory.
pub const DEFAULT_OUTPUT: &str = "md_links.xlsx";
/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Markdown Files";

fn export_error(err: XlsxError) -> MdnumError {
    MdnumError::Export(err.to_string())
}

/// Write `catalog` as a two-column workbook: a header row, then one row
/// per note with a clickable link.
///
/// # Errors
///
/// Returns [`MdnumError::Export`] if the workbook cannot be built or saved.
pub fn write_xlsx(catalog: &Catalog, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(export_error)?;
    sheet
        .write_string_with_format(0, 0, TITLE_HEADER, &header)
        .map_err(export_error)?;
    sheet
        .write_string_with_format(0, 1, LINK_HEADER, &header)
        .map_err(export_error)?;

    for (row, entry) in (1u32..).zip(&catalog.rows) {
        sheet.write_string(row, 0, &entry.title).map_err(export_error)?;
        sheet
            .write_url_with_text(row, 1, entry.link.as_str(), &entry.link)
            .map_err(export_error)?;
    }
    sheet.set_column_width(0, 48.0).map_err(export_error)?;
    sheet.set_column_width(1, 80.0).map_err(export_error)?;

    workbook.save(path).map_err(export_error)?;
    info!(path = %path.display(), rows = catalog.rows.len(), "saved spreadsheet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{link_for, CatalogRow};

    #[test]
    fn writes_a_zip_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        let catalog = Catalog {
            rows: vec![CatalogRow {
                title: "Intro".to_string(),
                link: link_for("https://example.org/", "01-Intro.md"),
                file_name: "01-Intro.md".to_string(),
            }],
            total: 1,
        };

        write_xlsx(&catalog, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_catalog_still_gets_header_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_xlsx(&Catalog::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        let err = write_xlsx(&Catalog::default(), &path).unwrap_err();
        assert!(matches!(err, MdnumError::Export(_)));
    }
}
