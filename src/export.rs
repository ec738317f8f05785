//! Tabular export of client records.
//!
//! Renders a search result into downloadable bytes, either CSV or an Excel
//! workbook. The column set is fixed and shared by both encoders; output rows
//! keep the order of the input slice.

use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::dto::client::ClientDto;

/// Column labels used by both encoders, in output order.
pub const EXPORT_HEADERS: [&str; 5] = ["ID", "Shared Key", "Email", "Phone", "Created At"];

/// Render format for `created_at` values; stable and parseable with
/// `NaiveDateTime::parse_from_str`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SHEET_NAME: &str = "Clients";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O failure while encoding: {0}")]
    Io(#[from] std::io::Error),
}

/// Output encoding requested for an export, parsed case-insensitively from
/// the `exportFormat` criteria field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    /// Parses `CSV`/`EXCEL` ignoring case; anything else is unsupported.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CSV" => Some(Self::Csv),
            "EXCEL" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Attachment filename: `clients.` plus the lower-cased format name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "clients.csv",
            Self::Excel => "clients.excel",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Encodes clients per `format` into a downloadable byte buffer.
pub fn encode(format: ExportFormat, clients: &[ClientDto]) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => to_csv(clients),
        ExportFormat::Excel => to_xlsx(clients),
    }
}

/// One header row plus one record per client, timestamps rendered with
/// [`TIMESTAMP_FORMAT`].
pub fn to_csv(clients: &[ClientDto]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;

    for client in clients {
        let created_at = client
            .created_at
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();
        writer.write_record([
            client.id.as_str(),
            client.shared_key.as_str(),
            client.email.as_str(),
            client.phone.as_deref().unwrap_or(""),
            created_at.as_str(),
        ])?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// A single `Clients` sheet; missing phone or timestamp values render as
/// empty cells.
pub fn to_xlsx(clients: &[ClientDto]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row, client) in clients.iter().enumerate() {
        let row = (row + 1) as u32;
        worksheet.write_string(row, 0, &client.id)?;
        worksheet.write_string(row, 1, &client.shared_key)?;
        worksheet.write_string(row, 2, &client.email)?;
        if let Some(phone) = &client.phone {
            worksheet.write_string(row, 3, phone)?;
        }
        if let Some(created_at) = client.created_at {
            worksheet.write_string(row, 4, created_at.format(TIMESTAMP_FORMAT).to_string())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
