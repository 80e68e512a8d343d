//! CSV serialisation of transaction lists.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use itex_domain::{category_name, Category, Transaction};

use crate::{CoreError, CoreResult};

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Date",
    "Category",
    "Subcategory",
    "Vendor",
    "Amount",
    "Status",
];

pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

pub struct CsvExporter;

impl CsvExporter {
    /// Header plus one row per transaction, rows joined by `\n` with no
    /// trailing newline. Fields holding a comma, quote or line break are quoted
    /// with inner quotes doubled. An empty list yields the header alone.
    pub fn to_csv(transactions: &[Transaction], categories: &[Category]) -> CoreResult<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS).map_err(export_error)?;
        for txn in transactions {
            let date = txn.date.format("%Y-%m-%d").to_string();
            let amount = txn.amount.to_string();
            let status = txn.status.to_string();
            writer
                .write_record([
                    txn.id.as_str(),
                    date.as_str(),
                    category_name(categories, &txn.category_id),
                    txn.subcategory.as_str(),
                    txn.vendor.as_str(),
                    amount.as_str(),
                    status.as_str(),
                ])
                .map_err(export_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| CoreError::Export(err.to_string()))?;
        let mut text = String::from_utf8(bytes).map_err(|err| CoreError::Export(err.to_string()))?;
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}

/// A ready-to-save export: name, MIME type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    pub fn for_date(date: NaiveDate, contents: String) -> Self {
        Self {
            file_name: Self::file_name_for(date),
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }

    /// `it_expense_export_<YYYY-MM-DD>.csv`
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("it_expense_export_{}.csv", date.format("%Y-%m-%d"))
    }
}

fn export_error(err: csv::Error) -> CoreError {
    CoreError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use itex_domain::{TransactionDraft, TransactionId, TransactionStatus};

    use super::*;

    fn sample(vendor: &str, subcategory: &str) -> Transaction {
        Transaction::from_draft(
            TransactionId::from("1"),
            TransactionDraft::new(
                NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                "computers",
                subcategory,
                vendor,
                25_000.0,
            )
            .with_status(TransactionStatus::Paid),
        )
    }

    #[test]
    fn empty_list_is_header_only() {
        let csv = CsvExporter::to_csv(&[], &[]).unwrap();
        assert_eq!(csv, "ID,Date,Category,Subcategory,Vendor,Amount,Status");
    }

    #[test]
    fn rows_resolve_names_and_escape_fields() {
        let categories = vec![Category::new("computers", "Computers")];
        let csv = CsvExporter::to_csv(
            &[sample("Acme, \"Inc\"", "Laptop\nRefresh")],
            &categories,
        )
        .unwrap();
        let lines: Vec<&str> = csv.splitn(2, '\n').collect();

        assert_eq!(
            lines[1],
            "1,2023-01-15,Computers,\"Laptop\nRefresh\",\"Acme, \"\"Inc\"\"\",25000,Paid"
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn dangling_category_exports_raw_id() {
        let csv = CsvExporter::to_csv(&[sample("Dell", "Laptops")], &[]).unwrap();
        assert!(csv.ends_with("1,2023-01-15,computers,Laptops,Dell,25000,Paid"));
    }

    #[test]
    fn export_file_carries_dated_name() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        let file = ExportFile::for_date(date, "x".into());
        assert_eq!(file.file_name, "it_expense_export_2024-07-04.csv");
        assert_eq!(file.mime_type, "text/csv;charset=utf-8");
    }
}
