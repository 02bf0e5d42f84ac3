// src/export/csv.rs
//! Plaintext CSV in both directions
//!
//! Export writes English headers; import additionally understands the
//! Chinese headers written by older exports, so those files load as-is.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{info, warn};

use crate::error::Result;
use crate::manager::VaultManager;
use crate::records::CredentialRecord;

/// Column order, shared by both directions
const HEADERS: [&str; 6] = [
    "product_name",
    "account",
    "password",
    "email",
    "phone",
    "remark",
];

/// Export every record, sorted by name
///
/// SECURITY WARNING: the output contains every password in cleartext.
/// Returns the number of rows written; the header row is written even
/// for an empty vault.
pub fn export_to_csv<P: AsRef<Path>>(manager: &mut VaultManager, path: P) -> Result<usize> {
    let data = manager.all_records()?;
    write_rows(path.as_ref(), data.into_iter())
}

/// Export only the named records, in the order given
///
/// Names not present in the vault are skipped with a warning.
pub fn export_selected_to_csv<P: AsRef<Path>>(
    manager: &mut VaultManager,
    path: P,
    names: &[String],
) -> Result<usize> {
    let data = manager.all_records()?;
    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        match data.get(name) {
            Some(record) => rows.push((name.clone(), record.clone())),
            None => warn!(record = %name, "not in vault, skipped"),
        }
    }
    write_rows(path.as_ref(), rows.into_iter())
}

/// Outcome of one import run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

/// One rejected CSV row; `row` is 1-based with the header as row 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    pub row: usize,
    pub reason: String,
}

/// Import records from a CSV file
///
/// Per-row accounting instead of all-or-nothing: malformed rows and rows
/// missing a required field land in `errors`, rows whose name is already
/// taken (in the vault or earlier in the same file) are skipped, the rest
/// are inserted in one store write. Text fields are trimmed; passwords
/// are taken verbatim.
pub fn import_from_csv<P: AsRef<Path>>(
    manager: &mut VaultManager,
    path: P,
) -> Result<ImportReport> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;
    let columns = map_columns(reader.headers()?);

    let mut report = ImportReport::default();
    let mut batch = Vec::new();
    let mut queued = BTreeSet::new();

    for (idx, row) in reader.records().enumerate() {
        let row_num = idx + 2; // row 1 is the header
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                report.errors.push(ImportError {
                    row: row_num,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let name = cell(&row, columns.product).trim();
        let account = cell(&row, columns.account).trim();
        let password = cell(&row, columns.password);
        if name.is_empty() || account.is_empty() || password.is_empty() {
            report.errors.push(ImportError {
                row: row_num,
                reason: "product name, account, and password are required".to_string(),
            });
            continue;
        }
        if queued.contains(name) {
            report.skipped += 1;
            continue;
        }
        queued.insert(name.to_string());
        batch.push((
            name.to_string(),
            CredentialRecord {
                account: account.to_string(),
                password: password.to_string(),
                email: cell(&row, columns.email).trim().to_string(),
                phone: cell(&row, columns.phone).trim().to_string(),
                remark: cell(&row, columns.remark).trim().to_string(),
            },
        ));
    }

    let (added, skipped) = manager.add_records(batch)?;
    report.imported = added;
    report.skipped += skipped;
    info!(
        imported = report.imported,
        skipped = report.skipped,
        errors = report.errors.len(),
        "csv import finished"
    );
    Ok(report)
}

#[derive(Debug, Default)]
struct Columns {
    product: Option<usize>,
    account: Option<usize>,
    password: Option<usize>,
    email: Option<usize>,
    phone: Option<usize>,
    remark: Option<usize>,
}

fn map_columns(headers: &StringRecord) -> Columns {
    let mut columns = Columns::default();
    for (idx, raw) in headers.iter().enumerate() {
        // utf-8-sig exports carry a BOM on the first header
        let name = raw.trim_start_matches('\u{feff}').trim();
        let slot = match name {
            "product_name" | "product" | "产品名称" => &mut columns.product,
            "account" | "账号" => &mut columns.account,
            "password" | "密码" => &mut columns.password,
            "email" | "邮箱" => &mut columns.email,
            "phone" | "手机号" => &mut columns.phone,
            "remark" | "备注" => &mut columns.remark,
            _ => continue,
        };
        slot.get_or_insert(idx);
    }
    columns
}

fn cell<'a>(row: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).unwrap_or("")
}

fn write_rows<I>(path: &Path, rows: I) -> Result<usize>
where
    I: Iterator<Item = (String, CredentialRecord)>,
{
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(HEADERS)?;
    let mut count = 0;
    for (name, record) in rows {
        writer.write_record([
            name.as_str(),
            record.account.as_str(),
            record.password.as_str(),
            record.email.as_str(),
            record.phone.as_str(),
            record.remark.as_str(),
        ])?;
        count += 1;
    }
    writer.flush()?;
    warn!(
        rows = count,
        path = %path.display(),
        "plaintext export written, protect or delete it"
    );
    Ok(count)
}
