use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Storage;
use crate::models::{Budget, Expense};

const EXPENSES_FILE: &str = "expenses.json";
const BUDGET_FILE: &str = "budget.json";
const PARTIAL_SUFFIX: &str = ".tmp";

/// Two JSON documents in one data directory.
pub(crate) struct JsonStore {
    expenses_path: PathBuf,
    budget_path: PathBuf,
}

impl JsonStore {
    pub(crate) fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "opened data directory");
        Ok(Self {
            expenses_path: dir.join(EXPENSES_FILE),
            budget_path: dir.join(BUDGET_FILE),
        })
    }
}

impl Storage for JsonStore {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        let expenses: Vec<Expense> = read_document(&self.expenses_path)?.unwrap_or_default();
        tracing::debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> Result<()> {
        write_document(&self.expenses_path, expenses)?;
        tracing::debug!(count = expenses.len(), "saved expenses");
        Ok(())
    }

    fn load_budget(&self) -> Result<Budget> {
        let budget: Budget = read_document(&self.budget_path)?.unwrap_or_default();
        tracing::debug!(budget = %budget.limit_amount, "loaded budget");
        Ok(budget)
    }

    fn save_budget(&mut self, budget: &Budget) -> Result<()> {
        write_document(&self.budget_path, budget)?;
        tracing::debug!(budget = %budget.limit_amount, "saved budget");
        Ok(())
    }
}

/// `Ok(None)` when the file does not exist yet.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "document not found, using empty state");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };
    let value = serde_json::from_slice(&data)
        .with_context(|| format!("Malformed document: {}", path.display()))?;
    Ok(Some(value))
}

/// Serialize with four-space indentation into a sibling temp file, then
/// rename it over `path` so readers never see a partial document.
fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp)
        .with_context(|| format!("Failed to create {}", tmp.display()))?;
    file.write_all(&buf)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync {}", tmp.display()))?;
    drop(file);
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

fn tmp_path(final_path: &Path) -> PathBuf {
    let mut s = OsString::from(final_path.as_os_str());
    s.push(PARTIAL_SUFFIX);
    PathBuf::from(s)
}
