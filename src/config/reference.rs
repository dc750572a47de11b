//! Static reference data: the branch list, manager roster, and expense
//! categories offered by the form.
//!
//! A deployment can override the built-in lists with a `config.toml`; a
//! missing file just means the defaults apply. The lists are display/choice
//! data only - nothing in the derivation engine reads them.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// The three choice lists the editing surface offers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub branches: Vec<String>,
    pub managers: Vec<String>,
    pub expense_categories: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            branches: to_strings(&[
                "[B1021]Al HAIR - HR",
                "[B1001]CENTRAL STORE - CS",
                "[B1002]AZIZIA - AZ",
                "[B1003]OLD SHOP - OS",
                "[B1004]NEW SHOP - NS",
                "[B1005]RABWA - RA",
                "[B1006]ATIKA - AT",
                "[B1007]DAR AL BAIDA - DB",
            ]),
            managers: to_strings(&[
                "MOHAMMED FAYIS KARAPARAMBIL",
                "SHAMEER ELAMBILATTU",
                "HARIS KORAKKOTTIL HAMSA",
                "ASHMIN ALI ALIYARRAWTHER",
                "ABDUL MUNEER KOZHIKKODAN",
                "MUHAMMED SHAFI KANNITHODIYIL",
            ]),
            expense_categories: to_strings(&[
                "Printing & Stationery (S&D)",
                "Drinking Water Expense",
                "Miscellaneous Expenses",
                "Medical Expenses (S&D)",
                "Tea Expense",
                "Travelling Expenses (S&D)",
                "Staff Mess /Food Expenses (S&D)",
                "Telephone/Mobile Bills (S&D)",
                "Petrol - Forklift",
            ]),
        }
    }
}

impl ReferenceData {
    /// True when the branch name is one of the configured branches.
    #[must_use]
    pub fn knows_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b == name)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Loads reference data from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceData> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading reference data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| {
        Error::Config(format!("Failed to read reference file {path_ref:?}: {e}"))
    })?;
    toml::from_str(&contents).map_err(|e| {
        Error::Config(format!("Failed to parse TOML from reference file {path_ref:?}: {e}"))
    })
}
