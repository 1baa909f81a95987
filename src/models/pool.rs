use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{GenerationError, Result};

/// Ordered set of candidate identifiers the selector draws from.
///
/// Order matters: the Beta-weighted selector favours the middle of the
/// sequence, so shuffling the pool changes which identifiers dominate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierPool {
    identifiers: Vec<String>,
}

impl IdentifierPool {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a proxy list with one `host:port` entry per line, keeping the host.
    pub fn from_proxy_list(text: &str) -> Self {
        let mut skipped = 0usize;
        let identifiers: Vec<String> = text
            .lines()
            .filter_map(|line| {
                let host = line.split(':').next().unwrap_or_default().trim();
                if host.is_empty() {
                    skipped += 1;
                    None
                } else {
                    Some(host.to_string())
                }
            })
            .collect();

        if skipped > 0 {
            warn!(skipped, "Dropped blank entries from proxy list");
        }
        debug!(count = identifiers.len(), "Parsed proxy list");

        Self { identifiers }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(Self::from_proxy_list(&text))
    }

    /// Writes the pool as a headerless one-column CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for identifier in &self.identifiers {
            csv_writer.write_record([identifier])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = fs::File::create(path.as_ref())?;
        self.write_csv(file)
    }

    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.identifiers.is_empty() {
            return Err(GenerationError::EmptyPool);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.identifiers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.iter().any(|id| id == identifier)
    }
}

impl<S: Into<String>> FromIterator<S> for IdentifierPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
