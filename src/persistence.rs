//! Flat-file storage for a [`Ledger`].
//!
//! Every record is one line holding four space separated fields:
//!
//! ```text
//! 2024/01/05 income salary 1250.50
//! ```
//!
//! There is no header and no escaping, so a category containing whitespace
//! will not survive a save and reload.

use crate::engine::{Ledger, Transaction};
use crate::errors::PersistenceError;
use csv::QuoteStyle;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// File used when no other path is configured.
pub const DEFAULT_LEDGER_FILE: &str = "transactions.txt";

#[derive(Serialize)]
struct Record<'a> {
    date: &'a str,
    kind: &'a str,
    category: &'a str,
    amount: String,
}

impl<'a> From<&'a Transaction> for Record<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            date: tx.date(),
            kind: tx.kind().as_str(),
            category: tx.category(),
            amount: format!("{:.2}", tx.amount()),
        }
    }
}

impl Ledger {
    /// Replace the contents of the ledger with the records stored at `path`.
    ///
    /// If the file cannot be opened the ledger is left as it was. Once it is
    /// open the ledger is emptied, then records are appended until the end of
    /// the file or the first incomplete or unparseable record. Returns the
    /// number of records read.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PersistenceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.read_from(BufReader::new(file))?;
        info!(path = %path.display(), count, "loaded ledger");
        Ok(count)
    }

    /// Write every transaction to `path`, truncating whatever was there.
    /// Returns the number of records written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PersistenceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.write_to(file)?;
        info!(path = %path.display(), count, "saved ledger");
        Ok(count)
    }

    /// Reset the ledger and stream whitespace separated records from
    /// `reader` into it.
    pub fn read_from<R: Read>(&mut self, mut reader: R) -> Result<usize, PersistenceError> {
        self.clear();

        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(PersistenceError::Read)?;

        // Bytes that are not UTF-8 become U+FFFD inside their token.
        let contents = String::from_utf8_lossy(&bytes);

        let mut tokens = contents.split_whitespace();
        loop {
            let (date, kind, category, amount) =
                match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
                    (Some(date), Some(kind), Some(category), Some(amount)) => {
                        (date, kind, category, amount)
                    }
                    (None, ..) => break,
                    _ => {
                        warn!(read = self.size(), "ledger file ends with an incomplete record");
                        break;
                    }
                };

            let amount: f64 = match amount.parse() {
                Ok(amount) => amount,
                Err(_) => {
                    warn!(read = self.size(), amount, "stopped reading at malformed amount");
                    break;
                }
            };

            self.add_transaction(Transaction::new(date, kind, category, amount));
        }

        debug!(count = self.size(), categories = self.categories().len(), "read records");
        Ok(self.size())
    }

    /// Serialize every transaction to `writer`, one record per line.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<usize, PersistenceError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(writer);

        for tx in self.transactions() {
            wtr.serialize(Record::from(tx))?;
        }
        wtr.flush().map_err(|err| PersistenceError::Write(err.into()))?;

        Ok(self.size())
    }
}
