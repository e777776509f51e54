use crate::domain::operation::Operation;
use crate::error::{AccountError, Result};
use std::io::Read;

/// Reads scripted operations from a CSV source with a `type, amount` header.
///
/// Whitespace around fields is trimmed and short or long records are passed
/// on to deserialization instead of aborting the whole stream.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a new `OperationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    ///
    /// A malformed row yields an error item; subsequent rows are still read.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AccountError::from))
    }
}
