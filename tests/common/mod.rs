use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes an operations CSV with the given `(type, amount)` rows.
pub fn write_operations(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "amount"])?;
    for (kind, amount) in rows {
        wtr.write_record([kind, amount])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `count` deposits of one unit each.
pub fn write_deposits(path: &Path, count: usize) -> Result<(), Error> {
    let rows: Vec<(&str, &str)> = (0..count).map(|_| ("deposit", "1")).collect();
    write_operations(path, &rows)
}
