use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::{
    csv_utils::{read_csv_into_iter, write_csv},
    dto::{BalanceRow, Operation},
    Engine,
};

/// Replays the operations in the given input file and writes final balances to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `writer` - Where to write the holder balances (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut engine = Engine::new();
    let mut rejected = 0usize;

    let operations_iter = read_csv_into_iter::<Operation, _>(input_path)?;
    for operation in operations_iter {
        // CSV parsing errors are critical - propagate them
        let operation = operation?;
        // Rejected operations are logged by the engine and skipped
        if engine.process_operation(operation).is_err() {
            rejected += 1;
        }
    }

    let mut balances: Vec<_> = engine.registry().accounts().map(BalanceRow::from).collect();
    balances.sort_by(|a, b| a.holder.cmp(&b.holder));
    info!(accounts = balances.len(), rejected, "replay finished");

    write_csv(writer, balances.into_iter())?;
    Ok(())
}
