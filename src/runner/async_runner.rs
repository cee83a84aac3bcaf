use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{
    csv_utils::write_csv,
    dto::{BalanceRow, Operation},
    Engine,
};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{debug, info};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Replays operations asynchronously and writes final balances to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams operations from the input file and sends them to the processor via channel.
/// * Processor - owns the engine and applies operations until the channel is closed.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(rx));

    reader_handle.await??;
    let (engine, rejected) = processor_handle.await?;

    let mut balances: Vec<_> = engine.registry().accounts().map(BalanceRow::from).collect();
    balances.sort_by(|a, b| a.holder.cmp(&b.holder));
    info!(accounts = balances.len(), rejected, "replay finished");

    write_csv(writer, balances.into_iter())?;
    Ok(())
}

/// Reads and deserializes operations from a CSV file into the channel.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Operation>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Operation>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let operation = result?;
        if tx.send(operation).await.is_err() {
            debug!("processor gone, stopping reader");
            break;
        }
    }
    Ok(())
}

/// Applies operations from the channel. Once the reader hangs up, returns the
/// engine and the number of rejected operations.
async fn process_operations(mut rx: mpsc::Receiver<Operation>) -> (Engine, usize) {
    let mut engine = Engine::new();
    let mut rejected = 0usize;
    while let Some(operation) = rx.recv().await {
        // Rejected operations are logged by the engine and skipped
        if engine.process_operation(operation).is_err() {
            rejected += 1;
        }
    }
    (engine, rejected)
}
