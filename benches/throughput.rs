use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use holder_ledger::{run, run_async};
use std::io;
use tokio::runtime::Runtime;

const INPUT: &str = "data/10_holders.csv";
const OPERATIONS: u64 = 420;

struct NoopWriter;

impl io::Write for NoopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn replay_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(OPERATIONS));

    group.bench_function("sync_replay_10_holders", |b| {
        b.iter(|| run(INPUT, NoopWriter).unwrap());
    });

    group.bench_function("async_replay_10_holders", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt)
            .iter(|| async { run_async(INPUT, NoopWriter).await.unwrap() });
    });

    group.finish();
}

criterion_group!(benches, replay_operations);
criterion_main!(benches);
