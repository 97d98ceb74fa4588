//! 置換表ベンチマーク
//!
//! 複数スレッドから疑似的な探索トラフィック（probe → write）を流し、
//! 探索ごとの hashfull とスループットを表示する。最後に resize と clear を実行して
//! 空になることを確認する。
//!
//! 使い方:
//!   RUST_LOG=info cargo run -p tools --release --bin tt_bench -- --hash-mb 64 --threads 4
//!   cargo run -p tools --release --bin tt_bench -- --config tt.toml --searches 20

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tt_core::{Bound, Move, SearchGate, TranspositionTable, TtOptions, Value};

#[derive(Parser, Debug)]
#[command(name = "tt_bench")]
#[command(about = "Drive synthetic multi-threaded probe/save traffic through the transposition table")]
struct Cli {
    /// TOML file with `hash_mb` / `threads` (command-line values take precedence)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Table size in MB
    #[arg(long)]
    hash_mb: Option<usize>,

    /// Number of search threads
    #[arg(long)]
    threads: Option<usize>,

    /// Number of simulated searches (generation bumps)
    #[arg(long, default_value_t = 10)]
    searches: usize,

    /// probe/write pairs per thread per search
    #[arg(long, default_value_t = 200_000)]
    probes: usize,

    /// Distinct positions visited per search (consecutive searches overlap by half)
    #[arg(long, default_value_t = 500_000)]
    positions: u64,

    /// Resize to this many MB after the run (defaults to the configured size)
    #[arg(long)]
    resize_mb: Option<usize>,

    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

#[derive(Debug, Default, Clone, Copy)]
struct WorkerStats {
    probes: u64,
    hits: u64,
}

impl std::ops::AddAssign for WorkerStats {
    fn add_assign(&mut self, rhs: Self) {
        self.probes += rhs.probes;
        self.hits += rhs.hits;
    }
}

fn load_options(cli: &Cli) -> Result<TtOptions> {
    let mut opts = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<TtOptions>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => TtOptions::default(),
    };
    if let Some(mb) = cli.hash_mb {
        opts.hash_mb = mb;
    }
    if let Some(threads) = cli.threads {
        opts.threads = threads;
    }
    opts.validate().context("Invalid transposition table options")?;
    Ok(opts)
}

/// 局面番号から64bitキーを作る（splitmix64）
fn position_key(index: u64) -> u64 {
    let mut z = index.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn random_bound(rng: &mut Xoshiro256PlusPlus) -> Bound {
    match rng.random_range(0..3) {
        0 => Bound::Exact,
        1 => Bound::Lower,
        _ => Bound::Upper,
    }
}

fn run_worker(
    tt: &TranspositionTable,
    gate: &SearchGate,
    cli: &Cli,
    search: usize,
    thread_id: usize,
) -> WorkerStats {
    let _guard = gate.begin_search();
    let seed = cli.seed ^ ((search as u64) << 32) ^ thread_id as u64;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let base = search as u64 * (cli.positions / 2);
    let mut stats = WorkerStats::default();

    for _ in 0..cli.probes {
        let key = position_key(base + rng.random_range(0..cli.positions.max(1)));
        let probe = tt.probe(key);
        stats.probes += 1;
        if probe.found {
            stats.hits += 1;
        }

        // 子局面を先読みしてから書き戻す、探索ループの形を真似る
        tt.prefetch(position_key(base + rng.random_range(0..cli.positions.max(1))));

        let depth = rng.random_range(1..20);
        let value = Value::new(rng.random_range(-1000..1000));
        let mv = Move::new(rng.random_range(0..81), rng.random_range(0..81), 0);
        probe.write(key, value, random_bound(&mut rng), depth, mv);
    }

    stats
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.searches == 0 {
        bail!("--searches must be at least 1");
    }

    let opts = load_options(&cli)?;
    let gate = opts.search_gate();

    println!("=== Transposition Table Benchmark ===");
    println!("hash_mb={} threads={} searches={}", opts.hash_mb, opts.threads, cli.searches);

    let alloc_start = Instant::now();
    let mut tt = TranspositionTable::try_new(opts.hash_mb, &gate)
        .with_context(|| format!("Failed to create {}MB transposition table", opts.hash_mb))?;
    println!(
        "entries={} clusters={} large_pages={} alloc+clear={:.1}ms",
        tt.entry_count(),
        tt.cluster_count(),
        tt.uses_large_pages(),
        alloc_start.elapsed().as_secs_f64() * 1000.0
    );
    println!();

    let mut total = WorkerStats::default();
    let run_start = Instant::now();

    for search in 0..cli.searches {
        tt.new_search();
        let start = Instant::now();

        let stats = thread::scope(|s| -> Result<WorkerStats> {
            let handles: Vec<_> = (0..opts.threads.max(1))
                .map(|thread_id| {
                    let (tt, gate, cli) = (&tt, &gate, &cli);
                    s.spawn(move || run_worker(tt, gate, cli, search, thread_id))
                })
                .collect();

            let mut stats = WorkerStats::default();
            for handle in handles {
                stats += handle.join().map_err(|_| anyhow!("search thread panicked"))?;
            }
            Ok(stats)
        })?;

        let elapsed = start.elapsed().as_secs_f64();
        let hit_rate = stats.hits as f64 / stats.probes.max(1) as f64 * 100.0;
        println!(
            "search {:>3}: gen={:>3} probes={} hits={} ({:.1}%) hashfull={:>4} {:.2}Mprobe/s",
            search + 1,
            tt.generation(),
            stats.probes,
            stats.hits,
            hit_rate,
            tt.hashfull(),
            stats.probes as f64 / elapsed.max(f64::EPSILON) / 1e6
        );
        total += stats;
    }

    let elapsed = run_start.elapsed().as_secs_f64();
    println!();
    println!("Total probes: {}", total.probes);
    println!("Total hits:   {}", total.hits);
    println!("Time elapsed: {elapsed:.2}s");

    let resize_mb = cli.resize_mb.unwrap_or(opts.hash_mb);
    let resize_start = Instant::now();
    tt.try_resize(resize_mb, &gate)
        .with_context(|| format!("Failed to resize transposition table to {resize_mb}MB"))?;
    println!(
        "resize to {}MB: entries={} hashfull={} ({:.1}ms)",
        resize_mb,
        tt.entry_count(),
        tt.hashfull(),
        resize_start.elapsed().as_secs_f64() * 1000.0
    );

    // 適当に埋めてから clear して空になることを確認
    for i in 0..10_000 {
        let key = position_key(i);
        tt.probe(key).write(key, Value::ZERO, Bound::Exact, 1, Move::NONE);
    }
    let before = tt.hashfull();
    let clear_start = Instant::now();
    tt.clear(&gate);
    let after = tt.hashfull();
    println!(
        "clear: hashfull {} -> {} ({:.1}ms)",
        before,
        after,
        clear_start.elapsed().as_secs_f64() * 1000.0
    );
    if after != 0 {
        bail!("hashfull after clear should be 0, got {after}");
    }

    log::info!("tt_bench finished");
    Ok(())
}
