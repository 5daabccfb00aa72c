use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::{ensure, Result, WrapErr};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::{self, fmt::format::FmtSpan, prelude::*, EnvFilter, Layer, Registry};

use naive_fib::benches::analysis;
use naive_fib::benches::bench::{benchmarks, BenchType};
use naive_fib::benches::report::{HostInfo, Report};
use naive_fib::benches::runner::{
    randomized_interleaved_execution, summarize, RunConfig, DEFAULT_ITERATIONS, DEFAULT_MAX_N,
    DEFAULT_N,
};
use naive_fib::fib::MAX_I64_INDEX;

/// Naive recursive Fibonacci, plain and with a redundant helper call per node.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the n-th term computed by one variant
    Eval(EvalArgs),
    /// Time both variants with randomized interleaved execution
    Bench(BenchArgs),
    /// Run one variant under the selected tracing layers
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Variant to evaluate
    #[clap(long, value_enum, default_value_t = BenchType::Fib)]
    variant: BenchType,

    /// Index of the term
    #[clap(allow_negative_numbers = true)]
    n: i64,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// Variants to run; defaults to all of them
    #[clap(long, value_enum, num_args = 1..)]
    bench: Vec<BenchType>,

    /// Index of the term
    #[clap(short, long, env = "NAIVE_FIB_N", default_value_t = DEFAULT_N, allow_hyphen_values = true)]
    n: i64,

    /// Number of shuffled rounds
    #[clap(short, long, env = "NAIVE_FIB_ITERATIONS", default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Largest accepted n
    #[clap(long, env = "NAIVE_FIB_MAX_N", default_value_t = DEFAULT_MAX_N)]
    max_n: i64,

    /// Seed for the round order
    #[clap(long, env = "NAIVE_FIB_SEED")]
    seed: Option<u64>,

    /// Report variant disagreements as an error rate instead of failing
    #[clap(long, env = "NAIVE_FIB_RECORD_MISMATCHES")]
    record_mismatches: bool,

    /// Print the report as JSON instead of `go test -bench` lines
    #[clap(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Output formats
    #[clap(short, long, value_enum)]
    format: Option<Vec<Format>>,

    /// Variant to trace
    #[clap(long, value_enum)]
    name: BenchType,

    /// Index of the term
    #[clap(short, long, env = "NAIVE_FIB_N", default_value_t = DEFAULT_N, allow_hyphen_values = true)]
    n: i64,

    /// Largest accepted n
    #[clap(long, env = "NAIVE_FIB_MAX_N", default_value_t = DEFAULT_MAX_N)]
    max_n: i64,
}

#[derive(Debug, Clone, ValueEnum, PartialEq)]
enum Format {
    Default,
    Chrome,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Eval(args) => {
            init_logging();
            eval(args)
        }
        Commands::Bench(args) => {
            init_logging();
            bench(args)
        }
        Commands::Trace(args) => trace(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn log_layer() -> BoxedLayer {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter)
        .boxed()
}

fn init_logging() {
    tracing_subscriber::registry().with(log_layer()).init();
}

fn eval(args: EvalArgs) -> Result<()> {
    ensure!(
        args.n <= MAX_I64_INDEX,
        "fib({}) does not fit in an i64; the largest supported index is {MAX_I64_INDEX}",
        args.n
    );
    debug!(variant = ?args.variant, n = args.n, "evaluating");
    println!("{}", args.variant.eval(args.n));
    Ok(())
}

fn bench(args: BenchArgs) -> Result<()> {
    let config = RunConfig {
        n: args.n,
        iterations: args.iterations,
        max_n: args.max_n,
        seed: args.seed,
        record_mismatches: args.record_mismatches,
    };
    let benches = if args.bench.is_empty() {
        BenchType::ALL.to_vec()
    } else {
        args.bench
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(n = config.n, iterations = config.iterations, "running benchmarks");
    let samples = randomized_interleaved_execution(&benches, &config, &mut rng)
        .wrap_err("benchmark run failed")?;

    let mut metrics = summarize(&samples);
    if let Some(comparison) =
        analysis::compare(&samples, BenchType::Fib, BenchType::Fib2, &mut rng)
    {
        info!(
            lower = comparison.ci_lower,
            upper = comparison.ci_upper,
            significant = comparison.significant,
            "fib2/fib latency ratio, {:.0}% bootstrap interval",
            analysis::CONFIDENCE * 100.0
        );
        metrics.extend(comparison.to_metrics());
    }

    let report = Report {
        host: HostInfo::collect(),
        n: config.n,
        iterations: config.iterations,
        metrics,
    };
    if args.json {
        println!("{}", report.to_json().wrap_err("could not serialize report")?);
    } else {
        print!("{}", report.to_go_lines());
    }
    Ok(())
}

fn trace(args: TraceArgs) -> Result<()> {
    RunConfig {
        n: args.n,
        max_n: args.max_n,
        ..Default::default()
    }
    .validate()
    .wrap_err("refusing to trace")?;

    let formats = args.format.unwrap_or_default();
    let (layers, guard) = trace_layers(&formats);
    tracing_subscriber::registry().with(layers).init();
    if guard.is_some() {
        info!("Running tracing-chrome. Files will be saved as trace-<some timestamp>.json and can be viewed in https://ui.perfetto.dev/");
    }

    for (span, bench) in benchmarks(args.name, args.n) {
        span.in_scope(|| {
            bench();
            info!("Bench Complete");
        });
    }
    // Flushes the chrome trace.
    drop(guard);
    Ok(())
}

fn trace_layers(formats: &[Format]) -> (Vec<BoxedLayer>, Option<FlushGuard>) {
    let mut layers = vec![log_layer()];
    if formats.contains(&Format::Default) {
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .compact()
                .with_target(false)
                .boxed(),
        );
    }

    let guard = formats.contains(&Format::Chrome).then(|| {
        let (chrome_layer, guard) = ChromeLayerBuilder::new().include_args(true).build();
        layers.push(chrome_layer.boxed());
        guard
    });
    (layers, guard)
}
