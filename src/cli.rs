//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_adapter::{write_ticks_csv, CsvTickSource};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::markdown_report::{tables, MarkdownReportAdapter};
use crate::adapters::random_walk::RandomWalkSource;
use crate::domain::benchmark::{run_benchmark, BenchmarkConfig, MeasurementRecord};
use crate::domain::config_validation::{
    self, validate_benchmark_config, validate_data_config, DataSourceKind,
};
use crate::domain::error::TickbenchError;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::tick_port::TickSource;

pub const DEFAULT_OUTPUT_DIR: &str = "report";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "tickbench", about = "Naive vs windowed moving-average benchmark")]
pub struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the benchmark and write the report
    Bench {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(short, long)]
        window_size: Option<usize>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Write synthetic random-walk ticks to a CSV file
    Generate {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        rows: usize,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let log_level = cli.log_level.as_deref();
    let result = match cli.command {
        Command::Bench {
            config,
            output_dir,
            window_size,
            dry_run,
        } => load_config(&config).and_then(|adapter| {
            init_logging(log_level, &adapter);
            if dry_run {
                run_dry_run(&adapter, window_size)
            } else {
                run_bench(&adapter, window_size, output_dir.as_deref())
            }
        }),
        Command::Generate {
            config,
            rows,
            output,
        } => {
            let adapter = match config {
                Some(path) => load_config(&path),
                None => FileConfigAdapter::from_string(""),
            };
            adapter.and_then(|adapter| {
                init_logging(log_level, &adapter);
                run_generate(&adapter, rows, &output)
            })
        }
        Command::Validate { config } => load_config(&config).and_then(|adapter| {
            init_logging(log_level, &adapter);
            run_dry_run(&adapter, None)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` wins, then the
/// `--log-level` flag, then `[logging] level`.
pub fn init_logging(cli_level: Option<&str>, config: &dyn ConfigPort) {
    let level = cli_level
        .map(str::to_string)
        .or_else(|| config.get_string("logging", "level"))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second install (tests, repeated runs) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, TickbenchError> {
    FileConfigAdapter::from_file(path)
}

pub fn build_benchmark_config(
    adapter: &dyn ConfigPort,
    window_override: Option<usize>,
) -> Result<BenchmarkConfig, TickbenchError> {
    validate_benchmark_config(adapter)?;

    let window_size = match window_override {
        Some(0) => return Err(TickbenchError::InvalidWindowSize(0)),
        Some(k) => k,
        None => config_validation::window_size(adapter)?,
    };

    Ok(BenchmarkConfig {
        sizes: config_validation::sizes(adapter)?,
        window_size,
        strategies: config_validation::strategies(adapter)?,
    })
}

pub fn build_random_walk(adapter: &dyn ConfigPort) -> Result<RandomWalkSource, TickbenchError> {
    Ok(RandomWalkSource {
        symbol: config_validation::symbol(adapter)?,
        start_price: config_validation::start_price(adapter)?,
        volatility: config_validation::volatility(adapter)?,
        seed: config_validation::seed(adapter)?,
        start: config_validation::walk_start(adapter)?,
    })
}

pub fn build_tick_source(adapter: &dyn ConfigPort) -> Result<Box<dyn TickSource>, TickbenchError> {
    validate_data_config(adapter)?;

    match config_validation::data_source_kind(adapter)? {
        DataSourceKind::Csv => {
            let path = adapter
                .get_string("data", "path")
                .ok_or_else(|| TickbenchError::ConfigMissing {
                    section: "data".into(),
                    key: "path".into(),
                })?;
            info!(path = %path, "reading ticks from CSV");
            Ok(Box::new(CsvTickSource::new(path)))
        }
        DataSourceKind::RandomWalk => {
            let walk = build_random_walk(adapter)?;
            info!(symbol = %walk.symbol, seed = walk.seed, "generating random-walk ticks");
            Ok(Box::new(walk))
        }
    }
}

pub fn resolve_output_dir(override_dir: Option<&Path>, adapter: &dyn ConfigPort) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    adapter
        .get_string("report", "output_dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Replay, summarize on stdout and hand the records to `reporter`.
pub fn run_bench_pipeline(
    source: &dyn TickSource,
    config: &BenchmarkConfig,
    reporter: &dyn ReportPort,
    output_dir: &Path,
) -> Result<Vec<MeasurementRecord>, TickbenchError> {
    info!(
        sizes = ?config.sizes,
        window_size = config.window_size,
        strategies = config.strategies.len(),
        "running benchmark"
    );
    let records = run_benchmark(source, config)?;

    print!("{}", tables::render_console_summary(&records));

    reporter.write(&records, config.window_size, output_dir)?;
    Ok(records)
}

fn run_bench(
    adapter: &FileConfigAdapter,
    window_override: Option<usize>,
    output_override: Option<&Path>,
) -> Result<(), TickbenchError> {
    info!(config = adapter.origin(), "loaded config");
    let config = build_benchmark_config(adapter, window_override)?;
    let source = build_tick_source(adapter)?;
    let output_dir = resolve_output_dir(output_override, adapter);

    run_bench_pipeline(source.as_ref(), &config, &MarkdownReportAdapter, &output_dir)?;
    eprintln!("\nReport written to: {}", output_dir.display());
    Ok(())
}

pub fn run_dry_run(
    adapter: &dyn ConfigPort,
    window_override: Option<usize>,
) -> Result<(), TickbenchError> {
    let config = build_benchmark_config(adapter, window_override)?;
    validate_data_config(adapter)?;
    eprintln!("Config validated successfully");

    let strategies: Vec<&str> = config.strategies.iter().map(|k| k.as_str()).collect();
    let sizes: Vec<String> = config.sizes.iter().map(|s| tables::format_count(*s)).collect();

    eprintln!("\nBenchmark plan:");
    eprintln!("  window_size: {}", config.window_size);
    eprintln!("  sizes:       {}", sizes.join(", "));
    eprintln!("  strategies:  {}", strategies.join(", "));

    match config_validation::data_source_kind(adapter)? {
        DataSourceKind::Csv => {
            let path = adapter.get_string("data", "path").unwrap_or_default();
            eprintln!("  source:      csv ({})", path);
            if !Path::new(&path).exists() {
                warn!(path = %path, "tick file does not exist yet");
            }
        }
        DataSourceKind::RandomWalk => {
            let walk = build_random_walk(adapter)?;
            eprintln!(
                "  source:      random walk ({} from {:.2}, volatility {}, seed {})",
                walk.symbol, walk.start_price, walk.volatility, walk.seed
            );
        }
    }

    eprintln!("\nDry run complete: configuration is valid");
    Ok(())
}

pub fn run_generate(adapter: &dyn ConfigPort, rows: usize, output: &Path) -> Result<(), TickbenchError> {
    validate_data_config(adapter)?;
    let walk = build_random_walk(adapter)?;
    let ticks = walk.generate(rows)?;
    write_ticks_csv(output, &ticks)?;

    info!(rows = ticks.len(), path = %output.display(), "wrote synthetic ticks");
    eprintln!("Wrote {} ticks to {}", ticks.len(), output.display());
    Ok(())
}
