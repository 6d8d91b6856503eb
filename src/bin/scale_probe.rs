use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use knapsack_dp::{solve_knapsack, Item, KnapsackError, KnapsackSolver, KnapsackTable};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const ITEM_COUNTS: &[usize] = &[64, 128, 256, 512, 1024, 2048, 4096, 8192];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!(
        "Solves deterministic item sets of growing size at capacity {}.",
        options.capacity
    );
    eprintln!(
        "Results are checked against the full DP table up to {} items.",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock seconds");
    eprintln!("  • rss_delta_kib: resident memory growth during the run");
    eprintln!("  • status: 'passed' = matches full table, 'not_checked' = above verify limit");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Rolling-row solver...");
    measurements.extend(run_scenario("rolling_row", &options, &mut sys, |items, cap| {
        solve_knapsack(items, cap)
    }));
    eprintln!();

    eprintln!("[2/3] Layered engine with selection...");
    let solver = KnapsackSolver::default();
    measurements.extend(run_scenario("layered_engine", &options, &mut sys, |items, cap| {
        solver.solve_with_selection(items, cap).map(|sol| sol.value)
    }));
    eprintln!();

    eprintln!("[3/3] Full table (verify-limited)...");
    let small = Options {
        max_items: options.verify_limit,
        ..options
    };
    measurements.extend(run_scenario("full_table", &small, &mut sys, |items, cap| {
        KnapsackTable::build(items, cap).map(|t| t.best_value())
    }));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

#[derive(Clone, Copy)]
struct Options {
    format: OutputFormat,
    verify_limit: usize,
    capacity: i64,
    max_items: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut opts = Options {
            format: OutputFormat::Csv,
            verify_limit: 512,
            capacity: 1_000,
            max_items: usize::MAX,
        };

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) => (f.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => opts.format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => {
                    opts.verify_limit = value("--verify-limit")?
                        .parse()
                        .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
                }
                "--capacity" => {
                    opts.capacity = value("--capacity")?
                        .parse()
                        .map_err(|_| "capacity must be an integer".to_string())?;
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(opts)
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest item count checked against the full table (default: 512)
  --capacity <C>                Weight budget for every run (default: 1000)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --capacity 5000
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_scenario<F>(
    scenario: &'static str,
    options: &Options,
    sys: &mut System,
    solve: F,
) -> Vec<Measurement>
where
    F: Fn(&[Item], i64) -> Result<u64, KnapsackError>,
{
    let counts: Vec<usize> = ITEM_COUNTS
        .iter()
        .copied()
        .filter(|&n| n <= options.max_items)
        .collect();
    let total = counts.len();

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, n)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, total, n);
            let items = deterministic_items(n);
            let mut best = 0u64;
            let m = measure(scenario, format!("n={n},cap={}", options.capacity), sys, || {
                let got = match solve(&items, options.capacity) {
                    Ok(v) => v,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                best = got;
                if n > options.verify_limit {
                    return (VerificationStatus::NotChecked, None);
                }
                match KnapsackTable::build(&items, options.capacity) {
                    Ok(t) if t.best_value() == got => (VerificationStatus::Passed, None),
                    Ok(t) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {}, got {got}", t.best_value())),
                    ),
                    Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
                }
            });
            eprintln!(
                "{} best={}, time={:.3}s, status={}",
                m.status.icon(),
                best,
                m.wall_s,
                m.status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |s: VerificationStatus| measurements.iter().filter(|m| m.status == s).count();
    let failed = count(VerificationStatus::Failed);
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {}", count(VerificationStatus::Passed));
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (n > {}): {}",
        options.verify_limit,
        count(VerificationStatus::NotChecked)
    );
    eprintln!();

    for m in measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
    {
        eprintln!(
            "  ✗ {} ({}): {}",
            m.scenario,
            m.size_desc,
            m.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: runs={}, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB", ms.len());
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!("{:-<col1$}  {:-<col2$}  {:-<10}  {:-<14}  {:-<12}  {:-<6}", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref() {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Items with spread-out weights and values, identical on every run.
fn deterministic_items(n: usize) -> Vec<Item> {
    (0..n as i64)
        .map(|k| Item::new(1 + (k * 37) % 97, 1 + (k * 53) % 211))
        .collect()
}
