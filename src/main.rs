mod report;

use clap::Parser;
use datefacet::{Context, Options, Trace, decades_with, extract_verbose, years_with};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Turn free-text bibliographic dates into decade or year facets.
///
/// All dates given in one invocation are treated as the dates of one record.
#[derive(Parser, Debug)]
#[command(name = "datefacet", version)]
struct Cli {
    /// Date strings. If omitted, one date per non-empty line of stdin.
    dates: Vec<String>,

    /// Emit year facets instead of decade facets.
    #[arg(long)]
    years: bool,

    /// Fill every value between the earliest and latest date.
    #[arg(long, env = "DATEFACET_SPANNING")]
    spanning: bool,

    /// Print the result as JSON.
    #[arg(long, conflicts_with = "trace")]
    json: bool,

    /// Print how every date string was read.
    #[arg(long)]
    trace: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Log extraction stages to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    granularity: &'static str,
    disjoint: bool,
    facets: &'a BTreeSet<i32>,
    sort_facet: Option<i32>,
    extracted: Vec<datefacet::Years>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "datefacet=debug" } else { "datefacet=warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let dates = if cli.dates.is_empty() { read_stdin_dates()? } else { cli.dates.clone() };
    if dates.is_empty() {
        tracing::warn!("no date strings given");
    }

    let context = Context::default();
    let options = Options { disjoint: !cli.spanning };

    let facets =
        if cli.years { years_with(&dates, &context, &options) } else { decades_with(&dates, &context, &options) };

    if cli.trace {
        let trace: Trace = extract_verbose(&dates, &context);
        let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
        report::print_run(&trace, &facets, cli.years, color);
        return Ok(());
    }

    if cli.json {
        let output = JsonOutput {
            granularity: if cli.years { "year" } else { "decade" },
            disjoint: options.disjoint,
            facets: &facets,
            sort_facet: facets.first().copied(),
            extracted: extract_verbose(&dates, &context).years().into_iter().collect(),
        };
        let json = serde_json::to_string_pretty(&output).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    for facet in &facets {
        println!("{facet}");
    }
    Ok(())
}

fn read_stdin_dates() -> io::Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
}
