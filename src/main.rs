//! DBSCAN grid point clustering tool
//!
//! Reads integer points (`x y`, one per line), clusters them with DBSCAN and
//! writes `x y label` for every input point, in input order. The label is the
//! cluster id (starting at 1) or -1 for noise.

use clap::Parser;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Read, Write};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, warn};

use grid_dbscan::{ClusterError, Dbscan, Label, Point, PointList};

mod logging;


use logging::{LoggingError, init_logging};

#[derive(Parser, Debug)]
#[command(name = "grid_dbscan")]
#[command(about = "DBSCAN clustering of integer grid points", long_about = None)]
struct Args {
    /// Input file with one `x y` point per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for `x y label` lines (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// DBSCAN epsilon parameter (neighborhood radius on each axis)
    #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
    eps: i32,

    /// DBSCAN minPoints parameter (minimum neighbors of a core point)
    #[arg(short = 'm', long, default_value_t = 2, allow_negative_numbers = true)]
    min_points: i32,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Failures of the command-line tool
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open `{}`: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to create `{}`: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected two integers, found {found} field(s)")]
    MissingCoordinate { line: u64, found: usize },

    #[error("line {line}: `{value}` is not a valid coordinate: {source}")]
    InvalidCoordinate {
        line: u64,
        value: String,
        source: ParseIntError,
    },

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    match init_logging(args.debug)
        .map_err(CliError::from)
        .and_then(|()| run(&args))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "grid_dbscan failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Validates parameters, clusters the input file and writes the labels
fn run(args: &Args) -> Result<(), CliError> {
    // parameters are checked before the input is touched
    let dbscan = Dbscan::new(args.eps, args.min_points)?;

    let file = File::open(&args.input).map_err(|source| CliError::Open {
        path: args.input.clone(),
        source,
    })?;
    let points = read_points(file)?;
    info!(
        points = points.len(),
        input = %args.input.display(),
        eps = args.eps,
        min_points = args.min_points,
        "read points"
    );
    if points.is_empty() {
        warn!(input = %args.input.display(), "no points found in input");
    }

    let clustering = dbscan.cluster(&points);
    info!(
        clusters = clustering.cluster_count(),
        noise = clustering.noise().len(),
        "clustering finished"
    );

    match &args.output {
        None => write_labels(io::stdout().lock(), &points, clustering.labels()),
        Some(path) => {
            let out = File::create(path).map_err(|source| CliError::Create {
                path: path.clone(),
                source,
            })?;
            write_labels(out, &points, clustering.labels())?;
            info!(output = %path.display(), "labels written");
            Ok(())
        }
    }
}

/// Reads points, one `x y` pair per line
///
/// Fields may be separated by any run of whitespace. Blank lines are
/// skipped and fields after the second are ignored.
fn read_points<R: Read>(input: R) -> Result<PointList, CliError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut points = PointList::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();

        match fields[..] {
            [] => continue,
            [x, y, ..] => points.push(Point([
                parse_coordinate(x, line)?,
                parse_coordinate(y, line)?,
            ])),
            [_] => {
                return Err(CliError::MissingCoordinate {
                    line,
                    found: fields.len(),
                });
            }
        }
    }

    Ok(points)
}

fn parse_coordinate(value: &str, line: u64) -> Result<i32, CliError> {
    value
        .parse()
        .map_err(|source| CliError::InvalidCoordinate {
            line,
            value: value.to_owned(),
            source,
        })
}

/// Writes `x y label` for every point, in input order
fn write_labels<W: Write>(output: W, points: &[Point], labels: &[Label]) -> Result<(), CliError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for (point, label) in points.iter().zip(labels) {
        writer.write_record([
            point.x().to_string(),
            point.y().to_string(),
            label.code().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
