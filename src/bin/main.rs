use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use clap::error::ErrorKind as ArgumentErrorKind;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fourier_motzkin::algorithm::DecideFeasibility;
use fourier_motzkin::algorithm::error::{Error, ErrorKind};
use fourier_motzkin::algorithm::fourier_motzkin::Config;
use fourier_motzkin::data::linear_program::LinearProgram;
use fourier_motzkin::data::linear_program::elements::ConstraintType;
use fourier_motzkin::data::linear_program::solution::Certificate;
use fourier_motzkin::io::import;

/// Decide feasibility of a system of linear inequalities by Fourier-Motzkin elimination.
///
/// Prints a satisfying assignment, or "empty" followed by Farkas multipliers proving that no
/// assignment exists.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// How to print the result
    #[arg(long, value_enum, default_value_t = Format::Certificate)]
    format: Format,
    /// Remove dominated constraints after each elimination step
    #[arg(long)]
    prune: bool,
    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    /// The assignment, or "empty" followed by the multipliers
    Certificate,
    /// The assignment, or "INFEASIBLE"
    Value,
}

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(error) => {
            // Usage errors go to stderr, help and version to stdout
            let _ = error.print();
            return match error.kind() {
                ArgumentErrorKind::DisplayHelp | ArgumentErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        },
    };

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("internal error: failed to set tracing subscriber: {}", error);
        return ExitCode::FAILURE;
    }

    info!(path = %opts.problem_file.display(), "reading problem file");
    let program: LinearProgram<f64> = match import(&opts.problem_file) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        },
    };

    let counts = program.constraint_type_counts();
    info!(
        nr_variables = program.nr_variables(),
        nr_constraints = program.nr_constraints(),
        less = counts[ConstraintType::Less],
        greater = counts[ConstraintType::Greater],
        equal = counts[ConstraintType::Equal],
        "read problem"
    );

    let config = Config { prune: opts.prune };
    match program.decide_feasibility(&config) {
        Ok(certificate) => {
            info!(feasible = certificate.is_feasible(), "decided feasibility");
            println!("{}", render(&certificate, opts.format));
            ExitCode::SUCCESS
        },
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        },
    }
}

fn render(certificate: &Certificate<f64>, format: Format) -> String {
    match format {
        Format::Certificate => certificate.to_string(),
        Format::Value => certificate.value_only(),
    }
}

fn report(error: &Error) {
    match error.kind() {
        ErrorKind::User => eprintln!("error: {}", error),
        ErrorKind::Internal => eprintln!("internal error: {}", error),
    }
}
