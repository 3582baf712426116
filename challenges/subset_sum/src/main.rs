use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use subset_sum::driver::{self, Algorithm};
use subset_sum::dynamic_programming::min_count_subset_sum::{MinCountSubsetSum, SolverConfig};
use subset_sum::{Result, Writer};

#[derive(Parser)]
#[command(name = "subset_sum")]
#[command(about = "Minimum count subset sum solutions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dynamic Programming problems, input read from stdin
    DynamicProgramming {
        /// Problem name to run
        problem: String,

        /// Run the bundled data cases instead of reading stdin
        #[arg(long)]
        check: bool,
    },
    /// Print the minimum count for Q = 0..=14 over the sample scores
    Demo {
        #[arg(long, value_enum, default_value_t)]
        algorithm: Algorithm,

        /// Largest table (in cells) a single query may allocate
        #[arg(long, default_value_t = SolverConfig::default().max_table_cells)]
        max_table_cells: usize,
    },
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::DynamicProgramming { problem, check } => {
            let tasks = subset_sum::dynamic_programming::tasks();
            if check {
                return tasks.check(&problem);
            }
            tasks.run(&problem)?;
        }
        Commands::Demo {
            algorithm,
            max_table_cells,
        } => {
            let solver = MinCountSubsetSum::with_config(SolverConfig { max_table_cells });
            let mut out = Writer::new();
            driver::demo(&mut out, algorithm, &solver)?;
            print!("{}", out.into_string().unwrap_or_default());
            std::io::stdout().flush()?;
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
