use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dimacs_front::{DimacsParser, HeaderRule, ParserConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Read a DIMACS CNF file into a formula")]
struct Args {
    /// Path to the CNF file
    path: PathBuf,

    /// Skip `c` comments and start clause data at the `p cnf` line
    #[arg(long)]
    conventional: bool,

    /// Write the parsed formula back out in DIMACS form
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let header = if args.conventional {
        HeaderRule::Conventional
    } else {
        HeaderRule::NumericTrigger
    };
    let parser = DimacsParser::new(ParserConfig { header });

    match parser.get_formula(&args.path) {
        Ok(formula) => {
            if args.print {
                print!("{formula}");
            } else {
                println!(
                    "c {} clauses over {} variables",
                    formula.len(),
                    formula.num_vars()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to read {}: {e}", args.path.display());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
