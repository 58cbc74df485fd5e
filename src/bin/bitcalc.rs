//! 2-bit adder/subtractor visualizer - command line interface

use bitcalc::{combined_equation, equation, groupings, KMap, Mode, OutputBit, TruthTable};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Print the 32-row truth table (default)
    Table,
    /// Print the Karnaugh maps
    Kmaps,
    /// Print the boolean equations
    Equations,
    /// Evaluate one input word
    Eval,
}

#[derive(Parser, Debug)]
#[command(name = "bitcalc")]
#[command(about = "2-bit adder/subtractor truth table, K-maps, and evaluator", long_about = None)]
#[command(version)]
struct Args {
    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "table")]
    command: Command,

    /// Input word `D A1 A0 B1 B0` for eval, e.g. 10011
    #[arg(value_name = "WORD")]
    word: Option<String>,

    /// Restrict K-maps/equations to one output (C2, C1, or C0)
    #[arg(short = 'b', long = "bit")]
    bit: Option<String>,

    /// Include the grouping legend with each K-map
    #[arg(short = 'g', long = "groups")]
    groups: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let mut out: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let outputs = selected_outputs(args)?;
    let table = TruthTable::generate();

    match args.command {
        Command::Table => write!(out, "{}", table)?,
        Command::Kmaps => {
            for output in outputs {
                let kmap = KMap::project(&table, output);
                writeln!(out, "{}", kmap)?;
                if args.groups {
                    for mode in Mode::ALL {
                        writeln!(out, "Groups (D = {}):", mode.bit() as u8)?;
                        for group in groupings(output, mode) {
                            writeln!(out, "  {}", group.label)?;
                        }
                    }
                    writeln!(out)?;
                }
            }
        }
        Command::Equations => {
            for output in outputs {
                writeln!(out, "{}:", output)?;
                for mode in Mode::ALL {
                    writeln!(
                        out,
                        "  D = {} ({}): {} = {}",
                        mode.bit() as u8,
                        mode.name(),
                        output,
                        equation(output, mode)
                    )?;
                }
                writeln!(out, "  Combined: {}", combined_equation(output))?;
                writeln!(out)?;
            }
        }
        Command::Eval => {
            let word = args.word.as_deref().unwrap_or_else(|| {
                eprintln!("Error: eval requires an input word, e.g. `bitcalc -D eval 10011`");
                process::exit(1);
            });
            let inputs: bitcalc::Inputs = match word.parse() {
                Ok(inputs) => inputs,
                Err(e) => {
                    eprintln!("Error parsing input word '{}': {}", word, e);
                    process::exit(1);
                }
            };
            let result = inputs.outputs();
            let mode = inputs.mode();
            writeln!(out, "inputs : {} (D={})", inputs, inputs.d as u8)?;
            writeln!(out, "mode   : {}", mode.name())?;
            writeln!(
                out,
                "operands: A = {:02b} ({}), B = {:02b} ({})",
                inputs.a(),
                inputs.a(),
                inputs.b(),
                inputs.b()
            )?;
            writeln!(
                out,
                "result : {} {} {} = {:03b} ({})",
                inputs.a(),
                mode.symbol(),
                inputs.b(),
                result.raw(),
                result.display_value(mode)
            )?;
        }
    }
    Ok(())
}

fn selected_outputs(args: &Args) -> io::Result<Vec<OutputBit>> {
    match &args.bit {
        Some(name) => {
            let output: OutputBit = name.parse().map_err(io::Error::from)?;
            Ok(vec![output])
        }
        None => Ok(OutputBit::ALL.to_vec()),
    }
}
