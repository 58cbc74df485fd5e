//! Evaluate an input word given on the command line
//!
//! ```text
//! cargo run --example evaluate -- 10011
//! ```

use bitcalc::Inputs;
use std::env;
use std::process;

fn main() {
    let word = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: evaluate <D A1 A0 B1 B0>, e.g. evaluate 10011");
        process::exit(2);
    });

    let inputs: Inputs = match word.parse() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("bad input word '{}': {}", word, e);
            process::exit(1);
        }
    };

    let outputs = inputs.outputs();
    let mode = inputs.mode();
    println!(
        "{} {} {} = {:03b} ({})",
        inputs.a(),
        mode.symbol(),
        inputs.b(),
        outputs.raw(),
        outputs.display_value(mode)
    );
}
