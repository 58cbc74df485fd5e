//! Print the full truth table and all three Karnaugh maps

use bitcalc::{KMap, TruthTable};

fn main() {
    let _ = simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    let table = TruthTable::generate();
    println!("{}", table);

    for kmap in KMap::project_all(&table) {
        println!("{}", kmap);
    }
}
