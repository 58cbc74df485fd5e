//! Show one expanded K-map panel: the map halves, the equations, and the
//! grouping legend

use bitcalc::{combined_equation, equation, groupings, KMap, Mode, OutputBit, TruthTable};

fn main() {
    let output = OutputBit::C2;
    let table = TruthTable::generate();
    let kmap = KMap::project(&table, output);

    println!("{}", kmap);

    for mode in Mode::ALL {
        println!("D = {} ({}): {} = {}", mode.bit() as u8, mode.name(), output, equation(output, mode));
        for group in groupings(output, mode) {
            let cells: Vec<String> = group
                .cells()
                .map(|(row, col)| format!("({row},{col})"))
                .collect();
            println!("  {:<10} {}", group.label, cells.join(" "));
        }
    }
    println!();
    println!("{}", combined_equation(output));
}
