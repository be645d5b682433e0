//! Example: Convert a small sheet with chained formulas

use pipesheet::prelude::*;

fn main() -> Result<()> {
    let csv = "\
Item,Price,Qty,Total
Apples,0.5,12,#(prod B2 C2)
Pears,0.75,8,#(prod B3 C3)
#hl,#hl,#hl,#hl
,,Sum:,#(sum D2 D3)
";

    let text = convert_str(csv, &ConvertOptions::default())?;
    println!("{}", text);

    Ok(())
}
