//! Voltkit command-line interface.

use anyhow::{Result, bail};
use clap::Parser;
use voltkit_core::{default_select_list, format_value, notation};

#[derive(Parser)]
#[command(name = "voltkit")]
#[command(about = "Engineering-notation calculator for the Voltkit circuit sketcher", long_about = None)]
#[command(version)]
struct Cli {
    /// Literals to evaluate (e.g. 4.7k, 100n, 2.5e-2)
    #[arg(value_name = "LITERAL")]
    literals: Vec<String>,

    /// Show the strict mantissa/suffix split instead of evaluating
    #[arg(short, long)]
    split: bool,

    /// Print the magnitude select list for the given unit label
    #[arg(long, value_name = "LABEL")]
    units: Option<String>,

    /// Use CJK magnitude prefixes with --units
    #[arg(long)]
    chinese: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(label) = cli.units.as_deref() {
        for entry in default_select_list(label, cli.chinese) {
            println!("{:>2}  {}", entry.value, entry.label);
        }
        return Ok(());
    }

    if cli.literals.is_empty() {
        bail!("no literals given; try `voltkit 4.7k 100n` or `voltkit --units Hz`");
    }

    for literal in &cli.literals {
        if cli.split {
            let split = notation::split_number(literal)?;
            println!(
                "{literal}: number={} rank=\"{}\"",
                split.number,
                split.rank.symbol()
            );
        } else {
            let value = notation::parse(literal);
            if value.is_nan() {
                bail!("not an engineering-notation literal: {literal}");
            }
            println!("{literal} = {value} ({})", format_value(value));
        }
    }

    Ok(())
}
