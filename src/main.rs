use std::path::PathBuf;

use clap::Parser;
use tube_cutter::packer::Packer;
use tube_cutter::types::LengthCounts;
use tube_cutter::{export, input, render};

#[derive(Parser)]
#[command(
    name = "tube_cutter",
    about = "1D tube cutting planner (greedy first-fit)"
)]
struct Cli {
    /// Available tubes as length,qty pairs (e.g. 5000,2 6000,3)
    #[arg(long = "tubes", num_args = 1..)]
    tubes: Vec<String>,

    /// Required cuts as length,qty pairs (e.g. 200,2 150,4)
    #[arg(long = "cuts", num_args = 1..)]
    cuts: Vec<String>,

    /// Read tubes from a file instead, one length,qty pair per line
    #[arg(long, conflicts_with = "tubes")]
    tubes_file: Option<PathBuf>,

    /// Read cuts from a file instead, one length,qty pair per line
    #[arg(long, conflicts_with = "cuts")]
    cuts_file: Option<PathBuf>,

    /// Show a bar chart of the plan
    #[arg(long)]
    chart: bool,

    /// Write the per-cut table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn load_pairs(
    inline: &[String],
    file: &Option<PathBuf>,
    what: &str,
) -> Result<Vec<(u32, u32)>, String> {
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        return input::parse_pairs(&text);
    }
    if inline.is_empty() {
        return Err(format!("no {} given, use --{} or --{}-file", what, what, what));
    }
    inline.iter().map(|s| input::parse_pair(s)).collect()
}

fn main() {
    let cli = Cli::parse();

    let tubes = load_pairs(&cli.tubes, &cli.tubes_file, "tubes").unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let cuts = load_pairs(&cli.cuts, &cli.cuts_file, "cuts").unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let inventory = LengthCounts::from_pairs(tubes);
    let demand = LengthCounts::from_pairs(cuts);

    let plan = Packer::new(inventory, demand).pack().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for (i, tube) in plan.assignments.iter().enumerate() {
        println!("Tube {}: {} mm", i + 1, tube.tube_length);
        if tube.cuts_made.is_empty() {
            println!("  cuts: (none)");
        } else {
            let cuts: Vec<String> = tube.cuts_made.iter().map(u32::to_string).collect();
            println!("  cuts: {}", cuts.join(", "));
        }
        println!("  remaining: {} mm", tube.remaining_space);
    }

    if plan.is_fulfilled() {
        println!("All requested cuts were made.");
    } else {
        println!("Warning: not all requested pieces could be cut:");
        for (length, qty) in plan.leftover.iter().filter(|&(_, q)| q > 0) {
            println!("  {} mm: {} missing", length, qty);
        }
    }

    if cli.chart {
        print!("{}", render::render_plan(&plan.assignments));
    }

    if let Some(path) = &cli.csv {
        let records = plan.flatten();
        let csv = export::to_csv(&records);
        if let Err(e) = std::fs::write(path, csv) {
            eprintln!("Error: cannot write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Wrote {} rows to {}", records.len(), path.display());
    }
}
