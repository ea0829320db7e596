//! Compare per-person recorded distances against route edge-length sums.
//!
//! Reads the edges, people, and route tables produced by the simulation
//! pipeline and writes a `distance_merge.csv` report with both distance
//! values per person.
//!
//! ```sh
//! cargo run --bin distance_audit -p route_audit -- \
//!     --edges new_full_network/edges.csv \
//!     --people ../0_people5to12.csv \
//!     --routes ../0_route5to12.csv \
//!     --output distance_merge.csv
//! ```
//!
//! By default the run stops at the first person whose two distances differ;
//! pass `--continue-on-discrepancy` to process the whole route table. An
//! existing output file triggers a confirmation prompt unless `--overwrite`
//! is given.

use std::io::Write;

use route_audit::{run, AuditConfig};

fn flag_value(name: &str) -> Option<String> {
    std::env::args().skip_while(|arg| arg != name).nth(1)
}

fn flag_present(name: &str) -> bool {
    std::env::args().any(|arg| arg == name)
}

/// Ask whether an existing output file may be replaced. Empty input means
/// yes; anything other than y/yes/n/no re-asks.
fn confirm_overwrite(path: &std::path::Path) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        print!(
            "{} already exists. Do you want to replace it? (Y/n): ",
            path.display()
        );
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(edges_file) = flag_value("--edges") else {
        eprintln!(
            "usage: distance_audit --edges <path> [--people <path>] [--routes <path>] \
             [--output <path>] [--continue-on-discrepancy] [--overwrite] [--quiet]"
        );
        std::process::exit(1);
    };

    let mut config = AuditConfig::new(edges_file);
    if let Some(people_file) = flag_value("--people") {
        config.people_file = people_file.into();
    }
    if let Some(route_file) = flag_value("--routes") {
        config.route_file = route_file.into();
    }
    if let Some(output_file) = flag_value("--output") {
        config.output_file = output_file.into();
    }
    config.stop_if_discrepancy_found = !flag_present("--continue-on-discrepancy");
    config.overwrite = flag_present("--overwrite");
    config.show_progress = !flag_present("--quiet");

    println!("Route Distance Audit");
    println!("====================");
    println!("Edges file:  {}", config.edges_file.display());
    println!("People file: {}", config.people_file.display());
    println!("Route file:  {}", config.route_file.display());
    println!("Output file: {}", config.output_file.display());
    println!();

    if config.output_file.exists() && !config.overwrite {
        if confirm_overwrite(&config.output_file)? {
            config.overwrite = true;
        } else {
            println!("Stopping.");
            return Ok(());
        }
    }

    // A discrepancy halt is a data finding, not a program failure; the
    // runner already reported it, so every outcome exits 0 here.
    run(&config)?;
    Ok(())
}
