//! Simple evaluation example: check a build file and print results.

use rigcheck::prelude::*;
use std::path::Path;

fn main() -> Result<(), RigCheckError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/valid_am4.build.json".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_evaluation [path/to/build.json]");
        std::process::exit(1);
    }

    let catalog = Catalog::builtin();
    let report = RigCheckCore::evaluate_build_file(&catalog, path)?;

    if let Some(ref name) = report.name {
        println!("Build: {}", name);
    }
    println!("Total price:     ${:.2}", report.total_price);
    println!("Estimated power: {}W", report.estimated_power_w);

    if report.is_valid {
        println!("\nBuild is compatible.");
    } else {
        println!("\nCompatibility issues:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
        std::process::exit(1);
    }
    Ok(())
}
