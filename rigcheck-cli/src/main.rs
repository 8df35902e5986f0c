//! RigCheck CLI - PC build compatibility checking from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use rigcheck::{BuildReport, Catalog, Category, RigCheckError, RULES};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "rigcheck")]
#[command(about = "PC build compatibility checking tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single build file
    Check {
        /// Path to a build JSON file (slot name -> component id)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Use a catalog JSON file instead of the builtin catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Exit with error code if the build has compatibility issues
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Evaluate all *.build.json files in a directory
    Project {
        /// Path to project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Use a catalog JSON file instead of the builtin catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Exit with error code if any build has compatibility issues
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// List catalog components
    Components {
        /// Only show one category (CPU, GPU, Motherboard, RAM, Storage, PSU, Case, Cooler)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Use a catalog JSON file instead of the builtin catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// List the compatibility rules
    Rules {
        /// Show detailed rule descriptions
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for CI/CD
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            file,
            format,
            catalog,
            fail_on_issues,
        } => handle_check(&file, format, catalog.as_deref(), fail_on_issues),
        Commands::Project {
            dir,
            format,
            catalog,
            fail_on_issues,
        } => handle_project(&dir, format, catalog.as_deref(), fail_on_issues),
        Commands::Components {
            category,
            format,
            catalog,
        } => handle_components(category.as_deref(), format, catalog.as_deref()),
        Commands::Rules { verbose } => {
            handle_rules(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, RigCheckError> {
    match path {
        Some(path) => Ok(Catalog::from_file(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn handle_check(
    file: &Path,
    format: OutputFormat,
    catalog: Option<&Path>,
    fail_on_issues: bool,
) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match rigcheck::RigCheckCore::evaluate_build_file(&catalog, file) {
        Ok(report) => {
            output_reports(&[(file.to_path_buf(), report.clone())], &format);
            if fail_on_issues && !report.is_valid {
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_project(
    dir: &Path,
    format: OutputFormat,
    catalog: Option<&Path>,
    fail_on_issues: bool,
) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match rigcheck::RigCheckCore::evaluate_build_dir(&catalog, dir) {
        Ok(reports) => {
            output_reports(&reports, &format);
            if fail_on_issues && reports.iter().any(|(_, r)| !r.is_valid) {
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_reports(reports: &[(PathBuf, BuildReport)], format: &OutputFormat) {
    match format {
        OutputFormat::Human => output_human(reports),
        OutputFormat::Json => output_json(reports),
    }
}

fn output_human(reports: &[(PathBuf, BuildReport)]) {
    for (file, report) in reports {
        println!("\nBuild: {}", file.display());
        if let Some(ref name) = report.name {
            println!("Name:  {}", name);
        }
        println!("{}", "─".repeat(60));

        println!("  Total price:     ${:.2}", report.total_price);
        println!("  Estimated power: {}W", report.estimated_power_w);

        if report.is_valid {
            println!("  No compatibility issues");
        } else {
            println!("\n  ISSUES:");
            for issue in &report.issues {
                println!("    - {}", issue);
            }
        }
    }
}

fn output_json(reports: &[(PathBuf, BuildReport)]) {
    let output = serde_json::json!({
        "results": reports.iter().map(|(file, report)| {
            serde_json::json!({
                "file": file.display().to_string(),
                "report": report,
            })
        }).collect::<Vec<_>>(),
        "summary": {
            "total_builds": reports.len(),
            "invalid_builds": reports.iter().filter(|(_, r)| !r.is_valid).count(),
            "total_issues": reports.iter().map(|(_, r)| r.issues.len()).sum::<usize>(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_components(
    category: Option<&str>,
    format: OutputFormat,
    catalog: Option<&Path>,
) -> i32 {
    let catalog = match load_catalog(catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let filter = match category {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                eprintln!("Error: unknown category '{}'", raw);
                return 1;
            }
        },
        None => None,
    };

    let components: Vec<_> = catalog
        .iter()
        .filter(|c| filter.map_or(true, |f| c.category == f))
        .collect();

    match format {
        OutputFormat::Human => {
            for component in &components {
                print!("  {:<36} {:<12} ${:<8.2}", component.id, component.category.to_string(), component.price);
                println!(" {}", component.name);
            }
            println!("\n  {} components", components.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&components).unwrap());
        }
    }
    0
}

fn handle_rules(verbose: bool) {
    println!("Compatibility rules (checked in this order):\n");

    for rule in RULES {
        println!("  {}", rule.id);
        println!("    {}", rule.summary);
        if verbose {
            println!("    {}", rule.detail);
        }
        println!();
    }
}
