//! Showcase CLI
//!
//! Command-line front-end over the Showcase data layer:
//! - Generate datasets
//! - Filter JSON records
//! - Summarize the employee table
//! - Print a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use showcase::config::{generate_default_config, Config};
use showcase::data::{
    check_count, employees, summarize, DataGenerator, Dataset, DatasetKind, Filters, JsonRecord,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthetic chart and table data for the widget showcase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table)
    #[arg(short, long, default_value = "json", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a dataset
    Generate {
        /// Dataset type: scatter, line, bar, employees
        kind: String,
        /// Number of records (days for line); defaults to generator.default_count
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
        /// Keep records with value >= threshold
        #[arg(short, long, default_value_t = 0.0)]
        threshold: f64,
        /// Keep records in this category (or without one)
        #[arg(long)]
        category: Option<String>,
    },

    /// Filter a JSON array of records
    Filter {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Keep records with value >= threshold
        #[arg(short, long, default_value_t = 0.0)]
        threshold: f64,
        /// Keep records in this category (or without one)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show employee headline metrics
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let table = cli.format == "table";

    match cli.command {
        Commands::Generate {
            kind,
            count,
            seed,
            threshold,
            category,
        } => {
            let kind: DatasetKind = kind.parse()?;
            let limits = Config::load_default().generator;
            let count = check_count(count.unwrap_or(limits.default_count), limits.max_count)?;
            let mut generator = match seed {
                Some(seed) => DataGenerator::seeded(seed),
                None => DataGenerator::from_entropy(),
            };

            let filters = Filters {
                threshold,
                category,
            };
            let dataset = generator.generate(kind, count)?.filtered(&filters);

            if table {
                print_dataset(&dataset);
            } else {
                println!("{}", serde_json::to_string_pretty(&dataset)?);
            }
        }

        Commands::Filter {
            input,
            threshold,
            category,
        } => {
            let raw = read_input(input.as_ref())?;
            let values: Vec<serde_json::Value> =
                serde_json::from_str(&raw).context("input must be a JSON array of records")?;
            let records = JsonRecord::from_values(values)?;
            let received = records.len();

            let filters = Filters {
                threshold,
                category,
            };
            let kept = filters.apply(records);

            eprintln!("Kept {} of {} records", kept.len(), received);
            println!("{}", serde_json::to_string_pretty(&kept)?);
        }

        Commands::Summary => {
            let summary = summarize(&employees());

            if table {
                println!("Total Employees: {}", summary.total);
                println!("Average Age:     {:.1}", summary.average_age);
                println!("Average Salary:  ${:.0}", summary.average_salary);
                println!("Cities:          {}", summary.cities);
            } else {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)
                    .with_context(|| format!("failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", config);
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    if content.trim().is_empty() {
        bail!("no input records");
    }
    Ok(content)
}

fn print_dataset(dataset: &Dataset) {
    match dataset {
        Dataset::Scatter(points) => {
            println!("{:<8} {:<8} {:<8} {:<4} {}", "x", "y", "value", "cat", "date");
            println!("{}", "-".repeat(60));
            for p in points {
                println!(
                    "{:<8.2} {:<8.2} {:<8.2} {:<4} {}",
                    p.x,
                    p.y,
                    p.value,
                    p.category,
                    p.date.format("%Y-%m-%d %H:%M")
                );
            }
        }
        Dataset::Line(series) => {
            println!("{:<12} {}", "date", "value");
            println!("{}", "-".repeat(24));
            for p in series {
                println!("{:<12} {:.2}", p.date, p.value);
            }
        }
        Dataset::Bar(bars) => {
            for bar in bars {
                println!("{:<4} {:>4} {}", bar.category, bar.value, "#".repeat(bar.value as usize / 2));
            }
        }
        Dataset::Employees(staff) => {
            println!("{:<10} {:<5} {:<12} {}", "Name", "Age", "City", "Salary");
            println!("{}", "-".repeat(40));
            for e in staff {
                println!("{:<10} {:<5} {:<12} ${}", e.name, e.age, e.city, e.salary);
            }
        }
        Dataset::Empty => println!("No data."),
    }
}
