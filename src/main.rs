//! plant-expert CLI: nutrient diagnosis and fuzzy plant recommendation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use plant_expert::{Category, ExpertConfig, ExpertError, PlantExpert};

#[derive(Parser)]
#[command(name = "plant-expert", version, about = "Plant diagnosis and recommendation expert system")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List symptom categories and their options.
    Symptoms,

    /// Diagnose nutrient deficiencies from observed symptoms.
    Diagnose {
        /// Observed symptom as "Category=characteristic", e.g. "Leaf color=pale green".
        #[arg(short, long = "symptom", value_parser = parse_symptom)]
        symptoms: Vec<(String, String)>,
    },

    /// Recommend a plant for a soil pH and watering frequency.
    Recommend {
        /// Soil pH in [0, 14].
        #[arg(long, allow_negative_numbers = true)]
        ph: f64,

        /// Watering frequency in [0, 10].
        #[arg(long, allow_negative_numbers = true)]
        watering: f64,

        /// Also print the aggregated output membership.
        #[arg(long)]
        profile: bool,
    },
}

fn parse_symptom(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(category, characteristic)| (category.to_string(), characteristic.to_string()))
        .ok_or_else(|| format!("expected \"Category=characteristic\", got \"{raw}\""))
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExpertConfig::load(path).map_err(ExpertError::from)?,
        None => ExpertConfig::default(),
    };
    let mut expert = PlantExpert::from_config(&config).map_err(ExpertError::from)?;

    match cli.command {
        Commands::Symptoms => {
            if cli.json {
                let catalogue: Vec<_> = Category::ALL
                    .into_iter()
                    .map(|category| {
                        serde_json::json!({
                            "category": category.name(),
                            "options": category.options().iter().map(|c| c.name()).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&catalogue).into_diagnostic()?);
            } else {
                for category in Category::ALL {
                    println!("{category}:");
                    for option in category.options() {
                        println!("  - {option}");
                    }
                }
            }
        },

        Commands::Diagnose { symptoms } => {
            let diagnosis = expert.diagnose(symptoms).map_err(ExpertError::from)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&diagnosis).into_diagnostic()?);
            } else if diagnosis.is_healthy() {
                println!("No deficiency matches the observed symptoms.");
            } else {
                println!("Deficiencies:");
                for deficiency in &diagnosis.deficiencies {
                    println!("  - {deficiency}");
                }
                println!("\nTreatments:");
                for treatment in &diagnosis.treatments {
                    println!("  - {treatment}");
                }
            }
        },

        Commands::Recommend {
            ph,
            watering,
            profile,
        } => {
            let rec = expert.recommend(ph, watering).map_err(ExpertError::from)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rec).into_diagnostic()?);
            } else {
                println!("Recommended plant: {} (score {:.3})", rec.label, rec.score);
                println!("{}", rec.description);
                println!("\nRule strengths:");
                for (plant, strength) in rec.strengths.iter() {
                    println!("  {:<10} {strength:.3}", plant.name());
                }
                if profile {
                    println!("\nOutput profile:");
                    for (x, m) in rec.profile.universe.iter().zip(&rec.profile.membership) {
                        println!("  {x:>4.1} {m:.3}");
                    }
                }
            }
        },
    }

    Ok(())
}
