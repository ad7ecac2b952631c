use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use career_compass::assessment::{self, Section};
use career_compass::config::ConfigSource;
use career_compass::{output, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Format {
    /// Human-readable report
    #[default]
    Table,
    /// Tab-separated section scores
    Tsv,
    /// Full report as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a responses file and print the recommendation
    Score {
        /// Responses file (.json, or YAML otherwise)
        responses: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Report section completeness and out-of-range answers
    Check {
        /// Responses file (.json, or YAML otherwise)
        responses: PathBuf,
    },
    /// Print the next-step guidance for a recommendation tier
    Guidance {
        /// YES, MAYBE or NO
        tier: scoring::RecommendationTier,
    },
}

#[derive(Parser, Debug)]
#[command(name = "career-compass")]
#[command(about = "Career readiness self-assessment scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/career-compass/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let (config, source) = match career_compass::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        match &source {
            ConfigSource::File(path) => eprintln!("Loaded config from {}", path.display()),
            ConfigSource::BuiltIn => eprintln!("No config file, using built-in assessment"),
        }
    }

    // Validate scoring config at startup
    let scoring_config = config.scoring.unwrap_or_default();
    if let Err(errors) = scoring::validate_scoring(&scoring_config) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score { responses, format } => {
            let responses = load_or_exit(&responses);

            if cli.verbose {
                log_answer_counts(&responses, &scoring_config);
                if !assessment::is_complete(&responses, &scoring_config) {
                    eprintln!(
                        "Warning: some sections are incomplete; \
                         scores cover answered questions only"
                    );
                }
            }

            let report = scoring::calculate_report(&responses, &scoring_config);
            let thresholds = scoring_config.thresholds();
            let gaps = scoring::skill_gaps(&report, &thresholds);
            let guidance = scoring::derive_guidance(
                report.recommendation_tier,
                scoring_config.role(),
                &scoring_config.guidance(),
            );

            match format {
                Format::Table => {
                    println!(
                        "{}",
                        output::format_report(&report, &gaps, &guidance, use_colors)
                    );
                }
                Format::Tsv => println!("{}", output::format_tsv(&report)),
                Format::Json => match output::format_json(&report, &gaps, &guidance) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Commands::Check { responses } => {
            let responses = load_or_exit(&responses);
            let rows = assessment::progress(&responses, &scoring_config);
            println!("{}", output::format_progress(&rows, use_colors));

            let mut ok = rows.iter().all(|row| row.is_complete());
            if let Err(errors) = scoring::validate_responses(&responses, &scoring_config) {
                println!();
                println!("Problems:");
                for error in errors {
                    println!("  - {}", error);
                }
                ok = false;
            }

            if !ok {
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Guidance { tier } => {
            let guidance = scoring::derive_guidance(
                tier,
                scoring_config.role(),
                &scoring_config.guidance(),
            );
            println!("{}", output::format_guidance(&guidance, use_colors));
        }
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_or_exit(path: &std::path::Path) -> assessment::ResponseSet {
    match assessment::load_responses(path) {
        Ok(responses) => responses,
        Err(e) => {
            eprintln!("Responses error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn log_answer_counts(responses: &assessment::ResponseSet, config: &scoring::ScoringConfig) {
    eprintln!("Loaded {} answers", responses.answer_count());
    for row in assessment::progress(responses, config) {
        let marker = match row.section {
            Section::Wiscar(_) => "    ",
            _ => "  ",
        };
        eprintln!("{}{}: {}/{}", marker, row.section, row.answered, row.expected);
    }
}
