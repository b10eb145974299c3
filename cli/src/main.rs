//! LinkRank CLI — command-line interface for corpus PageRank analysis
//!
//! Loads a directory of HTML pages and reports PageRank estimates from both the
//! sampling and the iterative estimator.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use linkrank::{analyze, crawl, transition_model, AnalysisConfig, LinkGraph, RankReport};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank analysis of a web-page corpus")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every page of a corpus with both estimators
    Rank {
        /// Directory of HTML pages
        corpus: PathBuf,

        /// YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Damping factor, in (0, 1)
        #[arg(long)]
        damping: Option<f64>,

        /// Number of pages to sample
        #[arg(long)]
        samples: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Per-page change below which iteration stops
        #[arg(long)]
        tolerance: Option<f64>,

        /// Round cap for iteration
        #[arg(long)]
        max_rounds: Option<usize>,

        /// Fail if iteration does not converge within the round cap
        #[arg(long)]
        strict: bool,
    },
    /// Show the random-surfer distribution after one step from a page
    Transition {
        /// Directory of HTML pages
        corpus: PathBuf,

        /// Current page
        page: String,

        /// Damping factor, in (0, 1)
        #[arg(long, default_value_t = 0.85)]
        damping: f64,
    },
    /// List the links of every page in a corpus
    Links {
        /// Directory of HTML pages
        corpus: PathBuf,
    },
}

struct RankOverrides {
    config: Option<PathBuf>,
    damping: Option<f64>,
    samples: Option<usize>,
    seed: Option<u64>,
    tolerance: Option<f64>,
    max_rounds: Option<usize>,
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            corpus,
            config,
            damping,
            samples,
            seed,
            tolerance,
            max_rounds,
            strict,
        } => {
            let overrides = RankOverrides {
                config,
                damping,
                samples,
                seed,
                tolerance,
                max_rounds,
                strict,
            };
            run_rank(&corpus, overrides, &cli.format)
        }
        Commands::Transition { corpus, page, damping } => {
            run_transition(&corpus, &page, damping, &cli.format)
        }
        Commands::Links { corpus } => run_links(&corpus, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_config(overrides: RankOverrides) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let mut config = match overrides.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(damping) = overrides.damping {
        config.damping_factor = damping;
    }
    if let Some(samples) = overrides.samples {
        config.samples = samples;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    if let Some(tolerance) = overrides.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_rounds) = overrides.max_rounds {
        config.max_rounds = max_rounds;
    }
    if overrides.strict {
        config.require_convergence = true;
    }

    config.validate()?;
    Ok(config)
}

fn run_rank(
    corpus: &Path,
    overrides: RankOverrides,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(overrides)?;
    let graph = crawl(corpus)?;
    let report = analyze(&graph, &config)?;

    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => {
            println!("page,sampled,iterated");
            for row in report.rows() {
                println!("{},{},{}", format_csv_value(&row.page), row.sampled, row.iterated);
            }
        }
        OutputFormat::Table => print_report_table(&report),
    }

    Ok(())
}

fn print_report_table(report: &RankReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Page".to_string(),
        format!("Sampled (n = {})", report.sampling.sample_count),
        "Iterated".to_string(),
    ]);

    for row in report.rows() {
        table.add_row(vec![
            row.page,
            format!("{:.4}", row.sampled),
            format!("{:.4}", row.iterated),
        ]);
    }

    println!("{}", table);
    let status = if report.converged { "converged" } else { "not converged" };
    println!(
        "{} page(s), damping {}, {} round(s), {}",
        report.rows().len(),
        report.sampling.damping_factor,
        report.rounds,
        status
    );
}

fn run_transition(
    corpus: &Path,
    page: &str,
    damping: f64,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = crawl(corpus)?;
    let distribution = transition_model(&graph, page, damping)?;

    match format {
        OutputFormat::Text => {
            println!("Transition Model from {} (damping = {})", page, damping);
            for (next, probability) in &distribution {
                println!("  {}: {:.4}", next, probability);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&distribution)?);
        }
        OutputFormat::Csv => {
            println!("page,probability");
            for (next, probability) in &distribution {
                println!("{},{}", format_csv_value(next), probability);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Next page", "Probability"]);
            for (next, probability) in &distribution {
                table.add_row(vec![next.clone(), format!("{:.4}", probability)]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_links(corpus: &Path, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let graph = crawl(corpus)?;
    let links = link_listing(&graph);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&links)?);
        }
        OutputFormat::Csv => {
            println!("page,target");
            for (page, targets) in &links {
                for target in targets {
                    println!("{},{}", format_csv_value(page), format_csv_value(target));
                }
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Page", "Links"]);
            for (page, targets) in &links {
                table.add_row(vec![page.to_string(), targets.join(", ")]);
            }
            println!("{}", table);
        }
        OutputFormat::Text => {
            for (page, targets) in &links {
                if targets.is_empty() {
                    println!("{}: (dangling)", page);
                } else {
                    println!("{}: {}", page, targets.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn link_listing(graph: &LinkGraph) -> BTreeMap<&str, Vec<&str>> {
    graph
        .pages()
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            let targets = graph
                .successors(idx)
                .iter()
                .filter_map(|&target| graph.page(target))
                .collect();
            (page.as_str(), targets)
        })
        .collect()
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
