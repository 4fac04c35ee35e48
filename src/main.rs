mod output;
mod pipeline;
mod reader;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use pipeline::segment::{extract_entries, JoinStrategy, SegmentOptions};
use reader::PageRange;

#[derive(Parser)]
#[command(name = "iso_vocab", about = "ISO/IEC/IEEE 24765 vocabulary extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: PDF → cleaned text → JSON + CSV records
    Run {
        /// Path to the standard's PDF
        pdf: PathBuf,
        /// Directory for output.txt / output.json / output.csv
        #[arg(short, long, default_value = "data")]
        out_dir: PathBuf,
        /// Front-matter pages to skip (cover + TOC)
        #[arg(long, default_value_t = 6)]
        skip_leading: usize,
        /// Back-matter pages to skip (annexes)
        #[arg(long, default_value_t = 12)]
        skip_trailing: usize,
        /// Description line-joining strategy
        #[arg(long, value_enum, default_value_t = JoinStrategy::Semantic)]
        join: JoinStrategy,
    },
    /// Run the furniture filters and front-matter cut on extracted text
    Clean {
        /// Raw page text (one line per text fragment)
        input: PathBuf,
        /// Cleaned-text destination (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Segment already-cleaned text into entries
    Parse {
        /// Cleaned glossary text
        input: PathBuf,
        /// Write entries as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Write entries as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Description line-joining strategy
        #[arg(long, value_enum, default_value_t = JoinStrategy::Semantic)]
        join: JoinStrategy,
        /// Drop "Figure " captions during segmentation (for input that
        /// skipped the figure pre-filter)
        #[arg(long)]
        skip_figures: bool,
    },
    /// Print extracted entries as a table
    Preview {
        /// Cleaned glossary text
        input: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            pdf,
            out_dir,
            skip_leading,
            skip_trailing,
            join,
        } => {
            let range = PageRange {
                skip_leading,
                skip_trailing,
            };
            let text = reader::extract_pdf_text(&pdf, range)?;

            let (cleaned, stats) = pipeline::clean_text(&text);
            stats.print();

            fs::create_dir_all(&out_dir)?;
            let txt_path = out_dir.join("output.txt");
            fs::write(&txt_path, &cleaned)?;
            println!("Cleaned text written to {}", txt_path.display());

            // Figure captions already filtered above; keep the inline
            // skip off.
            let entries = extract_entries(
                &cleaned,
                &SegmentOptions {
                    join,
                    skip_figures: false,
                },
            );
            println!("Extracted {} words", entries.len());

            output::save_json(&entries, &out_dir.join("output.json"))?;
            output::save_csv(&entries, &out_dir.join("output.csv"))?;
            println!("Records written to {}", out_dir.display());
            Ok(())
        }
        Commands::Clean { input, output } => {
            let text = fs::read_to_string(&input)?;
            let (cleaned, stats) = pipeline::clean_text(&text);
            stats.print();
            match output {
                Some(path) => {
                    fs::write(&path, &cleaned)?;
                    println!("Cleaned text written to {}", path.display());
                }
                None => println!("{}", cleaned),
            }
            Ok(())
        }
        Commands::Parse {
            input,
            json,
            csv,
            join,
            skip_figures,
        } => {
            let text = fs::read_to_string(&input)?;
            let entries = extract_entries(&text, &SegmentOptions { join, skip_figures });
            println!("Extracted {} words", entries.len());

            if let Some(path) = &json {
                output::save_json(&entries, path)?;
                println!("JSON written to {}", path.display());
            }
            if let Some(path) = &csv {
                output::save_csv(&entries, path)?;
                println!("CSV written to {}", path.display());
            }
            if json.is_none() && csv.is_none() {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            Ok(())
        }
        Commands::Preview { input, limit } => {
            let text = fs::read_to_string(&input)?;
            let entries = extract_entries(&text, &SegmentOptions::default());
            if entries.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            println!(
                "{:>4} | {:<8} | {:<28} | {:<60}",
                "#", "Number", "Term", "Description"
            );
            println!("{}", "-".repeat(110));

            for (i, entry) in entries.iter().take(limit).enumerate() {
                let word = truncate(&entry.word, 28);
                let description = truncate(&entry.description.replace('\n', " "), 60);
                println!(
                    "{:>4} | {:<8} | {:<28} | {:<60}",
                    i + 1,
                    entry.word_number,
                    word,
                    description
                );
            }

            println!("\n{} entries total", entries.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
