use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pdf_reorder::{ReorderOptions, ReorderStatistics};
use pdf_reorder_runtime::{
    DEFAULT_SHUTDOWN_TIMEOUT, ReorderCommand, ReorderOutcome, ReorderUpdate, spawn_worker,
};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(
    name = "pdfr",
    about = "Reorder 4-up invoice PDFs for cut-and-stack printing",
    version
)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reorder quarter pages so each cut pile reads consecutively
    Reorder {
        /// Input PDF file (four invoices stacked per page)
        #[arg(short, long, required_unless_present = "config")]
        input: Option<PathBuf>,

        /// Output PDF file [default: <input>_reordered.pdf]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw dashed cut guides between quarters
        #[arg(long)]
        cut_lines: bool,

        /// Write streams uncompressed
        #[arg(long)]
        no_compress: bool,

        /// Load options from a JSON file (flags override it)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Show page counts and the pile plan for a PDF
    Stats {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::from_verbosity(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Reorder {
            input,
            output,
            cut_lines,
            no_compress,
            config,
            save_config,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => ReorderOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => ReorderOptions::default(),
            };
            if let Some(input) = input {
                options.input_file = input;
            }
            if output.is_some() {
                options.output_file = output;
            }
            options.cut_lines |= cut_lines;
            if no_compress {
                options.compress = false;
            }
            options.validate()?;

            if let Some(path) = save_config {
                options.save(&path).await?;
                println!("Saved options → {}", path.display());
            }

            if stats_only {
                let doc = pdf_reorder::load_pdf(&options.input_file).await?;
                print_statistics(&pdf_reorder::calculate_statistics(&doc)?);
                return Ok(());
            }

            match run_in_worker(options).await? {
                ReorderOutcome::Success { page_count } => println!("Done. Pages: {}", page_count),
                ReorderOutcome::Failure { message } => bail!("{message}"),
            }
        }

        Commands::Stats { input } => {
            let doc = pdf_reorder::load_pdf(&input).await?;
            print_statistics(&pdf_reorder::calculate_statistics(&doc)?);
        }
    }

    Ok(())
}

/// Hand the run to the background worker and relay its updates.
///
/// Ctrl-C asks the worker to stop and waits a bounded time before exiting.
async fn run_in_worker(options: ReorderOptions) -> Result<ReorderOutcome> {
    let (worker, mut updates) = spawn_worker();
    worker.send(ReorderCommand::Process { options })?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let outcome = loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(update) => {
                    if let ReorderUpdate::Progress { message } = &update {
                        println!("{}", message);
                    }
                    if let Some(outcome) = update.outcome() {
                        break outcome;
                    }
                }
                None => bail!("Worker stopped without a result"),
            },
            _ = &mut ctrl_c => {
                eprintln!("Interrupted, stopping worker...");
                worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await;
                bail!("Interrupted");
            }
        }
    };

    worker.shutdown(DEFAULT_SHUTDOWN_TIMEOUT).await;
    Ok(outcome)
}

fn print_statistics(stats: &ReorderStatistics) {
    println!("Reorder Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Invoices: {}", stats.sub_regions);
    println!("  Output pages: {}", stats.output_pages);
    println!(
        "  Page size: {} x {} pt",
        stats.page_width_pt, stats.page_height_pt
    );
    for (pile, range) in stats.piles.iter().enumerate() {
        println!(
            "  Pile {}: invoices {}-{}",
            pile + 1,
            range.start(),
            range.end()
        );
    }
}
