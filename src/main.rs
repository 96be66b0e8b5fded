use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use velopress::{config, output, publish, scan, stats, store};

#[derive(Parser)]
#[command(name = "velopress")]
#[command(about = "Build-time data generator for a cycling club website")]
#[command(long_about = "\
Build-time data generator for a cycling club website

Your filesystem is the data source. Event directories under the gallery
root become published JSON records; a members feed snapshot becomes the
rider leaderboard.

Content structure:

  public/gallery/
  ├── README.md                        # Reserved, never an event
  ├── 2024-04-21-spring-classic/       # Event directory
  │   ├── metadata.json                # Required: title, description, date
  │   ├── cover-start.jpg              # \"cover\" in the name → cover image
  │   ├── climb_to_the_muur.jpg        # Alt text: \"climb to the muur\"
  │   └── finish-sprint.jpg
  └── .drafts/                         # Hidden, skipped

A directory with missing or broken metadata, or without images, is
skipped with a warning — one bad event never fails the build.

Run 'velopress gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Gallery content root
    #[arg(long, default_value = "public/gallery", global = true)]
    source: PathBuf,

    /// Directory for published event artifacts
    #[arg(long, default_value = "src/data/gallery", global = true)]
    data_dir: PathBuf,

    /// Site config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the gallery and publish event artifacts
    Scan,
    /// Validate gallery content without writing anything
    Check,
    /// List published events, newest first
    List,
    /// Print the rider leaderboard from a members snapshot
    Stats {
        /// Members feed snapshot (JSON array of riders)
        #[arg(long)]
        members: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site = config::load_config(&cli.config)?;
            let report = scan::scan(&cli.source, &site.gallery.route);
            output::print_scan_output(&report);

            println!();
            let published = publish::publish(&report.events, &cli.data_dir)?;
            output::print_publish_output(&published);
        }
        Command::Check => {
            let site = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.source.display());
            let report = scan::scan(&cli.source, &site.gallery.route);
            output::print_scan_output(&report);
            if report.skipped.is_empty() {
                println!("==> Content is valid");
            } else {
                println!("==> {} directories would be skipped", report.skipped.len());
            }
        }
        Command::List => {
            let events = store::load_events(&cli.data_dir);
            output::print_list_output(&events);
        }
        Command::Stats { members } => {
            let site = config::load_config(&cli.config)?;
            let riders = stats::load_members(&members)?;
            let leaderboard = stats::rank_riders(riders, site.stats.pinned_rider.as_deref());
            output::print_stats_output(&leaderboard);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Route diagnostics through tracing; results go to stdout via `output`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
