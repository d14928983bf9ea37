pub mod reccore;
use clap::{Parser, Subcommand};
use reccore::cfg::Cfg;
use reccore::engine::Engine;
use reccore::error::Error;
use reccore::source::file::{load_text, FileSource};
use reccore::source::hackernews::HackerNews;
use reccore::source::HeadlineSource;
use reccore::CFG_NAME;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Ranks news headlines by relevance to a user bio
struct Cli {
    #[clap(short, long, value_parser, default_value_t = String::from(CFG_NAME))]
    /// Config file
    config: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Fetch current top headlines
    Fetch {
        #[clap(short, long, value_parser)]
        /// Maximum number of headlines to fetch
        limit: Option<usize>,
    },
    /// Rank headlines against a bio
    Rank {
        #[clap(short, long, value_parser)]
        /// Bio text describing the reader's interests
        bio: Option<String>,
        #[clap(long, value_parser)]
        /// Read the bio from a file instead
        bio_file: Option<String>,
        #[clap(long, value_parser)]
        /// Read headlines from a file, one per line, instead of fetching
        headlines_file: Option<String>,
        #[clap(short, long, value_parser)]
        /// Maximum number of headlines to fetch
        limit: Option<usize>,
        #[clap(short, long, value_parser)]
        /// Show only the first N rows of the table
        top: Option<usize>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut cfg = Cfg::load(Path::new(&cli.config));

    let result = match &cli.command {
        Commands::Fetch { limit } => {
            if let Some(limit) = limit {
                cfg.set_fetch_limit(*limit);
            }
            command_fetch(&cfg)
        }
        Commands::Rank {
            bio,
            bio_file,
            headlines_file,
            limit,
            top,
        } => {
            if let Some(limit) = limit {
                cfg.set_fetch_limit(*limit);
            }
            command_rank(&cfg, bio.as_deref(), bio_file.as_deref(), headlines_file.as_deref(), *top)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn command_fetch(cfg: &Cfg) -> Result<(), Error> {
    let source = HackerNews::from_cfg(cfg)?;
    let headlines = source.top_headlines()?;
    println!("{} headlines fetched", headlines.len());
    for headline in headlines {
        println!("{}", headline);
    }
    Ok(())
}

fn command_rank(
    cfg: &Cfg,
    bio: Option<&str>,
    bio_file: Option<&str>,
    headlines_file: Option<&str>,
    top: Option<usize>,
) -> Result<(), Error> {
    let bio = match (bio, bio_file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => load_text(Path::new(path))?,
        (None, None) => {
            eprintln!("provide a bio with --bio or --bio-file");
            process::exit(2);
        }
    };

    let headlines = match headlines_file {
        Some(path) => FileSource::new(Path::new(path)).top_headlines()?,
        None => HackerNews::from_cfg(cfg)?.top_headlines()?,
    };

    let engine = Engine::new();
    let table = engine.rank_headlines(&bio, &headlines);
    let mut display = table.len();
    if let Some(top) = top {
        if top < display {
            display = top;
        }
    }
    for row in &table[..display] {
        println!("{:>4}  {}", row.rank, row.headline);
    }
    Ok(())
}
