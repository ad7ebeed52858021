use std::{fs, path::{Path, PathBuf}};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{info, warn};
use top_fibers::{
  config::Config,
  iffy,
  store::{MemoryStore, NewPost, PostStore},
  tweets::parsing::parse_objects,
  Post, TweetV1,
};

/// inspect dumps of tweet objects and maintain the low-credibility domain list
#[derive(Parser, Debug)]
#[command(name = "top-fibers", version)]
struct Cli {
  /// log debug output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// TOML config file
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// print a summary of every valid tweet in a dump (JSON array or JSON lines)
  Posts {
    file: PathBuf,

    /// also insert the tweets into a store and print the stored rows as JSON
    #[arg(long)]
    store: bool,
  },

  /// turn a downloaded copy of the Iffy News sheet (CSV) into the domain list
  Iffy {
    /// downloaded CSV export of the sheet
    #[arg(long, required_unless_present = "sheet_id")]
    csv: Option<PathBuf>,

    /// print the CSV export url of this spreadsheet (using `iffy.sheet_name`)
    #[arg(long)]
    sheet_id: Option<String>,

    /// domain list to replace, defaults to `iffy.file` from the config
    #[arg(short, long)]
    file: Option<PathBuf>,
  },
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

  let config = match &cli.config {
    Some(path) => Config::load(path)
      .with_context(|| format!("loading config {}", path.display()))?,
    None => Config::default(),
  };

  match cli.command {
    Command::Posts { file, store } => posts(&config, &file, store),
    Command::Iffy { csv, sheet_id, file } => {
      if let Some(sheet_id) = sheet_id {
        println!("{}", config.iffy.csv_url(&sheet_id));
      }
      let csv = match csv {
        Some(csv) => csv,
        None => return Ok(()),
      };
      let file = match file.or_else(|| config.iffy.file.clone()) {
        Some(file) => file,
        None => bail!("no domain list given, pass --file or set `iffy.file`"),
      };
      let csv = fs::read_to_string(&csv)
        .with_context(|| format!("reading {}", csv.display()))?;
      let count = iffy::update_domain_list(&csv, &config.iffy.url_column, &file)?;
      info!("updated {} ({} domains)", file.display(), count);
      Ok(())
    }
  }
}

fn posts(config: &Config, file: &Path, store: bool) -> anyhow::Result<()> {
  let text = fs::read_to_string(file)
    .with_context(|| format!("reading {}", file.display()))?;
  let objects = parse_objects(&text)?;
  info!("read {} objects from {}", objects.len(), file.display());

  let mut memory = MemoryStore::new();
  for (i, object) in objects.iter().enumerate() {
    // a bad object only skips itself
    let tweet = match TweetV1::new(object) {
      Ok(tweet) => tweet,
      Err(e) => {
        warn!("object {}: {}", i, e);
        continue;
      }
    };
    if !tweet.is_valid()? {
      warn!("object {} is not a valid tweet, skipping", i);
      continue;
    }

    println!("{}\t@{}\trt:{}\tretweet_of:{}\tquote_of:{}\t{}",
      tweet.post_id()?.unwrap_or("-"),
      tweet.user_screen_name()?.unwrap_or("-"),
      tweet.rt_count()?.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string()),
      tweet.retweeted_post_id()?.unwrap_or("-"),
      tweet.quoted_post_id()?.unwrap_or("-"),
      tweet.link()?.unwrap_or_default(),
    );

    if store {
      match NewPost::from_post(&tweet, &config.platform) {
        Ok(row) => {
          if let Err(e) = memory.add_post(row) {
            warn!("object {}: {}", i, e);
          }
        }
        Err(e) => warn!("object {}: {}", i, e),
      }
    }
  }

  if store {
    println!("{}", serde_json::to_string_pretty(&memory.get_all_posts()?)?);
  }
  Ok(())
}
