use {
  anyhow::Context,
  arguments::Arguments,
  client::Client,
  config::Config,
  crossterm::style::Stylize,
  error::Error,
  feed::Feed,
  listing::Listing,
  post::Post,
  serde::Deserialize,
  serde_json::{Map, Value},
  shorten::Shorten,
  sort_key::SortKey,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, BufWriter, IsTerminal, Write},
    process,
  },
  target::Target,
  thiserror::Error,
  tracing_subscriber::EnvFilter,
  utils::truncate,
};

mod arguments;
mod client;
mod config;
mod error;
mod feed;
mod listing;
mod post;
mod shorten;
mod sort_key;
mod target;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run(config: Config) -> Result {
  tracing::debug!(?config, "parsed arguments");

  let client = Client::from_env()?;

  let url = config.target.feed_url();

  let children = client.load_feed(&url).await?.into_children();

  tracing::info!(count = children.len(), %url, "loaded feed");

  let listing = Listing::new(children, &config)
    .with_context(|| format!("unexpected feed contents from {url}"))?;

  tracing::debug!(shown = listing.posts().len(), "rendering listing");

  let mut stdout = BufWriter::new(io::stdout().lock());

  listing.render(&config, &client, &mut stdout).await?;

  stdout.flush()?;

  Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  let config = Arguments::parse_or_exit();

  initialize_logging();

  if let Err(error) = run(config).await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
