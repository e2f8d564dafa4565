use crate::args::{Cli, Commands};
use crate::feed::JsonFeedFetcher;
use crate::handlers;
use anyhow::{Result, bail};
use newsrack_runtime::{BrowseConfig, BrowseSession};

pub fn run(cli: Cli) -> Result<()> {
    let Some(feed_path) = cli.feed.as_deref() else {
        bail!("--feed <items.json> is required");
    };
    let fetcher = JsonFeedFetcher::load(feed_path)?;

    let config = BrowseConfig {
        page_limit: cli.page_limit,
        ..BrowseConfig::default()
    };
    let mut session = BrowseSession::with_config(Box::new(fetcher), config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::Browse { expand } => {
                handlers::browse::handle(&mut session, &expand, cli.format).await
            }
            Commands::Search { query } => {
                handlers::search::handle(&mut session, &query, cli.format).await
            }
            Commands::Suggest { prefix } => {
                handlers::suggest::handle(&mut session, &prefix, cli.format).await
            }
        }
    })
}
