use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use postfeed::{
    infrastructure::{
        cli::Cli, config::Config, http::HttpPostRepository, repository::PostRepository,
        tui::real::RealTui,
    },
    integration::app_runner::{run_headless, AppRunner},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }

    let repository: Arc<dyn PostRepository> = Arc::new(HttpPostRepository::new(
        config.api_base_url.as_str(),
        config.request_timeout(),
    )?);

    if args.headless {
        for post in run_headless(config, repository).await? {
            println!("{}\t{}", post.id, post.title);
        }
        return Ok(());
    }

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new_with_tui(config, repository, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
