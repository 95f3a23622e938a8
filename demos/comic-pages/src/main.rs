//! Load the data behind one comic site page and print it as JSON.
//!
//! ```text
//! RUST_LOG=debug comic-pages --base-url http://localhost:6060 chapter alice my-comic 3
//! ```

#![allow(clippy::print_stdout)]

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use inkpage::prelude::*;
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Backend API base URL.
    #[arg(long, env = "INKPAGE_BASE_URL", default_value = inkpage::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Header forwarded to the backend, as `Name: value`.
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    #[command(subcommand)]
    page: Page,
}

#[derive(Debug, Subcommand)]
enum Page {
    /// Home page posts.
    Posts,
    /// One chapter of a comic.
    Chapter {
        /// Comic owner's username.
        username: String,
        /// Comic slug.
        comic_slug: String,
        /// Chapter number.
        chapter_number: u32,
    },
    /// Genres offered by the "new comic" form.
    Genres,
}

fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got `{raw}`"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Whatever page was asked for, serialized as its page template sees it.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PageData {
    Posts(PostsData),
    Chapter(Box<ChapterData>),
    Genres(GenresData),
}

async fn load(backend: &Backend<HyperClient>, page: &Page) -> inkpage::Result<PageData> {
    let data = match page {
        Page::Posts => PageData::Posts(PostsLoader::load(backend, &RouteParams::new()).await?),
        Page::Chapter {
            username,
            comic_slug,
            chapter_number,
        } => {
            let params = ChapterLoader::params(username.as_str(), comic_slug.as_str(), chapter_number);
            PageData::Chapter(Box::new(ChapterLoader::load(backend, &params).await?))
        }
        Page::Genres => PageData::Genres(GenresLoader::load(backend, &RouteParams::new()).await?),
    };
    Ok(data)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut config = BackendConfig::builder()
        .base_url(args.base_url)
        .timeout(Duration::from_secs(args.timeout));
    for (name, value) in args.headers {
        config = config.forward_header(name, value);
    }
    let config = match config.build() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid backend configuration");
            return ExitCode::FAILURE;
        }
    };

    let backend = Backend::connect(config);
    let data = match load(&backend, &args.page).await {
        Ok(data) => data,
        Err(err) => {
            error!(status = err.page_status(), error = %err, "page data unavailable");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&data) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "could not render page data");
            ExitCode::FAILURE
        }
    }
}
