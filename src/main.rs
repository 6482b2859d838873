#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteContent;
use tracing_subscriber::EnvFilter;

/// Content bundled into the binary, used when `--content` is not given
const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

/// Site content, set once at startup
static CONTENT: OnceLock<SiteContent> = OnceLock::new();

/// Get the loaded site content (empty if startup did not set it)
pub fn get_site_content() -> SiteContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Folio - portfolio and blog
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio and blog")]
struct Args {
    /// Site content JSON file (defaults to the bundled content)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn load_content(path: Option<&PathBuf>) -> anyhow::Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => SiteContent::from_json_str(BUNDLED_CONTENT).context("bundled content is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = load_content(args.content.as_ref()).inspect_err(|e| {
        tracing::error!("{:#}", e);
    })?;
    let title = if content.profile.name.is_empty() {
        "Folio".to_string()
    } else {
        format!("{} - Folio", content.profile.name)
    };

    tracing::info!(
        achievements = content.achievements.len(),
        posts = content.posts.len(),
        "Starting '{}'",
        title
    );

    let _ = CONTENT.set(content);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
