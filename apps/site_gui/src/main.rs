//! Desktop shell for a static informational site: navigation with
//! active-page marking, a compact-layout menu toggle, a scroll-to-top
//! control, footer year stamping, a privacy notice dialog, and a contact
//! form with client-side validation and simulated submission.

mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use clap::Parser;
use eframe::egui;
use site_core::{PageId, SiteContent};

use crate::ui::SiteApp;

/// Site content compiled into the binary; `--content` overrides it.
const EMBEDDED_CONTENT: &str = include_str!("../assets/site.toml");

#[derive(Debug, Parser)]
#[command(name = "site_gui", about = "Desktop shell for a static informational site")]
struct Args {
    /// Page to open at startup (home, about, services, contact).
    #[arg(long, default_value = "home")]
    page: String,

    /// Load the site content document from a file instead of the
    /// embedded copy.
    #[arg(long)]
    content: Option<PathBuf>,

    /// UI scale factor; persisted across runs once set.
    #[arg(long)]
    text_scale: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let text = match &args.content {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read site content from {}", path.display()))?,
        None => EMBEDDED_CONTENT.to_string(),
    };
    let content = SiteContent::from_toml(&text).context("invalid site content")?;
    let start_page = PageId::parse(&args.page).ok_or_else(|| {
        anyhow!(
            "unknown page `{}` (expected one of home, about, services, contact)",
            args.page
        )
    })?;

    tracing::info!(site = %content.site.name, start = %start_page, "starting desktop shell");

    let title = content.site.name.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([360.0, 540.0]),
        ..Default::default()
    };
    let text_scale = args.text_scale;
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(SiteApp::new(cc, content, start_page, text_scale)))),
    )
    .map_err(|err| anyhow!("failed to run desktop shell: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{Args, EMBEDDED_CONTENT};
    use clap::Parser;
    use site_core::{PageId, SiteContent};

    #[test]
    fn embedded_content_is_valid() {
        let content = SiteContent::from_toml(EMBEDDED_CONTENT).expect("embedded content loads");
        assert_eq!(content.site.name, "Meridian Studio");
        for page in PageId::ALL {
            assert!(!content.page(page).nav_label.is_empty());
        }
    }

    #[test]
    fn default_args_open_the_home_page() {
        let args = Args::parse_from(["site_gui"]);
        assert_eq!(PageId::parse(&args.page), Some(PageId::Home));
        assert!(args.content.is_none());
        assert!(args.text_scale.is_none());
    }
}
