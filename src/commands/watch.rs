use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use lytics::application::watch::{WatchEvent, WatchOptions, WatchUseCase};
use lytics::config::Config;
use lytics::infrastructure::api::LyticsClient;
use lytics::LyticsError;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

/// Flags that override the layered configuration
#[derive(Debug, Default)]
pub struct WatchOverrides {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub key: Option<String>,
    pub api_url: Option<String>,
}

pub fn cmd_watch(path: &Path, overrides: WatchOverrides) -> Result<()> {
    if !path.is_dir() {
        return Err(LyticsError::DirectoryNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let mut config = Config::load_or_default(Some(path));
    if let Some(key) = overrides.key {
        config.api.key = Some(key);
    }
    if let Some(url) = overrides.api_url {
        config.api.url = url;
    }

    let ui = UiContext::new(overrides.json, overrides.color, &config);
    let api_key = config.api_key().ok_or(LyticsError::MissingApiKey)?;
    let client = LyticsClient::new(&config.api.url, api_key)
        .with_context(|| format!("could not create api client for {}", config.api.url))?;
    tracing::debug!(url = %client.base_url(), "api client ready");

    let options = WatchOptions::new(path.to_path_buf())
        .with_csv_rows(config.preview.csv_rows)
        .with_evaluate_limit(config.preview.evaluate_limit);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("could not set Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &path.display().to_string(),
                client.base_url().as_str(),
                ui.color,
                ui.unicode
            )
        );
    }

    let mut use_case = WatchUseCase::new(options, client);
    use_case.start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
