//! API server command handler

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use mindcare::api::{self, AppState};
use mindcare::classifier::ClassifierSlot;
use mindcare::config::AppConfig;

/// Apply CLI overrides and run the HTTP server until Ctrl-C
pub fn run(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
    model: Option<PathBuf>,
    no_preload: bool,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(model) = model {
        config.model.path = model;
    }
    if no_preload {
        config.model.preload = false;
    }
    config.validate().context("Invalid configuration")?;

    let slot = ClassifierSlot::from_directory(config.model.path.clone());
    let state = Arc::new(AppState::new(slot, &config));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(api::serve(state, &config.server, config.model.preload))
}
