use anyhow::Context;
use sdui::kernel::config::load_api_config;
use sdui::kernel::runtime::build_runtime;
use sdui_logger::LoggerBuilder;
use sdui_server::Server;
use std::path::PathBuf;

/// Config file path: first CLI argument, else `SDUI_CONFIG`, else `server` in the working directory.
fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("SDUI_CONFIG"))
        .map_or_else(|| PathBuf::from("server"), PathBuf::from)
}

fn main() -> anyhow::Result<()> {
    let cfg = load_api_config(Some(config_path())).context("Critical: Configuration is malformed")?;

    let _log = LoggerBuilder::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?.init()?;

    let runtime = build_runtime(&cfg.runtime).context("Failed to initialize runtime")?;

    runtime.block_on(async { Server::builder().config(cfg).build().await?.run().await })
}
