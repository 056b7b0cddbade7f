#![warn(clippy::all, clippy::pedantic)]

use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::{debug, error, info};
use tetrafall::app::{App, AppResult, frame_duration, run_app};
use tetrafall::config::{self, Config, LoggingConfig};
use tetrafall::context::ReadySignal;

fn init_logging(logging: &LoggingConfig) -> AppResult<()> {
    let env = env_logger::Env::default().default_filter_or(logging.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None).format_module_path(false);

    if let Some(path) = &logging.file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.try_init()?;
    Ok(())
}

fn main() -> AppResult<()> {
    // Logging depends on the config, so report a bad config only once the logger is up
    let loaded = config::loader::load_config_from_file();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    init_logging(&config.logging)?;
    info!("Starting TetraFall");

    match loaded {
        Ok(_) => info!("Configuration loaded successfully"),
        Err(e) => error!("Failed to load configuration: {e}"),
    }

    let (handle, assets) = ReadySignal::channel();
    let warmup = Duration::from_millis(config.frame_loop.warmup_ms);
    let warmup_thread = thread::spawn(move || {
        thread::sleep(warmup);
        handle.signal();
    });

    let mut app = App::new(&config, assets);
    app.resize(1280, 720);
    debug!("App initialized");

    run_app(&mut app, frame_duration(config.frame_loop.target_fps));
    app.shutdown();

    if warmup_thread.join().is_err() {
        error!("Warm-up thread panicked");
    }

    Ok(())
}
