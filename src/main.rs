mod cli;
mod log_backend;
mod watch;

use std::error::Error;

use clap::Parser;
use orrery_scene::{SceneComposer, SceneConfig};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use cli::Args;
use log_backend::{LogBackend, PlanSummary};

fn load_config(args: &Args) -> Result<SceneConfig, Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => {
            let cfg = SceneConfig::load(path)?;
            log::info!("scene config loaded from {}", path.display());
            cfg
        }
        None => SceneConfig::default(),
    };
    args.apply(&mut cfg);
    Ok(cfg)
}

fn rebuild(args: &Args, backend: &mut LogBackend) -> Result<PlanSummary, Box<dyn Error>> {
    let cfg = load_config(args)?;
    let summary = SceneComposer::new(cfg).build_into(backend)?;
    if args.summary {
        println!("{}", toml::to_string(&summary)?);
    }
    Ok(summary)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut backend = LogBackend::new();
    let first = rebuild(&args, &mut backend);
    let Some(path) = args.config.clone().filter(|_| args.watch) else {
        let s = first?;
        log::info!("build {}: {} tracks, {} keyframes", s.build, s.tracks, s.keyframes);
        return Ok(());
    };
    if let Err(e) = first {
        log::warn!("initial build failed ({}): {}", path.display(), e);
    }

    // A watch that cannot start ends the run with an error.
    let (_watcher, rx) = watch::watch_config(&path)?;
    watch::rebuild_on_change(&rx, || {
        if !path.exists() {
            log::warn!("scene config missing: {}", path.display());
            return;
        }
        match rebuild(&args, &mut backend) {
            Ok(s) => log::info!(
                "scene config reloaded from {}; build {} has {} keyframes",
                path.display(),
                s.build,
                s.keyframes
            ),
            Err(e) => log::warn!("scene rebuild failed ({}): {}", path.display(), e),
        }
    });
    Ok(())
}
