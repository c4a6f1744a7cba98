use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use orrery_scene::SceneConfig;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "Plans a looping orbital-system animation and hands it to a scene backend")]
pub struct Args {
    /// Scene TOML; the classic solar system is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the master seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the timeline length in frames
    #[arg(long)]
    pub frames: Option<u32>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Rebuild whenever the config file changes
    #[arg(long, requires = "config")]
    pub watch: bool,

    /// Print the plan summary as TOML on stdout
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    /// Command-line overrides win over the file.
    pub fn apply(&self, cfg: &mut SceneConfig) {
        if let Some(seed) = self.seed {
            cfg.master_seed = seed;
        }
        if let Some(frames) = self.frames {
            cfg.timeline.total_frames = frames;
        }
    }
}
