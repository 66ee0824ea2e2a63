mod config;
mod kind;
mod loader;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use asset::FileLoadable;
use clap::Parser;

use crate::{
    config::Config,
    kind::AssetKind,
    loader::{BackgroundLoader, LoadOutcome},
};

/// Loads files through the `FileLoadable` capability and reports what they held.
#[derive(Parser, Debug)]
#[clap(name = "fate_loader", version)]
struct Args {
    /// YAML settings file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Force an asset kind (text, binary, yaml, hdr) instead of inferring it
    #[clap(short, long)]
    kind: Option<AssetKind>,

    /// Load on a worker thread
    #[clap(short, long)]
    background: bool,

    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::default();
    if let Some(path) = &args.config {
        config
            .load_from_path(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .init();
    log::debug!("settings: {:?}", config);

    let paths = resolve_paths(&args.paths, &config);
    if paths.is_empty() {
        bail!("nothing to load, pass paths or list them in the settings file");
    }

    let kind = args.kind.or_else(|| config.kind());
    let failures = if args.background || config.background() {
        load_in_background(&paths, kind)?
    } else {
        load_in_place(&paths, kind)
    };

    if failures > 0 {
        bail!("{} of {} loads failed", failures, paths.len());
    }
    Ok(())
}

/// Command line paths win; the settings file is only consulted when none are given.
fn resolve_paths(given: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    if given.is_empty() {
        config.paths().to_vec()
    } else {
        given.to_vec()
    }
}

fn kind_for(path: &Path, forced: Option<AssetKind>) -> AssetKind {
    forced.unwrap_or_else(|| AssetKind::infer(path))
}

fn load_in_place(paths: &[PathBuf], forced: Option<AssetKind>) -> usize {
    let mut failures = 0;
    for path in paths {
        let kind = kind_for(path, forced);
        let mut asset = kind.create();
        match asset.load_from_path(path) {
            Ok(()) => println!("{}: {}", path.display(), asset.summary()),
            Err(error) => {
                log::error!("{} as {}: {}", path.display(), kind, error);
                failures += 1;
            }
        }
    }
    failures
}

fn load_in_background(paths: &[PathBuf], forced: Option<AssetKind>) -> Result<usize> {
    let loader = BackgroundLoader::new();
    let mut failures = 0;
    let mut pending = 0;
    for path in paths {
        loader.load(path.clone(), kind_for(path, forced).create())?;
        pending += 1;
        while let Some(outcome) = loader.try_recv() {
            pending -= 1;
            failures += report(outcome);
        }
    }

    for _ in 0..pending {
        failures += report(loader.recv()?);
    }
    Ok(failures)
}

/// Prints a finished load; returns 1 when it failed so callers can sum.
fn report(outcome: LoadOutcome) -> usize {
    match outcome.result {
        Ok(()) => {
            println!("{}: {}", outcome.path.display(), outcome.asset.summary());
            0
        }
        Err(_) => 1,
    }
}
