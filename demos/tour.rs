//! Tour of both subsystems.
//!
//! ```text
//! cargo run --example tour              # every family, every modem
//! cargo run --example tour -- orc elf   # chosen families, in order
//! RUST_LOG=debug cargo run --example tour
//! ```
//!
//! Exits with 2 when a family name is not recognised.

use std::process::ExitCode;

use clap::Parser;
use tola_patterns::dispatch::{
    Behavior, DosBehavior, HpfBehavior, Modem, UnixBehavior, dispatch_all,
};
use tola_patterns::family::{FactorySelector, FamilyKey, Kingdom};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(about = "Tour the family factories and capability-gated dispatch")]
struct Args {
    /// Family names to build (default: all)
    families: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tola_patterns=info,tour=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let keys: Result<Vec<FamilyKey>, _> = if args.families.is_empty() {
        Ok(FamilyKey::ALL.to_vec())
    } else {
        args.families.iter().map(|name| name.parse()).collect()
    };
    let keys = match keys {
        Ok(keys) => keys,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut kingdom = Kingdom::new();
    for key in keys {
        kingdom.create_family(FactorySelector::select(key));
        if let Some(family) = kingdom.family() {
            tracing::info!("{}", family.force().description());
            tracing::info!("{}", family.stronghold().description());
            tracing::info!("{}", family.ruler().description());
        }
    }

    let [hayes, zoom, hpf] = Modem::ALL;
    let pairs: [(&Modem, &dyn Behavior); 5] = [
        (&hpf, &HpfBehavior),
        (&hayes, &DosBehavior),
        (&zoom, &DosBehavior),
        (&hayes, &UnixBehavior),
        (&zoom, &UnixBehavior),
    ];
    let report = dispatch_all(pairs);
    tracing::info!(
        executed = report.executed(),
        skipped = report.skipped(),
        "dispatch tour finished"
    );

    ExitCode::SUCCESS
}
