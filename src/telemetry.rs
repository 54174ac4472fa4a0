use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

/// Install the global subscriber. `RUST_LOG` overrides the INFO default.
pub fn install() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
