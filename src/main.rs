use std::io::{Error, ErrorKind};
use std::process::ExitCode;

mod components;
mod conditions;
mod context;
mod metadata;
mod prelude;
mod registry;

const DEMO_CONFIG: &str = r#"
[context]
profiles = ["demo"]

[context.properties]
cache = "enabled"
listen = { key = "DEMO_LISTEN", default_value = "127.0.0.1:8080" }

[components.cache.conditions.on-property]
name = "cache"
value = "enabled"

[components.debug-endpoint.conditions.on-profile]
name = "demo"

[components.server.conditions.on-profile]
name = "production"
negating = true

[components.backup.conditions.always]
negating = true
"#;

fn load_config() -> std::io::Result<registry::Config> {
    match std::env::args().nth(1) {
        Some(path) => registry::Config::from_path(path),
        None => {
            tracing::info!("no configuration path provided, using the demo configuration");
            toml::from_str(DEMO_CONFIG).map_err(|error| Error::new(ErrorKind::InvalidData, error))
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("unable to load the configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    match config.build() {
        Ok((registry, report)) => {
            print!("{report}");
            let names = registry
                .components()
                .map(|name| name.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::info!(count = registry.len(), components = names.as_str(), "activation done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("unable to build the component registry: {err}");
            ExitCode::FAILURE
        }
    }
}
