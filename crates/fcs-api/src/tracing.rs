//! Logging setup.
//!
//! Development gets pretty, human readable output with source locations.
//! Production emits one flattened JSON object per event so log aggregators can
//! index the request span fields. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Environment;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Directives used when `RUST_LOG` is unset.
fn default_directives(env: Environment) -> &'static str {
    match env {
        Environment::Development => "debug,fcs_api=debug,fcs_db=debug,tower_http=debug,sqlx=warn",
        Environment::Production => "info,tower_http=info,sqlx=warn",
    }
}

fn output_layer(env: Environment) -> BoxedLayer {
    let fmt = tracing_subscriber::fmt::layer().with_target(true);
    match env {
        Environment::Development => fmt.pretty().with_file(true).with_line_number(true).boxed(),
        Environment::Production => fmt
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .boxed(),
    }
}

/// Install the global subscriber for `env`.
pub fn init_tracing(env: &Environment) {
    let env = *env;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    tracing_subscriber::registry()
        .with(output_layer(env).with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "tracing initialized");
}
