//! Various test utils.

use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::Response;
use std::sync::Arc;
use std::sync::Once;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Routes `log`/`tracing` output to the test writer, at the level named by
/// the `LOG_LEVEL` environment variable.
pub fn setup_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let log_level = match std::env::var("LOG_LEVEL").as_deref().map(str::trim) {
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("WARN" | "warn") => tracing::Level::WARN,
            Ok("ERROR" | "error") => tracing::Level::ERROR,
            _ => DEFAULT_LOG_LEVEL,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Builds a schema from SDL alone; fields resolve from their source.
pub fn sdl_schema(sdl: &str) -> Arc<Schema> {
    Arc::new(SchemaBuilder::new().load_str(sdl).unwrap().build().unwrap())
}

pub fn to_json(response: &Response) -> String {
    serde_json::to_string(response).unwrap()
}
