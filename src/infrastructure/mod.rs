// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod ndjson;
pub mod synthetic_source;
