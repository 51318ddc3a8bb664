// Domain layer - telemetry samples, rollup math and dashboard models
pub mod campus;
pub mod correlate;
pub mod dashboard;
pub mod filter;
pub mod rollup;
pub mod sample;
pub mod window;
