// Application layer - use cases and ports
pub mod campus_service;
pub mod dashboard_service;
pub mod sample_source;
pub mod streaming_service;
