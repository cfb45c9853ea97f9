// Infrastructure layer - Configuration and adapters
pub mod config;
pub mod http_response;
pub mod id_generators;
