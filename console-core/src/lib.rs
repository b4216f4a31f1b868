pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod registry;
pub mod sources;
