pub mod executor;
pub mod llm_client;
pub mod tool;
