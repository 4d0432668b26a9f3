//! Infrastructure layer - LLM providers, SQL checks and services

pub mod llm;
pub mod logging;
pub mod services;
pub mod sql;
