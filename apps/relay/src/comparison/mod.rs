// Stack Overflow answer comparison: prompt → completion → validation →
// rating label → persistence. All model calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod rating;
pub mod store;
pub mod validation;
