// Chat flows: career guidance (with roadmap + college context), emotional
// support, and in-app help. All model calls go through llm_client.

pub mod enrichment;
pub mod handlers;
pub mod prompts;
