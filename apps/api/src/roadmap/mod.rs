// Structured career roadmaps: the JSON shape the model is asked for, recovery
// of that shape from raw model text, and the call that produces it.

pub mod engine;
pub mod models;
pub mod prompts;
pub mod recovery;

pub use engine::generate_roadmap;
pub use models::{StageCard, StructuredRoadmap};
pub use recovery::recover_roadmap;
