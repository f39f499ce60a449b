//! Roadmap engine: asks the model for a JSON roadmap and recovers it.

use tracing::{debug, warn};

use crate::llm_client::{ChatModel, Message, ResponseFormat};
use crate::models::profile::Profile;
use crate::roadmap::models::StructuredRoadmap;
use crate::roadmap::prompts::{build_roadmap_prompt, ROADMAP_SYSTEM};
use crate::roadmap::recover_roadmap;

/// Generates a structured roadmap for `user_input`.
///
/// Returns `None` when the model's reply (or the failure text standing in for
/// it) cannot be recovered as a roadmap object. Callers skip roadmap-dependent
/// features in that case.
pub async fn generate_roadmap(
    model: &dyn ChatModel,
    profile: &Profile,
    user_input: &str,
) -> Option<StructuredRoadmap> {
    let messages = vec![
        Message::system(ROADMAP_SYSTEM),
        Message::user(build_roadmap_prompt(profile, user_input)),
    ];

    let raw = model
        .complete_or_sentinel(&messages, ResponseFormat::JsonObject)
        .await;

    match recover_roadmap(&raw) {
        Some(roadmap) => {
            debug!(
                "Roadmap generated: '{}' with {} stages",
                roadmap.career_path,
                roadmap.next_stages.len()
            );
            Some(roadmap)
        }
        None => {
            warn!("Roadmap unavailable: model reply was not recoverable JSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::CannedModel;

    #[tokio::test]
    async fn test_requests_json_mode_with_system_and_user_messages() {
        let model = CannedModel::new(&[r#"{"career_path": "BA then civil services"}"#]);
        let roadmap = generate_roadmap(&model, &Profile::default(), "UPSC?").await;

        assert_eq!(roadmap.unwrap().career_path, "BA then civil services");
        let requests = model.requests();
        let (messages, format) = &requests[0];
        assert_eq!(*format, ResponseFormat::JsonObject);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::system(ROADMAP_SYSTEM));
        assert!(messages[1].content.contains("UPSC?"));
    }

    #[tokio::test]
    async fn test_prose_wrapped_reply_is_recovered() {
        let model = CannedModel::new(&[
            "Sure, here it is:\n{\"college_keywords\": [\"arts\"], \"budget_preference\": \"low\"}\nGood luck!",
        ]);
        let roadmap = generate_roadmap(&model, &Profile::default(), "arts").await.unwrap();
        assert_eq!(roadmap.college_keywords, vec!["arts".to_string()]);
    }

    #[tokio::test]
    async fn test_model_failure_yields_none() {
        let model = CannedModel::failing();
        assert!(generate_roadmap(&model, &Profile::default(), "anything").await.is_none());
    }

    #[tokio::test]
    async fn test_prose_reply_yields_none() {
        let model = CannedModel::new(&["I think you should study law."]);
        assert!(generate_roadmap(&model, &Profile::default(), "law").await.is_none());
    }
}
