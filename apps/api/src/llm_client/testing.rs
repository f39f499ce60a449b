use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{ChatModel, LlmError, Message, ResponseFormat};

/// Replies with queued text in order and records every request.
/// An exhausted queue fails like an empty model response.
#[derive(Default)]
pub struct CannedModel {
    replies: Mutex<VecDeque<String>>,
    pub seen: Mutex<Vec<(Vec<Message>, ResponseFormat)>>,
}

impl CannedModel {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(Vec<Message>, ResponseFormat)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for CannedModel {
    async fn complete(
        &self,
        messages: &[Message],
        format: ResponseFormat,
    ) -> Result<String, LlmError> {
        self.seen.lock().unwrap().push((messages.to_vec(), format));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyContent)
    }
}
