use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Navigate,
    Select,
    OpenSubmitPrompt,
    CancelSubmit,
    Submit,
    TimeUp,
    Hidden,
    Visible,
}

/// One entry of the `quiz_interactions` log kept in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub action: InteractionKind,
    pub timestamp: DateTime<Utc>,
    pub current_question: u32,
    pub time_remaining: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn serializes_action_as_snake_case() {
        let event = InteractionEvent {
            action: InteractionKind::OpenSubmitPrompt,
            timestamp: fixed_now(),
            current_question: 2,
            time_remaining: 540,
            detail: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "open_submit_prompt");
        assert_eq!(json["current_question"], 2);
        assert!(json.get("detail").is_none());
    }
}
