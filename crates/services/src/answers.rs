use std::sync::Arc;

use nura_core::model::{AnswerSheet, InteractionEvent};
use storage::repository::{ANSWERS_KEY, INTERACTIONS_KEY, LocalStore, StorageError};
use tracing::{debug, warn};

/// Keeps in-progress answers and the interaction log in local storage.
#[derive(Clone)]
pub struct AnswerPersistence {
    store: Arc<dyn LocalStore>,
}

impl AnswerPersistence {
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Overwrite the saved answer sheet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the sheet cannot be serialized or stored.
    pub async fn save(&self, answers: &AnswerSheet) -> Result<(), StorageError> {
        let json = serde_json::to_string(answers)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(ANSWERS_KEY, &json).await?;
        debug!(answered = answers.len(), "saved quiz answers");
        Ok(())
    }

    /// Load the saved answer sheet. Missing or malformed data yields an empty sheet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn load(&self) -> Result<AnswerSheet, StorageError> {
        let Some(raw) = self.store.get(ANSWERS_KEY).await? else {
            return Ok(AnswerSheet::new());
        };
        match serde_json::from_str(&raw) {
            Ok(sheet) => Ok(sheet),
            Err(err) => {
                warn!(error = %err, "discarding malformed saved answers");
                Ok(AnswerSheet::new())
            }
        }
    }

    /// Forget the saved answer sheet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key cannot be removed.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(ANSWERS_KEY).await
    }

    /// Append one event to the interaction log.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read or written.
    pub async fn record_interaction(&self, event: &InteractionEvent) -> Result<(), StorageError> {
        let mut log = self.interactions().await?;
        log.push(event.clone());
        let json =
            serde_json::to_string(&log).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(INTERACTIONS_KEY, &json).await
    }

    /// Every recorded event, oldest first. A malformed log reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn interactions(&self) -> Result<Vec<InteractionEvent>, StorageError> {
        let Some(raw) = self.store.get(INTERACTIONS_KEY).await? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "discarding malformed interaction log");
            Vec::new()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nura_core::model::{ChoiceKey, InteractionKind, QuestionId};
    use nura_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    fn persistence() -> (AnswerPersistence, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (AnswerPersistence::new(store.clone()), store)
    }

    #[tokio::test]
    async fn answers_round_trip_and_clear() {
        let (answers, _) = persistence();
        let sheet: AnswerSheet = [(QuestionId::new(5), ChoiceKey::new("c"))]
            .into_iter()
            .collect();

        answers.save(&sheet).await.unwrap();
        assert_eq!(answers.load().await.unwrap(), sheet);

        answers.clear().await.unwrap();
        assert!(answers.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_answers_read_as_empty() {
        let (answers, store) = persistence();
        store.set(ANSWERS_KEY, "not json").await.unwrap();
        assert!(answers.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn interactions_append_in_order() {
        let (answers, _) = persistence();
        for (kind, question) in [(InteractionKind::Navigate, 1), (InteractionKind::Select, 2)] {
            let event = InteractionEvent {
                action: kind,
                timestamp: fixed_now(),
                current_question: question,
                time_remaining: 600,
                detail: None,
            };
            answers.record_interaction(&event).await.unwrap();
        }
        let log = answers.interactions().await.unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].action, InteractionKind::Select);
    }
}
