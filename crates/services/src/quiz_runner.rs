use std::sync::Arc;

use nura_core::model::{AnswerSheet, Notification};
use nura_core::quiz::{Effect, QuizAction, QuizSession};
use tracing::{debug, info, warn};

use crate::answers::AnswerPersistence;
use crate::error::QuizRunError;
use crate::submit::AnswerSubmitter;

const SUBMITTED_MESSAGE: &str = "Your answers have been submitted.";
const SUBMIT_FAILED_MESSAGE: &str = "Submission failed. Your answers could not be sent.";

/// Drives a [`QuizSession`], carrying out its storage and network effects.
///
/// Every effect is returned to the caller, including the IO ones, so the view
/// can mirror them. Failed IO never unwinds the session: it is logged and, for
/// the submission, surfaced as a notification.
pub struct QuizRunner {
    session: QuizSession,
    answers: AnswerPersistence,
    submitter: Arc<dyn AnswerSubmitter>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(
        session: QuizSession,
        answers: AnswerPersistence,
        submitter: Arc<dyn AnswerSubmitter>,
    ) -> Self {
        Self {
            session,
            answers,
            submitter,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Restore saved answers, then start the countdown on question 1.
    ///
    /// A view that attaches to a session already under way gets the full
    /// state replayed instead, since its timer and pending work start empty.
    pub async fn start(&mut self) -> Vec<Effect> {
        if self.session.is_started() || self.session.is_submitted() {
            debug!("reattaching to quiz session");
            return self.dispatch(QuizAction::Resync).await;
        }

        let saved = match self.answers.load().await {
            Ok(saved) => saved,
            Err(err) => {
                warn!(error = %err, "could not read saved answers");
                AnswerSheet::new()
            }
        };
        if !saved.is_empty() {
            info!(saved = saved.len(), "restoring saved answers");
        }

        let mut effects = self.dispatch(QuizAction::Restore(saved)).await;
        effects.extend(self.dispatch(QuizAction::Start).await);
        effects
    }

    /// Apply one action and carry out the resulting IO.
    pub async fn dispatch(&mut self, action: QuizAction) -> Vec<Effect> {
        debug!(?action, "quiz action");
        let mut effects = self.session.apply(action);

        let mut extra = Vec::new();
        for effect in effects.iter().filter(|effect| effect.is_io()) {
            match self.perform(effect).await {
                Ok(Some(notice)) => extra.push(Effect::Notify(notice)),
                Ok(None) => {}
                Err(QuizRunError::Submit(err)) => {
                    warn!(error = %err, "quiz submission failed");
                    extra.push(Effect::Notify(Notification::danger(SUBMIT_FAILED_MESSAGE)));
                }
                Err(err) => warn!(error = %err, "quiz storage effect failed"),
            }
        }
        effects.extend(extra);
        effects
    }

    async fn perform(&self, effect: &Effect) -> Result<Option<Notification>, QuizRunError> {
        match effect {
            Effect::PersistAnswers(sheet) => self.answers.save(sheet).await?,
            Effect::ClearPersistedAnswers => self.answers.clear().await?,
            Effect::RecordInteraction(event) => self.answers.record_interaction(event).await?,
            Effect::Transmit(submission) => {
                self.submitter.submit(submission).await?;
                return Ok(Some(Notification::success(SUBMITTED_MESSAGE)));
            }
            _ => {}
        }
        Ok(None)
    }
}
