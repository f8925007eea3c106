use std::time::Duration;

use crate::model::{AnswerSheet, ChoiceKey, InteractionEvent, Notification, QuestionId};
use crate::quiz::countdown::TimerTone;
use crate::quiz::submission::Submission;

/// State of one question marker in the navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavMarker {
    pub number: u32,
    pub current: bool,
    pub answered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub primary: PrimaryAction,
}

/// A side effect requested by a quiz transition.
///
/// The rendering layer applies the visual ones; the runner performs the
/// storage and network ones (`PersistAnswers`, `ClearPersistedAnswers`,
/// `Transmit`, `RecordInteraction`).
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Show panel `number`, hide every other panel.
    ShowPanel { number: u32 },
    SetProgress { percent: f64 },
    SetMarkers(Vec<NavMarker>),
    SetCounts { answered: u32, remaining: u32 },
    SetNavButtons(NavButtons),
    /// Highlight `choice` and clear any other highlight within `question`.
    HighlightChoice { question: QuestionId, choice: ChoiceKey },
    ScrollToTop,
    SetTimer { remaining_secs: i64, tone: TimerTone },
    Notify(Notification),
    OpenSubmitPrompt { answered: u32, total: u32 },
    CloseSubmitPrompt,
    PauseTimer,
    ResumeTimer,
    StopTimer,
    ScheduleAutoSubmit { delay: Duration },
    PersistAnswers(AnswerSheet),
    ClearPersistedAnswers,
    DisableInputs,
    Transmit(Submission),
    RecordInteraction(InteractionEvent),
}

impl Effect {
    /// True for effects the runner must carry out against storage or network.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Effect::PersistAnswers(_)
                | Effect::ClearPersistedAnswers
                | Effect::Transmit(_)
                | Effect::RecordInteraction(_)
        )
    }
}
