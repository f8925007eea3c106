use std::collections::BTreeMap;
use std::time::Duration;

use nura_core::model::{ChoiceKey, Notification, Question, QuestionId, QuizConfig};
use nura_core::quiz::{
    Effect, NavButtons, NavMarker, PrimaryAction, TimerTone, format_remaining,
};

/// Work the view must schedule after applying a batch of effects.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizCommand {
    ScrollToTop,
    ResumeTimer,
    PauseTimer,
    StopTimer,
    ScheduleAutoSubmit(Duration),
    Notify(Notification),
}

/// Open confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitPromptVm {
    pub answered: u32,
    pub total: u32,
}

impl SubmitPromptVm {
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "You have answered {} out of {} questions. Are you sure you want to submit?",
            self.answered, self.total
        )
    }
}

/// Everything the quiz page renders, rebuilt only from effects.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    title: String,
    questions: Vec<Question>,
    current: u32,
    progress_percent: f64,
    markers: Vec<NavMarker>,
    answered: u32,
    remaining: u32,
    nav: NavButtons,
    selected: BTreeMap<QuestionId, ChoiceKey>,
    remaining_secs: i64,
    tone: TimerTone,
    prompt: Option<SubmitPromptVm>,
    inputs_disabled: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        let total = config.total();
        Self {
            title: config.title().to_string(),
            questions: config.questions().to_vec(),
            current: 0,
            progress_percent: 0.0,
            markers: Vec::new(),
            answered: 0,
            remaining: total,
            nav: NavButtons {
                previous_enabled: false,
                primary: if total <= 1 {
                    PrimaryAction::Submit
                } else {
                    PrimaryAction::Next
                },
            },
            selected: BTreeMap::new(),
            remaining_secs: i64::from(config.time_limit_secs()),
            tone: TimerTone::for_remaining(i64::from(config.time_limit_secs())),
            prompt: None,
            inputs_disabled: false,
        }
    }

    /// Mirror a batch of effects, returning the ones that need scheduling.
    pub fn apply(&mut self, effects: &[Effect]) -> Vec<QuizCommand> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::ShowPanel { number } => self.current = *number,
                Effect::SetProgress { percent } => self.progress_percent = *percent,
                Effect::SetMarkers(markers) => self.markers.clone_from(markers),
                Effect::SetCounts {
                    answered,
                    remaining,
                } => {
                    self.answered = *answered;
                    self.remaining = *remaining;
                }
                Effect::SetNavButtons(nav) => self.nav = *nav,
                Effect::HighlightChoice { question, choice } => {
                    self.selected.insert(*question, choice.clone());
                }
                Effect::SetTimer {
                    remaining_secs,
                    tone,
                } => {
                    self.remaining_secs = *remaining_secs;
                    self.tone = *tone;
                }
                Effect::OpenSubmitPrompt { answered, total } => {
                    self.prompt = Some(SubmitPromptVm {
                        answered: *answered,
                        total: *total,
                    });
                }
                Effect::CloseSubmitPrompt => self.prompt = None,
                Effect::DisableInputs => self.inputs_disabled = true,
                Effect::ScrollToTop => commands.push(QuizCommand::ScrollToTop),
                Effect::ResumeTimer => commands.push(QuizCommand::ResumeTimer),
                Effect::PauseTimer => commands.push(QuizCommand::PauseTimer),
                Effect::StopTimer => commands.push(QuizCommand::StopTimer),
                Effect::ScheduleAutoSubmit { delay } => {
                    commands.push(QuizCommand::ScheduleAutoSubmit(*delay));
                }
                Effect::Notify(notification) => {
                    commands.push(QuizCommand::Notify(notification.clone()));
                }
                Effect::PersistAnswers(_)
                | Effect::ClearPersistedAnswers
                | Effect::Transmit(_)
                | Effect::RecordInteraction(_) => {}
            }
        }
        commands
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 1-based number of the visible question; 0 before the quiz starts.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn is_visible(&self, number: u32) -> bool {
        self.current == number
    }

    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%;", self.progress_percent)
    }

    #[must_use]
    pub fn markers(&self) -> &[NavMarker] {
        &self.markers
    }

    #[must_use]
    pub fn answered_label(&self) -> String {
        format!("Answered: {}", self.answered)
    }

    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!("Remaining: {}", self.remaining)
    }

    #[must_use]
    pub fn nav(&self) -> NavButtons {
        self.nav
    }

    #[must_use]
    pub fn is_selected(&self, question: QuestionId, choice: &ChoiceKey) -> bool {
        self.selected.get(&question) == Some(choice)
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_remaining(self.remaining_secs)
    }

    #[must_use]
    pub fn timer_class(&self) -> String {
        format!("quiz-timer {}", self.tone.css_class())
    }

    #[must_use]
    pub fn prompt(&self) -> Option<SubmitPromptVm> {
        self.prompt
    }

    #[must_use]
    pub fn inputs_disabled(&self) -> bool {
        self.inputs_disabled
    }
}

/// CSS classes of a navigation marker.
#[must_use]
pub fn marker_class(marker: &NavMarker) -> &'static str {
    match (marker.current, marker.answered) {
        (true, true) => "question-nav-btn current answered",
        (true, false) => "question-nav-btn current",
        (false, true) => "question-nav-btn answered",
        (false, false) => "question-nav-btn",
    }
}
