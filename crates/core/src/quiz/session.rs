use std::time::Duration;

use crate::model::{
    AnswerSheet, ChoiceKey, InteractionEvent, InteractionKind, Notification, NotificationLevel,
    QuestionId, QuizConfig,
};
use crate::quiz::countdown::{AUTO_SUBMIT_DELAY, Countdown};
use crate::quiz::effect::{Effect, NavButtons, NavMarker, PrimaryAction};
use crate::quiz::keyboard::{KeyInput, Shortcut, shortcut_for};
use crate::quiz::submission::Submission;
use crate::time::Clock;

const WARNING_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Shown before leaving a quiz that has not been submitted.
pub const LEAVE_WARNING: &str = "Are you sure you want to leave? Your quiz progress will be lost.";

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Every input the quiz reacts to, for callers that dispatch by value.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizAction {
    Start,
    Resync,
    Restore(AnswerSheet),
    Show(u32),
    Previous,
    Next,
    Select {
        question: QuestionId,
        choice: ChoiceKey,
    },
    RequestSubmit,
    CancelSubmit,
    ConfirmSubmit,
    Tick,
    AutoSubmit,
    VisibilityChanged {
        visible: bool,
    },
    Key(KeyInput),
}

/// Snapshot for analytics and the results banner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizStats {
    pub total_questions: u32,
    pub answered_questions: u32,
    pub current_question: u32,
    pub time_remaining: i64,
    pub time_elapsed: i64,
    pub completion_percentage: f64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Client-local state of one quiz attempt.
///
/// Every transition returns the effects a rendering layer should apply. The
/// answer sheet is the only record of selections; markers and counts are
/// recomputed from it on every change.
#[derive(Clone, Debug)]
pub struct QuizSession {
    config: QuizConfig,
    clock: Clock,
    current: u32,
    answers: AnswerSheet,
    countdown: Countdown,
    started: bool,
    prompt_open: bool,
    submitted: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(config: QuizConfig, clock: Clock) -> Self {
        let countdown = Countdown::new(config.time_limit_secs());
        Self {
            config,
            clock,
            current: 1,
            answers: AnswerSheet::new(),
            countdown,
            started: false,
            prompt_open: false,
            submitted: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.config.total()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn remaining_secs(&self) -> i64 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// True once [`QuizSession::start`] has run.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Leaving now would abandon an attempt under way.
    #[must_use]
    pub fn blocks_leaving(&self) -> bool {
        self.started && !self.submitted
    }

    #[must_use]
    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open
    }

    /// current / total × 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current) / f64::from(self.total()) * 100.0
    }

    #[must_use]
    pub fn is_answered(&self, number: u32) -> bool {
        self.config
            .question(number)
            .is_some_and(|question| self.answers.contains(question.id))
    }

    /// Number of questions in this quiz with a selected choice.
    #[must_use]
    pub fn answered_count(&self) -> u32 {
        let count = (1..=self.total())
            .filter(|number| self.is_answered(*number))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn markers(&self) -> Vec<NavMarker> {
        (1..=self.total())
            .map(|number| NavMarker {
                number,
                current: number == self.current,
                answered: self.is_answered(number),
            })
            .collect()
    }

    #[must_use]
    pub fn nav_buttons(&self) -> NavButtons {
        NavButtons {
            previous_enabled: self.current > 1,
            primary: if self.current == self.total() {
                PrimaryAction::Submit
            } else {
                PrimaryAction::Next
            },
        }
    }

    #[must_use]
    pub fn stats(&self) -> QuizStats {
        let answered = self.answered_count();
        let remaining = self.countdown.remaining_secs();
        QuizStats {
            total_questions: self.total(),
            answered_questions: answered,
            current_question: self.current,
            time_remaining: remaining,
            time_elapsed: i64::from(self.config.time_limit_secs()) - remaining,
            completion_percentage: f64::from(answered) / f64::from(self.total()) * 100.0,
        }
    }

    /// Route an action to its transition.
    pub fn apply(&mut self, action: QuizAction) -> Vec<Effect> {
        match action {
            QuizAction::Start => self.start(),
            QuizAction::Resync => self.resync(),
            QuizAction::Restore(saved) => self.restore(&saved),
            QuizAction::Show(number) => self.show(number),
            QuizAction::Previous => self.previous(),
            QuizAction::Next => self.next(),
            QuizAction::Select { question, choice } => self.select(question, choice),
            QuizAction::RequestSubmit => self.request_submit(),
            QuizAction::CancelSubmit => self.cancel_submit(),
            QuizAction::ConfirmSubmit => self.confirm_submit(),
            QuizAction::Tick => self.tick(),
            QuizAction::AutoSubmit => self.auto_submit(),
            QuizAction::VisibilityChanged { visible } => self.visibility_changed(visible),
            QuizAction::Key(input) => self.key(input),
        }
    }

    /// Start the countdown and show the first question. Runs once.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.started || self.submitted {
            return Vec::new();
        }
        self.started = true;

        let mut effects = vec![self.timer_effect()];
        if self.countdown.resume() {
            effects.push(Effect::ResumeTimer);
        }
        effects.extend(self.reveal(1));
        effects
    }

    /// Re-emit the full view state for a renderer that attaches mid-session.
    ///
    /// Timer work owned by the previous renderer is gone, so a running
    /// countdown asks for a fresh `ResumeTimer` and an expired, unsubmitted
    /// one reschedules the auto-submit.
    pub fn resync(&mut self) -> Vec<Effect> {
        let mut effects = vec![self.timer_effect()];
        effects.extend(self.reveal(self.current));
        effects.extend(
            self.answers
                .iter()
                .map(|(question, choice)| Effect::HighlightChoice {
                    question,
                    choice: choice.clone(),
                }),
        );

        if self.submitted {
            effects.push(Effect::CloseSubmitPrompt);
            effects.push(Effect::DisableInputs);
            return effects;
        }
        if self.prompt_open {
            effects.push(Effect::OpenSubmitPrompt {
                answered: self.answered_count(),
                total: self.total(),
            });
        }
        if self.countdown.is_expired() {
            effects.push(Effect::ScheduleAutoSubmit {
                delay: AUTO_SUBMIT_DELAY,
            });
        } else if self.countdown.is_running() {
            effects.push(Effect::ResumeTimer);
        }
        effects
    }

    /// Re-apply a saved answer sheet, keeping entries that match this quiz.
    pub fn restore(&mut self, saved: &AnswerSheet) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }

        let mut effects = Vec::new();
        for (question, choice) in saved.iter() {
            let known = self
                .config
                .question_by_id(question)
                .is_some_and(|q| q.has_choice(choice));
            if known {
                self.answers.record(question, choice.clone());
                effects.push(Effect::HighlightChoice {
                    question,
                    choice: choice.clone(),
                });
            }
        }
        if effects.is_empty() {
            return effects;
        }
        effects.push(self.counts_effect());
        effects.push(Effect::SetMarkers(self.markers()));
        effects
    }

    /// Show question `number`. Out-of-range numbers change nothing.
    pub fn show(&mut self, number: u32) -> Vec<Effect> {
        if self.submitted || number < 1 || number > self.total() {
            return Vec::new();
        }
        let mut effects = self.reveal(number);
        effects.push(self.interaction(InteractionKind::Navigate, Some(number.to_string())));
        effects
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        if self.current > 1 {
            self.show(self.current - 1)
        } else {
            Vec::new()
        }
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if self.current < self.total() {
            self.show(self.current + 1)
        } else {
            Vec::new()
        }
    }

    /// Record `choice` for `question`. Unknown questions or choices are ignored.
    pub fn select(&mut self, question: QuestionId, choice: ChoiceKey) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        let valid = self
            .config
            .question_by_id(question)
            .is_some_and(|q| q.has_choice(&choice));
        if !valid {
            return Vec::new();
        }

        self.answers.record(question, choice.clone());
        vec![
            Effect::PersistAnswers(self.answers.clone()),
            Effect::HighlightChoice {
                question,
                choice: choice.clone(),
            },
            self.counts_effect(),
            Effect::SetMarkers(self.markers()),
            self.interaction(
                InteractionKind::Select,
                Some(format!("{question}={choice}")),
            ),
        ]
    }

    /// Open the confirmation prompt with the current answered count.
    pub fn request_submit(&mut self) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        self.prompt_open = true;
        vec![
            Effect::OpenSubmitPrompt {
                answered: self.answered_count(),
                total: self.total(),
            },
            self.interaction(InteractionKind::OpenSubmitPrompt, None),
        ]
    }

    pub fn cancel_submit(&mut self) -> Vec<Effect> {
        if !self.prompt_open || self.submitted {
            return Vec::new();
        }
        self.prompt_open = false;
        vec![
            Effect::CloseSubmitPrompt,
            self.interaction(InteractionKind::CancelSubmit, None),
        ]
    }

    /// Submit from the confirmation prompt. Without an open prompt this does nothing.
    pub fn confirm_submit(&mut self) -> Vec<Effect> {
        if !self.prompt_open {
            return Vec::new();
        }
        self.submit(InteractionKind::Submit)
    }

    /// Submit after the countdown expired. Before expiry this does nothing.
    pub fn auto_submit(&mut self) -> Vec<Effect> {
        if !self.countdown.is_expired() {
            return Vec::new();
        }
        self.submit(InteractionKind::TimeUp)
    }

    /// One countdown second.
    pub fn tick(&mut self) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        let Some(outcome) = self.countdown.tick() else {
            return Vec::new();
        };

        let mut effects = vec![self.timer_effect()];
        if outcome.warning {
            effects.push(Effect::Notify(Notification::new(
                "Only 5 minutes remaining!",
                NotificationLevel::Warning,
                WARNING_NOTICE_DURATION,
            )));
        }
        if outcome.expired {
            effects.push(Effect::StopTimer);
            effects.push(Effect::Notify(
                Notification::info("Time's up! Submitting your quiz...")
                    .with_duration(AUTO_SUBMIT_DELAY),
            ));
            effects.push(Effect::ScheduleAutoSubmit {
                delay: AUTO_SUBMIT_DELAY,
            });
        }
        effects
    }

    /// Pause while hidden, resume where it left off once visible again.
    pub fn visibility_changed(&mut self, visible: bool) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        if visible {
            if self.countdown.resume() {
                return vec![
                    Effect::ResumeTimer,
                    self.interaction(InteractionKind::Visible, None),
                ];
            }
        } else if self.countdown.pause() {
            return vec![
                Effect::PauseTimer,
                self.interaction(InteractionKind::Hidden, None),
            ];
        }
        Vec::new()
    }

    pub fn key(&mut self, input: KeyInput) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        match shortcut_for(&input, self.total()) {
            Some(Shortcut::Previous) => self.previous(),
            Some(Shortcut::Next) => self.next(),
            Some(Shortcut::OpenSubmitPrompt) => self.request_submit(),
            Some(Shortcut::Jump(number)) => self.show(number),
            None => Vec::new(),
        }
    }

    fn submit(&mut self, kind: InteractionKind) -> Vec<Effect> {
        if self.submitted {
            return Vec::new();
        }
        self.submitted = true;
        self.prompt_open = false;
        self.countdown.stop();

        let submission = Submission::from_answers(&self.config, &self.answers);
        vec![
            self.interaction(kind, Some(submission.len().to_string())),
            Effect::CloseSubmitPrompt,
            Effect::StopTimer,
            Effect::ClearPersistedAnswers,
            Effect::DisableInputs,
            Effect::Transmit(submission),
        ]
    }

    fn reveal(&mut self, number: u32) -> Vec<Effect> {
        self.current = number;
        vec![
            Effect::ShowPanel { number },
            Effect::SetNavButtons(self.nav_buttons()),
            Effect::SetProgress {
                percent: self.progress_percent(),
            },
            Effect::SetMarkers(self.markers()),
            self.counts_effect(),
            Effect::ScrollToTop,
        ]
    }

    fn counts_effect(&self) -> Effect {
        let answered = self.answered_count();
        Effect::SetCounts {
            answered,
            remaining: self.total().saturating_sub(answered),
        }
    }

    fn timer_effect(&self) -> Effect {
        Effect::SetTimer {
            remaining_secs: self.countdown.remaining_secs(),
            tone: self.countdown.tone(),
        }
    }

    fn interaction(&self, action: InteractionKind, detail: Option<String>) -> Effect {
        Effect::RecordInteraction(InteractionEvent {
            action,
            timestamp: self.clock.now(),
            current_question: self.current,
            time_remaining: self.countdown.remaining_secs(),
            detail,
        })
    }
}
