//! Browser-free runtime that executes reducer effects against a virtual clock.
//!
//! [`DealRuntime`] follows the same dispatch contract as the Leptos provider: the reducer runs on
//! a copy of the state, the copy is committed only on success, and emitted effects are executed
//! afterwards. Scheduled continuations wait in a [`Scheduler`] until the clock is advanced.

use leptos::logging;

use crate::config::UiConfig;
use crate::model::{DealState, ModalId};
use crate::reducer::{reduce_deal, DealAction, ReducerError, RuntimeEffect};
use crate::scheduler::Scheduler;

/// Answers confirmation prompts in place of `window.confirm`.
pub type ConfirmResponder = Box<dyn FnMut(&str) -> bool>;

/// Headless dashboard runtime.
pub struct DealRuntime {
    state: DealState,
    scheduler: Scheduler,
    confirm: ConfirmResponder,
    prompts: Vec<String>,
    focus_requests: Vec<ModalId>,
}

impl std::fmt::Debug for DealRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealRuntime")
            .field("state", &self.state)
            .field("scheduler", &self.scheduler)
            .field("prompts", &self.prompts)
            .finish_non_exhaustive()
    }
}

impl Default for DealRuntime {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl DealRuntime {
    /// Creates a runtime seeded from `config` that confirms every prompt.
    pub fn new(config: &UiConfig) -> Self {
        Self {
            state: DealState::from_config(config),
            scheduler: Scheduler::default(),
            confirm: Box::new(|_| true),
            prompts: Vec::new(),
            focus_requests: Vec::new(),
        }
    }

    /// Replaces the confirmation responder.
    pub fn with_confirm(mut self, responder: impl FnMut(&str) -> bool + 'static) -> Self {
        self.confirm = Box::new(responder);
        self
    }

    pub fn state(&self) -> &DealState {
        &self.state
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Timers that are still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Confirmation prompts shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Dialogs that requested input focus, oldest first.
    pub fn focus_requests(&self) -> &[ModalId] {
        &self.focus_requests
    }

    /// Runs `action` through the reducer and executes the resulting effects.
    ///
    /// # Errors
    ///
    /// Returns the reducer error unchanged; state is left untouched in that case.
    pub fn dispatch(&mut self, action: DealAction) -> Result<(), ReducerError> {
        let mut next = self.state.clone();
        match reduce_deal(&mut next, action) {
            Ok(effects) => {
                self.state = next;
                self.run_effects(effects);
                Ok(())
            }
            Err(err) => {
                logging::warn!("deal reducer error: {err}");
                Err(err)
            }
        }
    }

    /// Fires every timer due within the next `ms` milliseconds, including timers those
    /// continuations schedule inside the window.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(ms);
        while let Some((_, action)) = self.scheduler.pop_due(until) {
            // Continuation failures are logged by dispatch; the clock keeps running.
            let _ = self.dispatch(action);
        }
        self.scheduler.settle(until);
    }

    /// Runs everything waiting for the next animation frame.
    pub fn flush_frame(&mut self) {
        self.advance(0);
    }

    /// Advances until no timers remain.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            let wait = due.saturating_sub(self.scheduler.now_ms());
            self.advance(wait);
        }
    }

    fn run_effects(&mut self, effects: Vec<RuntimeEffect>) {
        for effect in effects {
            match effect {
                RuntimeEffect::Schedule {
                    timer,
                    delay,
                    action,
                } => self.scheduler.schedule(timer, delay, *action),
                RuntimeEffect::CancelTimer(timer) => {
                    self.scheduler.cancel(timer);
                }
                RuntimeEffect::Confirm { prompt, on_confirm } => {
                    let confirmed = (self.confirm)(&prompt);
                    self.prompts.push(prompt);
                    if confirmed {
                        let _ = self.dispatch(*on_confirm);
                    }
                }
                RuntimeEffect::FocusModalInput(modal) => self.focus_requests.push(modal),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::NotificationKind;

    #[test]
    fn failed_dispatch_leaves_state_untouched() {
        let mut runtime = DealRuntime::default();
        let before = runtime.state().clone();
        assert_eq!(
            runtime.dispatch(DealAction::SubmitModal),
            Err(ReducerError::NoOpenModal)
        );
        assert_eq!(runtime.state(), &before);
    }

    #[test]
    fn advancing_runs_chained_continuations_within_window() {
        let mut runtime = DealRuntime::default();
        runtime
            .dispatch(DealAction::Notify {
                message: "hi".to_string(),
                kind: NotificationKind::Info,
            })
            .unwrap();
        runtime.advance(3_300);
        assert!(runtime.state().notifications.is_empty());
        assert_eq!(runtime.now_ms(), 3_300);
        assert_eq!(runtime.pending_timers(), 0);
    }

    #[test]
    fn declined_confirmation_keeps_file() {
        let mut runtime = DealRuntime::default().with_confirm(|_| false);
        let file = runtime.state().files[0].id;
        runtime
            .dispatch(DealAction::RequestDeleteFile { file })
            .unwrap();
        assert_eq!(runtime.prompts().len(), 1);
        assert!(runtime.state().file(file).is_some());
    }
}
