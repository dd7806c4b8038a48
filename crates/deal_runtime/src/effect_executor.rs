//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use std::time::Duration;

use leptos::*;
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, TimeoutHandle};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{ModalId, TimerId},
    reducer::{DealAction, Delay, RuntimeEffect},
    runtime_context::DealRuntimeContext,
};

#[derive(Debug, Clone, Copy)]
/// Browser handle for a scheduled continuation.
pub enum TimerHandle {
    /// Pending `requestAnimationFrame` callback.
    Frame(AnimationFrameRequestHandle),
    /// Pending `setTimeout` callback.
    Timeout(TimeoutHandle),
}

impl TimerHandle {
    fn cancel(self) {
        match self {
            Self::Frame(handle) => handle.cancel(),
            Self::Timeout(handle) => handle.clear(),
        }
    }
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DealRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

/// Cancels every live browser timer owned by `runtime`.
pub fn cancel_all(runtime: DealRuntimeContext) {
    let handles = runtime
        .timers
        .try_update_value(std::mem::take)
        .unwrap_or_default();
    for handle in handles.into_values() {
        handle.cancel();
    }
}

fn run_runtime_effect(runtime: DealRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::Schedule {
            timer,
            delay,
            action,
        } => schedule(runtime, timer, delay, *action),
        RuntimeEffect::CancelTimer(timer) => {
            if let Some(handle) = runtime
                .timers
                .try_update_value(|timers| timers.remove(&timer))
                .flatten()
            {
                handle.cancel();
            }
        }
        RuntimeEffect::Confirm { prompt, on_confirm } => {
            if confirm(&prompt) {
                runtime.dispatch_action(*on_confirm);
            }
        }
        RuntimeEffect::FocusModalInput(modal) => focus_modal_input(modal),
    }
}

fn schedule(runtime: DealRuntimeContext, timer: TimerId, delay: Delay, action: DealAction) {
    let fire = move || {
        runtime.timers.update_value(|timers| {
            timers.remove(&timer);
        });
        runtime.dispatch_action(action);
    };
    let handle = match delay {
        Delay::NextFrame => request_animation_frame_with_handle(fire).map(TimerHandle::Frame),
        Delay::After(ms) => set_timeout_with_handle(fire, Duration::from_millis(u64::from(ms)))
            .map(TimerHandle::Timeout),
    };
    match handle {
        Ok(handle) => runtime.timers.update_value(|timers| {
            timers.insert(timer, handle);
        }),
        Err(err) => logging::warn!("scheduling timer {} failed: {err:?}", timer.0),
    }
}

fn confirm(prompt: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(prompt) {
            Ok(answer) => answer,
            Err(err) => {
                logging::warn!("confirm dialog failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        logging::warn!("confirm unavailable outside the browser: {prompt}");
        false
    }
}

fn focus_modal_input(modal: ModalId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&modal.primary_input_dom_id()))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = modal;
}
