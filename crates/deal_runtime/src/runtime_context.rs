//! Runtime provider and context wiring for the deal dashboard.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the live
//! browser timer handles. UI composition stays in [`crate::components`].

use std::collections::BTreeMap;

use leptos::*;

use crate::{
    config::UiConfig,
    effect_executor::{self, TimerHandle},
    model::{DealState, TimerId},
    reducer::{reduce_deal, DealAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading dashboard state and dispatching [`DealAction`] values.
pub struct DealRuntimeContext {
    /// Reactive dashboard state signal.
    pub state: RwSignal<DealState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Browser handles for scheduled continuations that have not fired yet.
    pub timers: StoredValue<BTreeMap<TimerId, TimerHandle>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DealAction>,
}

impl DealRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DealAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DealRuntimeContext`] to descendant components.
pub fn DealProvider(
    /// Timings and seed records; defaults to the build-time catalog.
    #[prop(optional)]
    config: Option<UiConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(UiConfig::from_catalog);
    let state = create_rw_signal(DealState::from_config(&config));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let timers = store_value(BTreeMap::<TimerId, TimerHandle>::new());

    let dispatch = Callback::new(move |action: DealAction| {
        let mut deal = state.get_untracked();
        let previous = deal.clone();

        match reduce_deal(&mut deal, action) {
            Ok(new_effects) => {
                if deal != previous {
                    state.set(deal);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("deal reducer error: {err}"),
        }
    });

    let runtime = DealRuntimeContext {
        state,
        effects,
        timers,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || effect_executor::cancel_all(runtime));

    children().into_view()
}

/// Returns the current [`DealRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DealProvider`].
pub fn use_deal_runtime() -> DealRuntimeContext {
    use_context::<DealRuntimeContext>().expect("DealRuntimeContext not provided")
}
