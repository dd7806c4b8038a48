//! Deal dashboard state, reducer, and browser runtime.
//!
//! [`reduce_deal`] is the single owner of dashboard state transitions. It is driven either by
//! the Leptos [`DealProvider`] in the browser or by the headless [`DealRuntime`] with a virtual
//! clock.

pub mod components;
pub mod config;
mod effect_executor;
pub mod feed;
pub mod forms;
pub mod headless;
pub mod menus;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod scheduler;

pub use components::{use_deal_runtime, DealDashboard, DealProvider, DealRuntimeContext};
pub use config::{ConfigError, UiConfig, UiTimings};
pub use effect_executor::TimerHandle;
pub use forms::{FormError, FormField, FormKind, ModalBody, ModalSpec};
pub use headless::DealRuntime;
pub use menus::{MenuAnchor, MenuDismiss, MenuEntry};
pub use model::*;
pub use reducer::{reduce_deal, DealAction, Delay, ReducerError, RuntimeEffect};
