//! Shared UI primitive library for the deal dashboard.
//!
//! The crate owns the reusable Leptos primitives, the `btn` class contract, and the
//! headless [`ButtonWidget`] that models a single button's render/update/destroy
//! lifecycle without a live document.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
pub mod widget;

pub use primitives::{
    button_class_list, Button, ButtonSize, ButtonVariant, DisclosurePanel, EmptyState, MenuItem,
    MenuSeparator, MenuSurface, ModalFrame, NavItem, Tab, TabList, Tag, Toast, ToastTone, Tooltip,
    WidgetButton,
};
pub use widget::{
    init_buttons_from_markers, ButtonElement, ButtonEventKind, ButtonHandler, ButtonHandlers,
    ButtonMarker, ButtonOptions, ButtonPatch, ButtonSpec, ButtonWidget, ParentId,
};

/// Convenience imports for crates composing dashboard views.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, DisclosurePanel, EmptyState, MenuItem, MenuSeparator,
        MenuSurface, ModalFrame, NavItem, Tab, TabList, Tag, Toast, ToastTone, Tooltip,
        WidgetButton,
    };
}
