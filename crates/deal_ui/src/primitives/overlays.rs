use super::*;

#[component]
/// Floating menu surface anchored next to its trigger.
///
/// Clicks inside the surface stop at the surface and are reported through `on_click`.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("context-dropdown", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:click:undelegated=move |ev: MouseEvent| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry; `danger` entries carry the destructive styling.
pub fn MenuItem(
    #[prop(optional_no_strip)] icon: Option<String>,
    #[prop(optional)] danger: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="menuitem"
            class=if danger { "dropdown-item danger" } else { "dropdown-item" }
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-icon=icon
            data-ui-danger=bool_token(danger)
            on:click:undelegated=move |ev: MouseEvent| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Non-interactive separator between menu entries.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="dropdown-divider"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Full-viewport overlay plus centered dialog.
///
/// Clicks on the dialog never reach the backdrop handler; `active` drives the CSS
/// transition class.
pub fn ModalFrame(
    #[prop(into)] title: String,
    #[prop(into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] on_backdrop: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || if active.get() { "modal-overlay active" } else { "modal-overlay" }
            data-ui-primitive="true"
            data-ui-kind="modal"
            data-ui-state=move || if active.get() { "open" } else { "closed" }
            on:click:undelegated=move |_| {
                if let Some(on_backdrop) = on_backdrop.as_ref() {
                    on_backdrop.call(());
                }
            }
        >
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                on:click:undelegated=move |ev: MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click:undelegated=move |_| {
                            if let Some(on_close) = on_close.as_ref() {
                                on_close.call(());
                            }
                        }
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-content">{children()}</div>
            </div>
        </div>
    }
}

#[component]
/// Transient notification element; `shown` drives the `show` transition class.
pub fn Toast(
    #[prop(into)] message: String,
    #[prop(default = ToastTone::Info)] tone: ToastTone,
    #[prop(into)] shown: MaybeSignal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let tone = tone.token();
    view! {
        <div
            class=move || {
                if shown.get() {
                    format!("notification {tone} show")
                } else {
                    format!("notification {tone}")
                }
            }
            role="status"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone
        >
            <span>{message}</span>
            <button
                type="button"
                aria-label="Dismiss"
                on:click:undelegated=move |_| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(());
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}

#[component]
/// Hover tooltip label.
pub fn Tooltip(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="tooltip" role="tooltip" data-ui-primitive="true" data-ui-kind="tooltip">
            {text}
        </div>
    }
}
