use super::*;

#[component]
/// Tab strip container.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab trigger carrying its `data-tab` marker.
pub fn Tab(
    marker: &'static str,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="tab"
            class=move || if selected.get() { "tab active" } else { "tab" }
            data-tab=marker
            aria-selected=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="tab"
            on:click:undelegated=move |ev| {
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
/// Sidebar navigation entry.
pub fn NavItem(
    #[prop(into)] label: String,
    #[prop(into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] tooltip: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_hover: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_leave: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <a
            href="#"
            class=move || if active.get() { "nav-item active" } else { "nav-item" }
            data-tooltip=tooltip
            data-ui-primitive="true"
            data-ui-kind="nav-item"
            on:click:undelegated=move |ev: MouseEvent| {
                ev.prevent_default();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if let Some(on_hover) = on_hover.as_ref() {
                    on_hover.call(ev);
                }
            }
            on:mouseleave=move |ev| {
                if let Some(on_leave) = on_leave.as_ref() {
                    on_leave.call(ev);
                }
            }
        >
            <span class="nav-label">{label}</span>
        </a>
    }
}

#[component]
/// Collapsible side-panel section with optional header actions.
///
/// `header_menu` is mounted in the header next to the `⋮` trigger, so it stays visible while
/// the body is collapsed.
pub fn DisclosurePanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    title: &'static str,
    section: &'static str,
    #[prop(into)] expanded: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_add: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_menu: Option<Callback<MouseEvent>>,
    #[prop(optional)] header_menu: Option<View>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("panel-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="disclosure"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-expanded=move || bool_token(expanded.get())
        >
            <div class="section-header" data-section=section>
                <button
                    type="button"
                    class="section-toggle"
                    aria-expanded=move || bool_token(expanded.get())
                    on:click:undelegated=move |ev| {
                        if let Some(on_toggle) = on_toggle.as_ref() {
                            on_toggle.call(ev);
                        }
                    }
                >
                    <span class="section-title">{title}</span>
                </button>
                {on_add.map(|on_add| view! {
                    <button
                        type="button"
                        class="expand-btn"
                        aria-label=format!("Add to {title}")
                        on:click:undelegated=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_add.call(ev);
                        }
                    >
                        "+"
                    </button>
                })}
                {on_menu.map(|on_menu| view! {
                    <button
                        type="button"
                        class="section-menu-btn"
                        aria-label=format!("{title} menu")
                        on:click:undelegated=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            on_menu.call(ev);
                        }
                    >
                        "⋮"
                    </button>
                })}
                {header_menu}
            </div>
            <Show when=move || expanded.get() fallback=|| ()>
                <div class="section-body">{children()}</div>
            </Show>
        </section>
    }
}
