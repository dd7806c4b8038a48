use super::*;
use crate::forms::{FormKind, ModalSpec};

#[derive(Debug, Clone, Copy)]
struct NavEntry {
    key: &'static str,
    label: &'static str,
}

const MAIN_NAV: [NavEntry; 5] = [
    NavEntry {
        key: "dashboard",
        label: "Dashboard",
    },
    NavEntry {
        key: "deals",
        label: "Deals",
    },
    NavEntry {
        key: "contacts",
        label: "Contacts",
    },
    NavEntry {
        key: "tasks",
        label: "Tasks",
    },
    NavEntry {
        key: "reports",
        label: "Reports",
    },
];

const ORG_NAV: [NavEntry; 2] = [
    NavEntry {
        key: "team",
        label: "Team",
    },
    NavEntry {
        key: "settings",
        label: "Settings",
    },
];

fn nav_tooltip_anchor(key: &str) -> String {
    format!("nav-{key}")
}

#[component]
pub(super) fn Sidebar(runtime: DealRuntimeContext) -> impl IntoView {
    view! {
        <aside class="sidebar" data-ui-kind="sidebar">
            <div class="sidebar-header">
                <button
                    type="button"
                    class="sidebar-toggle"
                    aria-label="Toggle sidebar"
                    on:click:undelegated=move |_| runtime.dispatch_action(DealAction::ToggleSidebar)
                >
                    "☰"
                </button>
            </div>
            <Button
                layout_class="create-task-btn"
                size=ButtonSize::Medium
                on_click=Callback::new(move |_| {
                    runtime
                        .dispatch_action(DealAction::OpenModal(ModalSpec::form(FormKind::CreateTask)));
                })
            >
                "Create Task"
            </Button>
            <nav class="main-nav" aria-label="Main">
                {MAIN_NAV.into_iter().map(|entry| nav_item(runtime, entry)).collect_view()}
            </nav>
            <nav class="org-nav" aria-label="Organization">
                {ORG_NAV.into_iter().map(|entry| nav_item(runtime, entry)).collect_view()}
            </nav>
        </aside>
    }
}

fn nav_item(runtime: DealRuntimeContext, entry: NavEntry) -> View {
    let state = runtime.state;
    view! {
        <NavItem
            label=entry.label
            tooltip=entry.label
            active=Signal::derive(move || {
                state.with(|deal| deal.active_nav.as_deref() == Some(entry.key))
            })
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DealAction::SelectNav {
                    item: entry.key.to_string(),
                });
            })
            on_hover=Callback::new(move |_| {
                runtime.dispatch_action(DealAction::ShowTooltip {
                    anchor: nav_tooltip_anchor(entry.key),
                    text: entry.label.to_string(),
                });
            })
            on_leave=Callback::new(move |_| runtime.dispatch_action(DealAction::HideTooltip))
        />
    }
    .into_view()
}
