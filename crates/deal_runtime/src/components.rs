//! Dashboard UI composition and interaction surfaces.

mod feed;
mod modal;
mod notifications;
mod panel;
mod sidebar;

use deal_ui::prelude::*;
use leptos::*;

use self::{
    feed::{FeedTabs, FeedView},
    modal::ModalLayer,
    notifications::NotificationStack,
    panel::DealPanel,
    sidebar::Sidebar,
};

use crate::{
    menus::{MenuAnchor, MenuEntry},
    model::MenuId,
    reducer::DealAction,
};

pub use crate::runtime_context::{use_deal_runtime, DealProvider, DealRuntimeContext};

fn menu_dom_id(menu: MenuId) -> String {
    format!("deal-menu-{}", menu.0)
}

#[component]
/// Renders the whole deal dashboard and routes document-level input into the reducer.
pub fn DealDashboard() -> impl IntoView {
    let runtime = use_deal_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        runtime.dispatch_action(DealAction::KeyPressed { key: ev.key() });
    });
    on_cleanup(move || escape_listener.remove());

    // Menu surfaces stop their own clicks, so anything reaching the window is outside the menu.
    let outside_click_listener = window_event_listener(ev::click, move |_| {
        if runtime.state.with_untracked(|deal| deal.menu.is_some()) {
            runtime.dispatch_action(DealAction::DocumentClicked { inside_menu: false });
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <div
            class=move || {
                if state.with(|deal| deal.sidebar_collapsed) {
                    "app-container sidebar-collapsed"
                } else {
                    "app-container"
                }
            }
            data-ui-primitive="true"
            data-ui-kind="deal-dashboard"
        >
            <Sidebar runtime=runtime />
            <main class="main-content">
                <header class="deal-header">
                    <h1 class="deal-title">{move || state.with(|deal| deal.title.clone())}</h1>
                </header>
                <FeedTabs runtime=runtime />
                <FeedView runtime=runtime />
            </main>
            <DealPanel runtime=runtime />
            <ModalLayer runtime=runtime />
            <NotificationStack runtime=runtime />
            {move || {
                state
                    .with(|deal| deal.tooltip.as_ref().map(|tooltip| tooltip.text.clone()))
                    .map(|text| view! { <Tooltip text=text /> })
            }}
        </div>
    }
}

#[component]
/// Dropdown rendered next to its trigger while the open menu belongs to `anchor`.
fn AnchoredMenu(runtime: DealRuntimeContext, anchor: MenuAnchor) -> impl IntoView {
    let menu = create_memo(move |_| {
        runtime.state.with(|deal| {
            deal.menu
                .as_ref()
                .filter(|menu| menu.anchor == anchor)
                .map(|menu| (menu.id, menu.entries.clone()))
        })
    });

    move || {
        menu.get().map(|(id, entries)| {
            view! {
                <MenuSurface
                    id=menu_dom_id(id)
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DealAction::DocumentClicked { inside_menu: true });
                    })
                >
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| match entry {
                            MenuEntry::Divider => view! { <MenuSeparator /> }.into_view(),
                            MenuEntry::Item { label, icon, danger, .. } => {
                                view! {
                                    <MenuItem
                                        icon=icon
                                        danger=danger
                                        on_click=Callback::new(move |_| {
                                            runtime
                                                .dispatch_action(DealAction::SelectMenuEntry { index });
                                        })
                                    >
                                        {label}
                                    </MenuItem>
                                }
                                    .into_view()
                            }
                        })
                        .collect_view()}
                </MenuSurface>
            }
        })
    }
}
