use super::*;

#[component]
pub(super) fn NotificationStack(runtime: DealRuntimeContext) -> impl IntoView {
    let state = runtime.state;

    view! {
        <div class="notification-stack" aria-live="polite" data-ui-kind="notification-stack">
            <For
                each=move || state.with(|deal| deal.notifications.clone())
                key=|notification| notification.id
                let:notification
            >
                {
                    let id = notification.id;
                    view! {
                        <Toast
                            message=notification.message.clone()
                            tone=notification.kind.tone()
                            shown=Signal::derive(move || {
                                state.with(|deal| deal.notification(id).is_some_and(|n| n.shown))
                            })
                            on_dismiss=Callback::new(move |_| {
                                runtime.dispatch_action(DealAction::DismissNotification {
                                    notification: id,
                                });
                            })
                        />
                    }
                }
            </For>
        </div>
    }
}
