use deal_ui::ButtonWidget;

use super::*;
use crate::feed::{feed_content, CtaButton, FeedContent, TimelineEntry};
use crate::model::TabId;

#[component]
pub(super) fn FeedTabs(runtime: DealRuntimeContext) -> impl IntoView {
    let state = runtime.state;

    view! {
        <TabList aria_label="Deal feed">
            {TabId::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <Tab
                            marker=tab.marker()
                            selected=Signal::derive(move || {
                                state.with(|deal| deal.feed.active_tab == tab)
                            })
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DealAction::SelectTab { tab });
                            })
                        >
                            <span class="tab-label">{tab.label()}</span>
                            {move || {
                                state
                                    .with(|deal| deal.ripple.filter(|ripple| ripple.tab == tab))
                                    .map(|ripple| {
                                        view! {
                                            <span
                                                class="ripple"
                                                data-ripple=ripple.id.0
                                                aria-hidden="true"
                                            ></span>
                                        }
                                    })
                            }}
                        </Tab>
                    }
                })
                .collect_view()}
        </TabList>
    }
}

#[component]
pub(super) fn FeedView(runtime: DealRuntimeContext) -> impl IntoView {
    let state = runtime.state;
    let displayed = create_memo(move |_| state.with(|deal| deal.feed.displayed));
    let fading = create_memo(move |_| state.with(|deal| deal.feed.fading));

    view! {
        <section
            class="feed-container"
            data-ui-kind="feed"
            data-tab=move || displayed.get().marker()
            style:opacity=move || if fading.get() { "0" } else { "1" }
        >
            {move || render_feed(runtime, feed_content(displayed.get()))}
        </section>
    }
}

fn render_feed(runtime: DealRuntimeContext, content: FeedContent) -> View {
    match content {
        FeedContent::Timeline { entries, end_text } => view! {
            <div class="activity-timeline">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! { <ActivityCard runtime=runtime index=index entry=entry /> }
                    })
                    .collect_view()}
                <div class="timeline-end">{end_text}</div>
            </div>
        }
        .into_view(),
        FeedContent::Empty { title, body, cta } => view! {
            <EmptyState title=title body=body>
                {cta_button(runtime, cta)}
            </EmptyState>
        }
        .into_view(),
        FeedContent::Insights {
            headline,
            summary,
            metrics,
            recommendations,
        } => view! {
            <div class="ai-insights">
                <div class="insight-card">
                    <h3>{headline}</h3>
                    <p>{summary}</p>
                    <div class="insight-metrics">
                        {metrics
                            .into_iter()
                            .map(|metric| {
                                view! {
                                    <div class="metric">
                                        <span class="metric-value">{metric.value}</span>
                                        <span class="metric-label">{metric.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="recommendations">
                    <h4>"Recommended Actions"</h4>
                    {recommendations
                        .into_iter()
                        .map(|rec| {
                            view! {
                                <div class=format!("recommendation {}", rec.tone)>
                                    <div class="rec-title">{rec.title}</div>
                                    <div class="rec-description">{rec.description}</div>
                                    <span class="rec-impact">{rec.impact}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn ActivityCard(runtime: DealRuntimeContext, index: usize, entry: TimelineEntry) -> impl IntoView {
    let anchor = MenuAnchor::ActivityCard(index);

    view! {
        <article class="activity-card" data-card=index>
            <div class="card-header">
                <span
                    class=format!("timeline-icon {}", entry.icon.class())
                    aria-hidden="true"
                ></span>
                <h3 class="card-title">{entry.title}</h3>
                {entry.badge.map(|badge| view! { <span class="card-badge">{badge}</span> })}
                <div class="card-menu">
                    <button
                        type="button"
                        class="card-menu-btn"
                        aria-label="Card actions"
                        on:click:undelegated=move |_| {
                            runtime.dispatch_action(DealAction::OpenAnchorMenu { anchor });
                        }
                    >
                        "⋮"
                    </button>
                    <AnchoredMenu runtime=runtime anchor=anchor />
                </div>
            </div>
            <div class="card-meta">
                {entry
                    .assignee
                    .map(|assignee| view! { <span class="card-assignee">{assignee}</span> })}
                <span class="card-time">{entry.time_ago}</span>
            </div>
            <p class="card-summary">{entry.summary}</p>
            <div class="card-tags">
                {entry
                    .tags
                    .into_iter()
                    .map(|chip| view! { <Tag tone=chip.tone label=chip.label /> })
                    .collect_view()}
            </div>
            <div class="card-actions">
                {entry
                    .actions
                    .into_iter()
                    .map(|action| cta_button(runtime, action))
                    .collect_view()}
            </div>
        </article>
    }
}

fn cta_button(runtime: DealRuntimeContext, button: CtaButton) -> View {
    let widget = ButtonWidget::from_marker(&button.marker());
    widget
        .element()
        .cloned()
        .map(|element| {
            view! {
                <WidgetButton
                    element=element
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DealAction::TriggerCta { cta: button.cta });
                    })
                />
            }
        })
        .into_view()
}
