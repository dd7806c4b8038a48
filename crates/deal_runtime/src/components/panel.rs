use super::*;
use crate::forms::{FormKind, ModalSpec};
use crate::model::PanelSection;

fn open_form(runtime: DealRuntimeContext, kind: FormKind) -> Callback<web_sys::MouseEvent> {
    Callback::new(move |_| runtime.dispatch_action(DealAction::OpenModal(ModalSpec::form(kind))))
}

fn toggle(runtime: DealRuntimeContext, section: PanelSection) -> Callback<web_sys::MouseEvent> {
    Callback::new(move |_| runtime.dispatch_action(DealAction::ToggleSection { section }))
}

fn expanded(runtime: DealRuntimeContext, section: PanelSection) -> Signal<bool> {
    let state = runtime.state;
    Signal::derive(move || state.with(|deal| deal.section_expanded(section)))
}

#[component]
pub(super) fn DealPanel(runtime: DealRuntimeContext) -> impl IntoView {
    let state = runtime.state;

    view! {
        <aside class="right-sidebar" data-ui-kind="deal-panel">
            <DisclosurePanel
                title="Company Info"
                section=PanelSection::CompanyInfo.marker()
                expanded=expanded(runtime, PanelSection::CompanyInfo)
                on_toggle=toggle(runtime, PanelSection::CompanyInfo)
                on_menu=Callback::new(move |_| {
                    runtime.dispatch_action(DealAction::OpenAnchorMenu {
                        anchor: MenuAnchor::CompanyInfo,
                    });
                })
                header_menu=view! {
                    <AnchoredMenu runtime=runtime anchor=MenuAnchor::CompanyInfo />
                }
                .into_view()
            >
                <div class="company-name">{move || state.with(|deal| deal.title.clone())}</div>
            </DisclosurePanel>

            <DisclosurePanel
                title="Assignees"
                section=PanelSection::Assignees.marker()
                expanded=expanded(runtime, PanelSection::Assignees)
                on_toggle=toggle(runtime, PanelSection::Assignees)
                on_add=open_form(runtime, FormKind::AddAssignee)
            >
                <For
                    each=move || state.with(|deal| deal.assignees.clone())
                    key=|assignee| assignee.id
                    let:assignee
                >
                    {
                        let anchor = MenuAnchor::Assignee(assignee.id);
                        view! {
                            <div class="assignee-item">
                                <span class="assignee-avatar">{assignee.initials.clone()}</span>
                                <div class="assignee-info">
                                    <span class="assignee-name">{assignee.name.clone()}</span>
                                    <span class="assignee-role">{assignee.role.clone()}</span>
                                </div>
                                <button
                                    type="button"
                                    class="assignee-menu-btn"
                                    aria-label=format!("{} actions", assignee.name)
                                    on:click:undelegated=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        runtime.dispatch_action(DealAction::OpenAnchorMenu { anchor });
                                    }
                                >
                                    "⋯"
                                </button>
                                <AnchoredMenu runtime=runtime anchor=anchor />
                            </div>
                        }
                    }
                </For>
            </DisclosurePanel>

            <DisclosurePanel
                title="Custom Fields"
                section=PanelSection::CustomFields.marker()
                expanded=expanded(runtime, PanelSection::CustomFields)
                on_toggle=toggle(runtime, PanelSection::CustomFields)
                on_add=open_form(runtime, FormKind::AddCustomField)
            >
                {move || {
                    state
                        .with(|deal| deal.custom_fields.clone())
                        .into_iter()
                        .map(|field| {
                            view! {
                                <div class="custom-field">
                                    <span class="field-name">{field.name}</span>
                                    <span class="field-value">{field.value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </DisclosurePanel>

            <DisclosurePanel
                title="Shared Files"
                section=PanelSection::SharedFiles.marker()
                expanded=expanded(runtime, PanelSection::SharedFiles)
                on_toggle=toggle(runtime, PanelSection::SharedFiles)
                on_add=open_form(runtime, FormKind::AddSharedFile)
            >
                <For
                    each=move || state.with(|deal| deal.files.clone())
                    key=|file| file.id
                    let:file
                >
                    {
                        let anchor = MenuAnchor::SharedFile(file.id);
                        view! {
                            <div class="file-item">
                                <span class="file-icon" aria-hidden="true"></span>
                                <span class="file-name">{file.name.clone()}</span>
                                <button
                                    type="button"
                                    class="file-menu-btn"
                                    aria-label=format!("{} actions", file.name)
                                    on:click:undelegated=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        runtime.dispatch_action(DealAction::OpenAnchorMenu { anchor });
                                    }
                                >
                                    "⋯"
                                </button>
                                <AnchoredMenu runtime=runtime anchor=anchor />
                            </div>
                        }
                    }
                </For>
            </DisclosurePanel>
        </aside>
    }
}
