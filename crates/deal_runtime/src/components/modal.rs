use super::*;
use crate::forms::{FieldSpec, FormKind, InputKind, ModalBody};
use crate::model::ModalId;

#[component]
pub(super) fn ModalLayer(runtime: DealRuntimeContext) -> impl IntoView {
    let state = runtime.state;
    let current = create_memo(move |_| {
        state.with(|deal| {
            deal.modal
                .as_ref()
                .map(|modal| (modal.id, modal.title.clone(), modal.body.clone()))
        })
    });

    move || {
        current.get().map(|(id, title, body)| {
            let active = Signal::derive(move || {
                state.with(|deal| {
                    deal.modal
                        .as_ref()
                        .is_some_and(|modal| modal.id == id && modal.is_active())
                })
            });
            view! {
                <ModalFrame
                    title=title
                    active=active
                    on_close=Callback::new(move |_| runtime.dispatch_action(DealAction::CloseModal))
                    on_backdrop=Callback::new(move |_| {
                        runtime.dispatch_action(DealAction::ModalBackdropClicked);
                    })
                >
                    {render_body(runtime, id, body)}
                </ModalFrame>
            }
        })
    }
}

fn render_body(runtime: DealRuntimeContext, modal: ModalId, body: ModalBody) -> View {
    match body {
        ModalBody::Markup(markup) => {
            view! { <div class="modal-markup" inner_html=markup></div> }.into_view()
        }
        ModalBody::Form(kind) => {
            view! { <ModalForm runtime=runtime modal=modal kind=kind /> }.into_view()
        }
        ModalBody::CompetitorAnalysis => view! {
            <div class="competitor-info">
                <h4>"LogixFlow Overview"</h4>
                <div class="competitor-stats">
                    <div class="stat">
                        <span class="stat-label">"Setup Time"</span>
                        <span class="stat-value">"2 weeks"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Our Setup Time"</span>
                        <span class="stat-value">"8 weeks"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Key Differentiator"</span>
                        <span class="stat-value">"Enterprise Support"</span>
                    </div>
                </div>
                <h4>"Talking Points"</h4>
                <ul>
                    <li>"Our longer setup includes full customization"</li>
                    <li>"24/7 enterprise support vs their business hours only"</li>
                    <li>"99.9% uptime SLA vs their 99.5%"</li>
                </ul>
                <div class="form-actions">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Medium
                        on_click=Callback::new(move |_| runtime.dispatch_action(DealAction::CloseModal))
                    >
                        "Close"
                    </Button>
                    <Button size=ButtonSize::Medium>"Download Battle Card"</Button>
                </div>
            </div>
        }
        .into_view(),
        ModalBody::PdfPreview { file_name } => view! {
            <div class="pdf-placeholder">
                <p>{format!("Preview of \"{file_name}\" not available in this demo.")}</p>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn ModalForm(runtime: DealRuntimeContext, modal: ModalId, kind: FormKind) -> impl IntoView {
    view! {
        <form
            class="modal-form"
            data-form=kind.title()
            on:submit=move |ev| {
                ev.prevent_default();
                runtime.dispatch_action(DealAction::SubmitModal);
            }
        >
            {kind
                .fields()
                .into_iter()
                .enumerate()
                .map(|(index, spec)| {
                    let id = (index == 0).then(|| modal.primary_input_dom_id());
                    view! {
                        <div class="form-group">
                            <label>{spec.label}</label>
                            {field_input(runtime, spec, id)}
                        </div>
                    }
                })
                .collect_view()}
            {kind
                .has_drop_zone()
                .then(|| {
                    view! {
                        <div class="drop-zone">
                            <p>"Drag and drop files here or click to browse"</p>
                        </div>
                    }
                })}
            {kind
                .attachments()
                .iter()
                .map(|name| view! { <div class="attachment">{*name}</div> })
                .collect_view()}
            <div class="form-actions">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Medium
                    on_click=Callback::new(move |_| runtime.dispatch_action(DealAction::CloseModal))
                >
                    "Cancel"
                </Button>
                <Button size=ButtonSize::Medium submit=true>
                    {kind.submit_label()}
                </Button>
            </div>
        </form>
    }
}

fn field_input(runtime: DealRuntimeContext, spec: FieldSpec, id: Option<String>) -> View {
    let state = runtime.state;
    let field = spec.field;
    let value = Signal::derive(move || {
        state.with(|deal| {
            deal.modal
                .as_ref()
                .map(|modal| modal.draft.value(field).to_string())
                .unwrap_or_default()
        })
    });
    let on_input = move |ev: web_sys::Event| {
        runtime.dispatch_action(DealAction::UpdateFormField {
            field,
            value: event_target_value(&ev),
        });
    };

    match spec.input {
        InputKind::TextArea { rows } => view! {
            <textarea
                id=id
                class="form-input"
                rows=rows.to_string()
                placeholder=spec.placeholder
                prop:value=move || value.get()
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        InputKind::Select(options) => view! {
            <select id=id class="form-input" on:change=on_input>
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option prop:selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_view(),
        InputKind::ReadOnly => view! {
            <input id=id type="text" class="form-input" readonly=true prop:value=move || value.get() />
        }
        .into_view(),
        InputKind::Text | InputKind::Email | InputKind::Date | InputKind::Time => {
            let input_type = match spec.input {
                InputKind::Email => "email",
                InputKind::Date => "date",
                InputKind::Time => "time",
                _ => "text",
            };
            view! {
                <input
                    id=id
                    type=input_type
                    class="form-input"
                    placeholder=spec.placeholder
                    prop:value=move || value.get()
                    on:input=on_input
                />
            }
            .into_view()
        }
    }
}
