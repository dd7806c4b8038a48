use super::*;

#[component]
/// Centered placeholder for feeds without content.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            <h3>{title}</h3>
            <p>{body}</p>
            {children()}
        </div>
    }
}

#[component]
/// Inline label chip such as "Deal at risk".
pub fn Tag(#[prop(into)] tone: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("tag {tone}") data-ui-primitive="true" data-ui-kind="tag">
            {label}
        </span>
    }
}
