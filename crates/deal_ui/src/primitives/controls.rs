use super::*;

#[component]
/// Dashboard button primitive carrying the `btn` class contract.
///
/// Handlers are suppressed while `disabled` is true, matching the behavior of the
/// headless [`crate::ButtonWidget`].
pub fn Button(
    #[prop(default = ButtonVariant::Fill)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Large)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] leading_icon: Option<String>,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_hover: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class_list(variant, size, layout_class).join(" ");
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class
            id=id
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if disabled.get() {
                    "disabled"
                } else if selected.get() {
                    "selected"
                } else {
                    "enabled"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            on:click:undelegated=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_hover) = on_hover.as_ref() {
                    on_hover.call(ev);
                }
            }
            on:focus=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        >
            {leading_icon.map(|markup| view! { <span class="btn-icon" inner_html=markup></span> })}
            <span class="btn-label">{children()}</span>
        </button>
    }
}

#[component]
/// Renders a [`crate::ButtonElement`] snapshot produced by a [`crate::ButtonWidget`].
///
/// Used for marker-declared buttons whose variant and size arrive as raw tokens.
pub fn WidgetButton(
    element: ButtonElement,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let disabled = element.disabled;
    view! {
        <button
            type=element.button_type.clone()
            class=element.class_name()
            id=element.id.clone()
            aria-label=element.aria_label.clone()
            disabled=disabled
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-state=if disabled { "disabled" } else { "enabled" }
            on:click:undelegated=move |ev| {
                if disabled {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {element
                .icon_markup
                .clone()
                .map(|markup| view! { <span class="btn-icon" inner_html=markup></span> })}
            <span class="btn-label">{element.label.clone()}</span>
        </button>
    }
}
