//! Headless button widget.
//!
//! [`ButtonWidget`] owns validated options and produces immutable [`ButtonElement`]
//! snapshots. Every option change goes through [`ButtonWidget::update`], which re-renders,
//! so the rendered `disabled` attribute and the event gate always agree.

use std::fmt;
use std::rc::Rc;

use crate::primitives::{button_class_list, ButtonSize, ButtonVariant};

const DEFAULT_LABEL: &str = "Label";
const DEFAULT_TYPE: &str = "button";

/// Event kinds a button listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEventKind {
    /// Pointer click.
    Click,
    /// Pointer entering the element.
    Hover,
    /// Keyboard or pointer focus.
    Focus,
    /// Focus leaving the element.
    Blur,
}

/// Callback invoked with the element snapshot that received the event.
pub type ButtonHandler = Rc<dyn Fn(ButtonEventKind, &ButtonElement)>;

/// Optional per-event callbacks.
#[derive(Clone, Default)]
pub struct ButtonHandlers {
    /// Click handler.
    pub on_click: Option<ButtonHandler>,
    /// Hover handler.
    pub on_hover: Option<ButtonHandler>,
    /// Focus handler.
    pub on_focus: Option<ButtonHandler>,
    /// Blur handler.
    pub on_blur: Option<ButtonHandler>,
}

impl ButtonHandlers {
    fn get(&self, kind: ButtonEventKind) -> Option<&ButtonHandler> {
        match kind {
            ButtonEventKind::Click => self.on_click.as_ref(),
            ButtonEventKind::Hover => self.on_hover.as_ref(),
            ButtonEventKind::Focus => self.on_focus.as_ref(),
            ButtonEventKind::Blur => self.on_blur.as_ref(),
        }
    }

    fn bound_kinds(&self) -> Vec<ButtonEventKind> {
        [
            ButtonEventKind::Click,
            ButtonEventKind::Hover,
            ButtonEventKind::Focus,
            ButtonEventKind::Blur,
        ]
        .into_iter()
        .filter(|kind| self.get(*kind).is_some())
        .collect()
    }
}

impl fmt::Debug for ButtonHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bound_kinds()).finish()
    }
}

/// Raw, unvalidated construction options.
///
/// `variant` and `size` are marker tokens (`"fill"`, `"text-only"`, `"small"`, ...);
/// unknown tokens are corrected with a warning when the widget is built.
#[derive(Debug, Clone, Default)]
pub struct ButtonOptions {
    /// Visible label.
    pub label: Option<String>,
    /// Variant token.
    pub variant: Option<String>,
    /// Size token.
    pub size: Option<String>,
    /// Markup placed in the leading icon slot.
    pub leading_icon: Option<String>,
    /// Whether the button starts disabled.
    pub disabled: bool,
    /// Extra class appended after the size class.
    pub class_name: Option<String>,
    /// Button `type` attribute.
    pub button_type: Option<String>,
    /// Accessible label.
    pub aria_label: Option<String>,
    /// Element id.
    pub id: Option<String>,
    /// Event callbacks.
    pub handlers: ButtonHandlers,
}

/// Validated options held by a [`ButtonWidget`].
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    /// Visible label.
    pub label: String,
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
    /// Markup placed in the leading icon slot.
    pub leading_icon: Option<String>,
    /// Whether events are suppressed and the element is disabled.
    pub disabled: bool,
    /// Extra class appended after the size class.
    pub class_name: Option<String>,
    /// Button `type` attribute.
    pub button_type: String,
    /// Accessible label.
    pub aria_label: Option<String>,
    /// Element id.
    pub id: Option<String>,
    /// Event callbacks.
    pub handlers: ButtonHandlers,
}

impl ButtonSpec {
    fn from_options(options: ButtonOptions) -> Self {
        Self {
            label: options
                .label
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            variant: options
                .variant
                .as_deref()
                .map(ButtonVariant::coerce)
                .unwrap_or_default(),
            size: options
                .size
                .as_deref()
                .map(ButtonSize::coerce)
                .unwrap_or_default(),
            leading_icon: options.leading_icon.filter(|icon| !icon.is_empty()),
            disabled: options.disabled,
            class_name: options.class_name.filter(|class| !class.is_empty()),
            button_type: options
                .button_type
                .filter(|ty| !ty.is_empty())
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            aria_label: options.aria_label,
            id: options.id,
            handlers: options.handlers,
        }
    }
}

/// Partial option update merged by [`ButtonWidget::update`].
#[derive(Debug, Clone, Default)]
pub struct ButtonPatch {
    /// New label.
    pub label: Option<String>,
    /// New variant token.
    pub variant: Option<String>,
    /// New size token.
    pub size: Option<String>,
    /// New leading icon markup.
    pub leading_icon: Option<String>,
    /// New disabled flag.
    pub disabled: Option<bool>,
    /// New extra class.
    pub class_name: Option<String>,
    /// New accessible label.
    pub aria_label: Option<String>,
}

/// Opaque identifier of the container an element is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentId(pub u64);

/// Immutable snapshot of one rendered button element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonElement {
    /// Render counter; each `render()` yields a new generation.
    pub generation: u64,
    /// `type` attribute.
    pub button_type: String,
    /// Class list in document order.
    pub class_list: Vec<String>,
    /// `disabled` attribute.
    pub disabled: bool,
    /// `aria-label` attribute.
    pub aria_label: Option<String>,
    /// `id` attribute.
    pub id: Option<String>,
    /// Contents of the `btn-icon` span, when present.
    pub icon_markup: Option<String>,
    /// Text of the `btn-label` span.
    pub label: String,
    /// Container holding the element, `None` for an orphan.
    pub parent: Option<ParentId>,
    /// Event kinds with a bound listener; at most one per kind.
    pub listeners: Vec<ButtonEventKind>,
}

impl ButtonElement {
    /// Space-separated `class` attribute.
    pub fn class_name(&self) -> String {
        self.class_list.join(" ")
    }

    /// Returns whether `class` is in the class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|candidate| candidate == class)
    }
}

/// Stateful wrapper around a single interactive button element.
#[derive(Debug)]
pub struct ButtonWidget {
    spec: ButtonSpec,
    element: Option<ButtonElement>,
    generation: u64,
}

impl ButtonWidget {
    /// Builds a widget, correcting invalid variant/size tokens. Never fails.
    pub fn new(options: ButtonOptions) -> Self {
        Self {
            spec: ButtonSpec::from_options(options),
            element: None,
            generation: 0,
        }
    }

    /// Current validated options.
    pub fn spec(&self) -> &ButtonSpec {
        &self.spec
    }

    /// Most recently rendered element, if any.
    pub fn element(&self) -> Option<&ButtonElement> {
        self.element.as_ref()
    }

    /// Produces a fresh element from the current options.
    ///
    /// A previously attached element is replaced in its parent; otherwise the new element
    /// is an orphan.
    pub fn render(&mut self) -> &ButtonElement {
        let parent = self.element.as_ref().and_then(|element| element.parent);
        let element = self.build_element(parent);
        self.element.insert(element)
    }

    /// Places the current element into `parent`, rendering first if needed.
    pub fn attach(&mut self, parent: ParentId) -> &ButtonElement {
        let element = match self.element.take() {
            Some(element) => element,
            None => self.build_element(None),
        };
        self.element.insert(ButtonElement {
            parent: Some(parent),
            ..element
        })
    }

    fn build_element(&mut self, parent: Option<ParentId>) -> ButtonElement {
        self.generation += 1;
        let spec = &self.spec;
        ButtonElement {
            generation: self.generation,
            button_type: spec.button_type.clone(),
            class_list: button_class_list(spec.variant, spec.size, spec.class_name.as_deref()),
            disabled: spec.disabled,
            aria_label: spec.aria_label.clone(),
            id: spec.id.clone(),
            icon_markup: spec.leading_icon.clone(),
            label: spec.label.clone(),
            parent,
            listeners: spec.handlers.bound_kinds(),
        }
    }

    /// Merges `patch`, re-validates, and re-renders when an element exists.
    pub fn update(&mut self, patch: ButtonPatch) {
        if let Some(label) = patch.label {
            self.spec.label = if label.is_empty() {
                DEFAULT_LABEL.to_string()
            } else {
                label
            };
        }
        if let Some(variant) = patch.variant {
            self.spec.variant = ButtonVariant::coerce(&variant);
        }
        if let Some(size) = patch.size {
            self.spec.size = ButtonSize::coerce(&size);
        }
        if let Some(icon) = patch.leading_icon {
            self.spec.leading_icon = Some(icon).filter(|icon| !icon.is_empty());
        }
        if let Some(disabled) = patch.disabled {
            self.spec.disabled = disabled;
        }
        if let Some(class_name) = patch.class_name {
            self.spec.class_name = Some(class_name).filter(|class| !class.is_empty());
        }
        if let Some(aria_label) = patch.aria_label {
            self.spec.aria_label = Some(aria_label);
        }
        if self.element.is_some() {
            self.render();
        }
    }

    /// Clears the disabled flag.
    pub fn enable(&mut self) {
        self.update(ButtonPatch {
            disabled: Some(false),
            ..ButtonPatch::default()
        });
    }

    /// Sets the disabled flag.
    pub fn disable(&mut self) {
        self.update(ButtonPatch {
            disabled: Some(true),
            ..ButtonPatch::default()
        });
    }

    /// Delivers an event to the rendered element.
    ///
    /// Returns `true` when a handler ran. Nothing fires for an unrendered widget, a disabled
    /// element, or an event kind without a handler.
    pub fn dispatch(&self, kind: ButtonEventKind) -> bool {
        let Some(element) = self.element.as_ref() else {
            return false;
        };
        if element.disabled || !element.listeners.contains(&kind) {
            return false;
        }
        match self.spec.handlers.get(kind) {
            Some(handler) => {
                handler(kind, element);
                true
            }
            None => false,
        }
    }

    /// Detaches and drops the element, returning the detached snapshot.
    pub fn destroy(&mut self) -> Option<ButtonElement> {
        self.element.take().map(|mut element| {
            element.parent = None;
            element
        })
    }
}

/// Button declared in markup through `data-btn-variant` / `data-btn-size` markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMarker {
    /// `data-btn-variant` value.
    pub variant: Option<String>,
    /// `data-btn-size` value.
    pub size: Option<String>,
    /// Text content used as the label.
    pub text: String,
    /// Inner markup of a `data-btn-icon` child.
    pub icon_markup: Option<String>,
    /// Existing `class` attribute, carried over.
    pub class_name: Option<String>,
}

impl ButtonWidget {
    /// Builds and renders a widget from a marker declaration.
    pub fn from_marker(marker: &ButtonMarker) -> Self {
        let mut widget = Self::new(ButtonOptions {
            label: Some(marker.text.trim().to_string()),
            variant: marker.variant.clone(),
            size: marker.size.clone(),
            leading_icon: marker.icon_markup.clone(),
            class_name: marker.class_name.clone(),
            ..ButtonOptions::default()
        });
        widget.render();
        widget
    }
}

/// Upgrades marker-declared buttons into rendered widgets.
pub fn init_buttons_from_markers(markers: &[ButtonMarker]) -> Vec<ButtonWidget> {
    markers.iter().map(ButtonWidget::from_marker).collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counting_click(counter: Rc<Cell<u32>>) -> ButtonHandlers {
        ButtonHandlers {
            on_click: Some(Rc::new(move |_, _| counter.set(counter.get() + 1))),
            ..ButtonHandlers::default()
        }
    }

    fn variant_classes(element: &ButtonElement) -> usize {
        ButtonVariant::ALL
            .iter()
            .filter(|variant| element.has_class(variant.class()))
            .count()
    }

    fn size_classes(element: &ButtonElement) -> usize {
        ButtonSize::ALL
            .iter()
            .filter(|size| element.has_class(size.class()))
            .count()
    }

    #[test]
    fn render_emits_exactly_one_variant_and_size_class() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let mut widget = ButtonWidget::new(ButtonOptions {
                    variant: Some(variant.token().to_string()),
                    size: Some(size.token().to_string()),
                    ..ButtonOptions::default()
                });
                let element = widget.render();
                assert_eq!(variant_classes(element), 1);
                assert_eq!(size_classes(element), 1);
                assert!(element.has_class(variant.class()));
                assert!(element.has_class(size.class()));
            }
        }
    }

    #[test]
    fn invalid_tokens_fall_back_to_fill_and_large() {
        let mut widget = ButtonWidget::new(ButtonOptions {
            variant: Some("glass".to_string()),
            size: Some("huge".to_string()),
            ..ButtonOptions::default()
        });
        assert_eq!(widget.spec().variant, ButtonVariant::Fill);
        assert_eq!(widget.spec().size, ButtonSize::Large);
        assert_eq!(widget.render().class_name(), "btn btn-fill btn-large");
    }

    #[test]
    fn defaults_apply_to_missing_options() {
        let mut widget = ButtonWidget::new(ButtonOptions::default());
        let element = widget.render();
        assert_eq!(element.label, "Label");
        assert_eq!(element.button_type, "button");
        assert_eq!(element.icon_markup, None);
        assert!(element.listeners.is_empty());
    }

    #[test]
    fn update_rerenders_in_place_for_attached_element() {
        let mut widget = ButtonWidget::new(ButtonOptions {
            label: Some("Save".to_string()),
            ..ButtonOptions::default()
        });
        widget.attach(ParentId(7));
        let first_generation = widget.element().map(|e| e.generation);

        widget.update(ButtonPatch {
            variant: Some("outline".to_string()),
            label: Some("Saved".to_string()),
            ..ButtonPatch::default()
        });

        let element = widget.element().expect("rendered");
        assert_ne!(Some(element.generation), first_generation);
        assert_eq!(element.parent, Some(ParentId(7)));
        assert_eq!(element.label, "Saved");
        assert!(element.has_class("btn-outline"));
    }

    #[test]
    fn render_without_parent_returns_orphan() {
        let mut widget = ButtonWidget::new(ButtonOptions::default());
        assert_eq!(widget.render().parent, None);
    }

    #[test]
    fn update_before_render_does_not_create_element() {
        let mut widget = ButtonWidget::new(ButtonOptions::default());
        widget.update(ButtonPatch {
            size: Some("small".to_string()),
            ..ButtonPatch::default()
        });
        assert!(widget.element().is_none());
        assert_eq!(widget.spec().size, ButtonSize::Small);
    }

    #[test]
    fn disabled_widget_suppresses_handlers_until_enabled() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = ButtonWidget::new(ButtonOptions {
            handlers: counting_click(clicks.clone()),
            ..ButtonOptions::default()
        });
        widget.render();

        assert!(widget.dispatch(ButtonEventKind::Click));
        widget.disable();
        assert!(widget.element().map(|e| e.disabled).unwrap_or(false));
        assert!(!widget.dispatch(ButtonEventKind::Click));
        widget.enable();
        assert!(widget.dispatch(ButtonEventKind::Click));
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn events_without_handler_or_element_do_not_fire() {
        let clicks = Rc::new(Cell::new(0));
        let mut widget = ButtonWidget::new(ButtonOptions {
            handlers: counting_click(clicks.clone()),
            ..ButtonOptions::default()
        });
        assert!(!widget.dispatch(ButtonEventKind::Click));
        widget.render();
        assert!(!widget.dispatch(ButtonEventKind::Hover));
        assert_eq!(
            widget.element().map(|e| e.listeners.clone()),
            Some(vec![ButtonEventKind::Click])
        );
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn destroy_detaches_and_drops_element() {
        let mut widget = ButtonWidget::new(ButtonOptions::default());
        widget.attach(ParentId(1));
        let detached = widget.destroy().expect("element");
        assert_eq!(detached.parent, None);
        assert!(widget.element().is_none());
        assert!(widget.destroy().is_none());
    }

    #[test]
    fn markers_upgrade_into_rendered_widgets() {
        let widgets = init_buttons_from_markers(&[
            ButtonMarker {
                variant: Some("text-only".to_string()),
                size: Some("medium".to_string()),
                text: "  Share  ".to_string(),
                icon_markup: Some("<svg></svg>".to_string()),
                class_name: Some("card-action".to_string()),
            },
            ButtonMarker {
                variant: Some("bogus".to_string()),
                text: "Go".to_string(),
                ..ButtonMarker::default()
            },
        ]);

        let first = widgets[0].element().expect("rendered");
        assert_eq!(first.class_name(), "btn btn-text-only btn-medium card-action");
        assert_eq!(first.label, "Share");
        assert_eq!(first.icon_markup.as_deref(), Some("<svg></svg>"));
        let second = widgets[1].element().expect("rendered");
        assert_eq!(second.class_name(), "btn btn-fill btn-large");
    }
}
