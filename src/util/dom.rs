//! Thin `web-sys` helpers: element lookup, listeners, form field access.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Element with `id`, if present and of type `T`.
pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id)?.dyn_into::<T>().ok()
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// The closure is never freed. Listeners on content swapped out by soft
/// navigation stay allocated until the next full page load.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::debug!("add_event_listener({event}) failed: {}", describe_js(&err));
        return;
    }
    cb.forget();
}

/// Best-effort readable form of a thrown JS value.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// A text-bearing form control: `<input>` or `<textarea>`.
#[derive(Clone)]
pub enum FieldElement {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldElement {
    pub fn find(id: &str) -> Option<Self> {
        let el = by_id(id)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea),
        }
    }

    pub fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }

    pub fn set_custom_validity(&self, message: &str) {
        match self {
            Self::Input(el) => el.set_custom_validity(message),
            Self::TextArea(el) => el.set_custom_validity(message),
        }
    }

    /// The browser's current `validationMessage`.
    pub fn validation_message(&self) -> String {
        let message = match self {
            Self::Input(el) => el.validation_message(),
            Self::TextArea(el) => el.validation_message(),
        };
        message.unwrap_or_default()
    }

    /// `name` attribute, falling back to the element id.
    pub fn log_name(&self) -> String {
        let el = self.element();
        el.get_attribute("name")
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| el.id())
    }

    /// Non-negative integer attribute such as `minlength`.
    pub fn usize_attr(&self, name: &str) -> Option<usize> {
        self.element().get_attribute(name)?.trim().parse().ok()
    }
}
