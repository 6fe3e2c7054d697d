use {
    crate::port::{
        CheckboxControl,
        VisibilityTarget,
    },
    gloo::events::EventListener,
    rooting::{
        el,
        scope_any,
        El,
        ScopeValue,
    },
    wasm_bindgen::{
        JsCast,
        JsValue,
    },
    web_sys::{
        HtmlElement,
        HtmlInputElement,
    },
};

pub static ATTR_TYPE: &str = "type";
pub static ATTR_TYPE_CHECKBOX: &str = "checkbox";
pub static EVENT_CHANGE: &str = "change";
pub static STYLE_DISPLAY: &str = "display";
pub static STYLE_DISPLAY_NONE: &str = "none";

/// Routes `tracing` events to the browser console. Later calls do nothing.
pub fn init_console_logging() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("Console logging already set up");
    }
}

fn warn_js(context: &str, e: JsValue) {
    tracing::warn!(error = ?e, "{}", context);
}

/// `<input type="checkbox">`
pub struct DomCheckbox {
    el: El,
}

impl DomCheckbox {
    /// For placing the checkbox in a tree.
    pub fn el(&self) -> &El {
        return &self.el;
    }

    fn input(&self) -> Option<HtmlInputElement> {
        return self.el.raw().dyn_into::<HtmlInputElement>().ok();
    }
}

impl CheckboxControl for DomCheckbox {
    fn create() -> Self {
        let out = el("input");
        if let Err(e) = out.raw().set_attribute(ATTR_TYPE, ATTR_TYPE_CHECKBOX) {
            warn_js("Failed to make input a checkbox", e);
        }
        return Self { el: out };
    }

    fn checked(&self) -> bool {
        let Some(input) = self.input() else {
            return false;
        };
        return input.checked();
    }

    fn set_checked(&self, checked: bool) {
        let Some(input) = self.input() else {
            return;
        };
        input.set_checked(checked);
    }

    fn on_change(&self, cb: Box<dyn Fn()>) -> ScopeValue {
        let raw = self.el.raw();
        return scope_any(EventListener::new(&raw, EVENT_CHANGE, move |_| {
            cb();
        }));
    }

    fn has_parent(&self) -> bool {
        return self.el.raw().parent_node().is_some();
    }

    fn detach(&self) {
        let raw = self.el.raw();
        let Some(parent) = raw.parent_node() else {
            return;
        };
        if let Err(e) = parent.remove_child(&raw) {
            warn_js("Failed to detach checkbox", e);
        }
    }
}

/// Drives an element's `display` style. Clones refer to the same element.
#[derive(Clone)]
pub struct DomVisibility(HtmlElement);

impl DomVisibility {
    pub fn new(element: HtmlElement) -> Self {
        return Self(element);
    }

    pub fn from_el(e: &El) -> Option<Self> {
        return e.raw().dyn_into::<HtmlElement>().ok().map(Self);
    }
}

impl VisibilityTarget for DomVisibility {
    fn set_visible(&self, visible: bool) {
        let res;
        if visible {
            res = self.0.style().set_property(STYLE_DISPLAY, "");
        } else {
            res = self.0.style().set_property(STYLE_DISPLAY, STYLE_DISPLAY_NONE);
        }
        if let Err(e) = res {
            warn_js("Failed to set element display", e);
        }
    }

    fn is_visible(&self) -> bool {
        let display = self.0.style().get_property_value(STYLE_DISPLAY).unwrap_or_default();
        return display != STYLE_DISPLAY_NONE;
    }
}
