use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlScriptElement;

use crate::domain::errors::{WidgetError, WidgetResult};
use crate::domain::loader::{FetchSettled, ScriptFetcher};

/// Element id of the injected shared script tag
pub const TV_SCRIPT_ELEMENT_ID: &str = "tradingview-widget-script";

/// Загрузчик общего скрипта: один `<script>` в `<head>` с
/// onload/onerror-колбэками.
pub struct DomScriptFetcher {
    url: String,
}

impl DomScriptFetcher {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

type SettledSlot = Rc<RefCell<Option<FetchSettled>>>;

/// onload and onerror share one slot; whichever fires first consumes it.
fn deliver(slot: &SettledSlot, result: WidgetResult<()>) {
    if let Some(callback) = slot.borrow_mut().take() {
        callback(result);
    }
}

impl ScriptFetcher for DomScriptFetcher {
    fn fetch(&self, on_settled: FetchSettled) {
        let slot: SettledSlot = Rc::new(RefCell::new(Some(on_settled)));

        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => {
                deliver(
                    &slot,
                    Err(WidgetError::Dom("document is not available".to_string())),
                );
                return;
            }
        };

        let script: HtmlScriptElement = match document
            .create_element("script")
            .ok()
            .and_then(|el| el.dyn_into().ok())
        {
            Some(script) => script,
            None => {
                deliver(
                    &slot,
                    Err(WidgetError::Dom(
                        "failed to create script element".to_string(),
                    )),
                );
                return;
            }
        };

        script.set_id(TV_SCRIPT_ELEMENT_ID);
        script.set_type("text/javascript");
        script.set_src(&self.url);
        let _ = script.set_attribute("async", "true");

        let onload_slot = Rc::clone(&slot);
        let onload = Closure::wrap(Box::new(move || {
            deliver(&onload_slot, Ok(()));
        }) as Box<dyn FnMut()>);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        // The script tag lives for the process lifetime, so do its handlers
        onload.forget();

        let onerror_slot = Rc::clone(&slot);
        let url = self.url.clone();
        let onerror = Closure::wrap(Box::new(move || {
            deliver(
                &onerror_slot,
                Err(WidgetError::ScriptLoad(format!("failed to load {}", url))),
            );
        }) as Box<dyn FnMut()>);
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        match document.head() {
            Some(head) => {
                if let Err(err) = head.append_child(&script) {
                    deliver(
                        &slot,
                        Err(WidgetError::Dom(format!(
                            "failed to append script tag: {:?}",
                            err
                        ))),
                    );
                }
            }
            None => deliver(
                &slot,
                Err(WidgetError::Dom("document has no <head>".to_string())),
            ),
        }
    }
}
