use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

use crate::application::WidgetHost;
use crate::domain::errors::{WidgetError, WidgetResult};
use crate::domain::widget::AttachSpec;

/// DOM-реализация [`WidgetHost`]: чистит контейнер и монтирует виджеты
/// по обоим соглашениям TradingView (embed-скрипт и конструктор).
///
/// Holds the host element id rather than a raw element so every call
/// re-resolves the container; after unmount the lookup misses and DOM
/// work silently stops.
pub struct DomWidgetHost {
    container_id: String,
}

impl DomWidgetHost {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    fn container_element(&self) -> Option<web_sys::HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.container_id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }
}

fn document() -> WidgetResult<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| WidgetError::Dom("document is not available".to_string()))
}

fn js_error(context: &str, err: JsValue) -> WidgetError {
    WidgetError::Dom(format!("{}: {:?}", context, err))
}

impl WidgetHost for DomWidgetHost {
    fn clear(&self) {
        if let Some(container) = self.container_element() {
            container.set_inner_html("");
        }
    }

    fn prepare(&self, spec: &AttachSpec) -> WidgetResult<()> {
        let container = self
            .container_element()
            .ok_or_else(|| WidgetError::Dom("widget container is not mounted".to_string()))?;
        let document = document()?;

        let node = document
            .create_element("div")
            .map_err(|e| js_error("failed to create widget node", e))?;

        match spec {
            AttachSpec::InlineEmbed { .. } => {
                node.set_class_name("tradingview-widget-container__widget");
            }
            AttachSpec::Constructor {
                container_id,
                height_px,
                ..
            } => {
                node.set_id(container_id);
                let height = match height_px {
                    Some(px) => format!("{}px", px),
                    None => "100%".to_string(),
                };
                node.set_attribute("style", &format!("height: {}; width: 100%;", height))
                    .map_err(|e| js_error("failed to style widget node", e))?;
            }
        }

        container
            .append_child(&node)
            .map_err(|e| js_error("failed to append widget node", e))?;
        Ok(())
    }

    fn attach(&self, spec: &AttachSpec) -> WidgetResult<()> {
        match spec {
            AttachSpec::InlineEmbed {
                script_url,
                config_json,
            } => {
                let container = self.container_element().ok_or_else(|| {
                    WidgetError::Dom("widget container is not mounted".to_string())
                })?;
                let widget_node = container.first_element_child().ok_or_else(|| {
                    WidgetError::Attach("prepared widget node is missing".to_string())
                })?;

                let document = document()?;
                let script: HtmlScriptElement = document
                    .create_element("script")
                    .map_err(|e| js_error("failed to create embed script", e))?
                    .dyn_into()
                    .map_err(|_| WidgetError::Dom("script element has wrong type".to_string()))?;
                script.set_src(script_url);
                script.set_type("text/javascript");
                script
                    .set_attribute("async", "true")
                    .map_err(|e| js_error("failed to mark script async", e))?;
                // The embed reads its configuration from the tag body
                script.set_inner_html(config_json);

                widget_node
                    .append_child(&script)
                    .map_err(|e| js_error("failed to inject embed script", e))?;
                Ok(())
            }
            AttachSpec::Constructor {
                container_id,
                config_json,
                ..
            } => {
                let document = document()?;
                if document.get_element_by_id(container_id).is_none() {
                    return Err(WidgetError::Attach(format!(
                        "container #{} no longer exists",
                        container_id
                    )));
                }

                let window = web_sys::window()
                    .ok_or_else(|| WidgetError::Dom("window is not available".to_string()))?;
                let tv = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("TradingView"))
                    .map_err(|e| js_error("failed to read window.TradingView", e))?;
                if tv.is_undefined() {
                    return Err(WidgetError::Attach(
                        "window.TradingView is undefined after script load".to_string(),
                    ));
                }

                let constructor: js_sys::Function =
                    js_sys::Reflect::get(&tv, &JsValue::from_str("widget"))
                        .map_err(|e| js_error("failed to read TradingView.widget", e))?
                        .dyn_into()
                        .map_err(|_| {
                            WidgetError::Attach(
                                "TradingView.widget is not a constructor".to_string(),
                            )
                        })?;

                let options = js_sys::JSON::parse(config_json)
                    .map_err(|e| js_error("widget options are not valid JSON", e))?;
                let args = js_sys::Array::of1(&options);
                js_sys::Reflect::construct(&constructor, &args).map_err(|e| {
                    WidgetError::Attach(format!("TradingView.widget constructor threw: {:?}", e))
                })?;
                Ok(())
            }
        }
    }
}
