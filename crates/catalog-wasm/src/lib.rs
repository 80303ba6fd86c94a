use catalog_core::{
    CatalogConfig, CatalogWidget, DatasetSource, DisplayOptions, DisplaySurface, LoadError,
};
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlInputElement, Response};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to initialize console log");
    debug!("Initialized catalog-wasm logger");
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetches the dataset with the browser's `fetch`.
struct FetchSource {
    url: String,
}

impl DatasetSource for FetchSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let window =
            web_sys::window().ok_or_else(|| LoadError::fetch(&self.url, "no window available"))?;

        let response: Response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| LoadError::fetch(&self.url, js_error(&e)))?
            .dyn_into()
            .map_err(|_| LoadError::fetch(&self.url, "fetch did not resolve to a Response"))?;

        if !response.ok() {
            return Err(LoadError::fetch(
                &self.url,
                format!("HTTP {}", response.status()),
            ));
        }

        let body = response
            .array_buffer()
            .map_err(|e| LoadError::fetch(&self.url, js_error(&e)))?;
        let buffer = JsFuture::from(body)
            .await
            .map_err(|e| LoadError::fetch(&self.url, js_error(&e)))?;

        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{id}'")))
}

/// The search input and results container of the host page.
struct DomSurface {
    input: HtmlInputElement,
    results: Element,
}

impl DomSurface {
    fn bind(document: &Document, display: &DisplayOptions) -> Result<Self, JsValue> {
        let input = element(document, &display.input_id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| {
                JsValue::from_str(&format!("Element '{}' is not an <input>", display.input_id))
            })?;
        let results = element(document, &display.results_id)?;
        Ok(Self { input, results })
    }
}

impl DisplaySurface for DomSurface {
    fn query_text(&self) -> String {
        self.input.value()
    }

    fn replace_contents(&mut self, markup: &str) {
        self.results.set_inner_html(markup);
    }
}

/// Load the catalog and wire up the search button.
///
/// `config_toml` uses the `CatalogConfig` format; `None` or an empty string
/// selects the defaults. A dataset that fails to load is logged to the
/// console and leaves the page untouched; the returned promise still
/// resolves. Only a bad configuration or missing page elements reject it.
#[wasm_bindgen]
pub async fn mount(config_toml: Option<String>) -> Result<(), JsValue> {
    let config = CatalogConfig::parse(config_toml.as_deref().unwrap_or(""))
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let mut surface = DomSurface::bind(&document, &config.display)?;
    let button = element(&document, &config.display.button_id)?;
    let source = FetchSource {
        url: config.dataset.clone(),
    };

    let mut widget: CatalogWidget =
        CatalogWidget::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    if widget.mount(&source, &mut surface).await.is_err() {
        return Ok(());
    }

    let on_click = Closure::<dyn FnMut()>::new(move || widget.trigger(&mut surface));
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    info!("Catalog search ready");
    Ok(())
}
