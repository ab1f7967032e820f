//! WASM bindings for the tajs parser.
//!
//! Exposes parsing and canonical formatting to JavaScript via wasm-bindgen.
//! Every entry point throws a JS error carrying the positioned parse
//! message when the input is malformed.

use tajs_dom::Document;
use wasm_bindgen::prelude::*;

fn parse_document(source: &str) -> Result<Document, JsError> {
    tajs_parser::Parser::parse(source).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse markup and return `{ html: string, text: string, roots: string[] }`,
/// where `html` is the canonical serialization and `roots` lists the
/// top-level tag names in order.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let doc = parse_document(source)?;

    let roots = js_sys::Array::new();
    for el in &doc {
        roots.push(&el.tag_name().into());
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &doc.to_string().into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"text".into(), &doc.text_content().into())
        .map_err(|_| JsError::new("Failed to set text property"))?;
    js_sys::Reflect::set(&js_obj, &"roots".into(), &roots.into())
        .map_err(|_| JsError::new("Failed to set roots property"))?;

    Ok(js_obj.into())
}

/// Reformat markup into its canonical serialization.
#[wasm_bindgen]
pub fn format(source: &str) -> Result<String, JsError> {
    Ok(parse_document(source)?.to_string())
}

/// Text content of every top-level element, concatenated.
#[wasm_bindgen(js_name = textContent)]
pub fn text_content(source: &str) -> Result<String, JsError> {
    Ok(parse_document(source)?.text_content())
}

/// Get the parser version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
