//! Page Props
//!
//! Reads the page kind and the props the server embedded in the shell.

use hackportal_core::{DashboardProps, HomeProps, PageKind, PROPS_ELEMENT_ID, ROOT_ELEMENT_ID};
use serde::de::DeserializeOwned;

/// Everything a page needs to mount
#[derive(Clone, Debug)]
pub enum Boot {
    Home(HomeProps),
    Dashboard(DashboardProps),
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn root_element() -> Option<web_sys::Element> {
    document()?.get_element_by_id(ROOT_ELEMENT_ID)
}

/// Read `data-page` from the body and decode the matching props.
///
/// Props that fail to decode fall back to empty ones, so the page still
/// renders its empty states.
pub fn read_boot() -> Option<Boot> {
    let document = document()?;
    let page = document.body()?.dataset().get("page")?;
    let kind = PageKind::parse(&page)?;

    let raw = document
        .get_element_by_id(PROPS_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    Some(match kind {
        PageKind::Home => Boot::Home(decode(&raw)),
        PageKind::Dashboard => Boot::Dashboard(decode(&raw)),
    })
}

fn decode<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to parse page props: {}", e).into());
        T::default()
    })
}
