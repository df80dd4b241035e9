//! Browser-side helpers for the manager component: clock, theme, downloads
//! and number formatting.

use chrono::{DateTime, Local, NaiveDate, Utc};
use gloo_timers::callback::Timeout;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// How long a download's object URL outlives the click that started it.
pub const REVOKE_DELAY_MILLIS: u32 = 60_000;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Mirrors the theme preference on `<body>` so page-level styles follow it.
pub fn apply_theme(dark_mode: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(if dark_mode { "dark" } else { "light" });
    }
}

/// Offers `contents` as a JSON file download named `file_name`.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // The URL has to stay valid until the browser has picked up the download.
    Timeout::new(REVOKE_DELAY_MILLIS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

pub fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Display form of an ISO date, e.g. `Sun, 7 Jan 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_outlives_the_click() {
        assert!(REVOKE_DELAY_MILLIS >= 10_000);
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
