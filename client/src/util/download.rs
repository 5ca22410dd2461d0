//! Saving downloaded evidence clips through the browser.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Pull the file name out of a `Content-Disposition` header.
///
/// Handles quoted (`filename="a.mp4"`), bare (`filename=a.mp4`), and RFC 5987
/// (`filename*=UTF-8''a.mp4`) forms; the extended form wins when both appear.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value.trim().rsplit("''").next().unwrap_or_default();
                let name = percent_decode(encoded);
                if !name.is_empty() {
                    return Some(name);
                }
            }
            "filename" => {
                let name = value.trim().trim_matches('"');
                if !name.is_empty() {
                    plain = Some(name.to_owned());
                }
            }
            _ => {}
        }
    }
    plain
}

fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).and_then(|d| u8::try_from(d).ok())
}

/// Name used when the server does not suggest one.
pub fn fallback_clip_filename(incident_id: i64, clip_id: i64) -> String {
    format!("incident_{incident_id}_clip_{clip_id}.mp4")
}

/// How long a download's object URL stays valid after the link is clicked.
#[cfg(feature = "hydrate")]
const REVOKE_DELAY_MS: u32 = 10_000;

/// Hand `bytes` to the browser as a file download named `filename`.
///
/// # Errors
///
/// Returns a message if the blob, object URL, or temporary link cannot be created.
#[cfg(feature = "hydrate")]
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;

    let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element unavailable".to_owned())?;
    link.set_href(&url);
    link.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&link);
        link.click();
        let _ = body.remove_child(&link);
    } else {
        link.click();
    }
    // Revoking right after `click()` can cancel the download in some browsers.
    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}
