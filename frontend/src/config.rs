use chrono_tz::Tz;
use std::sync::OnceLock;

/// Storage keys probed for a bearer token, in order; the first non-empty
/// value wins.
pub const TOKEN_STORAGE_KEYS: [&str; 3] = ["token", "jwt", "accessToken"];

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// All week arithmetic happens in this fixed timezone, not the browser's.
pub fn current_time_zone() -> Tz {
    chrono_tz::America::New_York
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_globals() -> Option<String> {
    // Expect optional global object: window.__SHIFTBOARD_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"__SHIFTBOARD_ENV".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(env);
    js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from_globals() -> Option<String> {
    None
}

fn resolve_base_url() -> String {
    base_url_from_globals()
        .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn api_base_url() -> String {
    API_BASE_URL.get_or_init(resolve_base_url).clone()
}
