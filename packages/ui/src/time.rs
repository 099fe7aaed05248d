//! Platform-aware wall-clock reading.

/// Current time as an ISO-8601 string, the format the discussion-post
/// endpoint expects for `postedAt`.
pub fn now_iso8601() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}
