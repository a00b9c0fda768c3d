//! Wall-clock timestamps for error log entries.

#[cfg(not(feature = "csr"))]
const EPOCH_ISO: &str = "1970-01-01T00:00:00.000Z";

/// Current time as an ISO-8601 UTC string (`Date.prototype.toISOString`).
///
/// Off-browser builds have no page clock and return the Unix epoch.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        EPOCH_ISO.to_owned()
    }
}
