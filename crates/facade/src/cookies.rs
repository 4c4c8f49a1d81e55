//! Cookie writes in `document.cookie` string form.

use crate::viewport::Viewport;
use chrono::{Duration, Utc};
use log::warn;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

impl Viewport {
    /// Store a cookie under the root path.
    ///
    /// `days` sets the expiry relative to now; `None` stores a session
    /// cookie with no expiry at all. An expiry too far away to represent
    /// is dropped with a warning rather than failing the write.
    pub fn cookie(&self, name: &str, value: &str, days: Option<i64>) {
        let mut line = format!("{name}={value}");
        if let Some(days) = days {
            let delta = Duration::milliseconds(days.saturating_mul(DAY_MS));
            match Utc::now().checked_add_signed(delta) {
                Some(expires) => {
                    let stamp = expires.format("%a, %d %b %Y %H:%M:%S GMT");
                    line.push_str(&format!("; expires={stamp}"));
                }
                None => {
                    warn!("cookie expiry {days} days away is unrepresentable, storing a session cookie");
                }
            }
        }
        line.push_str("; path=/");
        self.lock().cookies_mut().set_from_string(&line);
    }

    /// The `name=value; ...` view of every stored cookie, in insertion
    /// order.
    pub fn cookie_string(&self) -> String {
        self.lock().cookies().cookie_string()
    }
}
