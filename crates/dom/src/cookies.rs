//! Cookie storage with `document.cookie` assignment semantics.

/// A stored cookie. The `expires` and `path` attributes are retained as
/// written so callers can inspect what was set; the jar does not evict on
/// expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub expires: Option<String>,
    pub path: Option<String>,
}

/// An ordered cookie jar.
///
/// Writing a cookie whose name is already present overwrites it in place,
/// keeping its original position, which is how cookie stores behave when a
/// page re-sets an existing cookie.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    /// Apply one cookie assignment line, e.g.
    /// `name=value; expires=Mon, 01 Jan 2120 00:00:00 GMT; path=/`.
    ///
    /// The first `name=value` segment names the cookie; later segments are
    /// attributes, matched case-insensitively, with unknown ones ignored.
    /// Lines with no `=` in the first segment are dropped.
    pub fn set_from_string(&mut self, line: &str) {
        let mut segments = line.split(';');
        let Some(first) = segments.next() else {
            return;
        };
        let Some((name, value)) = first.split_once('=') else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let mut cookie = Cookie {
            name: name.to_owned(),
            value: value.trim().to_owned(),
            expires: None,
            path: None,
        };

        for segment in segments {
            let (attr, attr_value) = match segment.split_once('=') {
                Some((attr, attr_value)) => (attr.trim(), attr_value.trim()),
                None => (segment.trim(), ""),
            };
            if attr.eq_ignore_ascii_case("expires") {
                cookie.expires = Some(attr_value.to_owned());
            } else if attr.eq_ignore_ascii_case("path") {
                cookie.path = Some(attr_value.to_owned());
            }
        }

        match self
            .cookies
            .iter_mut()
            .find(|existing| existing.name == cookie.name)
        {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    /// The `name=value` pairs of every stored cookie, joined the way the
    /// cookie string reads back (attributes are not echoed).
    pub fn cookie_string(&self) -> String {
        self.cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|cookie| cookie.name == name)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}
