use crate::constants::method;

/// Borrowed per-request view consumed by the gate. Framework adapters fill
/// this in from whatever request type they carry.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl RequestContext<'_> {
    /// Every `OPTIONS` request is treated as a preflight probe and
    /// short-circuited, whatever path it targets.
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}
