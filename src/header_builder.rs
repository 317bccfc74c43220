use crate::config::GateConfig;
use crate::constants::header;
use crate::context::RequestContext;
use crate::decision::EchoOrigin;
use crate::headers::HeaderCollection;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a GateConfig,
}

/// Origin headers for one admitted request, plus whether an allow-origin
/// value was actually emitted (credentials ride along only when one was).
pub(crate) struct EmittedOrigin {
    pub(crate) headers: HeaderCollection,
    pub(crate) echoed: bool,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a GateConfig) -> Self {
        Self { config }
    }

    /// Resolve `Access-Control-Allow-Origin` for an admitted request.
    ///
    /// The wildcard is only ever emitted credential-less: with credentials
    /// enabled, an `Any` echo collapses to mirroring the caller's own origin.
    /// `Vary: Origin` accompanies every value that depends on the request.
    pub(crate) fn origin_headers(
        &self,
        echo: &EchoOrigin,
        request: &RequestContext<'_>,
    ) -> EmittedOrigin {
        let mut headers = HeaderCollection::new();
        match echo {
            EchoOrigin::Any => {
                if self.config.credentials {
                    self.mirror_request_origin(headers, request)
                } else {
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                    EmittedOrigin {
                        headers,
                        echoed: true,
                    }
                }
            }
            EchoOrigin::Request => self.mirror_request_origin(headers, request),
            EchoOrigin::Pinned(origin) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
                EmittedOrigin {
                    headers,
                    echoed: true,
                }
            }
            EchoOrigin::Omit => EmittedOrigin {
                headers,
                echoed: false,
            },
        }
    }

    fn mirror_request_origin(
        &self,
        mut headers: HeaderCollection,
        request: &RequestContext<'_>,
    ) -> EmittedOrigin {
        match request.origin {
            Some(origin) => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                EmittedOrigin {
                    headers,
                    echoed: true,
                }
            }
            None => EmittedOrigin {
                headers,
                echoed: false,
            },
        }
    }

    pub(crate) fn credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.config.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    pub(crate) fn methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !self.config.allowed_methods.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.config.allowed_methods.join(","),
            );
        }
        headers
    }

    pub(crate) fn allowed_headers_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if !self.config.allowed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.config.allowed_headers.join(", "),
            );
        }
        headers
    }

    /// `Vary: Origin` on denial, so shared caches never replay an allowed
    /// response to a disallowed origin.
    pub(crate) fn vary_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
