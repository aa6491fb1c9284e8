//! The one place a request actually goes out.

use serde_json::Value;

use crate::path::{self, Query};
use crate::prelude::*;

/// One GET, one JSON body, no retries. Every failure mode collapses to
/// `None`; the cause is only visible through the verbose log.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    agent: HttpClient,
    options: Arc<Options>,
    base: Arc<str>,
}

impl Transport {
    pub(crate) fn new(agent: HttpClient, options: Arc<Options>, base: String) -> Self {
        Self {
            agent,
            options,
            base: base.into(),
        }
    }

    pub(crate) fn options(&self) -> &Options {
        &self.options
    }

    /// Effective language for a call: explicit query override first, then
    /// the client-wide option.
    pub(crate) fn language(&self, params: Option<&Query>) -> Lang {
        params
            .and_then(Query::lang)
            .unwrap_or(self.options.language)
    }

    pub(crate) fn url(&self, segments: &[&str], query: &Query, lang: Lang) -> String {
        path::build(&self.base, segments, &query.encode(lang))
    }

    pub(crate) fn get(&self, url: &str) -> Option<Value> {
        debug!(url, "GET");
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(err) => {
                if self.options.verbose {
                    error!(url, %err, "request failed");
                }
                return None;
            }
        };
        let body: Value = match response.into_json() {
            Ok(body) => body,
            Err(err) => {
                if self.options.verbose {
                    error!(url, %err, "invalid json body");
                }
                return None;
            }
        };
        // the service reports some not-founds in-body under an HTTP 200
        if body.get("status").and_then(Value::as_i64) == Some(404) {
            if self.options.verbose {
                error!(url, "status 404 in body");
            }
            return None;
        }
        Some(body)
    }

    /// GET plus typed projection. A body that does not fit `T` is as much
    /// of a miss as no body at all.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let body = self.get(url)?;
        match serde_json::from_value(body) {
            Ok(value) => Some(value),
            Err(err) => {
                if self.options.verbose {
                    error!(url, %err, "unexpected response shape");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::testutil::StubServer;

    fn transport(base: String) -> Transport {
        Transport::new(ureq::agent(), Arc::new(Options::default()), base)
    }

    #[test]
    fn returns_the_parsed_body() {
        let stub = StubServer::serve(vec![(200, r#"{"id": 1, "name": "Company Chocobo"}"#.into())]);
        let transport = transport(stub.base());
        let body = transport.get(&format!("{}/mounts/1", stub.base()));
        assert_eq!(body.expect("body")["name"], "Company Chocobo");
        assert_eq!(stub.requests(), vec!["/mounts/1".to_string()]);
    }

    #[test]
    fn maps_in_body_404_to_none() {
        let stub = StubServer::serve(vec![(
            200,
            r#"{"status": 404, "error": "Not Found"}"#.into(),
        )]);
        let transport = transport(stub.base());
        assert!(transport.get(&stub.base()).is_none());
    }

    #[test]
    fn maps_http_failure_to_none() {
        let stub = StubServer::serve(vec![(500, r#"{"oops": true}"#.into())]);
        let transport = transport(stub.base());
        assert!(transport.get(&stub.base()).is_none());
    }

    #[test]
    fn maps_malformed_json_to_none() {
        let stub = StubServer::serve(vec![(200, "<html>not json</html>".into())]);
        let transport = transport(stub.base());
        assert!(transport.get(&stub.base()).is_none());
    }

    #[test]
    fn maps_connection_failure_to_none() {
        let transport = transport("http://127.0.0.1:1".into());
        assert!(transport.get("http://127.0.0.1:1/mounts").is_none());
    }

    #[test]
    fn shape_mismatch_is_a_miss() {
        let stub = StubServer::serve(vec![(200, r#"{"unexpected": []}"#.into())]);
        let transport = transport(stub.base());
        let parsed: Option<Vec<u64>> = transport.get_json(&stub.base());
        assert!(parsed.is_none());
    }

    #[test]
    fn one_request_per_get() {
        let stub = StubServer::serve(vec![(200, "{}".into()), (200, "{}".into())]);
        let transport = transport(stub.base());
        let _ = transport.get(&stub.base());
        assert_eq!(stub.requests().len(), 1);
    }
}
