//! Request path and query-string construction.
//!
//! Paths are built from plain segments: joined with `/`, spaces turned into
//! underscores (the service spells one category with a space), and the whole
//! URL lowercased. Query pairs keep their insertion order and get their
//! values percent-encoded.

use std::fmt;

use indexmap::IndexMap;
use url::form_urlencoded;

use crate::client::Lang;

/// Reserved substring inside a filter key or value, resolved to the
/// effective language code when the query string is encoded. The implicit
/// search predicate is spelled `name_{lang}_cont` and becomes e.g.
/// `name_fr_cont` for a French client.
pub const LANG_TOKEN: &str = "{lang}";

/// Filter key whose value is spliced into the query string as-is, without a
/// `key=` prefix or encoding. Legacy escape hatch for hand-built character
/// predicates.
const RAW_KEY: &str = "predicates";

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(v) => f.write_str(v),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// Filters for `index`/`search` operations: an optional language override
/// plus upstream `<field>_<op>` predicates in insertion order.
///
/// ```
/// use xivcollect::Query;
///
/// let q = Query::new()
///     .filter("description_en_cont", "Eureka")
///     .filter("patch_gt", 4.1)
///     .limit(20);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    language: Option<Lang>,
    filters: IndexMap<String, Scalar>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the client-wide language for this call.
    pub fn language(mut self, lang: Lang) -> Self {
        self.language = Some(lang);
        self
    }

    /// Add an upstream filter predicate. Setting a key twice keeps its
    /// original position and replaces the value.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Bound the returned result slice. The service still reports the full
    /// match count.
    pub fn limit(self, limit: u32) -> Self {
        self.filter("limit", limit)
    }

    pub(crate) fn lang(&self) -> Option<Lang> {
        self.language
    }

    /// Overlay `other` on top of `self`: its language wins when set, its
    /// filters win on key collision (keeping the original key position).
    pub(crate) fn merge(mut self, other: Query) -> Self {
        if other.language.is_some() {
            self.language = other.language;
        }
        for (key, value) in other.filters {
            self.filters.insert(key, value);
        }
        self
    }

    /// Encode to a query string for the given effective language. A
    /// `language=` pair is always present exactly once; an explicit
    /// `language` filter set by the caller takes its place.
    pub(crate) fn encode(&self, lang: Lang) -> String {
        // resolve tokens before deduplication, so a caller's concrete key
        // (`name_en_cont`) collides with the implicit token key and wins
        let mut pairs: IndexMap<String, String> = IndexMap::new();
        for (key, value) in &self.filters {
            pairs.insert(
                substitute(key, lang),
                substitute(&value.to_string(), lang),
            );
        }
        let mut out = String::new();
        for (key, value) in &pairs {
            if !out.is_empty() {
                out.push('&');
            }
            if key == RAW_KEY {
                out.push_str(value);
                continue;
            }
            out.push_str(key);
            out.push('=');
            out.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
        if !pairs.contains_key("language") {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str("language=");
            out.push_str(lang.code());
        }
        out
    }
}

fn substitute(s: &str, lang: Lang) -> String {
    s.replace(LANG_TOKEN, lang.code())
}

/// Assemble the final request URL. Never fails; garbage in just yields a
/// URL the service rejects, which the transport reports as a miss.
pub(crate) fn build(base: &str, segments: &[&str], query: &str) -> String {
    let mut url = format!("{}/{}", base, segments.join("/")).replace(' ', "_");
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url.to_lowercase()
}
