//! Per-category collection accessors and the shared response plumbing.
//!
//! Each submodule holds the response models for one service category and
//! its [`CollectionItem`] impl — the compile-time mapping from category to
//! shape. The accessors themselves are generic over that mapping.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde_json::Value;

use crate::path::Query;
use crate::prelude::*;
use crate::transport::Transport;

pub mod achievements;
pub mod armoire;
pub mod bardings;
pub mod blue_magic;
pub mod emotes;
pub mod fashion_accessories;
pub mod framer_kits;
pub mod hairstyles;
pub mod leves;
pub mod minions;
pub mod mounts;
pub mod orchestrions;
pub mod records;
pub mod relics;
pub mod titles;
pub mod triple_triad;
pub mod trove;

/// Every collection category the service exposes, tagged with its upstream
/// path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Achievements,
    Titles,
    Mounts,
    Minions,
    Orchestrions,
    BlueMagic,
    Hairstyles,
    Emotes,
    Bardings,
    Armoire,
    FashionAccessories,
    FramerKits,
    TripleTriad,
    FieldRecords,
    SurveyRecords,
    Relics,
    Levequests,
    MoogleTreasureTrove,
}

impl CollectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Achievements => "achievements",
            CollectionKind::Titles => "titles",
            CollectionKind::Mounts => "mounts",
            CollectionKind::Minions => "minions",
            CollectionKind::Orchestrions => "orchestrions",
            CollectionKind::BlueMagic => "spells",
            CollectionKind::Hairstyles => "hairstyles",
            CollectionKind::Emotes => "emotes",
            CollectionKind::Bardings => "bardings",
            CollectionKind::Armoire => "armoires",
            CollectionKind::FashionAccessories => "fashions",
            CollectionKind::FramerKits => "frames",
            CollectionKind::TripleTriad => "triad",
            CollectionKind::FieldRecords => "records",
            // the path builder turns the space into an underscore
            CollectionKind::SurveyRecords => "survey records",
            CollectionKind::Relics => "relics",
            CollectionKind::Levequests => "leves",
            CollectionKind::MoogleTreasureTrove => "tomestones",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time mapping from a response shape to the category it lives
/// under. One impl per model in the submodules.
pub trait CollectionItem: DeserializeOwned {
    const KIND: CollectionKind;
}

/// Where an entry comes from: a quest, a vendor, an achievement, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub related_type: Option<String>,
    pub related_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdName {
    pub id: u64,
    pub name: String,
}

/// An in-game map position, as the service formats it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub x: String,
    pub y: String,
}

/// What `index`/`search` return: the echoed query (in service order), the
/// service-side total for it, and one page of results. `count` is
/// independent of any `limit` truncation applied to `results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub query: IndexMap<String, Value>,
    pub count: u64,
    pub results: Vec<T>,
}

/// Accessor for one flat `/{category}` resource.
#[derive(Clone)]
pub struct Collection<T: CollectionItem> {
    transport: Transport,
    _marker: PhantomData<fn() -> T>,
}

impl<T: CollectionItem> Collection<T> {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            _marker: PhantomData,
        }
    }

    /// Fetch a single entry by id.
    pub fn show(&self, id: u64, language: Option<Lang>) -> Result<T> {
        let lang = language.unwrap_or(self.transport.options().language);
        let url = self
            .transport
            .url(&[T::KIND.as_str(), &id.to_string()], &Query::new(), lang);
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }

    /// List the category, optionally filtered with upstream `<field>_<op>`
    /// predicates.
    pub fn index(&self, params: Option<Query>) -> Result<Envelope<T>> {
        let query = params.unwrap_or_default();
        let lang = self.transport.language(Some(&query));
        let url = self.transport.url(&[T::KIND.as_str()], &query, lang);
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }

    /// Name search: [`Collection::index`] with an implicit
    /// `name_{lang}_cont` predicate. Caller filters are merged on top and
    /// win on key collision.
    pub fn search(&self, text: &str, params: Option<Query>) -> Result<Envelope<T>> {
        let mut query = Query::new().filter("name_{lang}_cont", text);
        if let Some(params) = params {
            query = query.merge(params);
        }
        self.index(Some(query))
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;
    use crate::testutil::{envelope_of, StubServer, MOUNT_BODY};
    use crate::Client;

    fn client(stub: &StubServer) -> Client {
        Client::with_base(Options::default(), stub.base())
    }

    #[test]
    fn show_builds_the_flat_path_and_decodes() {
        let stub = StubServer::serve(vec![(200, MOUNT_BODY.into())]);
        let mount = client(&stub).mounts.show(1, None).expect("mount");
        assert_eq!(mount.id, 1);
        assert_eq!(mount.name, "Company Chocobo");
        assert_eq!(mount.sources.len(), 1);
        assert_eq!(stub.requests(), vec!["/mounts/1?language=en".to_string()]);
    }

    #[test]
    fn show_honors_the_language_override() {
        let stub = StubServer::serve(vec![(200, MOUNT_BODY.into())]);
        let _ = client(&stub).mounts.show(1, Some(Lang::Fr));
        assert_eq!(stub.requests(), vec!["/mounts/1?language=fr".to_string()]);
    }

    #[test]
    fn show_maps_no_result_to_not_found_after_one_request() {
        let stub = StubServer::serve(vec![
            (200, r#"{"status": 404, "error": "Not Found"}"#.into()),
            (200, "{}".into()),
        ]);
        let err = client(&stub).achievements.show(1, None).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        // exactly one request, zero retries
        assert_eq!(
            stub.requests(),
            vec!["/achievements/1?language=en".to_string()]
        );
    }

    #[test]
    fn index_sends_only_the_language_by_default() {
        let body = envelope_of(&[MOUNT_BODY], r#"{"language": "en"}"#, 1);
        let stub = StubServer::serve(vec![(200, body)]);
        let page = client(&stub).mounts.index(None).expect("envelope");
        assert_eq!(page.count, 1);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.query.get("language").expect("echo"), "en");
        assert_eq!(stub.requests(), vec!["/mounts?language=en".to_string()]);
    }

    #[test]
    fn index_passes_filters_through_in_order() {
        let body = envelope_of(&[], r#"{"movement_en_cont": "airborne", "language": "en"}"#, 0);
        let stub = StubServer::serve(vec![(200, body)]);
        let query = Query::new()
            .filter("movement_en_cont", "airborne")
            .filter("patch_gt", 4.1);
        let _ = client(&stub).mounts.index(Some(query));
        assert_eq!(
            stub.requests(),
            vec!["/mounts?movement_en_cont=airborne&patch_gt=4.1&language=en".to_string()]
        );
    }

    #[test]
    fn search_injects_a_localized_name_predicate() {
        let body = envelope_of(&[MOUNT_BODY], r#"{"name_en_cont": "chocobo"}"#, 1);
        let stub = StubServer::serve(vec![(200, body)]);
        let _ = client(&stub).mounts.search("Chocobo", None);
        assert_eq!(
            stub.requests(),
            vec!["/mounts?name_en_cont=chocobo&language=en".to_string()]
        );
    }

    #[test]
    fn search_qualifies_the_predicate_with_the_effective_language() {
        let body = envelope_of(&[], r#"{"name_fr_cont": "chocobo"}"#, 0);
        let stub = StubServer::serve(vec![(200, body)]);
        let query = Query::new().language(Lang::Fr).limit(10);
        let _ = client(&stub).mounts.search("chocobo", Some(query));
        assert_eq!(
            stub.requests(),
            vec!["/mounts?name_fr_cont=chocobo&limit=10&language=fr".to_string()]
        );
    }

    #[test]
    fn search_lets_explicit_filters_win() {
        let body = envelope_of(&[], r#"{"name_en_cont": "fat"}"#, 0);
        let stub = StubServer::serve(vec![(200, body)]);
        let query = Query::new().filter("name_{lang}_cont", "fat chocobo");
        let _ = client(&stub).mounts.search("ignored", Some(query));
        assert_eq!(
            stub.requests(),
            vec!["/mounts?name_en_cont=fat+chocobo&language=en".to_string()]
        );
    }

    #[test]
    fn limit_bounds_the_slice_not_the_count() {
        let body = envelope_of(&[MOUNT_BODY], r#"{"name_en_cont": "a", "limit": "1"}"#, 250);
        let stub = StubServer::serve(vec![(200, body)]);
        let page = client(&stub)
            .mounts
            .search("a", Some(Query::new().limit(1)))
            .expect("envelope");
        assert!(page.results.len() <= 1);
        assert_eq!(page.count, 250);
    }

    #[test]
    fn survey_records_path_is_space_normalized() {
        let stub = StubServer::serve(vec![(
            200,
            envelope_of(&[], r#"{"language": "en"}"#, 0),
        )]);
        let _ = client(&stub).records.survey.index(None);
        assert_eq!(
            stub.requests(),
            vec!["/survey_records?language=en".to_string()]
        );
    }
}
