//! Moogle Treasure Trove: the `tomestones` category. Entries are keyed by
//! the event currency rather than a free-text name, so `search` matches a
//! currency instead of injecting a name predicate.

use std::fmt;

use crate::collection::{Collection, CollectionItem, CollectionKind, Envelope, Source};
use crate::path::Query;
use crate::prelude::*;
use crate::transport::Transport;

/// The irregular tomestone currencies the event has used over the years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tomestone {
    Philosophy,
    Mythology,
    Soldiery,
    Law,
    Esoterics,
    Pageantry,
    Lore,
    Scripture,
    Verity,
    Creation,
    Mendacity,
    TenfoldPageantry,
    GenesisI,
    GenesisII,
}

impl Tomestone {
    pub const fn as_str(self) -> &'static str {
        match self {
            Tomestone::Philosophy => "philosophy",
            Tomestone::Mythology => "mythology",
            Tomestone::Soldiery => "soldiery",
            Tomestone::Law => "law",
            Tomestone::Esoterics => "esoterics",
            Tomestone::Pageantry => "pageantry",
            Tomestone::Lore => "lore",
            Tomestone::Scripture => "scripture",
            Tomestone::Verity => "verity",
            Tomestone::Creation => "creation",
            Tomestone::Mendacity => "mendacity",
            Tomestone::TenfoldPageantry => "tenfold pageantry",
            Tomestone::GenesisI => "genesis I",
            Tomestone::GenesisII => "genesis II",
        }
    }
}

impl fmt::Display for Tomestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroveItem {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tomestone: String,
    pub cost: u32,
    pub tradeable: bool,
}

/// A trove reward that is also a collection entry, with its sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroveCollectable {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tomestone: String,
    pub cost: u32,
    pub tradeable: bool,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TroveResults {
    pub collectables: Vec<TroveCollectable>,
    pub items: Vec<TroveItem>,
}

impl CollectionItem for TroveResults {
    const KIND: CollectionKind = CollectionKind::MoogleTreasureTrove;
}

/// Accessor for the fixed trove category.
#[derive(Clone)]
pub struct TroveCollection {
    inner: Collection<TroveResults>,
}

impl TroveCollection {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            inner: Collection::new(transport),
        }
    }

    /// Everything on offer for one event currency: an equality filter on
    /// `tomestone` rather than a name search.
    pub fn search(
        &self,
        tomestone: impl ToString,
        language: Option<Lang>,
    ) -> Result<Envelope<TroveResults>> {
        let mut query = Query::new().filter("tomestone_eq", tomestone.to_string());
        if let Some(lang) = language {
            query = query.language(lang);
        }
        self.inner.index(Some(query))
    }

    /// Plain listing of the flat resource.
    pub fn index(&self, params: Option<Query>) -> Result<Envelope<TroveResults>> {
        self.inner.index(params)
    }

    /// Point lookup on the flat resource.
    pub fn show(&self, id: u64, language: Option<Lang>) -> Result<TroveResults> {
        self.inner.show(id, language)
    }
}
