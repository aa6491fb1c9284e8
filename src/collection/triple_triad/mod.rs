//! The four Triple Triad sub-resources. They share the `triad` category
//! prefix, so their paths are `triad/<kind>` and `triad/<kind>/<id>`
//! instead of the flat shape the other categories use.

use std::fmt;
use std::marker::PhantomData;

use crate::collection::{CollectionKind, Envelope, Location, Source};
use crate::path::Query;
use crate::prelude::*;
use crate::transport::Transport;

pub type CardId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriadKind {
    Cards,
    Decks,
    Npcs,
    Packs,
}

impl TriadKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            TriadKind::Cards => "cards",
            TriadKind::Decks => "decks",
            TriadKind::Npcs => "npcs",
            TriadKind::Packs => "packs",
        }
    }
}

impl fmt::Display for TriadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from a Triple Triad response shape to its sub-resource.
pub trait TriadItem: DeserializeOwned {
    const KIND: TriadKind;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub description: String,
    pub stars: u32,
    pub patch: String,
    pub sell_price: String,
    pub owned: String,
    pub order_group: u32,
    pub order: u32,
    pub deck_group: u32,
    /// Card number as displayed in-game, e.g. `"1"` or `"Ex.12"`.
    pub number: String,
    pub icon: Url,
    pub image: Url,
    pub image_red: Url,
    pub image_blue: Url,
    pub link: Url,
    pub stats: CardStats,
    #[serde(rename = "type")]
    pub kind: CardType,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardStats {
    pub numeric: CardSides,
    pub formatted: CardSides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardType {
    pub id: u64,
    pub name: String,
    pub image: Option<Url>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: u64,
    pub name: String,
    pub resident_id: u64,
    pub difficulty: u32,
    pub excluded: bool,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    pub link: Url,
    pub location: Location,
    pub quest: NpcQuest,
    pub rules: Vec<String>,
    pub rule_ids: Vec<u64>,
    pub rewards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcQuest {
    pub id: u64,
    pub name: String,
    pub link: Url,
}

/// A community deck, not an in-game entity; it has no patch or ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: u64,
    pub notes: String,
    pub rating: i64,
    pub user: String,
    pub updated: bool,
    pub purpose: DeckPurpose,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckPurpose {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pack {
    pub id: u64,
    pub name: String,
    pub cost: u32,
    pub link: Url,
    pub cards: Vec<Card>,
}

impl TriadItem for Card {
    const KIND: TriadKind = TriadKind::Cards;
}

impl TriadItem for Deck {
    const KIND: TriadKind = TriadKind::Decks;
}

impl TriadItem for Npc {
    const KIND: TriadKind = TriadKind::Npcs;
}

impl TriadItem for Pack {
    const KIND: TriadKind = TriadKind::Packs;
}

/// Accessor for one `triad/<kind>` sub-resource.
#[derive(Clone)]
pub struct TriadCollection<T: TriadItem> {
    transport: Transport,
    _marker: PhantomData<fn() -> T>,
}

impl<T: TriadItem> TriadCollection<T> {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            _marker: PhantomData,
        }
    }

    const fn prefix() -> &'static str {
        CollectionKind::TripleTriad.as_str()
    }

    /// Fetch a single entry by id. Unlike the flat accessor, caller filters
    /// pass through here.
    pub fn show(&self, id: u64, params: Option<Query>) -> Result<T> {
        let query = params.unwrap_or_default();
        let lang = self.transport.language(Some(&query));
        let url = self.transport.url(
            &[Self::prefix(), T::KIND.as_str(), &id.to_string()],
            &query,
            lang,
        );
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }

    /// List the sub-resource, optionally filtered.
    pub fn index(&self, params: Option<Query>) -> Result<Envelope<T>> {
        let query = params.unwrap_or_default();
        let lang = self.transport.language(Some(&query));
        let url = self
            .transport
            .url(&[Self::prefix(), T::KIND.as_str()], &query, lang);
        self.transport
            .get_json(&url)
            .ok_or_else(|| Error::NotFound { url })
    }

    /// Name search with the same language-qualified implicit predicate the
    /// flat accessor uses.
    pub fn search(&self, text: &str, params: Option<Query>) -> Result<Envelope<T>> {
        let mut query = Query::new().filter("name_{lang}_cont", text);
        if let Some(params) = params {
            query = query.merge(params);
        }
        self.index(Some(query))
    }
}
