use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type BardingId = u64;

/// Chocobo barding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barding {
    pub id: BardingId,
    pub name: String,
    pub description: String,
    pub patch: String,
    pub item_id: Option<u64>,
    pub tradeable: bool,
    pub owned: String,
    pub icon: Url,
    pub image: Url,
    pub sources: Vec<Source>,
}

impl CollectionItem for Barding {
    const KIND: CollectionKind = CollectionKind::Bardings;
}
