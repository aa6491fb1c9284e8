use crate::collection::{CollectionItem, CollectionKind, IdName, Source};
use crate::prelude::*;

pub type EmoteId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emote {
    pub id: EmoteId,
    pub name: String,
    pub description: String,
    /// Chat command, e.g. `"/beckon"`.
    pub command: String,
    pub patch: String,
    pub item_id: Option<u64>,
    pub tradeable: bool,
    pub owned: String,
    pub icon: Url,
    pub category: IdName,
    pub sources: Vec<Source>,
}

impl CollectionItem for Emote {
    const KIND: CollectionKind = CollectionKind::Emotes;
}
