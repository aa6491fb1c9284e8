use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type ArmoireItemId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmoireItem {
    pub id: ArmoireItemId,
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

impl CollectionItem for ArmoireItem {
    const KIND: CollectionKind = CollectionKind::Armoire;
}
