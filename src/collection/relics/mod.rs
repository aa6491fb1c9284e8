use crate::collection::{CollectionItem, CollectionKind};
use crate::prelude::*;

pub type RelicId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relic {
    pub id: RelicId,
    pub name: String,
    pub achievement_id: u64,
    pub owned: String,
    pub icon: Url,
    #[serde(rename = "type")]
    pub kind: RelicType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelicType {
    pub name: String,
    pub category: String,
    pub jobs: u32,
    pub order: u32,
    pub expansion: u32,
}

impl CollectionItem for Relic {
    const KIND: CollectionKind = CollectionKind::Relics;
}
