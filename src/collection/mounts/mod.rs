use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type MountId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mount {
    pub id: MountId,
    pub name: String,
    pub description: String,
    pub enhanced_description: String,
    pub tooltip: String,
    pub movement: String,
    pub seats: u32,
    pub order: u32,
    pub order_group: u32,
    pub patch: String,
    pub item_id: Option<u64>,
    pub tradeable: bool,
    pub owned: String,
    pub icon: Url,
    pub image: Url,
    pub bgm: Option<String>,
    pub sources: Vec<Source>,
}

impl CollectionItem for Mount {
    const KIND: CollectionKind = CollectionKind::Mounts;
}
