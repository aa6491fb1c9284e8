use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type FashionAccessoryId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FashionAccessory {
    pub id: FashionAccessoryId,
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

impl CollectionItem for FashionAccessory {
    const KIND: CollectionKind = CollectionKind::FashionAccessories;
}
