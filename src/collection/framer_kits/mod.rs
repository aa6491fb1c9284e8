use crate::collection::{CollectionItem, CollectionKind, Source};
use crate::prelude::*;

pub type FramerKitId = u64;

/// Portrait framer's kit. Lives under the `frames` category upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramerKit {
    pub id: FramerKitId,
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

impl CollectionItem for FramerKit {
    const KIND: CollectionKind = CollectionKind::FramerKits;
}
