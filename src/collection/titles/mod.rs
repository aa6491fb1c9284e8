use crate::collection::achievements::Achievement;
use crate::collection::{CollectionItem, CollectionKind};
use crate::prelude::*;

pub type TitleId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub id: TitleId,
    pub name: String,
    pub female_name: String,
    pub patch: String,
    pub owned: String,
    pub icon: Url,
    /// The achievement granting this title, when the service knows it.
    pub achievement: Option<Box<Achievement>>,
}

impl CollectionItem for Title {
    const KIND: CollectionKind = CollectionKind::Titles;
}
