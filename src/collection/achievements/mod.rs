use crate::collection::{CollectionItem, CollectionKind, IdName};
use crate::collection::titles::Title;
use crate::prelude::*;

pub type AchievementId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub points: u32,
    pub patch: String,
    /// Share of tracked characters holding this entry, e.g. `"4.9%"`.
    pub owned: String,
    pub icon: Url,
    pub category: IdName,
    #[serde(rename = "type")]
    pub kind: IdName,
    pub reward: Option<AchievementReward>,
}

/// Either a plain reward name or a full title payload, depending on the
/// achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementReward {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub title: Option<Box<Title>>,
}

impl CollectionItem for Achievement {
    const KIND: CollectionKind = CollectionKind::Achievements;
}
