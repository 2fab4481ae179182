//! Food-buddy social models.

use crate::model::food::FoodEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Another user the single-profile account can follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodBuddy {
    pub id: Uuid,
    pub nickname: String,
    pub avatar: Option<String>,
    pub bio: String,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
    pub is_following: bool,
}

impl FoodBuddy {
    pub fn new(nickname: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.into(),
            avatar: None,
            bio: bio.into(),
            followers_count: 0,
            following_count: 0,
            posts_count: 0,
            is_following: false,
        }
    }
}

/// A shared post, optionally carrying logged food entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub images: Vec<String>,
    pub food_entries: Vec<FoodEntry>,
    pub timestamp: DateTime<Utc>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub is_liked: bool,
}

impl FoodPost {
    pub fn new(author_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            content: content.into(),
            images: Vec::new(),
            food_entries: Vec::new(),
            timestamp: Utc::now(),
            likes_count: 0,
            comments_count: 0,
            is_liked: false,
        }
    }
}
