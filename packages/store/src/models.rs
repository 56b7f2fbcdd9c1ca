//! # Domain models for the profile and its photo cards
//!
//! These are the entities the backend returns and the view state mirrors. They are
//! `Serialize + Deserialize` so the HTTP client can decode responses directly into
//! them and tests can build them from JSON fixtures.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in user: display name, bio (`about`) and avatar URL. |
//! | [`Card`] | A photo post: caption (`name`), image URL (`link`), owner id and the liker set. |
//! | [`ProfileUpdate`] / [`AvatarUpdate`] / [`NewCard`] | Request bodies for the three mutating form submissions. |
//!
//! ## Wire quirks
//!
//! The backend names identifiers `_id`. A card's `owner` and each entry of `likes`
//! arrive either as full user objects or as bare id strings depending on the
//! endpoint, so both shapes decode to [`UserId`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Server-assigned card identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The signed-in user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Bio text
    #[serde(default)]
    pub about: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
}

/// A single photo card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: CardId,
    /// Caption
    pub name: String,
    /// Image URL
    pub link: String,
    #[serde(deserialize_with = "user_ref::deserialize")]
    pub owner: UserId,
    /// Ids of every user who liked this card.
    #[serde(default, deserialize_with = "user_ref::deserialize_many")]
    pub likes: Vec<UserId>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Card {
    pub fn is_liked_by(&self, user: &UserId) -> bool {
        self.likes.iter().any(|liker| liker == user)
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Body of `PATCH /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub about: String,
}

/// Body of `PATCH /users/me/avatar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvatarUpdate {
    pub avatar: String,
}

/// Body of `POST /cards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

mod user_ref {
    use serde::{Deserialize, Deserializer};

    use super::UserId;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum UserRef {
        Id(UserId),
        Object {
            #[serde(rename = "_id")]
            id: UserId,
        },
    }

    impl From<UserRef> for UserId {
        fn from(user: UserRef) -> Self {
            match user {
                UserRef::Id(id) | UserRef::Object { id } => id,
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<UserId, D::Error>
    where
        D: Deserializer<'de>,
    {
        UserRef::deserialize(deserializer).map(UserId::from)
    }

    pub fn deserialize_many<'de, D>(deserializer: D) -> Result<Vec<UserId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let refs = Vec::<UserRef>::deserialize(deserializer)?;
        Ok(refs.into_iter().map(UserId::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user() {
        let user: User = serde_json::from_str(
            r#"{
                "_id": "e20537ed11237f86bbb20ccb",
                "name": "Jacques Cousteau",
                "about": "Sailor, researcher",
                "avatar": "https://example.com/avatar.jpg",
                "cohort": "group-12"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id.as_str(), "e20537ed11237f86bbb20ccb");
        assert_eq!(user.name, "Jacques Cousteau");
        assert_eq!(user.about, "Sailor, researcher");
        assert_eq!(user.cohort.as_deref(), Some("group-12"));
    }

    #[test]
    fn test_decode_card_with_user_objects() {
        let card: Card = serde_json::from_str(
            r#"{
                "_id": "c1",
                "name": "Yosemite Valley",
                "link": "https://example.com/yosemite.jpg",
                "owner": { "_id": "u1", "name": "Jacques", "about": "", "avatar": "" },
                "likes": [
                    { "_id": "u2", "name": "Ann", "about": "", "avatar": "" },
                    { "_id": "u3", "name": "Bob", "about": "", "avatar": "" }
                ],
                "createdAt": "2026-10-01T12:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(card.owner, UserId::new("u1"));
        assert_eq!(card.likes, vec![UserId::new("u2"), UserId::new("u3")]);
        assert_eq!(card.created_at.as_deref(), Some("2026-10-01T12:00:00.000Z"));
        assert!(card.is_liked_by(&UserId::new("u3")));
        assert!(!card.is_liked_by(&UserId::new("u1")));
        assert!(card.is_owned_by(&UserId::new("u1")));
        assert_eq!(card.like_count(), 2);
    }

    #[test]
    fn test_decode_card_with_bare_ids() {
        let card: Card = serde_json::from_str(
            r#"{ "_id": "c2", "name": "Lake Louise", "link": "l", "owner": "u1", "likes": ["u1"] }"#,
        )
        .unwrap();

        assert_eq!(card.owner, UserId::new("u1"));
        assert!(card.is_liked_by(&UserId::new("u1")));
        assert!(card.created_at.is_none());
    }

    #[test]
    fn test_missing_likes_is_empty() {
        let card: Card =
            serde_json::from_str(r#"{ "_id": "c3", "name": "n", "link": "l", "owner": "u1" }"#)
                .unwrap();
        assert!(card.likes.is_empty());
    }

    #[test]
    fn test_card_serializes_plain_ids() {
        let card = Card {
            id: CardId::new("c4"),
            name: "Bald Mountains".to_string(),
            link: "l".to_string(),
            owner: UserId::new("u1"),
            likes: vec![UserId::new("u2")],
            created_at: None,
        };

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["_id"], "c4");
        assert_eq!(value["owner"], "u1");
        assert_eq!(value["likes"][0], "u2");
        assert!(value.get("createdAt").is_none());
    }
}
