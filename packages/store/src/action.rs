//! User intents that need a round trip to the backend.
//!
//! Pure UI events (opening or closing a popup) are [`Msg`](crate::Msg)s applied
//! directly to [`AppState`](crate::AppState). Anything that talks to the server is
//! an [`Action`]; the `api` crate turns it into exactly one request and a
//! resulting `Msg`.

use crate::models::{AvatarUpdate, Card, NewCard, ProfileUpdate, UserId};
use crate::state::Msg;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    UpdateProfile(ProfileUpdate),
    UpdateAvatar(AvatarUpdate),
    AddPlace(NewCard),
    ToggleLike(Card),
    DeleteCard(Card),
}

impl Action {
    /// Whether the action is submitted from a popup form whose button should
    /// show a busy label until the response arrives.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Action::ToggleLike(_))
    }

    /// Message to apply when the request fails.
    ///
    /// Only form actions raised `saving`, so only they lower it again. A failed
    /// like leaves a form that is still in flight untouched.
    pub fn failure_msg(&self) -> Option<Msg> {
        self.shows_progress().then_some(Msg::RequestFailed)
    }

    /// Short name used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Action::UpdateProfile(_) => "update profile",
            Action::UpdateAvatar(_) => "update avatar",
            Action::AddPlace(_) => "add place",
            Action::ToggleLike(_) => "toggle like",
            Action::DeleteCard(_) => "delete card",
        }
    }
}

/// Which request a like-button click turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeIntent {
    Like,
    Unlike,
}

impl LikeIntent {
    /// Unlike when the viewer already appears in the liker set, like otherwise.
    /// An unknown viewer cannot be in the set.
    pub fn for_card(card: &Card, viewer: Option<&UserId>) -> Self {
        match viewer {
            Some(viewer) if card.is_liked_by(viewer) => LikeIntent::Unlike,
            _ => LikeIntent::Like,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardId;

    fn card(likes: &[&str]) -> Card {
        Card {
            id: CardId::new("c1"),
            name: "Latemar".to_string(),
            link: "https://example.com/latemar.jpg".to_string(),
            owner: UserId::new("owner"),
            likes: likes.iter().map(|id| UserId::new(*id)).collect(),
            created_at: None,
        }
    }

    #[test]
    fn test_like_when_viewer_absent() {
        let me = UserId::new("me");
        assert_eq!(LikeIntent::for_card(&card(&["other"]), Some(&me)), LikeIntent::Like);
        assert_eq!(LikeIntent::for_card(&card(&[]), Some(&me)), LikeIntent::Like);
    }

    #[test]
    fn test_unlike_when_viewer_present() {
        let me = UserId::new("me");
        assert_eq!(
            LikeIntent::for_card(&card(&["other", "me"]), Some(&me)),
            LikeIntent::Unlike
        );
    }

    #[test]
    fn test_unknown_viewer_likes() {
        assert_eq!(LikeIntent::for_card(&card(&["me"]), None), LikeIntent::Like);
    }

    #[test]
    fn test_only_forms_show_progress() {
        assert!(!Action::ToggleLike(card(&[])).shows_progress());
        assert!(Action::DeleteCard(card(&[])).shows_progress());
        assert!(Action::AddPlace(NewCard {
            name: "n".to_string(),
            link: "l".to_string(),
        })
        .shows_progress());
    }

    #[test]
    fn test_failed_like_does_not_report_form_failure() {
        assert_eq!(Action::ToggleLike(card(&["me"])).failure_msg(), None);
        assert_eq!(
            Action::DeleteCard(card(&[])).failure_msg(),
            Some(Msg::RequestFailed)
        );
    }
}
