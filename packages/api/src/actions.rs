//! Turns user intents into backend calls and backend responses into view messages.

use store::{Action, LikeIntent, Msg, UserId};

use crate::client::PhotoApi;
use crate::error::RequestFailure;

/// Run one [`Action`] against `api`, issuing exactly one request.
///
/// `viewer` is the signed-in user's id and decides whether a like toggle becomes
/// a like or an unlike.
pub async fn perform<A: PhotoApi>(
    api: &A,
    action: Action,
    viewer: Option<&UserId>,
) -> Result<Msg, RequestFailure> {
    match action {
        Action::UpdateProfile(update) => api.update_user(&update).await.map(Msg::UserUpdated),
        Action::UpdateAvatar(update) => api.update_avatar(&update).await.map(Msg::UserUpdated),
        Action::AddPlace(card) => api.create_card(&card).await.map(Msg::CardCreated),
        Action::ToggleLike(card) => {
            let updated = match LikeIntent::for_card(&card, viewer) {
                LikeIntent::Like => api.like_card(&card.id).await,
                LikeIntent::Unlike => api.unlike_card(&card.id).await,
            };
            updated.map(Msg::CardUpdated)
        }
        Action::DeleteCard(card) => {
            api.delete_card(&card.id).await?;
            Ok(Msg::CardDeleted(card.id))
        }
    }
}

/// Initial fetch of the signed-in user.
pub async fn load_user<A: PhotoApi>(api: &A) -> Result<Msg, RequestFailure> {
    api.get_user().await.map(Msg::UserLoaded)
}

/// Initial fetch of the card collection.
pub async fn load_cards<A: PhotoApi>(api: &A) -> Result<Msg, RequestFailure> {
    api.list_cards().await.map(Msg::CardsLoaded)
}
