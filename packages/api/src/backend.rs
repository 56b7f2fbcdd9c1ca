//! Runtime choice between the REST backend and the in-memory demo.

use store::{AroundConfig, AvatarUpdate, Card, CardId, NewCard, ProfileUpdate, User};

use crate::client::{HttpClient, PhotoApi};
use crate::error::RequestFailure;
use crate::memory::MemoryApi;

#[derive(Clone, Debug)]
pub enum Backend {
    Http(HttpClient),
    Memory(MemoryApi),
}

impl Backend {
    /// HTTP when a base URL is configured, demo data otherwise.
    pub fn from_config(config: &AroundConfig) -> Self {
        if config.has_remote() {
            tracing::info!("Using backend at {}", config.api.base_url);
            Backend::Http(HttpClient::new(&config.api))
        } else {
            tracing::info!("No backend configured, using in-memory demo data");
            Backend::Memory(MemoryApi::demo())
        }
    }
}

impl PhotoApi for Backend {
    async fn get_user(&self) -> Result<User, RequestFailure> {
        match self {
            Backend::Http(api) => api.get_user().await,
            Backend::Memory(api) => api.get_user().await,
        }
    }

    async fn update_user(&self, update: &ProfileUpdate) -> Result<User, RequestFailure> {
        match self {
            Backend::Http(api) => api.update_user(update).await,
            Backend::Memory(api) => api.update_user(update).await,
        }
    }

    async fn update_avatar(&self, update: &AvatarUpdate) -> Result<User, RequestFailure> {
        match self {
            Backend::Http(api) => api.update_avatar(update).await,
            Backend::Memory(api) => api.update_avatar(update).await,
        }
    }

    async fn list_cards(&self) -> Result<Vec<Card>, RequestFailure> {
        match self {
            Backend::Http(api) => api.list_cards().await,
            Backend::Memory(api) => api.list_cards().await,
        }
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card, RequestFailure> {
        match self {
            Backend::Http(api) => api.create_card(card).await,
            Backend::Memory(api) => api.create_card(card).await,
        }
    }

    async fn delete_card(&self, id: &CardId) -> Result<(), RequestFailure> {
        match self {
            Backend::Http(api) => api.delete_card(id).await,
            Backend::Memory(api) => api.delete_card(id).await,
        }
    }

    async fn like_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        match self {
            Backend::Http(api) => api.like_card(id).await,
            Backend::Memory(api) => api.like_card(id).await,
        }
    }

    async fn unlike_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        match self {
            Backend::Http(api) => api.unlike_card(id).await,
            Backend::Memory(api) => api.unlike_card(id).await,
        }
    }
}
