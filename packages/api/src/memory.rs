use std::sync::{Arc, Mutex, MutexGuard};

use store::{AvatarUpdate, Card, CardId, NewCard, ProfileUpdate, User, UserId};

use crate::client::PhotoApi;
use crate::error::RequestFailure;

/// In-memory PhotoApi for testing and the offline demo.
#[derive(Clone, Debug)]
pub struct MemoryApi {
    inner: Arc<Mutex<MemoryBackend>>,
}

#[derive(Debug)]
struct MemoryBackend {
    user: User,
    cards: Vec<Card>,
    next_id: u64,
    fail_next: Option<String>,
    fail_on: Option<(&'static str, String)>,
    calls: Vec<&'static str>,
}

impl MemoryApi {
    pub fn new(user: User, cards: Vec<Card>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryBackend {
                user,
                cards,
                next_id: 1,
                fail_next: None,
                fail_on: None,
                calls: Vec::new(),
            })),
        }
    }

    /// A profile with a handful of cards, some owned by someone else.
    pub fn demo() -> Self {
        const BASE: &str = "https://practicum-content.s3.us-west-1.amazonaws.com/web-code";

        let me = UserId::new("demo-user");
        let other = UserId::new("demo-neighbour");
        let card = |id: &str, name: &str, image: &str, owner: &UserId, likes: &[&UserId]| Card {
            id: CardId::new(id),
            name: name.to_string(),
            link: format!("{BASE}/{image}"),
            owner: owner.clone(),
            likes: likes.iter().map(|id| (*id).clone()).collect(),
            created_at: None,
        };

        Self::new(
            User {
                id: me.clone(),
                name: "Jacques Cousteau".to_string(),
                about: "Explorer".to_string(),
                avatar: format!("{BASE}/moved_avatar.jpg"),
                cohort: None,
            },
            vec![
                card("demo-6", "Yosemite Valley", "moved_yosemite.jpg", &me, &[&other]),
                card("demo-5", "Lake Louise", "moved_lake-louise.jpg", &other, &[&me, &other]),
                card("demo-4", "Bald Mountains", "moved_bald-mountains.jpg", &other, &[]),
                card("demo-3", "Latemar", "moved_latemar.jpg", &me, &[]),
                card("demo-2", "Vanoise National Park", "moved_vanoise.jpg", &other, &[&me]),
                card("demo-1", "Lago di Braies", "moved_lago.jpg", &me, &[]),
            ],
        )
    }

    /// Make the next request fail with [`RequestFailure::Unavailable`].
    pub fn fail_next(&self, reason: impl Into<String>) {
        if let Ok(mut backend) = self.inner.lock() {
            backend.fail_next = Some(reason.into());
        }
    }

    /// Make the next call to `op` (e.g. `"like_card"`) fail, leaving other
    /// operations untouched.
    pub fn fail_on(&self, op: &'static str, reason: impl Into<String>) {
        if let Ok(mut backend) = self.inner.lock() {
            backend.fail_on = Some((op, reason.into()));
        }
    }

    /// Names of the operations invoked so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner
            .lock()
            .map(|backend| backend.calls.clone())
            .unwrap_or_default()
    }

    /// Current server-side card list.
    pub fn cards(&self) -> Vec<Card> {
        self.inner
            .lock()
            .map(|backend| backend.cards.clone())
            .unwrap_or_default()
    }

    fn with<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&mut MemoryBackend) -> Result<T, RequestFailure>,
    ) -> Result<T, RequestFailure> {
        let mut backend = self.lock()?;
        backend.calls.push(op);
        if let Some(reason) = backend.fail_next.take() {
            return Err(RequestFailure::Unavailable(reason));
        }
        if backend.fail_on.as_ref().is_some_and(|(target, _)| *target == op) {
            let reason = backend
                .fail_on
                .take()
                .map(|(_, reason)| reason)
                .unwrap_or_default();
            return Err(RequestFailure::Unavailable(reason));
        }
        f(&mut *backend)
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryBackend>, RequestFailure> {
        self.inner
            .lock()
            .map_err(|_| RequestFailure::Unavailable("memory backend poisoned".to_string()))
    }
}

impl MemoryBackend {
    fn card_mut(&mut self, method: &'static str, id: &CardId) -> Result<&mut Card, RequestFailure> {
        self.cards
            .iter_mut()
            .find(|card| &card.id == id)
            .ok_or_else(|| not_found(method, id))
    }
}

fn not_found(method: &'static str, id: &CardId) -> RequestFailure {
    RequestFailure::Status {
        method: method.to_string(),
        url: format!("memory://cards/{id}"),
        status: 404,
        body: "Card not found".to_string(),
    }
}

impl PhotoApi for MemoryApi {
    async fn get_user(&self) -> Result<User, RequestFailure> {
        self.with("get_user", |backend| Ok(backend.user.clone()))
    }

    async fn update_user(&self, update: &ProfileUpdate) -> Result<User, RequestFailure> {
        self.with("update_user", |backend| {
            backend.user.name = update.name.clone();
            backend.user.about = update.about.clone();
            Ok(backend.user.clone())
        })
    }

    async fn update_avatar(&self, update: &AvatarUpdate) -> Result<User, RequestFailure> {
        self.with("update_avatar", |backend| {
            backend.user.avatar = update.avatar.clone();
            Ok(backend.user.clone())
        })
    }

    async fn list_cards(&self) -> Result<Vec<Card>, RequestFailure> {
        self.with("list_cards", |backend| Ok(backend.cards.clone()))
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card, RequestFailure> {
        self.with("create_card", |backend| {
            let created = Card {
                id: CardId::new(format!("card-{}", backend.next_id)),
                name: card.name.clone(),
                link: card.link.clone(),
                owner: backend.user.id.clone(),
                likes: Vec::new(),
                created_at: None,
            };
            backend.next_id += 1;
            backend.cards.insert(0, created.clone());
            Ok(created)
        })
    }

    async fn delete_card(&self, id: &CardId) -> Result<(), RequestFailure> {
        self.with("delete_card", |backend| {
            let before = backend.cards.len();
            backend.cards.retain(|card| &card.id != id);
            if backend.cards.len() == before {
                return Err(not_found("DELETE", id));
            }
            Ok(())
        })
    }

    async fn like_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        self.with("like_card", |backend| {
            let me = backend.user.id.clone();
            let card = backend.card_mut("PUT", id)?;
            if !card.is_liked_by(&me) {
                card.likes.push(me);
            }
            Ok(card.clone())
        })
    }

    async fn unlike_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        self.with("unlike_card", |backend| {
            let me = backend.user.id.clone();
            let card = backend.card_mut("DELETE", id)?;
            card.likes.retain(|liker| liker != &me);
            Ok(card.clone())
        })
    }
}
