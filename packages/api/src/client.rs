//! # Remote Data Client: the `PhotoApi` trait and its HTTP implementation
//!
//! [`PhotoApi`] lists the eight backend operations the UI needs. Each issues exactly
//! one request and resolves with the updated entity, or a [`RequestFailure`]. There
//! are no retries, timeouts or caching; every call is independent.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`get_user`](PhotoApi::get_user) | `GET users/me` |
//! | [`update_user`](PhotoApi::update_user) | `PATCH users/me` |
//! | [`update_avatar`](PhotoApi::update_avatar) | `PATCH users/me/avatar` |
//! | [`list_cards`](PhotoApi::list_cards) | `GET cards` |
//! | [`create_card`](PhotoApi::create_card) | `POST cards` |
//! | [`delete_card`](PhotoApi::delete_card) | `DELETE cards/{id}` |
//! | [`like_card`](PhotoApi::like_card) | `PUT cards/likes/{id}` |
//! | [`unlike_card`](PhotoApi::unlike_card) | `DELETE cards/likes/{id}` |
//!
//! [`HttpClient`] implements it over `reqwest`, which uses `fetch` on WASM and hyper
//! on native targets. [`crate::MemoryApi`] implements it in memory.

use std::future::Future;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::config::ApiConfig;
use store::{AvatarUpdate, Card, CardId, NewCard, ProfileUpdate, User};

use crate::error::RequestFailure;

/// Async interface to the photo backend.
pub trait PhotoApi {
    fn get_user(&self) -> impl Future<Output = Result<User, RequestFailure>>;
    fn update_user(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<User, RequestFailure>>;
    fn update_avatar(
        &self,
        update: &AvatarUpdate,
    ) -> impl Future<Output = Result<User, RequestFailure>>;
    fn list_cards(&self) -> impl Future<Output = Result<Vec<Card>, RequestFailure>>;
    fn create_card(&self, card: &NewCard) -> impl Future<Output = Result<Card, RequestFailure>>;
    fn delete_card(&self, id: &CardId) -> impl Future<Output = Result<(), RequestFailure>>;
    fn like_card(&self, id: &CardId) -> impl Future<Output = Result<Card, RequestFailure>>;
    fn unlike_card(&self, id: &CardId) -> impl Future<Output = Result<Card, RequestFailure>>;
}

/// `reqwest`-backed client for the REST backend.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(Response, String, String), RequestFailure>
    where
        B: Serialize + ?Sized,
    {
        let name = method.to_string();
        let url = self.endpoint(path);

        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, token.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| RequestFailure::Transport {
            method: name.clone(),
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestFailure::Status {
                method: name,
                url,
                status: status.as_u16(),
                body,
            });
        }

        Ok((response, name, url))
    }

    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RequestFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (response, method, url) = self.send(method, path, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| RequestFailure::Decode {
                method,
                url,
                source,
            })
    }
}

impl PhotoApi for HttpClient {
    async fn get_user(&self) -> Result<User, RequestFailure> {
        self.send_json(Method::GET, "users/me", None::<&()>).await
    }

    async fn update_user(&self, update: &ProfileUpdate) -> Result<User, RequestFailure> {
        self.send_json(Method::PATCH, "users/me", Some(update)).await
    }

    async fn update_avatar(&self, update: &AvatarUpdate) -> Result<User, RequestFailure> {
        self.send_json(Method::PATCH, "users/me/avatar", Some(update))
            .await
    }

    async fn list_cards(&self) -> Result<Vec<Card>, RequestFailure> {
        self.send_json(Method::GET, "cards", None::<&()>).await
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card, RequestFailure> {
        self.send_json(Method::POST, "cards", Some(card)).await
    }

    async fn delete_card(&self, id: &CardId) -> Result<(), RequestFailure> {
        // the body is only a confirmation message
        self.send(Method::DELETE, &format!("cards/{id}"), None::<&()>)
            .await
            .map(|_| ())
    }

    async fn like_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        self.send_json(Method::PUT, &format!("cards/likes/{id}"), None::<&()>)
            .await
    }

    async fn unlike_card(&self, id: &CardId) -> Result<Card, RequestFailure> {
        self.send_json(Method::DELETE, &format!("cards/likes/{id}"), None::<&()>)
            .await
    }
}
