//! # API crate: the remote data client for Around
//!
//! Everything that leaves the browser goes through this crate. The UI never builds
//! requests itself: it hands a [`store::Action`] to [`perform`], which issues exactly
//! one call on a [`PhotoApi`] and returns the [`store::Msg`] to apply to the view
//! state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`PhotoApi`] trait and the `reqwest`-backed [`HttpClient`] |
//! | [`memory`] | [`MemoryApi`], an in-memory backend for tests and the offline demo |
//! | [`backend`] | [`Backend`], picking HTTP or memory from the configuration |
//! | [`actions`] | [`perform`], [`load_user`] and [`load_cards`] |
//! | [`config`] | Loading [`store::AroundConfig`] from `.env`, a TOML file or build-time variables |
//! | [`error`] | [`RequestFailure`], the only error a remote call produces |

pub mod actions;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;

pub use actions::{load_cards, load_user, perform};
pub use backend::Backend;
pub use client::{HttpClient, PhotoApi};
pub use error::RequestFailure;
pub use memory::MemoryApi;
