pub mod action;
pub mod config;
pub mod models;
pub mod state;

pub use action::{Action, LikeIntent};
pub use config::AroundConfig;
pub use models::{AvatarUpdate, Card, CardId, NewCard, ProfileUpdate, User, UserId};
pub use state::{ActivePopup, AppState, Effect, Msg, Resource};
