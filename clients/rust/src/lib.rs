mod base;
mod config;
mod contact;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use config::ApiConfig;
pub use contact::{ContactClient, CreateContactInput, UpdateContactInput};
pub use userpanel_api_structs::dtos::*;
pub use userpanel_domain::{Contact, User, UserStatus, ID};
use std::sync::Arc;
pub use user::{CreateUserInput, UpdateUserInput, UserClient};

/// User Panel SDK
///
/// Wraps the four collection operations (list, create, update, remove) for
/// each record variant hosted on the remote collection endpoint.
#[derive(Clone)]
pub struct PanelSDK {
    pub users: UserClient,
    pub contacts: ContactClient,
}

impl PanelSDK {
    pub fn new(config: &ApiConfig) -> Self {
        let base = Arc::new(BaseClient::new(config.base_url.clone(), config.timeout));
        let users = UserClient::new(base.clone());
        let contacts = ContactClient::new(base);

        Self { users, contacts }
    }
}
