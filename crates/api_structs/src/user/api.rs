use crate::dtos::UserDTO;
use serde::{Deserialize, Serialize};
use userpanel_domain::{UserStatus, ID};

pub mod list_users {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;
}

pub mod create_user {
    use super::*;

    /// The mutable field set. `id` and `createdAt` are assigned by the
    /// collection on insert.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub nome: String,
        pub email: String,
        pub cargo: String,
        pub status: UserStatus,
    }

    pub type APIResponse = UserDTO;
}

pub mod update_user {
    use super::*;

    /// Full replacement of the mutable fields. There is no partial patch.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub nome: String,
        pub email: String,
        pub cargo: String,
        pub status: UserStatus,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserDTO;
}

pub mod delete_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    /// The collection echoes the removed record back. Callers are free to
    /// ignore it.
    pub type APIResponse = UserDTO;
}
