use crate::dtos::ContactDTO;
use serde::{Deserialize, Serialize};
use userpanel_domain::ID;

pub mod list_contacts {
    use super::*;

    pub type APIResponse = Vec<ContactDTO>;
}

pub mod create_contact {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        pub age: String,
        pub email: String,
        pub address: String,
        pub cell_number: String,
    }

    pub type APIResponse = ContactDTO;
}

pub mod update_contact {
    use super::*;

    /// Full replacement of the mutable fields. There is no partial patch.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        pub age: String,
        pub email: String,
        pub address: String,
        pub cell_number: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactDTO;
}

pub mod delete_contact {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactDTO;
}
