mod contact;
mod user;

pub mod dtos {
    pub use crate::contact::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::contact::api::*;
pub use crate::user::api::*;
