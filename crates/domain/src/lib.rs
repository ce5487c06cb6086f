mod contact;
mod shared;
mod user;

pub use contact::Contact;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{InvalidUserStatusError, User, UserStatus};
