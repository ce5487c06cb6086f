use crate::shared::entity::{Entity, ID};

/// A record in the `contacts` collection of the address book panel. The
/// collection stores `age` as text, so it stays a string here as well.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ID,
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

impl Entity<ID> for Contact {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
