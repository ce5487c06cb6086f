use serde::{Deserialize, Serialize};
use userpanel_domain::{Contact, ID};

/// Wire representation of a contact record. `age` travels as text, exactly
/// as the collection stores it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactDTO {
    pub id: ID,
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

impl ContactDTO {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            age: contact.age,
            email: contact.email,
            address: contact.address,
            cell_number: contact.cell_number,
        }
    }

    pub fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            age: self.age,
            email: self.email,
            address: self.address,
            cell_number: self.cell_number,
        }
    }
}
