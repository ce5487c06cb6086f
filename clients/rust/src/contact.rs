use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use userpanel_api_structs::*;
use userpanel_domain::ID;

#[derive(Clone)]
pub struct ContactClient {
    base: Arc<BaseClient>,
}

pub struct CreateContactInput {
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

pub struct UpdateContactInput {
    pub contact_id: ID,
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

impl ContactClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_contacts::APIResponse> {
        self.base.get("contacts".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CreateContactInput,
    ) -> APIResponse<create_contact::APIResponse> {
        let body = create_contact::RequestBody {
            name: input.name,
            age: input.age,
            email: input.email,
            address: input.address,
            cell_number: input.cell_number,
        };
        self.base
            .post(body, "contacts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateContactInput,
    ) -> APIResponse<update_contact::APIResponse> {
        let body = update_contact::RequestBody {
            name: input.name,
            age: input.age,
            email: input.email,
            address: input.address,
            cell_number: input.cell_number,
        };
        self.base
            .put(body, format!("contacts/{}", input.contact_id), StatusCode::OK)
            .await
    }

    pub async fn remove(&self, contact_id: ID) -> APIResponse<delete_contact::APIResponse> {
        self.base
            .delete(format!("contacts/{}", contact_id), StatusCode::OK)
            .await
    }
}
