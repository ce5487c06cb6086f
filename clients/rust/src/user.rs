use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use userpanel_api_structs::*;
use userpanel_domain::{UserStatus, ID};

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

pub struct UpdateUserInput {
    pub user_id: ID,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_users::APIResponse> {
        self.base.get("users".into(), StatusCode::OK).await
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody {
            nome: input.name,
            email: input.email,
            cargo: input.role,
            status: input.status,
        };
        self.base
            .post(body, "users".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, input: UpdateUserInput) -> APIResponse<update_user::APIResponse> {
        let body = update_user::RequestBody {
            nome: input.name,
            email: input.email,
            cargo: input.role,
            status: input.status,
        };
        self.base
            .put(body, format!("users/{}", input.user_id), StatusCode::OK)
            .await
    }

    pub async fn remove(&self, user_id: ID) -> APIResponse<delete_user::APIResponse> {
        self.base
            .delete(format!("users/{}", user_id), StatusCode::OK)
            .await
    }
}
