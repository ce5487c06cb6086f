use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;

pub type APIResponse<T> = Result<T, APIError>;

#[derive(Debug, Error)]
pub enum APIError {
    /// The request never completed. Nothing can be assumed about the far
    /// side: the server may be down, the url wrong or the network gone.
    #[error("Could not reach the api: {0}")]
    Network(#[source] reqwest::Error),
    #[error("The api responded with unexpected status code: {status}")]
    UnexpectedStatusCode { status: StatusCode, body: String },
    #[error("The api responded with a body that could not be decoded")]
    MalformedResponse(#[source] reqwest::Error),
}

pub(crate) struct BaseClient {
    address: String,
    http: Client,
}

impl BaseClient {
    pub fn new(address: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("The http client to be created");
        let address = address.trim_end_matches('/').to_string();

        Self { address, http }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        res: Result<reqwest::Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = res.map_err(APIError::Network)?;
        let status = res.status();
        if status != expected_status_code {
            let body = res.text().await.unwrap_or_default();
            return Err(APIError::UnexpectedStatusCode { status, body });
        }

        res.json().await.map_err(APIError::MalformedResponse)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.http.get(&self.url(&path)).send().await;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.http.post(&self.url(&path)).json(&body).send().await;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn put<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.http.put(&self.url(&path)).json(&body).send().await;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.http.delete(&self.url(&path)).send().await;
        self.handle_response(res, expected_status_code).await
    }
}
