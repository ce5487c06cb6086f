use userpanel_sdk::{ApiConfig, PanelSDK};

use super::server::spawn_collection_server;

pub struct TestApp {
    pub sdk: PanelSDK,
    pub address: String,
}

/// Boots an in-process mock collection and an SDK pointed at it.
pub fn spawn_app() -> TestApp {
    let address = spawn_collection_server();
    let sdk = PanelSDK::new(&ApiConfig::with_base_url(address.clone()));
    TestApp { sdk, address }
}
