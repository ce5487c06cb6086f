mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use userpanel_panel::Panel;
use userpanel_sdk::{ApiConfig, PanelSDK};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("userpanel".into(), "info".into());
    init_subscriber(subscriber);

    let config = ApiConfig::new();
    if !config.is_configured() {
        println!("The api base url is not configured.");
        println!("Set API_BASE_URL to your collection endpoint, for example:");
        println!("  API_BASE_URL=https://<project>.mockapi.io/api/v1");
        return;
    }

    let sdk = PanelSDK::new(&config);
    let mut panel = Panel::new(sdk.users);
    if let Err(e) = panel.load().await {
        eprintln!("{}", e);
    }
    println!("{}", panel.view());
}
