use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use secrecy::Secret;
use tokio::net::TcpListener;
use uuid::Uuid;

use comingsoon::{configuration, startup, telemetry};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::initialize_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::initialize_subscriber(subscriber);
    };
});

pub struct App {
    pub address: SocketAddr,
    pub client: Client,
    pub admin_token: String,
    pub contacts_path: PathBuf,
}

impl App {
    pub async fn new() -> Self {
        Lazy::force(&TRACING);

        // configure listener
        let listener = TcpListener::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to start an test application");
        let address = listener.local_addr().unwrap();

        // get configuration, randomise storage path and admin token
        let mut configuration =
            configuration::get_configuration().expect("Failed to read configuration");
        let admin_token = Uuid::new_v4().to_string();
        let contacts_path = std::env::temp_dir().join(format!("contacts-{}.json", Uuid::new_v4()));
        configuration.admin.token = Some(Secret::new(admin_token.clone()));
        configuration.storage.contacts_path = contacts_path.clone();

        // configure app state
        let app_state = startup::get_app_state(&configuration);

        // start a server
        tokio::spawn(startup::run(listener, app_state));

        // provide a reqwest client
        let client = Client::new();

        App {
            address,
            client,
            admin_token,
            contacts_path,
        }
    }
}

impl App {
    pub async fn get_health_check(&self) -> Response {
        self.client
            .get(format!("http://{}/api/health", self.address))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_subscribe(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("http://{}/api/subscribe", self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_contacts(&self) -> Response {
        self.client
            .get(format!("http://{}/api/contacts", self.address))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_admin_contacts(&self, token: Option<&str>) -> Response {
        let mut request = self
            .client
            .get(format!("http://{}/api/admin/contacts", self.address));

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request.send().await.unwrap()
    }
}
