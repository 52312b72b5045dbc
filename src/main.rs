use tokio::net::TcpListener;

use comingsoon::configuration::get_configuration;
use comingsoon::startup::{get_app_state, run};
use comingsoon::telemetry;

#[tokio::main]
async fn main() {
    let subscriber =
        telemetry::get_subscriber("comingsoon".into(), "info".into(), std::io::stdout);
    telemetry::initialize_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let listener = TcpListener::bind(format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    ))
    .await
    .expect("Failed to bind a port for application");

    let state = get_app_state(&configuration);

    run(listener, state).await
}
