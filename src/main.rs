//! Pomodoro Client - terminal client for a remote Pomodoro timer
//! 
//! This is the main entry point for the pomodoro-client application.

use tracing::info;

use pomodoro_client::{
    config::{Config, Mode},
    state::Session,
    api::TimerClient,
    ui::{run_once, run_terminal},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the status line keeps stdout to itself
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_client={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pomodoro-client v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: base_url={}, interval={}ms, timeout={:?}",
          config.base_url, config.interval_ms, config.request_timeout());

    let client = TimerClient::new(&config.base_url, config.request_timeout())?;
    let mut session = Session::new(client, config.poll_interval());

    match config.mode() {
        Mode::Watch => {
            session.probe().await;
            session.start_polling();

            let result = run_terminal(&session).await;
            session.shutdown().await;
            result?;

            info!("Session closed");
            // stdin may still be parked in a blocking read the runtime would wait on
            std::process::exit(0);
        }
        mode => {
            let code = run_once(&session, mode.command(), &mut std::io::stdout()).await;
            std::process::exit(code);
        }
    }
}
