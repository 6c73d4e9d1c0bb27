use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payrelay::application::ingestion::IngestionService;
use payrelay::application::payment::PaymentService;
use payrelay::application::producer::TransactionProducer;
use payrelay::config::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_RECEIVER, DEFAULT_SENDER, DEFAULT_SIDECAR_HOST,
    DEFAULT_SIDECAR_PORT, DEFAULT_TARGET_METHOD, DEFAULT_TARGET_SERVICE, PaymentConfig,
    SIDECAR_PORT_ENV, SidecarConfig,
};
use payrelay::domain::ports::{AmountSourceBox, TransactionRelayBox};
use payrelay::infrastructure::random::RandomAmountSource;
use payrelay::infrastructure::sidecar::SidecarClient;
use payrelay::interfaces::http;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand)]
enum Service {
    /// Run the payment service: generates transactions and relays them via the sidecar
    Payment {
        /// Address to accept HTTP requests on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: SocketAddr,

        /// Host the sidecar listens on
        #[arg(long, default_value = DEFAULT_SIDECAR_HOST)]
        sidecar_host: String,

        /// Local HTTP port of the sidecar
        #[arg(long, env = SIDECAR_PORT_ENV, default_value_t = DEFAULT_SIDECAR_PORT)]
        sidecar_port: u16,

        /// Seconds to wait when connecting to the sidecar
        #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
        connect_timeout_secs: u64,

        /// Logical service the sidecar should route transactions to
        #[arg(long, default_value = DEFAULT_TARGET_SERVICE)]
        target_service: String,

        /// Method invoked on the target service
        #[arg(long, default_value = DEFAULT_TARGET_METHOD)]
        target_method: String,

        /// Paying party stamped on every transaction
        #[arg(long, default_value = DEFAULT_SENDER)]
        sender: String,

        /// Receiving party stamped on every transaction
        #[arg(long, default_value = DEFAULT_RECEIVER)]
        receiver: String,
    },
    /// Run the account service: acknowledges inbound transactions
    Account {
        /// Address to accept HTTP requests on
        #[arg(long, default_value = "0.0.0.0:8081")]
        listen: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.service {
        Service::Payment {
            listen,
            sidecar_host,
            sidecar_port,
            connect_timeout_secs,
            target_service,
            target_method,
            sender,
            receiver,
        } => {
            let config = PaymentConfig {
                sender,
                receiver,
                target_service,
                target_method,
                sidecar: SidecarConfig {
                    host: sidecar_host,
                    port: sidecar_port,
                    connect_timeout: Duration::from_secs(connect_timeout_secs),
                },
            };
            config.validate().into_diagnostic()?;

            let (sender, receiver) = config.parties().into_diagnostic()?;
            let amounts: AmountSourceBox = Box::new(RandomAmountSource::default());
            let relay: TransactionRelayBox =
                Box::new(SidecarClient::new(&config.sidecar).into_diagnostic()?);

            let service = PaymentService::new(
                TransactionProducer::new(sender, receiver, amounts),
                relay,
                config.target().into_diagnostic()?,
            );

            info!(
                sidecar = %config.sidecar.base_url(),
                service = %config.target_service,
                method = %config.target_method,
                "Payment service configured"
            );
            serve(listen, http::payment::router(Arc::new(service))).await
        }
        Service::Account { listen } => {
            serve(listen, http::account::router(IngestionService::new())).await
        }
    }
}

async fn serve(addr: SocketAddr, app: axum::Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()?;
    let local_addr = listener.local_addr().into_diagnostic()?;
    info!(addr = %local_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. If the signal handler cannot be installed the
/// server keeps running instead of stopping straight away.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            error!(error = %e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
