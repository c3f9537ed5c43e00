use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pagbank_connect::application::presenter::PaymentInfoPresenter;
use pagbank_connect::application::provisioning::{KeyProvisioner, ProvisioningOutcome};
use pagbank_connect::application::reconciler::{NotificationReconciler, StatusNotificationHandler};
use pagbank_connect::config::{ConnectSettings, DEFAULT_TIMEOUT_SECS};
use pagbank_connect::domain::config_paths;
use pagbank_connect::domain::order::SalesOrder;
use pagbank_connect::domain::ports::{ConfigStore, ConfigStoreBox};
use pagbank_connect::infrastructure::connect_client::ConnectClient;
use pagbank_connect::infrastructure::in_memory::InMemoryConfigStore;
use pagbank_connect::interfaces::csv::info_writer::InfoWriter;
use pagbank_connect::interfaces::json::{read_payment, read_placement};
use pagbank_connect::logging::init_logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent configuration database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Connect API endpoint that issues public keys
    #[arg(long, global = true, env = "PAGBANK_PUBLIC_KEY_ENDPOINT")]
    endpoint: Option<String>,

    /// HTTP timeout in seconds for Connect API calls
    #[arg(
        long,
        global = true,
        env = "PAGBANK_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save the Connect Key (if given) and generate the card public key
    Provision {
        #[arg(long)]
        connect_key: Option<String>,
    },
    /// Print the payment details of a payment JSON file as CSV
    Info {
        input: PathBuf,
        /// Withhold charge identifiers, as on customer-facing pages
        #[arg(long)]
        secure: bool,
    },
    /// Apply the post-placement rules to an order/payment JSON file
    Reconcile { input: PathBuf },
}

fn open_config_store(db_path: Option<PathBuf>) -> Result<ConfigStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            use pagbank_connect::infrastructure::rocksdb::RocksDbConfigStore;
            let store = RocksDbConfigStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryConfigStore::new()))
        }
        None => Ok(Box::new(InMemoryConfigStore::new())),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = ConnectSettings::default().with_timeout_secs(cli.timeout_secs);
    if let Some(endpoint) = cli.endpoint {
        settings = settings.with_endpoint(endpoint);
    }

    match cli.command {
        Command::Provision { connect_key } => {
            let store = open_config_store(cli.db_path)?;
            if let Some(key) = connect_key {
                store
                    .set(config_paths::CONNECT_KEY, &key)
                    .await
                    .into_diagnostic()?;
            }

            let client = ConnectClient::new(&settings).into_diagnostic()?;
            let provisioner =
                KeyProvisioner::new(store, Box::new(client), settings.public_key_endpoint);

            match provisioner.generate_public_key().await.into_diagnostic()? {
                ProvisioningOutcome::Skipped => println!("skipped"),
                ProvisioningOutcome::Provisioned(key) => println!("{}", key.as_str()),
            }
        }
        Command::Info { input, secure } => {
            let file = File::open(input).into_diagnostic()?;
            let payment = read_payment(file).into_diagnostic()?;
            let info = PaymentInfoPresenter::new().specific_information(&payment, secure);

            let stdout = io::stdout();
            let mut writer = InfoWriter::new(stdout.lock());
            writer.write_information(&info).into_diagnostic()?;
        }
        Command::Reconcile { input } => {
            let file = File::open(input).into_diagnostic()?;
            let mut placement = read_placement(file).into_diagnostic()?;

            let reconciler = NotificationReconciler::new(Box::new(StatusNotificationHandler));
            reconciler.on_payment_place_end(&placement.payment, &mut placement.order);

            println!("{}", placement.order.state());
        }
    }

    Ok(())
}
