//! Reconciler binary entry point
//!
//! Runs one reconciliation per process: the trigger event comes from a JSON
//! file, stdin, or individual flags. Result records go to stdout as JSON
//! lines; diagnostics go to stderr.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use reconciler::{
    AuthorizeNetGateway, InvocationEvent, JsonLinesLogger, ReconcileError, ReconcileResult,
    Reconciler, ReqwestTransport, ShopifyOrderPlatform,
};
use shared::{logging, AppConfig};

const COMPONENT: &str = "reconciler";

#[derive(Parser)]
#[command(name = "reconciler")]
#[command(about = "Captures a prior Authorize.net authorization and records it on the Shopify order")]
struct Args {
    /// Trigger event JSON file ("-" reads stdin)
    #[arg(long, conflicts_with_all = ["shop_domain", "order_id", "order_number", "action_source"])]
    event: Option<PathBuf>,

    /// Shop host, e.g. demo.myshopify.com
    #[arg(long)]
    shop_domain: Option<String>,

    /// Order id used in Admin API URLs
    #[arg(long)]
    order_id: Option<String>,

    /// Human-readable order number, sent as the invoice number
    #[arg(long)]
    order_number: Option<String>,

    /// "capture" takes the amount from the last capture transaction
    #[arg(long)]
    action_source: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Load configuration from this dotenv file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logging::init_tracing(&args.log_level);

    let code = exit_code(run(args).await);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Log a failed run once and map it to the process exit status
fn exit_code(result: ReconcileResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            logging::log_error(COMPONENT, "Reconciliation", &e);
            1
        }
    }
}

async fn run(args: Args) -> ReconcileResult<()> {
    let config = match &args.env_file {
        Some(path) => AppConfig::from_env_file(path)?,
        None => AppConfig::from_env()?,
    };
    let event = load_event(&args)?;

    logging::log_startup(
        COMPONENT,
        &format!("reconciliation for order {} on {}", event.order_number, event.shop_domain),
    );

    // Both clients share one connection pool
    let transport = ReqwestTransport::new(config.http_timeout)?;
    let platform = ShopifyOrderPlatform::new(transport.clone(), config.platform);
    let gateway = AuthorizeNetGateway::new(transport, config.gateway);

    let reconciler = Reconciler::new(platform, gateway, JsonLinesLogger::stdout());
    let outcome = reconciler.reconcile(&event).await?;

    logging::log_outcome(COMPONENT, &outcome.to_string());
    Ok(())
}

fn load_event(args: &Args) -> ReconcileResult<InvocationEvent> {
    if let Some(path) = &args.event {
        let raw = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        };
        return InvocationEvent::from_json_str(&raw);
    }

    let required = |value: &Option<String>, field: &str| {
        value
            .clone()
            .ok_or_else(|| ReconcileError::invalid_event(field, "is required without --event"))
    };

    let mut event = InvocationEvent::new(
        required(&args.shop_domain, "shop_domain")?,
        required(&args.order_id, "order_id")?,
        required(&args.order_number, "order_number")?,
    );
    if let Some(action_source) = &args.action_source {
        event = event.with_action_source(action_source.clone());
    }
    Ok(event)
}
