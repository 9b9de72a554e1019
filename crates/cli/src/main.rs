use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inquiry_desk_core::{FilterCriteria, Inquiry};
use inquiry_desk_http::{AppState, create_router};
use inquiry_desk_service::InquiryListService;
use inquiry_desk_storage::{InquiryStore, MemoryStore};

#[derive(Parser)]
#[command(name = "inquiry-desk")]
#[command(about = "Admin-side query, aggregation, and deletion for customer inquiries", long_about = None)]
struct Cli {
    /// JSON file with an array of inquiry records to pre-load.
    /// Records with unknown status/priority/type values are rejected.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the admin HTTP API.
    Serve {
        #[arg(short, long, default_value = "38080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// One-shot filtered query, printed as JSON.
    List(ListArgs),
    /// Collection-wide counts by status, printed as JSON.
    Stats,
}

#[derive(Args)]
struct ListArgs {
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    priority: Option<String>,
    #[arg(short = 't', long = "type")]
    inquiry_type: Option<String>,
    #[arg(long, default_value = "createdAt")]
    sort_by: String,
    #[arg(long, default_value = "desc")]
    sort_order: String,
    #[arg(long, default_value = "1")]
    page: u64,
    #[arg(short, long, default_value = "10")]
    limit: u64,
}

fn load_store(seed: Option<&PathBuf>) -> Result<MemoryStore> {
    let Some(path) = seed else {
        return Ok(MemoryStore::new());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let records: Vec<Inquiry> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    tracing::info!(count = records.len(), "loaded seed inquiries");
    Ok(MemoryStore::seeded(records))
}

fn build_criteria(args: ListArgs) -> Result<FilterCriteria> {
    let mut criteria =
        FilterCriteria { page: args.page, per_page: args.limit, ..FilterCriteria::default() };
    criteria.search = args.search.filter(|s| !s.trim().is_empty());
    if let Some(status) = args.status {
        criteria.status = Some(status.parse()?);
    }
    if let Some(priority) = args.priority {
        criteria.priority = Some(priority.parse()?);
    }
    if let Some(inquiry_type) = args.inquiry_type {
        criteria.inquiry_type = Some(inquiry_type.parse()?);
    }
    criteria.sort_by = args.sort_by.parse()?;
    criteria.sort_order = args.sort_order.parse()?;
    Ok(criteria.normalized())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let store = load_store(cli.seed.as_ref())?;

    match cli.command {
        Commands::Serve { port, host } => {
            let list_service = Arc::new(InquiryListService::new(Arc::new(store)));
            let state = Arc::new(AppState { list_service });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("starting admin API on {addr}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::List(args) => {
            let criteria = build_criteria(args)?;
            let result = store.fetch_page(&criteria).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        },
        Commands::Stats => {
            let stats = store.fetch_stats().await?;
            if let Some(err) = stats.integrity_error() {
                tracing::warn!(error = %err, "stats snapshot failed integrity check");
            }
            println!("{}", serde_json::to_string_pretty(&stats)?);
        },
    }

    Ok(())
}
