use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use scrape_dashboard::{
    app_state::DashboardState,
    config::AppConfig,
    flows::Dashboard,
    format::Formatter,
    models::{JobId, JobSummary},
    services::api::{ApiClient, ScrapeForm},
    views::images::ImageGridView,
    views::job_list::{self, JobListView},
    views::products::ProductGridView,
};

#[tokio::main]
async fn main() {
    // Structured logging goes to stderr; stdout belongs to the rendered views.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    metrics::describe_counter!(
        "dashboard_flows_total",
        "Sync flows run, labeled by flow and outcome"
    );

    let api = ApiClient::new(
        &config.base_url,
        Duration::from_secs(config.http_timeout_secs),
    )
    .expect("Failed to build API client");
    let formatter = Formatter::from_tag(&config.locale);
    let mut dashboard = Dashboard::new(api, formatter);

    let seed = load_bootstrap_jobs(config.bootstrap_jobs.as_deref());
    dashboard.initialize(seed).await;
    print_state(&dashboard.state);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let input = line.trim();
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "refresh" => dashboard.refresh().await,
            "open" => dashboard.select_job(&JobId::from(arg)).await,
            "scrape" => dashboard.submit_new_job(ScrapeForm::for_url(arg)).await,
            "sample" => dashboard.submit_new_job(ScrapeForm::for_sample()).await,
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {other}");
                print_help();
                continue;
            }
        }
        print_state(&dashboard.state);
    }
}

/// Load the page-embedded initial job list from disk, if configured.
fn load_bootstrap_jobs(path: Option<&str>) -> Vec<JobSummary> {
    let Some(path) = path else {
        return Vec::new();
    };
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<Vec<JobSummary>>(&raw).map_err(|e| e.to_string()));
    match parsed {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::warn!(path, error = %e, "ignoring unreadable bootstrap job list");
            Vec::new()
        }
    }
}

fn print_help() {
    println!("commands: refresh | open <id> | scrape <url> | sample | quit");
}

/// Present the current view state as text.
fn print_state(state: &DashboardState) {
    println!();
    match &state.status {
        Some(status) => println!("[{}] {status}", state.phase),
        None => println!("[{}]", state.phase),
    }

    println!("== jobs ==");
    match &state.views.job_list {
        JobListView::Placeholder => println!("  {}", job_list::PLACEHOLDER),
        JobListView::Entries(entries) => {
            for entry in entries {
                let marker = if entry.active { "*" } else { " " };
                match &entry.meta {
                    Some(meta) => println!(" {marker} [{}] {}  ({meta})", entry.id, entry.label),
                    None => println!(" {marker} [{}] {}", entry.id, entry.label),
                }
            }
        }
    }

    if let Some(header) = &state.views.header {
        println!("== result ==");
        println!("  {}", header.title);
        if let Some(meta) = &header.meta {
            println!("  {meta}");
        }
    }

    println!("== chart ==");
    match state.views.chart.instance() {
        None => println!("  no chart data captured"),
        Some(instance) => {
            if let Some(title) = &instance.spec.title {
                println!("  {title}");
            }
            println!("  categories: {}", instance.spec.categories.join(", "));
            for series in &instance.spec.series {
                let points: Vec<String> = series.values.iter().map(|v| v.to_string()).collect();
                println!("  {} [{}]: {}", series.label, series.color, points.join(", "));
            }
        }
    }

    println!("== products ==");
    match &state.views.products {
        ProductGridView::Placeholder => println!("  no products captured"),
        ProductGridView::Cards(cards) => {
            for card in cards {
                let mut line = format!("  - {}", card.name);
                if let Some(price) = &card.price {
                    line.push_str(&format!(" | {price}"));
                }
                if let Some(description) = &card.description {
                    line.push_str(&format!(" | {description}"));
                }
                println!("{line}");
            }
        }
    }

    println!("== images ==");
    match &state.views.images {
        ImageGridView::Placeholder => println!("  no images captured"),
        ImageGridView::Figures(figures) => {
            for figure in figures {
                println!("  - {}  ({})", figure.url, figure.caption);
            }
        }
    }
}
