//! The four orchestrating sync flows.
//!
//! Each flow fetches or produces a job payload, updates the store, then
//! fans out to the renderers in a fixed order. Failures are converted into
//! the status line at the flow boundary; they never propagate further and
//! never leave a partial render behind.

use metrics::counter;

use crate::app_state::{DashboardState, FlowPhase};
use crate::format::Formatter;
use crate::models::{JobDetail, JobId, JobSummary};
use crate::services::api::{ApiClient, ApiError, ScrapeForm};
use crate::views;

const LIST_UNAVAILABLE: &str = "job list unavailable";
const RECORD_UNAVAILABLE: &str = "record unavailable";
const SCRAPE_FAILED: &str = "scrape failed";
const SCRAPE_STARTED: &str = "scrape started";
const SCRAPE_COMPLETED: &str = "scrape completed";
const URL_REQUIRED: &str = "please enter a valid URL";

/// The dashboard client: explicit state plus the collaborators the flows
/// need. Flows take `&mut self`, so they cannot overlap within one client.
pub struct Dashboard {
    pub state: DashboardState,
    api: ApiClient,
    formatter: Formatter,
}

impl Dashboard {
    pub fn new(api: ApiClient, formatter: Formatter) -> Self {
        Self {
            state: DashboardState::new(),
            api,
            formatter,
        }
    }

    /// Seed the store from the page-embedded initial job list; no network
    /// call for the listing itself. A non-empty seed opens its newest job
    /// right away, otherwise the dashboard stays idle on its placeholders.
    pub async fn initialize(&mut self, seed: Vec<JobSummary>) {
        tracing::info!(jobs = seed.len(), "initializing dashboard");
        self.state.store.set_all(seed);
        self.state.views.job_list = views::job_list::render(&self.state.store, &self.formatter);

        if let Some(first) = self.state.store.first_id() {
            self.select_job(&first).await;
        }
    }

    /// Re-fetch the job listing and rebuild the list view. The detail views
    /// are left alone; a stale selection is tolerated.
    pub async fn refresh(&mut self) {
        self.state.phase = FlowPhase::Loading;
        match self.api.list_jobs().await {
            Ok(jobs) => {
                tracing::info!(jobs = jobs.len(), "job list refreshed");
                self.state.store.set_all(jobs);
                self.state.views.job_list =
                    views::job_list::render(&self.state.store, &self.formatter);
                self.state.phase = FlowPhase::Loaded;
                self.state.status = None;
                counter!("dashboard_flows_total", "flow" => "refresh", "outcome" => "ok")
                    .increment(1);
            }
            Err(e) => self.fail("refresh", LIST_UNAVAILABLE, e),
        }
    }

    /// Fetch one job's detail record and replace the detail views with it.
    /// Details are never cached; every selection re-fetches.
    pub async fn select_job(&mut self, id: &JobId) {
        self.state.phase = FlowPhase::Loading;
        tracing::info!(job_id = %id, "loading job detail");
        match self.api.job_detail(id).await {
            Ok(detail) => {
                self.state.store.set_active(id.clone());
                self.state.views.job_list.set_active(id);
                self.apply_detail(detail);
                self.state.phase = FlowPhase::Loaded;
                self.state.status = None;
                counter!("dashboard_flows_total", "flow" => "select_job", "outcome" => "ok")
                    .increment(1);
            }
            Err(e) => self.fail("select_job", RECORD_UNAVAILABLE, e),
        }
    }

    /// Submit a new scrape and, on success, surface it as the first and
    /// active job, rendering the detail views from the same response
    /// without an extra fetch.
    pub async fn submit_new_job(&mut self, form: ScrapeForm) {
        // Mirror the backend's empty-URL refusal without the round trip.
        if !form.use_sample && form.url.trim().is_empty() {
            self.state.phase = FlowPhase::Error;
            self.state.status = Some(URL_REQUIRED.to_string());
            return;
        }

        self.state.phase = FlowPhase::Loading;
        self.state.status = Some(SCRAPE_STARTED.to_string());
        tracing::info!(use_sample = form.use_sample, url = %form.url, "submitting scrape");

        match self.api.submit_scrape(&form).await {
            Ok(detail) => {
                let summary = detail.to_summary();
                let id = summary.id.clone();
                tracing::info!(
                    job_id = %id,
                    datasets = summary.dataset_count,
                    products = summary.product_count,
                    "scrape completed"
                );

                self.state.store.prepend(summary);
                self.state.store.set_active(id.clone());
                self.state.views.job_list =
                    views::job_list::render(&self.state.store, &self.formatter);
                self.state.views.job_list.set_active(&id);
                self.apply_detail(detail);
                self.state.phase = FlowPhase::Loaded;
                self.state.status = Some(SCRAPE_COMPLETED.to_string());
                counter!("dashboard_flows_total", "flow" => "submit_new_job", "outcome" => "ok")
                    .increment(1);
            }
            Err(e) => self.fail("submit_new_job", SCRAPE_FAILED, e),
        }
    }

    /// Fan out one detail payload to the renderers, in the fixed order
    /// chart, products, images, header.
    fn apply_detail(&mut self, detail: JobDetail) {
        self.state.views.chart.render(&detail);
        self.state.views.products = views::products::render(&detail.products, &self.formatter);
        self.state.views.images = views::images::render(&detail.images);
        self.state.views.header = Some(views::header::render(&detail, &self.formatter));
        self.state.detail = Some(detail);
    }

    /// Convert a flow failure into the user-visible status line. The store,
    /// the loaded detail and every rendered view keep their prior content.
    fn fail(&mut self, flow: &'static str, fallback: &'static str, error: ApiError) {
        tracing::warn!(flow, error = %error, "flow failed");
        let message = match error {
            ApiError::Application(message) => message,
            _ => fallback.to_string(),
        };
        self.state.phase = FlowPhase::Error;
        self.state.status = Some(message);
        counter!("dashboard_flows_total", "flow" => flow, "outcome" => "error").increment(1);
    }
}
