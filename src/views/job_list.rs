use crate::format::Formatter;
use crate::models::JobId;
use crate::store::JobStore;
use crate::views::header::META_SEPARATOR;

/// Placeholder entry shown when the store holds no jobs yet.
pub const PLACEHOLDER: &str = "no scrapes yet";

/// One sidebar entry for a known job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListEntry {
    pub id: JobId,
    pub label: String,
    pub meta: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JobListView {
    #[default]
    Placeholder,
    Entries(Vec<JobListEntry>),
}

impl JobListView {
    pub fn entries(&self) -> &[JobListEntry] {
        match self {
            JobListView::Placeholder => &[],
            JobListView::Entries(entries) => entries,
        }
    }

    /// Move the active marker without rebuilding the entries.
    pub fn set_active(&mut self, id: &JobId) {
        if let JobListView::Entries(entries) = self {
            for entry in entries.iter_mut() {
                entry.active = entry.id == *id;
            }
        }
    }
}

/// Rebuild the job list in store order (newest first by construction).
///
/// The store's active id decides which entry bears the marker; with no
/// active id yet, the first entry is marked by default. A stale active id
/// leaves every entry unmarked until the user picks another job.
pub fn render(store: &JobStore, formatter: &Formatter) -> JobListView {
    if store.is_empty() {
        return JobListView::Placeholder;
    }

    let entries = store
        .jobs()
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let label = [job.title.as_deref(), job.chart_title.as_deref()]
                .into_iter()
                .flatten()
                .map(str::trim)
                .find(|part| !part.is_empty())
                .unwrap_or(&job.url)
                .to_string();

            let mut parts = Vec::new();
            if let Some(chart_title) = job.chart_title.as_deref().filter(|t| !t.trim().is_empty()) {
                parts.push(chart_title.to_string());
            }
            if job.product_count > 0 {
                parts.push(format!("{} products", job.product_count));
            }
            if let Some(stamp) = &job.created_at {
                parts.push(formatter.date_time(stamp));
            }

            let active = match store.active_id() {
                Some(active_id) => *active_id == job.id,
                None => index == 0,
            };

            JobListEntry {
                id: job.id.clone(),
                label,
                meta: (!parts.is_empty()).then(|| parts.join(META_SEPARATOR)),
                active,
            }
        })
        .collect();

    JobListView::Entries(entries)
}
