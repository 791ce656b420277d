use crate::models::JobDetail;
use crate::store::JobStore;
use crate::views::chart::ChartSlot;
use crate::views::header::ResultHeaderView;
use crate::views::images::ImageGridView;
use crate::views::job_list::JobListView;
use crate::views::products::ProductGridView;

/// Lifecycle of the currently running (or last finished) flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FlowPhase {
    #[default]
    Idle,
    Loading,
    Error,
    Loaded,
}

/// The dashboard's entire mutable state.
///
/// Only the sync flows write here; renderers are pure functions whose
/// output lands in `views`. On a failed flow everything except `phase`
/// and `status` keeps its prior content.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub store: JobStore,
    pub phase: FlowPhase,
    /// User-visible status line; `None` when nothing is worth saying.
    pub status: Option<String>,
    /// Last successfully loaded detail record.
    pub detail: Option<JobDetail>,
    pub views: ViewState,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Current output of every renderer. Defaults are the empty states.
#[derive(Debug, Default)]
pub struct ViewState {
    pub job_list: JobListView,
    pub chart: ChartSlot,
    pub products: ProductGridView,
    pub images: ImageGridView,
    pub header: Option<ResultHeaderView>,
}
