use crate::format::Formatter;
use crate::models::JobDetail;

/// Separator between header and job list meta parts.
pub(crate) const META_SEPARATOR: &str = " • ";

/// Summary header above the detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHeaderView {
    pub title: String,
    pub meta: Option<String>,
}

/// Build the header summary for a loaded job.
///
/// Zero counts and missing fields are omitted from the meta line rather
/// than rendered as "0".
pub fn render(detail: &JobDetail, formatter: &Formatter) -> ResultHeaderView {
    let title = detail
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| Some(detail.url.clone()).filter(|u| !u.trim().is_empty()))
        .unwrap_or_else(|| "Result".to_string());

    let mut parts = Vec::new();
    if let Some(chart_title) = detail.chart_title.as_deref().filter(|t| !t.trim().is_empty()) {
        parts.push(chart_title.to_string());
    }
    if !detail.datasets.is_empty() {
        parts.push(format!("{} datasets", detail.datasets.len()));
    }
    if !detail.products.is_empty() {
        parts.push(format!("{} products", detail.products.len()));
    }
    if let Some(stamp) = &detail.created_at {
        parts.push(formatter.date_time(stamp));
    }

    ResultHeaderView {
        title,
        meta: (!parts.is_empty()).then(|| parts.join(META_SEPARATOR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, JobId, Product};
    use chrono::TimeZone;

    fn sample_detail() -> JobDetail {
        JobDetail {
            id: JobId::from("1"),
            url: "http://example.com".to_string(),
            title: Some("Örnek sayfa".to_string()),
            chart_title: Some("Haftalık satış".to_string()),
            created_at: Some(chrono::Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()),
            datasets: vec![Dataset::default(), Dataset::default()],
            products: vec![Product::default()],
            images: Vec::new(),
        }
    }

    #[test]
    fn meta_joins_all_present_parts_in_order() {
        let header = render(&sample_detail(), &Formatter::from_tag("tr-TR"));
        assert_eq!(header.title, "Örnek sayfa");
        assert_eq!(
            header.meta.as_deref(),
            Some("Haftalık satış • 2 datasets • 1 products • 01.05.2024 10:30")
        );
    }

    #[test]
    fn zero_counts_are_omitted_not_rendered() {
        let mut detail = sample_detail();
        detail.datasets.clear();
        detail.products.clear();
        detail.chart_title = None;
        detail.created_at = None;
        let header = render(&detail, &Formatter::from_tag("en-US"));
        assert_eq!(header.meta, None);
    }

    #[test]
    fn title_falls_back_to_url_then_generic() {
        let mut detail = sample_detail();
        detail.title = None;
        assert_eq!(
            render(&detail, &Formatter::from_tag("en-US")).title,
            "http://example.com"
        );

        detail.url = String::new();
        assert_eq!(render(&detail, &Formatter::from_tag("en-US")).title, "Result");
    }
}
