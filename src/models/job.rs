use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a scrape job.
///
/// The backend hands out integer ids, but the contract treats them as
/// opaque, so both JSON numbers and strings are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(JobId(s)),
            serde_json::Value::Number(n) => Ok(JobId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "job id must be a string or number, got {other}"
            ))),
        }
    }
}

/// Where on the scraped page an image was discovered.
///
/// Anything the backend reports that is not `"product"` (including a
/// missing field) counts as general imagery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageContext {
    Product,
    #[default]
    General,
}

impl ImageContext {
    /// Caption label shown under gallery figures.
    pub fn label(&self) -> &'static str {
        match self {
            ImageContext::Product => "product image",
            ImageContext::General => "general image",
        }
    }
}

impl<'de> Deserialize<'de> for ImageContext {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("product") => ImageContext::Product,
            _ => ImageContext::General,
        })
    }
}

/// Lightweight listing record for one scrape job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chart_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product_count: usize,
    #[serde(default)]
    pub dataset_count: usize,
}

/// Full result record for one scrape job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: JobId,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chart_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl JobDetail {
    /// Synthesize the listing record for this result (submission path).
    pub fn to_summary(&self) -> JobSummary {
        JobSummary {
            id: self.id.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
            chart_title: self.chart_title.clone(),
            created_at: self.created_at,
            product_count: self.products.len(),
            dataset_count: self.datasets.len(),
        }
    }
}

/// One normalised chart series.
///
/// All datasets of one job share the category axis; the first dataset's
/// `labels` is the authoritative sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// A product card extracted from the target page. Identity is positional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Chart or product imagery referenced by a scrape result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub context: ImageContext,
}

mod lenient_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// The backend emits naive `isoformat()` timestamps; tolerate those as
    /// well as proper RFC 3339, treating naive stamps as UTC.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(parsed.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn job_id_accepts_numbers_and_strings() {
        let numeric: JobId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric.as_str(), "7");

        let textual: JobId = serde_json::from_str("\"j1\"").unwrap();
        assert_eq!(textual.as_str(), "j1");
    }

    #[test]
    fn job_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<JobId>("[1]").is_err());
    }

    #[test]
    fn created_at_tolerates_naive_isoformat() {
        let summary: JobSummary = serde_json::from_value(serde_json::json!({
            "id": 3,
            "url": "http://example.com",
            "created_at": "2024-05-01T10:30:00.123456"
        }))
        .unwrap();
        let stamp = summary.created_at.unwrap();
        assert_eq!(stamp.hour(), 10);
        assert_eq!(stamp.minute(), 30);
    }

    #[test]
    fn created_at_null_stays_none() {
        let summary: JobSummary = serde_json::from_value(serde_json::json!({
            "id": 3,
            "url": "http://example.com",
            "created_at": null
        }))
        .unwrap();
        assert!(summary.created_at.is_none());
    }

    #[test]
    fn unknown_image_context_is_general() {
        let image: Image = serde_json::from_value(serde_json::json!({
            "url": "http://example.com/a.png",
            "context": "hero-banner"
        }))
        .unwrap();
        assert_eq!(image.context, ImageContext::General);

        let missing: Image =
            serde_json::from_value(serde_json::json!({"url": "http://example.com/b.png"})).unwrap();
        assert_eq!(missing.context, ImageContext::General);
        assert_eq!(missing.context.to_string(), "general");
    }

    #[test]
    fn summary_counts_follow_detail() {
        let detail: JobDetail = serde_json::from_value(serde_json::json!({
            "id": "j9",
            "url": "http://example.com",
            "datasets": [{"label": "sales", "labels": ["a"], "values": [1.0]}],
            "products": [{}, {}],
            "images": []
        }))
        .unwrap();
        let summary = detail.to_summary();
        assert_eq!(summary.dataset_count, 1);
        assert_eq!(summary.product_count, 2);
    }
}
