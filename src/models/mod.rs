pub mod job;

pub use job::{Dataset, Image, ImageContext, JobDetail, JobId, JobSummary, Product};
