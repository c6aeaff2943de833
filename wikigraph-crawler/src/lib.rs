pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod frontier;
pub mod graph;
pub mod pacing;
pub mod result;
pub mod topic;

pub use crawler::{Crawler, ProgressCallback};
pub use error::{CrawlError, Result};
pub use extract::{LinkExtractor, WikiLinkExtractor};
pub use fetch::{HttpFetcher, PageFetcher, DEFAULT_BASE_URL};
pub use result::{CrawlOutcome, CrawlSummary};
pub use topic::TopicFilter;
