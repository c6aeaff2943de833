use crate::error::{CrawlError, Result};
use crate::extract::LinkExtractor;
use crate::fetch::PageFetcher;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::pacing::RateLimiter;
use crate::result::CrawlOutcome;
use crate::topic::TopicFilter;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Called with (pages visited so far, current identifier) as each page is
/// dequeued for processing.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

const DEFAULT_MAX_PAGES: usize = 100;

/// Breadth-first crawl controller.
///
/// Drives the frontier from a seed identifier to exhaustion, gating every
/// page and candidate link through the topic filter and recording the
/// observed link relationships into a [`Graph`]. Retrieval and extraction
/// are injected collaborators so the engine itself never touches the
/// network or the markup format directly.
pub struct Crawler<F, E> {
    fetcher: F,
    extractor: E,
    max_pages: usize,
    topics: TopicFilter,
    pacing_window: usize,
    pacing_pause: Duration,
    progress_callback: Option<ProgressCallback>,
}

impl<F: PageFetcher, E: LinkExtractor> Crawler<F, E> {
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            max_pages: DEFAULT_MAX_PAGES,
            topics: TopicFilter::default(),
            pacing_window: RateLimiter::DEFAULT_WINDOW,
            pacing_pause: RateLimiter::DEFAULT_PAUSE,
            progress_callback: None,
        }
    }

    /// Cap on distinct pages ever admitted, the seed included.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_topics(mut self, keywords: Vec<String>) -> Self {
        self.topics = TopicFilter::new(keywords);
        self
    }

    pub fn with_pacing(mut self, window: usize, pause: Duration) -> Self {
        self.pacing_window = window;
        self.pacing_pause = pause;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Run the crawl to completion.
    pub async fn crawl(&self, seed: &str) -> Result<CrawlOutcome> {
        if seed.is_empty() {
            return Err(CrawlError::InvalidSeed("seed must not be empty".into()));
        }

        info!(
            "Starting crawl of {} (max {} pages, {} topic keywords)",
            seed,
            self.max_pages,
            self.topics.keywords().len()
        );

        let mut graph = Graph::new();
        let mut frontier = Frontier::new(self.max_pages);
        let mut limiter = RateLimiter::new(self.pacing_window, self.pacing_pause);
        let mut edges: Vec<(String, String)> = Vec::new();

        frontier.seed(seed);

        while let Some(current) = frontier.pop() {
            if let Some(ref callback) = self.progress_callback {
                callback(frontier.visited_count(), current.clone());
            }

            let body = self.fetch_body(&current, &mut limiter).await;

            // An irrelevant page contributes no edges and no discoveries.
            if !self.topics.is_relevant(&body) {
                debug!("Page {} failed topic admission, skipping links", current);
                continue;
            }

            for link in self.candidate_links(&body, &current) {
                let under_max = frontier.has_capacity();

                // Verification fetch only while capacity remains and a
                // filter is configured; otherwise auto-admit.
                let admitted = if under_max && !self.topics.is_empty() {
                    let link_body = self.fetch_body(&link, &mut limiter).await;
                    self.topics.is_relevant(&link_body)
                } else {
                    true
                };

                if !admitted {
                    debug!("Candidate {} failed topic admission", link);
                    continue;
                }

                if under_max && !frontier.is_visited(&link) {
                    frontier.admit(&link);
                    if graph.add_edge(&current, &link) {
                        edges.push((current.clone(), link));
                    }
                } else if frontier.is_visited(&link) {
                    // A backlink into known territory is still graph-worthy.
                    if graph.add_edge(&current, &link) {
                        edges.push((current.clone(), link));
                    }
                }
                // Capacity exhausted and unseen: dropped for this run.
            }
        }

        let outcome = CrawlOutcome {
            pages_fetched: limiter.request_count(),
            visited_count: frontier.visited_count(),
            graph,
            edges,
        };
        info!(
            "Crawl complete. {} vertices, {} edges, {} pages fetched",
            outcome.graph.vertex_count(),
            outcome.edges.len(),
            outcome.pages_fetched
        );
        Ok(outcome)
    }

    /// Fetch one page and reduce it to the text the rest of the pipeline
    /// sees: everything from the first paragraph marker on. A page that
    /// cannot be located, fails to transfer, or has no paragraph marker
    /// yields an empty body rather than aborting the run.
    async fn fetch_body(&self, id: &str, limiter: &mut RateLimiter) -> String {
        let fetched = self.fetcher.fetch(id).await;
        limiter.tick().await;

        let body = match fetched {
            Ok(Some(body)) => body,
            Ok(None) => {
                debug!("Page {} could not be located", id);
                return String::new();
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", id, e);
                return String::new();
            }
        };

        match body.find("<p>") {
            Some(idx) => body[idx..].to_string(),
            None => String::new(),
        }
    }

    /// Distinct candidate identifiers in first-seen order, self-loops
    /// excluded.
    fn candidate_links(&self, body: &str, current: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.extractor
            .extract_links(body)
            .into_iter()
            .filter(|link| link != current)
            .filter(|link| seen.insert(link.clone()))
            .collect()
    }
}
