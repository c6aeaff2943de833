use crate::report::write_edge_list;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wikigraph_crawler::{
    Crawler, CrawlSummary, HttpFetcher, Result, WikiLinkExtractor, DEFAULT_BASE_URL,
};

/// Options for configuring a crawl run
pub struct CrawlOptions {
    pub seed: String,
    pub max_pages: usize,
    pub topics: Vec<String>,
    pub base_url: String,
    pub output: Option<PathBuf>,
    pub show_progress: bool,
    /// Pacing override, mainly for tests. None keeps the production
    /// fixed window (pause after every 25 requests).
    pub pacing: Option<(usize, Duration)>,
}

impl CrawlOptions {
    pub fn new(seed: impl Into<String>, max_pages: usize) -> Self {
        Self {
            seed: seed.into(),
            max_pages,
            topics: Vec::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output: None,
            show_progress: false,
            pacing: None,
        }
    }
}

/// Callback for reporting crawl progress
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// What `execute_crawl` hands back for display and serialization.
pub struct CrawlReport {
    pub summary: CrawlSummary,
    pub edges: Vec<(String, String)>,
}

/// Execute a crawl with the given options.
///
/// The output destination, when configured, is opened before any crawling
/// begins so an unavailable destination aborts the run early; the handle
/// is released on every exit path.
pub async fn execute_crawl(
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlReport> {
    let CrawlOptions {
        seed,
        max_pages,
        topics,
        base_url,
        output,
        show_progress,
        pacing,
    } = options;

    let mut output_writer = match output {
        Some(ref path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let fetcher = HttpFetcher::with_base_url(&base_url)?;
    let mut crawler = Crawler::new(fetcher, WikiLinkExtractor::new())
        .with_max_pages(max_pages)
        .with_topics(topics);

    if let Some((window, pause)) = pacing {
        crawler = crawler.with_pacing(window, pause);
    }

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        crawler = crawler.with_progress_callback(Arc::new(move |visited, id| {
            pb_clone.set_message(format!("Crawling {} ({} pages admitted)", id, visited));
            pb_clone.tick();
        }));
    }

    if let Some(ref callback) = progress_callback {
        callback(format!("Crawling {} from {}", seed, base_url));
    }

    let outcome = crawler.crawl(&seed).await?;

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!(
            "Crawl complete! {} pages admitted, {} edges recorded",
            outcome.visited_count,
            outcome.edges.len()
        ));
    }

    if let Some(writer) = output_writer.as_mut() {
        write_edge_list(writer, outcome.graph.vertex_count(), &outcome.edges)?;
        if let Some(path) = output {
            info!("Edge list written to {}", path.display());
        }
    }

    Ok(CrawlReport {
        summary: outcome.summary(&seed),
        edges: outcome.edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_output_aborts_before_crawling() {
        let mut options = CrawlOptions::new("/wiki/A", 5);
        options.output = Some(PathBuf::from("/nonexistent-dir/edges.txt"));
        // An unreachable base URL would also fail, but the output error
        // must surface first.
        options.base_url = "http://127.0.0.1:1".to_string();

        let result = execute_crawl(options, None).await;
        assert!(matches!(
            result,
            Err(wikigraph_crawler::CrawlError::IoError(_))
        ));
    }

    #[test]
    fn test_options_defaults() {
        let options = CrawlOptions::new("/wiki/A", 5);
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
        assert!(options.topics.is_empty());
        assert!(options.output.is_none());
        assert!(!options.show_progress);
    }
}
