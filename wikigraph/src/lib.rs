// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_topics_from_file, load_topics_from_source, parse_seed};

// Re-export crawl functionality from wikigraph-core
pub use wikigraph_core::crawl::{execute_crawl, CrawlOptions, CrawlProgressCallback, CrawlReport};
pub use wikigraph_core::report::{generate_crawl_report, write_edge_list};
