use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use wikigraph_core::crawl::{execute_crawl, CrawlOptions};
use wikigraph_core::report::generate_crawl_report;

/// Normalize a seed argument into a corpus-relative identifier: keep
/// `/wiki/...` paths as-is, turn a bare title into one.
pub fn parse_seed(seed: &str) -> Result<String, String> {
    let seed = seed.trim();
    if seed.is_empty() {
        return Err("Seed page must not be empty".to_string());
    }

    if seed.starts_with('/') {
        Ok(seed.to_string())
    } else {
        Ok(format!("/wiki/{}", seed.replace(' ', "_")))
    }
}

/// Resolve topic keywords from either repeated flags or a keywords file.
pub fn load_topics_from_source(
    topics: Vec<String>,
    topics_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(path) = topics_file {
        load_topics_from_file(path)
    } else {
        Ok(topics)
    }
}

/// Load and parse topic keywords from a file, one per line.
pub fn load_topics_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read topics file {}: {}", path.display(), e))?;

    let topics: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    if topics.is_empty() {
        return Err(format!("No keywords found in {}", path.display()));
    }

    Ok(topics)
}

pub async fn handle_crawl(sub_matches: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let seed_arg = sub_matches.get_one::<String>("seed").unwrap();
    let max_pages = sub_matches.get_one::<usize>("max").unwrap();
    let base_url = sub_matches.get_one::<String>("base-url").unwrap();
    let output = sub_matches.get_one::<PathBuf>("output");
    let topics_file = sub_matches.get_one::<PathBuf>("topics-file");
    let json = sub_matches.get_flag("json");

    let topic_flags: Vec<String> = sub_matches
        .get_many::<String>("topic")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let seed = match parse_seed(seed_arg) {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    let topics = match load_topics_from_source(topic_flags, topics_file) {
        Ok(topics) => topics,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("\n{} Crawling {}", "→".blue(), seed.bold());
        println!("Max pages: {}", max_pages);
        if topics.is_empty() {
            println!("Topic filter: none\n");
        } else {
            println!("Topic filter: {}\n", topics.join(", "));
        }
    }

    let mut options = CrawlOptions::new(seed, *max_pages);
    options.topics = topics;
    options.base_url = base_url.clone();
    options.output = output.cloned();
    options.show_progress = !quiet && !json;

    match execute_crawl(options, None).await {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report.summary) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => {
                        eprintln!("{} Failed to render summary: {}", "✗".red().bold(), e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("\n{} Crawl complete!\n", "✓".green().bold());
                print!("{}", generate_crawl_report(&report.summary, &report.edges));
                if let Some(path) = output {
                    println!("\nEdge list written to {}", path.display());
                }
            }
        }
        Err(e) => {
            eprintln!("{} Crawl failed: {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
