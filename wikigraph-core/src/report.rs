use std::io::{self, Write};
use wikigraph_crawler::CrawlSummary;

/// Serialize the explored graph as an edge list: line 1 is the vertex
/// count, then one `<from> <to>` line per recorded edge, insertion order.
pub fn write_edge_list<W: Write>(
    writer: &mut W,
    vertex_count: usize,
    edges: &[(String, String)],
) -> io::Result<()> {
    writeln!(writer, "{}", vertex_count)?;
    for (from, to) in edges {
        writeln!(writer, "{} {}", from, to)?;
    }
    writer.flush()
}

/// Human-readable run summary for terminal display.
pub fn generate_crawl_report(summary: &CrawlSummary, edges: &[(String, String)]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Seed page: {}\n", summary.seed));
    report.push_str(&format!("  Pages admitted: {}\n", summary.visited_count));
    report.push_str(&format!("  Vertices: {}\n", summary.vertex_count));
    report.push_str(&format!("  Edges recorded: {}\n", summary.edge_count));
    report.push_str(&format!("  HTTP requests: {}\n", summary.pages_fetched));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if edges.is_empty() {
        report.push_str("No link relationships recorded.\n");
    } else {
        report.push_str("# Links observed:\n");
        for (from, to) in edges {
            report.push_str(&format!("  {} -> {}\n", from, to));
        }
    }

    report
}
