use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikigraph")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikigraph")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Crawl the corpus breadth-first from a seed page and persist the explored \
                link graph as an edge list.",
                )
                .arg(
                    arg!(-s --"seed" <PAGE>)
                        .required(true)
                        .help("Seed page, corpus-relative (e.g. /wiki/Tennis) or a bare title"),
                )
                .arg(
                    arg!(-m --"max" <PAGES>)
                        .required(false)
                        .help("Maximum number of distinct pages to admit, the seed included")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("100"),
                )
                .arg(
                    arg!(-k --"topic" <KEYWORD>)
                        .required(false)
                        .action(clap::ArgAction::Append)
                        .help("Topic keyword every admitted page must contain (repeatable, all required)")
                        .conflicts_with("topics-file"),
                )
                .arg(
                    arg!(-T --"topics-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of topic keywords")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .conflicts_with("topic"),
                )
                .arg(
                    arg!(-b --"base-url" <URL>)
                        .required(false)
                        .help("Corpus origin that page identifiers are resolved against")
                        .default_value(wikigraph_crawler::DEFAULT_BASE_URL),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the edge list to this file (vertex count, then one edge per line)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Print the run summary as JSON instead of the text report")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
