use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wikigraph::handlers::*;

#[test]
fn test_parse_seed_relative_path() {
    let result = parse_seed("/wiki/Tennis");
    assert_eq!(result, Ok("/wiki/Tennis".to_string()));
}

#[test]
fn test_parse_seed_bare_title() {
    let result = parse_seed("Tennis");
    assert_eq!(result, Ok("/wiki/Tennis".to_string()));
}

#[test]
fn test_parse_seed_title_with_spaces() {
    let result = parse_seed("Tennis court");
    assert_eq!(result, Ok("/wiki/Tennis_court".to_string()));
}

#[test]
fn test_parse_seed_trims_whitespace() {
    let result = parse_seed("  /wiki/Tennis  ");
    assert_eq!(result, Ok("/wiki/Tennis".to_string()));
}

#[test]
fn test_parse_seed_empty() {
    let result = parse_seed("   ");
    assert!(result.is_err());
}

#[test]
fn test_load_topics_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "Einstein")?;
    writeln!(temp_file, "  relativity  ")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "physics")?;

    let path = PathBuf::from(temp_file.path());
    let topics = load_topics_from_file(&path)?;

    assert_eq!(topics, vec!["Einstein", "relativity", "physics"]);

    Ok(())
}

#[test]
fn test_load_topics_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_topics_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No keywords"));
}

#[test]
fn test_load_topics_from_file_missing() {
    let path = PathBuf::from("/nonexistent/topics.txt");
    let result = load_topics_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read"));
}

#[test]
fn test_load_topics_from_source_flags() {
    let topics = vec!["tennis".to_string(), "grass".to_string()];
    let result = load_topics_from_source(topics.clone(), None).unwrap();

    assert_eq!(result, topics);
}

#[test]
fn test_load_topics_from_source_empty_flags() {
    let result = load_topics_from_source(Vec::new(), None).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_load_topics_from_source_file_takes_precedence() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "from-file")?;

    let path = PathBuf::from(temp_file.path());
    let result = load_topics_from_source(vec!["from-flag".to_string()], Some(&path))?;

    assert_eq!(result, vec!["from-file"]);

    Ok(())
}
