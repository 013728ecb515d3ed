use crate::error::ImportError;
use crate::zone::*;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

fn zone_file_with(content: &str) -> (NamedTempFile, ZoneFile) {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, content).unwrap();

    let zone = ZoneFile::read(temp_file.path()).unwrap();
    (temp_file, zone)
}

#[test]
fn test_filename() {
    let testfiles = [
        ("example.com.db", "example.com"),
        ("foo.example.com.db", "foo.example.com"),
        ("example.museum.db", "example.museum"),
        ("/tmp/example.com.db", "example.com"),
    ];
    for (name, real_domain) in testfiles {
        let returned_domain = domain_from_filename(Path::new(name)).unwrap();
        assert_eq!(returned_domain.as_str(), real_domain);
    }
}

#[test]
fn test_filename_strips_only_the_suffix() {
    let domain = domain_from_filename(Path::new("zones/web.db")).unwrap();
    assert_eq!(domain.as_str(), "web");

    let domain = domain_from_filename(Path::new("dbdb.db")).unwrap();
    assert_eq!(domain.as_str(), "dbdb");
}

#[test]
fn test_filename_without_suffix() {
    assert!(domain_from_filename(Path::new("/tmp/example.com.zone")).is_none());
    assert!(domain_from_filename(Path::new("example.com")).is_none());
    assert!(domain_from_filename(Path::new(".db")).is_none());
}

#[test]
fn test_filename_wins_over_origin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.com.db");
    fs::write(&path, "$ORIGIN other.org.\n").unwrap();

    let zone = ZoneFile::read(path).unwrap();
    assert_eq!(zone.domain().unwrap().as_str(), "example.com");
}

#[test]
fn test_origin_domain() {
    let (_file, zone) = zone_file_with("$ORIGIN example.com.");
    assert_eq!(zone.domain().unwrap().as_str(), "example.com");
}

#[test]
fn test_origin_padded_domain() {
    let (_file, zone) = zone_file_with(
        ";My Zone file\n   \t$ORIGIN example.com. ; This is the origin entry.\n\n",
    );
    assert_eq!(zone.domain().unwrap().as_str(), "example.com");
}

#[test]
fn test_origin_subdomain() {
    let (_file, zone) = zone_file_with("$ORIGIN foo.example.com.");
    assert_eq!(zone.domain().unwrap().as_str(), "foo.example.com");
}

#[test]
fn test_origin_first_match_wins() {
    let content = "$TTL 3600\n$ORIGIN first.example.\n$ORIGIN second.example.\n";
    assert_eq!(domain_from_origin(content).unwrap().as_str(), "first.example");
}

#[test]
fn test_origin_unicode_labels() {
    let domain = domain_from_origin("$ORIGIN bücher.example.").unwrap();
    assert_eq!(domain.as_str(), "bücher.example");
}

#[test]
fn test_origin_is_case_sensitive() {
    assert!(domain_from_origin("$origin example.com.").is_none());
}

#[test]
fn test_origin_inside_comment_is_ignored() {
    assert!(domain_from_origin("; $ORIGIN example.com.\n").is_none());
}

#[test]
fn test_invalid_db_name_falls_back_to_origin() {
    let temp_file = tempfile::Builder::new().suffix(".db").tempfile().unwrap();
    fs::write(&temp_file, "$ORIGIN example.org.\n").unwrap();

    // Temp file names start with a dot, which is not a valid domain.
    let zone = ZoneFile::read(temp_file.path()).unwrap();
    assert_eq!(zone.domain().unwrap().as_str(), "example.org");
}

#[test]
fn test_fail() {
    let (file, zone) = zone_file_with("");
    match zone.domain() {
        Err(ImportError::DomainNotFound { path }) => assert_eq!(path, file.path()),
        other => panic!("expected DomainNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let result = ZoneFile::read("/nonexistent/zone/file");
    assert!(matches!(result, Err(ImportError::Io { .. })));
}

#[test]
fn test_filename_with_url_syntax_is_rejected() {
    for name in ["shop#eu.db", "shop?eu.db", "shop%2Feu.db", "shop:eu.db"] {
        assert!(
            domain_from_filename(Path::new(name)).is_none(),
            "{} should not be a domain",
            name
        );
    }
}

#[test]
fn test_url_syntax_file_without_origin_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop#eu.db");
    fs::write(&path, "@ IN A 192.0.2.1\n").unwrap();

    let zone = ZoneFile::read(path).unwrap();
    assert!(matches!(zone.domain(), Err(ImportError::DomainNotFound { .. })));
}

#[test]
fn test_origin_requires_absolute_name() {
    assert!(domain_from_origin("$ORIGIN foo.example.com ; relative\n").is_none());
    assert!(domain_from_origin("$ORIGIN example.com\n").is_none());
}

#[test]
fn test_origin_followed_by_comment() {
    let domain = domain_from_origin("$ORIGIN example.com.; apex\n").unwrap();
    assert_eq!(domain.as_str(), "example.com");

    let domain = domain_from_origin("$ORIGIN example.com.\r\n").unwrap();
    assert_eq!(domain.as_str(), "example.com");
}

#[test]
fn test_domain_parse() {
    assert!(Domain::parse("example.com").is_some());
    assert!(Domain::parse("my-shop.example_1.com").is_some());
    assert!(Domain::parse("shop#eu").is_none());
    assert!(Domain::parse("shop?eu").is_none());
    assert!(Domain::parse("a/b.com").is_none());
    assert!(Domain::parse("").is_none());
    assert!(Domain::parse("example.com.").is_none());
    assert!(Domain::parse(".example.com").is_none());
    assert!(Domain::parse("exa mple.com").is_none());
}
