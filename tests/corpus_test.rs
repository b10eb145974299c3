use linkrank::{crawl, LinkRankError};
use std::fs;
use tempfile::TempDir;

fn page(links: &[&str]) -> String {
    let anchors: Vec<String> = links
        .iter()
        .map(|link| format!("<li><a href=\"{}\">{}</a></li>", link, link))
        .collect();
    format!("<!DOCTYPE html>\n<html><body><ul>{}</ul></body></html>\n", anchors.join("\n"))
}

#[test]
fn test_crawl_resolves_links() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("1.html"), page(&["2.html"])).unwrap();
    fs::write(dir.path().join("2.html"), page(&["1.html", "3.html"])).unwrap();
    fs::write(dir.path().join("3.html"), page(&[])).unwrap();

    let graph = crawl(dir.path()).unwrap();

    assert_eq!(graph.pages(), &["1.html", "2.html", "3.html"]);
    let two = graph.index_of("2.html").unwrap();
    assert_eq!(graph.out_degree(two), 2);
    assert!(graph.is_dangling(graph.index_of("3.html").unwrap()));
}

#[test]
fn test_crawl_drops_self_and_external_links() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.html"),
        page(&["a.html", "b.html", "https://example.com/", "missing.html"]),
    )
    .unwrap();
    fs::write(dir.path().join("b.html"), page(&["a.html"])).unwrap();

    let graph = crawl(dir.path()).unwrap();
    let a = graph.index_of("a.html").unwrap();
    let b = graph.index_of("b.html").unwrap();

    assert_eq!(graph.successors(a), &[b]);
    assert!(!graph.contains("missing.html"));
}

#[test]
fn test_crawl_ignores_other_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), page(&["notes.txt"])).unwrap();
    fs::write(dir.path().join("notes.txt"), "<a href=\"index.html\">back</a>").unwrap();
    fs::create_dir(dir.path().join("nested.html")).unwrap();

    let graph = crawl(dir.path()).unwrap();
    assert_eq!(graph.pages(), &["index.html"]);
    assert!(graph.is_dangling(0));
}

#[test]
fn test_crawl_rejects_file_path() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("1.html");
    fs::write(&file, page(&[])).unwrap();

    assert!(matches!(crawl(&file), Err(LinkRankError::Corpus { .. })));
}

#[test]
fn test_empty_corpus_loads_empty_graph() {
    let dir = TempDir::new().unwrap();
    let graph = crawl(dir.path()).unwrap();
    assert!(graph.is_empty());
}

#[cfg(unix)]
#[test]
fn test_crawl_follows_symlinked_pages() {
    let dir = TempDir::new().unwrap();
    let shared = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), page(&["alias.html"])).unwrap();
    fs::write(shared.path().join("target.html"), page(&["index.html"])).unwrap();
    std::os::unix::fs::symlink(shared.path().join("target.html"), dir.path().join("alias.html")).unwrap();

    let graph = crawl(dir.path()).unwrap();

    assert_eq!(graph.pages(), &["alias.html", "index.html"]);
    let alias = graph.index_of("alias.html").unwrap();
    let index = graph.index_of("index.html").unwrap();
    assert_eq!(graph.successors(alias), &[index]);
    assert_eq!(graph.successors(index), &[alias]);
}
