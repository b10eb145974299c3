//! Corpus loading
//!
//! A corpus is a directory of HTML pages. Each `*.html` file becomes a page whose
//! out-links are the anchors it contains that point at other pages in the same
//! directory.

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::LinkGraph;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("anchor pattern is valid")
});

/// All `href` targets of `<a>` tags in a document
pub fn extract_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse a directory of HTML pages into a link graph.
///
/// Self-links and links to files outside the corpus are dropped.
pub fn crawl(directory: impl AsRef<Path>) -> LinkRankResult<LinkGraph> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(LinkRankError::Corpus {
            path: directory.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    // 1. Extract all links from HTML files
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        // `Path::is_file` follows symlinks, so linked pages are loaded too
        if !filename.ends_with(".html") || !entry.path().is_file() {
            continue;
        }

        let contents = std::fs::read_to_string(entry.path())?;
        let mut links = extract_links(&contents);
        links.remove(&filename);
        debug!("Parsed {} with {} candidate links", filename, links.len());
        pages.insert(filename, links);
    }

    // 2. Only keep links to other pages in the corpus
    let known: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|link| known.contains(link));
    }

    let graph = LinkGraph::try_from_links(pages)?;
    info!("Loaded corpus {:?}: {} pages", directory, graph.page_count());
    Ok(graph)
}
