use linkrank::{
    analyze, crawl, iterate_pagerank, sample_pagerank_with_rng, AnalysisConfig, LinkGraph,
    LinkRankError, RankError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn write_corpus(pages: &[(&str, Vec<&str>)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, links) in pages {
        let body: String = links
            .iter()
            .map(|link| format!("<a href=\"{}\">{}</a>\n", link, link))
            .collect();
        fs::write(dir.path().join(name), format!("<html><body>{}</body></html>", body)).unwrap();
    }
    dir
}

#[test]
fn test_corpus_ranking() {
    let dir = write_corpus(&[
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ]);
    let graph = crawl(dir.path()).unwrap();

    let config = AnalysisConfig {
        seed: Some(11),
        samples: 20_000,
        ..Default::default()
    };
    let report = analyze(&graph, &config).unwrap();

    assert!(report.converged);
    let rows = report.rows();
    assert_eq!(rows.len(), 4);

    // 2.html collects links from every other page
    let best = rows
        .iter()
        .max_by(|a, b| a.iterated.partial_cmp(&b.iterated).unwrap())
        .unwrap();
    assert_eq!(best.page, "2.html");

    for row in &rows {
        assert!(
            (row.sampled - row.iterated).abs() < 0.05,
            "{}: sampled {} vs iterated {}",
            row.page,
            row.sampled,
            row.iterated
        );
    }

    let sampled_total: f64 = report.sampled.values().sum();
    assert!((sampled_total - 1.0).abs() < 1e-9);
}

#[test]
fn test_dangling_target_ranks_highest() {
    let graph = LinkGraph::try_from_links(vec![
        ("A", vec!["B", "C"]),
        ("B", vec!["C"]),
        ("C", vec![]),
    ])
    .unwrap();

    let ranks = iterate_pagerank(&graph, 0.85).unwrap();
    assert!(ranks["C"] > ranks["A"]);
    assert!(ranks["C"] > ranks["B"]);
}

#[test]
fn test_single_page_corpus() {
    let dir = write_corpus(&[("only.html", vec![])]);
    let graph = crawl(dir.path()).unwrap();

    let report = analyze(&graph, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.sampled["only.html"], 1.0);
    assert_eq!(report.iterated["only.html"], 1.0);

    let mut rng = StdRng::seed_from_u64(5);
    let ranks = sample_pagerank_with_rng(&graph, 0.85, 1, &mut rng).unwrap();
    assert_eq!(ranks["only.html"], 1.0);
}

#[test]
fn test_empty_corpus_rejected() {
    let dir = write_corpus(&[]);
    let graph = crawl(dir.path()).unwrap();

    let result = analyze(&graph, &AnalysisConfig::default());
    assert!(matches!(
        result,
        Err(LinkRankError::Rank(RankError::InvalidInput(_)))
    ));
}

#[test]
fn test_config_file_drives_analysis() {
    let dir = write_corpus(&[("a.html", vec!["b.html"]), ("b.html", vec!["a.html"])]);
    let config_path = dir.path().join("linkrank.yaml");
    fs::write(&config_path, "damping_factor: 0.5\nsamples: 200\nseed: 99\n").unwrap();

    let config = AnalysisConfig::load(&config_path).unwrap();
    let graph = crawl(dir.path()).unwrap();
    let report = analyze(&graph, &config).unwrap();

    assert_eq!(report.sampling.sample_count, 200);
    assert_eq!(report.sampling.seed, Some(99));
    assert_eq!(report.sampling.damping_factor, 0.5);
    assert_eq!(report.iteration.damping_factor, 0.5);
    assert!((report.iterated["a.html"] - 0.5).abs() < 1e-9);
}
