//! Scanning photo trees and matching what was found.

use gigcal_core::{
    IgnoreFilter, MatchError, MatchOptions, Pattern, ScanErrorKind, ScanOptions, TreeScanner,
    match_candidates, scan_at_depth,
};
use gigcal_test_utils::{TestTree, TreeBuilder};
use std::path::PathBuf;

const PATTERN: &str = "%y/%m - %M %y/%d - %P (%V) %p";

fn photo_tree() -> TestTree {
    TreeBuilder::new()
        .with_root_name("Photos")
        .dirs([
            "2023/12 - December 2023/31 - Band (Club) Promo",
            "2024/01 - January 2024/24 - Performer1, Performer2 (Venue Name)",
            "2024/01 - January 2024/26 - Solo (Hall)",
            "2024/02 - March 2024/02 - Duo (Bar)",
            "2024/misc/unsorted",
            "2024/@eaDir/thumbs/cache",
        ])
        .file(
            "2024/01 - January 2024/24 - Performer1, Performer2 (Venue Name)/IMG_0001.jpg",
            b"jpg",
        )
        .file("2024/01 - January 2024/notes.txt", b"text")
        .build()
        .unwrap()
}

fn scan(tree: &TestTree, options: ScanOptions) -> Vec<PathBuf> {
    TreeScanner::new(tree.path(), options)
        .unwrap()
        .scan()
        .unwrap()
        .candidates
}

#[test]
fn test_candidates_in_lexical_order() {
    let tree = photo_tree();
    let depth = Pattern::compile(PATTERN).unwrap().separator_depth(false);
    let candidates = scan(&tree, ScanOptions::new().with_depth(depth));

    assert_eq!(
        candidates,
        vec![
            PathBuf::from("2023/12 - December 2023/31 - Band (Club) Promo"),
            PathBuf::from("2024/01 - January 2024/24 - Performer1, Performer2 (Venue Name)"),
            PathBuf::from("2024/01 - January 2024/26 - Solo (Hall)"),
            PathBuf::from("2024/02 - March 2024/02 - Duo (Bar)"),
            PathBuf::from("2024/@eaDir/thumbs"),
            PathBuf::from("2024/misc/unsorted"),
        ]
    );
}

#[test]
fn test_ignored_directories_exclude_descendants() {
    let tree = photo_tree();
    let options = ScanOptions::new()
        .with_depth(3)
        .with_ignore(IgnoreFilter::from_comma_separated("@eaDir,misc"));
    let report = TreeScanner::new(tree.path(), options)
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(report.candidates.len(), 4);
    assert_eq!(report.ignored, 2);
    for candidate in &report.candidates {
        let location = candidate.to_string_lossy();
        assert!(!location.contains("@eaDir"));
        assert!(!location.contains("misc"));
    }
}

#[test]
fn test_files_are_never_candidates() {
    let tree = TreeBuilder::new()
        .dir("2024")
        .file("2024/photo.jpg", b"jpg")
        .file("top.jpg", b"jpg")
        .build()
        .unwrap();

    assert_eq!(scan(&tree, ScanOptions::new().with_depth(1)), vec![PathBuf::from("2024")]);
    assert!(scan(&tree, ScanOptions::new().with_depth(2)).is_empty());
}

#[test]
fn test_include_parent_scans_one_level_less() {
    let tree = TreeBuilder::new()
        .with_root_name("2024")
        .dirs(["01 - Band (Club)", "02 - Solo (Hall)/raw"])
        .build()
        .unwrap();

    let pattern = Pattern::compile("%y/%d - %P (%V)").unwrap();
    let depth = pattern.separator_depth(true);
    assert_eq!(depth, 1);

    let candidates = scan(
        &tree,
        ScanOptions::new().with_depth(depth).with_include_parent(true),
    );
    assert_eq!(
        candidates,
        vec![
            PathBuf::from("2024/01 - Band (Club)"),
            PathBuf::from("2024/02 - Solo (Hall)"),
        ]
    );

    let batch = match_candidates(&pattern, &candidates, &MatchOptions::default());
    assert_eq!(batch.successful, 2);
    let years: Vec<_> = batch.records().map(|r| r.year).collect();
    assert_eq!(years, vec![2024, 2024]);
}

#[test]
fn test_scan_and_match_tally() {
    let tree = photo_tree();
    let pattern = Pattern::compile(PATTERN).unwrap();
    let candidates = scan_at_depth(
        tree.path(),
        pattern.separator_depth(false),
        &["@eaDir".to_string()],
        false,
    )
    .unwrap();

    let batch = match_candidates(&pattern, &candidates, &MatchOptions::default());

    assert_eq!(batch.total, 5);
    assert_eq!(batch.successful, 4);
    // "02 - March" contradicts itself.
    assert_eq!(batch.inconsistent, 1);
    assert_eq!(batch.failed, 1);

    let (failed, error) = batch.failures().next().unwrap();
    assert_eq!(failed.location, "2024/misc/unsorted");
    assert!(matches!(error, MatchError::SeparatorNotFound { .. }));

    let first = batch.records().next().unwrap();
    assert_eq!(first.year, 2023);
    assert_eq!(first.venue, "Club");
    assert_eq!(first.promoters, vec!["Promo"]);
}

#[test]
fn test_missing_root_is_not_found() {
    let tree = TreeBuilder::new().build().unwrap();
    let error = scan_at_depth(&tree.join("nope"), 1, &[], false).unwrap_err();
    assert_eq!(error.kind, ScanErrorKind::NotFound);
}
