mod common;

use common::{header, three_commit_numstat};
use gcontrib::identity::is_coauthored_by;
use gcontrib::{parse, parse_combined, AliasSet, FileChange, LogParser, StatusCounts};
use pretty_assertions::assert_eq;

#[test]
fn one_record_per_header_line() {
    let numstat = three_commit_numstat();
    let headers = numstat.lines().filter(|l| l.split('\t').count() >= 7).count();

    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), headers);
    assert_eq!(
        commits.iter().map(|c| c.hash.as_str()).collect::<Vec<_>>(),
        vec!["a1b2c3d4e5", "b2c3d4e5f6", "c3d4e5f6a7"]
    );
}

#[test]
fn header_fields_are_kept_raw() {
    let commits = parse(&three_commit_numstat(), "");
    let merge = &commits[2];

    assert_eq!(merge.author_name, "Bob");
    assert_eq!(merge.author_email, "bob@example.com");
    assert_eq!(merge.subject, "Merge branch 'feature'");
    assert_eq!(merge.parent_hashes, vec!["b2c3d4e5f6", "d4e5f6a7b8"]);
    assert_eq!(
        merge.authored_at.map(|t| t.to_rfc3339()),
        Some("2024-03-03T12:00:00+00:00".to_string())
    );
    assert!(commits[0].parent_hashes.is_empty());
}

#[test]
fn merge_flag_follows_parent_count() {
    for commit in parse(&three_commit_numstat(), "") {
        assert_eq!(commit.is_merge(), commit.parent_hashes.len() > 1);
    }
}

#[test]
fn multi_line_body_is_preserved_before_file_rows() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Add parser", "Splits rows."),
        String::new(),
        "Handles binary files too.".to_string(),
        "Co-authored-by: Carol <carol@example.com>".to_string(),
        String::new(),
        "3\t1\tsrc/parser.rs".to_string(),
        String::new(),
    ]
    .join("\n");

    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), 1);
    assert_eq!(
        commits[0].body,
        "Splits rows.\n\nHandles binary files too.\nCo-authored-by: Carol <carol@example.com>"
    );
    assert_eq!(
        commits[0].file_changes,
        vec![FileChange::new("src/parser.rs".to_string(), 3, 1)]
    );
}

#[test]
fn binary_rows_carry_zero_counts() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Add logo", ""),
        "-\t-\tassets/binary.png".to_string(),
        "12\t0\tREADME.md".to_string(),
    ]
    .join("\n");

    let files = &parse(&numstat, "")[0].file_changes;
    assert_eq!(files[0], FileChange::binary("assets/binary.png".to_string()));
    assert_eq!((files[0].additions, files[0].deletions), (0, 0));
    assert!(!files[1].is_binary);
}

#[test]
fn unparseable_counts_degrade_to_zero() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Odd row", ""),
        "5\t-\tsrc/half.rs".to_string(),
        "x\t3\tsrc/odd.rs".to_string(),
        "7\t2\tsrc/fine.rs".to_string(),
        "99999999999999999999\t1\tsrc/huge.rs".to_string(),
    ]
    .join("\n");

    let files = &parse(&numstat, "")[0].file_changes;
    assert_eq!(files.len(), 4);
    assert_eq!(files[0], FileChange::new("src/half.rs".to_string(), 0, 0));
    assert_eq!(files[1], FileChange::new("src/odd.rs".to_string(), 0, 0));
    assert_eq!(files[2], FileChange::new("src/fine.rs".to_string(), 7, 2));
    assert_eq!(files[3], FileChange::new("src/huge.rs".to_string(), 0, 0));
}

#[test]
fn tabbed_body_lines_stay_in_the_body() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Tabs", "body one"),
        "body\ttwo\tthree".to_string(),
        "A\tnote with\ttabs".to_string(),
        String::new(),
        "Co-authored-by: Zed <z@x.com>".to_string(),
        String::new(),
        "1\t0\ta.rs".to_string(),
    ]
    .join("\n");

    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), 1);
    assert_eq!(
        commits[0].body,
        "body one\nbody\ttwo\tthree\nA\tnote with\ttabs\n\nCo-authored-by: Zed <z@x.com>"
    );
    assert_eq!(commits[0].file_changes, vec![FileChange::new("a.rs".to_string(), 1, 0)]);
    assert_eq!(commits[0].status_counts, StatusCounts::default());

    let zed = AliasSet::new(["z@x.com"], std::iter::empty::<&str>());
    assert!(is_coauthored_by(&commits[0], &zed));
}

#[test]
fn status_rows_need_a_git_status_letter_and_path_shape() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Shapes", ""),
        "2\t0\tsrc/a.rs".to_string(),
    ]
    .join("\n");
    let name_status = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Shapes", ""),
        "Q\tnot-a-status".to_string(),
        "M\tsrc/a.rs\textra".to_string(),
        "R100\tsrc/only-one-path.rs".to_string(),
        "M\tsrc/a.rs".to_string(),
        "R090\tsrc/old.rs\tsrc/new.rs".to_string(),
    ]
    .join("\n");

    let counts = parse(&numstat, &name_status)[0].status_counts;
    assert_eq!(counts.get('M'), 1);
    assert_eq!(counts.get('R'), 1);
    assert_eq!(counts.get('A'), 0);
}

#[test]
fn rename_paths_resolve_to_destination() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Move things", ""),
        "0\t0\tsrc/{old => new}/mod.rs".to_string(),
        "1\t1\tdocs/a.txt => docs/b.txt".to_string(),
        "2\t0\tlib/{util => }/io.rs".to_string(),
    ]
    .join("\n");

    let paths: Vec<String> = parse(&numstat, "")[0]
        .file_changes
        .iter()
        .map(|f| f.path.clone())
        .collect();
    assert_eq!(paths, vec!["src/new/mod.rs", "docs/b.txt", "lib/io.rs"]);
}

#[test]
fn bad_date_keeps_commit_without_timestamp() {
    let numstat = header("abcdef1234", "Alice", "alice@example.com", "yesterday-ish", "", "Undated", "");
    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].authored_at, None);
}

#[test]
fn git_iso_date_format_is_accepted() {
    let numstat = header("abcdef1234", "Alice", "alice@example.com", "2024-03-01 10:00:00 +0200", "", "Iso", "");
    let commits = parse(&numstat, "");
    assert_eq!(
        commits[0].authored_at.map(|t| t.to_rfc3339()),
        Some("2024-03-01T10:00:00+02:00".to_string())
    );
}

#[test]
fn status_counts_join_by_hash() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Reshape", ""),
        "10\t0\tsrc/new.rs".to_string(),
        "3\t3\tsrc/kept.rs".to_string(),
        "0\t0\tsrc/moved.rs".to_string(),
        "0\t8\tsrc/gone.rs".to_string(),
        header("fedcba4321", "Alice", "alice@example.com", "2024-03-02T10:00:00Z", "abcdef1234", "Tweak", ""),
        "1\t1\tsrc/kept.rs".to_string(),
    ]
    .join("\n");
    let name_status = [
        header("fedcba4321", "Alice", "alice@example.com", "2024-03-02T10:00:00Z", "abcdef1234", "Tweak", ""),
        "M\tsrc/kept.rs".to_string(),
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Reshape", ""),
        "Add a few files".to_string(),
        "A\tsrc/new.rs".to_string(),
        "M\tsrc/kept.rs".to_string(),
        "R087\tsrc/old.rs\tsrc/moved.rs".to_string(),
        "R\tsrc/older.rs".to_string(),
        "D\tsrc/gone.rs".to_string(),
        "C100\tsrc/new.rs\tsrc/copy.rs".to_string(),
    ]
    .join("\n");

    let commits = parse(&numstat, &name_status);
    assert_eq!(
        commits[0].status_counts,
        StatusCounts {
            added: 1,
            modified: 1,
            deleted: 1,
            renamed: 2,
        }
    );
    assert_eq!(commits[1].status_counts.get('M'), 1);
    assert_eq!(commits[1].status_counts.get('A'), 0);
}

#[test]
fn missing_status_entry_yields_empty_counts() {
    let numstat = header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Lonely", "");
    let commits = parse(&numstat, "garbage line without header\nM\tsrc/x.rs");
    assert_eq!(commits[0].status_counts, StatusCounts::default());
}

#[test]
fn combined_export_carries_both_row_kinds() {
    let log = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Both", ""),
        "10\t0\tsrc/new.rs".to_string(),
        "2\t1\tsrc/kept.rs".to_string(),
        "A\tsrc/new.rs".to_string(),
        "M\tsrc/kept.rs".to_string(),
        "R100\tsrc/a.rs\tsrc/b.rs".to_string(),
    ]
    .join("\n");

    let commits = parse_combined(&log);
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].file_changes.len(), 2);
    assert_eq!(commits[0].status_counts.get('A'), 1);
    assert_eq!(commits[0].status_counts.get('M'), 1);
    assert_eq!(commits[0].status_counts.get('R'), 1);
}

#[test]
fn lines_that_fail_the_hash_check_are_not_headers() {
    let numstat = [
        header("zzzzzzz99", "Mallory", "m@example.com", "2024-03-01T10:00:00Z", "", "Fake", ""),
        header("abc12", "Mallory", "m@example.com", "2024-03-01T10:00:00Z", "", "Short", ""),
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Real", ""),
    ]
    .join("\n");

    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].hash, "abcdef1234");
}

#[test]
fn repeated_hash_merges_into_first_record() {
    let numstat = [
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Split", ""),
        "1\t0\ta.rs".to_string(),
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Split", ""),
        "2\t0\tb.rs".to_string(),
    ]
    .join("\n");

    let commits = parse(&numstat, "");
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].file_changes.len(), 2);
}

#[test]
fn empty_and_blank_input_parse_to_nothing() {
    assert!(parse("", "").is_empty());
    assert!(parse("\n\n   \n", "\n").is_empty());
    assert!(LogParser::new(true).parse("no header here\n1\t2\tfile.rs", "").is_empty());
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let numstat = format!(
        "{}\r\n4\t2\tsrc/win.rs\r\n",
        header("abcdef1234", "Alice", "alice@example.com", "2024-03-01T10:00:00Z", "", "Windows", "")
    );
    let commits = parse(&numstat, "");
    assert_eq!(commits[0].file_changes, vec![FileChange::new("src/win.rs".to_string(), 4, 2)]);
}
