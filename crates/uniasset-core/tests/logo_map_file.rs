//! Integration test: CSV in, TypeScript module out.

use std::fs;
use uniasset_core::logo_map::{self, MapError, MapOptions};

const CSV: &str = "\
university_name,logo_url,city
Quaid-i-Azam University,https://example.com/logo.png,Islamabad
X University,\"data:image/png;base64,iVBORw0KGgo=\",Lahore
Aga Khan University,https://aku.edu/logo.svg,Karachi
Bahria University,https://en.wikipedia.org/wiki/Bahria_University#/media/File:Logo.png,Islamabad
Hazara University,Not have official logo,Mansehra
Some Institute,Dangerous link,Quetta
Blank College,,Multan
 Air University , https://au.edu.pk/logo.png ,Islamabad
";

fn options(dir: &std::path::Path) -> MapOptions {
    MapOptions {
        csv_path: dir.join("universities DATA.csv"),
        output_path: dir.join("university_logos_complete.ts"),
    }
}

#[test]
fn generates_sorted_filtered_module() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    fs::write(&opts.csv_path, CSV).unwrap();

    let report = logo_map::generate(&opts).unwrap();
    assert_eq!(report.rows_read, 8);
    assert_eq!(report.rejected, 5);
    assert_eq!(report.total, 3);
    assert!(report.collisions.is_empty());

    let written = fs::read_to_string(&opts.output_path).unwrap();
    assert_eq!(
        written,
        "export const UNIVERSITY_LOGO_MAP: Record<string, string> = {\n\
         \x20 // All 257 Pakistani Universities - Logo URLs from Official Sources\n\
         \x20 // Updated: January 2026\n\
         \x20 // Auto-generated from CSV data\n\
         \n\
         \x20 'AgaKhanUniversity': 'https://aku.edu/logo.svg',\n\
         \x20 'AirUniversity': 'https://au.edu.pk/logo.png',\n\
         \x20 'QuaidiAzamUniversity': 'https://example.com/logo.png',\n\
         };"
    );
    assert_eq!(report.first.len(), 3);
    assert_eq!(
        report.first[2],
        "  'QuaidiAzamUniversity': 'https://example.com/logo.png',"
    );
    assert_eq!(report.first, report.last);
}

#[test]
fn summary_samples_first_and_last_five() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let mut csv = String::from("university_name,logo_url\n");
    for i in 0..12 {
        csv.push_str(&format!("Uni {i:02},https://u/{i}.png\n"));
    }
    fs::write(&opts.csv_path, csv).unwrap();

    let report = logo_map::generate(&opts).unwrap();
    assert_eq!(report.total, 12);
    assert_eq!(report.first.len(), 5);
    assert_eq!(report.last.len(), 5);
    assert_eq!(report.first[0], "  'Uni00': 'https://u/0.png',");
    assert_eq!(report.last[0], "  'Uni07': 'https://u/7.png',");
    assert_eq!(report.last[4], "  'Uni11': 'https://u/11.png',");
}

#[test]
fn colliding_keys_are_all_emitted_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    fs::write(
        &opts.csv_path,
        "university_name,logo_url\nIqra-University,https://b.png\nIqra University,https://a.png\n",
    )
    .unwrap();

    let report = logo_map::generate(&opts).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.collisions.len(), 1);
    let written = fs::read_to_string(&opts.output_path).unwrap();
    let a = written.find("'https://a.png'").unwrap();
    let b = written.find("'https://b.png'").unwrap();
    assert!(a < b, "entries follow name order");
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    fs::write(&opts.output_path, "stale content ".repeat(100)).unwrap();
    fs::write(&opts.csv_path, "university_name,logo_url\nGIKI,https://giki.edu.pk/l.png\n").unwrap();

    logo_map::generate(&opts).unwrap();
    let first = fs::read(&opts.output_path).unwrap();
    logo_map::generate(&opts).unwrap();
    assert_eq!(fs::read(&opts.output_path).unwrap(), first);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
}

#[test]
fn missing_column_aborts_without_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    fs::write(&opts.csv_path, "name,logo_url\nLUMS,https://l.png\n").unwrap();
    fs::write(&opts.output_path, "previous").unwrap();

    let err = logo_map::generate(&opts).unwrap_err();
    assert!(matches!(
        err,
        MapError::MissingColumn {
            column: "university_name",
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&opts.output_path).unwrap(), "previous");
}

#[test]
fn missing_output_parent_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(dir.path());
    fs::write(&opts.csv_path, "university_name,logo_url\nGIKI,https://g.png\n").unwrap();
    opts.output_path = dir.path().join("no-such-dir").join("logos.ts");

    let err = logo_map::generate(&opts).unwrap_err();
    assert!(matches!(err, MapError::Write { .. }));
    assert!(!dir.path().join("no-such-dir").exists());
}

#[test]
fn missing_csv_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = logo_map::generate(&options(dir.path())).unwrap_err();
    assert!(matches!(err, MapError::Open { .. }));
    assert!(err.to_string().contains("universities DATA.csv"));
}
