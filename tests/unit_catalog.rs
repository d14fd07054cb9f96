// Unit tests for the on-disk Concepticon catalog and the conceptlist file.
//
// Fixtures are small Concepticon-shaped TSV trees written into temporary
// directories.

use std::fs;
use std::path::Path;

use swadesh_overlap::catalog::{ConceptCatalog, ConceptEntry, ConcepticonData};
use swadesh_overlap::config::load_conceptlist_names;
use tempfile::tempdir;

const CONCEPTSETS: &str = "\
ID\tGLOSS\tSEMANTICFIELD\tDEFINITION\tONTOLOGICAL_CATEGORY
1\tALL\tQuantity\tThe totality.\tPerson/Thing
2\tBIG\tSpatial relations\tOf great size.\tProperty
3\tWATER\tThe physical world\tThe clear liquid.\tPerson/Thing
4\tSOMETHING\tMiscellaneous\tUnknown.\t
";

const REFERENCE_LIST: &str = "\
ID\tNUMBER\tENGLISH\tCONCEPTICON_ID\tCONCEPTICON_GLOSS
Swadesh-1952-200-1\t1\tall\t1\tALL
Swadesh-1952-200-2\t2\tbig\t2\tBIG
Swadesh-1952-200-3\t3\twater\t3\tWATER
";

fn write_checkout(root: &Path) {
    let data = root.join("concepticondata");
    fs::create_dir_all(data.join("conceptlists")).unwrap();
    fs::write(data.join("concepticon.tsv"), CONCEPTSETS).unwrap();
    fs::write(
        data.join("conceptlists").join("Swadesh-1952-200.tsv"),
        REFERENCE_LIST,
    )
    .unwrap();
    // Unmapped row, a quote inside a field, and an extra trailing column
    fs::write(
        data.join("conceptlists").join("Demo-2024-3.tsv"),
        "ID\tNUMBER\tENGLISH\tCONCEPTICON_ID\tCONCEPTICON_GLOSS\tNOTE\n\
         Demo-2024-3-1\t1\t\"the\" water\t3\tWATER\tfine\n\
         Demo-2024-3-2\t2\tgizmo\t\t\t\n\
         Demo-2024-3-3\t3\teverything\t1\tALL\t\n",
    )
    .unwrap();
}

// ============================================================
// ConcepticonData
// ============================================================

#[test]
fn open_loads_category_table() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();

    assert_eq!(catalog.concept_set_count(), 4);
    assert_eq!(catalog.category_of("1").unwrap(), "Person/Thing");
    assert_eq!(catalog.category_of("2").unwrap(), "Property");
    assert_eq!(catalog.category_of("4").unwrap(), "");
}

#[test]
fn unknown_concept_set_is_an_error() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();
    let err = catalog.category_of("9999").unwrap_err();
    assert!(err.to_string().contains("9999"), "got: {err}");
}

#[test]
fn conceptlist_reads_entries_in_file_order() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();

    let entries = catalog.conceptlist("Swadesh-1952-200").unwrap();
    assert_eq!(
        entries,
        vec![
            ConceptEntry::mapped("Swadesh-1952-200-1", "1", "ALL"),
            ConceptEntry::mapped("Swadesh-1952-200-2", "2", "BIG"),
            ConceptEntry::mapped("Swadesh-1952-200-3", "3", "WATER"),
        ]
    );
}

#[test]
fn conceptlist_handles_unmapped_rows_quotes_and_extra_columns() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();

    let entries = catalog.conceptlist("Demo-2024-3").unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].gloss.as_deref(), Some("WATER"));
    assert_eq!(entries[1], ConceptEntry::unmapped("Demo-2024-3-2"));
    assert_eq!(entries[2].concept_set_id.as_deref(), Some("1"));
}

#[test]
fn unknown_conceptlist_is_an_error() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();

    let err = catalog.conceptlist("Missing-1999-1").unwrap_err();
    assert!(err.to_string().contains("Missing-1999-1"), "got: {err}");
}

#[test]
fn path_like_conceptlist_names_are_rejected() {
    let dir = tempdir().unwrap();
    write_checkout(dir.path());
    let catalog = ConcepticonData::open(dir.path()).unwrap();

    assert!(catalog.conceptlist("../concepticon").is_err());
    assert!(catalog.conceptlist("").is_err());
}

#[test]
fn open_fails_without_category_table() {
    let dir = tempdir().unwrap();
    let err = ConcepticonData::open(dir.path()).err().unwrap();
    assert!(format!("{err:#}").contains("concepticon.tsv"), "got: {err:#}");
}

// ============================================================
// load_conceptlist_names
// ============================================================

#[test]
fn conceptlist_file_is_read_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("conceptlists.tsv");
    fs::write(&path, "Demo-2024-3\nSwadesh-1955-100\n").unwrap();

    let names = load_conceptlist_names(&path).unwrap();
    assert_eq!(names, vec!["Demo-2024-3", "Swadesh-1955-100"]);
}

#[test]
fn missing_conceptlist_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.tsv");
    let err = load_conceptlist_names(&path).unwrap_err();
    assert!(err.to_string().contains("nope.tsv"), "got: {err}");
}

#[test]
fn conceptlist_file_with_blank_line_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("conceptlists.tsv");
    fs::write(&path, "A-1\n\nB-2\n").unwrap();
    assert!(load_conceptlist_names(&path).is_err());
}
