//! Testing utilities for the ISA graph workspace
//!
//! Shared fixtures (header rows and tables modelled on real ISA-Tab files) and
//! a tracing subscriber for test output.

#![allow(missing_docs)]

use isa_model::AssayTable;
use std::sync::Once;

/// Install a `tracing` subscriber once per test binary
///
/// Honors `RUST_LOG`; defaults to `warn` so passing tests stay quiet.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Build a table from string slices; the first row is the header
pub fn table(rows: &[&[&str]]) -> AssayTable {
    AssayTable::from_rows(rows.iter().map(|row| row.iter().copied())).unwrap()
}

/// Study-sample table: source → growth protocol → sample, with factors
pub fn study_sample_headers() -> Vec<&'static str> {
    vec![
        "Source Name",
        "Characteristics[organism]",
        "Term Source REF",
        "Term Accession Number",
        "Characteristics[strain]",
        "Protocol REF",
        "Parameter Value[medium]",
        "Sample Name",
        "Characteristics[organism part]",
        "Factor Value[limiting nutrient]",
        "Term Source REF",
        "Term Accession Number",
        "Factor Value[rate]",
        "Unit",
        "Term Source REF",
        "Term Accession Number",
        "Comment[sample notes]",
    ]
}

pub fn study_sample_table() -> AssayTable {
    let header = study_sample_headers();
    table(&[
        &header,
        &[
            "culture1", "S. cerevisiae", "NCBITAXON", "4932", "FY1679", "growth", "YPD", "C-0.07-aliquot1",
            "cell", "carbon", "CHEBI", "33415", "0.07", "l/hr", "UO", "0000032", "",
        ],
        &[
            "culture1", "S. cerevisiae", "NCBITAXON", "4932", "FY1679", "growth", "YPD", "C-0.07-aliquot2",
            "cell", "carbon", "CHEBI", "33415", "0.07", "l/hr", "UO", "0000032", "",
        ],
        &[
            "culture2", "S. cerevisiae", "NCBITAXON", "4932", "FY1679", "growth", "YPD", "C-0.1-aliquot1",
            "cell", "carbon", "CHEBI", "33415", "0.1", "l/hr", "UO", "0000032", "rerun",
        ],
        &[
            "culture3", "S. cerevisiae", "NCBITAXON", "4932", "", "growth", "", "N-0.07-aliquot1",
            "cell", "nitrogen", "CHEBI", "33284", "0.07", "l/hr", "UO", "0000032", "",
        ],
    ])
}

/// Transcriptomics assay: extraction, labeling, hybridization, scan, data files
pub fn microarray_assay_headers() -> Vec<&'static str> {
    vec![
        "Sample Name",
        "Protocol REF",
        "Extract Name",
        "Protocol REF",
        "Labeled Extract Name",
        "Label",
        "Hybridization Assay Name",
        "Performer",
        "Date",
        "Parameter Value[scan time]",
        "Scan Name",
        "Comment[ArrayExpress FTP file]",
        "Protocol REF",
        "Array Data File",
        "Protocol REF",
        "Derived Array Data File",
    ]
}

pub fn microarray_assay_table() -> AssayTable {
    let header = microarray_assay_headers();
    table(&[
        &header,
        &[
            "s1", "extraction", "e1", "labeling", "le1", "biotin", "hyb1", "alice", "2012-11-07",
            "30", "scan1", "ftp://a", "scanning", "s1.cel", "normalization", "norm.txt",
        ],
        &[
            "s2", "extraction", "e2", "labeling", "le2", "biotin", "hyb2", "alice", "2012-11-07",
            "30", "scan2", "ftp://b", "scanning", "s2.cel", "normalization", "norm.txt",
        ],
        &[
            "s3", "extraction", "e3", "labeling", "le3", "Cy3", "hyb3", "bob", "2012-11-08",
            "35", "scan3", "", "scanning", "s3.cel", "normalization",
        ],
    ])
}

/// Single factor with unit, as used in grouping examples
pub fn time_course_table() -> AssayTable {
    table(&[
        &["Sample Name", "Factor Value[Time]", "Unit"],
        &["S1", "10", "hr"],
        &["S2", "10", "hr"],
        &["S3", "20", "hr"],
    ])
}
