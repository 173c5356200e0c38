// End-to-end guard rails for reading enum spec files from disk.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use glenums::{Diagnostic, DiagnosticKind, Severity, read_enums, read_enums_from_file};
use std::io::BufReader;
use std::path::Path;

use common::{SAMPLE_SPEC, fixture_path, spec_file};

#[test]
fn sample_spec_resolves_every_category() -> Result<()> {
    let outcome = read_enums_from_file(&fixture_path(SAMPLE_SPEC))?;
    let registry = &outcome.registry;

    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "AttribMask",
            "AttribMask_DEPRECATED",
            "Boolean",
            "ClearBufferMask",
            "GetPName",
            "VERSION_3_2",
        ]
    );

    assert_eq!(registry.value("Boolean", "TRUE"), Some("1"));
    assert_eq!(registry.value("GetPName", "ALIASED_TRUE"), Some("1"));
    assert_eq!(registry.value("GetPName", "UNKNOWN_ALIAS"), None);
    assert_eq!(
        registry.value("VERSION_3_2", "TIMEOUT_IGNORED"),
        Some("0xFFFFFFFFFFFFFFFF")
    );
    Ok(())
}

#[test]
fn repeated_header_starts_category_over() -> Result<()> {
    let outcome = read_enums_from_file(&fixture_path(SAMPLE_SPEC))?;
    let attrib = outcome.registry.category("AttribMask").expect("AttribMask");
    assert_eq!(attrib.len(), 2);
    assert_eq!(attrib.get("POINT_BIT"), None);
    assert_eq!(attrib.get("COLOR_BUFFER_BIT"), Some("0x00004000"));
    Ok(())
}

#[test]
fn aliases_resolve_forward_and_through_deprecated_sibling() -> Result<()> {
    let outcome = read_enums_from_file(&fixture_path(SAMPLE_SPEC))?;
    let clear = outcome
        .registry
        .category("ClearBufferMask")
        .expect("ClearBufferMask");
    assert_eq!(clear.get("COLOR_BUFFER_BIT"), Some("0x00004000"));
    assert_eq!(clear.get("ACCUM_BUFFER_BIT"), Some("0x00000200"));
    assert!(!clear.contains("MISSING_BIT"));
    Ok(())
}

#[test]
fn sample_spec_diagnostics_in_emission_order() -> Result<()> {
    let outcome = read_enums_from_file(&fixture_path(SAMPLE_SPEC))?;
    let rendered: Vec<String> = outcome.diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "ERROR: Unable to find NOT_DEFINED_ANYWHERE.".to_string(),
            "WARNING: Unable to parse line: 'this line is not part of the grammar' (Ignoring)"
                .to_string(),
            "WARNING: Failed to dereference ClearBufferMask: \"use AttribMask MISSING_BIT\""
                .to_string(),
        ]
    );
    let lines: Vec<usize> = outcome.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![24, 36, 15]);
    assert_eq!(outcome.diagnostics[0].severity(), Severity::Error);
    Ok(())
}

#[test]
fn file_and_stream_entry_points_agree() -> Result<()> {
    let path = fixture_path(SAMPLE_SPEC);
    let from_file = read_enums_from_file(&path)?;
    let from_stream = read_enums(BufReader::new(std::fs::File::open(&path)?))?;
    assert_eq!(from_file, from_stream);
    Ok(())
}

#[test]
fn comment_only_file_is_empty_and_clean() -> Result<()> {
    let file = spec_file("# nothing here\n\n# still nothing\npassthru: x\n")?;
    let outcome = read_enums_from_file(file.path())?;
    assert!(outcome.registry.is_empty());
    assert!(outcome.is_clean());
    Ok(())
}

#[test]
fn alias_with_unknown_source_leaves_entry_absent() -> Result<()> {
    let file = spec_file("Target enum:\nuse Nowhere NAME\n")?;
    let outcome = read_enums_from_file(file.path())?;
    assert_eq!(outcome.registry.value("Target", "NAME"), None);
    assert_eq!(
        outcome.diagnostics,
        vec![Diagnostic::new(
            2,
            DiagnosticKind::UnresolvedAlias {
                target: "Target".into(),
                source: "Nowhere".into(),
                name: "NAME".into(),
            }
        )]
    );
    Ok(())
}

#[test]
fn missing_file_is_fatal() {
    let err = read_enums_from_file(Path::new("/definitely/not/here.spec")).unwrap_err();
    let io = err
        .root_cause()
        .downcast_ref::<std::io::Error>()
        .expect("io error at root");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}
