use pbxpatch::{BlockId, LineKind, PatchRule, PatchSpec, apply, classify_line, patch_file};

const NEEDLE: &str = "GENERATE_INFOPLIST_FILE = NO; INFOPLIST_FILE = GeoCameraApp/Info.plist;";
const REPLACEMENT: &str = "GENERATE_INFOPLIST_FILE = YES;";

const TARGET_ID: &str = "25A3AEBA2F4029A600740ED4";
const OTHER_ID: &str = "25A3AEB02F4029A600740ED4";

fn spec() -> PatchSpec {
    PatchSpec {
        target_blocks: vec![BlockId::parse(TARGET_ID).unwrap()],
        rule: PatchRule {
            needle: NEEDLE.to_string(),
            replacement: REPLACEMENT.to_string(),
        },
    }
}

fn sample(block_id: &str) -> String {
    format!(
        "\t\t{} /* Debug */ = {{\n\
         \t\t\tisa = XCBuildConfiguration;\n\
         \t\t\tbuildSettings = {{\n\
         \t\t\t\t{}\n\
         \t\t\t}};\n\
         \t\t}};\n",
        block_id, NEEDLE
    )
}

#[test]
fn rewrites_inside_target_block() {
    let source = sample(TARGET_ID);
    let patched = apply(&source, &spec());

    assert!(patched.changed());
    assert_eq!(patched.edits.len(), 1);
    assert!(patched.output.contains(REPLACEMENT));
    assert!(!patched.output.contains(NEEDLE));
}

#[test]
fn leaves_other_blocks_untouched() {
    let source = sample(OTHER_ID);
    let patched = apply(&source, &spec());

    assert!(!patched.changed());
    assert_eq!(patched.output, source);
}

#[test]
fn leaves_needle_outside_any_block_untouched() {
    let source = format!("{}\n", NEEDLE);
    let patched = apply(&source, &spec());

    assert_eq!(patched.output, source);
    assert!(patched.edits.is_empty());
}

#[test]
fn replaces_exactly_once_per_line() {
    let line = format!("\t\t\t\t{} {}\n", NEEDLE, NEEDLE);
    let source = format!("\t\t{} = {{\n{}\t\t}};\n", TARGET_ID, line);
    let patched = apply(&source, &spec());

    assert_eq!(patched.edits.len(), 1);
    // Second occurrence on the same line survives.
    assert!(patched.output.contains(NEEDLE));
    assert!(patched.output.contains(REPLACEMENT));
}

#[test]
fn closing_marker_ends_target_state() {
    // The needle appears after the target block has closed.
    let source = format!(
        "\t\t{} = {{\n\t\t}};\n\t\t\t\t{}\n",
        TARGET_ID, NEEDLE
    );
    let patched = apply(&source, &spec());

    assert!(!patched.changed());
    assert_eq!(patched.output, source);
}

#[test]
fn edit_records_block_and_line() {
    let source = sample(TARGET_ID);
    let patched = apply(&source, &spec());

    let edit = &patched.edits[0];
    assert_eq!(edit.block, BlockId::parse(TARGET_ID).unwrap());
    assert_eq!(edit.line_number, 4);
    assert_eq!(&source[edit.span.clone()], NEEDLE);
    assert!(edit.new_line.contains(REPLACEMENT));
}

#[test]
fn preserves_crlf_line_endings() {
    let source = sample(TARGET_ID).replace('\n', "\r\n");
    let patched = apply(&source, &spec());

    assert_eq!(patched.edits.len(), 1);
    assert!(patched.output.contains("\r\n"));
    assert!(!patched.output.contains(NEEDLE));
    // Untouched lines stay byte-identical, CRLF included.
    assert!(patched.output.starts_with("\t\t25A3AEBA2F4029A600740ED4 /* Debug */ = {\r\n"));
}

#[test]
fn patch_file_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.pbxproj");
    std::fs::write(&path, sample(TARGET_ID)).unwrap();

    let report = patch_file(&path, &spec()).unwrap();
    assert_eq!(report.edits.len(), 1);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(REPLACEMENT));
    assert!(!written.contains(NEEDLE));
}

#[test]
fn patch_file_missing_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.pbxproj");

    let err = patch_file(&path, &spec()).unwrap_err();
    assert!(err.to_string().starts_with("cannot read"));
}

#[test]
fn classify_line_patterns() {
    assert_eq!(
        classify_line("\t\t25A3AEBA2F4029A600740ED4 /* Debug */ = {"),
        LineKind::BlockOpen(BlockId::parse(TARGET_ID).unwrap())
    );
    assert_eq!(classify_line("\t\t};"), LineKind::BlockClose);
    assert_eq!(classify_line("};"), LineKind::BlockClose);

    // Not indented.
    assert_eq!(
        classify_line("25A3AEBA2F4029A600740ED4 = {"),
        LineKind::Other
    );
    // Lowercase hex is not an identifier.
    assert_eq!(
        classify_line("\t\t25a3aeba2f4029a600740ed4 = {"),
        LineKind::Other
    );
    // 25 hex characters is a longer token, not an identifier.
    assert_eq!(
        classify_line("\t\t25A3AEBA2F4029A600740ED4A = {"),
        LineKind::Other
    );
    // No opening brace.
    assert_eq!(
        classify_line("\t\t25A3AEBA2F4029A600740ED4 = value;"),
        LineKind::Other
    );
}

#[test]
fn block_id_validation() {
    assert!(BlockId::parse(TARGET_ID).is_ok());
    assert!(BlockId::parse("short").is_err());
    assert!(BlockId::parse("25a3aeba2f4029a600740ed4").is_err());
    assert!(BlockId::parse("25A3AEBA2F4029A600740EDZ").is_err());

    let id = BlockId::parse(TARGET_ID).unwrap();
    assert_eq!(id.to_string(), TARGET_ID);
}
