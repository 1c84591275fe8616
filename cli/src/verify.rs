use std::collections::BTreeSet;
use std::path::Path;

use iconset::{MANIFEST_FILENAME, Manifest, ManifestImage};

pub enum CheckOutcome {
    Pass,
    Fail(String),
}

pub struct CheckResult {
    pub label: String,
    pub outcome: CheckOutcome,
}

/// Check every manifest entry in an `.appiconset` directory against the
/// files on disk: the file must exist and its pixel dimensions must equal
/// size label times scale label. PNG files the manifest does not reference
/// are reported as notes, not failures.
///
/// Returns exit code: 0 = all pass, 1 = any failure.
pub fn verify_iconset(dir: &Path, no_color: bool) -> i32 {
    let manifest_path = dir.join(MANIFEST_FILENAME);
    let json = match std::fs::read_to_string(&manifest_path) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", manifest_path.display(), e);
            return 1;
        }
    };
    let manifest = match Manifest::from_json(&json) {
        Ok(m) => m,
        Err(e) => {
            eprintln!(
                "error: malformed manifest '{}': {}",
                manifest_path.display(),
                e
            );
            return 1;
        }
    };

    let results: Vec<CheckResult> = manifest
        .images
        .iter()
        .map(|entry| CheckResult {
            label: format!("{} ({}, {})", entry.filename, entry.size, entry.scale),
            outcome: check_entry(dir, entry),
        })
        .collect();

    let mut failed = 0;
    for result in &results {
        match &result.outcome {
            CheckOutcome::Pass => {
                eprintln!("  {}  {}", pass_label(no_color), result.label);
            }
            CheckOutcome::Fail(reason) => {
                failed += 1;
                eprintln!("  {}  {}", fail_label(no_color), result.label);
                for line in reason.lines() {
                    eprintln!("      {}", line);
                }
            }
        }
    }

    // Surface renders the manifest doesn't list (the legacy 1x slots).
    let referenced: BTreeSet<&str> = manifest.images.iter().map(|i| i.filename.as_str()).collect();
    let mut unreferenced = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".png") && !referenced.contains(name.as_str()) {
                unreferenced.push(name);
            }
        }
    }
    unreferenced.sort();

    eprintln!();
    for name in &unreferenced {
        eprintln!("  note: {} is on disk but not referenced by the manifest", name);
    }
    if !unreferenced.is_empty() {
        eprintln!();
    }

    let passed = results.len() - failed;
    let verdict = if failed == 0 {
        if no_color { "ok" } else { "\x1b[32mok\x1b[0m" }
    } else if no_color {
        "FAILED"
    } else {
        "\x1b[31mFAILED\x1b[0m"
    };
    eprintln!(
        "verify result: {}. {} passed, {} failed",
        verdict, passed, failed
    );

    if failed == 0 { 0 } else { 1 }
}

fn check_entry(dir: &Path, entry: &ManifestImage) -> CheckOutcome {
    let Some(points) = parse_size_label(&entry.size) else {
        return CheckOutcome::Fail(format!("malformed size label \"{}\"", entry.size));
    };
    let Some(scale) = parse_scale_label(&entry.scale) else {
        return CheckOutcome::Fail(format!("malformed scale label \"{}\"", entry.scale));
    };
    let expected = points * scale;

    let path = dir.join(&entry.filename);
    if !path.exists() {
        return CheckOutcome::Fail("file not written".to_string());
    }

    match image::image_dimensions(&path) {
        Ok((width, height)) if width == expected && height == expected => CheckOutcome::Pass,
        Ok((width, height)) => CheckOutcome::Fail(format!(
            "expected {}x{} pixels, got {}x{}",
            expected, expected, width, height
        )),
        Err(e) => CheckOutcome::Fail(format!("cannot read image: {}", e)),
    }
}

/// Parse `"20x20"` into 20. Non-square labels are rejected.
fn parse_size_label(label: &str) -> Option<u32> {
    let (w, h) = label.split_once('x')?;
    let w: u32 = w.parse().ok()?;
    let h: u32 = h.parse().ok()?;
    if w != h {
        return None;
    }
    Some(w)
}

/// Parse `"2x"` into 2.
fn parse_scale_label(label: &str) -> Option<u32> {
    label.strip_suffix('x')?.parse().ok()
}

fn pass_label(no_color: bool) -> &'static str {
    if no_color { "PASS" } else { "\x1b[32mPASS\x1b[0m" }
}

fn fail_label(no_color: bool) -> &'static str {
    if no_color { "FAIL" } else { "\x1b[31mFAIL\x1b[0m" }
}
