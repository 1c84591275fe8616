pub mod error;
pub mod scan;

use std::fmt;
use std::ops::Range;
use std::path::Path;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

pub use crate::error::PatchError;
pub use crate::scan::{LineKind, classify_line};

/// A 24-character uppercase hexadecimal identifier naming a pbxproj
/// configuration block.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BlockId([u8; 24]);

impl BlockId {
    /// Validate and parse an identifier from user input (CLI flags, config).
    pub fn parse(s: &str) -> Result<Self, PatchError> {
        let bytes = s.as_bytes();
        if bytes.len() != 24 || !bytes.iter().copied().all(scan::is_upper_hex) {
            return Err(PatchError::InvalidBlockId(s.to_string()));
        }
        let mut id = [0u8; 24];
        id.copy_from_slice(bytes);
        Ok(BlockId(id))
    }

    /// Build from bytes the scanner has already validated.
    pub(crate) fn from_valid(bytes: &[u8]) -> Self {
        let mut id = [0u8; 24];
        id.copy_from_slice(bytes);
        BlockId(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self)
    }
}

/// The substring rewrite applied inside target blocks.
#[derive(Debug, Clone)]
pub struct PatchRule {
    /// Exact substring a line must contain to be rewritten.
    pub needle: String,
    /// Text the needle is replaced with.
    pub replacement: String,
}

/// Injected configuration for one patch run: which blocks to touch and what
/// to rewrite inside them.
#[derive(Debug, Clone)]
pub struct PatchSpec {
    pub target_blocks: Vec<BlockId>,
    pub rule: PatchRule,
}

impl PatchSpec {
    fn is_target(&self, id: BlockId) -> bool {
        self.target_blocks.contains(&id)
    }
}

/// One rewrite performed by [`apply`].
#[derive(Debug, Clone)]
pub struct Edit {
    /// 1-based line number in the original source.
    pub line_number: usize,
    /// The block the rewritten line belongs to.
    pub block: BlockId,
    /// Byte span of the replaced substring in the original source.
    pub span: Range<usize>,
    pub old_line: String,
    pub new_line: String,
}

impl Edit {
    /// Convert to a diagnostic for dry-run (`--check`) display.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        Diagnostic::new(Severity::Note)
            .with_message(format!("would rewrite build setting in block {}", self.block))
            .with_labels(vec![Label::primary(file_id, self.span.clone())])
            .with_notes(vec![format!("replacement: {}", self.new_line.trim())])
    }
}

/// Result of a pure [`apply`] pass.
#[derive(Debug)]
pub struct Patched {
    /// The full rewritten source, untouched lines byte-identical.
    pub output: String,
    pub edits: Vec<Edit>,
}

impl Patched {
    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

/// Single pass over `source`, tracking block identity line by line and
/// rewriting matching lines inside target blocks.
///
/// Lines outside target blocks pass through unchanged, line endings
/// included. Inside a target block, the first occurrence of the needle on a
/// line is replaced exactly once. The closing marker `};` always ends the
/// current block; nesting is not supported.
pub fn apply(source: &str, spec: &PatchSpec) -> Patched {
    let mut output = String::with_capacity(source.len());
    let mut edits = Vec::new();

    let mut inside_target = false;
    let mut current_block: Option<BlockId> = None;
    let mut offset = 0usize;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        match classify_line(line) {
            LineKind::BlockOpen(id) => {
                current_block = Some(id);
                if spec.is_target(id) {
                    inside_target = true;
                }
            }
            LineKind::BlockClose => {
                inside_target = false;
                current_block = None;
            }
            LineKind::Other => {}
        }

        let mut rewritten = false;
        if inside_target {
            if let (Some(block), Some(pos)) = (current_block, line.find(&spec.rule.needle)) {
                let new_line = line.replacen(&spec.rule.needle, &spec.rule.replacement, 1);
                edits.push(Edit {
                    line_number: index + 1,
                    block,
                    span: offset + pos..offset + pos + spec.rule.needle.len(),
                    old_line: trim_newline(line).to_string(),
                    new_line: trim_newline(&new_line).to_string(),
                });
                output.push_str(&new_line);
                rewritten = true;
            }
        }
        if !rewritten {
            output.push_str(line);
        }

        offset += line.len();
    }

    Patched { output, edits }
}

/// Report for an in-place [`patch_file`] run.
#[derive(Debug)]
pub struct PatchReport {
    pub edits: Vec<Edit>,
}

/// Read `path`, apply `spec`, and write the result back in place.
///
/// No backup and no atomic rename: a crash mid-write can leave a partially
/// written file, matching the tool's best-effort contract.
pub fn patch_file(path: &Path, spec: &PatchSpec) -> Result<PatchReport, PatchError> {
    let source = std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = apply(&source, spec);

    std::fs::write(path, &patched.output).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchReport {
        edits: patched.edits,
    })
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
