use crate::BlockId;

/// Classification of a single pbxproj line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a configuration block: leading indentation, a 24-character
    /// identifier, then `= {` (optionally with a `/* comment */` between).
    BlockOpen(BlockId),
    /// A line consisting solely of the closing marker `};`.
    BlockClose,
    /// Anything else.
    Other,
}

/// Match one line against the block-boundary patterns.
///
/// The opening pattern mirrors the shape pbxproj uses for build
/// configurations: `\t\t25A3AEBA2F4029A600740ED4 /* Debug */ = {`.
pub fn classify_line(line: &str) -> LineKind {
    if line.trim() == "};" {
        return LineKind::BlockClose;
    }

    // Block openers are always indented.
    if !line.starts_with([' ', '\t']) {
        return LineKind::Other;
    }

    let body = line.trim_start();
    let bytes = body.as_bytes();
    if bytes.len() < 24 || !bytes[..24].iter().copied().all(is_upper_hex) {
        return LineKind::Other;
    }
    // A 25th hex character would mean a longer token, not an identifier.
    if bytes.get(24).is_some_and(|b| b.is_ascii_hexdigit()) {
        return LineKind::Other;
    }

    let tail = body[24..].trim_end();
    let Some(before_brace) = tail.strip_suffix('{') else {
        return LineKind::Other;
    };
    if !before_brace.trim_end().ends_with('=') {
        return LineKind::Other;
    }

    LineKind::BlockOpen(BlockId::from_valid(&bytes[..24]))
}

pub(crate) fn is_upper_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}
