// Bulk character extraction from a mutable string buffer: copy the buffer's
// full range of characters into a freshly allocated array, then emit each
// element while checking it against an indexed read-back from the buffer.

use colored::Colorize;
use std::io::Write;

// =============================================================================
// Extraction
// =============================================================================

/// Copy the buffer's characters into a freshly allocated array.
pub fn extract_chars(input: &str) -> Vec<char> {
    let buffer = String::from(input);
    buffer.chars().collect()
}

/// The character at logical position `index`, counted in characters rather
/// than bytes.
pub fn char_at(buffer: &str, index: usize) -> Option<char> {
    buffer.chars().nth(index)
}

// =============================================================================
// Emission
// =============================================================================

/// Write each array element to `out` while verifying it against the same
/// position read back from the buffer. Returns the number of positions that
/// were checked, which always equals the array length when bulk copy and
/// indexed reads agree.
pub fn emit_chars<W: Write>(
    buffer: &str,
    chars: &[char],
    out: &mut W,
) -> std::io::Result<usize> {
    let mut verified = 0;
    for (i, &character) in chars.iter().enumerate() {
        write!(out, "{character}")?;
        if char_at(buffer, i) == Some(character) {
            verified += 1;
        }
    }
    Ok(verified)
}

// =============================================================================
// Example usage
// =============================================================================

fn main() {
    println!("{}", "=== StringBuilder Character Extraction ===".bold());

    for input in ["hello there", "abc", "héllo wörld", ""] {
        let buffer = String::from(input);
        let chars = extract_chars(input);

        print!("  {:14} -> ", format!("{input:?}"));
        let mut stdout = std::io::stdout();
        let verified = emit_chars(&buffer, &chars, &mut stdout).expect("stdout write");
        println!();

        let status = if verified == chars.len() {
            format!("{verified}/{} positions agree", chars.len()).green()
        } else {
            format!("{verified}/{} positions agree", chars.len()).red()
        };
        println!("     {status}");
    }
}

// =============================================================================
// Tests
// =============================================================================
