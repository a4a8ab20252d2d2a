// Width conversions from a 64-bit signed integer: narrow to 32-bit and 16-bit
// integers, to an unsigned 16-bit character code, and widen to both float
// formats, then check that each narrowed value re-widens to the matching
// low bits of the original.

use colored::Colorize;

// =============================================================================
// Narrowing
// =============================================================================

/// The five standard-conversion representations of one `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Narrowed {
    pub int: i32,
    /// Unsigned 16-bit character code, the counterpart of a UTF-16 code unit.
    pub char_code: u16,
    pub single: f32,
    pub double: f64,
    pub short: i16,
}

impl Narrowed {
    pub fn from_long(l: i64) -> Self {
        Narrowed {
            int: l as i32,
            char_code: l as u16,
            single: l as f32,
            double: l as f64,
            short: l as i16,
        }
    }
}

// =============================================================================
// Width laws
// =============================================================================

/// Re-widening the 32-bit value reproduces the low 32 bits of `l` with sign.
pub fn int_law_holds(l: i64) -> bool {
    let low = (l & 0xffff_ffff) as u32 as i32 as i64;
    (Narrowed::from_long(l).int as i64) == low
}

/// Re-widening the character code reproduces the low 16 bits of `l` as an
/// unsigned quantity.
pub fn char_law_holds(l: i64) -> bool {
    (Narrowed::from_long(l).char_code as i64) == (l & 0xffff)
}

/// Re-widening the 16-bit value reproduces the low 16 bits of `l` with sign.
pub fn short_law_holds(l: i64) -> bool {
    let low = (l & 0xffff) as u16 as i16 as i64;
    (Narrowed::from_long(l).short as i64) == low
}

pub fn verify_round_trips(l: i64) -> bool {
    int_law_holds(l) && char_law_holds(l) && short_law_holds(l)
}

// =============================================================================
// Example usage
// =============================================================================

fn show(l: i64) {
    let n = Narrowed::from_long(l);
    println!("  l = {}", l.to_string().bold());
    println!("    int:       {}", n.int);
    println!("    char code: {}", n.char_code);
    println!("    short:     {}", n.short);
    println!("    single:    {}", n.single);
    println!("    double:    {}", n.double);

    let verdict = if verify_round_trips(l) {
        "width laws hold".green()
    } else {
        "width laws violated".red()
    };
    println!("    {verdict}");
}

fn main() {
    println!("{}", "=== Integer Width Conversion ===".bold());

    show(300); // fits in 16 bits: char code and short both 300
    show(70_000); // wraps: 70000 mod 65536 = 4464
    show(-1);
    show(i64::MAX);
}

// =============================================================================
// Tests
// =============================================================================
