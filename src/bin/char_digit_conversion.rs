// Digit/character conversion driven by a selector: choice 1 turns an integer
// digit into its character in the given radix, choice 2 turns a character back
// into its digit value. Choice 0 does nothing.

use colored::Colorize;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("invalid choice {0}: expected 0, 1 or 2")]
    InvalidChoice(u32),

    #[error("input exhausted: expected another token")]
    InputExhausted,

    #[error("malformed integer token '{0}'")]
    MalformedInt(String),
}

// =============================================================================
// Token scanner
// =============================================================================

/// Whitespace tokenizer over a borrowed input string.
pub struct TokenScanner<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> TokenScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenScanner {
            tokens: input.split_whitespace(),
        }
    }

    /// Read the next token and parse it as a decimal integer.
    pub fn next_int(&mut self) -> Result<u32, ConversionError> {
        let token = self.tokens.next().ok_or(ConversionError::InputExhausted)?;
        token
            .parse()
            .map_err(|_| ConversionError::MalformedInt(token.to_string()))
    }

    /// Read the next token and return its first character.
    pub fn next_char(&mut self) -> Result<char, ConversionError> {
        let token = self.tokens.next().ok_or(ConversionError::InputExhausted)?;
        // Tokens from split_whitespace are never empty.
        Ok(token.chars().next().unwrap())
    }
}

// =============================================================================
// Conversion rules
// =============================================================================

/// The character representing `digit` in the given radix, or `None` when the
/// digit is out of range for the radix (or the radix itself is out of the
/// 2..=36 range the numeral rule supports).
pub fn digit_to_char(digit: u32, radix: u32) -> Option<char> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    char::from_digit(digit, radix)
}

/// The digit value of `c` in the given radix, with `-1` as the sentinel for
/// characters that are not valid digits in that radix.
pub fn char_to_digit(c: char, radix: u32) -> i32 {
    if !(2..=36).contains(&radix) {
        return -1;
    }
    match c.to_digit(radix) {
        Some(d) => d as i32,
        None => -1,
    }
}

// =============================================================================
// Selector dispatch
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Choice {
    NoOp,
    DigitToChar,
    CharToDigit,
}

impl TryFrom<u32> for Choice {
    type Error = ConversionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Choice::NoOp),
            1 => Ok(Choice::DigitToChar),
            2 => Ok(Choice::CharToDigit),
            other => Err(ConversionError::InvalidChoice(other)),
        }
    }
}

/// What a single run produced.
#[derive(Debug, PartialEq)]
pub enum ConversionOutcome {
    Skipped,
    Character(Option<char>),
    Digit(i32),
}

/// Run one conversion over `input`: choice 1 reads an integer digit and
/// converts it to a character, choice 2 reads a character and converts it to
/// a digit, choice 0 performs no action.
pub fn run(input: &str, radix: u32, choice: u32) -> Result<ConversionOutcome, ConversionError> {
    let choice = Choice::try_from(choice)?;
    let mut scanner = TokenScanner::new(input);

    match choice {
        Choice::NoOp => Ok(ConversionOutcome::Skipped),
        Choice::DigitToChar => {
            let digit = scanner.next_int()?;
            Ok(ConversionOutcome::Character(digit_to_char(digit, radix)))
        }
        Choice::CharToDigit => {
            let character = scanner.next_char()?;
            Ok(ConversionOutcome::Digit(char_to_digit(character, radix)))
        }
    }
}

// =============================================================================
// Example usage
// =============================================================================

fn report(input: &str, radix: u32, choice: u32) {
    match run(input, radix, choice) {
        Ok(ConversionOutcome::Skipped) => {
            println!("  choice {choice}: {}", "no action".dimmed());
        }
        Ok(ConversionOutcome::Character(Some(c))) => {
            println!("  Convert digit to character: {}", c.to_string().green());
        }
        Ok(ConversionOutcome::Character(None)) => {
            println!("  Convert digit to character: {}", "invalid digit".red());
        }
        Ok(ConversionOutcome::Digit(d)) => {
            let rendered = if d < 0 {
                d.to_string().red()
            } else {
                d.to_string().green()
            };
            println!("  Convert character to digit: {rendered}");
        }
        Err(e) => println!("  {} {e}", "error:".red()),
    }
}

fn main() {
    println!("{}", "=== Digit/Character Conversion ===".bold());

    println!("Enter a digit:");
    report("12", 16, 1); // 'c' in base 16
    report("12", 10, 1); // out of range for base 10

    println!("Enter a character:");
    report("f", 16, 2); // 15 in base 16
    report("f", 10, 2); // not a digit in base 10

    report("", 10, 0);
    report("anything", 10, 7);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn digit_round_trips_in_every_radix() {
        for radix in 2..=36 {
            for digit in 0..radix {
                let c = digit_to_char(digit, radix).unwrap();
                assert_eq!(char_to_digit(c, radix), digit as i32);
            }
        }
    }

    #[test]
    fn out_of_range_digit_yields_none() {
        assert_eq!(digit_to_char(10, 10), None);
        assert_eq!(digit_to_char(16, 16), None);
        assert_eq!(digit_to_char(36, 36), None);
    }

    #[test]
    fn invalid_radix_yields_sentinels() {
        assert_eq!(digit_to_char(1, 1), None);
        assert_eq!(digit_to_char(1, 37), None);
        assert_eq!(char_to_digit('1', 1), -1);
        assert_eq!(char_to_digit('1', 37), -1);
    }

    #[test]
    fn non_digit_character_yields_negative_sentinel() {
        assert_eq!(char_to_digit('t', 16), -1);
        assert_eq!(char_to_digit('a', 10), -1);
        assert_eq!(char_to_digit('!', 36), -1);
    }

    #[test]
    fn letter_digits_accept_both_cases() {
        assert_eq!(char_to_digit('a', 16), 10);
        assert_eq!(char_to_digit('A', 16), 10);
        assert_eq!(char_to_digit('z', 36), 35);
        assert_eq!(char_to_digit('Z', 36), 35);
    }

    #[test]
    fn run_dispatches_on_choice() {
        assert_eq!(run("9", 16, 1), Ok(ConversionOutcome::Character(Some('9'))));
        assert_eq!(run("c", 16, 2), Ok(ConversionOutcome::Digit(12)));
        assert_eq!(run("ignored", 10, 0), Ok(ConversionOutcome::Skipped));
    }

    #[test]
    fn run_rejects_out_of_range_choice() {
        assert_eq!(run("1", 10, 3), Err(ConversionError::InvalidChoice(3)));
        assert_eq!(run("1", 10, 99), Err(ConversionError::InvalidChoice(99)));
    }

    #[test]
    fn run_reports_scanner_failures() {
        assert_eq!(run("", 10, 1), Err(ConversionError::InputExhausted));
        assert_eq!(run("   ", 16, 2), Err(ConversionError::InputExhausted));
        assert_eq!(
            run("oops", 10, 1),
            Err(ConversionError::MalformedInt("oops".to_string()))
        );
    }

    #[test]
    fn scanner_takes_first_char_of_next_token() {
        let mut scanner = TokenScanner::new("  abc 42");
        assert_eq!(scanner.next_char(), Ok('a'));
        assert_eq!(scanner.next_int(), Ok(42));
        assert_eq!(scanner.next_int(), Err(ConversionError::InputExhausted));
    }

    #[test]
    fn random_digits_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let radix = rng.gen_range(2..=36);
            let digit = rng.gen_range(0..radix);
            let c = digit_to_char(digit, radix).unwrap();
            assert_eq!(char_to_digit(c, radix), digit as i32);
        }
    }
}
