//! Run-length codec for amino acid sequences.
//!
//! A run is written as a single decimal digit followed by the repeated
//! character. Runs of one or two characters are written out literally.
//!
//! ```text
//! AAABBC      <->  3ABBC
//! WWWWWWWWWWW  ->  9WWW     (runs are capped at 9)
//! ```
//!
//! Counts are always exactly one digit wide, so runs longer than 9 are split
//! by the encoder. Decoding is lenient: anything that is not a digit/character
//! pair is copied through unchanged.

/// Longest run a single count digit can describe.
pub const MAX_RUN: usize = 9;

/// Expands an encoded sequence.
///
/// A digit `d` followed by a character `c` becomes `c` repeated `d` times.
/// A digit at the very end of the input has nothing to repeat and is kept as
/// a literal digit. Every other character is copied as is.
///
/// # Examples
///
/// ```
/// use protrle::rle::decode;
///
/// assert_eq!(decode("3A2BC"), "AAABBC");
/// assert_eq!(decode("A"), "A");
/// ```
pub fn decode(encoded: &str) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();

    while let Some(c) = chars.next() {
        match c.to_digit(10) {
            Some(count) => match chars.next() {
                Some(repeated) => {
                    decoded.extend(std::iter::repeat(repeated).take(count as usize));
                }
                // Dangling count
                None => decoded.push(c),
            },
            None => decoded.push(c),
        }
    }

    decoded
}

/// Compresses a sequence into the run-length form understood by [`decode`].
///
/// Runs of length 1 and 2 are emitted literally (`"2X"` is no shorter than
/// `"XX"`), longer runs as `<count><char>`. A tenth identical character starts
/// a new run.
///
/// # Examples
///
/// ```
/// use protrle::rle::encode;
///
/// assert_eq!(encode("AAABBC"), "3ABBC");
/// assert_eq!(encode(""), "");
/// ```
pub fn encode(sequence: &str) -> String {
    let mut encoded = String::with_capacity(sequence.len());
    let mut chars = sequence.chars();

    let Some(mut current) = chars.next() else {
        return encoded;
    };
    let mut run = 1;

    for c in chars {
        if c == current && run < MAX_RUN {
            run += 1;
        } else {
            push_run(&mut encoded, current, run);
            current = c;
            run = 1;
        }
    }
    push_run(&mut encoded, current, run);

    encoded
}

fn push_run(out: &mut String, c: char, run: usize) {
    match run {
        1 => out.push(c),
        2 => {
            out.push(c);
            out.push(c);
        }
        _ => {
            debug_assert!(run <= MAX_RUN);
            // run is a single digit here
            out.push(char::from(b'0' + run as u8));
            out.push(c);
        }
    }
}
