//! One-line CSV codec for field snapshots.
//!
//! A snapshot is a single line: values in grid order, separated by `,`,
//! terminated by `\n`. Values use Rust's shortest round-trip formatting,
//! so decoding an encoded line returns bit-identical floats.

use std::io::{self, Write};

use crate::error::CsvError;

/// Write `field` as one CSV line to `out`.
pub fn write_line<W: Write>(out: &mut W, field: &[f64]) -> io::Result<()> {
    let mut values = field.iter();
    if let Some(first) = values.next() {
        write!(out, "{first}")?;
        for v in values {
            write!(out, ",{v}")?;
        }
    }
    out.write_all(b"\n")
}

/// Encode `field` as one CSV line, trailing newline included.
///
/// ```
/// assert_eq!(ripple_io::encode_line(&[0.0, 0.5, -1.25]), "0,0.5,-1.25\n");
/// ```
pub fn encode_line(field: &[f64]) -> String {
    let mut buf = Vec::with_capacity(field.len() * 8 + 1);
    // Writing into a Vec cannot fail.
    let _ = write_line(&mut buf, field);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Decode one CSV line. Surrounding whitespace and the line terminator are
/// ignored; a blank line is an empty field.
pub fn decode_line(line: &str) -> Result<Vec<f64>, CsvError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',')
        .enumerate()
        .map(|(column, token)| {
            token.trim().parse::<f64>().map_err(|_| CsvError::Parse {
                column,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trailing_newline_and_no_trailing_comma() {
        assert_eq!(encode_line(&[1.0, 2.0]), "1,2\n");
        assert_eq!(encode_line(&[]), "\n");
    }

    #[test]
    fn small_gaussian_tail_values() {
        let line = encode_line(&[3.75e-6, 0.0]);
        assert_eq!(line, "0.00000375,0\n");
        assert_eq!(decode_line(&line).unwrap(), vec![3.75e-6, 0.0]);
    }

    #[test]
    fn decode_accepts_crlf_and_exponents() {
        assert_eq!(decode_line("1e-3, 2.5 ,-0\r\n").unwrap(), vec![1e-3, 2.5, -0.0]);
    }

    #[test]
    fn decode_reports_bad_column() {
        let err = decode_line("0.1,0.2,x,0.4").unwrap_err();
        match err {
            CsvError::Parse { column, token } => {
                assert_eq!(column, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_is_empty_field() {
        assert!(decode_line("\n").unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn finite_values_survive_bit_exact(field in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let back = decode_line(&encode_line(&field)).unwrap();
            let a: Vec<u64> = field.iter().map(|v| v.to_bits()).collect();
            let b: Vec<u64> = back.iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(a, b);
        }
    }
}
