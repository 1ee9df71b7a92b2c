//! Subcommand `encode`. Parses a textual list of non-negative integers and
//! prints its hybrid-encoded bytes.
use std::io::Write;

use parquet_rle::encoding::hybrid_rle;
use parquet_rle::error::{Error, Result};

use crate::SEPARATOR;

/// Parses the bit width argument as a non-negative integer of at most 64,
/// the widest value the encoder packs.
pub fn parse_bit_width(input: &str) -> Result<usize> {
    let bit_width = input
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidParameter(format!("`{}` is not a valid bit width", input)))?;
    if bit_width > u64::BITS as usize {
        return Err(Error::InvalidParameter(format!(
            "bit width {} exceeds the maximum of {} bits",
            bit_width,
            u64::BITS
        )));
    }
    Ok(bit_width)
}

/// Parses a bracketed, comma-separated list of non-negative integers, e.g.
/// `[1, 2, 3]`.
pub fn parse_values(input: &str) -> Result<Vec<u64>> {
    let inner = input
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            Error::OutOfSpec(format!(
                "expected a bracketed list of integers, got `{}`",
                input
            ))
        })?;

    if inner.trim().is_empty() {
        return Ok(vec![]);
    }

    inner
        .split(',')
        .map(|token| {
            token.trim().parse::<u64>().map_err(|_| {
                Error::OutOfSpec(format!("`{}` is not a non-negative integer", token.trim()))
            })
        })
        .collect()
}

/// Validates the arguments, encodes the values and writes the resulting bytes
/// and their hexadecimal rendering to `writer`.
pub fn encode_list<W: Write>(bit_width: &str, values: &str, writer: &mut W) -> Result<()> {
    let bit_width = parse_bit_width(bit_width)?;
    let values = parse_values(values)?;

    let mut encoded = vec![];
    hybrid_rle::encode(&mut encoded, &values, bit_width)?;

    writeln!(writer, "Bytes: {:?}", encoded)?;
    writeln!(writer, "{}", SEPARATOR)?;
    let hex = encoded
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "Hex:   [{}]", hex)?;
    Ok(())
}
