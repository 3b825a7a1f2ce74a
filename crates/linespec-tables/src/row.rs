//! Fixed-arity row splitting.

use crate::error::TableError;

/// Split a row into exactly `N` whitespace-delimited fields. Splitting
/// stops after `N - 1` delimiters, so the last field absorbs the rest of
/// the line and multi-word descriptions like "Open, Wait, Then Close"
/// survive intact. Fewer than `N` fields is a malformed row.
pub fn split_fields<const N: usize>(
    line: &str,
    line_no: usize,
) -> Result<[&str; N], TableError> {
    let mut fields = [""; N];
    let mut rest = line.trim();
    for (i, slot) in fields.iter_mut().enumerate() {
        if rest.is_empty() {
            return Err(TableError::MalformedRow {
                line: line_no,
                expected: N,
                found: i,
            });
        }
        if i + 1 == N {
            *slot = rest;
        } else {
            match rest.find(char::is_whitespace) {
                Some(pos) => {
                    *slot = &rest[..pos];
                    rest = rest[pos..].trim_start();
                }
                None => {
                    *slot = rest;
                    rest = "";
                }
            }
        }
    }
    Ok(fields)
}
