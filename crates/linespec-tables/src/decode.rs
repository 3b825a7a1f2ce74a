//! Per-column decoders shared across the category generators. Every column
//! is a closed vocabulary; a token outside it is a hard error.

use linespec_types::{KeyLock, Speed, Trigger};

use crate::error::TableError;

/// Marker for type codes in the extended numeric range.
const EXTENDED: &str = "Ext";

pub fn special_type(field: &str, line: usize) -> Result<u16, TableError> {
    field
        .parse::<u16>()
        .map_err(|_| unknown(line, "special_type", field))
}

pub fn extended(field: &str) -> bool {
    field == EXTENDED
}

/// Decode the two-character trigger code: `P`/`S`/`W`/`G` plus `1` for
/// once-only (anything else in the second position means repeatable).
pub fn trigger_and_only_once(
    field: &str,
    line: usize,
) -> Result<(Trigger, bool), TableError> {
    let mut chars = field.chars();
    let (Some(kind), Some(count), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(unknown(line, "trigger", field));
    };
    let trigger = match kind {
        'P' => Trigger::Push,
        'S' => Trigger::Switch,
        'W' => Trigger::WalkOver,
        'G' => Trigger::Gun,
        _ => return Err(unknown(line, "trigger", field)),
    };
    Ok((trigger, count == '1'))
}

pub fn lock(field: &str, line: usize) -> Result<Option<KeyLock>, TableError> {
    match field {
        "No" => Ok(None),
        "Blue" => Ok(Some(KeyLock::Blue)),
        "Red" => Ok(Some(KeyLock::Red)),
        "Yell" => Ok(Some(KeyLock::Yellow)),
        _ => Err(unknown(line, "lock", field)),
    }
}

pub fn speed(field: &str, line: usize) -> Result<Option<Speed>, TableError> {
    match field {
        "----" => Ok(None),
        "Slow" => Ok(Some(Speed::Slow)),
        "Normal" => Ok(Some(Speed::Normal)),
        "Fast" => Ok(Some(Speed::Fast)),
        "Turbo" => Ok(Some(Speed::Turbo)),
        "Inst" => Ok(Some(Speed::Instant)),
        _ => Err(unknown(line, "speed", field)),
    }
}

/// Decode a wait duration: `--` means none, otherwise seconds with an
/// optional trailing `s` unit suffix.
pub fn wait(field: &str, line: usize) -> Result<f32, TableError> {
    if field == "--" {
        return Ok(0.0);
    }
    let digits = field.strip_suffix('s').unwrap_or(field);
    digits
        .parse::<f32>()
        .map_err(|_| unknown(line, "wait", field))
}

pub fn yes_no(field: &str, line: usize, column: &'static str) -> Result<bool, TableError> {
    match field {
        "Yes" => Ok(true),
        "No" | "--" => Ok(false),
        _ => Err(unknown(line, column, field)),
    }
}

pub(crate) fn unknown(line: usize, column: &'static str, token: &str) -> TableError {
    TableError::UnknownToken {
        line,
        column,
        token: token.to_string(),
    }
}
