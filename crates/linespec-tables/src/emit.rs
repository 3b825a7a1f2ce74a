//! Rendering of decoded records as TOML text. Optional fields at their
//! default value are omitted entirely; downstream readers treat absence as
//! the default, so a `monsters = false` line would change meaning.

use std::io::{self, Write};

use linespec_types::{HeightDef, HeightPair, LinedefSpecial, MoveSpec, SpecialEffect};

/// Comment header separating one category's records from the next.
pub fn write_section_header(out: &mut impl Write, name: &str) -> io::Result<()> {
    write!(out, "\n\n### {name} ###\n\n")
}

pub fn write_record(out: &mut impl Write, record: &LinedefSpecial) -> io::Result<()> {
    writeln!(out, "[[linedef]]")?;
    writeln!(out, "  special_type = {}", record.special_type)?;
    writeln!(out, "  trigger = \"{}\"", record.trigger)?;
    if record.extended {
        writeln!(out, "  extended = true")?;
    }
    if record.only_once {
        writeln!(out, "  only_once = true")?;
    }
    if record.monsters {
        writeln!(out, "  monsters = true")?;
    }
    if let Some(lock) = record.lock {
        writeln!(out, "  lock = {}", lock as u8)?;
    }
    match &record.effect {
        SpecialEffect::Move(spec) => write_move(out, spec)?,
        SpecialEffect::Exit(kind) => writeln!(out, "  exit = \"{kind}\"")?,
    }
    writeln!(out)
}

fn write_move(out: &mut impl Write, spec: &MoveSpec) -> io::Result<()> {
    writeln!(out, "  [linedef.move]")?;
    if spec.wait > 0.0 {
        // Debug keeps the decimal point ("30.0", not "30"), so the value
        // stays a TOML float.
        writeln!(out, "    wait = {:?}", spec.wait)?;
    }
    if let Some(speed) = spec.speed {
        writeln!(out, "    speed = {}", speed.units_per_tic())?;
    }
    if spec.repeat {
        writeln!(out, "    repeat = true")?;
    }
    if let Some(pair) = &spec.floor {
        write_pair(out, "floor", pair)?;
    }
    if let Some(pair) = &spec.ceiling {
        write_pair(out, "ceiling", pair)?;
    }
    Ok(())
}

fn write_pair(out: &mut impl Write, surface: &str, pair: &HeightPair) -> io::Result<()> {
    match &pair.second {
        None => writeln!(
            out,
            "    {surface} = {{ first = {} }}",
            inline_height(&pair.first)
        ),
        Some(second) => {
            writeln!(out, "    [linedef.move.{surface}]")?;
            writeln!(out, "      first = {}", inline_height(&pair.first))?;
            writeln!(out, "      second = {}", inline_height(second))
        }
    }
}

fn inline_height(def: &HeightDef) -> String {
    match def.off {
        Some(off) => format!("{{ to = \"{}\", off = {off} }}", def.to),
        None => format!("{{ to = \"{}\" }}", def.to),
    }
}
