use crate::planner::RenamePlan;
use std::io::{self, Write};

pub fn write_ignored<W: Write>(out: &mut W, ignored: &[String]) -> io::Result<()> {
    writeln!(out, "=============================")?;
    writeln!(out, "\tIgnored Files")?;
    writeln!(out, "=============================")?;
    writeln!(
        out,
        "The following files will be ignored because they don't look like exercises:"
    )?;
    for (index, name) in ignored.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, name)?;
    }
    Ok(())
}

/// Writes the planned renamings and returns how many of them change a name.
pub fn write_renamings<W: Write>(out: &mut W, plan: &RenamePlan) -> io::Result<usize> {
    writeln!(out, "======================================")?;
    writeln!(out, "\tRenamings to be applied:")?;
    writeln!(out, "======================================")?;

    let mut total = 0usize;
    for candidate in &plan.candidates {
        if candidate.changed {
            total += 1;
            writeln!(
                out,
                "{}. {} ----> {}",
                total, candidate.original, candidate.target
            )?;
        } else {
            writeln!(out, "  X. {} is already renamed!", candidate.original)?;
        }
    }
    writeln!(out, "\nTotal of renamings: {}", total)?;

    if total == 0 {
        writeln!(out, "No renamings to be applied!")?;
    }
    Ok(total)
}
