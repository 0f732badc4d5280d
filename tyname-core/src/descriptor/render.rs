use alloc::string::String;
use core::fmt::{self, Write};

use super::{Cv, TypeDescriptor};

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if !self.extents.is_empty() {
            f.write_char(' ')?;
            for extent in &self.extents {
                write!(f, "[{extent}]")?;
            }
        }
        write_cv(f, self.base_cv)?;

        for level in &self.pointers {
            f.write_char('*')?;
            write_cv(f, *level)?;
        }

        f.write_str(self.reference.marker())
    }
}

impl fmt::Display for Cv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_const, self.is_volatile) {
            (true, true) => f.write_str("const volatile"),
            (true, false) => f.write_str("const"),
            (false, true) => f.write_str("volatile"),
            (false, false) => Ok(()),
        }
    }
}

fn write_cv<W: Write>(out: &mut W, cv: Cv) -> fmt::Result {
    if cv.is_empty() {
        return Ok(());
    }

    write!(out, " {cv}")
}

/// Appends ` [a][b]...` to `name`.
pub(super) fn write_extents(name: &mut String, extents: &[usize]) {
    name.push(' ');
    for extent in extents {
        // Writing to a `String` cannot fail.
        let _ = write!(name, "[{extent}]");
    }
}
