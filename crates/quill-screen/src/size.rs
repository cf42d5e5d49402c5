#![forbid(unsafe_code)]

//! Terminal dimension probing.

/// Supplies `(columns, rows)` on demand. The painter asks on every paint;
/// implementations must not cache across calls.
pub trait SizeProbe {
    fn size(&self) -> (u16, u16);
}

/// The real terminal, with an 80x24 fallback when the query fails (not a
/// tty, or an exotic platform).
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl SizeProbe for TerminalProbe {
    fn size(&self) -> (u16, u16) {
        crossterm::terminal::size().unwrap_or((80, 24))
    }
}

/// A fixed size for tests and headless rendering.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub u16, pub u16);

impl SizeProbe for FixedProbe {
    fn size(&self) -> (u16, u16) {
        (self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_probe_reports_its_size() {
        assert_eq!(FixedProbe(120, 40).size(), (120, 40));
    }

    #[test]
    fn terminal_probe_never_reports_zero() {
        let (cols, rows) = TerminalProbe.size();
        assert!(cols > 0);
        assert!(rows > 0);
    }
}
