//! Human-readable progress lines for the loader.
//!
//! Structured events go through `tracing`; this writer produces the plain
//! console narrative an operator watches during a run.

use std::io::Write;

/// Writes progress lines to any [`Write`] sink (stdout in the binary, a
/// buffer in tests).
pub struct Progress<W: Write> {
    out: W,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Heading printed when a phase starts.
    pub fn phase(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.out, "{title}...")
    }

    pub fn created(&mut self, what: &str, name: &str) -> std::io::Result<()> {
        writeln!(self.out, "  + Created {what}: {name}")
    }

    pub fn failed(&mut self, what: &str, name: &str) -> std::io::Result<()> {
        writeln!(self.out, "  x Failed to create {what}: {name}")
    }

    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lines() {
        let mut progress = Progress::new(Vec::new());
        progress.phase("Creating skills").unwrap();
        progress.created("skill", "Welding").unwrap();
        progress.failed("job", "Forklift Operator").unwrap();
        let text = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(
            text,
            concat!(
                "Creating skills...\n",
                "  + Created skill: Welding\n",
                "  x Failed to create job: Forklift Operator\n",
            )
        );
    }
}
