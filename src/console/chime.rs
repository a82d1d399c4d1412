//! Audible notification capability.
//!
//! The audible cue is an injectable capability with a silent default, rather
//! than platform-conditional branching. The terminal implementation rings
//! the bell, which terminals are free to render as a sound, a flash, or
//! nothing at all.

use console::Term;

/// Emits an audible cue to draw the user's attention.
pub trait Chime: Send + Sync {
    /// Rings the chime.
    fn ring(&self);
}

/// Chime ringing the terminal bell on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermChime;

impl Chime for TermChime {
    fn ring(&self) {
        let term = Term::stderr();
        let _ = term.write_str("\x07");
        let _ = term.flush();
    }
}

/// Chime that stays silent. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn ring(&self) {}
}
