use std::io::{self, Write};

use card_core::CardViewModel;

/// Writes the image `src` for `view`, one URL per line. Nothing is written
/// while no card is set.
pub fn render<W: Write>(out: &mut W, view: &CardViewModel) -> io::Result<()> {
    if !view.has_card() {
        return Ok(());
    }
    writeln!(out, "{}", view.card_image)?;
    out.flush()
}
