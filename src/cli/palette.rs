use std::io::{self, Write};

use clap::Args;

use crate::error::Result;
use crate::font::GlyphRasterizer;
use crate::output::{plural, Printer};
use crate::types::{Palette, RankedGlyph};

use super::PaletteSource;

/// Show the characters ranked from darkest to lightest
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub source: PaletteSource,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let config = args.source.load_config(printer)?;
    let charset = args.source.charset(&config)?;
    let font = args.source.font(&config).rasterizer();

    let ranked = Palette::rank(&charset, &font);
    warn_fallbacks(&ranked, printer);

    let (width, height) = font.cell_size();
    printer.status(
        "Ranked",
        &format!("{} in a {}x{} cell", plural(ranked.len(), "glyph", "glyphs"), width, height),
    );

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&ranked)?;
        writeln!(stdout, "{json}")?;
    } else {
        write!(stdout, "{}", format_table(&ranked))?;
    }

    Ok(())
}

/// Report every glyph measured as the missing-glyph box.
pub fn warn_fallbacks(ranked: &[RankedGlyph], printer: &Printer) {
    for glyph in ranked.iter().filter(|g| g.fallback) {
        printer.warning(
            "Missing",
            &format!("no glyph for {:?}, ranked as the missing-glyph box", glyph.ch),
        );
    }
}

/// One line per glyph: quoted character, then ink coverage.
fn format_table(ranked: &[RankedGlyph]) -> String {
    ranked
        .iter()
        .map(|g| format!("{:<6}{}\n", format!("{:?}", g.ch), g.density))
        .collect()
}
