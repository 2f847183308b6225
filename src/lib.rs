mod output;
mod pack;
mod raster;

use std::path::PathBuf;

pub use crate::{
    pack::{pack_record, pack_strip},
    raster::{FontdueRasterizer, GlyphRecord, Rasterizer},
};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no glyph for {0:?} in font face")]
    MissingGlyph(char),
    #[error("glyph {field} {value} of {codepoint:?} does not fit in one byte")]
    MetricRange {
        codepoint: char,
        field: &'static str,
        value: i64,
    },
    #[error("failed to parse font face: {0}")]
    FaceParse(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One rasterization size and the tag naming its output file.
#[derive(Clone, Debug)]
pub struct SizePreset {
    /// Character size in 26.6 fixed point, 1/64ths of a point
    pub char_size: u32,
    pub tag: String,
}

impl SizePreset {
    pub fn new(char_size: u32, tag: impl Into<String>) -> Self {
        Self {
            char_size,
            tag: tag.into(),
        }
    }

    /// Pixel size at the 72 dpi the character size implies.
    pub fn px(&self) -> f32 {
        self.char_size as f32 / 64.0
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub font_path: PathBuf,
    pub out_dir: PathBuf,
    /// Output files are named `<prefix>-<tag>.txt`
    pub prefix: String,
    pub presets: Vec<SizePreset>,
}

/// The four sizes the renderer consumes, headings down to body text.
pub fn default_presets() -> Vec<SizePreset> {
    [(40 * 64, "h1"), (32 * 64, "h2"), (32 * 48, "h3"), (24 * 36, "p")]
        .into_iter()
        .map(|(char_size, tag)| SizePreset::new(char_size, tag))
        .collect()
}

pub fn printable_ascii() -> impl Clone + Iterator<Item = char> {
    (b' '..=b'~').map(char::from)
}

/// Load the face named by `config` and generate every preset's strip.
pub fn generate(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let data = std::fs::read(&config.font_path)?;
    let rasterizer = FontdueRasterizer::from_bytes(&data)?;
    generate_with(&rasterizer, config)
}

/// Generate one packed strip per preset and write each to its own file,
/// returning the written paths in preset order.
pub fn generate_with<R: Rasterizer>(
    rasterizer: &R,
    config: &Config,
) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::with_capacity(config.presets.len());
    for preset in &config.presets {
        let strip = pack_strip(rasterizer, preset.px(), printable_ascii())?;
        let path = output::write_strip(&config.out_dir, &config.prefix, &preset.tag, &strip)?;
        log::info!("{}: {} bytes", path.display(), strip.len());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presets_match_renderer_sizes() {
        let presets = default_presets();
        let tags: Vec<_> = presets.iter().map(|p| p.tag.as_str()).collect();
        assert_eq!(tags, ["h1", "h2", "h3", "p"]);
        let px: Vec<_> = presets.iter().map(SizePreset::px).collect();
        assert_eq!(px, [40.0, 32.0, 24.0, 13.5]);
    }

    #[test]
    fn printable_ascii_spans_space_to_tilde() {
        let chars: Vec<_> = printable_ascii().collect();
        assert_eq!(chars.len(), 95);
        assert_eq!(chars.first(), Some(&' '));
        assert_eq!(chars.last(), Some(&'~'));
        assert!(chars.windows(2).all(|w| w[0] < w[1]));
    }
}
