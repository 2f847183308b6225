use crate::Error;

/// One rasterized glyph as the font library reports it.
#[derive(Clone, Debug)]
pub struct GlyphRecord {
    pub codepoint: char,
    /// Bitmap width in pixels
    pub width: usize,
    /// Bitmap height in pixels
    pub height: usize,
    /// Horizontal distance from the pen position to the bitmap's left edge
    pub left: i32,
    /// Vertical distance from the baseline up to the bitmap's top row
    pub top: i32,
    /// 8-bit coverage, row major, one byte per pixel, `width * height` bytes
    pub coverage: Vec<u8>,
}

impl GlyphRecord {
    /// Length of this record once packed: four scalar bytes plus coverage.
    pub fn packed_len(&self) -> usize {
        4 + self.width * self.height
    }
}

/// The seam between the external rasterization library and the packing
/// loop, so the latter can run against synthetic glyphs.
pub trait Rasterizer {
    fn rasterize(&self, codepoint: char, px: f32) -> Result<GlyphRecord, Error>;
}

pub struct FontdueRasterizer {
    font: fontdue::Font,
}

impl FontdueRasterizer {
    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(Error::FaceParse)?;
        Ok(Self { font })
    }
}

impl Rasterizer for FontdueRasterizer {
    fn rasterize(&self, codepoint: char, px: f32) -> Result<GlyphRecord, Error> {
        let index = self.font.lookup_glyph_index(codepoint);
        if index == 0 {
            return Err(Error::MissingGlyph(codepoint));
        }
        let (metrics, coverage) = self.font.rasterize_indexed(index, px);
        Ok(GlyphRecord {
            codepoint,
            width: metrics.width,
            height: metrics.height,
            left: metrics.xmin,
            // fontdue reports the bottom edge relative to the baseline;
            // the record carries the top edge
            top: metrics.ymin + metrics.height as i32,
            coverage,
        })
    }
}
