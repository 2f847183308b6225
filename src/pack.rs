use crate::{
    raster::{GlyphRecord, Rasterizer},
    Error,
};

/// Append one record: width, height, left bearing, top bearing as single
/// bytes, then the raw coverage. There is no length prefix; a reader
/// recovers record boundaries by re-deriving `width * height` from the
/// first two bytes.
pub fn pack_record(buf: &mut Vec<u8>, record: &GlyphRecord) -> Result<(), Error> {
    debug_assert_eq!(record.coverage.len(), record.width * record.height);
    buf.reserve(record.packed_len());
    buf.push(scalar_byte(record.width as i64, "width", record.codepoint)?);
    buf.push(scalar_byte(record.height as i64, "height", record.codepoint)?);
    buf.push(scalar_byte(record.left.into(), "left bearing", record.codepoint)?);
    buf.push(scalar_byte(record.top.into(), "top bearing", record.codepoint)?);
    buf.extend_from_slice(&record.coverage);
    Ok(())
}

/// Rasterize `codepoints` in input order at `px` and pack them into one
/// contiguous strip.
pub fn pack_strip<R, I>(rasterizer: &R, px: f32, codepoints: I) -> Result<Vec<u8>, Error>
where
    R: Rasterizer,
    I: Iterator<Item = char>,
{
    let mut buf = Vec::new();
    for codepoint in codepoints {
        let record = rasterizer.rasterize(codepoint, px)?;
        pack_record(&mut buf, &record)?;
    }
    Ok(buf)
}

fn scalar_byte(value: i64, field: &'static str, codepoint: char) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| Error::MetricRange {
        codepoint,
        field,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(width: usize, height: usize, left: i32, top: i32) -> GlyphRecord {
        GlyphRecord {
            codepoint: 'A',
            width,
            height,
            left,
            top,
            coverage: vec![0xCC; width * height],
        }
    }

    #[test]
    fn record_layout() {
        let mut buf = Vec::new();
        pack_record(&mut buf, &record(2, 3, 1, 4)).unwrap();
        assert_eq!(buf.len(), 4 + 6);
        assert_eq!(&buf[..4], &[2, 3, 1, 4]);
        assert!(buf[4..].iter().all(|&b| b == 0xCC));
    }

    #[test]
    fn empty_glyph_is_scalars_only() {
        // the space glyph rasterizes to a 0x0 bitmap
        let mut buf = Vec::new();
        pack_record(&mut buf, &record(0, 0, 0, 0)).unwrap();
        assert_eq!(buf, [0, 0, 0, 0]);
    }

    #[test]
    fn records_concatenate_without_delimiters() {
        let mut buf = Vec::new();
        pack_record(&mut buf, &record(1, 1, 0, 1)).unwrap();
        pack_record(&mut buf, &record(2, 1, 0, 1)).unwrap();
        assert_eq!(buf, [1, 1, 0, 1, 0xCC, 2, 1, 0, 1, 0xCC, 0xCC]);
    }

    #[test]
    fn oversized_metric_is_an_error() {
        let mut buf = Vec::new();
        let err = pack_record(&mut buf, &record(256, 1, 0, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::MetricRange {
                codepoint: 'A',
                field: "width",
                value: 256,
            }
        ));
    }

    #[test]
    fn negative_bearing_is_an_error() {
        let mut buf = Vec::new();
        let err = pack_record(&mut buf, &record(1, 1, -2, 0)).unwrap_err();
        assert!(matches!(
            err,
            Error::MetricRange {
                field: "left bearing",
                value: -2,
                ..
            }
        ));
    }
}
