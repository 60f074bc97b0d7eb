/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// 1x1 opaque white, used until (or instead of) a real texture.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 255],
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Decode PNG or JPEG bytes, format sniffed from the content.
pub fn decode_rgba(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("image has no pixels ({}x{})", width, height);
    }
    Ok(DecodedImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}
