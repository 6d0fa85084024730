use std::io::{BufRead, Seek};

use image::io::Reader as ImageReader;
use image::{ImageResult, RgbaImage};

use crate::assets::{Asset, TextureId};

#[derive(Clone, Debug)]
pub struct Texture {
    pub id: TextureId,
    image: RgbaImage,
}

impl Texture {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { id: 0, image }
    }

    pub fn from_reader<R: BufRead + Seek>(reader: R) -> ImageResult<Self> {
        let image = ImageReader::new(reader).with_guessed_format()?.decode()?;
        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl Asset for Texture {
    fn id(&self) -> TextureId {
        self.id
    }
}
