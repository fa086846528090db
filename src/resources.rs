//! Identity-keyed storage for shared, expensive-to-create assets.
//!
//! Resources live outside the node tree: a bitmap, font, or tileset can be
//! referenced by zero or many nodes and is only ever removed explicitly.
//! There is no reference counting — removing an asset a node still names
//! leaves that node drawing nothing, which is the caller's bug to fix.
//!
//! Registration is deliberately not idempotent: adding an id twice within
//! a kind is a hard error, so asset-loading mistakes surface immediately
//! instead of silently replacing pixels.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use crate::render::Rect;

/// The three asset partitions; ids are unique per kind, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Font,
    Tileset,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Font => write!(f, "font"),
            ResourceKind::Tileset => write!(f, "tileset"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("{kind} already registered: '{id}'")]
    DuplicateKey { kind: ResourceKind, id: String },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wrap already-decoded RGBA8 pixels. `pixels` must hold exactly
    /// `width * height * 4` bytes.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode an encoded image (PNG, JPEG) from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ResourceError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }

    /// Decode an image file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// A font asset: raw face bytes plus the sizing the renderer bakes its
/// glyph atlas with. Decoding and atlas building belong to the backend.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Vec<u8>,
    size_px: u32,
    pad_x: i32,
    pad_y: i32,
    space_x: i32,
    display_scale: (f32, f32),
    loaded: bool,
}

impl FontFace {
    pub fn new(data: Vec<u8>, size_px: u32) -> Self {
        Self::with_padding(data, size_px, 2, 2, 0)
    }

    pub fn with_padding(data: Vec<u8>, size_px: u32, pad_x: i32, pad_y: i32, space_x: i32) -> Self {
        Self {
            data,
            size_px,
            pad_x,
            pad_y,
            space_x,
            display_scale: (1.0, 1.0),
            loaded: false,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    pub fn padding(&self) -> (i32, i32) {
        (self.pad_x, self.pad_y)
    }

    pub fn letter_spacing(&self) -> i32 {
        self.space_x
    }

    /// Render units per logical unit, pushed in on viewport changes so the
    /// backend can re-rasterize at the right density.
    pub fn display_scale(&self) -> (f32, f32) {
        self.display_scale
    }

    pub fn set_display_scale(&mut self, sx: f32, sy: f32) {
        self.display_scale = (sx, sy);
    }

    /// Whether the backend has built renderer-side state for this face.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}

/// A bitmap cut into fixed-size cells, addressed left-to-right,
/// top-to-bottom.
#[derive(Debug, Clone)]
pub struct Tileset {
    bitmap: Bitmap,
    tile_width: u32,
    tile_height: u32,
    texture_ready: bool,
}

impl Tileset {
    pub fn new(bitmap: Bitmap, tile_width: u32, tile_height: u32) -> Self {
        Self {
            bitmap,
            tile_width,
            tile_height,
            texture_ready: false,
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    pub fn columns(&self) -> u32 {
        if self.tile_width == 0 {
            return 0;
        }
        self.bitmap.width() / self.tile_width
    }

    pub fn rows(&self) -> u32 {
        if self.tile_height == 0 {
            return 0;
        }
        self.bitmap.height() / self.tile_height
    }

    pub fn tile_count(&self) -> u32 {
        self.columns() * self.rows()
    }

    /// The cell's sub-rectangle of the tileset image in `[0, 1]` texture
    /// coordinates; `None` when the cell index is out of range.
    pub fn tile_uv(&self, cell: u32) -> Option<Rect> {
        if cell >= self.tile_count() {
            return None;
        }
        let col = cell % self.columns();
        let row = cell / self.columns();
        let w = self.tile_width as f32 / self.bitmap.width() as f32;
        let h = self.tile_height as f32 / self.bitmap.height() as f32;
        Some(Rect::new(col as f32 * w, row as f32 * h, w, h))
    }

    pub fn is_texture_ready(&self) -> bool {
        self.texture_ready
    }

    pub fn mark_texture_ready(&mut self) {
        self.texture_ready = true;
    }
}

/// The container's flat asset table, one partition per [`ResourceKind`].
#[derive(Debug, Default)]
pub struct Resources {
    images: HashMap<String, Bitmap>,
    fonts: HashMap<String, FontFace>,
    tilesets: HashMap<String, Tileset>,
    renderer_ready: bool,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_image(&mut self, id: impl Into<String>, bitmap: Bitmap) -> Result<&Bitmap, ResourceError> {
        match self.images.entry(id.into()) {
            Entry::Occupied(entry) => Err(ResourceError::DuplicateKey {
                kind: ResourceKind::Image,
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => Ok(entry.insert(bitmap)),
        }
    }

    pub fn image(&self, id: &str) -> Option<&Bitmap> {
        self.images.get(id)
    }

    pub fn remove_image(&mut self, id: &str) {
        self.images.remove(id);
    }

    pub fn add_font(&mut self, id: impl Into<String>, mut font: FontFace) -> Result<&FontFace, ResourceError> {
        // Faces registered after the renderer came up load immediately
        if self.renderer_ready {
            font.mark_loaded();
        }
        match self.fonts.entry(id.into()) {
            Entry::Occupied(entry) => Err(ResourceError::DuplicateKey {
                kind: ResourceKind::Font,
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => Ok(entry.insert(font)),
        }
    }

    pub fn font(&self, id: &str) -> Option<&FontFace> {
        self.fonts.get(id)
    }

    pub fn font_mut(&mut self, id: &str) -> Option<&mut FontFace> {
        self.fonts.get_mut(id)
    }

    pub fn remove_font(&mut self, id: &str) {
        self.fonts.remove(id);
    }

    pub fn add_tileset(&mut self, id: impl Into<String>, mut tileset: Tileset) -> Result<&Tileset, ResourceError> {
        if self.renderer_ready {
            tileset.mark_texture_ready();
        }
        match self.tilesets.entry(id.into()) {
            Entry::Occupied(entry) => Err(ResourceError::DuplicateKey {
                kind: ResourceKind::Tileset,
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => Ok(entry.insert(tileset)),
        }
    }

    pub fn tileset(&self, id: &str) -> Option<&Tileset> {
        self.tilesets.get(id)
    }

    pub fn remove_tileset(&mut self, id: &str) {
        self.tilesets.remove(id);
    }

    /// The rendering context exists: flag every face and tileset so
    /// backends know renderer-side state can now be built.
    pub fn renderer_ready(&mut self) {
        self.renderer_ready = true;
        for font in self.fonts.values_mut() {
            if !font.is_loaded() {
                font.mark_loaded();
            }
        }
        for tileset in self.tilesets.values_mut() {
            if !tileset.is_texture_ready() {
                tileset.mark_texture_ready();
            }
        }
    }

    /// Viewport parameters changed: push the new render scale into every
    /// registered font.
    pub fn update_display_scale(&mut self, sx: f32, sy: f32) {
        for font in self.fonts.values_mut() {
            font.set_display_scale(sx, sy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::from_pixels(width, height, vec![0u8; (width * height * 4) as usize])
    }

    #[test]
    fn test_duplicate_image_fails_fast() {
        let mut resources = Resources::new();
        resources.add_image("bg", bitmap(2, 2)).unwrap();

        let err = resources.add_image("bg", bitmap(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            ResourceError::DuplicateKey {
                kind: ResourceKind::Image,
                ..
            }
        ));
        // Same id in another kind is fine
        resources
            .add_tileset("bg", Tileset::new(bitmap(4, 4), 2, 2))
            .unwrap();
    }

    #[test]
    fn test_missing_lookup_and_remove_are_quiet() {
        let mut resources = Resources::new();
        assert!(resources.image("ghost").is_none());
        assert!(resources.font("ghost").is_none());
        resources.remove_image("ghost");
        resources.remove_font("ghost");
        resources.remove_tileset("ghost");
    }

    #[test]
    fn test_remove_then_readd() {
        let mut resources = Resources::new();
        resources.add_image("bg", bitmap(2, 2)).unwrap();
        resources.remove_image("bg");
        assert!(resources.add_image("bg", bitmap(2, 2)).is_ok());
    }

    #[test]
    fn test_tileset_uv_grid() {
        let tileset = Tileset::new(bitmap(64, 32), 16, 16);
        assert_eq!(tileset.columns(), 4);
        assert_eq!(tileset.rows(), 2);
        assert_eq!(tileset.tile_count(), 8);

        let uv = tileset.tile_uv(5).unwrap();
        assert_eq!(uv.x, 0.25);
        assert_eq!(uv.y, 0.5);
        assert_eq!(uv.width, 0.25);
        assert_eq!(uv.height, 0.5);

        assert!(tileset.tile_uv(8).is_none());
    }

    #[test]
    fn test_renderer_ready_marks_existing_and_late_assets() {
        let mut resources = Resources::new();
        resources
            .add_font("body", FontFace::new(vec![0u8; 4], 16))
            .unwrap();
        assert!(!resources.font("body").unwrap().is_loaded());

        resources.renderer_ready();
        assert!(resources.font("body").unwrap().is_loaded());

        // Registered after the context came up: loaded immediately
        resources
            .add_font("title", FontFace::new(vec![0u8; 4], 32))
            .unwrap();
        assert!(resources.font("title").unwrap().is_loaded());
    }

    #[test]
    fn test_display_scale_broadcast() {
        let mut resources = Resources::new();
        resources
            .add_font("body", FontFace::new(vec![0u8; 4], 16))
            .unwrap();
        resources.update_display_scale(2.0, 3.0);
        assert_eq!(resources.font("body").unwrap().display_scale(), (2.0, 3.0));
    }
}
