//! Asset preloading.
//!
//! The scene cannot be staged until every listed asset is resident: build
//! an `AssetManifest`, `load` it, and hand the resulting `SceneReady`
//! token to `SceneController::build`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

/// What an asset entry decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Typeface,
}

/// One asset to preload.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: AssetKind,
}

/// Ordered list of assets required before scene construction.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a texture file.
    pub fn texture(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.entries.push(AssetEntry {
            name: name.to_string(),
            path: path.into(),
            kind: AssetKind::Texture,
        });
        self
    }

    /// Queue a typeface file (`*.typeface.json`).
    pub fn typeface(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.entries.push(AssetEntry {
            name: name.to_string(),
            path: path.into(),
            kind: AssetKind::Typeface,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load every entry; completion yields the token required to build a
    /// scene. Any unreadable or malformed entry fails the whole load.
    pub async fn load(self) -> Result<SceneReady> {
        let mut fonts = HashMap::new();
        let mut textures = HashMap::new();

        for entry in self.entries {
            match entry.kind {
                AssetKind::Typeface => {
                    let face = FontFace::from_file(&entry.path)
                        .with_context(|| format!("loading typeface `{}`", entry.name))?;
                    fonts.insert(entry.name, face);
                }
                AssetKind::Texture => {
                    let bytes = std::fs::read(&entry.path).with_context(|| {
                        format!(
                            "loading texture `{}` from {}",
                            entry.name,
                            entry.path.display()
                        )
                    })?;
                    textures.insert(entry.name, bytes);
                }
            }
        }

        info!(
            "assets resident: {} fonts, {} textures",
            fonts.len(),
            textures.len()
        );
        Ok(SceneReady { fonts, textures })
    }
}

/// Glyph metrics from a typeface file.
#[derive(Debug, Clone, Deserialize)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub ha: f32,
}

/// A loaded font face.
#[derive(Debug, Clone, Deserialize)]
pub struct FontFace {
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(default)]
    pub resolution: u32,
    #[serde(default)]
    pub glyphs: HashMap<String, Glyph>,
}

impl FontFace {
    /// Parse a typeface JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed typeface JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&data)
    }

    /// Face for hosts that supply no typeface file; carries no metrics and
    /// accepts any content.
    pub fn fallback() -> Self {
        Self {
            family_name: "fallback".to_string(),
            resolution: 0,
            glyphs: HashMap::new(),
        }
    }

    /// True when every non-space character of `text` has a glyph entry.
    /// A face without a glyph table accepts everything.
    pub fn covers(&self, text: &str) -> bool {
        if self.glyphs.is_empty() {
            return true;
        }
        text.chars()
            .filter(|c| *c != ' ')
            .all(|c| self.glyphs.contains_key(c.to_string().as_str()))
    }
}

/// Proof that asset preloading completed; required to build a scene.
#[derive(Debug, Clone)]
pub struct SceneReady {
    fonts: HashMap<String, FontFace>,
    textures: HashMap<String, Vec<u8>>,
}

impl SceneReady {
    /// Token holding a single already-loaded face under `font_name`.
    pub fn with_font(font_name: &str, face: FontFace) -> Self {
        let mut fonts = HashMap::new();
        fonts.insert(font_name.to_string(), face);
        Self {
            fonts,
            textures: HashMap::new(),
        }
    }

    /// Token for asset-free hosts: registers the fallback face under
    /// `font_name`.
    pub fn with_fallback_font(font_name: &str) -> Self {
        Self::with_font(font_name, FontFace::fallback())
    }

    pub fn font(&self, name: &str) -> Option<&FontFace> {
        self.fonts.get(name)
    }

    pub fn texture(&self, name: &str) -> Option<&[u8]> {
        self.textures.get(name).map(|b| b.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TYPEFACE: &str = r#"{
        "familyName": "Optimer",
        "resolution": 1000,
        "glyphs": {
            "a": { "ha": 561, "o": "m 10 10 l 20 20" },
            "b": { "ha": 587, "o": "m 0 0 l 5 5" }
        }
    }"#;

    #[test]
    fn typeface_json_parses_metrics() {
        let face = FontFace::from_json(SAMPLE_TYPEFACE).unwrap();
        assert_eq!(face.family_name, "Optimer");
        assert_eq!(face.resolution, 1000);
        assert_eq!(face.glyphs.len(), 2);
        assert_eq!(face.glyphs["a"].ha, 561.0);
    }

    #[test]
    fn coverage_checks_glyph_table() {
        let face = FontFace::from_json(SAMPLE_TYPEFACE).unwrap();
        assert!(face.covers("ab ba"));
        assert!(!face.covers("abc"));
    }

    #[test]
    fn fallback_face_accepts_anything() {
        assert!(FontFace::fallback().covers("Orbit Scene"));
    }

    #[test]
    fn malformed_typeface_is_rejected() {
        assert!(FontFace::from_json("{ not json").is_err());
    }

    #[test]
    fn load_fails_on_missing_file() {
        let manifest = AssetManifest::new().texture("matcap", "/nonexistent/matcap.png");
        let err = pollster::block_on(manifest.load()).unwrap_err();
        assert!(err.to_string().contains("matcap"));
    }

    #[test]
    fn ready_token_serves_named_fonts() {
        let ready = SceneReady::with_fallback_font("title");
        assert!(ready.font("title").is_some());
        assert!(ready.font("body").is_none());
        assert!(ready.texture("matcap").is_none());
    }
}
