//! System font discovery.
//!
//! The certificate typography needs a sans-serif family at three weights.
//! Faces are resolved once through the system font database and parsed for
//! glyph rasterization; missing heavier weights fall back to the nearest
//! lighter one.

use crate::renderer::RenderError;
use rusttype::Font;

/// Preferred families, tried before the generic sans-serif fallback.
const PREFERRED_FAMILIES: &[&str] = &["Montserrat", "DejaVu Sans", "Liberation Sans", "Arial"];

/// Parsed fonts for the three weights the certificate uses.
#[derive(Clone)]
pub struct FontLibrary {
    regular: Font<'static>,
    bold: Font<'static>,
    heavy: Font<'static>,
}

impl FontLibrary {
    /// Resolve fonts from the system database.
    ///
    /// Fails only when no sans-serif face exists at all; individual weight
    /// misses degrade to the regular face.
    pub fn load() -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(&db)
    }

    /// Resolve fonts from an explicit database (shared or pre-filled).
    pub fn from_database(db: &fontdb::Database) -> Result<Self, RenderError> {
        let regular = query_face(db, fontdb::Weight::NORMAL).ok_or_else(|| {
            RenderError::FontsUnavailable(
                "no sans-serif face found in the system font database".to_string(),
            )
        })?;
        let bold = query_face(db, fontdb::Weight::BOLD).unwrap_or_else(|| regular.clone());
        let heavy = query_face(db, fontdb::Weight::EXTRA_BOLD)
            .or_else(|| query_face(db, fontdb::Weight::BLACK))
            .unwrap_or_else(|| bold.clone());
        Ok(Self {
            regular,
            bold,
            heavy,
        })
    }

    pub fn regular(&self) -> &Font<'static> {
        &self.regular
    }

    pub fn bold(&self) -> &Font<'static> {
        &self.bold
    }

    /// Heaviest available weight, used for the title, name and category.
    pub fn heavy(&self) -> &Font<'static> {
        &self.heavy
    }
}

fn query_face(db: &fontdb::Database, weight: fontdb::Weight) -> Option<Font<'static>> {
    let mut families: Vec<fontdb::Family> = PREFERRED_FAMILIES
        .iter()
        .map(|&name| fontdb::Family::Name(name))
        .collect();
    families.push(fontdb::Family::SansSerif);

    let query = fontdb::Query {
        families: &families,
        weight,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query)?;
    let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    let font = Font::try_from_vec_and_index(data, index);
    if font.is_none() {
        log::warn!("System face {id:?} could not be parsed, skipping");
    }
    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_is_an_error() {
        let db = fontdb::Database::new();
        assert!(matches!(
            FontLibrary::from_database(&db),
            Err(RenderError::FontsUnavailable(_))
        ));
    }

    #[test]
    fn test_system_load_is_all_or_nothing() {
        // Either the host has a usable sans-serif font and all three weights
        // resolve, or the load fails cleanly. Both are acceptable here.
        if let Ok(fonts) = FontLibrary::load() {
            assert!(fonts.regular().glyph_count() > 0);
            assert!(fonts.bold().glyph_count() > 0);
            assert!(fonts.heavy().glyph_count() > 0);
        }
    }
}
