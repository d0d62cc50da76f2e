//! Certificate input state and export validation.

use crate::catalog::Modalidad;
use chrono::NaiveDate;
use thiserror::Error;

/// Why an export request was rejected before rendering.
///
/// Display strings are the user-facing messages shown by the app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, ingresa el nombre del jugador.")]
    MissingName,
    #[error("Por favor, selecciona una categoría.")]
    MissingCategory,
    #[error(
        "La categoría \"{categoria}\" no es válida para la modalidad {modalidad}. \
         Por favor, selecciona una categoría correcta."
    )]
    InvalidCategory {
        categoria: String,
        modalidad: Modalidad,
    },
}

/// The four values a certificate is rendered from.
///
/// Held only in UI state; mutated through the setters as the user edits the
/// form and discarded when the application exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateInput {
    player_name: String,
    modalidad: Modalidad,
    categoria: String,
    fecha: NaiveDate,
}

impl CertificateInput {
    /// Fresh session state: empty name, default modality, no category,
    /// today's local date.
    pub fn new() -> Self {
        Self::with_fecha(chrono::Local::now().date_naive())
    }

    /// Like [`CertificateInput::new`] but with an explicit date.
    pub fn with_fecha(fecha: NaiveDate) -> Self {
        Self {
            player_name: String::new(),
            modalidad: Modalidad::default(),
            categoria: String::new(),
            fecha,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn modalidad(&self) -> Modalidad {
        self.modalidad
    }

    pub fn categoria(&self) -> &str {
        &self.categoria
    }

    pub fn fecha(&self) -> NaiveDate {
        self.fecha
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// Change the modality. Always clears the selected category: a category
    /// chosen under another modality is never valid export input.
    pub fn set_modalidad(&mut self, modalidad: Modalidad) {
        if self.modalidad != modalidad {
            self.categoria.clear();
        }
        self.modalidad = modalidad;
    }

    pub fn set_categoria(&mut self, categoria: impl Into<String>) {
        self.categoria = categoria.into();
    }

    pub fn set_fecha(&mut self, fecha: NaiveDate) {
        self.fecha = fecha;
    }

    /// Synchronous pre-export validation. Checks run in a fixed order and
    /// the first failure wins; nothing is mutated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.player_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.categoria.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if !self.modalidad.is_valid_category(&self.categoria) {
            return Err(ValidationError::InvalidCategory {
                categoria: self.categoria.clone(),
                modalidad: self.modalidad,
            });
        }
        Ok(())
    }

    /// Suggested name for the downloaded file.
    pub fn download_file_name(&self) -> String {
        let name = if self.player_name.is_empty() {
            "Jugador"
        } else {
            self.player_name.as_str()
        };
        format!("Certificado_OTP_{name}.jpg")
    }
}

impl Default for CertificateInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CertificateInput {
        CertificateInput::with_fecha(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap())
    }

    #[test]
    fn test_session_start_state() {
        let input = input();
        assert!(input.player_name().is_empty());
        assert_eq!(input.modalidad(), Modalidad::Caballeros);
        assert!(input.categoria().is_empty());
    }

    #[test]
    fn test_modality_switch_resets_category() {
        for from in Modalidad::ALL {
            for to in Modalidad::ALL {
                if from == to {
                    continue;
                }
                let mut input = input();
                input.set_modalidad(from);
                input.set_categoria(from.categories()[0]);
                input.set_modalidad(to);
                assert!(
                    input.categoria().is_empty(),
                    "switching {from} -> {to} kept a stale category"
                );
            }
        }
    }

    #[test]
    fn test_same_modality_keeps_category() {
        let mut input = input();
        input.set_categoria("C5");
        input.set_modalidad(Modalidad::Caballeros);
        assert_eq!(input.categoria(), "C5");
    }

    #[test]
    fn test_validate_missing_name() {
        let mut input = input();
        input.set_categoria("C5");
        assert_eq!(input.validate(), Err(ValidationError::MissingName));

        input.set_player_name("   ");
        assert_eq!(input.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_validate_missing_category() {
        let mut input = input();
        input.set_player_name("Juan");
        assert_eq!(input.validate(), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn test_validate_category_from_other_modality() {
        let mut input = input();
        input.set_player_name("Juan");
        // A valid Damas category forced under Caballeros.
        input.set_categoria("D6");
        assert_eq!(
            input.validate(),
            Err(ValidationError::InvalidCategory {
                categoria: "D6".to_string(),
                modalidad: Modalidad::Caballeros,
            })
        );
    }

    #[test]
    fn test_validate_ok() {
        let mut input = input();
        input.set_player_name("Juan");
        input.set_categoria("C5");
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn test_validation_order_name_first() {
        // Both name and category are missing: the name check wins.
        let input = input();
        assert_eq!(input.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_download_file_name() {
        let mut input = input();
        input.set_player_name("Ana López");
        assert_eq!(input.download_file_name(), "Certificado_OTP_Ana López.jpg");
    }

    #[test]
    fn test_download_file_name_placeholder() {
        assert_eq!(input().download_file_name(), "Certificado_OTP_Jugador.jpg");
    }

    #[test]
    fn test_validation_messages_are_spanish() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "Por favor, ingresa el nombre del jugador."
        );
        assert_eq!(
            ValidationError::MissingCategory.to_string(),
            "Por favor, selecciona una categoría."
        );
        let err = ValidationError::InvalidCategory {
            categoria: "D6".to_string(),
            modalidad: Modalidad::Caballeros,
        };
        assert_eq!(
            err.to_string(),
            "La categoría \"D6\" no es válida para la modalidad Caballeros. \
             Por favor, selecciona una categoría correcta."
        );
    }
}
