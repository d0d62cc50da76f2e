//! CertiPadel Core Library
//!
//! Domain model for padel category-promotion certificates: modalities and
//! their category catalogs, the certificate input state, validation, and the
//! derived display text (date, action verb, congratulation message).

pub mod catalog;
pub mod input;
pub mod message;

pub use catalog::Modalidad;
pub use input::{CertificateInput, ValidationError};
pub use message::{action_verb, congratulation_message, formatted_fecha};
