//! Derived display text: localized date, verb agreement, congratulation
//! message. Pure functions of the input, no hidden state.

use crate::catalog::Modalidad;
use crate::input::CertificateInput;
use chrono::{Datelike, NaiveDate};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long-form Spanish date, e.g. `14 de junio de 2025`.
pub fn formatted_fecha(fecha: NaiveDate) -> String {
    let mes = MESES[fecha.month0() as usize];
    format!("{} de {} de {}", fecha.day(), mes, fecha.year())
}

/// The promotion verb, agreeing grammatically with the modality.
pub fn action_verb(modalidad: Modalidad) -> &'static str {
    if modalidad == Modalidad::Damas {
        "promovida"
    } else {
        "promovido"
    }
}

/// Congratulation message for sharing, chosen between two templates: reaching
/// the modality's maximum category, or a regular promotion.
pub fn congratulation_message(input: &CertificateInput) -> String {
    let nombre = {
        let trimmed = input.player_name().trim();
        if trimmed.is_empty() { "Jugador" } else { trimmed }
    };
    let modalidad = input.modalidad();
    let categoria = input.categoria();

    if categoria == modalidad.categoria_maxima() {
        format!(
            "🏆 Felicitaciones {nombre} por alcanzar la categoría máxima {categoria} ({modalidad}).\n\
             Este logro refleja tu nivel, constancia y competitividad.\n\
             Ahora toca defender lo conseguido."
        )
    } else {
        let categoria = if categoria.is_empty() { "—" } else { categoria };
        format!(
            "🎉 Felicitaciones {nombre} por tu ascenso a {categoria} ({modalidad}).\n\
             Tu desempeño y compromiso hicieron que este logro sea totalmente merecido.\n\
             ¡Nos vemos en la próxima categoría!"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_fecha() {
        let fecha = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(formatted_fecha(fecha), "14 de junio de 2025");

        let fecha = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(formatted_fecha(fecha), "1 de enero de 2024");

        let fecha = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(formatted_fecha(fecha), "31 de diciembre de 2026");
    }

    #[test]
    fn test_action_verb_agreement() {
        assert_eq!(action_verb(Modalidad::Damas), "promovida");
        assert_eq!(action_verb(Modalidad::Caballeros), "promovido");
        assert_eq!(action_verb(Modalidad::Mixtos), "promovido");
    }

    fn input(nombre: &str, modalidad: Modalidad, categoria: &str) -> CertificateInput {
        let mut input =
            CertificateInput::with_fecha(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        input.set_player_name(nombre);
        input.set_modalidad(modalidad);
        input.set_categoria(categoria);
        input
    }

    #[test]
    fn test_message_maximum_category_template() {
        let input = input("María", Modalidad::Damas, "D4");
        let msg = congratulation_message(&input);
        assert!(msg.starts_with("🏆 Felicitaciones María por alcanzar la categoría máxima D4 (Damas)."));
        assert!(msg.contains("defender lo conseguido"));
    }

    #[test]
    fn test_message_promotion_template() {
        let input = input("Juan", Modalidad::Caballeros, "C5");
        let msg = congratulation_message(&input);
        assert!(msg.starts_with("🎉 Felicitaciones Juan por tu ascenso a C5 (Caballeros)."));
        assert!(msg.contains("próxima categoría"));
    }

    #[test]
    fn test_message_placeholders() {
        let input = input("  ", Modalidad::Mixtos, "");
        let msg = congratulation_message(&input);
        assert!(msg.contains("Felicitaciones Jugador"));
        assert!(msg.contains("ascenso a — (Mixtos)"));
    }

    #[test]
    fn test_message_is_pure() {
        let input = input("Juan", Modalidad::Caballeros, "C5");
        assert_eq!(congratulation_message(&input), congratulation_message(&input));
        let fecha = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(formatted_fecha(fecha), formatted_fecha(fecha));
    }
}
