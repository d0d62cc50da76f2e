//! UI components using egui.

use certipadel_core::{congratulation_message, CertificateInput, Modalidad};
use certipadel_widgets::{panel_frame, section_label, PrimaryButton, SecondaryButton};

/// What the form panel reported for this frame.
#[derive(Debug, Default)]
pub struct FormResponse {
    /// Any input value changed (the preview must be re-rendered).
    pub changed: bool,
    /// The user asked to copy the congratulation message.
    pub copy_requested: bool,
}

/// The sidebar form: name, modality, category, date, plus the
/// congratulation-message card.
pub fn form_panel(
    ui: &mut egui::Ui,
    input: &mut CertificateInput,
    copied: bool,
) -> FormResponse {
    let mut response = FormResponse::default();

    ui.add_space(4.0);
    ui.heading("Datos del certificado");
    ui.add_space(12.0);

    section_label(ui, "NOMBRE DEL JUGADOR");
    let mut name = input.player_name().to_string();
    let name_edit = egui::TextEdit::singleline(&mut name)
        .hint_text("Nombre del Jugador")
        .desired_width(f32::INFINITY);
    if ui.add(name_edit).changed() {
        input.set_player_name(name);
        response.changed = true;
    }
    ui.add_space(10.0);

    section_label(ui, "MODALIDAD");
    let mut modalidad = input.modalidad();
    egui::ComboBox::from_id_salt("modalidad")
        .selected_text(modalidad.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for m in Modalidad::ALL {
                ui.selectable_value(&mut modalidad, m, m.label());
            }
        });
    if modalidad != input.modalidad() {
        // Switching modality drops the previously selected category.
        input.set_modalidad(modalidad);
        response.changed = true;
    }
    ui.add_space(10.0);

    section_label(ui, "CATEGORÍA");
    let selected = if input.categoria().is_empty() {
        "Seleccionar..."
    } else {
        input.categoria()
    }
    .to_string();
    egui::ComboBox::from_id_salt("categoria")
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for categoria in input.modalidad().categories() {
                let chosen = input.categoria() == *categoria;
                if ui.selectable_label(chosen, *categoria).clicked() {
                    input.set_categoria(*categoria);
                    response.changed = true;
                }
            }
        });
    ui.add_space(10.0);

    section_label(ui, "FECHA");
    let mut fecha = input.fecha();
    let picker = egui_extras::DatePickerButton::new(&mut fecha).id_salt("fecha");
    if ui.add(picker).changed() {
        input.set_fecha(fecha);
        response.changed = true;
    }

    ui.add_space(18.0);
    response.copy_requested = congratulation_card(ui, input, copied);

    response
}

/// Card with the shareable congratulation message and a copy button.
fn congratulation_card(ui: &mut egui::Ui, input: &CertificateInput, copied: bool) -> bool {
    let mut copy_requested = false;
    panel_frame().show(ui, |ui| {
        ui.label(egui::RichText::new("Mensaje de felicitación").strong());
        ui.add_space(6.0);

        let mut mensaje = congratulation_message(input);
        let text = egui::TextEdit::multiline(&mut mensaje)
            .interactive(false)
            .desired_rows(4)
            .desired_width(f32::INFINITY);
        ui.add(text);
        ui.add_space(6.0);

        let label = if copied {
            "Mensaje copiado ✓"
        } else {
            "Copiar mensaje"
        };
        if SecondaryButton::new(label).highlighted(copied).show(ui) {
            copy_requested = true;
        }
    });
    copy_requested
}

/// Preview header: title on the left, download trigger on the right.
/// Returns true when a download was requested. The button is inert while an
/// export is in flight.
pub fn preview_header(ui: &mut egui::Ui, busy: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.heading("Vista Previa");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if busy { "Generando..." } else { "Descargar JPG" };
            if PrimaryButton::new(label)
                .enabled(!busy)
                .min_width(150.0)
                .show(ui)
            {
                clicked = true;
            }
        });
    });
    clicked
}
