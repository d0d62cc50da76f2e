//! Main application entry point.

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting CertiPadel");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CertiPadel — Certificado de Ascenso")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "certipadel",
        options,
        Box::new(|cc| Ok(Box::new(certipadel_app::CertipadelApp::new(cc)))),
    )
}
