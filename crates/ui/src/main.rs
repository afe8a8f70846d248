#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("hexplay"),
        ..Default::default()
    };
    eframe::run_native(
        "hexplay",
        options,
        Box::new(|cc| Ok(Box::new(hexplay_ui::HexplayApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build starts through `hexplay_ui::start` instead.
}
