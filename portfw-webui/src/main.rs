#[cfg(target_arch = "wasm32")]
fn main() {
    portfw_webui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("portfw-webui runs in the browser; build it for wasm32-unknown-unknown with trunk.");
}
