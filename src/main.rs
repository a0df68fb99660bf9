use chapter_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Chapter Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
