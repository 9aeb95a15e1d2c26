#![forbid(unsafe_code)]

fn main() {
    shelf_window_sim::logging::init();
    if let Err(error) = shelf_window_sim::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
