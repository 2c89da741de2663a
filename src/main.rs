//! quire binary entry point.

fn main() {
    if let Err(err) = quire::cli::run() {
        quire::ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
