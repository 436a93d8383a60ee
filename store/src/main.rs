use registry_store::core::App;

fn main() {
    if let Err(e) = App::run() {
        eprintln!("\nError: {}\n", e);
        std::process::exit(App::exit_code(&e));
    }
}
