fn main() {
    sniper_cli::logging::init();
    let code = sniper_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
