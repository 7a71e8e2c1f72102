fn main() {
    relatorios::logging::init();
    if let Err(err) = relatorios::report::run(std::env::args_os()) {
        eprintln!("Ocorreu um erro durante a atualização: {err:#}");
        std::process::exit(1);
    }
}
