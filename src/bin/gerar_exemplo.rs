fn main() {
    relatorios::logging::init();
    if let Err(e) = relatorios::sample::run(std::env::args_os()) {
        eprintln!("Ocorreu um erro ao criar o arquivo de exemplo: {e:#}");
        std::process::exit(1);
    }
}
