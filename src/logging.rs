use tracing_subscriber::{EnvFilter, fmt};

/// Liga o log no terminal. `RUST_LOG` sobrepõe o nível padrão `info`.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // ignora se já houver um subscriber global (testes, chamadas repetidas)
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
