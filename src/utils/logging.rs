use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Inicializa o subscriber de logs em stderr
///
/// `RUST_LOG` tem precedência sobre o nível configurado.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn log_command_started(command: &str) {
    info!("Comando iniciado: {}", command);
}

pub fn log_command_finished(command: &str, duration_ms: u64) {
    info!("Comando concluído: {} - Duração: {}ms", command, duration_ms);
}

pub fn log_api_error(operation: &str, status: Option<u16>, error: &str) {
    error!("API error: {} - Status: {:?} - Error: {}", operation, status, error);
}

pub fn log_config_loaded(env: &str, base_url: &str) {
    info!("Configuration loaded for environment: {} - API: {}", env, base_url);
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

/// Registra a origem das variáveis de ambiente; chamar depois de `init_logging`
pub fn log_env_file(loaded: bool) {
    if loaded {
        debug!("Variáveis carregadas do arquivo .env");
    } else {
        debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captura(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captura {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capturar(f: impl FnOnce()) -> String {
        let captura = Captura::default();
        let writer = captura.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        let bytes = captura.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_missing_env_file_is_reported_once_subscriber_is_set() {
        let saida = capturar(|| log_env_file(false));
        assert!(saida.contains("Arquivo .env não encontrado"));

        let saida = capturar(|| log_env_file(true));
        assert!(saida.contains("carregadas do arquivo .env"));
    }
}
