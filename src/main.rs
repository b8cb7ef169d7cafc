/// CLI do painel administrativo
///
/// Cada subcomando corresponde a uma operação da API do painel:
/// - valida a entrada como o formulário correspondente fazia
/// - envia a requisição e normaliza a resposta
/// - imprime o resultado JSON em stdout, ou `{message, status?, details?}` em stderr
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::time::Instant;

use painel_admin::config::Settings;
use painel_admin::handlers::agendamentos::BuscaAgendamentos;
use painel_admin::handlers::instancias::NovaInstancia;
use painel_admin::handlers::{agendamentos, configuracoes, instancias, mensagens};
use painel_admin::utils::{logging::*, AppResult};
use painel_admin::AppState;
use painel_api::types::{CreateCompanyPayload, CreateUserPayload, UserModo};
use serde_json::Value;

/// Painel administrativo - agendamentos, instâncias, empresas e usuários
#[derive(Parser)]
#[command(name = "painel-admin")]
#[command(version)]
#[command(about = "CLI do painel administrativo sobre a API REST", long_about = None)]
struct Cli {
    /// URL base da API (sobrescreve a configuração)
    #[arg(long, env = "PAINEL_API_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Cookie de sessão enviado em todas as requisições
    #[arg(long, env = "PAINEL_API_COOKIE", hide_env_values = true, global = true)]
    cookie: Option<String>,

    /// Formato de saída (json, pretty)
    #[arg(short = 'o', long, default_value = "pretty", global = true)]
    output: OutputFormat,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Comando a executar
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, PartialEq)]
enum OutputFormat {
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimativa de valores (pendente, pago, atrasado) em um período
    Estimativa {
        /// Data inicial (AAAA-MM-DD)
        #[arg(long)]
        data_inicial: Option<String>,

        /// Data final (AAAA-MM-DD)
        #[arg(long)]
        data_final: Option<String>,
    },

    /// Consulta de agendamentos
    Agendamentos {
        #[command(subcommand)]
        busca: BuscaCommand,
    },

    /// Estatísticas de pagamentos por status
    Estatisticas,

    /// Envia um arquivo CSV de agendamentos
    UploadCsv {
        /// Caminho do arquivo .csv
        arquivo: Option<PathBuf>,
    },

    /// Gerenciamento de instâncias do gateway de mensagens
    Instancias {
        #[command(subcommand)]
        acao: InstanciasCommand,
    },

    /// Envia uma mensagem de texto
    Mensagem {
        /// Instância de envio (padrão: primeira instância 'open')
        #[arg(short = 'i', long)]
        instancia: Option<String>,

        /// Número do destinatário
        #[arg(short = 'n', long)]
        numero: Option<String>,

        /// Texto da mensagem
        #[arg(short = 't', long)]
        texto: Option<String>,
    },

    /// Gerenciamento de empresas
    Empresas {
        #[command(subcommand)]
        acao: EmpresasCommand,
    },

    /// Gerenciamento de usuários
    Usuarios {
        #[command(subcommand)]
        acao: UsuariosCommand,
    },
}

#[derive(Subcommand)]
enum BuscaCommand {
    /// Todos os agendamentos
    Todos,
    /// Por telefone do cliente
    Telefone { telefone: Option<String> },
    /// Por status de pagamento (pendente, pago, atrasado, cancelado)
    Status { status: Option<String> },
    /// Por documento do cliente
    Documento { documento: Option<String> },
}

#[derive(Subcommand)]
enum InstanciasCommand {
    /// Lista as conexões de todas as instâncias
    Listar,
    /// Lista apenas instâncias com conexão aberta
    Abertas,
    /// Cria uma nova instância
    Criar {
        #[arg(long)]
        nome: Option<String>,

        #[arg(long)]
        numero: Option<String>,

        /// Integração (padrão: WHATSAPP-BAILEYS)
        #[arg(long)]
        integracao: Option<String>,

        /// Chain (padrão: bailes)
        #[arg(long)]
        chain: Option<String>,

        /// Não gerar QR code
        #[arg(long)]
        sem_qrcode: bool,

        #[arg(long)]
        webhook_url: Option<String>,

        #[arg(long)]
        webhook_desativado: bool,

        /// Eventos do webhook separados por vírgula
        #[arg(long)]
        eventos: Option<String>,
    },
    /// Remove uma instância
    Remover { nome: Option<String> },
}

#[derive(Subcommand)]
enum EmpresasCommand {
    Listar,
    Criar {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        cnpj: Option<String>,

        #[arg(long)]
        cpf: Option<String>,

        /// Nome do responsável
        #[arg(long)]
        responsavel: Option<String>,

        /// E-mail do responsável
        #[arg(long)]
        email: String,

        #[arg(long, default_value_t = 0)]
        estado_pagamento: i64,

        #[arg(long, default_value = "BASIC")]
        plano: String,
    },
}

#[derive(Subcommand)]
enum UsuariosCommand {
    Listar,
    Criar {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        username: String,

        /// Nome da empresa
        #[arg(long)]
        empresa: Option<String>,

        /// Data de nascimento (AAAA-MM-DD)
        #[arg(long)]
        nascimento: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        telefone: String,

        #[arg(long)]
        senha: String,

        #[arg(long, default_value = "0")]
        tipo: String,

        #[arg(long)]
        cpf: String,

        #[arg(long)]
        inativo: bool,

        /// Modos habilitados (CHAT, AGENDA, ...); pode ser repetido
        #[arg(long = "modo")]
        modos: Vec<String>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Estimativa { .. } => "estimativa",
            Commands::Agendamentos { .. } => "agendamentos",
            Commands::Estatisticas => "estatisticas",
            Commands::UploadCsv { .. } => "upload-csv",
            Commands::Instancias { .. } => "instancias",
            Commands::Mensagem { .. } => "mensagem",
            Commands::Empresas { .. } => "empresas",
            Commands::Usuarios { .. } => "usuarios",
        }
    }
}

async fn dispatch(state: &AppState, command: Commands) -> AppResult<Value> {
    let client = &state.client;

    match command {
        Commands::Estimativa { data_inicial, data_final } => {
            agendamentos::estimativa(client, data_inicial.as_deref(), data_final.as_deref()).await
        }
        Commands::Agendamentos { busca } => {
            let busca = match busca {
                BuscaCommand::Todos => BuscaAgendamentos::Todos,
                BuscaCommand::Telefone { telefone } => BuscaAgendamentos::Telefone(telefone),
                BuscaCommand::Status { status } => BuscaAgendamentos::Status(status),
                BuscaCommand::Documento { documento } => BuscaAgendamentos::Documento(documento),
            };
            agendamentos::buscar(client, busca).await
        }
        Commands::Estatisticas => agendamentos::estatisticas(client).await,
        Commands::UploadCsv { arquivo } => agendamentos::upload_csv(client, arquivo.as_deref()).await,
        Commands::Instancias { acao } => match acao {
            InstanciasCommand::Listar => instancias::listar(client).await,
            InstanciasCommand::Abertas => instancias::abertas(client).await,
            InstanciasCommand::Criar {
                nome,
                numero,
                integracao,
                chain,
                sem_qrcode,
                webhook_url,
                webhook_desativado,
                eventos,
            } => {
                let form = NovaInstancia {
                    instance_name: nome,
                    number: numero,
                    integration: integracao,
                    chain,
                    qrcode: Some(!sem_qrcode),
                    webhook_url,
                    webhook_enabled: Some(!webhook_desativado),
                    webhook_events: eventos,
                };
                instancias::criar(client, form).await
            }
            InstanciasCommand::Remover { nome } => instancias::remover(client, nome.as_deref()).await,
        },
        Commands::Mensagem { instancia, numero, texto } => {
            mensagens::enviar(client, instancia.as_deref(), numero.as_deref(), texto.as_deref()).await
        }
        Commands::Empresas { acao } => match acao {
            EmpresasCommand::Listar => configuracoes::listar_empresas(client).await,
            EmpresasCommand::Criar {
                nome,
                cnpj,
                cpf,
                responsavel,
                email,
                estado_pagamento,
                plano,
            } => {
                let payload = CreateCompanyPayload {
                    nome,
                    cnpj,
                    cpf,
                    nome_responsavel: responsavel,
                    email_responsavel: email,
                    estado_pagamento,
                    plano_contratado: plano,
                };
                configuracoes::criar_empresa(client, payload).await
            }
        },
        Commands::Usuarios { acao } => match acao {
            UsuariosCommand::Listar => configuracoes::listar_usuarios(client).await,
            UsuariosCommand::Criar {
                nome,
                username,
                empresa,
                nascimento,
                email,
                telefone,
                senha,
                tipo,
                cpf,
                inativo,
                modos,
            } => {
                let payload = CreateUserPayload {
                    nome,
                    username,
                    empresa: empresa.unwrap_or_default(),
                    nascimento,
                    email,
                    telefone,
                    senha,
                    tipo,
                    cpf,
                    ativo: !inativo,
                    modos: modos.into_iter().map(UserModo::from).collect(),
                };
                configuracoes::criar_usuario(client, payload).await
            }
        },
    }
}

fn render(value: &Value, output: &OutputFormat) -> String {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_else(|_| value.to_string())
}

async fn run(cli: Cli, env_file_loaded: bool) -> AppResult<Value> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let mut settings = Settings::new()?;

    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    if let Some(cookie) = cli.cookie {
        settings.api.cookie = Some(cookie);
    }

    let level = if cli.verbose { "debug".to_string() } else { settings.log.level.clone() };
    init_logging(&level);
    log_env_file(env_file_loaded);
    log_config_loaded(&run_mode, &settings.api.base_url);

    let state = AppState::from_settings(settings)?;

    let command_name = cli.command.name();
    let start_time = Instant::now();
    log_command_started(command_name);

    let result = dispatch(&state, cli.command).await;

    log_command_finished(command_name, start_time.elapsed().as_millis() as u64);
    result
}

#[tokio::main]
async fn main() {
    // .env é opcional; em produção as variáveis vêm do ambiente.
    // O registro fica para depois de init_logging.
    let env_file_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();
    let output = cli.output.clone();

    match run(cli, env_file_loaded).await {
        Ok(value) => {
            println!("{}", render(&value, &output));
        }
        Err(err) => {
            let api_error = err.to_api_error();
            log_api_error("painel-admin", api_error.status, &api_error.message);

            let value = serde_json::to_value(&api_error).unwrap_or_else(|_| Value::String(api_error.message.clone()));
            eprintln!("{}", render(&value, &output));
            std::process::exit(err.exit_code());
        }
    }
}
