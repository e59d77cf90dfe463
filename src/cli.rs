use config_bindr::{
    CaseStyle, ConfigError, Extract, ExtractorArgs, ExtractorOptions, Source, extract,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Extract)]
pub struct ServerConfig {
    #[field(name = "TEST_STRING")]
    pub test_string: String,
    #[field(name = "TEST_INT")]
    pub test_int: i64,
    #[field(name = "TEST_BOOL_TRUE")]
    pub test_bool: bool,
    pub port: u16,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            test_string: "unset".to_string(),
            test_int: 123,
            test_bool: false,
            port: 8080,
            verbose: false,
        }
    }
}

#[derive(Debug, Default, Extract)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    #[field(skip)]
    pub pool: u32,
}

#[derive(Debug, Default, Extract)]
pub struct ErrorConfig {
    #[field(name = "TEST_WRONG_TYPE")]
    pub test_wrong_type: i32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(arg) => match arg.as_str() {
            "default" => test_with_config(),
            "args-first" => test_with_args_first(),
            "error" => test_with_config_error(),
            "docs" => generate_docs(),
            _ => println!(
                "unknown arg: {}. Available: default, args-first, error, docs",
                arg
            ),
        },
        None => {
            println!("Usage: util-cli [command] [--name=value ...]");
            println!("Commands:");
            println!("  default    - Bind config from test.env, the environment and arguments");
            println!("  args-first - Same, but arguments win over the environment");
            println!("  error      - Bind a config whose value has the wrong type");
            println!("  docs       - Generate CONFIG.md documentation");
        }
    };
}

fn options() -> ExtractorOptions {
    ExtractorOptions::new()
        .with_env_file("./test.env")
        .omit_missing_env_file(true)
}

fn bind(options: ExtractorOptions) -> Result<(ServerConfig, DatabaseConfig), ConfigError> {
    let mut server = ServerConfig::default();
    let mut database = DatabaseConfig {
        host: "localhost".to_string(),
        port: 5432,
        pool: 10,
    };
    let report = extract(
        ExtractorArgs::new(options)
            .config(&mut server, "")
            .config(&mut database, "db"),
    )?;
    println!("Resolved fields:");
    print!("{}", report);
    Ok((server, database))
}

fn print_configs(server: &ServerConfig, database: &DatabaseConfig) {
    println!("Config loaded successfully!");
    println!("  test_string: {}", server.test_string);
    println!("  test_int: {}", server.test_int);
    println!("  test_bool: {}", server.test_bool);
    println!("  port: {}", server.port);
    println!("  verbose: {}", server.verbose);
    println!("  db.host: {}", database.host);
    println!("  db.port: {}", database.port);
    println!("  db.pool: {}", database.pool);
}

fn test_with_config() {
    match bind(options()) {
        Ok((server, database)) => print_configs(&server, &database),
        Err(e) => eprintln!("Failed to load config:\n\t- {}", e.escalate()),
    }
}

fn test_with_args_first() {
    let options = options()
        .with_precedence([Source::CmdArgs, Source::OsEnv])
        .with_cmd_args_case(CaseStyle::Kebab);
    match bind(options) {
        Ok((server, database)) => print_configs(&server, &database),
        Err(e) => eprintln!("Failed to load config:\n\t- {}", e.escalate()),
    }
}

fn test_with_config_error() {
    let mut config = ErrorConfig::default();
    let result = extract(ExtractorArgs::new(options()).config(&mut config, ""));
    match result {
        Ok(_) => println!("you should not see this"),
        Err(e) => {
            let kind = if e.is_fatal() { "fatal" } else { "reported" };
            eprintln!("Failed to load config ({}):", kind);
            eprintln!("\t- {}", e);
        }
    }
    println!("all done");
}

fn generate_docs() {
    println!("Generating documentation for ServerConfig and DatabaseConfig...");
    let mut server = ServerConfig::default();
    let mut database = DatabaseConfig::default();
    let report = match extract(
        ExtractorArgs::new(options())
            .config(&mut server, "")
            .config(&mut database, "db"),
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("✗ Failed to load config: {}", e);
            return;
        }
    };
    match report.write_docs("CONFIG.md") {
        Ok(_) => println!("✓ Documentation written to CONFIG.md"),
        Err(e) => eprintln!("✗ Failed to write documentation: {}", e),
    }
}
