use std::fs;
use std::path::PathBuf;

use clap::{AppSettings, Clap};
use fern::colors::{Color, ColoredLevelConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use rocket::http::Status;
use rocket::{response::content, routes, State};
use serde::Serialize;

use projectmgmt::config;
use projectmgmt::graphql::{self, Context, Schema};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clap, Serialize)]
#[clap(name = "ProjectMgmt API Server", version = VERSION)]
#[clap(setting = AppSettings::ColoredHelp)]
struct Opts {
    #[clap(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,

    /// Path to a TOML config file
    #[clap(short, long)]
    #[serde(skip)]
    config: Option<PathBuf>,
}

fn setup_logger(log_dir: &std::path::Path) -> Result<(), fern::InitError> {
    let colors_level = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Blue)
        .debug(Color::White)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{}][{}][{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.target(),
                        colors_level.color(record.level()),
                        message
                    ))
                })
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{}][{}][{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.target(),
                        record.level(),
                        message
                    ))
                })
                .chain(fern::DateBased::new(
                    log_dir.join("projectmgmt.server."),
                    "%Y-%m-%d.log",
                )),
        )
        .apply()?;
    Ok(())
}

#[rocket::get("/graphiql")]
fn graphiql() -> content::Html<String> {
    juniper_rocket::graphiql_source("/graphql", None)
}

#[rocket::get("/graphql?<request>")]
async fn get_graphql_handler(
    context: &State<Context>,
    request: juniper_rocket::GraphQLRequest,
    schema: &State<Schema>,
) -> juniper_rocket::GraphQLResponse {
    request.execute(&*schema, &*context).await
}

#[rocket::post("/graphql", data = "<request>")]
async fn post_graphql_handler(
    context: &State<Context>,
    request: juniper_rocket::GraphQLRequest,
    schema: &State<Schema>,
) -> juniper_rocket::GraphQLResponse {
    request.execute(&*schema, &*context).await
}

#[rocket::get("/health")]
fn health() -> Status {
    Status::Ok
}

#[rocket::main]
async fn main() {
    let opts: Opts = Opts::parse();

    let config_file = opts
        .config
        .clone()
        .unwrap_or_else(config::Config::default_file);

    // If we don't have an existing config file, just write the defaults to it
    if !config_file.as_path().exists() {
        if let Some(dir) = config_file.parent() {
            fs::create_dir_all(dir).expect("Unable to create configuration directory");
        }

        let serialized_defaults = toml::to_string(&config::Config::default())
            .expect("Unable to serialize default configuration");
        fs::write(&config_file, serialized_defaults).expect("Unable to write file");
    }

    let figment = Figment::from(Serialized::defaults(config::Config::default()))
        .merge(Toml::file(&config_file))
        .merge(Env::prefixed("PROJECTMGMT_"))
        .merge(Serialized::defaults(opts));

    let config: config::Config = figment
        .extract()
        .expect("The provided configuration is invalid");

    fs::create_dir_all(&config.log_file_path).expect("Unable to create log directory");
    setup_logger(&config.log_file_path).expect("failed to initialize logging.");

    log::info!("ProjectMgmt API Server v{}", VERSION);
    log::info!("Using port {}", config.port);
    log::info!("Using log path {:?}", config.log_file_path);

    let client = mongodb::Client::with_uri_str(&config.database_url)
        .await
        .expect("The provided database url is invalid");
    let db = client.database(&config.database_name);

    log::info!("Using database {}", config.database_name);

    let rocket_figment = rocket::Config::figment().merge(("port", config.port));

    rocket::custom(rocket_figment)
        .manage(Context::new(&db))
        .manage(graphql::schema())
        .mount(
            "/",
            routes![graphiql, get_graphql_handler, post_graphql_handler, health],
        )
        .launch()
        .await
        .expect("Failed to launch the web server");

    log::info!("Shutting down the server");
}
