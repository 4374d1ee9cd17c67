#![allow(clippy::print_stdout)]

mod args;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use folio::domain::config::AppConfig;
use folio::kernel::config::load_config;
use folio::{Application, features};
use folio_logger::Logger;
use serde_json::json;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(cli.config.as_deref()).context("loading configuration")?;
    let _logger = Logger::builder()
        .name(config.name.clone())
        .format(cli.log_format)
        .level(cli.level())
        .init()?;

    let mut app = Application::builder().config(config).build()?;
    folio::init(&mut app)?;

    if let Some(lang) = cli.lang {
        app.locale().set_language(lang);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot(&app))?);
    } else {
        print_table(&app);
    }

    let disposed = app.shutdown();
    info!(disposed, "Shell finished");
    Ok(())
}

fn snapshot(app: &Application) -> serde_json::Value {
    json!({
        "name": app.config().name,
        "language": app.locale().current(),
        "features": features::ENABLED,
        "routes": app.routes(),
        "views": app.views(),
    })
}

fn print_table(app: &Application) {
    let language = app.locale().current().map_or_else(|| "-".to_owned(), |key| key.to_string());
    println!(
        "{}: {} routes, {} views, language {language}",
        app.config().name,
        app.routes().len(),
        app.views().len()
    );

    for mounted in app.routes().iter() {
        let route = &mounted.route;
        let roles: Vec<&str> = route.authorities.roles().collect();
        println!(
            "  {:<20} {:<8} {:<22} {:<10} {}",
            mounted.full_path,
            route.outlet.as_str(),
            route.view.as_str(),
            roles.join(","),
            route.default_sort.as_deref().map_or_else(String::new, |sort| format!("sort={sort}")),
        );
    }
}
