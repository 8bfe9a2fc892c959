/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod error;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::debug;

use backend::http::{self, HttpsStrategy};
use catalog::query::IDENTIFIER_PARAM;
use catalog::{
    CatalogPanel, ExportFormat, LinkMode, PanelState, ToolPanel,
};

use error::{Error, Result};

/// Browse, query and export ADTN neutron star catalog data.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// Increase verbosity. This option can be specified multiple times.
    /// The maximum verbosity level is 5.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log output from specific module(s).
    #[clap(long)]
    log_allow_module: Vec<String>,
    /// Ignore log output from specific module(s).
    #[clap(long)]
    log_ignore_module: Vec<String>,
    /// Path to a JSON config file describing the backend connection.
    /// Defaults to the development backend on localhost.
    #[clap(long)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the backend is up.
    Health,
    /// Show the tool menu served by the backend.
    Menu,
    /// List the queryable catalog parameters.
    Params {
        /// Case-insensitive substring filter.
        #[clap(long)]
        filter: Option<String>,
    },
    /// Query the ADTN catalog and print the result table.
    Query {
        /// Comma-separated pulsar JNAMEs; all pulsars when omitted.
        #[clap(long)]
        names: Option<String>,
        /// Parameter to retrieve; can be given multiple times.
        #[clap(long = "param")]
        params: Vec<String>,
        /// Select every parameter (matching --filter, if given).
        #[clap(long)]
        all: bool,
        /// Substring filter applied by --all.
        #[clap(long, default_value = "")]
        filter: String,
        /// Mark rows that have a HEASARC record.
        #[clap(long)]
        links: bool,
        /// Also download the results in this format (csv, json or xlsx).
        #[clap(long)]
        export: Option<ExportFormat>,
        /// Directory for downloaded exports.
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Look up the HEASARC record for a single pulsar.
    Lookup { jname: String },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();

    for module in &args.log_allow_module {
        log_config.add_filter_allow(module.to_string());
    }

    for module in &args.log_ignore_module {
        log_config.add_filter_ignore(module.to_string());
    }

    if let Err(e) = simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Off,
            1 => simplelog::LevelFilter::Error,
            2 => simplelog::LevelFilter::Warn,
            3 => simplelog::LevelFilter::Info,
            4 => simplelog::LevelFilter::Debug,
            5.. => simplelog::LevelFilter::Trace,
        },
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref()).await?;
    debug!("using backend at {}", config.http.base_url(None));

    match args.command {
        Command::Health => {
            let client = backend::Client::new(&config.http).await?;
            let health = client.health().await?;
            println!("{}: {}", health.status, health.message);
        }
        Command::Menu => {
            let client = backend::Client::new(&config.http).await?;
            let menu = client.menu_config().await?;
            let mut sections: Vec<_> = menu.into_values().collect();
            sections.sort_by(|a, b| a.title.cmp(&b.title));
            for section in sections {
                println!("{}", section.title);
                for tool in section.tools {
                    println!(
                        "  {:<22} {}: {}",
                        tool.id, tool.name, tool.description
                    );
                }
            }
        }
        Command::Params { filter } => {
            let client = catalog::Client::new(&config).await?;
            let parameters =
                catalog::ParameterCatalog::new(client.parameters().await?);
            match filter {
                Some(filter) => parameters
                    .filtered(&filter)
                    .into_iter()
                    .for_each(|p| println!("{p}")),
                None => parameters.iter().for_each(|p| println!("{p}")),
            }
        }
        Command::Query {
            names,
            params,
            all,
            filter,
            links,
            export,
            out_dir,
        } => {
            let mut panel = CatalogPanel::new(&config).await?;
            panel.load().await?;

            if let Some(names) = names {
                panel.set_name_filter(&names);
            }
            if all {
                panel.select_all(&filter);
            } else {
                for param in &params {
                    if !panel.catalog().contains(param) {
                        return Err(Error::UnknownParameter(param.clone()));
                    }
                    panel.toggle_parameter(param);
                }
            }
            if panel.selection().is_empty() {
                return Err(Error::EmptySelection);
            }

            match panel.submit_query().await? {
                PanelState::Empty => println!("No results to display."),
                _ => print_table(&panel, links),
            }

            if let Some(format) = export {
                let path = panel.export_as(format, &out_dir).await?;
                println!("Saved export to {}.", path.display());
            }
        }
        Command::Lookup { jname } => {
            let client = catalog::Client::new(&config).await?;
            match client.heasarc_detail(&jname).await {
                Ok(detail) => println!(
                    "{}",
                    serde_json::to_string_pretty(&detail)
                        .unwrap_or_else(|_| detail.to_string())
                ),
                Err(catalog::Error::NotFound(jname)) => {
                    println!("No HEASARC record found for {jname}.")
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

async fn load_config(path: Option<&Path>) -> Result<catalog::Config> {
    match path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::ReadConfig(path.to_path_buf(), e))?;
            serde_json::from_str(&content)
                .map_err(|e| Error::ParseConfig(path.to_path_buf(), e))
        }
        None => Ok(catalog::Config {
            http: http::Config {
                hostname: "localhost".to_string(),
                port: Some(5000),
                ipaddress: None,
                https_strategy: HttpsStrategy::Http,
            },
        }),
    }
}

fn print_table(panel: &CatalogPanel, links: bool) {
    let results = panel.results();
    let mut widths: Vec<usize> =
        results.columns.iter().map(String::len).collect();

    let rendered: Vec<Vec<String>> = results
        .rows
        .iter()
        .map(|row| {
            results
                .columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let mut text = row.get(column).to_string();
                    if links
                        && column == IDENTIFIER_PARAM
                        && panel.link_mode(row) == LinkMode::Interactive
                    {
                        text.push_str(" *");
                    }
                    widths[i] = widths[i].max(text.len());
                    text
                })
                .collect()
        })
        .collect();

    let header = results
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{:<1$}", column, widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for row in &rendered {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{:<1$}", text, widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", line.trim_end());
    }

    if links {
        println!();
        println!("* record available in HEASARC");
    }
}
