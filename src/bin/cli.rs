//! catalogd CLI Client
//!
//! Command-line interface for interacting with catalogd.

use std::process::ExitCode;

use catalogd::network::Client;
use catalogd::protocol::{Request, Response, StatusCode};
use catalogd::store::NewCategory;
use clap::{Parser, Subcommand};

/// catalogd CLI
#[derive(Parser, Debug)]
#[command(name = "catalogd-cli")]
#[command(about = "CLI for the catalogd category server")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Echo a body back
    Echo {
        /// The body to echo
        body: String,
    },

    /// Read one category, or all of them
    Read {
        /// Category id (omit to list)
        id: Option<i64>,
    },

    /// Create a category
    Create {
        /// Name of the new category
        name: String,
    },

    /// Rename a category
    Update {
        /// Category id
        id: i64,

        /// New name
        name: String,
    },

    /// Delete a category
    Delete {
        /// Category id
        id: i64,
    },

    /// Send a raw JSON request as-is
    Raw {
        /// The request JSON
        json: String,
    },
}

const COLLECTION: &str = "/api/categories";

fn main() -> ExitCode {
    let args = Args::parse();
    let client = Client::new(&args.server);

    let result = match args.command {
        Commands::Raw { json } => client
            .send_raw(json.as_bytes())
            .and_then(|raw| catalogd::protocol::decode_response(&raw)),
        command => build_request(command).and_then(|request| client.send(&request)),
    };

    match result {
        Ok(response) => {
            print_response(&response);
            if response.status() == StatusCode::Error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_request(command: Commands) -> catalogd::Result<Request> {
    let request = match command {
        Commands::Echo { body } => Request::builder().method("echo").body(body),
        Commands::Read { id } => Request::builder().method("read").path(path_for(id)),
        Commands::Create { name } => Request::builder()
            .method("create")
            .path(COLLECTION)
            .body(category_json(name)?),
        Commands::Update { id, name } => Request::builder()
            .method("update")
            .path(path_for(Some(id)))
            .body(category_json(name)?),
        Commands::Delete { id } => Request::builder().method("delete").path(path_for(Some(id))),
        Commands::Raw { .. } => {
            return Err(catalogd::CatalogError::Protocol(
                "raw requests are sent unmodified".to_string(),
            ))
        }
    };

    Ok(request.date_now().build())
}

fn path_for(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{}/{}", COLLECTION, id),
        None => COLLECTION.to_string(),
    }
}

fn category_json(name: String) -> catalogd::Result<String> {
    serde_json::to_string(&NewCategory::new(name))
        .map_err(|e| catalogd::CatalogError::Serialization(e.to_string()))
}

fn print_response(response: &Response) {
    println!("{}", response.status());
    if let Some(body) = response.body() {
        println!("{}", body);
    }
}
