use crate::auth::google::GoogleAuthClient;
use crate::db::connection::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod auth;
mod db;
mod errors;
mod filters;
mod labels;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    let db = Database::new("imosearch.sqlite3");

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let backend_url =
        std::env::var("BACKEND_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let state = Arc::new(AppState::new(db, GoogleAuthClient::new(backend_url)));

    let addr: SocketAddr = match "127.0.0.1:3000".parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Invalid bind address: {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
