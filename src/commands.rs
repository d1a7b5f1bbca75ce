use anyhow::{Context, Result};
use serde_json::Value;

use regsim_backend::{MockBackend, SubmissionBackend};
use regsim_core::AppConfig;
use regsim_router::RouteTable;

pub async fn run_submit(data: String, count: u32) -> Result<()> {
    let raw = if data == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        data
    };
    let payload: Value = serde_json::from_str(&raw).context("payload is not valid JSON")?;

    let backend = MockBackend::new();
    for _ in 0..count {
        match backend.submit(payload.clone()).await {
            Ok(success) => println!("{}", serde_json::to_string(&success)?),
            Err(err) => println!("{}", serde_json::to_string(&err)?),
        }
    }

    Ok(())
}

pub fn run_routes(config: AppConfig) -> Result<()> {
    let table = RouteTable::new(config.router.base_path);
    for entry in table.entries() {
        println!("{:<12} {:<10} \"{}\"", entry.path, entry.name, entry.title);
    }
    Ok(())
}

pub fn run_resolve(config: AppConfig, path: String) -> Result<()> {
    let table = RouteTable::new(config.router.base_path);
    match table.resolve(&path) {
        Some(entry) => println!("{} -> {} (\"{}\")", path, entry.name, entry.title),
        None => println!("{} is not declared in this table", path),
    }
    Ok(())
}
