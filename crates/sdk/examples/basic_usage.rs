//! Basic SDK usage example.
//!
//! Reads the API key from `ROCKETLANE_API_KEY`, fetches a project and lists
//! its open tasks.
//!
//! Run with: cargo run --example basic_usage -- <project-id>

use rocketlane_sdk::{EnvCredentialStore, Params, RocketlaneClient, RocketlaneResult};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> RocketlaneResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let project_id = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());

    let client = RocketlaneClient::builder()
        .credentials(Arc::new(EnvCredentialStore::default()))
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Fetching project {project_id}...");
    match client.projects().get(&project_id, Params::new()).await? {
        Some(project) => println!(
            "Project: {}",
            project.get("projectName").and_then(Value::as_str).unwrap_or("<unnamed>")
        ),
        None => println!("Project returned no content"),
    }

    println!("\nListing tasks...");
    let params = Params::new()
        .set("projectId_eq", project_id.as_str())
        .set("includeArchive_eq", false)
        .set("pageSize", 10);
    let tasks = client.tasks().list(params).await?;

    let data = tasks
        .as_ref()
        .and_then(|page| page.get("data"))
        .and_then(Value::as_array);
    match data {
        Some(tasks) => {
            println!("Found {} tasks", tasks.len());
            for task in tasks {
                println!(
                    "  Task {}: {}",
                    task.get("taskId").unwrap_or(&Value::Null),
                    task.get("taskName").and_then(Value::as_str).unwrap_or("")
                );
            }
        }
        None => println!("No tasks returned"),
    }

    println!("\nAvailable operations: {}", client.operations().len());

    Ok(())
}
