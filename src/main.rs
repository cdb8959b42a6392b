use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::{error, info, Instrument};

use product_admin::app_system::{setup_tracing, AdminSystem};
use product_admin::config::{ApiConfig, DEFAULT_BASE_URL};
use product_admin::domain::{ProductForm, SelectedFile, UploadedImageUrl};
use product_admin::upload::UploadOutcome;

/// Admin tool for the shop's product catalogue.
#[derive(Debug, Parser)]
#[command(name = "product_admin", version)]
struct Cli {
    /// Base URL of the shop API.
    #[arg(long, env = "PRODUCT_ADMIN_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all products.
    List,
    /// Create a product from a JSON object, optionally uploading its image first.
    Add {
        #[arg(long)]
        json: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Replace a product's fields with a JSON object.
    Edit {
        id: String,
        #[arg(long)]
        json: String,
    },
    /// Delete a product by id.
    Delete {
        id: String,
    },
    /// Upload a PNG or JPEG and print its URL.
    Upload {
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.base_url).map_err(|e| e.to_string())?;
    let system = AdminSystem::new(config).map_err(|e| e.to_string())?;

    let result = run(&system, cli.command).await;
    system.shutdown().await?;

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}

async fn run(system: &AdminSystem, command: Command) -> Result<(), String> {
    match command {
        Command::List => {
            let products = system.store.fetch_all_products().await.map_err(|e| e.to_string())?;
            info!(product_count = products.len(), "Retrieved product list");
            for product in products {
                println!("{}", product.as_value());
            }
        }
        Command::Add { json, image } => {
            let mut form = parse_form(&json)?;
            if let Some(path) = image {
                let url = upload(system, &path)
                    .instrument(tracing::info_span!("image_upload_step"))
                    .await?;
                form = form.with_image(&url);
            }
            let response = system.store.add_new_product(form).await.map_err(|e| e.to_string())?;
            println!("{response}");
        }
        Command::Edit { id, json } => {
            let form = parse_form(&json)?;
            let response = system.store.edit_product(id, form).await.map_err(|e| e.to_string())?;
            println!("{response}");
        }
        Command::Delete { id } => {
            let response = system.store.delete_product(id).await.map_err(|e| e.to_string())?;
            println!("{response}");
        }
        Command::Upload { path } => {
            let url = upload(system, &path).await?;
            println!("{url}");
        }
    }
    Ok(())
}

async fn upload(system: &AdminSystem, path: &Path) -> Result<UploadedImageUrl, String> {
    let file = load_file(path).await?;
    let task = system
        .image_upload
        .pick_file(Some(file))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "Upload control is in edit mode".to_string())?;

    match task.outcome().await {
        UploadOutcome::Uploaded(url) => Ok(url),
        UploadOutcome::Superseded => Err("Upload superseded by a newer selection".to_string()),
        UploadOutcome::Failed(e) => Err(e.to_string()),
    }
}

async fn load_file(path: &Path) -> Result<SelectedFile, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SelectedFile::new(name, mime_type_for(path), bytes))
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

fn parse_form(json: &str) -> Result<ProductForm, String> {
    let fields: Map<String, Value> =
        serde_json::from_str(json).map_err(|e| format!("Form must be a JSON object: {e}"))?;
    Ok(ProductForm::from(fields))
}
