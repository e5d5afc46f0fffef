//! Seed the database with demo products.
//!
//! Inserts a fixed set of sample products through the real inventory
//! service, so seeding exercises the same validation as the API.
//! Products whose SKU already exists are skipped, making the command
//! safe to re-run.

use tracing::info;

use stockroom_server::config::ServerConfig;
use stockroom_server::db::{self, PgProductStore};
use stockroom_server::services::inventory::{
    CreateProductInput, InventoryError, InventoryService,
};

/// Insert demo products.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is
/// unreachable, or a product fails validation.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    let service = InventoryService::new(PgProductStore::new(pool));

    let mut seeded = 0;
    let mut skipped = 0;
    for input in demo_products() {
        let sku = input.sku.clone();
        match service.create_product(input).await {
            Ok(product) => {
                info!(sku = %product.sku, "Seeded product");
                seeded += 1;
            }
            Err(InventoryError::SkuTaken) => {
                info!(sku = %sku, "Product already exists, skipping");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(seeded, skipped, "Seeding complete");
    Ok(())
}

fn demo_products() -> Vec<CreateProductInput> {
    [
        ("Claw Hammer", "tool", "TL-HAM-001", 24, 12.50),
        ("Cordless Drill", "tool", "TL-DRL-002", 8, 89.99),
        ("Safety Goggles", "safety", "SF-GOG-001", 60, 6.75),
        ("Work Gloves", "safety", "SF-GLV-002", 45, 9.25),
        ("Wood Screws (100)", "fastener", "FS-SCR-001", 120, 4.99),
        ("Hex Bolts (50)", "fastener", "FS-BLT-002", 80, 7.40),
    ]
    .into_iter()
    .map(|(name, product_type, sku, quantity, price)| CreateProductInput {
        name: name.to_owned(),
        product_type: product_type.to_owned(),
        sku: sku.to_owned(),
        image_url: None,
        description: None,
        quantity: Some(quantity),
        price: Some(price),
    })
    .collect()
}
