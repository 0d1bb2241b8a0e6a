use dotenvy::dotenv;
use invoice_dashboard::{
    config::{AppConfig, database, seed},
    core::{
        cards::{self, CardData},
        invoice::{self, LatestInvoice},
        revenue,
    },
    entities::RevenueModel,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG can come from it
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect and make sure the tables exist
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed placeholder data if a seed file is configured
    if let Some(seed_file) = &app_config.seed_file {
        let seed_data = seed::load_seed_data(seed_file)?;
        invoice_dashboard::core::seed::seed_database(&db, &seed_data)
            .await
            .inspect_err(|e| error!("Failed to seed database: {}", e))?;
    }

    // 6. Read the dashboard
    let card_data = cards::fetch_card_data(&db).await?;
    let latest = invoice::fetch_latest_invoices(
        &db,
        Some(app_config.latest_invoices_limit),
        None,
    )
    .await?;
    let revenue = revenue::fetch_revenue(&db).await?;

    print_dashboard(&card_data, &latest, &revenue);
    Ok(())
}

fn print_dashboard(card_data: &CardData, latest: &[LatestInvoice], revenue: &[RevenueModel]) {
    println!("Customers: {}", card_data.number_of_customers);
    println!("Invoices:  {}", card_data.number_of_invoices);
    for (status, total) in &card_data.status_summary {
        println!("  {status:<10} {total:>14}");
    }

    println!("\nLatest invoices");
    for invoice in latest {
        println!(
            "  {:<24} {:<28} {:>14}",
            invoice.name, invoice.email, invoice.amount
        );
    }

    println!("\nRevenue");
    for row in revenue {
        println!("  {:<6} {:>10}", row.month, row.revenue);
    }
}
