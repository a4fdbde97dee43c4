use colored::*;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 72;

pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <migration::Migrator as MigratorTrait>::migrations() {
        apply_migration(&schema_manager, migration.as_ref()).await;
    }
}

async fn apply_migration(schema_manager: &SchemaManager<'_>, migration: &dyn MigrationTrait) {
    let label = format!("Applying {}", migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{}{} ", label, dots);
    io::stdout().flush().unwrap();

    let start = Instant::now();
    match migration.up(schema_manager).await {
        Ok(()) => {
            let elapsed = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), elapsed);
        }
        Err(err) => {
            println!("{}: {}", "failed".red(), err);
            std::process::exit(1);
        }
    }
}
