//! # Create Admin Utility
//!
//! Registration over HTTP only ever creates members. This binary creates an
//! `ADMIN` account directly in the SQLite database, which is the only way to
//! obtain one.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package create-admin --bin create_admin
//! ```
//!
//! The program will:
//! 1. Connect to the database at `DATABASE_URL` and apply pending migrations
//! 2. Prompt for name, email and password
//! 3. Refuse if the email is already registered
//! 4. Store the admin with an Argon2 password hash

use lib_auth::{hash_password, MIN_PASSWORD_LENGTH};
use lib_core::model::{Role, UserForCreate};
use lib_core::{create_pool, ensure_database_dir, SqliteUserRepository, UserRepository, MIGRATOR};
use lib_utils::{get_env_or, validate_email, validate_min_length, validate_not_empty};
use std::io::{self, Write};

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    println!("============================================");
    println!("  Create Admin Utility");
    println!("============================================");
    println!();

    let database_url = get_env_or("DATABASE_URL", "sqlite:data/gympass.db");

    println!("Connecting to database...");
    ensure_database_dir(&database_url)?;
    let pool = create_pool(&database_url).await?;
    MIGRATOR.run(&pool).await?;
    println!("Connected successfully.");
    println!();

    let name = prompt("Name")?;
    validate_not_empty(&name, "name").map_err(anyhow::Error::msg)?;

    let email = prompt("Email")?;
    validate_email(&email).map_err(anyhow::Error::msg)?;

    let password = prompt("Password")?;
    validate_min_length(&password, MIN_PASSWORD_LENGTH, "password").map_err(anyhow::Error::msg)?;

    let users = SqliteUserRepository::new(pool);

    if users.find_by_email(&email).await?.is_some() {
        println!("A user with email {} already exists.", email);
        println!("Nothing to do.");
        return Ok(());
    }

    let password_hash = hash_password(&password)?;

    let admin = users
        .create(UserForCreate {
            name,
            email,
            password_hash,
            role: Role::Admin,
        })
        .await?;

    println!();
    println!("Admin created with ID {}.", admin.id);

    Ok(())
}
