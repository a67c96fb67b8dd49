use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use shipboard::modules::auth::service::AuthService;
use shipboard_db::{DatabaseConfig, MIGRATOR, PgPool, init_db_pool, run_migrations};
use shipboard_models::RegisterRequest;
use shipboard_observability::init_basic_console_logging;
use validator::Validate;

#[derive(Parser)]
#[command(name = "shipboard-cli")]
#[command(about = "Shipboard CLI - Administrative tools for Shipboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a user account
    CreateUser {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser {
            name,
            email,
            password,
        } => handle_create_user(&pool, name, email, password).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool)
        .await
        .context("Failed to apply migrations")?;

    println!("✅ Database is up to date");
    for migration in MIGRATOR.iter() {
        println!("   {:>14} {}", migration.version, migration.description);
    }

    Ok(())
}

async fn handle_create_user(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email address")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let dto = RegisterRequest {
        name,
        email,
        password,
    };
    dto.validate().map_err(|e| anyhow!("Invalid input: {}", e))?;

    let user = AuthService::register(pool, dto)
        .await
        .map_err(|e| e.error.context("Error creating user"))?;

    println!("\n✅ User created successfully!");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);

    Ok(())
}
