//! Canteen CLI - store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed bootstrap admin accounts and the starter catalog
//! canteen seed --admin-password-hash <HASH> --user-admin-password-hash <HASH>
//!
//! # Run the end-of-period group promotion batch
//! canteen promote
//!
//! # Show the groups available for registration
//! canteen groups list
//!
//! # Replace the group registry
//! canteen groups set "Team 1" "Team 2" "Team 3"
//!
//! # List registered users
//! canteen users list
//! ```
//!
//! The data directory is taken from `CANTEEN_DATA_DIR` (default: ./storage).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "canteen")]
#[command(author, version, about = "Canteen management CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed bootstrap admin accounts and the starter catalog
    Seed {
        /// Pre-hashed password for the primary admin account
        #[arg(long)]
        admin_password_hash: String,

        /// Pre-hashed password for the account-management admin
        #[arg(long)]
        user_admin_password_hash: String,
    },
    /// Advance every leveled group by one, graduating top-level members
    Promote,
    /// Manage the group registry
    Groups {
        #[command(subcommand)]
        action: GroupsAction,
    },
    /// Inspect user accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
enum GroupsAction {
    /// Show the groups available for registration
    List,
    /// Replace the registry with the given names
    Set {
        /// Group names, e.g. "Team 1" "Team 2"
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List registered users sorted by id
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    match cli.command {
        Commands::Seed {
            admin_password_hash,
            user_admin_password_hash,
        } => commands::seed::run(&admin_password_hash, &user_admin_password_hash),
        Commands::Promote => commands::promote::run(),
        Commands::Groups { action } => match action {
            GroupsAction::List => commands::groups::list(),
            GroupsAction::Set { names } => commands::groups::set(names),
        },
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list(),
        },
    }
}
