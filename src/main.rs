//! echobox CLI entry point.
//!
//! Anonymous feedback drop box: anyone can submit a categorized, rated
//! message; administrators authenticate to view, filter, and delete entries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use echobox::domain::FeedbackCategory;
use echobox::infra::cli::{admin, submit};
use echobox::infra::db::Database;

#[derive(Parser, Debug)]
#[command(name = "echobox")]
#[command(version)]
#[command(about = "Anonymous feedback drop box", long_about = None)]
struct Args {
    /// Database file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit an anonymous feedback entry
    Submit {
        /// Feedback category: teacher, event, facility, or other
        #[arg(short, long, value_parser = FeedbackCategory::from_str)]
        category: FeedbackCategory,

        /// Star rating from 1 to 5
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
        rating: i32,

        /// Feedback text, at least 10 characters
        #[arg(short, long)]
        message: String,
    },

    /// Administrator console (requires credentials)
    Admin {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// List feedback entries, newest first
    List {
        /// Only show entries in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print entries as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete a feedback entry by id
    Delete {
        /// Id of the entry to delete
        id: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let db = match args.db {
        Some(path) => Database::open_at(path)?,
        None => Database::open()?,
    };

    let outcome = match args.command {
        Commands::Submit {
            category,
            rating,
            message,
        } => submit::submit_feedback(&db, category, rating, &message),
        Commands::Admin {
            username,
            password,
            action,
        } => match action {
            AdminAction::List { category, json } => {
                admin::list_entries(&db, &username, &password, category.as_deref(), json)
            }
            AdminAction::Delete { id } => admin::delete_entry(&db, &username, &password, id),
        },
    };

    db.close();
    outcome
}
