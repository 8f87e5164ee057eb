use clap::{Parser, Subcommand};
use tutorials_core::{
    connect, database_url_from_env_value, CoreConfig, Tutorial, TutorialPatch, TutorialService,
};

#[derive(Parser)]
#[command(name = "tutorials")]
#[command(about = "Tutorial records admin CLI")]
struct Cli {
    /// Backing store connection string (`memory://` for a throwaway store)
    #[arg(long, env = "MONGODB_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tutorials
    List {
        /// Only tutorials whose title contains this text (case-insensitive)
        #[arg(long)]
        title: Option<String>,
    },
    /// List published tutorials
    Published,
    /// Show one tutorial
    Show {
        /// Tutorial id
        id: String,
    },
    /// Create a tutorial
    Create {
        /// Title (required, non-blank)
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Mark as published
        #[arg(long)]
        published: bool,
    },
    /// Update fields of a tutorial
    Update {
        /// Tutorial id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        published: Option<bool>,
    },
    /// Delete a tutorial
    Delete {
        /// Tutorial id
        id: String,
    },
    /// Delete every tutorial
    DeleteAll,
}

fn print_tutorial(t: &Tutorial) {
    println!(
        "ID: {}, Title: {}, Published: {}, Updated: {}",
        t.id,
        t.title,
        t.published,
        t.updated_at.to_rfc3339()
    );
    if let Some(description) = &t.description {
        println!("    {}", description);
    }
}

fn print_list(tutorials: &[Tutorial]) {
    if tutorials.is_empty() {
        println!("No tutorials found.");
    } else {
        tutorials.iter().for_each(print_tutorial);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'tutorials --help' for commands");
        return Ok(());
    };

    let cfg = CoreConfig::new(database_url_from_env_value(cli.db_url))?;
    let service = TutorialService::new(connect(&cfg).await?);

    match command {
        Commands::List { title } => match service.list(title.as_deref()).await {
            Ok(tutorials) => print_list(&tutorials),
            Err(e) => eprintln!("Error listing tutorials: {}", e),
        },
        Commands::Published => match service.list_published().await {
            Ok(tutorials) => print_list(&tutorials),
            Err(e) => eprintln!("Error listing published tutorials: {}", e),
        },
        Commands::Show { id } => match service.get(&id).await {
            Ok(tutorial) => print_tutorial(&tutorial),
            Err(e) => eprintln!("Error reading tutorial: {}", e),
        },
        Commands::Create {
            title,
            description,
            published,
        } => match service
            .create(Some(title), description, Some(published))
            .await
        {
            Ok(tutorial) => println!("Created tutorial with ID: {}", tutorial.id),
            Err(e) => eprintln!("Error creating tutorial: {}", e),
        },
        Commands::Update {
            id,
            title,
            description,
            published,
        } => {
            let patch = TutorialPatch {
                title,
                description,
                published,
            };
            match service.update(&id, patch).await {
                Ok(tutorial) => print_tutorial(&tutorial),
                Err(e) => eprintln!("Error updating tutorial: {}", e),
            }
        }
        Commands::Delete { id } => match service.delete(&id).await {
            Ok(_) => println!("Deleted tutorial with ID: {}", id),
            Err(e) => eprintln!("Error deleting tutorial: {}", e),
        },
        Commands::DeleteAll => match service.delete_all().await {
            Ok(count) => println!("{} Tutorials were deleted successfully!", count),
            Err(e) => eprintln!("Error deleting tutorials: {}", e),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_update_flags() {
        let cli = Cli::try_parse_from([
            "tutorials",
            "--db-url",
            "memory://",
            "update",
            "65a1f0c2b3d4e5f601234567",
            "--published",
            "true",
        ])
        .unwrap();

        assert_eq!(cli.db_url.as_deref(), Some("memory://"));
        match cli.command {
            Some(Commands::Update {
                id,
                title,
                published,
                ..
            }) => {
                assert_eq!(id, "65a1f0c2b3d4e5f601234567");
                assert_eq!(title, None);
                assert_eq!(published, Some(true));
            }
            _ => panic!("expected update command"),
        }
    }
}
