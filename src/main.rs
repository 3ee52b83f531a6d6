use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use bloglist::auth::{self, AuthError};
use bloglist::stats::{self, StatsError};
use bloglist::store::{BlogStore, NewBlog, NewUser, StoreError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
}

#[derive(Parser)]
#[command(name = "bloglist")]
#[command(about = "Manage a bloglist document store from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new document store
    Init {
        /// Store path
        #[arg(long, default_value = ".bloglist", env = "BLOGLIST_PATH")]
        path: PathBuf,
    },

    /// Add a user account
    AddUser {
        /// Login name, unique across the store
        username: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Password to hash and store
        #[arg(long)]
        password: String,

        /// Store path
        #[arg(long, default_value = ".bloglist", env = "BLOGLIST_PATH")]
        path: PathBuf,
    },

    /// Add a blog entry
    AddBlog {
        /// Blog title
        title: String,

        /// Link to the entry
        #[arg(long)]
        url: String,

        /// Author name
        #[arg(long)]
        author: Option<String>,

        /// Initial like count
        #[arg(long, default_value_t = 0)]
        likes: u64,

        /// Username of the creating user
        #[arg(long)]
        user: Option<String>,

        /// Store path
        #[arg(long, default_value = ".bloglist", env = "BLOGLIST_PATH")]
        path: PathBuf,
    },

    /// List all blog entries
    List {
        /// Store path
        #[arg(long, default_value = ".bloglist", env = "BLOGLIST_PATH")]
        path: PathBuf,
    },

    /// Print statistics over the blog collection
    Stats {
        /// Store path
        #[arg(long, default_value = ".bloglist", env = "BLOGLIST_PATH")]
        path: PathBuf,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => {
            BlogStore::init(&path)?;
            println!("Initialized store at {}", path.display());
        }

        Commands::AddUser {
            username,
            name,
            password,
            path,
        } => {
            let store = BlogStore::open(&path)?;
            let password_hash = auth::hash_password(&password)?;

            let mut new = NewUser::new(username, password_hash);
            new.name = name;

            let user = store.add_user(new)?;
            println!("Added user {} ({})", user.username, user.id);
        }

        Commands::AddBlog {
            title,
            url,
            author,
            likes,
            user,
            path,
        } => {
            let store = BlogStore::open(&path)?;

            let mut new = NewBlog::new(title, url).with_likes(likes);
            new.author = author;
            if let Some(username) = user {
                let owner = store
                    .find_user_by_username(&username)?
                    .ok_or(StoreError::UserNotFound(username))?;
                new = new.with_user(owner.id);
            }

            let blog = store.add_blog(new)?;
            println!("Added blog {} ({})", blog.title, blog.id);
        }

        Commands::List { path } => {
            let store = BlogStore::open(&path)?;
            for blog in store.list_blogs()? {
                let author = blog.author.as_deref().unwrap_or("-");
                println!("{}  {}  by {}  ({} likes)", blog.id, blog.title, author, blog.likes);
            }
        }

        Commands::Stats { path } => {
            let store = BlogStore::open(&path)?;
            let blogs = store.list_blogs()?;

            println!("blogs: {}", blogs.len());
            println!("total likes: {}", stats::total_likes(&blogs));

            match stats::favorite_blog(&blogs) {
                Ok(favorite) => {
                    println!("favorite: {} ({} likes)", favorite.title, favorite.likes)
                }
                Err(StatsError::EmptyList) => println!("favorite: -"),
            }

            let top_count = stats::most_blogs(&blogs);
            println!(
                "most blogs: {} ({})",
                top_count.author.as_deref().unwrap_or("-"),
                top_count.blogs
            );

            let top_likes = stats::most_likes(&blogs);
            println!(
                "most likes: {} ({})",
                top_likes.author.as_deref().unwrap_or("-"),
                top_likes.likes
            );
        }
    }

    Ok(())
}
