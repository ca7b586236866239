use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(about = "Command-line client for the user gateway API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show one user
    Get { id: u64 },
    /// Create a user
    Create(UserFields),
    /// Replace a user's fields
    Update {
        id: u64,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user
    Delete { id: u64 },
}

#[derive(Args)]
struct UserFields {
    #[arg(long)]
    username: String,
    #[arg(long)]
    mobile: String,
    #[arg(long)]
    email: String,
}

impl UserFields {
    fn to_json(&self) -> Value {
        json!({
            "username": self.username,
            "mobile": self.mobile,
            "email": self.email,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let users = format!("{}/api/users", cli.url.trim_end_matches('/'));

    match cli.command {
        Commands::List => {
            let res = client.get(&users).send().await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/{}", users, id)).send().await?;
            print_response(res).await?;
        }
        Commands::Create(fields) => {
            let res = client.post(&users).json(&fields.to_json()).send().await?;
            print_response(res).await?;
        }
        Commands::Update { id, fields } => {
            let res = client
                .put(format!("{}/{}", users, id))
                .json(&fields.to_json())
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client.delete(format!("{}/{}", users, id)).send().await?;
            let status = res.status();
            if status.is_success() {
                println!("Deleted user {} ({})", id, status);
            } else {
                eprintln!("Error: gateway returned status {}", status);
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
