use clap::Parser;
use reqwest::header::CONTENT_TYPE;

#[derive(Parser)]
#[command(name = "lookup-cli")]
#[command(about = "Look a word up through a running dictionary gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Word to look up.
    word: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/search", cli.url.trim_end_matches('/')))
        .query(&[("word", cli.word.as_str())])
        .send()
        .await?;

    let status = res.status();
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let body = res.text().await?;

    println!("Status: {}", status);
    println!("Content-Type: {}", content_type);
    println!();
    println!("{}", body);

    if !status.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
