//! `ask` subcommand: query a running server through the client SDK.

use anyhow::Result;
use groundsearch_client::{ClientConfig, GroundSearchClient};

pub async fn ask(base_url: String, session: Option<String>, query: &str) -> Result<()> {
    let client = GroundSearchClient::new(ClientConfig::with_base_url(base_url))?;
    let answer = client.ask(session.as_deref(), query).await?;

    if answer.new_session && session.is_some() {
        eprintln!("Previous session was lost; started a new one.");
    }

    println!("{}", answer.summary);
    println!();
    for source in &answer.sources {
        println!("[{}] {} - {}", source.index, source.title, source.url);
    }
    println!();
    println!("session: {}", answer.session_id);

    Ok(())
}
