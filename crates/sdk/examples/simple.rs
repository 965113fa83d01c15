//! Minimal RMS client walkthrough
//!
//! Run the daemon first, then: cargo run -p rms-sdk --example simple

use rms_sdk::{Author, RmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("RMS_RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:50051".into());
    let client = RmsClient::connect(&url).await?;

    let author = client
        .create(Author {
            author_name: "Jane Doe".to_string(),
            gender: "F".to_string(),
            type_of_author: "Faculty".to_string(),
            affiliation: "CS Dept".to_string(),
            email: "jane@example.edu".to_string(),
            ..Default::default()
        })
        .await?;
    println!("Created author {}", author.author_id);

    let fetched: Author = client.get::<Author>(author.author_id.clone()).await?;
    println!("Fetched: {} <{}>", fetched.author_name, fetched.email);

    let all: Vec<Author> = client.list().await?;
    println!("{} author(s) stored", all.len());

    let removed = client.delete::<Author>(author.author_id).await?;
    println!("Deleted: {}", removed);

    Ok(())
}
