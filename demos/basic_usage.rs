use anyhow::{Context, Result};
use replykit::{call_model, clean_dir, clean_response, logging, ProviderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let prompt = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let prompt = if prompt.is_empty() {
        "Give me three tips for writing clear commit messages.".to_string()
    } else {
        prompt
    };

    println!("=== replykit demo ===\n");

    let reset = clean_dir("./output");
    for failure in reset.failures() {
        println!("! could not remove {}: {}", failure.path.display(), failure.error);
    }

    let config = ProviderConfig::from_env()?;
    let client = config.build_client();
    let model = config.default_model();
    println!("Asking {:?} via {:?}: {}\n", model, config.provider, prompt);

    let raw = call_model(client.as_ref(), &prompt, model)
        .await
        .context("Completion request failed")?;
    let cleaned = clean_response(&raw);

    std::fs::write("./output/reply.txt", &cleaned).context("Failed to save reply")?;

    println!("--- raw ---\n{}\n", raw);
    println!("--- cleaned ---\n{}", cleaned);
    Ok(())
}
