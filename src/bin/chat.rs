use anyhow::Result;
use clap::Parser;
use recallbot::bots::HistoryChat;
use recallbot::clients::gemini::{GeminiClient, GeminiModels};
use recallbot::session::Role;
use recallbot::store::InteractionStore;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "💬 Gemini chat with locally stored history", long_about = None)]
struct Args {
    /// Path of the JSON file the chat log is saved to
    #[arg(long, default_value = "chat_history.json")]
    history_file: PathBuf,

    /// Gemini model to use
    #[arg(long, default_value = GeminiModels::FLASH_LITE_2_5)]
    model: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt::init();
    }

    let client = GeminiClient::from_env(&args.model)?;
    let store = InteractionStore::new(args.history_file);
    let mut bot = HistoryChat::new(client, store);

    println!("💬 Gemini chat with locally stored history");
    println!("   Check the file {} to see the history being stored", bot.store().path().display());
    println!("   Commands: /history shows saved chats, /quit exits");
    println!();

    loop {
        let input = match read_line("you> ")? {
            Some(input) => input,
            None => break,
        };

        if input.is_empty() {
            continue;
        }

        match input.as_str() {
            "/quit" | "/exit" => break,
            "/history" => {
                let data = bot.saved_history().await;
                if data.interactions.is_empty() {
                    println!("No saved chats yet.");
                    println!();
                    continue;
                }
                for item in &data.interactions {
                    println!("Q: {}", item.query);
                    if let Some(response) = &item.response {
                        println!("A: {}", response);
                    }
                    println!("⏱ {}", item.time.format("%Y-%m-%dT%H:%M:%S%.f"));
                    println!("---");
                }
                println!();
            }
            _ => match bot.send(input).await {
                Ok(reply) => {
                    println!("gemini> {}", reply);
                    println!();
                }
                Err(e) => {
                    // A failure after the reply landed (the history save)
                    // leaves it in the transcript; show it.
                    if let Some(turn) = bot.session().chat.last() {
                        if turn.role == Role::Assistant {
                            println!("gemini> {}", turn.content);
                            println!();
                        }
                    }
                    eprintln!("❌ {}", e);
                }
            },
        }
    }

    Ok(())
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
