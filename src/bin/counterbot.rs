use anyhow::Result;
use clap::Parser;
use recallbot::bots::CounterBot;
use recallbot::clients::gemini::{GeminiClient, GeminiModels};
use recallbot::session::Role;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about = "🤖 CounterBot: asks a quiz every 5 questions", long_about = None)]
struct Args {
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
    let mut bot = CounterBot::new(client);

    println!("CounterBot 🤖");
    println!("Asks a quiz every 5 questions");
    println!();

    loop {
        // A pending quiz takes over the next input line as its answer.
        if let Some(quiz) = bot.active_quiz() {
            println!("---");
            println!("🧠 Quiz Time!");
            println!("{}", quiz.question);
            println!();

            let answer = match read_line("Your answer: ")? {
                Some(answer) => answer,
                None => break,
            };

            match bot.answer_quiz(&answer).await {
                Ok(verdict) => {
                    println!();
                    println!("Evaluation");
                    println!("{}", verdict);
                    println!();
                }
                Err(e) => eprintln!("❌ {}", e),
            }
            continue;
        }

        let input = match read_line("you> ")? {
            Some(input) => input,
            None => break,
        };

        if input.is_empty() {
            continue;
        }

        if input == "/quit" || input == "/exit" {
            break;
        }

        match bot.send(input).await {
            Ok(reply) => {
                println!("gemini> {}", reply);
                println!();
            }
            Err(e) => {
                // A failure after the reply landed (the quiz call on the
                // fifth message) leaves it in the transcript; show it.
                if let Some(turn) = bot.session().chat.last() {
                    if turn.role == Role::Assistant {
                        println!("gemini> {}", turn.content);
                        println!();
                    }
                }
                eprintln!("❌ {}", e);
            }
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
