//! Interactive Chat Loop
//!
//! Reads a line, handles the literal commands, forwards everything else to
//! the agent. A failed turn is printed and the loop continues; Ctrl-C or
//! EOF ends the session.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use agent_core::{Agent, Conversation, Message};
use crypto_assistant::SharedSession;

/// What a line of user input means
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the session
    Exit,
    /// Empty both wallet stores and delete the on-disk wallet file
    Clear,
    /// Forward to the agent verbatim
    Chat(String),
    /// Blank line, ignore
    Empty,
}

/// Classify a line. `exit`/`quit`/`clear` are case-insensitive literals;
/// trimming applies to command matching only, free text keeps its whitespace.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Command::Empty;
    }
    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        return Command::Exit;
    }
    if trimmed.eq_ignore_ascii_case("clear") {
        return Command::Clear;
    }

    Command::Chat(line.to_string())
}

fn print_welcome() {
    println!(
        r#"
Welcome to the Crypto Assistant!
I can help you with:
  - Creating Ethereum and Bitcoin wallets
  - Checking wallet balances
  - Getting crypto prices
  - Explaining crypto concepts

Type 'exit' or 'quit' to end the conversation.
Type 'clear' to clear all wallet info.
"#
    );
}

fn print_goodbye() {
    println!("\nGoodbye! Have a great day!");
}

/// Wait for Ctrl-C. A failed handler registration counts as an interrupt
/// rather than leaving the loop uninterruptible.
async fn interrupted() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Race one agent turn against an interrupt. `None` means interrupted.
///
/// The turn is the loop's single long suspension point and has no timeout,
/// so the interrupt must stay live across it, not just across the read.
async fn run_turn<F>(
    agent: &Agent,
    conversation: &mut Conversation,
    interrupt: F,
) -> Option<agent_core::Result<String>>
where
    F: std::future::Future<Output = ()>,
{
    tokio::select! {
        _ = interrupt => None,
        reply = agent.run(conversation) => Some(reply),
    }
}

/// Run the chat loop until exit, EOF, or Ctrl-C
pub async fn run(agent: Agent, session: SharedSession) -> anyhow::Result<()> {
    print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut conversation = Conversation::new();

    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            _ = interrupted() => {
                print_goodbye();
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // EOF (stdin closed)
            print_goodbye();
            break;
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Exit => {
                print_goodbye();
                break;
            }
            Command::Clear => match session.write().await.clear() {
                Ok(()) => println!("All wallet information cleared!"),
                Err(e) => eprintln!("Failed to clear wallet info: {}", e),
            },
            Command::Chat(text) => {
                conversation.push(Message::user(text));
                println!("Thinking...");

                match run_turn(&agent, &mut conversation, interrupted()).await {
                    None => {
                        print_goodbye();
                        break;
                    }
                    Some(Ok(reply)) => {
                        println!("\nAssistant");
                        println!("{}", reply);
                    }
                    Some(Err(e)) => {
                        tracing::debug!("Agent turn failed: {}", e);
                        eprintln!("\nAn error occurred: {}", e.user_message());
                    }
                }
            }
        }
    }

    Ok(())
}
