//! Interactive chat session

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::api::AssistantApi;
use crate::chat::{TurnDriver, TurnOutcome, extract_reply};
use crate::spinner::Spinner;

/// One interactive session: one thread, one assistant, turns in sequence
///
/// Per-turn failures are printed and the loop keeps accepting input;
/// nothing past session startup is fatal.
pub struct ChatSession {
    api: Arc<dyn AssistantApi>,
    driver: TurnDriver,
    assistant_id: String,
    thread_id: String,
    spinner: Spinner,
}

impl ChatSession {
    /// Open a conversation thread and build the session around it
    pub async fn start(api: Arc<dyn AssistantApi>, assistant_id: String) -> Result<Self> {
        let thread_id = api
            .create_thread()
            .await
            .map_err(|e| eyre::eyre!("Failed to create thread: {}", e))?;
        debug!(%thread_id, %assistant_id, "start: session ready");

        let driver = TurnDriver::new(api.clone());

        Ok(Self {
            api,
            driver,
            assistant_id,
            thread_id,
            spinner: Spinner::new(),
        })
    }

    /// Run the read-line loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        println!("Enter your message (type {} to quit)", "exit".yellow());

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if input == "exit" {
                        break;
                    }

                    let _ = rl.add_history_entry(input);
                    self.process_turn(input).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Drive one turn and display whatever came of it
    ///
    /// No input is read while the run is outstanding; the spinner is the
    /// only sign of life until the run reaches a terminal state.
    async fn process_turn(&mut self, input: &str) {
        self.spinner.start("Thinking");
        let outcome = self.driver.run_turn(&self.thread_id, &self.assistant_id, input).await;
        self.spinner.stop();

        match outcome {
            Ok(TurnOutcome::Completed) => self.display_reply().await,
            Ok(TurnOutcome::Failed) => {
                println!("{}", "Run failed.".red());
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Fetch the message list and print the newest assistant reply
    async fn display_reply(&self) {
        let messages = match self.api.list_messages(&self.thread_id).await {
            Ok(messages) => messages,
            Err(e) => {
                println!("{} {}", "Error retrieving messages:".red(), e);
                return;
            }
        };

        let reply = extract_reply(&messages);
        for problem in &reply.problems {
            println!("{} {}", "Warning:".yellow(), problem);
        }
        for line in &reply.lines {
            println!("{} {}", "AI:".bright_white().bold(), line.bright_white());
        }
    }
}
