//! REPL (Read-Eval-Print Loop) for interactive policy Q&A

use crate::output::citations::build_citation_views;
use crate::output::console::{ConsoleFormatter, RenderOptions};
use crate::progress::reporter::PendingSpinner;
use policyq_application::{
    AskGateway, AskParams, ClipboardPort, Feedback, SessionController,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive ask REPL
pub struct AskRepl {
    controller: SessionController,
    gateway: Arc<dyn AskGateway>,
    render: RenderOptions,
    show_progress: bool,
}

impl AskRepl {
    /// Create a new AskRepl
    pub fn new(
        gateway: Arc<dyn AskGateway>,
        clipboard: Arc<dyn ClipboardPort>,
        params: AskParams,
    ) -> Self {
        Self {
            controller: SessionController::new(gateway.clone(), clipboard, params),
            gateway,
            render: RenderOptions::default(),
            show_progress: true,
        }
    }

    /// Set rendering options
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Set whether to show the pending spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("policyq").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Ask the backend
                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("+---------------------------------------------+");
        println!("|        PolicyQ - HR Policy Assistant        |");
        println!("+---------------------------------------------+");
        println!();
        println!("Ask a policy question, or use a command:");
        println!("  /show             - Reprint the current answer");
        println!("  /open N, /close N - Expand/collapse citation N");
        println!("  /copy             - Copy the answer text");
        println!("  /feedback yes|no  - Rate the current answer");
        println!("  /clear            - Discard the current answer");
        println!("  /health           - Probe the backend");
        println!("  /help             - Show this help");
        println!("  /quit             - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or(cmd);
        let rest = parts.next().unwrap_or("").trim();

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
            }
            "/show" => {
                self.print_answer();
            }
            "/clear" => {
                self.controller.clear();
                println!("Cleared.");
            }
            "/copy" => match self.controller.copy_answer().await {
                Ok(true) => println!("Answer copied."),
                Ok(false) => println!("Nothing to copy yet."),
                Err(e) => println!("Copy failed: {}", e),
            },
            "/open" | "/close" => {
                self.set_citation_disclosure(name == "/open", rest);
            }
            "/health" => match self.gateway.health().await {
                Ok(health) => {
                    let service = health.service.as_deref().unwrap_or("backend");
                    println!("{}: {}", service, health.status);
                }
                Err(e) => println!("Backend unreachable: {}", e),
            },
            "/feedback" => {
                self.send_feedback(rest).await;
            }
            _ => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&mut self, question: &str) {
        println!();
        self.controller.set_query(question);

        let spinner = self.show_progress.then(PendingSpinner::start);
        let applied = self.controller.submit().await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        if applied {
            self.print_answer();
        }
        println!();
    }

    fn print_answer(&self) {
        let state = self.controller.state();
        let Some(answer) = state.answer() else {
            println!("No answer yet. Ask a question first.");
            return;
        };
        let views = build_citation_views(&answer.citations, |key| state.is_expanded(key));
        println!("{}", ConsoleFormatter::format(answer, &views, &self.render));
    }

    /// Expand or collapse citation number `arg` (1-based, as displayed).
    fn set_citation_disclosure(&mut self, open: bool, arg: &str) {
        let Ok(number) = arg.parse::<usize>() else {
            println!("Usage: /{} <citation number>", if open { "open" } else { "close" });
            return;
        };
        let Some(rank) = number.checked_sub(1) else {
            println!("Citations are numbered from 1.");
            return;
        };

        let Some(key) = self
            .controller
            .state()
            .answer()
            .and_then(|a| a.citation_key(rank))
        else {
            println!("No citation {}.", number);
            return;
        };

        if self.controller.state().is_expanded(&key) != open {
            self.controller.toggle_citation(rank);
        }
        self.print_answer();
    }

    async fn send_feedback(&self, args: &str) {
        if self.controller.state().answer().is_none() {
            println!("Nothing to rate yet.");
            return;
        }

        let mut parts = args.splitn(2, char::is_whitespace);
        let helpful = match parts.next().unwrap_or("") {
            "yes" | "y" => true,
            "no" | "n" => false,
            _ => {
                println!("Usage: /feedback yes|no [comments]");
                return;
            }
        };

        let mut feedback = Feedback::new(self.controller.state().query(), helpful);
        if let Some(comments) = parts.next().map(str::trim).filter(|c| !c.is_empty()) {
            feedback = feedback.with_comments(comments);
        }

        match self.gateway.send_feedback(&feedback).await {
            Ok(()) => println!("Thanks for the feedback!"),
            Err(e) => println!("Could not record feedback: {}", e),
        }
    }
}
