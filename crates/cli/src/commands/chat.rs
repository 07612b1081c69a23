use std::io::{self, BufRead, Write};
use std::sync::Arc;

use subscripter_agent::{CannedResponder, ChatResponder, ChatSession, SeededSource, ThreadRngSource};
use subscripter_core::config::AppConfig;
use subscripter_core::domain::chat::{ChatMessage, Sender};
use tokio::runtime::Builder;

use super::CommandResult;

const EXIT_WORDS: [&str; 2] = ["/quit", "/exit"];

pub fn run(config: &AppConfig, seed: Option<u64>) -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(stdin.lock(), stdout.lock(), config, seed)
}

/// Reads one visitor message per line until EOF or `/quit`, printing each
/// reply once it lands.
pub fn run_with_io<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &AppConfig,
    seed: Option<u64>,
) -> CommandResult {
    let runtime = match Builder::new_current_thread().enable_time().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "chat",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                1,
            );
        }
    };
    let _context = runtime.enter();

    let responder: Arc<dyn ChatResponder> = match seed {
        Some(seed) => Arc::new(CannedResponder::new(SeededSource::new(seed))),
        None => Arc::new(CannedResponder::new(ThreadRngSource)),
    };
    let mut session = ChatSession::from_config(responder, &config.chat);
    let mut printed = 0;

    if let Err(error) = print_new(&mut output, &session, &mut printed) {
        return CommandResult::io_failure("chat", error);
    }

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => return CommandResult::io_failure("chat", error),
        };
        if EXIT_WORDS.contains(&line.trim()) {
            break;
        }

        if session.submit(&line).is_none() {
            continue;
        }
        runtime.block_on(session.wait_for_replies());

        if let Err(error) = print_new(&mut output, &session, &mut printed) {
            return CommandResult::io_failure("chat", error);
        }
    }

    session.shutdown();
    CommandResult { exit_code: 0, output: String::new() }
}

fn print_new<W: Write>(
    output: &mut W,
    session: &ChatSession,
    printed: &mut usize,
) -> io::Result<()> {
    let transcript = session.transcript();
    for message in transcript.iter().skip(*printed) {
        writeln!(output, "{}", render_message(message))?;
    }
    *printed = transcript.len();
    output.flush()
}

fn render_message(message: &ChatMessage) -> String {
    let speaker = match message.sender {
        Sender::User => "you",
        Sender::Bot => "assistant",
    };
    format!("[{}] {speaker}: {}", message.time_label(), message.content)
}
