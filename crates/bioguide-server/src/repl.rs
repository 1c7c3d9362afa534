//! Terminal transcript over the same session and controller as the API.

use std::io::{BufRead, Write};

use bioguide_dialogue::{Controller, Role, Session};

use crate::knowledge::Knowledge;

const PROMPT: &str = "you> ";

fn print_message(out: &mut impl Write, role: Role, content: &str) -> std::io::Result<()> {
    let tag = match role {
        Role::User => "you",
        Role::Assistant => "guide",
    };
    for line in content.lines() {
        writeln!(out, "{}: {}", tag, line)?;
    }
    writeln!(out)
}

/// Run an interactive conversation until EOF or `exit`/`quit`.
pub fn run(
    knowledge: Knowledge,
    limits: bioguide_core::FormatLimits,
    input: impl BufRead,
    mut out: impl Write,
) -> std::io::Result<()> {
    let controller = Controller::new(std::sync::Arc::new(knowledge.store), limits);
    let mut session = Session::new(knowledge.warning.as_deref());

    for message in session.history() {
        print_message(&mut out, message.role, &message.content)?;
    }
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        // Blank lines are ignored, as the API rejects them.
        if let Ok(reply) = session.respond(&controller, trimmed) {
            print_message(&mut out, reply.role, &reply.content)?;
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
