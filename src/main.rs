use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use shitos::config::Theme;
use shitos::{Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "shitos")]
#[command(about = "An in-memory toy operating system shell")]
#[command(version)]
struct Cli {
    /// Session user shown in the prompt
    #[arg(long)]
    user: Option<String>,

    /// Session hostname shown in the prompt
    #[arg(long)]
    host: Option<String>,

    /// Disable ANSI colors and screen control sequences
    #[arg(long)]
    plain: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Fall back to plain output when stdout is not a terminal
    let theme = if cli.plain || !io::stdout().is_terminal() {
        Theme::plain()
    } else {
        Theme::ansi()
    };

    let mut shell = Shell::new(ShellOptions {
        user: cli.user,
        host: cli.host,
        theme: Some(theme),
        fs: None,
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    write!(stdout, "{}", shell.banner())?;

    while !shell.is_terminated() {
        write!(stdout, "{}", shell.prompt())?;
        stdout.flush()?;

        // Closed stdin ends the session like `exit`
        let Some(line) = lines.next() else {
            break;
        };
        write!(stdout, "{}", shell.feed_line(&line?))?;
    }

    stdout.flush()
}
