//! Shell
//!
//! The command dispatch state machine. The shell consumes one input line at
//! a time via [`Shell::feed_line`] and returns the output to print; the
//! prompt for the next read is derived from the current state via
//! [`Shell::prompt`]. Keeping the core free of stdin/stdout makes every
//! interactive flow testable as plain function calls, with the blocking
//! read loop living in `main.rs`.

use crate::calc::{self, CalcError};
use crate::config::{Theme, VERSION};
use crate::fs::MemFs;
use crate::session::{os_info, Session, SessionClock};

/// Seed files present on every fresh system.
const SEED_FILES: [(&str, &str); 2] = [
    ("README.txt", "Welcome to ShitOS Enterprise Edition\n"),
    ("TODOS.txt", "1. Improve system stability\n2. Add more features\n"),
];

const HELP_TEXT: &str = "
Available commands:
  help       - Show this help
  clear      - Clear screen
  info       - Show system info
  calc       - Start calculator
  notepad    - Simple text editor
  files      - File manager
  exit       - Shutdown system
";

/// Where the dispatch loop currently is.
///
/// All sub-states return to `Running` when their terminator line is seen;
/// `Terminated` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Main prompt, dispatching command names.
    Running,
    /// Inside the calculator sub-loop.
    Calculator,
    /// Notepad is waiting for the target filename.
    NotepadFilename,
    /// Notepad is collecting body lines until the `EOL` terminator.
    NotepadBody { filename: String, buffer: String },
    /// File browser is waiting for a filename or `back`.
    FileBrowser,
    /// `exit` was issued; the session is over.
    Terminated,
}

/// Options for creating a shell session.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Session user (defaults to `user`).
    pub user: Option<String>,
    /// Session hostname (defaults to `shitOS-host`).
    pub host: Option<String>,
    /// Terminal theme (defaults to ANSI colors).
    pub theme: Option<Theme>,
    /// Filesystem instance (defaults to a freshly seeded [`MemFs`]).
    pub fs: Option<MemFs>,
}

/// The interactive session: filesystem, clock, identity, and dispatch state.
pub struct Shell {
    fs: MemFs,
    clock: SessionClock,
    session: Session,
    theme: Theme,
    state: ShellState,
}

impl Shell {
    /// Create a new session with a freshly seeded filesystem.
    pub fn new(options: ShellOptions) -> Self {
        Self {
            fs: options.fs.unwrap_or_else(|| MemFs::with_files(SEED_FILES)),
            clock: SessionClock::start(),
            session: Session::new(options.user, options.host),
            theme: options.theme.unwrap_or_default(),
            state: ShellState::Running,
        }
    }

    /// Startup output: clear screen plus the welcome banner.
    pub fn banner(&self) -> String {
        format!(
            "{}{}\n\n",
            self.theme.clear_screen(),
            self.theme.banner(&format!("Welcome to ShitOS {}", VERSION))
        )
    }

    /// The prompt to render before the next line is read.
    pub fn prompt(&self) -> String {
        match &self.state {
            ShellState::Running => {
                let identity = format!("{}@{}", self.session.user, self.session.host);
                format!("{}:$ ", self.theme.bold(&identity))
            }
            ShellState::Calculator => "calc> ".to_string(),
            ShellState::NotepadFilename => "Enter filename: ".to_string(),
            ShellState::NotepadBody { .. } => String::new(),
            ShellState::FileBrowser => {
                "\nEnter filename to view or 'back' to return: ".to_string()
            }
            ShellState::Terminated => String::new(),
        }
    }

    /// Current dispatch state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// True once `exit` has been processed.
    pub fn is_terminated(&self) -> bool {
        self.state == ShellState::Terminated
    }

    /// The virtual filesystem backing this session.
    pub fn fs(&self) -> &MemFs {
        &self.fs
    }

    /// Consume one input line (without its trailing newline) and return the
    /// output to print. Every error is rendered as a one-line message and
    /// the enclosing loop continues; nothing here is fatal.
    pub fn feed_line(&mut self, line: &str) -> String {
        let state = std::mem::replace(&mut self.state, ShellState::Running);
        match state {
            ShellState::Running => self.dispatch(line.trim()),
            ShellState::Calculator => self.calc_line(line.trim()),
            ShellState::NotepadFilename => self.notepad_filename(line.trim()),
            ShellState::NotepadBody { filename, buffer } => {
                self.notepad_body(filename, buffer, line)
            }
            ShellState::FileBrowser => self.browse_file(line.trim()),
            ShellState::Terminated => {
                self.state = ShellState::Terminated;
                String::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Main dispatch
    // ------------------------------------------------------------------

    fn dispatch(&mut self, command: &str) -> String {
        match command {
            "" => String::new(),
            "help" => HELP_TEXT.to_string(),
            "clear" => self.theme.clear_screen().to_string(),
            "info" => self.render_info(),
            "calc" => {
                self.state = ShellState::Calculator;
                "\nCalculator (enter 'exit' to quit)\n".to_string()
            }
            "notepad" => {
                self.state = ShellState::NotepadFilename;
                "\nNotepad (enter 'EOL' on empty line to save and exit)\n".to_string()
            }
            "files" => self.enter_file_browser(),
            "exit" => {
                self.state = ShellState::Terminated;
                "\nShutting down...\n".to_string()
            }
            other => format!(
                "{}\n",
                self.theme.err(&format!("Unknown command: {}", other))
            ),
        }
    }

    fn render_info(&self) -> String {
        format!(
            "\nSystem Information:\n\
             ------------------\n\
             OS:        {}\n\
             Uptime:    {}\n\
             User:      {}\n\
             Host:      {}\n",
            os_info(),
            self.clock.uptime(),
            self.session.user,
            self.session.host
        )
    }

    // ------------------------------------------------------------------
    // Calculator sub-loop
    // ------------------------------------------------------------------

    fn calc_line(&mut self, line: &str) -> String {
        if line == "exit" {
            return String::new();
        }
        self.state = ShellState::Calculator;
        match calc::evaluate_line(line) {
            Ok(result) => format!("= {}\n", self.theme.ok(&result.to_string())),
            Err(CalcError::InvalidInputFormat) => {
                format!("{}\n", self.theme.err("Invalid input format"))
            }
            Err(e) => format!("{}\n", self.theme.err(&format!("Error: {}", e))),
        }
    }

    // ------------------------------------------------------------------
    // Notepad sub-flow
    // ------------------------------------------------------------------

    fn notepad_filename(&mut self, filename: &str) -> String {
        self.state = ShellState::NotepadBody {
            filename: filename.to_string(),
            buffer: String::new(),
        };
        "Enter text (EOL to finish):\n".to_string()
    }

    fn notepad_body(&mut self, filename: String, mut buffer: String, line: &str) -> String {
        if line == "EOL" {
            self.fs.write_file(&filename, &buffer);
            return format!("{}\n", self.theme.ok("File saved successfully"));
        }
        buffer.push_str(line);
        buffer.push('\n');
        self.state = ShellState::NotepadBody { filename, buffer };
        String::new()
    }

    // ------------------------------------------------------------------
    // File browser sub-flow
    // ------------------------------------------------------------------

    fn enter_file_browser(&mut self) -> String {
        let mut out = String::from("\nFile System:\n");
        if self.fs.is_empty() {
            out.push_str("  No files found\n");
            return out;
        }
        for name in self.fs.list_files() {
            out.push_str("  ");
            out.push_str(name);
            out.push('\n');
        }
        self.state = ShellState::FileBrowser;
        out
    }

    fn browse_file(&mut self, name: &str) -> String {
        if name == "back" {
            return String::new();
        }
        match self.fs.read_file(name) {
            Ok(content) => format!("\nFile content:\n{}\n", content),
            Err(e) => format!("{}\n", self.theme.err(&e.to_string())),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
