//! Line-oriented front end: one command per line, output after each.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::NoteService;
use crate::app::NotesApp;
use crate::error::{ClientError, Result};
use crate::render::{self, Rgb};

pub const HELP: &str = "\
Commands:
  list               show the notes matching the current search
  new                open the form to add a note
  edit <id>          open the form on an existing note
  title <text>       set the form title
  content <text>     set the form content
  color <#RRGGBB>    set the form color
  save               submit the form
  cancel             close the form without saving
  delete <id>        delete a note
  search [query]     filter notes by title or content (empty clears)
  help               show this help
  quit               exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Edit(u64),
    Title(String),
    Content(String),
    Color(String),
    Save,
    Cancel,
    Delete(u64),
    Search(String),
    Help,
    Quit,
}

fn parse_id(arg: &str) -> Result<u64> {
    arg.trim()
        .trim_start_matches('#')
        .parse()
        .map_err(|_| ClientError::InvalidCommand(format!("invalid note id: '{}'", arg.trim())))
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "new" | "add" | "+" => Command::New,
        "edit" | "open" => Command::Edit(parse_id(rest)?),
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "color" => {
            if Rgb::parse_hex(rest).is_none() {
                return Err(ClientError::InvalidCommand(format!(
                    "invalid color: '{}'",
                    rest
                )));
            }
            Command::Color(rest.to_string())
        }
        "save" | "submit" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "search" | "/" => Command::Search(rest.to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(ClientError::InvalidCommand(format!(
                "unknown command: '{}'",
                other
            )));
        }
    };
    Ok(Some(command))
}

pub struct Repl<S> {
    app: NotesApp<S>,
    colorize: bool,
    width: usize,
}

impl<S: NoteService> Repl<S> {
    pub fn new(app: NotesApp<S>, colorize: bool, width: usize) -> Self {
        Self {
            app,
            colorize,
            width,
        }
    }

    pub fn app(&self) -> &NotesApp<S> {
        &self.app
    }

    fn grid(&self) -> String {
        let mut out = String::new();
        if !self.app.search_query().is_empty() {
            out.push_str(&format!("search: {}\n", self.app.search_query()));
        }
        out.push_str(&render::render_grid(
            &self.app.visible_notes(),
            self.width,
            self.colorize,
        ));
        out
    }

    fn form(&self) -> String {
        render::render_form(self.app.form(), self.colorize)
    }

    fn require_form(&self) -> Result<()> {
        if self.app.form().is_visible() {
            Ok(())
        } else {
            Err(ClientError::FormClosed)
        }
    }

    /// Run one command and return the text to show. `Ok(None)` means quit.
    ///
    /// Request failures have already been logged by the app; the returned
    /// error is only for form-level problems the user can fix.
    pub async fn execute(&mut self, command: Command) -> Result<Option<String>> {
        let output = match command {
            Command::List => self.grid(),
            Command::New => {
                self.app.open_create();
                self.form()
            }
            Command::Edit(id) => {
                self.app.select_note(id)?;
                self.form()
            }
            Command::Title(text) => {
                self.require_form()?;
                self.app.form_mut().title = text;
                self.form()
            }
            Command::Content(text) => {
                self.require_form()?;
                self.app.form_mut().content = text;
                self.form()
            }
            Command::Color(color) => {
                self.require_form()?;
                self.app.form_mut().color = color;
                self.form()
            }
            Command::Save => match self.app.submit().await {
                Ok(_) => self.grid(),
                Err(e @ (ClientError::MissingField(_) | ClientError::FormClosed)) => {
                    return Err(e);
                }
                Err(_) => self.form(),
            },
            Command::Cancel => {
                self.app.cancel();
                self.grid()
            }
            Command::Delete(id) => {
                // Failure already logged; the grid shows the unchanged state
                let _ = self.app.delete_note(id).await;
                self.grid()
            }
            Command::Search(query) => {
                self.app.set_search_query(query);
                self.grid()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let _ = self.app.load().await;
        output.write_all(self.grid().as_bytes())?;

        let mut lines = input.lines();
        loop {
            write!(output, "notes> ")?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self.execute(command).await {
                Ok(Some(text)) => output.write_all(text.as_bytes())?,
                Ok(None) => break,
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        Ok(())
    }
}
