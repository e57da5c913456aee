//! Terminal rendering of note cards and the note form.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crossterm::style::{style, Color, Stylize};
use notes_types::Note;

use crate::form::NoteForm;

/// Shown in place of an empty or missing body.
pub const CONTENT_PLACEHOLDER: &str = "No content";

/// Inner width of one card, in characters.
pub const CARD_WIDTH: usize = 28;
const MAX_BODY_LINES: usize = 6;
const GUTTER: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };

    /// Parse `#RRGGBB` or `#RGB` (the `#` is optional).
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
                Self::parse_hex(&doubled)
            }
            _ => None,
        }
    }

    fn to_color(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// What one note looks like on screen, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: u64,
    pub heading: String,
    pub body: String,
    pub background: Rgb,
}

impl NoteCard {
    pub fn from_note(note: &Note) -> Self {
        let heading = match note.title_str() {
            "" => format!("Note {}", note.id),
            title => title.to_string(),
        };
        let body = match note.content_str() {
            "" => CONTENT_PLACEHOLDER.to_string(),
            content => content.to_string(),
        };
        let background = note
            .color_str()
            .and_then(Rgb::parse_hex)
            .unwrap_or(Rgb::WHITE);

        Self {
            id: note.id,
            heading,
            body,
            background,
        }
    }

    /// Fixed-width text lines: a header with the id, then the wrapped body.
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![fit(&format!("{} [#{}]", self.heading, self.id))];
        lines.push(" ".repeat(CARD_WIDTH));
        lines.extend(wrap(&self.body).into_iter().take(MAX_BODY_LINES));
        lines
    }
}

/// Pad or cut to exactly `CARD_WIDTH` characters.
fn fit(text: &str) -> String {
    let count = text.chars().count();
    if count > CARD_WIDTH {
        let mut cut: String = text.chars().take(CARD_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(CARD_WIDTH - count))
    }
}

fn wrap(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
            if !line.is_empty() && needed > CARD_WIDTH {
                out.push(fit(&line));
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        out.push(fit(&line));
    }
    if out.is_empty() {
        out.push(fit(""));
    }
    out
}

fn paint(segment: &str, background: Rgb, bold: bool, colorize: bool) -> String {
    if !colorize {
        return segment.to_string();
    }
    let styled = style(segment).with(Color::Black).on(background.to_color());
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

/// Lay cards out left to right, wrapping into rows that fit `width` columns.
pub fn render_grid(notes: &[&Note], width: usize, colorize: bool) -> String {
    if notes.is_empty() {
        return "(no notes)\n".to_string();
    }

    let per_row = ((width + GUTTER.len()) / (CARD_WIDTH + GUTTER.len())).max(1);
    let cards: Vec<NoteCard> = notes.iter().map(|note| NoteCard::from_note(note)).collect();

    let mut out = String::new();
    for row in cards.chunks(per_row) {
        let rendered: Vec<Vec<String>> = row.iter().map(NoteCard::lines).collect();
        let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..height {
            let segments: Vec<String> = row
                .iter()
                .zip(&rendered)
                .map(|(card, lines)| match lines.get(i) {
                    Some(line) => paint(line, card.background, i == 0, colorize),
                    None => paint(&" ".repeat(CARD_WIDTH), card.background, false, colorize),
                })
                .collect();
            out.push_str(segments.join(GUTTER).trim_end());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// The form as a small panel: heading, fields, and the submit button.
pub fn render_form(form: &NoteForm, colorize: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", form.heading()));
    out.push_str(&format!("title:   {}\n", form.title));
    out.push_str(&format!("content: {}\n", form.content));
    out.push_str(&format!("color:   {}\n", form.color));

    let button = format!("[ {} ]", form.submit_label());
    let accent = Rgb::parse_hex(form.submit_color()).unwrap_or(Rgb::WHITE);
    out.push_str(&paint(&button, accent, true, colorize));
    out.push_str("  (save / cancel)\n");
    out
}
