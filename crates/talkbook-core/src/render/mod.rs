//! Output rendering for talk records.
//!
//! A [`Renderer`] consumes sorted talks one by one and writes one of three
//! outputs:
//!
//! - **Tex**: each talk rendered through the booklet template.
//! - **Txt**: a plain "`<title> <abstract>`" listing.
//! - **Wordlist**: the sorted keyword index over all talks, emitted on
//!   [`Renderer::finish`].
//!
//! The renderer tracks the timestamp of the previously rendered talk and
//! hands it to the template as `last_timeslot`, so templates can open a new
//! time block whenever the timestamp changes. The value is updated after
//! every talk regardless of output mode.

use std::io::Write;

use chrono::{DateTime, FixedOffset};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::BookletError;
use crate::escape::escape_latex;
use crate::rooms::{RoomCommand, RoomTables};
use crate::talk::{DATE_FORMAT, Talk};
use crate::words::extract_words;


/// The requested output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Render each talk through the booklet template.
    Tex,
    /// Plain-text listing.
    Txt,
    /// Sorted keyword index.
    Wordlist,
}

const TEMPLATE_NAME: &str = "booklet";

/// A compiled booklet template.
///
/// Templates use the booklet delimiters (`((% %))` blocks, `((( )))`
/// variables, `((# #))` comments) so LaTeX braces never collide with template
/// syntax. Undefined variables are hard errors. Two filters are available:
/// `e` applies [`escape_latex`], `datetimeformat` renders a timestamp with a
/// strftime pattern (default `%H:%M`).
#[derive(Debug)]
pub struct TexTemplate {
    env: Environment<'static>,
}

impl TexTemplate {
    /// Compiles a template from source.
    pub fn from_source(source: String) -> Result<Self, BookletError> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters("((%", "%))")
                .variable_delimiters("(((", ")))")
                .comment_delimiters("((#", "#))")
                .build()?,
        );
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("e", |value: String| escape_latex(&value));
        env.add_filter("datetimeformat", datetimeformat);
        env.add_template_owned(TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    fn render(&self, context: &TalkContext<'_>) -> Result<String, BookletError> {
        Ok(self.env.get_template(TEMPLATE_NAME)?.render(context)?)
    }
}

/// Formats a wire-format timestamp with a strftime pattern.
fn datetimeformat(value: String, format: Option<String>) -> Result<String, minijinja::Error> {
    let pattern = format.unwrap_or_else(|| "%H:%M".to_string());
    let parsed = DateTime::parse_from_str(&value, DATE_FORMAT).map_err(|err| {
        minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("cannot format {value:?} as a timestamp: {err}"),
        )
    })?;
    Ok(parsed.format(&pattern).to_string())
}

/// The per-talk template context.
///
/// Timestamps cross the template boundary in the wire format, so string
/// equality against `last_timeslot` detects timeslot boundaries.
#[derive(Serialize)]
struct TalkContext<'a> {
    date: String,
    title: &'a str,
    room: &'a str,
    #[serde(rename = "abstract")]
    abstract_text: &'a str,
    speakers: &'a str,
    slug: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    command: &'a str,
    last_timeslot: String,
    default_cmd: &'a RoomCommand,
}

/// Streams talks into one of the output modes.
pub struct Renderer<W: Write> {
    format: RenderFormat,
    template: Option<TexTemplate>,
    rooms: RoomTables,
    out: W,
    last_timeslot: Option<DateTime<FixedOffset>>,
    wordlist: Vec<String>,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    ///
    /// `template` is only consulted in [`RenderFormat::Tex`] mode.
    pub fn new(
        format: RenderFormat,
        template: Option<TexTemplate>,
        rooms: RoomTables,
        out: W,
    ) -> Self {
        Self {
            format,
            template,
            rooms,
            out,
            last_timeslot: None,
            wordlist: Vec::new(),
        }
    }

    /// Renders one talk.
    pub fn render(&mut self, talk: &Talk) -> Result<(), BookletError> {
        match self.format {
            RenderFormat::Txt => {
                self.out.write_all(talk.listing_line().as_bytes())?;
            }
            RenderFormat::Tex => {
                let template = self.template.as_ref().ok_or(BookletError::MissingTemplate)?;
                let command = self.rooms.command(&talk.room);
                let context = TalkContext {
                    date: talk.date.format(DATE_FORMAT).to_string(),
                    title: &talk.title,
                    room: &talk.room,
                    abstract_text: &talk.abstract_text,
                    speakers: &talk.speakers,
                    slug: &talk.slug,
                    kind: &talk.kind,
                    command: &command.command,
                    last_timeslot: self
                        .last_timeslot
                        .map(|t| t.format(DATE_FORMAT).to_string())
                        .unwrap_or_default(),
                    default_cmd: self.rooms.default_command(),
                };
                let rendered = template.render(&context)?;
                self.out.write_all(rendered.as_bytes())?;
            }
            RenderFormat::Wordlist => {
                self.wordlist.extend(extract_words(&talk.listing_line()));
            }
        }
        self.last_timeslot = Some(talk.date);
        Ok(())
    }

    /// Finalizes the run and returns the output writer.
    ///
    /// In wordlist mode this sorts the accumulated words and writes them
    /// newline-joined, without a trailing newline.
    pub fn finish(mut self) -> Result<W, BookletError> {
        if self.format == RenderFormat::Wordlist {
            self.wordlist.sort();
            self.out.write_all(self.wordlist.join("\n").as_bytes())?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk(title: &str, room: &str, date: &str, abstract_text: &str) -> Talk {
        Talk {
            date: DateTime::parse_from_str(date, DATE_FORMAT).unwrap(),
            title: title.to_string(),
            room: room.to_string(),
            room_rank: 0,
            abstract_text: abstract_text.to_string(),
            speakers: String::new(),
            slug: "slug".to_string(),
            kind: "Vortrag".to_string(),
        }
    }

    fn render_all(format: RenderFormat, template: Option<TexTemplate>, talks: &[Talk]) -> String {
        let mut renderer = Renderer::new(format, template, RoomTables::default(), Vec::new());
        for talk in talks {
            renderer.render(talk).unwrap();
        }
        String::from_utf8(renderer.finish().unwrap()).unwrap()
    }

    mod txt {
        use super::*;

        #[test]
        fn writes_one_line_per_talk() {
            let talks = vec![
                talk("Eins", "HS1 (ZHG 011)", "2023-06-10T09:00:00+0200", "  Text A."),
                talk("Zwei", "HS2 (ZHG 010)", "2023-06-10T11:00:00+0200", "  Text B."),
            ];
            let output = render_all(RenderFormat::Txt, None, &talks);
            assert_eq!(output, "Eins   Text A.\nZwei   Text B.\n");
        }
    }

    mod wordlist {
        use super::*;

        #[test]
        fn output_is_sorted_without_trailing_newline() {
            let talks = vec![
                talk("Zebra Karte", "HS1 (ZHG 011)", "2023-06-10T09:00:00+0200", "  Daten."),
                talk("Atlas", "HS2 (ZHG 010)", "2023-06-10T11:00:00+0200", "  Karte."),
            ];
            let output = render_all(RenderFormat::Wordlist, None, &talks);
            assert_eq!(output, "Atlas\nDaten\nKarte\nKarte\nZebra");
            assert!(!output.ends_with('\n'));
        }

        #[test]
        fn empty_run_writes_nothing() {
            let output = render_all(RenderFormat::Wordlist, None, &[]);
            assert_eq!(output, "");
        }
    }

    mod tex {
        use super::*;

        #[test]
        fn missing_template_is_an_error() {
            let mut renderer = Renderer::new(
                RenderFormat::Tex,
                None,
                RoomTables::default(),
                Vec::new(),
            );
            let t = talk("Eins", "HS1 (ZHG 011)", "2023-06-10T09:00:00+0200", "  A.");
            assert!(matches!(
                renderer.render(&t).unwrap_err(),
                BookletError::MissingTemplate
            ));
        }

        #[test]
        fn last_timeslot_starts_empty_and_follows_renders() {
            // The extra trailing newline survives the template engine's
            // single-trailing-newline trim.
            let template =
                TexTemplate::from_source("[(((last_timeslot)))](((title)))\n\n".to_string())
                    .unwrap();
            let talks = vec![
                talk("Eins", "HS1 (ZHG 011)", "2023-06-10T09:00:00+0200", "  A."),
                talk("Zwei", "HS2 (ZHG 010)", "2023-06-10T11:00:00+0200", "  B."),
            ];
            let output = render_all(RenderFormat::Tex, Some(template), &talks);
            assert_eq!(
                output,
                "[]Eins\n[2023-06-10T09:00:00+0200]Zwei\n"
            );
        }

        #[test]
        fn unknown_room_uses_default_command() {
            let template =
                TexTemplate::from_source("(((command)))|(((default_cmd.name)))\n\n".to_string())
                    .unwrap();
            let talks = vec![talk(
                "Eins",
                "BoF1 (ZHG 001)",
                "2023-06-10T09:00:00+0200",
                "  A.",
            )];
            let output = render_all(RenderFormat::Tex, Some(template), &talks);
            assert_eq!(output, "\\abstractOther|???\n");
        }

        #[test]
        fn escape_filter_is_applied() {
            let template = TexTemplate::from_source("(((title|e)))\n\n".to_string()).unwrap();
            let talks = vec![talk(
                "100% & {x}",
                "HS1 (ZHG 011)",
                "2023-06-10T09:00:00+0200",
                "  A.",
            )];
            let output = render_all(RenderFormat::Tex, Some(template), &talks);
            assert_eq!(output, "100\\% \\& \\{x\\}\n");
        }

        #[test]
        fn datetimeformat_defaults_to_clock_time() {
            let template =
                TexTemplate::from_source("(((date|datetimeformat)))\n\n".to_string()).unwrap();
            let talks = vec![talk(
                "Eins",
                "HS1 (ZHG 011)",
                "2023-06-10T09:05:00+0200",
                "  A.",
            )];
            let output = render_all(RenderFormat::Tex, Some(template), &talks);
            assert_eq!(output, "09:05\n");
        }

        #[test]
        fn datetimeformat_accepts_custom_patterns() {
            let template = TexTemplate::from_source(
                "(((date|datetimeformat(\"%Y-%m-%d\"))))\n\n".to_string(),
            )
            .unwrap();
            let talks = vec![talk(
                "Eins",
                "HS1 (ZHG 011)",
                "2023-06-10T09:05:00+0200",
                "  A.",
            )];
            let output = render_all(RenderFormat::Tex, Some(template), &talks);
            assert_eq!(output, "2023-06-10\n");
        }

        #[test]
        fn undefined_variables_are_rejected() {
            let template =
                TexTemplate::from_source("(((missing)))".to_string()).unwrap();
            let mut renderer = Renderer::new(
                RenderFormat::Tex,
                Some(template),
                RoomTables::default(),
                Vec::new(),
            );
            let t = talk("Eins", "HS1 (ZHG 011)", "2023-06-10T09:00:00+0200", "  A.");
            assert!(matches!(
                renderer.render(&t).unwrap_err(),
                BookletError::Template(_)
            ));
        }
    }
}
