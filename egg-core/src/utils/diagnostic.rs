use std::io::Write;
use std::path::PathBuf;

pub use codespan_reporting::diagnostic::{LabelStyle, Severity};
use codespan_reporting::{diagnostic::Label as CodespanLabel, files::SimpleFiles};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::src_span::SrcSpan;

pub struct Label {
    pub text: Option<String>,
    pub span: SrcSpan
}

impl Label {
    pub fn to_codespan_label(&self, file_id: usize, label_style: Option<LabelStyle>) -> CodespanLabel<usize> {
        let label = CodespanLabel::new(
            label_style.unwrap_or(LabelStyle::Primary),
            file_id,
            (self.span.start as usize)..(self.span.end as usize),
        );

        match &self.text {
            None => label,
            Some(text) => label.with_message(text.clone()),
        }
    }
}

pub struct Location<'a> {
    pub src: &'a str,
    pub path: PathBuf,
    pub label: Label,
    pub extra_labels: Vec<Label>,
}

/// A renderable error report. Egg has no warnings, so every diagnostic is
/// emitted with [`Severity::Error`].
pub struct Diagnostic<'a> {
    pub title: String,
    pub text: String,
    pub location: Option<Location<'a>>
}

impl<'a> Diagnostic<'a> {
    pub fn write(&self, buf: &mut Buffer) -> std::io::Result<()> {
        match &self.location {
            Some(location) => self.write_span(location, buf)?,
            None => self.write_title(buf)?,
        }

        if !self.text.is_empty() {
            writeln!(buf, "{}", self.text)?;
        }

        Ok(())
    }

    pub fn write_span(&self, location: &Location, buf: &mut Buffer) -> std::io::Result<()> {
        let mut files = SimpleFiles::new();

        let location_path = location.path.display().to_string();
        let file_id = files.add(location_path, location.src);

        // keep both ends inside the source text
        let clamp = |span: SrcSpan| {
            let len = location.src.len() as u32;
            let start = span.start.min(len);
            SrcSpan::from(start, span.end.clamp(start, len))
        };

        let primary = Label {
            text: location.label.text.clone(),
            span: clamp(location.label.span),
        };

        let mut labels = vec![primary.to_codespan_label(file_id, None)];

        location.extra_labels.iter()
            .for_each(|label| {
                let label = Label { text: label.text.clone(), span: clamp(label.span) };
                labels.push(label.to_codespan_label(file_id, Some(LabelStyle::Secondary)))
            });

        let diagnostic = codespan_reporting::diagnostic::Diagnostic::new(Severity::Error)
            .with_message(&self.title)
            .with_labels(labels);

        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(buf, &config, &files, &diagnostic)
            .map_err(std::io::Error::other)
    }

    pub fn write_title(&self, buf: &mut Buffer) -> std::io::Result<()> {
        buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
        write!(buf, "error")?;

        buf.set_color(ColorSpec::new().set_bold(true))?;
        write!(buf, ": {}\n\n", self.title)?;

        buf.set_color(&ColorSpec::new())
    }
}
