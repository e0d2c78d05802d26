use diffvis_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Turns single aligned elements into output cells.
///
/// For every element the renderer calls `escape`, then `pad` (when padding is
/// on), `colorize` and `wrap`. The two finished rows are combined by `join`.
pub trait Formatter {
    fn escape(&self, text: &str) -> String {
        text.to_string()
    }

    /// Widen `text` to `width` characters.
    fn pad(&self, text: &str, _width: usize) -> String {
        text.to_string()
    }

    /// Fails with [`Error::UnknownColor`] on a name this output does not know.
    fn colorize(&self, text: &str, color: &str) -> Result<String>;

    fn wrap(&self, text: &str) -> String {
        text.to_string()
    }

    fn join(&self, source: &str, target: &str) -> String {
        format!("{source}\n{target}")
    }
}

const RESET: &str = "\x1b[0m";

/// ANSI codes for colors and text styles.
const ANSI_CODES: [(&str, &str); 12] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("purple", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("bold", "\x1b[1m"),
    ("underline", "\x1b[4m"),
    ("invisible", "\x1b[8m"),
    ("reverse", "\x1b[7m"),
];

const HTML_COLORS: [&str; 8] = [
    "black", "green", "red", "yellow", "blue", "purple", "cyan", "white",
];

/// Terminal output with ANSI escape codes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleFormatter;

impl Formatter for ConsoleFormatter {
    /// Right-align `text` in `width` columns.
    fn pad(&self, text: &str, width: usize) -> String {
        format!("{text:>width$}")
    }

    fn colorize(&self, text: &str, color: &str) -> Result<String> {
        let color = color.to_ascii_lowercase();
        let (_, code) = ANSI_CODES
            .iter()
            .find(|(name, _)| *name == color)
            .ok_or_else(|| Error::UnknownColor(color.clone()))?;
        Ok(format!("{code}{text}{RESET}"))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn html_span(text: &str, color: &str) -> Result<String> {
    let color = color.to_ascii_lowercase();
    if !HTML_COLORS.contains(&color.as_str()) {
        return Err(Error::UnknownColor(color));
    }
    Ok(format!(r#"<span style="color: {color};">{text}</span>"#))
}

/// Inline HTML: two lines of colored spans.
///
/// Whitespace collapses in HTML, so padding has no effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }

    fn colorize(&self, text: &str, color: &str) -> Result<String> {
        html_span(text, color)
    }

    fn join(&self, source: &str, target: &str) -> String {
        format!("{source}<br>{target}")
    }
}

/// An HTML table with one column per aligned pair.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlTableFormatter;

impl Formatter for HtmlTableFormatter {
    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }

    fn colorize(&self, text: &str, color: &str) -> Result<String> {
        html_span(text, color)
    }

    fn wrap(&self, text: &str) -> String {
        format!(r#"<td style="text-align=center">{text}</td>"#)
    }

    fn join(&self, source: &str, target: &str) -> String {
        format!(r#"<table style="table-layout: fixed;"><tr>{source}</tr><tr>{target}</tr></table>"#)
    }
}

/// The output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Console,
    Html,
    HtmlTable,
}

impl Mode {
    pub const NAMES: [&'static str; 3] = ["console", "html", "html-table"];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Console => Self::NAMES[0],
            Mode::Html => Self::NAMES[1],
            Mode::HtmlTable => Self::NAMES[2],
        }
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            Mode::Console => Box::new(ConsoleFormatter),
            Mode::Html => Box::new(HtmlFormatter),
            Mode::HtmlTable => Box::new(HtmlTableFormatter),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "console" => Ok(Mode::Console),
            "html" => Ok(Mode::Html),
            "html-table" | "htmltab" => Ok(Mode::HtmlTable),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console() {
        let f = ConsoleFormatter;
        assert_eq!(f.escape("<&>"), "<&>");
        assert_eq!(f.pad("ab", 4), "  ab");
        assert_eq!(f.pad("abc", 2), "abc");
        assert_eq!(f.colorize("x", "Red").unwrap(), "\x1b[31mx\x1b[0m");
        assert_eq!(f.colorize("x", "bold").unwrap(), "\x1b[1mx\x1b[0m");
        assert_eq!(f.colorize("x", "pink"), Err(Error::UnknownColor("pink".into())));
        assert_eq!(f.join("a", "b"), "a\nb");
    }

    #[test]
    fn html() {
        let f = HtmlFormatter;
        assert_eq!(f.escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
        assert_eq!(f.pad("a", 3), "a");
        assert_eq!(
            f.colorize("a", "Blue").unwrap(),
            r#"<span style="color: blue;">a</span>"#
        );
        assert_eq!(f.colorize("a", "bold"), Err(Error::UnknownColor("bold".into())));
        assert_eq!(f.wrap("a"), "a");
        assert_eq!(f.join("a", "b"), "a<br>b");
    }

    #[test]
    fn html_table() {
        let f = HtmlTableFormatter;
        assert_eq!(f.wrap("a"), r#"<td style="text-align=center">a</td>"#);
        assert_eq!(
            f.join("s", "t"),
            r#"<table style="table-layout: fixed;"><tr>s</tr><tr>t</tr></table>"#
        );
    }

    #[test]
    fn modes() {
        for name in Mode::NAMES {
            assert_eq!(name.parse::<Mode>().unwrap().name(), name);
        }
        assert_eq!("HTMLTab".parse::<Mode>(), Ok(Mode::HtmlTable));
        assert_eq!("pdf".parse::<Mode>(), Err(Error::UnknownMode("pdf".into())));
    }
}
