//! Side-by-side colored rendering of an edit history, for terminals and HTML.

pub mod cli;
mod color;
mod formatter;

pub use color::ColorScheme;
pub use formatter::{ConsoleFormatter, Formatter, HtmlFormatter, HtmlTableFormatter, Mode};

use diffvis_types::{EditHistory, EditOp, Result};
use log::debug;
use std::{cmp::max, fmt::Display};

/// Render `source` above `target`, one cell per operation of `history`.
///
/// Matched pairs use the base color. Replaced and deleted source elements use
/// the source color, replaced and inserted target elements the target color.
/// The missing side of an indel is an empty cell in the base color.
pub fn render<T: Display>(
    source: &[T],
    target: &[T],
    history: &EditHistory,
    formatter: &dyn Formatter,
    padding: bool,
    scheme: &ColorScheme,
) -> Result<String> {
    history.verify(source.len(), target.len())?;
    scheme.check(formatter)?;
    debug!("Rendering {} operations", history.len());

    let cell = |text: &str, color: &str, width: usize| -> Result<String> {
        let mut text = formatter.escape(text);
        if padding {
            text = formatter.pad(&text, width);
        }
        Ok(formatter.wrap(&formatter.colorize(&text, color)?))
    };

    let mut top = String::new();
    let mut bottom = String::new();
    let (mut i, mut j) = (0, 0);
    for &op in history {
        let s = if op.advances_source() { source[i].to_string() } else { String::new() };
        let t = if op.advances_target() { target[j].to_string() } else { String::new() };
        let width = max(s.chars().count(), t.chars().count());
        let (base, src, tgt) = (&*scheme.base, &*scheme.source, &*scheme.target);
        let (s_color, t_color) = match op {
            EditOp::Match => (base, base),
            EditOp::Replace => (src, tgt),
            EditOp::Delete => (src, base),
            EditOp::Insert => (base, tgt),
        };
        top += &cell(&s, s_color, width)?;
        bottom += &cell(&t, t_color, width)?;
        i += op.advances_source() as usize;
        j += op.advances_target() as usize;
    }
    Ok(formatter.join(&top, &bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffvis_types::{EditOp::*, Error};

    fn green(s: &str) -> String {
        format!("\x1b[32m{s}\x1b[0m")
    }
    fn red(s: &str) -> String {
        format!("\x1b[31m{s}\x1b[0m")
    }
    fn blue(s: &str) -> String {
        format!("\x1b[34m{s}\x1b[0m")
    }

    #[test]
    fn console() {
        let h = EditHistory::new(vec![Delete, Match, Insert]);
        let out = render(&['a', 'b'], &['b', 'c'], &h, &ConsoleFormatter, false, &ColorScheme::default()).unwrap();
        let top = red("a") + &green("b") + &green("");
        let bottom = green("") + &green("b") + &blue("c");
        assert_eq!(out, format!("{top}\n{bottom}"));
    }

    #[test]
    fn console_padding() {
        let h = EditHistory::new(vec![Match, Replace]);
        let out = render(
            &["the", "cat"],
            &["the", "horse"],
            &h,
            &ConsoleFormatter,
            true,
            &ColorScheme::default(),
        )
        .unwrap();
        let top = green("the") + &red("  cat");
        let bottom = green("the") + &blue("horse");
        assert_eq!(out, format!("{top}\n{bottom}"));

        // A deleted element leaves a blank of the same width below it.
        let h = EditHistory::new(vec![Delete]);
        let out = render(&["dog"], &[], &h, &ConsoleFormatter, true, &ColorScheme::default()).unwrap();
        assert_eq!(out, format!("{}\n{}", red("dog"), green("   ")));
    }

    #[test]
    fn html() {
        let h = EditHistory::new(vec![Replace]);
        let out = render(&["<"], &["&"], &h, &HtmlFormatter, true, &ColorScheme::default()).unwrap();
        assert_eq!(
            out,
            r#"<span style="color: red;">&lt;</span><br><span style="color: blue;">&amp;</span>"#
        );
    }

    #[test]
    fn html_table() {
        let h = EditHistory::new(vec![Match]);
        let out = render(&['x'], &['x'], &h, &HtmlTableFormatter, false, &ColorScheme::default()).unwrap();
        let td = r#"<td style="text-align=center"><span style="color: green;">x</span></td>"#;
        assert_eq!(
            out,
            format!(r#"<table style="table-layout: fixed;"><tr>{td}</tr><tr>{td}</tr></table>"#)
        );
    }

    #[test]
    fn empty() {
        let out = render::<char>(&[], &[], &EditHistory::default(), &ConsoleFormatter, true, &ColorScheme::default());
        assert_eq!(out, Ok("\n".to_string()));
    }

    #[test]
    fn unknown_color() {
        let scheme = ColorScheme {
            base: "pink".into(),
            ..Default::default()
        };
        let out = render::<char>(&[], &[], &EditHistory::default(), &ConsoleFormatter, false, &scheme);
        assert_eq!(out, Err(Error::UnknownColor("pink".into())));

        // Styles only exist on the console.
        let scheme = ColorScheme {
            source: "underline".into(),
            ..Default::default()
        };
        let h = EditHistory::new(vec![Delete]);
        assert!(render(&['a'], &[], &h, &ConsoleFormatter, false, &scheme).is_ok());
        assert!(render(&['a'], &[], &h, &HtmlFormatter, false, &scheme).is_err());
    }

    #[test]
    fn mismatched_history() {
        let h = EditHistory::new(vec![Match]);
        assert_eq!(
            render(&['a', 'b'], &['a'], &h, &ConsoleFormatter, false, &ColorScheme::default()),
            Err(Error::HistoryMismatch { step: 1 })
        );
    }
}
