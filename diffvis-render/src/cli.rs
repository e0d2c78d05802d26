use crate::{render, ColorScheme, Mode};
use clap::Parser;
use diffvis_algos::Alignment;
use diffvis_types::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Parser, Clone, Debug, Default, Serialize, Deserialize)]
#[clap(next_help_heading = "Output")]
pub struct RenderArgs {
    /// Pad each aligned pair of elements to a common width.
    #[clap(short, long)]
    pub padding: bool,

    /// Output format: console, html or html-table.
    #[clap(long, default_value = "console", value_name = "MODE")]
    pub mode: Mode,

    #[clap(flatten)]
    pub colors: ColorScheme,
}

impl RenderArgs {
    pub fn render<T: Display + PartialEq>(&self, alignment: &Alignment<T>) -> Result<String> {
        render(
            alignment.source(),
            alignment.target(),
            alignment.history(),
            &*self.mode.formatter(),
            self.padding,
            &self.colors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffvis_algos::Model;
    use diffvis_types::Error;

    #[test]
    fn defaults() {
        let args = RenderArgs::try_parse_from(["diffvis"]).unwrap();
        assert_eq!(args.mode, Mode::Console);
        assert!(!args.padding);
        assert_eq!(args.colors, ColorScheme::default());
    }

    #[test]
    fn parse() {
        let args = RenderArgs::try_parse_from([
            "diffvis",
            "-p",
            "--mode",
            "html-table",
            "--target-color",
            "cyan",
        ])
        .unwrap();
        assert!(args.padding);
        assert_eq!(args.mode, Mode::HtmlTable);
        assert_eq!(args.colors.target, "cyan");
        assert!(RenderArgs::try_parse_from(["diffvis", "--mode", "pdf"]).is_err());
    }

    #[test]
    fn render_alignment() {
        let a = Alignment::new(Model::default(), vec!['a'], vec!['a']).unwrap();
        let args = RenderArgs {
            mode: Mode::Html,
            ..Default::default()
        };
        let span = r#"<span style="color: green;">a</span>"#;
        assert_eq!(args.render(&a), Ok(format!("{span}<br>{span}")));

        let args = RenderArgs {
            colors: ColorScheme {
                target: "teal".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(args.render(&a), Err(Error::UnknownColor("teal".into())));
    }
}
