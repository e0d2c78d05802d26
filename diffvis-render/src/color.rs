use crate::Formatter;
use clap::Args;
use diffvis_types::Result;
use serde::{Deserialize, Serialize};

/// Colors for the three kinds of cells.
#[derive(Args, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[clap(next_help_heading = "Colors")]
pub struct ColorScheme {
    /// Color of matched elements and of gaps.
    #[clap(id = "base-color", long = "base-color", default_value = "green", value_name = "COLOR", hide_short_help = true)]
    pub base: String,

    /// Color of source elements that were replaced or deleted.
    #[clap(id = "source-color", long = "source-color", default_value = "red", value_name = "COLOR", hide_short_help = true)]
    pub source: String,

    /// Color of target elements that were replaced or inserted.
    #[clap(id = "target-color", long = "target-color", default_value = "blue", value_name = "COLOR", hide_short_help = true)]
    pub target: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            base: "green".into(),
            source: "red".into(),
            target: "blue".into(),
        }
    }
}

impl ColorScheme {
    /// Fail early when `formatter` does not know one of the colors.
    pub fn check(&self, formatter: &dyn Formatter) -> Result<()> {
        for color in [&self.base, &self.source, &self.target] {
            formatter.colorize("", color)?;
        }
        Ok(())
    }
}
