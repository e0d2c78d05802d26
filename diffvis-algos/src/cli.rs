use crate::Model;
use clap::Parser;
use diffvis_types::{Cost, CostModel, Result};
use serde::{Deserialize, Serialize};

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Alignment")]
pub struct AlignArgs {
    /// Alignment model: edit-distance (levenshtein) or longest-common-subsequence (lcs).
    #[clap(short, long, default_value = "edit-distance", value_name = "MODEL")]
    pub model: Model,

    /// Cost of replacing one element by another.
    #[clap(long, default_value_t = 1, hide_short_help = true)]
    pub sub: Cost,

    /// Align whitespace-separated words instead of characters.
    #[clap(short, long)]
    pub tokens: bool,
}

impl Default for AlignArgs {
    fn default() -> Self {
        Self {
            model: Model::default(),
            sub: 1,
            tokens: false,
        }
    }
}

impl AlignArgs {
    /// The selected model with the configured costs applied.
    pub fn model(&self) -> Result<Model> {
        Ok(self.model.with_costs(CostModel::new(self.sub)?))
    }

    /// Split an input into the elements to align.
    pub fn split(&self, text: &str) -> Vec<String> {
        if self.tokens {
            text.split_whitespace().map(String::from).collect()
        } else {
            text.chars().map(String::from).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffvis_types::Error;

    #[test]
    fn split() {
        let mut args = AlignArgs::default();
        assert_eq!(args.split("ab c"), ["a", "b", " ", "c"]);
        assert!(args.split("").is_empty());
        args.tokens = true;
        assert_eq!(args.split("  the  cat\tsat "), ["the", "cat", "sat"]);
    }

    #[test]
    fn costs() {
        let mut args = AlignArgs::default();
        assert_eq!(args.model(), Ok(Model::default()));
        args.sub = 3;
        assert_eq!(
            args.model(),
            Ok(Model::EditDistance(CostModel::new(3).unwrap()))
        );
        args.sub = 0;
        assert!(matches!(args.model(), Err(Error::InvalidCostModel { .. })));
    }

    #[test]
    fn parse() {
        let args = AlignArgs::try_parse_from(["diffvis", "--model", "lcs", "-t"]).unwrap();
        assert_eq!(args.model, Model::LongestCommonSubsequence);
        assert!(args.tokens);
        assert!(AlignArgs::try_parse_from(["diffvis", "-m", "hamming"]).is_err());
    }
}
