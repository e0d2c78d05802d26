use crate::{
    model::Model,
    template::{extract, Template},
};
use diffvis_types::{CostTable, EditHistory, OpCounts, Result};
use itertools::Itertools;
use log::debug;
use std::fmt::Display;

/// A source/target pair aligned once under a fixed model.
///
/// The cost table and edit history are computed on construction and never
/// change afterwards.
#[derive(Clone, Debug)]
pub struct Alignment<T> {
    source: Vec<T>,
    target: Vec<T>,
    model: Model,
    table: CostTable,
    history: EditHistory,
}

impl<T: PartialEq> Alignment<T> {
    pub fn new(model: Model, source: Vec<T>, target: Vec<T>) -> Result<Self> {
        let table = model.build(&source, &target);
        let history = model.trace(&table, &source, &target)?;
        debug!(
            "Aligned {}x{} with {model}: score {}, {} edits",
            source.len(),
            target.len(),
            table.last(),
            history.counts().edits()
        );
        Ok(Self {
            source,
            target,
            model,
            table,
            history,
        })
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn target(&self) -> &[T] {
        &self.target
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn table(&self) -> &CostTable {
        &self.table
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// The model's score read from the stored table.
    pub fn distance(&self, normalize: bool) -> f64 {
        self.model.score(
            self.table.last(),
            self.source.len(),
            self.target.len(),
            normalize,
        )
    }

    /// Number of non-`match` operations, regardless of their cost.
    pub fn edit_count(&self) -> usize {
        self.counts().edits()
    }

    pub fn counts(&self) -> OpCounts {
        self.history.counts()
    }
}

impl<T: Clone + Default> Alignment<T> {
    pub fn template(&self, placeholder: T) -> Result<Template<T>> {
        extract(&self.source, &self.target, &self.history, placeholder)
    }
}

impl<T: Clone + Default + Display> Alignment<T> {
    /// The template with its elements concatenated.
    pub fn template_string(&self, placeholder: T) -> Result<String> {
        Ok(self.template(placeholder)?.iter().join(""))
    }
}
