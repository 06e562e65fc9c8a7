//! Interactive selection state machine
//!
//! The flow is an explicit finite-state loop:
//!
//! ```text
//! ModeChoice --InstallAll--> Done
//!     |Custom            \--Cancel--> Cancelled
//!     v
//! Featured --Continue/Cancel(non-empty)--> Market <--Submit-- SearchInput
//!     \--Cancel(empty)--> Cancelled          |  \--Search------^
//!                                            |--Confirm--> Done
//!                                            \--Cancel--> Done | Cancelled
//! ```
//!
//! Every state is rendered through a [`Prompter`], which turns a [`View`] into
//! a [`UserAction`]. The accumulated [`SelectionSet`] lives in
//! [`MachineState`] and is threaded through [`SelectionMachine::step`].

pub mod prompt;
pub mod search;

pub use prompt::{InquirePrompter, InstallAllPrompter};

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::SelectionError;
use crate::manifest::{Catalog, Component};

/// Names chosen so far. Insertion is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Stop accepting changes
    pub fn freeze(self) -> Selection {
        Selection { names: self.names }
    }
}

impl<S: Into<String>> Extend<S> for SelectionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Frozen selection handed to the installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One row of a multi-select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub name: String,
    pub description: String,
    pub selected: bool,
}

impl SelectionItem {
    fn from_component(component: &Component, selection: &SelectionSet) -> Self {
        Self {
            name: component.name.clone(),
            description: component.description.clone(),
            selected: selection.contains(&component.name),
        }
    }
}

impl fmt::Display for SelectionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} - {}", self.name, self.description)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    ModeChoice,
    Featured,
    Market,
    SearchInput,
    Done,
    Cancelled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ModeChoice => "mode choice",
            Stage::Featured => "featured",
            Stage::Market => "market",
            Stage::SearchInput => "search",
            Stage::Done => "done",
            Stage::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

/// What a prompter is asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    ModeChoice {
        total: usize,
    },
    Featured {
        items: Vec<SelectionItem>,
    },
    Market {
        items: Vec<SelectionItem>,
        filter: Option<String>,
        selected: usize,
    },
    SearchInput,
}

/// What the user did with a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Mode choice: select every script
    InstallAll,
    /// Mode choice: pick scripts by hand
    Custom,
    /// Featured: move on to the market with these names toggled on
    Continue(Vec<String>),
    /// Market: finish with these names toggled on
    Confirm(Vec<String>),
    /// Market: enter a search term
    Search,
    /// Search input: the entered term
    Submit(String),
    /// Cancel in mode choice or featured, exit in market
    Cancel,
}

impl UserAction {
    fn label(&self) -> &'static str {
        match self {
            UserAction::InstallAll => "install all",
            UserAction::Custom => "custom",
            UserAction::Continue(_) => "continue",
            UserAction::Confirm(_) => "confirm",
            UserAction::Search => "search",
            UserAction::Submit(_) => "submit",
            UserAction::Cancel => "cancel",
        }
    }
}

/// Renders one stage and reports what the user chose
pub trait Prompter {
    fn render(&mut self, view: &View) -> Result<UserAction, SelectionError>;
}

/// Terminal result of a selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(Selection),
    Cancelled,
}

/// Everything the machine carries between transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineState {
    pub stage: Stage,
    pub selection: SelectionSet,
    /// Indices into the Full subset currently shown in the market
    market: Vec<usize>,
    filter: Option<String>,
}

impl MachineState {
    /// Names currently listed in the market
    #[cfg(test)]
    pub fn market_names<'c>(&self, machine: &SelectionMachine<'c>) -> Vec<&'c str> {
        self.market
            .iter()
            .map(|&i| machine.full[i].name.as_str())
            .collect()
    }

    #[cfg(test)]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

pub struct SelectionMachine<'c> {
    full: Vec<&'c Component>,
    featured: Vec<&'c Component>,
}

impl<'c> SelectionMachine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            full: catalog.full(),
            featured: catalog.featured(),
        }
    }

    pub fn initial_state(&self) -> MachineState {
        MachineState {
            stage: Stage::ModeChoice,
            selection: SelectionSet::new(),
            market: (0..self.full.len()).collect(),
            filter: None,
        }
    }

    /// Drive the machine to a terminal stage
    pub fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Outcome, SelectionError> {
        let mut state = self.initial_state();
        loop {
            match state.stage {
                Stage::Done => return Self::finish(state.selection),
                Stage::Cancelled => return Ok(Outcome::Cancelled),
                _ => {}
            }
            let view = self.view(&state);
            let action = prompter.render(&view)?;
            let from = state.stage;
            state = self.step(state, action)?;
            tracing::debug!(from = %from, to = %state.stage, selected = state.selection.len(), "selection transition");
        }
    }

    /// Build the view for a non-terminal stage
    pub fn view(&self, state: &MachineState) -> View {
        match state.stage {
            Stage::ModeChoice => View::ModeChoice {
                total: self.full.len(),
            },
            Stage::Featured => View::Featured {
                items: self.items(self.featured.iter().copied(), &state.selection),
            },
            Stage::Market => View::Market {
                items: self.items(state.market.iter().map(|&i| self.full[i]), &state.selection),
                filter: state.filter.clone(),
                selected: state.selection.len(),
            },
            Stage::SearchInput | Stage::Done | Stage::Cancelled => View::SearchInput,
        }
    }

    /// Apply one user action to the current state
    pub fn step(&self, state: MachineState, action: UserAction) -> Result<MachineState, SelectionError> {
        let MachineState {
            stage,
            mut selection,
            market,
            filter,
        } = state;

        let next = |stage, selection, market, filter| MachineState {
            stage,
            selection,
            market,
            filter,
        };

        match (stage, action) {
            (Stage::ModeChoice, UserAction::InstallAll) => {
                selection.extend(self.full.iter().map(|c| c.name.as_str()));
                Ok(next(Stage::Done, selection, market, filter))
            }
            (Stage::ModeChoice, UserAction::Custom) => {
                let stage = if self.featured.is_empty() {
                    Stage::Market
                } else {
                    Stage::Featured
                };
                Ok(next(stage, selection, market, filter))
            }
            (Stage::ModeChoice, UserAction::Cancel) => {
                Ok(next(Stage::Cancelled, selection, market, filter))
            }
            (Stage::Featured, UserAction::Continue(names)) => {
                self.merge(&mut selection, &self.featured, names, stage)?;
                Ok(next(Stage::Market, selection, market, filter))
            }
            (Stage::Featured, UserAction::Cancel) => {
                let stage = if selection.is_empty() {
                    Stage::Cancelled
                } else {
                    Stage::Market
                };
                Ok(next(stage, selection, market, filter))
            }
            (Stage::Market, UserAction::Confirm(names)) => {
                let visible: Vec<&Component> = market.iter().map(|&i| self.full[i]).collect();
                self.merge(&mut selection, &visible, names, stage)?;
                Ok(next(Stage::Done, selection, market, filter))
            }
            (Stage::Market, UserAction::Search) => {
                Ok(next(Stage::SearchInput, selection, market, filter))
            }
            (Stage::Market, UserAction::Cancel) => {
                let stage = if selection.is_empty() {
                    Stage::Cancelled
                } else {
                    Stage::Done
                };
                Ok(next(stage, selection, market, filter))
            }
            (Stage::SearchInput, UserAction::Submit(term)) => {
                let term = term.trim();
                let (market, filter) = if term.is_empty() {
                    ((0..self.full.len()).collect(), None)
                } else {
                    (search::filter(&self.full, term), Some(term.to_string()))
                };
                Ok(next(Stage::Market, selection, market, filter))
            }
            (stage, action) => Err(SelectionError::UnexpectedAction {
                stage: stage.to_string(),
                action: action.label().to_string(),
            }),
        }
    }

    fn items<'a>(
        &self,
        components: impl Iterator<Item = &'a Component>,
        selection: &SelectionSet,
    ) -> Vec<SelectionItem> {
        components
            .map(|c| SelectionItem::from_component(c, selection))
            .collect()
    }

    /// Union `names` into the selection; every name must be on screen
    fn merge(
        &self,
        selection: &mut SelectionSet,
        shown: &[&Component],
        names: Vec<String>,
        stage: Stage,
    ) -> Result<(), SelectionError> {
        for name in names {
            if !shown.iter().any(|c| c.name == name) {
                return Err(SelectionError::UnexpectedAction {
                    stage: stage.to_string(),
                    action: format!("select '{name}'"),
                });
            }
            selection.insert(name);
        }
        Ok(())
    }

    fn finish(selection: SelectionSet) -> Result<Outcome, SelectionError> {
        if selection.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(Outcome::Done(selection.freeze()))
    }
}
