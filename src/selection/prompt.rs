//! Prompters: terminal menus via `inquire`, and an unattended one for `--all`

use inquire::{MultiSelect, Select, Text};

use super::{Prompter, SelectionItem, UserAction, View};
use crate::error::SelectionError;

const LIST_HELP: &str = "  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel";

const MODE_ALL: &str = "Install all scripts";
const MODE_CUSTOM: &str = "Choose scripts (featured first, then the full catalog)";

const MARKET_CONFIRM: &str = "Install selected scripts";
const MARKET_SEARCH: &str = "Search the catalog";
const MARKET_EXIT: &str = "Exit";

/// Ticks in the list above are merged only by the install choice
const NEXT_HELP: &str =
    "  Only \"Install selected scripts\" keeps the ticks above; searching or exiting discards them";

/// Interactive prompter backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }

    fn mode_choice(total: usize) -> Result<UserAction, SelectionError> {
        println!();
        let choice = Select::new(
            &format!("{total} script(s) available. How do you want to install?"),
            vec![MODE_ALL, MODE_CUSTOM],
        )
        .with_help_message("  ↑↓ navigate  enter confirm  esc cancel")
        .prompt_skippable()?;

        Ok(match choice {
            Some(MODE_ALL) => UserAction::InstallAll,
            Some(_) => UserAction::Custom,
            None => UserAction::Cancel,
        })
    }

    fn featured(items: &[SelectionItem]) -> Result<UserAction, SelectionError> {
        println!();
        match Self::multi_select("Featured scripts", items)? {
            Some(names) => Ok(UserAction::Continue(names)),
            None => Ok(UserAction::Cancel),
        }
    }

    fn market(
        items: &[SelectionItem],
        filter: Option<&str>,
        selected: usize,
    ) -> Result<UserAction, SelectionError> {
        println!();
        let title = match filter {
            Some(term) => format!("Scripts matching '{term}' ({selected} already selected)"),
            None => format!("All scripts ({selected} already selected)"),
        };

        let picked = if items.is_empty() {
            println!("{title}: nothing matches.");
            Vec::new()
        } else {
            match Self::multi_select(&title, items)? {
                Some(names) => names,
                None => return Ok(UserAction::Cancel),
            }
        };

        let next = Select::new(
            "What next?",
            vec![MARKET_CONFIRM, MARKET_SEARCH, MARKET_EXIT],
        )
        .with_help_message(NEXT_HELP)
        .prompt_skippable()?;

        Ok(match next {
            Some(MARKET_CONFIRM) => UserAction::Confirm(picked),
            Some(MARKET_SEARCH) => UserAction::Search,
            _ => UserAction::Cancel,
        })
    }

    fn search() -> Result<UserAction, SelectionError> {
        let term = Text::new("Search:")
            .with_help_message("Matches names and descriptions. Leave empty to show everything")
            .prompt_skippable()?;
        Ok(UserAction::Submit(term.unwrap_or_default()))
    }

    fn multi_select(
        title: &str,
        items: &[SelectionItem],
    ) -> Result<Option<Vec<String>>, SelectionError> {
        let defaults: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.selected)
            .map(|(i, _)| i)
            .collect();

        let chosen = MultiSelect::new(title, items.to_vec())
            .with_page_size(10)
            .with_default(&defaults)
            .with_help_message(LIST_HELP)
            .prompt_skippable()?;

        Ok(chosen.map(|items| items.into_iter().map(|item| item.name).collect()))
    }
}

impl Prompter for InquirePrompter {
    fn render(&mut self, view: &View) -> Result<UserAction, SelectionError> {
        match view {
            View::ModeChoice { total } => Self::mode_choice(*total),
            View::Featured { items } => Self::featured(items),
            View::Market {
                items,
                filter,
                selected,
            } => Self::market(items, filter.as_deref(), *selected),
            View::SearchInput => Self::search(),
        }
    }
}

/// Answers "install all" without asking anything
#[derive(Debug, Default)]
pub struct InstallAllPrompter;

impl Prompter for InstallAllPrompter {
    fn render(&mut self, view: &View) -> Result<UserAction, SelectionError> {
        match view {
            View::ModeChoice { .. } => Ok(UserAction::InstallAll),
            _ => Ok(UserAction::Cancel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Catalog, Component};
    use crate::selection::{Outcome, SelectionMachine};

    #[test]
    fn test_next_help_names_the_merging_choice() {
        assert!(NEXT_HELP.contains(MARKET_CONFIRM));
        assert!(NEXT_HELP.contains("discards"));
    }

    #[test]
    fn test_install_all_prompter_selects_everything() {
        let catalog = Catalog::new(
            "",
            ["a", "b"]
                .iter()
                .map(|n| Component {
                    name: (*n).to_string(),
                    path: format!("scripts/{n}"),
                    rank: String::new(),
                    description: String::new(),
                })
                .collect(),
        )
        .unwrap();

        let outcome = SelectionMachine::new(&catalog)
            .run(&mut InstallAllPrompter)
            .unwrap();
        match outcome {
            Outcome::Done(selection) => assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["a", "b"]),
            Outcome::Cancelled => panic!("expected Done"),
        }
    }
}
