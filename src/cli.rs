use crate::error::{CajaError, Result};
use caja_common::{ExactGroup, ExactSelection, FacetGroup, FacetSelection, Selection};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caja")]
#[command(about = "Caja de Herramientas catalog tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog JSON file (default: config, then data/herramientas.json)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the catalog (duplicate ids, empty titles, empty groups)
    Check,

    /// List items, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the filtered items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full detail of one item
    Show {
        /// Item id
        #[arg(required = true)]
        id: u32,
    },

    /// List the distinct tag values of every filter group
    Tags,

    /// Show/edit settings
    Config {
        /// Default catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Excerpt length in characters
        #[arg(long)]
        set_description_limit: Option<usize>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

/// Filter flags. Repeat a faceted flag to OR values within the group.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Users tag (usuarios)
    #[arg(long = "users")]
    pub users: Vec<String>,

    /// Usage tag (uso)
    #[arg(long = "usage")]
    pub usage: Vec<String>,

    /// Kind tag (tipo)
    #[arg(long = "kind")]
    pub kind: Vec<String>,

    /// Category (categoria), exact match
    #[arg(long)]
    pub category: Option<String>,

    /// Duration (duracion), exact match
    #[arg(long)]
    pub duration: Option<String>,

    /// Participants (participantes), exact match
    #[arg(long)]
    pub participants: Option<String>,
}

impl FilterArgs {
    /// Selection under the contract the flags imply; no flags is an empty
    /// faceted selection
    pub fn selection(&self) -> Result<Selection> {
        let facets = [
            (FacetGroup::Users, &self.users),
            (FacetGroup::Usage, &self.usage),
            (FacetGroup::Kind, &self.kind),
        ];
        let exact = [
            (ExactGroup::Category, &self.category),
            (ExactGroup::Duration, &self.duration),
            (ExactGroup::Participants, &self.participants),
        ];

        let any_facet = facets.iter().any(|(_, values)| !values.is_empty());
        let any_exact = exact.iter().any(|(_, value)| value.is_some());

        match (any_facet, any_exact) {
            (true, true) => Err(CajaError::MixedFilters),
            (false, true) => {
                let mut selection = ExactSelection::new();
                for (group, value) in exact {
                    selection.select(group, value.as_deref());
                }
                Ok(Selection::Exact(selection))
            }
            _ => {
                let mut selection = FacetSelection::new();
                for (group, values) in facets {
                    for value in values {
                        selection.set(group, value, true);
                    }
                }
                Ok(Selection::Faceted(selection))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caja_common::{Filter, FilterContract};

    #[test]
    fn test_no_flags_is_empty_faceted() {
        let selection = FilterArgs::default().selection().expect("selection");
        assert_eq!(selection.contract(), FilterContract::Faceted);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_faceted_flags() {
        let args = FilterArgs {
            users: vec!["Analista".into(), "Diseñador".into()],
            kind: vec!["Guías".into()],
            ..Default::default()
        };
        let Selection::Faceted(selection) = args.selection().expect("selection") else {
            panic!("expected faceted selection");
        };
        assert_eq!(selection.count(FacetGroup::Users), 2);
        assert!(selection.is_selected(FacetGroup::Kind, "Guías"));
    }

    #[test]
    fn test_exact_flags() {
        let args = FilterArgs {
            category: Some("Ideación".into()),
            ..Default::default()
        };
        let Selection::Exact(selection) = args.selection().expect("selection") else {
            panic!("expected exact selection");
        };
        assert_eq!(selection.selected(ExactGroup::Category), Some("Ideación"));
        assert_eq!(selection.selected(ExactGroup::Duration), None);
    }

    #[test]
    fn test_mixed_flags_rejected() {
        let args = FilterArgs {
            users: vec!["Analista".into()],
            duration: Some("30 min".into()),
            ..Default::default()
        };
        assert!(matches!(args.selection(), Err(CajaError::MixedFilters)));
    }

    #[test]
    fn test_cli_parses_repeated_flags() {
        let cli = Cli::try_parse_from([
            "caja", "list", "--users", "Analista", "--users", "Líder", "--json",
        ])
        .expect("parse failed");
        match cli.command {
            Commands::List { filters, json } => {
                assert_eq!(filters.users, vec!["Analista", "Líder"]);
                assert!(json);
            }
            _ => panic!("expected list"),
        }
    }
}
