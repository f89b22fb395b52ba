use caja::{cli, config, error, loader, report};
use caja_common::{filter, validate, ModalContent};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CajaError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let catalog_path = config.resolve_catalog(cli.catalog.clone());

    if cli.verbose {
        eprintln!("[caja] catalog: {}", catalog_path.display());
    }

    match cli.command {
        Commands::Check => {
            println!("🧰 caja - check\n");

            let items = loader::read_items(&catalog_path)?;
            println!("✔ {} items read", items.len());

            let issues = validate(&items);
            if issues.is_empty() {
                println!("✅ No issues found");
            } else {
                print!("{}", report::issues(&issues));
                return Err(CajaError::InvalidCatalog(issues.len()));
            }
        }

        Commands::List { filters, json } => {
            let selection = filters.selection()?;
            let catalog = loader::load_catalog(&catalog_path)?;
            if cli.verbose {
                eprintln!("[caja] {:?} contract, {} items", selection.contract(), catalog.len());
            }

            let items = filter::apply(&selection, catalog.all());
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print!("{}", report::list(&items, config.description_limit));
            }
        }

        Commands::Show { id } => {
            let catalog = loader::load_catalog(&catalog_path)?;
            let item = catalog
                .by_id(id)
                .ok_or(caja_common::Error::NotFound(id))?;
            print!("{}", report::detail(&ModalContent::from_item(item)));
        }

        Commands::Tags => {
            let catalog = loader::load_catalog(&catalog_path)?;
            print!("{}", report::tags(&catalog));
        }

        Commands::Config { set_catalog, set_description_limit, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
                changed = true;
            }
            if let Some(limit) = set_description_limit {
                config.description_limit = limit;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings:");
                println!(
                    "  catalog: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("{} (default)", config::DEFAULT_CATALOG))
                );
                println!("  description limit: {}", config.description_limit);
            }
        }
    }

    Ok(())
}
