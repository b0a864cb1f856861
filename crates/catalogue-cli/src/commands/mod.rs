use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use catalogue_core::models::{SearchRequest, SubjectWorks, ThinkerSubjects};
use catalogue_core::{Catalogue, CatalogueConfig, audit_data_root};
use serde_json::{Value, json};

use crate::cli::Commands;

mod web;

#[cfg(test)]
mod tests;

pub(crate) fn run_from_root(root: Option<&Path>, command: Commands) -> Result<()> {
    let mut config = CatalogueConfig::from_env().context("invalid catalogue configuration")?;
    if let Some(root) = root {
        config = config.with_data_root(root);
    }
    run(&config, command)
}

fn run(config: &CatalogueConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Web(args) => web::serve(config, &args.host, args.port),
        Commands::Audit => {
            let report = audit_data_root(&config.data_root)?;
            print_json(&report)?;
            if !report.is_consistent() {
                bail!(
                    "record store audit found {} inconsistencies",
                    report.drift_count()
                );
            }
            Ok(())
        }
        command => {
            let catalogue = Catalogue::from_config(config);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("failed to build runtime")?;
            let payload = runtime.block_on(query_payload(&catalogue, command))?;
            print_json(&payload)
        }
    }
}

/// JSON payload of a read command, shaped like the matching endpoint's data.
async fn query_payload(catalogue: &Catalogue, command: Commands) -> Result<Value> {
    let payload = match command {
        Commands::Index => {
            let index = catalogue.load_category_index().await?;
            json!({ "categories": index.categories })
        }
        Commands::Categories => {
            let categories = catalogue.available_categories().await?;
            json!({ "count": categories.len(), "categories": categories })
        }
        Commands::Category(args) => {
            let thinkers = catalogue.load_category_thinkers_metadata(&args.key).await;
            json!({ "category": args.key, "count": thinkers.len(), "thinkers": thinkers })
        }
        Commands::Thinkers => {
            let thinkers = catalogue.load_all_thinkers_metadata().await?;
            json!({ "count": thinkers.len(), "thinkers": thinkers })
        }
        Commands::Thinker(args) if args.metadata_only => {
            let Some(record) = catalogue
                .find_thinker_metadata(&args.category, &args.name)
                .await
            else {
                bail!("thinker not found: {} in {}", args.name, args.category);
            };
            serde_json::to_value(ThinkerSubjects {
                subjects: record.subject_names(),
                category: args.category,
                name: args.name,
            })?
        }
        Commands::Thinker(args) => {
            let Some(thinker) = catalogue.load_thinker(&args.category, &args.name).await else {
                bail!("thinker not found: {} in {}", args.name, args.category);
            };
            serde_json::to_value(thinker)?
        }
        Commands::Subject(args) => {
            let works = catalogue
                .load_thinker_works_by_subject(&args.category, &args.name, &args.subject)
                .await?;
            serde_json::to_value(SubjectWorks {
                count: works.len(),
                works,
                category: args.category,
                thinker: args.name,
                subject: args.subject,
            })?
        }
        Commands::Search(args) => serde_json::to_value(
            catalogue
                .search(&SearchRequest {
                    query: args.query,
                    category: args.category,
                })
                .await?,
        )?,
        Commands::Compare(args) => serde_json::to_value(catalogue.compare(&args.names).await?)?,
        Commands::Random(args) => {
            serde_json::to_value(catalogue.random_thinker(args.category.as_deref()).await?)?
        }
        Commands::Stats => serde_json::to_value(catalogue.statistics().await?)?,
        Commands::Web(_) | Commands::Audit => bail!("not a read command"),
    };
    Ok(payload)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
