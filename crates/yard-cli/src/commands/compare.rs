use anyhow::Context;
use serde::Serialize;
use yard_core::StarshipDetails;
use yard_session::SessionError;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::detail::detail_fields;
use crate::output::{output, table};

#[derive(Debug, Serialize)]
struct Rejection {
    uid: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct CompareOutput {
    selected: Vec<StarshipDetails>,
    rejected: Vec<Rejection>,
}

pub async fn run(uids: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for uid in uids {
        match ctx.session.compare_add_uid(uid).await {
            Ok(_) => accepted.push(uid.clone()),
            Err(error @ SessionError::Compare(_)) => rejected.push(Rejection {
                uid: uid.clone(),
                reason: error.to_string(),
            }),
            Err(error) => {
                return Err(error).with_context(|| format!("failed to load starship {uid}"));
            }
        }
    }

    let selected = ctx
        .session
        .details(&accepted)
        .await
        .context("failed to load comparison records")?;
    let out = CompareOutput { selected, rejected };

    if flags.format != OutputFormat::Table {
        return output(&out, flags.format);
    }

    if !flags.quiet {
        for rejection in &out.rejected {
            eprintln!("skipped {}: {}", rejection.uid, rejection.reason);
        }
    }
    println!("{}", comparison_table(&out.selected));
    Ok(())
}

/// One row per attribute, one column per starship.
fn comparison_table(selected: &[StarshipDetails]) -> String {
    if selected.is_empty() {
        return String::from("(nothing to compare)");
    }

    let columns = selected.iter().map(detail_fields).collect::<Vec<_>>();
    let mut headers = vec!["attribute"];
    headers.extend(selected.iter().map(|details| details.name.as_str()));

    let rows = columns[0]
        .iter()
        .enumerate()
        .map(|(index, (label, _))| {
            let mut row = vec![(*label).to_string()];
            row.extend(columns.iter().map(|fields| fields[index].1.clone()));
            row
        })
        .collect::<Vec<_>>();

    table(&headers, &rows)
}
