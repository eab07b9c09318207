use anyhow::Context;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::detail::detail_fields;
use crate::output::{output, table};

pub async fn run(uid: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = ctx
        .session
        .detail(uid)
        .await
        .with_context(|| format!("failed to load starship {uid}"))?;

    if flags.format != OutputFormat::Table {
        return output(&details, flags.format);
    }

    println!("{}", details.name);
    let rows = detail_fields(&details)
        .into_iter()
        .map(|(label, value)| vec![label.to_string(), value])
        .collect::<Vec<_>>();
    println!("{}", table(&["field", "value"], &rows));
    Ok(())
}
