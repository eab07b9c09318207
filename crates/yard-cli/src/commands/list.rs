use anyhow::Context;
use serde::Serialize;
use yard_core::{Starship, ViewQuery, ViewResult};

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table};

#[derive(Debug, Serialize)]
struct ListOutput {
    query: String,
    page: usize,
    #[serde(flatten)]
    view: ViewResult<Starship>,
}

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, ctx.session.settings().view_page_size);
    let view = ctx
        .session
        .load_view(&query)
        .await
        .context("failed to load starship collection")?;

    let out = ListOutput {
        query: query.to_query_string(),
        page: query.page.max(1),
        view,
    };

    if flags.format != OutputFormat::Table {
        return output(&out, flags.format);
    }

    if out.view.results.is_empty() {
        println!("(no starships match)");
    } else {
        let rows = out
            .view
            .results
            .iter()
            .map(|ship| vec![ship.uid.clone(), ship.name.clone()])
            .collect::<Vec<_>>();
        println!("{}", table(&["uid", "name"], &rows));
    }
    println!("{}", footer(&out));
    Ok(())
}

/// `--query` seeds the location; explicit flags override it.
fn build_query(args: &ListArgs, default_page_size: usize) -> ViewQuery {
    let page_size = args.page_size.unwrap_or(default_page_size);
    let mut query = args.query.as_deref().map_or_else(
        || ViewQuery::new(page_size),
        |raw| ViewQuery::from_query_string(raw, page_size),
    );

    if let Some(search) = &args.search {
        query.search = Some(search.clone());
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    query
}

fn footer(out: &ListOutput) -> String {
    let mut nav = Vec::new();
    if out.view.has_previous {
        nav.push("prev");
    }
    if out.view.has_next {
        nav.push("next");
    }
    let nav = if nav.is_empty() {
        String::new()
    } else {
        format!(" [{}]", nav.join("|"))
    };

    format!(
        "page {}/{} ({} records){}  ?{}",
        out.page, out.view.total_pages, out.view.total_records, nav, out.query
    )
}
