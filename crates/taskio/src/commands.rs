//! Command handlers bridging the CLI surface to the session.

use anyhow::{Context, Result, bail};
use time::Date;

use taskio_app::{AppConfig, Session, Theme};
use taskio_core::Task;
use taskio_core::date;
use taskio_core::filters::SearchFilters;
use taskio_core::id::TaskId;
use taskio_core::status::TaskStatus;

use crate::palette::Painter;
use crate::render;
use crate::{Command, ViewArgs};

/// Dispatch a parsed command against the session.
pub async fn run(command: Command, mut session: Session, config: AppConfig, painter: Painter) -> Result<()> {
    match command {
        Command::Ls { view } => handle_ls(&mut session, &view, &painter).await,
        Command::Search {
            query,
            status,
            category,
            from,
            to,
            view,
        } => handle_search(&mut session, query, status, category, from, to, &view, &painter).await,
        Command::Show { id } => handle_show(&session, TaskId(id), &painter).await,
        Command::Add {
            title,
            description,
            status,
            due,
            category,
        } => handle_add(&mut session, title, description, status, due, category).await,
        Command::Edit {
            id,
            title,
            description,
            status,
            due,
            category,
        } => handle_edit(&mut session, TaskId(id), title, description, status, due, category).await,
        Command::Rm { id } => handle_rm(&mut session, TaskId(id)).await,
        Command::Categories => handle_categories(&session).await,
        Command::Theme { mode } => handle_theme(config, mode),
    }
}

async fn handle_ls(session: &mut Session, view: &ViewArgs, painter: &Painter) -> Result<()> {
    session.set_options(view.to_options());
    session.refresh().await?;
    print!("{}", render::listing(&session.view(), painter));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_search(
    session: &mut Session,
    query: Option<String>,
    status: Option<TaskStatus>,
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
    view: &ViewArgs,
    painter: &Painter,
) -> Result<()> {
    let filters = SearchFilters {
        search_term: query,
        status,
        category,
        start_date: parse_date_arg("--from", from.as_deref())?,
        end_date: parse_date_arg("--to", to.as_deref())?,
    };
    session.set_options(view.to_options());
    session.apply_filters(filters).await?;
    print!("{}", render::listing(&session.view(), painter));
    Ok(())
}

async fn handle_show(session: &Session, id: TaskId, painter: &Painter) -> Result<()> {
    match session.fetch(id).await? {
        Some(task) => print!("{}", render::detail(&task, painter)),
        None => println!("task {id} not found"),
    }
    Ok(())
}

async fn handle_add(
    session: &mut Session,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let task = Task {
        id: None,
        title,
        description,
        status,
        due_date: parse_date_arg("--due", due.as_deref())?,
        category,
    };
    let created = session.create(&task).await?;
    match created.id {
        Some(id) => println!("created task {id}: {}", created.title),
        None => println!("created task: {}", created.title),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn handle_edit(
    session: &mut Session,
    id: TaskId,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    due: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let Some(current) = session.fetch(id).await? else {
        bail!("task {id} not found");
    };

    let due_date = match due.as_deref() {
        Some(raw) => parse_date_arg("--due", Some(raw))?,
        None => current.due_date,
    };
    let task = Task {
        id: Some(id),
        title: title.unwrap_or(current.title),
        description: description.or(current.description),
        status: status.unwrap_or(current.status),
        due_date,
        category: category.or(current.category),
    };

    let updated = session.update(id, &task).await?;
    println!("updated task {id}: {}", updated.title);
    Ok(())
}

async fn handle_rm(session: &mut Session, id: TaskId) -> Result<()> {
    session.remove(id).await?;
    println!("deleted task {id}");
    Ok(())
}

async fn handle_categories(session: &Session) -> Result<()> {
    let categories = session.categories().await?;
    if categories.is_empty() {
        println!("no categories in use");
        return Ok(());
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

fn handle_theme(mut config: AppConfig, mode: Option<Theme>) -> Result<()> {
    let next = mode.unwrap_or_else(|| config.ui.theme.toggled());
    config.ui.theme = next;
    config.save()?;
    println!("theme: {next}");
    Ok(())
}

fn parse_date_arg(flag: &str, value: Option<&str>) -> Result<Option<Date>> {
    value
        .map(|raw| {
            date::parse(raw).with_context(|| format!("invalid {flag} date (expected YYYY-MM-DD): {raw}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn date_args_parse_iso_dates() {
        let parsed = parse_date_arg("--due", Some("2026-08-14"))
            .unwrap_or_else(|err| panic!("must parse: {err}"));
        assert_eq!(parsed, Some(date!(2026 - 08 - 14)));
        let absent = parse_date_arg("--due", None).unwrap_or_else(|err| panic!("must accept None: {err}"));
        assert!(absent.is_none());
    }

    #[test]
    fn date_arg_errors_name_the_flag() {
        let Err(err) = parse_date_arg("--from", Some("14/08/2026")) else {
            panic!("expected a parse failure");
        };
        assert!(err.to_string().contains("--from"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
