//! Employee commands.
//!
//! `create` and `update` drive the same form session as the interactive
//! screens, so a rejected field stops the command before any request.

use std::io::Write;

use common::{AppError, AppResult, OptionExt};
use domain::{EmployeeForm, EmployeeRecord, Field};

use crate::cli::args::{CreateArgs, DeleteArgs, EmployeeFields, SearchArgs, UpdateArgs};
use crate::clients::EmployeeApi;
use crate::search::EmployeeSearch;
use crate::session::FormSession;

pub async fn list(api: &dyn EmployeeApi, out: &mut dyn Write) -> AppResult<()> {
    let mut search = EmployeeSearch::new();
    search.load_lookups(api).await;
    search.refresh(api).await?;
    print_results(&mut search, out)
}

pub async fn search(api: &dyn EmployeeApi, args: SearchArgs, out: &mut dyn Write) -> AppResult<()> {
    let mut search = EmployeeSearch::new();
    search.load_lookups(api).await;
    if args.query.trim().is_empty() {
        search.refresh(api).await?;
    } else {
        search.search(api, &args.query).await;
    }
    print_results(&mut search, out)
}

pub async fn get(api: &dyn EmployeeApi, emp_id: &str, out: &mut dyn Write) -> AppResult<()> {
    let record = api.get_employee(emp_id.trim()).await?.ok_or_not_found()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    Ok(())
}

pub async fn create(api: &dyn EmployeeApi, args: CreateArgs, out: &mut dyn Write) -> AppResult<()> {
    let mut session = FormSession::open_create(api).await;
    let _ = session
        .input(api, Field::EmpId, args.emp_id.as_deref().unwrap_or_default())
        .await;
    apply(&mut session, api, &args.fields).await;
    submit(session, api, out).await
}

pub async fn update(api: &dyn EmployeeApi, args: UpdateArgs, out: &mut dyn Write) -> AppResult<()> {
    let mut session = FormSession::open_edit(api, args.emp_id.trim()).await?;
    apply(&mut session, api, &args.fields).await;
    submit(session, api, out).await
}

pub async fn delete(api: &dyn EmployeeApi, args: DeleteArgs, out: &mut dyn Write) -> AppResult<()> {
    if !args.yes {
        return Err(AppError::validation(format!(
            "Refusing to delete employee {} without --yes",
            args.emp_id
        )));
    }

    let mut search = EmployeeSearch::new();
    let result = search.delete(api, args.emp_id.trim(), true).await;
    for notice in search.take_notices() {
        writeln!(out, "{}", notice)?;
    }
    result.map(|_| ())
}

async fn apply(session: &mut FormSession, api: &dyn EmployeeApi, fields: &EmployeeFields) {
    for (field, raw) in fields.inputs() {
        let _ = session.input(api, field, raw).await;
    }
}

async fn submit(mut session: FormSession, api: &dyn EmployeeApi, out: &mut dyn Write) -> AppResult<()> {
    let result = session.submit(api).await;
    for notice in session.take_notices() {
        writeln!(out, "{}", notice)?;
    }

    match result {
        Ok(record) => {
            writeln!(out, "{}", row(&record, &record.directorate, &record.division))?;
            Ok(())
        }
        Err(AppError::Validation(_)) if !session.form().is_valid() => {
            Err(AppError::validation(field_report(session.form())))
        }
        Err(e) => Err(e),
    }
}

/// One `Label: reason` line per rejected field
pub fn field_report(form: &EmployeeForm) -> String {
    form.errors()
        .iter()
        .map(|(field, rejection)| format!("{}: {}", field.label(), rejection))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_results(search: &mut EmployeeSearch, out: &mut dyn Write) -> AppResult<()> {
    for notice in search.take_notices() {
        writeln!(out, "{}", notice)?;
    }
    for record in search.results() {
        let line = row(
            record,
            search.directorate_name(&record.directorate),
            search.division_name(&record.division),
        );
        writeln!(out, "{}", line)?;
    }
    if let Some(note) = search.note() {
        writeln!(out, "{}", note)?;
    }
    Ok(())
}

fn row(record: &EmployeeRecord, directorate: &str, division: &str) -> String {
    format!(
        "{:<8}{:<42}{:<22}{:<12}{} / {}",
        record.emp_id, record.emp_name, record.role_name, record.phone, directorate, division
    )
}
