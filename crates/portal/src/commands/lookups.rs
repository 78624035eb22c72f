//! Lookup commands: directorates and divisions.

use std::io::Write;

use common::AppResult;

use crate::cli::args::DivisionsArgs;
use crate::clients::EmployeeApi;

pub async fn directorates(api: &dyn EmployeeApi, out: &mut dyn Write) -> AppResult<()> {
    for directorate in api.directorates().await? {
        writeln!(out, "{:<8}{}", directorate.directorate_id, directorate.name)?;
    }
    Ok(())
}

/// All divisions, or only those of `--directorate`
pub async fn divisions(
    api: &dyn EmployeeApi,
    args: DivisionsArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    let divisions = match args.directorate.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => api.divisions_by_directorate(id).await?,
        _ => api.divisions().await?,
    };
    for division in divisions {
        writeln!(out, "{:<8}{}", division.division_id, division.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockEmployeeApi;
    use domain::{Directorate, Division};

    #[tokio::test]
    async fn test_directorates_listing() {
        let mut api = MockEmployeeApi::new();
        api.expect_directorates().returning(|| {
            Ok(vec![Directorate {
                directorate_id: "1".to_string(),
                name: "OPERATIONS".to_string(),
            }])
        });

        let mut out = Vec::<u8>::new();
        directorates(&api, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1       OPERATIONS\n");
    }

    #[tokio::test]
    async fn test_divisions_filter() {
        let mut api = MockEmployeeApi::new();
        api.expect_divisions().times(0);
        api.expect_divisions_by_directorate()
            .withf(|id| id == "2")
            .times(1)
            .returning(|_| {
                Ok(vec![Division {
                    division_id: "21".to_string(),
                    name: "PAYROLL".to_string(),
                    directorate_id: Some("2".to_string()),
                }])
            });

        let mut out = Vec::<u8>::new();
        let args = DivisionsArgs {
            directorate: Some("2".to_string()),
        };
        divisions(&api, args, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "21      PAYROLL\n");
    }

    #[tokio::test]
    async fn test_divisions_unfiltered() {
        let mut api = MockEmployeeApi::new();
        api.expect_divisions().times(1).returning(|| Ok(Vec::new()));
        api.expect_divisions_by_directorate().times(0);

        let mut out = Vec::<u8>::new();
        divisions(&api, DivisionsArgs { directorate: None }, &mut out)
            .await
            .unwrap();
        assert!(out.is_empty());
    }
}
