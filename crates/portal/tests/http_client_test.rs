//! Integration tests for the REST client.
//!
//! Each test serves a small stub of the employee service on a random local
//! port and talks to it through `HttpEmployeeApi`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{AppError, HttpClientConfig};
use domain::{EmployeeForm, EmployeeRecord, Field};
use portal_lib::cli::args::{CreateArgs, EmployeeFields};
use portal_lib::cli::Commands;
use portal_lib::{commands, DivisionResolver, EmployeeApi, HttpEmployeeApi, PendingFetch, Resolution};

// =============================================================================
// Stub service
// =============================================================================

type Captured = Arc<Mutex<Vec<Value>>>;

async fn serve(router: Router) -> HttpEmployeeApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    HttpEmployeeApi::new(&HttpClientConfig {
        base_url: format!("http://{}", addr),
        ..Default::default()
    })
    .unwrap()
}

fn employee_json(emp_id: &str) -> Value {
    json!({
        "empId": emp_id,
        "empName": "ASHA RAO",
        "phone": "9876543210",
        "address": "12 MG ROAD, PUNE",
        "age": 29,
        "gender": "Female",
        "roleName": "ANALYST",
        "roleNumber": "7",
        "fromDate": "2023-04-01",
        "toDate": "",
        "naFlag": "N",
        "directorate": 1,
        "division": "11",
        "email": null
    })
}

fn valid_record() -> EmployeeRecord {
    let mut form = EmployeeForm::create();
    for (field, raw) in [
        (Field::EmpId, "123456"),
        (Field::EmpName, "ASHA RAO"),
        (Field::Phone, "9876543210"),
        (Field::Address, "12 MG ROAD, PUNE"),
        (Field::Age, "29"),
        (Field::Gender, "Female"),
        (Field::RoleName, "ANALYST"),
        (Field::RoleNumber, "7"),
        (Field::FromDate, "2023-04-01"),
        (Field::NaFlag, "N"),
        (Field::Directorate, "1"),
        (Field::Division, "11"),
    ] {
        let _ = form.input(field, raw);
    }
    form.to_record().unwrap()
}

async fn divisions_of(Path(id): Path<String>) -> Json<Value> {
    if id == "1" {
        // The first directorate answers slowly
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    Json(json!([
        { "divisionId": format!("{}1", id), "name": format!("DIVISION {}1", id) },
        { "divisionId": format!("{}2", id), "name": format!("DIVISION {}2", id) }
    ]))
}

// =============================================================================
// Lookups
// =============================================================================

#[tokio::test]
async fn test_lookups_accept_numeric_ids() {
    let router = Router::new()
        .route(
            "/api/directorates",
            get(|| async { Json(json!([{ "directorateId": 1, "name": "OPERATIONS" }])) }),
        )
        .route(
            "/api/divisions",
            get(|| async {
                Json(json!([{ "divisionId": 11, "name": "LOGISTICS", "directorateId": 1 }]))
            }),
        )
        .route("/api/divisions/by-directorate/:id", get(divisions_of));
    let api = serve(router).await;

    let directorates = api.directorates().await.unwrap();
    assert_eq!(directorates[0].directorate_id, "1");

    let divisions = api.divisions().await.unwrap();
    assert_eq!(divisions[0].division_id, "11");
    assert_eq!(divisions[0].directorate_id.as_deref(), Some("1"));

    let filtered = api.divisions_by_directorate("3").await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].division_id, "31");
    assert_eq!(filtered[0].directorate_id, None);
}

#[tokio::test]
async fn test_out_of_order_responses_keep_latest_directorate() {
    let router = Router::new().route("/api/divisions/by-directorate/:id", get(divisions_of));
    let api = serve(router).await;

    let resolver = RefCell::new(DivisionResolver::new());
    let first = resolver.borrow_mut().begin(Some("1")).unwrap();
    let second = resolver.borrow_mut().begin(Some("2")).unwrap();

    let fetch = |pending: PendingFetch| {
        let api = &api;
        let resolver = &resolver;
        async move {
            let result = api.divisions_by_directorate(pending.directorate_id()).await;
            resolver.borrow_mut().complete(pending, result)
        }
    };

    // Directorate 2 answers first; directorate 1 lands afterwards
    let (first, second) = tokio::join!(fetch(first), fetch(second));

    assert_eq!(first.unwrap(), Resolution::Stale);
    assert_eq!(second.unwrap(), Resolution::Applied);

    let resolver = resolver.into_inner();
    let ids: Vec<&str> = resolver
        .options()
        .iter()
        .map(|d| d.division_id.as_str())
        .collect();
    assert_eq!(ids, vec!["21", "22"]);
    assert_eq!(resolver.directorate_id(), Some("2"));
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_get_employee_variants() {
    let router = Router::new().route(
        "/api/employees/:id",
        get(|Path(id): Path<String>| async move {
            match id.as_str() {
                "123456" => (StatusCode::OK, Json(employee_json("123456"))),
                "222222" => (StatusCode::OK, Json(Value::Null)),
                _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
            }
        }),
    );
    let api = serve(router).await;

    let record = api.get_employee("123456").await.unwrap().unwrap();
    assert_eq!(record.directorate, "1");
    assert_eq!(record.to_date, None);
    assert_eq!(record.age, 29);

    assert_eq!(api.get_employee("222222").await.unwrap(), None);
    assert_eq!(api.get_employee("999999").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_and_update_send_json() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/employees",
            axum::routing::post(
                |State(captured): State<Captured>, Json(body): Json<Value>| async move {
                    captured.lock().unwrap().push(body);
                    StatusCode::CREATED
                },
            ),
        )
        .route(
            "/api/employees/:id",
            put(
                |State(captured): State<Captured>,
                 Path(id): Path<String>,
                 Json(mut body): Json<Value>| async move {
                    body["pathId"] = Value::String(id);
                    captured.lock().unwrap().push(body);
                    StatusCode::OK
                },
            ),
        )
        .with_state(captured.clone());
    let api = serve(router).await;

    let record = valid_record();
    api.create_employee(&record).await.unwrap();
    api.update_employee("123456", &record).await.unwrap();

    let bodies = captured.lock().unwrap().clone();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["empId"], "123456");
    assert_eq!(bodies[0]["age"], 29);
    assert_eq!(bodies[0]["fromDate"], "2023-04-01");
    assert_eq!(bodies[0]["naFlag"], "N");
    assert_eq!(bodies[0]["toDate"], Value::Null);
    assert_eq!(bodies[1]["pathId"], "123456");
}

#[tokio::test]
async fn test_search_encodes_name() {
    let router = Router::new().route(
        "/api/employees/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let name = params.get("name").cloned().unwrap_or_default();
            if name == "ravi kumar & co" {
                Json(json!([employee_json("234567")]))
            } else {
                Json(json!([]))
            }
        }),
    );
    let api = serve(router).await;

    let found = api.search_employees("ravi kumar & co").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].emp_id, "234567");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let router = Router::new()
        .route(
            "/api/employees",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/employees/:id",
            axum::routing::delete(|| async { StatusCode::CONFLICT }),
        );
    let api = serve(router).await;

    let err = api.list_employees().await.unwrap_err();
    assert!(matches!(err, AppError::Api { status: 500 }));

    let err = api.delete_employee("123456").await.unwrap_err();
    assert!(matches!(err, AppError::Api { status: 409 }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route(
        "/api/directorates",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let api = serve(router).await;

    let err = api.directorates().await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpEmployeeApi::new(&HttpClientConfig {
        base_url: format!("http://{}", addr),
        ..Default::default()
    })
    .unwrap();

    let err = api.list_employees().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

// =============================================================================
// CLI flow
// =============================================================================

#[tokio::test]
async fn test_create_command_posts_once() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/directorates",
            get(|| async { Json(json!([{ "directorateId": "1", "name": "OPERATIONS" }])) }),
        )
        .route("/api/divisions/by-directorate/:id", get(divisions_of))
        .route(
            "/api/employees",
            axum::routing::post(
                |State(captured): State<Captured>, Json(body): Json<Value>| async move {
                    captured.lock().unwrap().push(body);
                    StatusCode::OK
                },
            ),
        )
        .with_state(captured.clone());
    let api = serve(router).await;

    let args = CreateArgs {
        emp_id: Some("654321".to_string()),
        fields: EmployeeFields {
            emp_name: Some("ravi kumar".to_string()),
            phone: Some("9123456780".to_string()),
            address: Some("4 park street, kolkata".to_string()),
            age: Some("41".to_string()),
            gender: Some("Male".to_string()),
            role_name: Some("clerk".to_string()),
            role_number: Some("12".to_string()),
            from_date: Some("2020-06-15".to_string()),
            to_date: Some("2025-06-14".to_string()),
            na_flag: Some("Y".to_string()),
            directorate: Some("1".to_string()),
            division: Some("12".to_string()),
            email: Some("ravi@example.com".to_string()),
        },
    };

    let mut out = Vec::<u8>::new();
    commands::run(Commands::Create(args), &api, &mut out)
        .await
        .unwrap();

    let bodies = captured.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["empName"], "RAVI KUMAR");
    assert_eq!(bodies[0]["address"], "4 PARK STREET, KOLKATA");
    assert_eq!(bodies[0]["division"], "12");
    assert_eq!(bodies[0]["toDate"], "2025-06-14");
    assert!(String::from_utf8(out)
        .unwrap()
        .starts_with("Employee data submitted successfully!"));
}
