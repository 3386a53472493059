//! Integration tests for the department DAO and service against SQLite.

mod common;

use dept_registry::AppError;
use dept_registry::db::{Dao, get_table_counts};
use dept_registry::models::Department;
use dept_registry::services::DepartmentService;

use common::setup;

#[tokio::test]
async fn insert_returns_generated_id() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let saved = dao.insert(&Department::new("Sales")).await.unwrap();
    let id = saved.id.expect("generated id");

    let fetched = dao.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Sales");
    assert_eq!(fetched.id, Some(id));
}

#[tokio::test]
async fn round_trip_through_find_all() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    dao.insert(&Department::new("Sales")).await.unwrap();

    let all = dao.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Sales");

    let reread = dao.find_by_id(all[0].id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reread.name, "Sales");
}

#[tokio::test]
async fn find_all_orders_by_name() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    dao.insert(&Department::new("IT")).await.unwrap();
    dao.insert(&Department::new("HR")).await.unwrap();
    dao.insert(&Department::new("Marketing")).await.unwrap();

    let names: Vec<String> = dao.find_all().await.unwrap().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["HR", "IT", "Marketing"]);
}

#[tokio::test]
async fn find_all_on_empty_table() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    assert!(dao.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_by_missing_id_is_none() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    assert_eq!(dao.find_by_id(999).await.unwrap(), None);
}

#[tokio::test]
async fn delete_missing_id_is_noop() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    dao.insert(&Department::new("IT")).await.unwrap();
    dao.delete_by_id(999).await.unwrap();

    let counts = get_table_counts(factory.connection()).await.unwrap();
    assert_eq!(counts.departments, 1);
}

#[tokio::test]
async fn delete_existing_row() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let saved = dao.insert(&Department::new("IT")).await.unwrap();
    dao.delete_by_id(saved.id.unwrap()).await.unwrap();

    assert!(dao.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_missing_row_creates_nothing() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let ghost = Department {
        id: Some(1),
        name: "IT-2".to_string(),
    };
    dao.update(&ghost).await.unwrap();

    assert!(dao.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_existing_row() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let mut saved = dao.insert(&Department::new("IT")).await.unwrap();
    saved.name = "Engineering".to_string();
    dao.update(&saved).await.unwrap();

    let fetched = dao.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Engineering");
}

#[tokio::test]
async fn insert_with_id_is_rejected() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let err = dao
        .insert(&Department {
            id: Some(5),
            name: "IT".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_precondition());
    assert!(dao.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_without_id_is_rejected() {
    let factory = setup().await;
    let dao = factory.create_department_dao();

    let err = dao.update(&Department::new("IT")).await.unwrap_err();
    assert!(err.is_precondition());
}

#[tokio::test]
async fn service_save_or_update_branches_on_id() {
    let factory = setup().await;
    let service = DepartmentService::from_factory(&factory);

    let saved = service.save_or_update(&Department::new("Sales")).await.unwrap();
    assert!(saved.id.is_some());

    let renamed = Department {
        id: saved.id,
        name: "Sales EU".to_string(),
    };
    service.save_or_update(&renamed).await.unwrap();

    let all = service.find_all().await.unwrap();
    assert_eq!(all, vec![renamed.clone()]);

    service.remove(&renamed).await.unwrap();
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn service_rejects_empty_name() {
    let factory = setup().await;
    let service = DepartmentService::from_factory(&factory);

    let err = service.save_or_update(&Department::new("")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let counts = get_table_counts(factory.connection()).await.unwrap();
    assert_eq!(counts.departments, 0);
}
