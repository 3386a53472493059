//! Integration tests for the seller DAO and service against SQLite.

mod common;

use chrono::NaiveDate;
use dept_registry::db::{Dao, SellerDao};
use dept_registry::models::{Department, Seller};
use dept_registry::services::SellerService;

use common::setup;

fn seller(name: &str, department_id: Option<i32>) -> Seller {
    Seller {
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 21).unwrap(),
        base_salary: 3000.0,
        department_id,
    }
}

#[tokio::test]
async fn insert_and_find_by_id() {
    let factory = setup().await;
    let dao = factory.create_seller_dao();

    let saved = dao.insert(&seller("Bob", None)).await.unwrap();
    let fetched = dao.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(fetched, saved);
    assert_eq!(fetched.birth_date, NaiveDate::from_ymd_opt(1990, 4, 21).unwrap());
    assert_eq!(fetched.base_salary, 3000.0);
}

#[tokio::test]
async fn find_by_department_filters_and_orders() {
    let factory = setup().await;
    let departments = factory.create_department_dao();
    let dao = factory.create_seller_dao();

    let books = departments.insert(&Department::new("Books")).await.unwrap().id;
    let music = departments.insert(&Department::new("Music")).await.unwrap().id;

    dao.insert(&seller("Maria", books)).await.unwrap();
    dao.insert(&seller("Alex", books)).await.unwrap();
    dao.insert(&seller("Donald", music)).await.unwrap();

    let names: Vec<String> = dao
        .find_by_department(books.unwrap())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Alex", "Maria"]);

    let all: Vec<String> = dao.find_all().await.unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(all, vec!["Alex", "Donald", "Maria"]);

    assert!(dao.find_by_department(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_changes_every_field() {
    let factory = setup().await;
    let departments = factory.create_department_dao();
    let dao = factory.create_seller_dao();

    let music = departments.insert(&Department::new("Music")).await.unwrap().id;
    let mut saved = dao.insert(&seller("Bob", None)).await.unwrap();

    saved.email = "robert@example.com".to_string();
    saved.base_salary = 4200.5;
    saved.department_id = music;
    dao.update(&saved).await.unwrap();

    let fetched = dao.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let factory = setup().await;
    let dao = factory.create_seller_dao();

    let saved = dao.insert(&seller("Bob", None)).await.unwrap();
    let id = saved.id.unwrap();

    dao.delete_by_id(id).await.unwrap();
    dao.delete_by_id(id).await.unwrap();
    assert_eq!(dao.find_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_referenced_department_is_data_access_error() {
    let factory = setup().await;
    let departments = factory.create_department_dao();
    let dao = factory.create_seller_dao();

    let books = departments.insert(&Department::new("Books")).await.unwrap().id;
    dao.insert(&seller("Maria", books)).await.unwrap();

    let err = departments.delete_by_id(books.unwrap()).await.unwrap_err();
    assert!(err.is_data_access());
    assert_eq!(departments.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn service_inserts_then_updates() {
    let factory = setup().await;
    let service = SellerService::from_factory(&factory);

    let saved = service.save_or_update(&seller("Bob", None)).await.unwrap();
    assert!(saved.id.is_some());

    let mut changed = saved.clone();
    changed.name = "Bobby".to_string();
    service.save_or_update(&changed).await.unwrap();

    let all = service.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Bobby");
}

#[tokio::test]
async fn service_rejects_blank_name() {
    let factory = setup().await;
    let service = SellerService::from_factory(&factory);

    let err = service.save_or_update(&seller("  ", None)).await.unwrap_err();
    assert!(!err.is_data_access());
    assert!(service.find_all().await.unwrap().is_empty());
}
