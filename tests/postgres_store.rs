//! `PostgresEmployerStore` against an embedded PostgreSQL cluster.
//!
//! The cluster binaries are fetched on first use; when the cluster cannot
//! be set up (offline sandbox, missing permissions) the test is skipped.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use chrono::NaiveDate;
use postgresql_embedded::PostgreSQL;

use employer_registry::config::{AppConfig, LogFormat};
use employer_registry::persistence::{
    EmployerStore, NewEmployer, PostgresEmployerStore, StoreError, connect_pool,
};

const SCHEMA: &str = include_str!("../migrations/0001_create_employer.sql");
const DATABASE: &str = "employer_registry_test";

/// Starts a cluster with an empty test database, or explains why not.
async fn start_cluster() -> Result<(PostgreSQL, String), String> {
    let mut postgresql = PostgreSQL::default();
    postgresql
        .setup()
        .await
        .map_err(|err| format!("setup: {err}"))?;
    postgresql
        .start()
        .await
        .map_err(|err| format!("start: {err}"))?;
    postgresql
        .create_database(DATABASE)
        .await
        .map_err(|err| format!("create database: {err}"))?;
    let url = postgresql.settings().url(DATABASE);
    Ok((postgresql, url))
}

fn config_for(database_url: String) -> AppConfig {
    AppConfig {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        database_url,
        database_max_connections: 2,
        database_min_connections: 0,
        database_connect_timeout_secs: 10,
        persistence_enabled: true,
        log_format: LogFormat::Text,
    }
}

fn new_employer(email: &str, name: &str) -> NewEmployer {
    let Some(admission_date) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        panic!("valid date");
    };
    NewEmployer {
        email: email.to_string(),
        name: name.to_string(),
        status: "ativo".to_string(),
        admission_date,
    }
}

#[tokio::test]
async fn postgres_store_creates_lists_and_rejects_duplicate_email() {
    let (postgresql, url) = match start_cluster().await {
        Ok(cluster) => cluster,
        Err(reason) => {
            eprintln!("SKIP-TEST-CLUSTER: embedded PostgreSQL unavailable ({reason})");
            return;
        }
    };

    let Ok(pool) = connect_pool(&config_for(url)).await else {
        panic!("connect to embedded cluster");
    };
    if let Err(err) = sqlx::raw_sql(SCHEMA).execute(&pool).await {
        panic!("apply schema: {err}");
    }
    let store = PostgresEmployerStore::new(pool.clone());

    assert!(store.ping().await.is_ok());
    assert_eq!(store.backend(), "postgres");

    let Ok(listed) = store.list().await else {
        panic!("list on empty table");
    };
    assert!(listed.is_empty());

    let Ok(created) = store.create(new_employer("a@x.com", "Ana")).await else {
        panic!("create failed");
    };
    assert_eq!(created.email, "a@x.com");
    assert_eq!(created.name, "Ana");
    assert_eq!(created.status, "ativo");
    assert_eq!(created.admission_date.to_string(), "2024-01-01");
    assert!(!created.id.is_nil());
    assert!(created.updated_at >= created.created_at);

    let duplicate = store.create(new_employer("a@x.com", "Outra")).await;
    assert!(
        matches!(duplicate, Err(StoreError::DuplicateKey)),
        "expected duplicate key, got {duplicate:?}"
    );

    let Ok(listed) = store.list().await else {
        panic!("list failed");
    };
    assert_eq!(listed, vec![created]);

    pool.close().await;
    if let Err(err) = postgresql.stop().await {
        eprintln!("failed to stop embedded cluster: {err}");
    }
}
