//! Test doubles for `SchoolRepository` and helpers for driving the router.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use school_finder::{
    app, rank_by_proximity, AppState, Coordinates, NearbySchool, NewSchool, School, SchoolRepository, StorageError,
    StorageErrorKind,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory store with a unique `name`, mirroring the table's constraint.
#[derive(Clone, Default)]
pub struct MemorySchools {
    rows: Arc<Mutex<Vec<School>>>,
}

impl MemorySchools {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl SchoolRepository for MemorySchools {
    async fn create(&self, school: &NewSchool) -> Result<i64, StorageError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.name == school.name) {
            return Err(storage_error(StorageErrorKind::Duplicate));
        }
        let id = rows.len() as i64 + 1;
        rows.push(School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.location.latitude,
            longitude: school.location.longitude,
        });
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<School>, StorageError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_all_sorted_by_proximity(&self, origin: Coordinates) -> Result<Vec<NearbySchool>, StorageError> {
        let rows = self.find_all().await?;
        Ok(rank_by_proximity(rows, origin))
    }
}

/// Store whose every call fails with the given kind.
#[derive(Clone, Copy)]
pub struct FailingSchools(pub StorageErrorKind);

#[async_trait]
impl SchoolRepository for FailingSchools {
    async fn create(&self, _school: &NewSchool) -> Result<i64, StorageError> {
        Err(storage_error(self.0))
    }

    async fn find_all(&self) -> Result<Vec<School>, StorageError> {
        Err(storage_error(self.0))
    }

    async fn find_all_sorted_by_proximity(&self, _origin: Coordinates) -> Result<Vec<NearbySchool>, StorageError> {
        Err(storage_error(self.0))
    }
}

/// Store that panics, to exercise the terminal handler.
#[derive(Clone, Copy)]
pub struct PanickingSchools;

#[async_trait]
impl SchoolRepository for PanickingSchools {
    async fn create(&self, _school: &NewSchool) -> Result<i64, StorageError> {
        panic!("connection handle poisoned")
    }

    async fn find_all(&self) -> Result<Vec<School>, StorageError> {
        panic!("connection handle poisoned")
    }

    async fn find_all_sorted_by_proximity(&self, _origin: Coordinates) -> Result<Vec<NearbySchool>, StorageError> {
        panic!("connection handle poisoned")
    }
}

pub fn storage_error(kind: StorageErrorKind) -> StorageError {
    StorageError {
        kind,
        source: sqlx::Error::Protocol(format!("simulated {:?} failure", kind)),
    }
}

pub fn router(repo: impl SchoolRepository + 'static) -> Router {
    app(AppState::new(repo), 64 * 1024)
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
