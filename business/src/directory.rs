//! The injected employee-directory service.
//!
//! The management template never talks to a concrete backend; it dispatches
//! commands that go through whatever [`EmployeeDirectory`] implementation is
//! carried in [`DirectoryState`]. Production wiring uses the in-memory mock
//! directory; tests may inject [`RejectingDirectory`] to exercise the failure
//! path.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use depot_states::{State, state_assign_impl};
use thiserror::Error;
use ustr::Ustr;

use crate::employees::{Employee, EmployeeStatus, NewEmployee, mock_employees};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("directory rejected the request: {0}")]
    Rejected(String),
    #[error("directory is unavailable")]
    Unavailable,
}

pub type DirectoryFuture<T> = Pin<Box<dyn Future<Output = Result<T, DirectoryError>> + Send>>;

pub trait EmployeeDirectory: Send + Sync + Debug {
    fn list(&self) -> DirectoryFuture<Vec<Employee>>;

    fn create(&self, request: NewEmployee) -> DirectoryFuture<Employee>;
}

/// Holds the injected directory implementation as a `State` so commands can
/// snapshot it.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    inner: Arc<dyn EmployeeDirectory>,
}

impl DirectoryState {
    pub fn new(directory: impl EmployeeDirectory + 'static) -> Self {
        Self {
            inner: Arc::new(directory),
        }
    }

    pub fn directory(&self) -> Arc<dyn EmployeeDirectory> {
        Arc::clone(&self.inner)
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(InMemoryDirectory::seeded())
    }
}

impl State for DirectoryState {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn std::any::Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn std::any::Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Mutex-guarded in-process directory; the app's stand-in for a real
/// employee service.
#[derive(Debug)]
pub struct InMemoryDirectory {
    records: Mutex<Vec<Employee>>,
    next_id: AtomicU32,
}

impl InMemoryDirectory {
    pub fn seeded() -> Self {
        let records = mock_employees();
        let next_id = records.len() as u32 + 1;
        Self {
            records: Mutex::new(records),
            next_id: AtomicU32::new(next_id),
        }
    }

    pub fn empty() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn list(&self) -> DirectoryFuture<Vec<Employee>> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Box::pin(async move { Ok(records) })
    }

    fn create(&self, request: NewEmployee) -> DirectoryFuture<Employee> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let employee = Employee {
            id: Ustr::from(&format!("emp-{id}")),
            name: request.name,
            email: request.email,
            role: request.role,
            department: request.department,
            status: EmployeeStatus::Active,
            joined: Utc::now().date_naive(),
        };

        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(employee.clone());

        Box::pin(async move { Ok(employee) })
    }
}

/// Test directory whose mutations always fail; `list` still serves the mock
/// collection so pages load normally.
#[derive(Debug)]
pub struct RejectingDirectory {
    message: String,
}

impl RejectingDirectory {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RejectingDirectory {
    fn default() -> Self {
        Self::new("directory is read-only")
    }
}

impl EmployeeDirectory for RejectingDirectory {
    fn list(&self) -> DirectoryFuture<Vec<Employee>> {
        Box::pin(async move { Ok(mock_employees()) })
    }

    fn create(&self, _request: NewEmployee) -> DirectoryFuture<Employee> {
        let error = DirectoryError::Rejected(self.message.clone());
        Box::pin(async move { Err(error) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_directory_lists_mock_data() {
        let directory = InMemoryDirectory::seeded();
        let listed = directory.list().await.unwrap();
        assert_eq!(listed.len(), mock_employees().len());
    }

    #[tokio::test]
    async fn create_appends_and_assigns_id() {
        let directory = InMemoryDirectory::empty();

        let created = directory
            .create(NewEmployee {
                name: "Rosa Diaz".to_owned(),
                email: "rosa@depot.test".to_owned(),
                role: "Dispatcher".to_owned(),
                department: "Logistics".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(created.id.as_str(), "emp-1");
        assert_eq!(created.status, EmployeeStatus::Active);

        let listed = directory.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Rosa Diaz");
    }

    #[tokio::test]
    async fn rejecting_directory_fails_create_but_lists() {
        let directory = RejectingDirectory::new("nope");

        assert!(directory.list().await.is_ok());
        let err = directory
            .create(NewEmployee::default())
            .await
            .unwrap_err();
        assert_eq!(err, DirectoryError::Rejected("nope".to_owned()));
    }
}
