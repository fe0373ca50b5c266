//! Local employee list state
//!
//! | 操作 | API 调用 | 本地变化 |
//! |------|----------|----------|
//! | refresh | list | 整体替换 |
//! | add | create | 插入到最前 |
//! | edit | update | 原位替换 |
//! | remove | delete (需确认) | 移除 |
//!
//! A failed call returns the error and leaves the list as it was.

use shared::{Employee, EmployeeInput};

use crate::filter::filter_employees;
use crate::{ClientResult, EmployeeApi};

#[derive(Debug, Clone, Default)]
pub struct EmployeeList {
    employees: Vec<Employee>,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Search view over the current list
    pub fn filtered(&self, query: &str) -> Vec<&Employee> {
        filter_employees(&self.employees, query)
    }

    /// Replace the list with the server's current contents
    pub async fn refresh(&mut self, api: &impl EmployeeApi) -> ClientResult<()> {
        self.employees = api.list().await?;
        Ok(())
    }

    /// Create a record and put it at the top of the list
    pub async fn add(&mut self, api: &impl EmployeeApi, input: &EmployeeInput) -> ClientResult<Employee> {
        let created = api.create(input).await?;
        self.employees.insert(0, created.clone());
        Ok(created)
    }

    /// Update a record and swap the local copy in place
    pub async fn edit(
        &mut self,
        api: &impl EmployeeApi,
        id: i64,
        input: &EmployeeInput,
    ) -> ClientResult<Employee> {
        let updated = api.update(id, input).await?;
        if let Some(slot) = self.employees.iter_mut().find(|e| e.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a record once the user has confirmed.
    ///
    /// Returns `Ok(false)` without touching the server when `confirmed` is false.
    pub async fn remove(&mut self, api: &impl EmployeeApi, id: i64, confirmed: bool) -> ClientResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        api.delete(id).await?;
        self.employees.retain(|e| e.id != id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use async_trait::async_trait;
    use chrono::DateTime;
    use shared::DeleteResponse;
    use std::sync::Mutex;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            position: "Dev".into(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    /// In-process stand-in: records the calls it receives, optionally failing all of them
    #[derive(Default)]
    struct FakeApi {
        server: Mutex<Vec<Employee>>,
        calls: Mutex<Vec<&'static str>>,
        fail: bool,
    }

    impl FakeApi {
        fn with(records: Vec<Employee>) -> Self {
            Self {
                server: Mutex::new(records),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn record(&self, call: &'static str) -> ClientResult<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(ClientError::Server {
                    status: 500,
                    message: "Failed".into(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmployeeApi for FakeApi {
        async fn list(&self) -> ClientResult<Vec<Employee>> {
            self.record("list")?;
            Ok(self.server.lock().unwrap().clone())
        }

        async fn get(&self, id: i64) -> ClientResult<Employee> {
            self.record("get")?;
            self.server
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound("Employee not found".into()))
        }

        async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee> {
            self.record("create")?;
            let mut server = self.server.lock().unwrap();
            let id = server.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            let created = employee(id, input.name.as_deref().unwrap_or_default());
            server.insert(0, created.clone());
            Ok(created)
        }

        async fn update(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
            self.record("update")?;
            let mut updated = employee(id, input.name.as_deref().unwrap_or_default());
            updated.position = input.position.clone().unwrap_or_default();
            Ok(updated)
        }

        async fn delete(&self, id: i64) -> ClientResult<DeleteResponse> {
            self.record("delete")?;
            self.server.lock().unwrap().retain(|e| e.id != id);
            Ok(DeleteResponse::new(id.to_string()))
        }
    }

    fn names(list: &EmployeeList) -> Vec<&str> {
        list.employees().iter().map(|e| e.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_refresh_then_add_prepends() {
        let api = FakeApi::with(vec![employee(2, "B"), employee(1, "A")]);
        let mut list = EmployeeList::new();
        list.refresh(&api).await.unwrap();
        assert_eq!(names(&list), vec!["B", "A"]);

        let created = list
            .add(&api, &EmployeeInput::new("C", "c@example.com", "Dev"))
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(names(&list), vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_edit_replaces_in_place() {
        let api = FakeApi::with(vec![]);
        let mut list = EmployeeList::new();
        list.employees = vec![employee(3, "C"), employee(2, "B"), employee(1, "A")];

        list.edit(&api, 2, &EmployeeInput::new("Bee", "b@example.com", "Lead"))
            .await
            .unwrap();
        assert_eq!(names(&list), vec!["C", "Bee", "A"]);
        assert_eq!(list.employees()[1].position, "Lead");
    }

    #[tokio::test]
    async fn test_remove_requires_confirmation() {
        let api = FakeApi::with(vec![employee(1, "A")]);
        let mut list = EmployeeList::new();
        list.refresh(&api).await.unwrap();

        assert!(!list.remove(&api, 1, false).await.unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(api.calls(), vec!["list"]);

        assert!(list.remove(&api, 1, true).await.unwrap());
        assert!(list.is_empty());
        assert_eq!(api.calls(), vec!["list", "delete"]);
    }

    #[tokio::test]
    async fn test_failures_leave_list_untouched() {
        let api = FakeApi::failing();
        let mut list = EmployeeList::new();
        list.employees = vec![employee(2, "B"), employee(1, "A")];
        let before = list.employees().to_vec();

        assert!(list.refresh(&api).await.is_err());
        assert!(list.add(&api, &EmployeeInput::new("C", "c@x.io", "Dev")).await.is_err());
        assert!(list.edit(&api, 1, &EmployeeInput::new("Z", "z@x.io", "Dev")).await.is_err());
        assert!(list.remove(&api, 1, true).await.is_err());

        assert_eq!(list.employees(), before.as_slice());
    }

    #[test]
    fn test_filtered_view() {
        let mut list = EmployeeList::new();
        list.employees = vec![employee(2, "Bob"), employee(1, "Alice")];
        let found = list.filtered("ALI");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice");
    }
}
