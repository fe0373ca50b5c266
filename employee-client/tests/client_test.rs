// employee-client/tests/client_test.rs
// 客户端 <-> 真实服务器 (127.0.0.1:0, in-memory SQLite)

use employee_client::{
    ClientConfig, ClientError, EmployeeApi, EmployeeClient, EmployeeInput, EmployeeList,
};
use employee_server::{Config, Server, ServerState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    client: EmployeeClient,
    _shutdown: oneshot::Sender<()>,
}

async fn spawn_server() -> TestServer {
    let config = Config::with_overrides(":memory:", 0);
    let state = ServerState::initialize(&config).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let server = Server::with_state(config, state);
    tokio::spawn(async move {
        let shutdown = async move {
            let _ = rx.await;
        };
        server.serve(listener, shutdown).await.unwrap();
    });

    let client = EmployeeClient::new(&ClientConfig::new(format!("http://{addr}"))).unwrap();
    TestServer {
        client,
        _shutdown: tx,
    }
}

fn john() -> EmployeeInput {
    EmployeeInput::new("John Doe", "john.doe@example.com", "Software Developer")
}

#[tokio::test]
async fn test_health() {
    let server = spawn_server().await;
    let health = server.client.health().await.unwrap();
    assert_eq!(health.status, "OK");
}

#[tokio::test]
async fn test_crud_round_trip() {
    let server = spawn_server().await;
    let api = &server.client;

    assert!(api.list().await.unwrap().is_empty());

    let created = api.create(&john()).await.unwrap();
    assert_eq!(created.name, "John Doe");
    assert_eq!(api.get(created.id).await.unwrap(), created);

    let updated = api
        .update(
            created.id,
            &EmployeeInput::new("John Smith", "john.smith@example.com", "Lead"),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "john.smith@example.com");

    let deleted = api.delete(created.id).await.unwrap();
    assert_eq!(deleted.message, "Employee deleted successfully");
    assert_eq!(deleted.deleted_id, created.id.to_string());

    let err = api.get(created.id).await.unwrap_err();
    assert!(matches!(&err, ClientError::NotFound(m) if m == "Employee not found"));
}

#[tokio::test]
async fn test_validation_and_conflict_errors() {
    let server = spawn_server().await;
    let api = &server.client;

    let err = api
        .create(&EmployeeInput {
            name: None,
            email: Some("x@y.com".into()),
            position: Some("Dev".into()),
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, ClientError::Validation(m) if m == "Name is required"));

    let err = api
        .create(&EmployeeInput::new("A", "invalid-email", "Dev"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Invalid email format");

    api.create(&john()).await.unwrap();
    let err = api.create(&john()).await.unwrap_err();
    assert!(matches!(&err, ClientError::Validation(m) if m == "Email already exists"));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let server = spawn_server().await;
    let err = server.client.update(999, &john()).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_list_state_follows_server() {
    let server = spawn_server().await;
    let api = &server.client;
    let mut list = EmployeeList::new();

    list.add(api, &EmployeeInput::new("A", "a@example.com", "Dev"))
        .await
        .unwrap();
    list.add(api, &EmployeeInput::new("B", "b@example.com", "Designer"))
        .await
        .unwrap();
    let names: Vec<_> = list.employees().iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["B", "A"]);

    // Local order matches the server's newest-first order
    let mut fresh = EmployeeList::new();
    fresh.refresh(api).await.unwrap();
    assert_eq!(fresh.employees(), list.employees());

    // A rejected edit leaves local state as it was
    let a_id = list.employees()[1].id;
    let before = list.employees().to_vec();
    let err = list
        .edit(api, a_id, &EmployeeInput::new("A", "b@example.com", "Dev"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Email already exists");
    assert_eq!(list.employees(), before.as_slice());

    assert!(!list.remove(api, a_id, false).await.unwrap());
    assert_eq!(api.list().await.unwrap().len(), 2);

    assert!(list.remove(api, a_id, true).await.unwrap());
    assert_eq!(list.len(), 1);
    assert_eq!(api.list().await.unwrap().len(), 1);

    assert_eq!(list.filtered("designer").len(), 1);
    assert!(list.filtered("dev").is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EmployeeClient::new(&ClientConfig::new(format!("http://{addr}")).with_timeout(2))
        .unwrap();
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}
