//! End-to-end data flow: backend → client → collection/store/grid, the way
//! the pages drive it.
//!
//! Run with: cargo test --test data_flow

mod mock_servers;

use std::sync::Arc;

use camera_dashboard::api::{ApiClient, Camera, Credentials, Id, NewPerson, Person};
use camera_dashboard::app::hooks::{
    camera_removed, pick_camera, save_new_person, save_person_changes, CameraPick,
};
use camera_dashboard::collection::{Collection, LoadStatus};
use camera_dashboard::grid::{GridState, LayoutMode};
use camera_dashboard::nav::{guard, Destination};
use camera_dashboard::session::{login, SessionStore, SESSION_KEY};
use camera_dashboard::settings::{verify_password, GateState};
use camera_dashboard::storage::{KeyValueStore, MemoryStorage};
use camera_dashboard::store::{Action, AppState, UploadedFile};
use chrono::Utc;
use mock_servers::MockBackend;

async fn signed_in(backend: &MockBackend) -> ApiClient {
    ApiClient::new(&backend.base_url())
        .unwrap()
        .with_token(Some(MockBackend::TOKEN.to_string()))
}

#[tokio::test]
async fn fetched_collection_equals_server_list() {
    let backend = MockBackend::start().await;
    backend.add_camera(Id::from(1), "Camera 1").await;
    backend.add_camera(Id::from(2), "Camera 2").await;
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    assert!(cameras.is_loading());

    let ticket = cameras.begin_fetch();
    assert!(cameras.complete_fetch(ticket, api.list_cameras().await));

    assert_eq!(cameras.status(), &LoadStatus::Loaded);
    assert!(!cameras.is_loading());
    assert_eq!(cameras.items(), backend.cameras().await.as_slice());

    // Quad layout shows both on a single page
    let grid = GridState::new(LayoutMode::Quad);
    assert_eq!(grid.cells(cameras.len()).len(), 2);
    assert_eq!(grid.page_label(cameras.len()), "Page 1/1");

    backend.stop().await;
}

#[tokio::test]
async fn deleted_camera_leaves_list_without_refetch() {
    let backend = MockBackend::start().await;
    backend.add_camera(Id::new("camera123"), "Yard").await;
    backend.add_camera(Id::from(2), "Gate").await;
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    let ticket = cameras.begin_fetch();
    cameras.complete_fetch(ticket, api.list_cameras().await);
    assert_eq!(cameras.len(), 2);

    let id = Id::new("camera123");
    api.delete_camera(&id).await.unwrap();
    let removed = cameras.remove(&id);

    assert_eq!(removed.map(|c| c.name), Some("Yard".to_string()));
    assert_eq!(cameras.len(), 1);
    assert!(cameras.items().iter().all(|c| c.id != id));
    assert_eq!(backend.camera_list_calls().await, 1);

    backend.stop().await;
}

#[tokio::test]
async fn failed_delete_keeps_list_and_records_error() {
    let backend = MockBackend::start().await;
    backend.add_camera(Id::from(1), "Camera 1").await;
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    let ticket = cameras.begin_fetch();
    cameras.complete_fetch(ticket, api.list_cameras().await);

    let err = api.delete_camera(&Id::from(99)).await.unwrap_err();
    cameras.record_failure(&err);

    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras.status(), &LoadStatus::Loaded);
    assert_eq!(
        cameras.error(),
        Some("delete camera failed: HTTP 404 (Camera not found)")
    );

    backend.stop().await;
}

#[tokio::test]
async fn stale_fetch_is_discarded() {
    let backend = MockBackend::start().await;
    backend.add_camera(Id::from(1), "Old").await;
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    let first = cameras.begin_fetch();
    let stale = api.list_cameras().await;

    backend.add_camera(Id::from(2), "New").await;
    let second = cameras.begin_fetch();
    let fresh = api.list_cameras().await;

    assert!(cameras.complete_fetch(second, fresh));
    assert!(!cameras.complete_fetch(first, stale));
    assert_eq!(cameras.len(), 2);

    backend.stop().await;
}

#[tokio::test]
async fn failed_fetch_surfaces_message() {
    let backend = MockBackend::start().await;
    // No token: the backend rejects the list
    let api = ApiClient::new(&backend.base_url()).unwrap();

    let mut cameras: Collection<Camera> = Collection::new();
    let ticket = cameras.begin_fetch();
    cameras.complete_fetch(ticket, api.list_cameras().await);

    assert_eq!(
        cameras.status(),
        &LoadStatus::Failed("fetch cameras failed: HTTP 401 (Not authenticated)".to_string())
    );
    assert!(cameras.is_empty());

    backend.stop().await;
}

#[tokio::test]
async fn failed_login_stores_no_session() {
    let backend = MockBackend::start().await;
    backend.add_user("admin", "secret").await;
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), 30);
    let api = ApiClient::new(&backend.base_url()).unwrap();

    let err = login(
        &api,
        &Credentials {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        },
        &store,
        Utc::now(),
    )
    .await
    .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(storage.get(SESSION_KEY), None);
    let has_session = store.load(Utc::now()).is_some();
    assert_eq!(guard(Destination::Cameras, has_session), Destination::Login);

    backend.stop().await;
}

#[tokio::test]
async fn successful_login_opens_guarded_routes() {
    let backend = MockBackend::start().await;
    backend.add_user("admin", "secret").await;
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), 30);
    let api = ApiClient::new(&backend.base_url()).unwrap();

    let now = Utc::now();
    let session = login(
        &api,
        &Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        },
        &store,
        now,
    )
    .await
    .unwrap();

    let restored = store.load(now).unwrap();
    assert_eq!(restored, session);
    assert_eq!(guard(Destination::Staff, true), Destination::Staff);

    // The restored token authenticates further calls
    let api = api.with_token(Some(restored.token));
    assert!(api.list_cameras().await.is_ok());

    store.clear();
    assert!(store.load(now).is_none());

    backend.stop().await;
}

#[tokio::test]
async fn dropdown_and_grid_picks_reach_the_store_alike() {
    let backend = MockBackend::start().await;
    for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
        backend.add_camera(Id::from(id), name).await;
    }
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    let ticket = cameras.begin_fetch();
    cameras.complete_fetch(ticket, api.list_cameras().await);

    let mut state = AppState::default();
    let action = pick_camera(&mut cameras, CameraPick::Name("C")).unwrap();
    state = state.reduce(action);
    assert_eq!(state.selected_camera_index, Some(2));

    let action = pick_camera(&mut cameras, CameraPick::Index(0)).unwrap();
    state = state.reduce(action);
    assert_eq!(state.selected_camera_index, Some(0));
    assert_eq!(cameras.selected_item().map(|c| c.name.as_str()), Some("A"));

    backend.stop().await;
}

#[tokio::test]
async fn selection_survives_leaving_the_cameras_page() {
    let backend = MockBackend::start().await;
    for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
        backend.add_camera(Id::from(id), name).await;
    }
    let api = signed_in(&backend).await;

    let mut first_visit: Collection<Camera> = Collection::new();
    let ticket = first_visit.begin_fetch();
    first_visit.complete_fetch(ticket, api.list_cameras().await);
    let action = pick_camera(&mut first_visit, CameraPick::Name("B")).unwrap();
    let state = AppState::default().reduce(action);
    drop(first_visit);

    // A fresh mount starts empty and takes the stored index once loaded
    let mut second_visit: Collection<Camera> = Collection::new();
    let ticket = second_visit.begin_fetch();
    second_visit.complete_fetch(ticket, api.list_cameras().await);
    assert_eq!(second_visit.selected(), None);
    second_visit.adopt_selection(state.selected_camera_index);

    assert_eq!(second_visit.selected(), Some(1));
    assert_eq!(second_visit.selected_item().map(|c| c.name.as_str()), Some("B"));

    backend.stop().await;
}

#[tokio::test]
async fn deleting_a_camera_moves_the_stored_index_with_it() {
    let backend = MockBackend::start().await;
    for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
        backend.add_camera(Id::from(id), name).await;
    }
    let api = signed_in(&backend).await;

    let mut cameras: Collection<Camera> = Collection::new();
    let ticket = cameras.begin_fetch();
    cameras.complete_fetch(ticket, api.list_cameras().await);
    let picked = pick_camera(&mut cameras, CameraPick::Index(2)).unwrap();
    let mut state = AppState::default().reduce(picked);

    api.delete_camera(&Id::from(1)).await.unwrap();
    state = state.reduce(camera_removed(&mut cameras, &Id::from(1)));

    assert_eq!(state.selected_camera_index, Some(1));
    assert_eq!(cameras.items(), backend.cameras().await.as_slice());

    backend.stop().await;
}

fn photos() -> Vec<UploadedFile> {
    vec![
        UploadedFile::new("front.jpg", Some("image/jpeg".to_string()), vec![1, 2, 3]),
        UploadedFile::new("side.jpg", Some("image/jpeg".to_string()), vec![4, 5, 6]),
    ]
}

#[tokio::test]
async fn new_person_is_listed_with_uploaded_faces() {
    let backend = MockBackend::start().await;
    let api = signed_in(&backend).await;
    let mut persons: Collection<Person> = Collection::new();
    let draft = NewPerson { name: "Dana".to_string() };

    save_new_person(&api, &draft, &photos(), |p| persons.upsert(p))
        .await
        .unwrap();

    assert_eq!(persons.len(), 1);
    assert_eq!(persons.items()[0].name, "Dana");
    assert_eq!(persons.items()[0].faces.len(), 2);
    assert_eq!(backend.last_upload().await, vec!["front.jpg", "side.jpg"]);

    backend.stop().await;
}

#[tokio::test]
async fn rejected_upload_still_lists_the_new_person() {
    let backend = MockBackend::start().await;
    backend.reject_uploads(true).await;
    let api = signed_in(&backend).await;
    let mut persons: Collection<Person> = Collection::new();
    let draft = NewPerson { name: "Eli".to_string() };

    let err = save_new_person(&api, &draft, &photos(), |p| persons.upsert(p))
        .await
        .unwrap_err();
    persons.record_failure(&err);

    assert_eq!(persons.len(), 1);
    assert_eq!(persons.items()[0].name, "Eli");
    assert!(persons.items()[0].faces.is_empty());
    assert!(persons.error().is_some_and(|e| e.contains("422")));

    backend.stop().await;
}

#[tokio::test]
async fn rename_survives_a_rejected_upload() {
    let backend = MockBackend::start().await;
    backend.add_person(Id::from(40), "Old Name", 0).await;
    backend.reject_uploads(true).await;
    let api = signed_in(&backend).await;

    let mut persons: Collection<Person> = Collection::new();
    let ticket = persons.begin_fetch();
    persons.complete_fetch(ticket, api.list_persons().await);

    let result = save_person_changes(&api, &Id::from(40), "  New Name ", &photos(), |p| {
        persons.replace(p);
    })
    .await;

    assert!(result.is_err());
    assert_eq!(persons.items()[0].name, "New Name");
    assert_eq!(backend.persons().await[0].name, "New Name");

    backend.stop().await;
}

#[tokio::test]
async fn blank_name_and_no_photos_change_nothing() {
    let backend = MockBackend::start().await;
    backend.add_person(Id::from(41), "Kept", 1).await;
    let api = signed_in(&backend).await;

    let mut applied = Vec::new();
    save_person_changes(&api, &Id::from(41), "   ", &[], |p| applied.push(p))
        .await
        .unwrap();

    assert!(applied.is_empty());
    assert_eq!(backend.persons().await[0].name, "Kept");

    backend.stop().await;
}

#[tokio::test]
async fn downloaded_logs_become_current_report() {
    let backend = MockBackend::start().await;
    backend.add_camera(Id::from(5), "Dock").await;
    let api = signed_in(&backend).await;

    let file: UploadedFile = api.download_camera_logs(&Id::from(5)).await.unwrap().into();
    let state = AppState::default().reduce(Action::AddFiles(vec![file]));

    let report = state.current_report().unwrap();
    assert_eq!(report.name, "camera_5_report.pdf");
    assert!(report.is_pdf());

    backend.stop().await;
}

#[tokio::test]
async fn settings_gate_rechecks_the_password() {
    let backend = MockBackend::start().await;
    backend.add_user("admin", "secret").await;
    let api = signed_in(&backend).await;

    assert_eq!(
        verify_password(&api, "admin", "secret").await,
        GateState::Unlocked
    );
    assert_eq!(
        verify_password(&api, "admin", "guess").await,
        GateState::Rejected("Incorrect password".to_string())
    );
    assert!(matches!(
        verify_password(&api, "admin", "").await,
        GateState::Rejected(_)
    ));

    backend.stop().await;
}
