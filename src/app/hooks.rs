//! Per-domain data hooks: cameras, staff (persons and faces), streams.
//!
//! Each hook owns a [`Collection`] signal plus a draft for the "new" form.
//! The list is fetched once when the hook mounts; mutations call the backend
//! and update the local list only after the server accepts. Failures are
//! logged and recorded on the collection, the list itself is left alone.
//!
//! What happens after the server accepts lives in plain functions below the
//! spawn helpers, so it can be driven without a running UI.

use std::future::Future;

use dioxus::prelude::*;

use crate::api::{
    ApiClient, ApiError, Camera, DownloadedFile, Entity, Id, NewCamera, NewPerson, NewStream,
    Person, StreamDeployment, StreamProcessor, StreamStatus,
};
use crate::app::session_context::{use_session, SessionContext};
use crate::app::store_context::{use_app_store, AppStore};
use crate::collection::{Collection, LoadStatus};
use crate::store::{Action, UploadedFile};

fn spawn_fetch<T, F, Fut, L>(
    session: SessionContext,
    mut collection: Signal<Collection<T>>,
    what: &'static str,
    call: F,
    on_loaded: L,
) where
    T: Entity + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    L: FnOnce(&mut Collection<T>) + 'static,
{
    let ticket = collection.write().begin_fetch();
    spawn(async move {
        let result = match session.client() {
            Ok(api) => call(api).await,
            Err(e) => Err(e),
        };
        match &result {
            Ok(items) => tracing::debug!("Fetched {} {}", items.len(), what),
            Err(e) => tracing::warn!("Failed to fetch {}: {}", what, e),
        }
        let mut list = collection.write();
        if list.complete_fetch(ticket, result) && *list.status() == LoadStatus::Loaded {
            on_loaded(&mut *list);
        }
    });
}

fn spawn_mutation<T, R, F, Fut, S>(
    session: SessionContext,
    mut collection: Signal<Collection<T>>,
    call: F,
    on_success: S,
) where
    T: Entity + 'static,
    R: 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
    S: FnOnce(R) + 'static,
{
    spawn(async move {
        let result = match session.client() {
            Ok(api) => call(api).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(value) => on_success(value),
            Err(e) => {
                tracing::warn!("{}", e);
                collection.write().record_failure(&e);
            }
        }
    });
}

// =============================================================================
// After the server accepts
// =============================================================================

/// A camera chosen on the cameras page: a grid cell or a dropdown entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraPick<'a> {
    Index(usize),
    Name(&'a str),
}

/// Apply a pick to the list and return the store update for it. `None` when
/// a name matched nothing; the previous selection stands.
pub fn pick_camera(cameras: &mut Collection<Camera>, pick: CameraPick<'_>) -> Option<Action> {
    match pick {
        CameraPick::Index(index) => cameras.select_index(Some(index)),
        CameraPick::Name(name) => {
            cameras.select_by_name(name)?;
        }
    }
    Some(Action::SetSelectedCameraIndex(cameras.selected()))
}

/// Drop a deleted camera and return the store update keeping the stored
/// selection on the same camera.
pub fn camera_removed(cameras: &mut Collection<Camera>, id: &Id) -> Action {
    cameras.remove(id);
    Action::SetSelectedCameraIndex(cameras.selected())
}

/// List a newly created entity and clear the form it came from.
pub fn accept_created<T: Entity, D: Default>(collection: &mut Collection<T>, draft: &mut D, item: T) {
    collection.insert(item);
    *draft = D::default();
}

/// Drop a deleted stream, and its status panel if it was showing.
pub fn stream_removed(
    streams: &mut Collection<StreamProcessor>,
    status: &mut Option<StreamStatus>,
    name: &str,
) {
    if status.as_ref().is_some_and(|s| s.name == name) {
        *status = None;
    }
    streams.remove(&Id::new(name));
}

/// Create a person, then upload `photos` for the new id. `apply` sees every
/// copy the server hands back, so the list shows the person even when the
/// upload fails.
pub async fn save_new_person(
    api: &ApiClient,
    draft: &NewPerson,
    photos: &[UploadedFile],
    mut apply: impl FnMut(Person),
) -> Result<(), ApiError> {
    let person = api.create_person(draft).await?;
    tracing::info!("Added staff member {}", person.name);
    let id = person.id.clone();
    apply(person);

    if photos.is_empty() {
        return Ok(());
    }
    api.upload_faces(&id, photos).await?;
    apply(api.get_person(&id).await?);
    Ok(())
}

/// Rename (when `name` is non-blank), then upload `photos`. A rename the
/// server accepted reaches `apply` before the upload starts.
pub async fn save_person_changes(
    api: &ApiClient,
    id: &Id,
    name: &str,
    photos: &[UploadedFile],
    mut apply: impl FnMut(Person),
) -> Result<(), ApiError> {
    let name = name.trim();
    if !name.is_empty() {
        let renamed = api
            .update_person(id, &NewPerson { name: name.to_string() })
            .await?;
        tracing::info!("Renamed staff member {} to {}", id, renamed.name);
        apply(renamed);
    }
    if !photos.is_empty() {
        api.upload_faces(id, photos).await?;
        apply(api.get_person(id).await?);
    }
    Ok(())
}

// =============================================================================
// Cameras
// =============================================================================

#[derive(Clone, Copy, PartialEq)]
pub struct CamerasHook {
    pub collection: Signal<Collection<Camera>>,
    pub draft: Signal<NewCamera>,
    /// Camera info panel on the detail page
    pub details: Signal<Option<Camera>>,
    session: SessionContext,
    store: AppStore,
}

pub fn use_cameras() -> CamerasHook {
    let hook = CamerasHook {
        collection: use_signal(Collection::new),
        draft: use_signal(NewCamera::default),
        details: use_signal(|| None),
        session: use_session(),
        store: use_app_store(),
    };
    use_hook(move || hook.fetch_all());
    hook
}

impl CamerasHook {
    /// Fetch the list; a selection made on an earlier visit is restored from
    /// the store.
    pub fn fetch_all(&self) {
        let store = self.store;
        spawn_fetch(
            self.session,
            self.collection,
            "cameras",
            |api| async move { api.list_cameras().await },
            move |cameras| cameras.adopt_selection(store.selected_camera_index()),
        );
    }

    /// Create a camera from the draft, then reset the draft.
    pub fn add(&self) {
        let draft = self.draft.peek().clone();
        let mut collection = self.collection;
        let mut draft_signal = self.draft;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.create_camera(&draft).await },
            move |camera: Camera| {
                tracing::info!("Added camera {}", camera.name);
                accept_created(&mut *collection.write(), &mut *draft_signal.write(), camera);
            },
        );
    }

    pub fn update(&self, id: Id, changes: NewCamera) {
        let mut collection = self.collection;
        let mut details = self.details;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.update_camera(&id, &changes).await },
            move |camera: Camera| {
                tracing::info!("Updated camera {}", camera.name);
                if details.peek().as_ref().is_some_and(|d| d.id == camera.id) {
                    details.set(Some(camera.clone()));
                }
                collection.write().replace(camera);
            },
        );
    }

    pub fn remove(&self, id: Id) {
        let mut collection = self.collection;
        let store = self.store;
        spawn_mutation(
            self.session,
            self.collection,
            {
                let id = id.clone();
                move |api| async move { api.delete_camera(&id).await }
            },
            move |()| {
                tracing::info!("Deleted camera {}", id);
                let action = camera_removed(&mut *collection.write(), &id);
                store.dispatch(action);
            },
        );
    }

    /// Select locally and record the index in the store.
    pub fn pick(&self, pick: CameraPick<'_>) {
        let mut collection = self.collection;
        let action = pick_camera(&mut *collection.write(), pick);
        if let Some(action) = action {
            self.store.dispatch(action);
        }
    }

    pub fn select_by_name(&self, name: &str) {
        self.pick(CameraPick::Name(name));
    }

    pub fn select_index(&self, index: usize) {
        self.pick(CameraPick::Index(index));
    }

    pub fn fetch_details(&self, id: Id) {
        let mut details = self.details;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.get_camera(&id).await },
            move |camera: Camera| details.set(Some(camera)),
        );
    }

    /// Download a camera's log report into the store's file list.
    pub fn download_logs(&self, id: Id) {
        let store = self.store;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.download_camera_logs(&id).await },
            move |file: DownloadedFile| {
                let file: UploadedFile = file.into();
                tracing::info!("Downloaded {} ({} bytes)", file.name, file.size());
                store.add_files(vec![file]);
            },
        );
    }

    pub fn dismiss_error(&self) {
        let mut collection = self.collection;
        collection.write().clear_error();
    }
}

// =============================================================================
// Staff
// =============================================================================

#[derive(Clone, Copy, PartialEq)]
pub struct PersonsHook {
    pub collection: Signal<Collection<Person>>,
    pub draft: Signal<NewPerson>,
    session: SessionContext,
    store: AppStore,
}

pub fn use_persons() -> PersonsHook {
    let hook = PersonsHook {
        collection: use_signal(Collection::new),
        draft: use_signal(NewPerson::default),
        session: use_session(),
        store: use_app_store(),
    };
    use_hook(move || hook.fetch_all());
    hook
}

impl PersonsHook {
    pub fn fetch_all(&self) {
        spawn_fetch(
            self.session,
            self.collection,
            "staff",
            |api| async move { api.list_persons().await },
            |_| {},
        );
    }

    /// Create a person from the draft, then upload `photos` for the new id.
    pub fn add(&self, photos: Vec<UploadedFile>) {
        let draft = self.draft.peek().clone();
        let mut collection = self.collection;
        let mut draft_signal = self.draft;
        let session = self.session;
        let store = self.store;

        spawn(async move {
            let result = async {
                let api = session.client()?;
                save_new_person(&api, &draft, &photos, |person| {
                    draft_signal.set(NewPerson::default());
                    collection.write().upsert(person);
                })
                .await
            }
            .await;

            match result {
                Ok(()) => store.add_files(photos),
                Err(e) => {
                    tracing::warn!("{}", e);
                    collection.write().record_failure(&e);
                }
            }
        });
    }

    /// Rename (when `name` is non-empty) and/or add photos.
    pub fn update(&self, id: Id, name: String, photos: Vec<UploadedFile>) {
        let mut collection = self.collection;
        let session = self.session;
        let store = self.store;

        spawn(async move {
            let result = async {
                let api = session.client()?;
                save_person_changes(&api, &id, &name, &photos, |person| {
                    collection.write().replace(person);
                })
                .await
            }
            .await;

            match result {
                Ok(()) => store.add_files(photos),
                Err(e) => {
                    tracing::warn!("{}", e);
                    collection.write().record_failure(&e);
                }
            }
        });
    }

    pub fn remove(&self, id: Id) {
        let mut collection = self.collection;
        spawn_mutation(
            self.session,
            self.collection,
            {
                let id = id.clone();
                move |api| async move { api.delete_person(&id).await }
            },
            move |()| {
                tracing::info!("Deleted staff member {}", id);
                collection.write().remove(&id);
            },
        );
    }

    pub fn select_index(&self, index: Option<usize>) {
        let mut collection = self.collection;
        collection.write().select_index(index);
    }

    pub fn select_by_name(&self, name: &str) -> Option<usize> {
        let mut collection = self.collection;
        let index = collection.write().select_by_name(name);
        index
    }

    pub fn dismiss_error(&self) {
        let mut collection = self.collection;
        collection.write().clear_error();
    }
}

// =============================================================================
// Streams
// =============================================================================

#[derive(Clone, Copy, PartialEq)]
pub struct StreamsHook {
    pub collection: Signal<Collection<StreamProcessor>>,
    pub draft: Signal<NewStream>,
    pub status: Signal<Option<StreamStatus>>,
    session: SessionContext,
}

pub fn use_streams() -> StreamsHook {
    let hook = StreamsHook {
        collection: use_signal(Collection::new),
        draft: use_signal(NewStream::default),
        status: use_signal(|| None),
        session: use_session(),
    };
    use_hook(move || hook.fetch_all());
    hook
}

impl StreamsHook {
    pub fn fetch_all(&self) {
        spawn_fetch(
            self.session,
            self.collection,
            "streams",
            |api| async move { api.list_streams().await },
            |_| {},
        );
    }

    /// Deploy a stream processor from the draft.
    pub fn add(&self) {
        let draft = self.draft.peek().clone();
        let camera_id = draft.camera_id.map(Id::from);
        let mut collection = self.collection;
        let mut draft_signal = self.draft;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.create_stream(&draft).await },
            move |deployment: StreamDeployment| {
                tracing::info!(
                    "Deployed stream {} ({})",
                    deployment.name,
                    deployment.container_name.as_deref().unwrap_or("no container")
                );
                let stream = StreamProcessor {
                    name: deployment.name,
                    camera_id,
                };
                accept_created(&mut *collection.write(), &mut *draft_signal.write(), stream);
            },
        );
    }

    pub fn remove(&self, name: String) {
        let mut collection = self.collection;
        let mut status = self.status;
        spawn_mutation(
            self.session,
            self.collection,
            {
                let name = name.clone();
                move |api| async move { api.delete_stream(&name).await }
            },
            move |()| {
                tracing::info!("Deleted stream {}", name);
                stream_removed(&mut *collection.write(), &mut *status.write(), &name);
            },
        );
    }

    pub fn fetch_status(&self, name: String) {
        let mut status = self.status;
        spawn_mutation(
            self.session,
            self.collection,
            move |api| async move { api.stream_status(&name).await },
            move |s: StreamStatus| status.set(Some(s)),
        );
    }

    pub fn select_by_name(&self, name: &str) -> Option<usize> {
        let mut collection = self.collection;
        let index = collection.write().select_by_name(name);
        index
    }

    pub fn dismiss_error(&self) {
        let mut collection = self.collection;
        collection.write().clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;

    fn camera(id: i64, name: &str) -> Camera {
        Camera {
            id: Id::from(id),
            name: name.to_string(),
            url: format!("rtsp://cam{id}/live"),
            description: None,
            is_active: true,
        }
    }

    fn loaded(cameras: Vec<Camera>) -> Collection<Camera> {
        let mut c = Collection::new();
        let ticket = c.begin_fetch();
        c.complete_fetch(ticket, Ok(cameras));
        c
    }

    fn three() -> Collection<Camera> {
        loaded(vec![camera(1, "Lobby"), camera(2, "Gate"), camera(3, "Yard")])
    }

    #[test]
    fn grid_click_and_dropdown_agree() {
        let mut clicked = three();
        let mut chosen = three();

        let by_click = pick_camera(&mut clicked, CameraPick::Index(2));
        let by_name = pick_camera(&mut chosen, CameraPick::Name("Yard"));

        assert_eq!(by_click, Some(Action::SetSelectedCameraIndex(Some(2))));
        assert_eq!(by_click, by_name);
        assert_eq!(clicked.selected(), chosen.selected());

        let state = AppState::default().reduce(by_click.unwrap());
        assert_eq!(state.selected_camera_index, Some(2));
    }

    #[test]
    fn unknown_name_keeps_selection_and_store() {
        let mut cameras = three();
        pick_camera(&mut cameras, CameraPick::Index(1));
        assert_eq!(pick_camera(&mut cameras, CameraPick::Name("Roof")), None);
        assert_eq!(cameras.selected(), Some(1));
    }

    #[test]
    fn out_of_range_click_clears_the_stored_selection() {
        let mut cameras = three();
        pick_camera(&mut cameras, CameraPick::Index(0));
        assert_eq!(
            pick_camera(&mut cameras, CameraPick::Index(9)),
            Some(Action::SetSelectedCameraIndex(None))
        );
    }

    #[test]
    fn removal_keeps_store_on_the_same_camera() {
        let mut cameras = three();
        pick_camera(&mut cameras, CameraPick::Name("Yard"));

        let action = camera_removed(&mut cameras, &Id::from(1));
        assert_eq!(action, Action::SetSelectedCameraIndex(Some(1)));
        assert_eq!(cameras.selected_item().map(|c| c.name.as_str()), Some("Yard"));

        let action = camera_removed(&mut cameras, &Id::from(3));
        assert_eq!(action, Action::SetSelectedCameraIndex(None));
        assert_eq!(cameras.len(), 1);
    }

    #[test]
    fn created_camera_is_listed_and_draft_reset() {
        let mut cameras = three();
        let mut draft = NewCamera {
            name: "Dock".to_string(),
            url: "rtsp://dock/live".to_string(),
            ..NewCamera::default()
        };

        accept_created(&mut cameras, &mut draft, camera(4, "Dock"));

        assert_eq!(cameras.len(), 4);
        assert_eq!(cameras.items()[3].name, "Dock");
        assert_eq!(draft, NewCamera::default());
    }

    #[test]
    fn removed_stream_clears_its_status_only() {
        let mut streams = Collection::new();
        let ticket = streams.begin_fetch();
        streams.complete_fetch(
            ticket,
            Ok(vec![
                StreamProcessor { name: "gate".to_string(), camera_id: Some(Id::from(2)) },
                StreamProcessor { name: "yard".to_string(), camera_id: None },
            ]),
        );
        let mut status = Some(StreamStatus {
            name: "yard".to_string(),
            status: "Running".to_string(),
            details: None,
        });

        stream_removed(&mut streams, &mut status, "gate");
        assert!(status.is_some());

        stream_removed(&mut streams, &mut status, "yard");
        assert_eq!(status, None);
        assert!(streams.is_empty());
    }
}
