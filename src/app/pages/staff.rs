//! Staff roster with face-photo upload.

use dioxus::prelude::*;

use crate::api::{Id, Person};
use crate::app::components::{
    Dropdown, ErrorAlert, ErrorState, FileUploadButton, Layout, Loading, Modal, TextInput,
};
use crate::app::hooks::{use_persons, PersonsHook};
use crate::collection::LoadStatus;
use crate::nav::Destination;
use crate::report::{delete_person_prompt, faces_caption};
use crate::store::UploadedFile;

#[component]
pub fn Staff() -> Element {
    let persons = use_persons();
    let mut confirm_delete = use_signal(|| None::<Person>);
    let mut show_add = use_signal(|| false);
    let mut show_edit = use_signal(|| false);

    let collection = persons.collection.read();
    let body = match collection.status() {
        LoadStatus::Idle | LoadStatus::Loading => Some(rsx! { Loading {} }),
        LoadStatus::Failed(msg) => Some(rsx! { ErrorState { message: msg.clone() } }),
        LoadStatus::Loaded => None,
    };
    if let Some(body) = body {
        return rsx! {
            Layout { title: "Staff".to_string(), active: Destination::Staff, {body} }
        };
    }

    let people: Vec<Person> = collection.items().to_vec();
    let selected = collection.selected();
    let mutation_error = collection.error().map(str::to_string);
    drop(collection);

    let pending_delete = confirm_delete();
    let delete_prompt = pending_delete.as_ref().map(|p| delete_person_prompt(&p.name));
    let delete_id = pending_delete.as_ref().map(|p| p.id.clone());

    rsx! {
        Layout { title: "Staff".to_string(), active: Destination::Staff,
            if let Some(msg) = mutation_error {
                ErrorAlert { message: msg, on_dismiss: move |_| persons.dismiss_error() }
            }

            div { class: "card",
                if people.is_empty() {
                    p { class: "text-muted", "No staff members" }
                }
                ul { class: "item-list",
                    for (index, person) in people.into_iter().enumerate() {
                        StaffRow {
                            key: "{person.id}",
                            person: person.clone(),
                            selected: selected == Some(index),
                            on_select: move |_| persons.select_index(Some(index)),
                            on_delete: move |p: Person| confirm_delete.set(Some(p)),
                        }
                    }
                }
                div { class: "actions",
                    button { class: "btn btn-secondary", onclick: move |_| show_edit.set(true), "Edit staff member" }
                    button { class: "btn btn-primary", onclick: move |_| show_add.set(true), "Add staff member" }
                }
            }

            Modal {
                open: pending_delete.is_some(),
                title: "Delete staff member".to_string(),
                on_close: move |_| confirm_delete.set(None),
                if let Some(prompt) = delete_prompt {
                    p { "{prompt}" }
                    div { class: "actions",
                        button { class: "btn btn-ghost", onclick: move |_| confirm_delete.set(None), "Cancel" }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| {
                                if let Some(ref id) = delete_id {
                                    persons.remove(id.clone());
                                }
                                persons.select_index(None);
                                confirm_delete.set(None);
                            },
                            "Delete"
                        }
                    }
                }
            }

            Modal {
                open: show_add(),
                title: "Add staff member".to_string(),
                on_close: move |_| show_add.set(false),
                AddPersonForm { persons, on_done: move |_| show_add.set(false) }
            }

            Modal {
                open: show_edit(),
                title: "Edit staff member".to_string(),
                on_close: move |_| show_edit.set(false),
                EditPersonForm { persons, on_done: move |_| show_edit.set(false) }
            }
        }
    }
}

#[component]
fn StaffRow(
    person: Person,
    selected: bool,
    on_select: EventHandler<()>,
    on_delete: EventHandler<Person>,
) -> Element {
    let caption = faces_caption(person.faces.len());
    let name = person.name.clone();

    rsx! {
        li { class: if selected { "item selected" } else { "item" },
            div { class: "item-name", onclick: move |_| on_select.call(()), "{name}" }
            if selected {
                p { class: "text-muted", "{caption}" }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| on_delete.call(person.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn PhotoList(photos: Vec<UploadedFile>) -> Element {
    if photos.is_empty() {
        return rsx! {};
    }
    rsx! {
        ul { class: "file-list",
            for (i, photo) in photos.iter().enumerate() {
                li { key: "{i}", "{photo.name}" }
            }
        }
    }
}

#[component]
fn AddPersonForm(persons: PersonsHook, on_done: EventHandler<()>) -> Element {
    let mut draft = persons.draft;
    let mut photos = use_signal(Vec::<UploadedFile>::new);
    let name = draft.read().name.clone();

    rsx! {
        TextInput {
            label: "Full name",
            value: name.clone(),
            on_input: move |v| draft.write().name = v,
        }
        FileUploadButton {
            label: "Choose photos".to_string(),
            accept: "image/*".to_string(),
            on_files: move |files: Vec<UploadedFile>| photos.write().extend(files),
        }
        PhotoList { photos: photos() }
        button {
            class: "btn btn-primary",
            disabled: name.trim().is_empty(),
            onclick: move |_| {
                persons.add(photos.peek().clone());
                photos.set(Vec::new());
                on_done.call(());
            },
            "Add"
        }
    }
}

#[component]
fn EditPersonForm(persons: PersonsHook, on_done: EventHandler<()>) -> Element {
    let mut target = use_signal(|| None::<Id>);
    let mut new_name = use_signal(String::new);
    let mut photos = use_signal(Vec::<UploadedFile>::new);

    let collection = persons.collection.read();
    let names: Vec<String> = collection.items().iter().map(|p| p.name.clone()).collect();
    let picked = target
        .read()
        .as_ref()
        .and_then(|id| collection.items().iter().position(|p| &p.id == id));
    drop(collection);

    rsx! {
        Dropdown {
            label: "Staff member".to_string(),
            placeholder: "Select a staff member".to_string(),
            options: names,
            selected: picked,
            on_select: move |name: String| {
                if let Some(index) = persons.select_by_name(&name) {
                    let id = persons.collection.peek().get(index).map(|p| p.id.clone());
                    target.set(id);
                }
            },
        }
        if picked.is_some() {
            TextInput {
                label: "New name",
                placeholder: "Leave empty to keep the current name".to_string(),
                value: new_name(),
                on_input: move |v| new_name.set(v),
            }
            FileUploadButton {
                label: "Add photos".to_string(),
                accept: "image/*".to_string(),
                on_files: move |files: Vec<UploadedFile>| photos.write().extend(files),
            }
            PhotoList { photos: photos() }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    if let Some(id) = target() {
                        persons.update(id, new_name.peek().clone(), photos.peek().clone());
                    }
                    new_name.set(String::new());
                    photos.set(Vec::new());
                    on_done.call(());
                },
                "Save"
            }
        }
    }
}
