//! Persistence and environment helpers for the app shell.

use crate::features::filters::profiles::FilterProfile;
use crate::features::resources::ResourceKind;
use crate::features::table::state::TableColumn;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

const COLUMNS_KEY_PREFIX: &str = "castellan.columns.";
const PROFILES_KEY: &str = "castellan.profiles";

fn columns_key(kind: ResourceKind) -> String {
    format!("{COLUMNS_KEY_PREFIX}{}", kind.as_str())
}

pub(crate) fn load_deactivated_columns(kind: ResourceKind) -> Vec<String> {
    LocalStorage::get::<Vec<String>>(&columns_key(kind)).unwrap_or_default()
}

pub(crate) fn persist_deactivated_columns(kind: ResourceKind, columns: &[TableColumn]) {
    let deactivated: Vec<&str> = columns
        .iter()
        .filter(|column| column.deactivated)
        .map(|column| column.name)
        .collect();
    set_storage(&columns_key(kind), deactivated);
}

pub(crate) fn load_profiles() -> Vec<FilterProfile> {
    LocalStorage::get::<Vec<FilterProfile>>(PROFILES_KEY).unwrap_or_default()
}

pub(crate) fn persist_profiles(profiles: &[FilterProfile]) {
    set_storage(PROFILES_KEY, profiles);
}

pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn set_storage<T: Serialize>(key: &str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key.to_string(), detail.to_string());
}
