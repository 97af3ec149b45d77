//! End-to-end flows through the application facade.

use std::sync::Arc;

use pmx_application::{AppPorts, DeleteOutcome, DetailView, DirectoryApp, bootstrap};
use pmx_core::config::AppConfig;
use pmx_core::map::{MapBackend, MapPlaceholder};
use pmx_core::navigation::{Route, View};
use pmx_core::profile::{ProfileId, ProfileRepository};
use pmx_infrastructure::InMemoryProfileRepository;
use pmx_core::search::SearchFilters;
use pmx_core::theme::{PreferenceStore, SystemAppearance, Theme};
use pmx_core::validation::FormField;
use pmx_infrastructure::{FilePreferenceStore, InMemoryPreferenceStore};
use tempfile::TempDir;

fn config() -> AppConfig {
    AppConfig {
        mutation_delay_ms: 0,
        ..Default::default()
    }
}

async fn app() -> DirectoryApp {
    bootstrap(config(), AppPorts::default()).await.unwrap()
}

#[tokio::test]
async fn test_selection_is_cleared_by_visiting_admin() {
    let app = app().await;
    app.navigate(Route::explore()).await.unwrap();
    app.select_profile(ProfileId(1)).await.unwrap();
    assert_eq!(app.state().await.unwrap().selected_id(), Some(ProfileId(1)));

    app.navigate(Route::Admin).await.unwrap();
    assert_eq!(app.state().await.unwrap().selected_id(), None);

    app.navigate(Route::explore()).await.unwrap();
    assert_eq!(app.state().await.unwrap().current_view(), View::Explore);
    assert_eq!(app.state().await.unwrap().selected_id(), None);
}

#[tokio::test]
async fn test_deep_link_selects_existing_profile_only() {
    let app = app().await;
    app.open_location("/explore?profileId=2").await.unwrap();
    assert_eq!(app.state().await.unwrap().selected_id(), Some(ProfileId(2)));
    let selected = app.selected_profile().await.unwrap().unwrap();
    assert_eq!(selected.name, "Michael Chen");

    app.open_location("/explore?profileId=999").await.unwrap();
    assert_eq!(app.state().await.unwrap().selected_id(), Some(ProfileId(2)));
}

#[tokio::test]
async fn test_view_on_map_from_detail_page() {
    let app = app().await;
    app.navigate(Route::profile_detail(ProfileId(3))).await.unwrap();

    let transition = app.view_on_map(ProfileId(3)).await.unwrap();
    assert_eq!(
        transition.location.map(|r| r.to_location()),
        Some("/explore?profileId=3".to_string())
    );
    assert_eq!(app.state().await.unwrap().current_view(), View::Explore);

    let view = app.map_view().await.unwrap();
    let scene = view.scene().unwrap();
    assert_eq!(scene.highlighted().map(|m| m.profile_id), Some(ProfileId(3)));
    assert_eq!(scene.camera.center.longitude, -97.7431);
}

#[tokio::test]
async fn test_invalid_submission_reports_fields_and_keeps_store() {
    let app = app().await;
    let mut form = app.open_create_form();
    form.set_field(FormField::Bio, "Bio only");
    form.set_field(FormField::Street, "1 Main St");

    let err = app.save_profile(&mut form).await.unwrap_err();
    let fields: Vec<&str> = err.validation_errors().unwrap().fields().collect();
    assert_eq!(fields, vec!["address.city", "avatar", "email", "name"]);
    assert_eq!(app.all_profiles().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_deleting_selected_profile_clears_selection() {
    let app = app().await;
    app.open_location("/explore?profileId=2").await.unwrap();

    let outcome = app
        .delete_profile(ProfileId(2), &|_: &str| true)
        .await
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(app.state().await.unwrap().selected_id(), None);

    let detail = app.profile_detail(Some(ProfileId(2))).await.unwrap();
    assert_eq!(detail, DetailView::NotFound);
}

#[tokio::test]
async fn test_selection_dropped_when_profile_removed_behind_the_facade() {
    let repository = Arc::new(InMemoryProfileRepository::with_seed());
    let ports = AppPorts {
        repository: repository.clone(),
        ..Default::default()
    };
    let app = bootstrap(config(), ports).await.unwrap();
    app.open_location("/explore?profileId=3").await.unwrap();

    repository.delete(ProfileId(3)).await.unwrap();

    assert_eq!(app.state().await.unwrap().selected_id(), None);
    assert!(app.selected_profile().await.unwrap().is_none());
    let view = app.map_view().await.unwrap();
    assert!(view.scene().unwrap().highlighted().is_none());

    // Selecting a remaining profile still works afterwards
    let state = app.select_profile(ProfileId(1)).await.unwrap();
    assert_eq!(state.selected_id(), Some(ProfileId(1)));
}

#[tokio::test]
async fn test_edit_form_through_facade() {
    let app = app().await;
    let mut form = app.open_edit_form(ProfileId(1)).await.unwrap();
    form.set_field(FormField::City, "Oakland, CA");
    let saved = app.save_profile(&mut form).await.unwrap();
    assert_eq!(saved.id, ProfileId(1));
    assert!(!app.is_busy());
    assert_eq!(app.admin_error().await, None);
}

#[tokio::test]
async fn test_created_profile_is_appended_and_listed_in_order() {
    let app = app().await;
    let mut form = app.open_create_form();
    form.set_field(FormField::Name, "Dana Scully");
    form.set_field(FormField::Email, "dana@example.com");
    form.set_field(FormField::Avatar, "https://example.com/dana.png");
    form.set_field(FormField::Bio, "Physician");
    form.set_field(FormField::Street, "2 Federal Plaza");
    form.set_field(FormField::City, "Washington, DC");
    let created = app.save_profile(&mut form).await.unwrap();
    assert_eq!(created.id, ProfileId(4));

    let ids: Vec<u32> = app
        .visible_profiles()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id.get())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_filters_narrow_list_and_map() {
    let app = app().await;
    app.navigate(Route::explore()).await.unwrap();
    app.set_filters(SearchFilters::default().with_location("seattle"))
        .await;

    let visible = app.visible_profiles().await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ProfileId(2));

    let view = app.map_view().await.unwrap();
    assert_eq!(view.scene().unwrap().markers.len(), 1);

    app.set_filters(SearchFilters::new("nobody", "")).await;
    let view = app.map_view().await.unwrap();
    assert_eq!(view.placeholder(), Some(&MapPlaceholder::NoProfiles));
}

#[tokio::test]
async fn test_marker_activation_selects_profile() {
    let app = app().await;
    app.navigate(Route::explore()).await.unwrap();
    let state = app.activate_marker(ProfileId(1)).await.unwrap();
    assert_eq!(state.selected_id(), Some(ProfileId(1)));
}

#[tokio::test]
async fn test_vector_tile_backend_without_token() {
    let config = AppConfig {
        map_backend: MapBackend::VectorTile,
        mapbox_access_token: None,
        mutation_delay_ms: 0,
        ..Default::default()
    };
    let app = bootstrap(config, AppPorts::default()).await.unwrap();
    let view = app.map_view().await.unwrap();
    assert_eq!(view.placeholder(), Some(&MapPlaceholder::MissingToken));
    assert!(!app.retry_map().await);
}

#[tokio::test]
async fn test_theme_persists_through_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");

    let ports = AppPorts {
        preferences: Arc::new(FilePreferenceStore::with_path(&path)),
        system_appearance: SystemAppearance::Dark,
        ..Default::default()
    };
    let app = bootstrap(config(), ports).await.unwrap();
    assert_eq!(app.theme().await, Theme::Dark);
    assert_eq!(app.toggle_theme().await, Theme::Light);

    // A fresh start picks the stored choice over the system appearance
    let ports = AppPorts {
        preferences: Arc::new(FilePreferenceStore::with_path(&path)),
        system_appearance: SystemAppearance::Dark,
        ..Default::default()
    };
    let app = bootstrap(config(), ports).await.unwrap();
    assert_eq!(app.theme().await, Theme::Light);
}

#[tokio::test]
async fn test_custom_theme_storage_key() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let config = AppConfig {
        theme_storage_key: "pmx.theme".to_string(),
        ..config()
    };
    let ports = AppPorts {
        preferences: preferences.clone(),
        ..Default::default()
    };
    let app = bootstrap(config, ports).await.unwrap();
    app.toggle_theme().await;
    assert_eq!(
        preferences.get("pmx.theme").await.unwrap().as_deref(),
        Some("dark")
    );
}
