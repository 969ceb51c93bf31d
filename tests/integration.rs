// SPDX-License-Identifier: MPL-2.0
use approx::assert_relative_eq;
use iced_element::config::{self, Config, DEFAULT_MESSAGE_OFFSET, MAX_Z_INDEX_BASE};
use iced_element::ui::design_tokens::sizing;
use iced_element::ui::notifications::{
    Lifecycle, MessageOptions, MessageType, Registry, ToastLayer, ToastMessage,
};
use iced_element::ui::state::{MessageDuration, ZIndex};
use iced_element::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn later() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}

#[test]
fn test_config_round_trip_drives_message_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.message.duration_ms = Some(1500);
    config.message.show_close = Some(true);
    config.z_index.base = Some(3000);
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let options = MessageOptions::from_config("saved", &loaded.message);
    assert_eq!(options.duration.as_millis(), 1500);
    assert!(options.show_close);

    let mut registry =
        Registry::with_stack_order(ToastLayer::new(), ZIndex::new(loaded.z_index.base()));
    registry.create(options).expect("create message");
    assert_eq!(registry.last_instance().map(|i| i.z_index()), Some(3001));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "message = [not valid").expect("write file");

    let loaded = config::load_from_path(&path).expect("fallback config");
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_oversized_configured_base_keeps_z_indices_increasing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[z_index]\nbase = 4294967294\n").expect("write file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut registry =
        Registry::with_stack_order(ToastLayer::new(), ZIndex::new(loaded.z_index.base()));
    for text in ["a", "b", "c"] {
        registry.create(MessageOptions::new(text)).expect("create message");
    }

    let z: Vec<u32> = registry.instances().map(|i| i.z_index()).collect();
    assert_eq!(
        z,
        vec![MAX_Z_INDEX_BASE + 1, MAX_Z_INDEX_BASE + 2, MAX_Z_INDEX_BASE + 3]
    );
}

#[test]
fn test_messages_stack_then_expire_and_disappear() {
    let mut registry = Registry::new(ToastLayer::new());
    let ids: Vec<_> = [MessageType::Success, MessageType::Warning, MessageType::Danger]
        .into_iter()
        .map(|kind| {
            registry
                .create(MessageOptions::new("hello").kind(kind))
                .expect("create message")
                .id()
        })
        .collect();

    let step = DEFAULT_MESSAGE_OFFSET + sizing::MESSAGE_MIN_HEIGHT;
    for (index, id) in ids.iter().enumerate() {
        let top = registry.surface().top(*id).expect("mounted");
        assert_relative_eq!(top, DEFAULT_MESSAGE_OFFSET + step * index as f32);
    }

    // First tick expires every timer, the second lets the exits finish.
    registry.handle_message(&ToastMessage::Tick(later()));
    assert!(ids
        .iter()
        .all(|id| registry.lifecycle(*id) == Some(Lifecycle::Hiding)));
    assert_eq!(registry.len(), 3);

    registry.handle_message(&ToastMessage::Tick(later()));
    assert!(registry.is_empty());
    assert_eq!(registry.surface().mounted_count(), 0);
    assert!(ids
        .iter()
        .all(|id| registry.lifecycle(*id) == Some(Lifecycle::Destroyed)));
}

#[test]
fn test_persistent_message_survives_ticks_until_closed() {
    let mut registry = Registry::new(ToastLayer::new());
    let handle = registry
        .create(
            MessageOptions::new("stay")
                .duration(MessageDuration::PERSISTENT)
                .show_close(true),
        )
        .expect("create message");

    registry.tick(later());
    assert_eq!(registry.lifecycle(handle.id()), Some(Lifecycle::Visible));

    registry.handle_message(&ToastMessage::Close(handle.id()));
    assert_eq!(registry.lifecycle(handle.id()), Some(Lifecycle::Hiding));

    registry.tick(later());
    assert_eq!(registry.lifecycle(handle.id()), Some(Lifecycle::Destroyed));
}

#[test]
fn test_dismissed_and_expired_messages_all_leave() {
    let mut registry = Registry::new(ToastLayer::new());
    let a = registry.create(MessageOptions::new("a")).expect("a").id();
    let b = registry
        .create(MessageOptions::new("b").duration(MessageDuration::from_millis(10)))
        .expect("b")
        .id();
    let c = registry
        .create(MessageOptions::new("c").duration(MessageDuration::PERSISTENT))
        .expect("c")
        .id();
    registry.dismiss(a);
    registry.dismiss(c);

    // Only b is still visible with a timer; a and c finish their exits.
    registry.tick(later());
    registry.tick(later());
    assert!(registry.is_empty());

    let d = registry.create(MessageOptions::new("d")).expect("d").id();
    assert_relative_eq!(registry.bottom_offset_before(d), 0.0);
    assert_eq!(registry.lifecycle(b), Some(Lifecycle::Destroyed));
}

#[test]
fn test_measured_height_reflows_the_stack() {
    let mut registry = Registry::new(ToastLayer::new());
    let first = registry.create(MessageOptions::new("first")).expect("first").id();
    let second = registry.create(MessageOptions::new("second")).expect("second").id();

    registry.handle_message(&ToastMessage::Measured(first, 100.0));
    assert_relative_eq!(registry.bottom_offset_before(second), DEFAULT_MESSAGE_OFFSET + 100.0);
    assert_relative_eq!(
        registry.surface().top(second).expect("mounted"),
        DEFAULT_MESSAGE_OFFSET * 2.0 + 100.0
    );
}
