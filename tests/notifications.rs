// SPDX-License-Identifier: MPL-2.0
//! Property tests for the message registry driven through the Iced layer.

use approx::relative_eq;
use iced_element::ui::notifications::{
    Lifecycle, MessageOptions, MessageType, NotificationId, Registry, ToastLayer, ToastMessage,
};
use iced_element::ui::state::MessageDuration;
use proptest::prelude::*;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum Op {
    Create { kind: u8, persistent: bool },
    Dismiss(usize),
    Measure(usize, f32),
    Tick,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..4, any::<bool>()).prop_map(|(kind, persistent)| Op::Create { kind, persistent }),
        2 => (0usize..16).prop_map(Op::Dismiss),
        1 => (0usize..16, 10.0f32..200.0).prop_map(|(index, height)| Op::Measure(index, height)),
        1 => Just(Op::Tick),
    ]
}

fn kind(seed: u8) -> MessageType {
    match seed {
        0 => MessageType::Success,
        1 => MessageType::Info,
        2 => MessageType::Warning,
        _ => MessageType::Danger,
    }
}

fn later() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}

fn live_ids(registry: &Registry<ToastLayer>) -> Vec<NotificationId> {
    registry.instances().map(|instance| instance.id()).collect()
}

fn apply(registry: &mut Registry<ToastLayer>, op: &Op) -> bool {
    match op {
        Op::Create { kind: seed, persistent } => {
            let mut options = MessageOptions::new("property").kind(kind(*seed));
            if *persistent {
                options = options.duration(MessageDuration::PERSISTENT);
            }
            registry.create(options).is_ok()
        }
        Op::Dismiss(index) => {
            if let Some(id) = live_ids(registry).get(*index).copied() {
                registry.dismiss(id);
            }
            false
        }
        Op::Measure(index, height) => {
            if let Some(id) = live_ids(registry).get(*index).copied() {
                registry.handle_message(&ToastMessage::Measured(id, *height));
            }
            false
        }
        Op::Tick => {
            registry.tick(later());
            false
        }
    }
}

proptest! {
    #[test]
    fn ids_and_z_indices_increase_in_stacking_order(ops in prop::collection::vec(op(), 1..40)) {
        let mut registry = Registry::new(ToastLayer::new());
        let mut created = 0usize;
        let mut last_created = None;

        for op in &ops {
            if apply(&mut registry, op) {
                created += 1;
                last_created = registry.last_instance().map(|instance| instance.id());
            }

            let ids = live_ids(&registry);
            prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            let z: Vec<u32> = registry.instances().map(|instance| instance.z_index()).collect();
            prop_assert!(z.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(z.iter().all(|z| *z > 2000));
        }

        prop_assert!(registry.len() <= created);
        if let Some(last) = registry.last_instance() {
            prop_assert_eq!(Some(last.id()), live_ids(&registry).last().copied());
            prop_assert!(last_created.is_some_and(|id| last.id() <= id));
        }
    }

    #[test]
    fn every_message_sits_below_its_predecessor(ops in prop::collection::vec(op(), 1..40)) {
        let mut registry = Registry::new(ToastLayer::new());
        for op in &ops {
            apply(&mut registry, op);
        }

        for instance in registry.instances() {
            let top = registry.surface().top(instance.id()).unwrap_or(f32::NAN);
            let expected = instance.offset() + registry.bottom_offset_before(instance.id());
            prop_assert!(relative_eq!(top, expected), "top {} != {}", top, expected);
        }
        if let Some(first) = registry.instances().next() {
            prop_assert_eq!(registry.bottom_offset_before(first.id()), 0.0);
        };
    }

    #[test]
    fn clear_all_then_exits_empties_the_registry(ops in prop::collection::vec(op(), 1..40)) {
        let mut registry = Registry::new(ToastLayer::new());
        for op in &ops {
            apply(&mut registry, op);
        }
        let before = live_ids(&registry);

        registry.clear_all();
        for id in &before {
            prop_assert_eq!(registry.lifecycle(*id), Some(Lifecycle::Hiding));
        }

        registry.tick(later());
        prop_assert!(registry.is_empty());
        prop_assert_eq!(registry.surface().mounted_count(), 0);
        for id in &before {
            prop_assert_eq!(registry.lifecycle(*id), Some(Lifecycle::Destroyed));
        }
    }
}
