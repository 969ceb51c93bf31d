// SPDX-License-Identifier: MPL-2.0
//! Message lifecycle management.
//!
//! The `Registry` is the single source of truth for which messages are alive,
//! in which order they stack, and where each one sits vertically. Every
//! creation and removal goes through it, so ids stay unique and no mounted
//! node is left behind.
//!
//! Dismissal is two-phase: [`Registry::dismiss`] only asks the node to hide.
//! The record stays in the registry until the surface reports the exit
//! transition finished by handing back the message's [`Completion`].

use super::notification::{Completion, Lifecycle, MessageOptions, MessageProps, NotificationId};
use super::surface::Surface;
use crate::error::{Error, Result};
use crate::ui::state::{StackOrder, ZIndex};
use std::fmt;

/// One live message and its bookkeeping.
#[derive(Debug)]
pub struct Instance<N> {
    id: NotificationId,
    z_index: u32,
    offset: f32,
    node: N,
    lifecycle: Lifecycle,
}

impl<N> Instance<N> {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Gap requested between this message and its predecessor.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
}

/// Returned by [`Registry::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    id: NotificationId,
}

impl MessageHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Starts this message's hide-then-destroy flow.
    pub fn dismiss<S: Surface, Z: StackOrder>(&self, registry: &mut Registry<S, Z>) -> bool {
        registry.dismiss(self.id)
    }
}

/// Ordered collection of live messages.
///
/// Insertion order is stacking order is visual top-to-bottom order. The
/// sequence only grows at the tail and only shrinks by removing one record
/// by id, which never reorders the rest.
pub struct Registry<S: Surface, Z: StackOrder = ZIndex> {
    surface: S,
    stack_order: Z,
    instances: Vec<Instance<S::Node>>,
    seed: u64,
}

impl<S: Surface, Z: StackOrder> fmt::Debug for Registry<S, Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field(
                "instances",
                &self.instances.iter().map(|i| i.id).collect::<Vec<_>>(),
            )
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Registry<S, ZIndex> {
    /// Creates an empty registry using the default z-index source.
    pub fn new(surface: S) -> Self {
        Self::with_stack_order(surface, ZIndex::default())
    }
}

impl<S: Surface, Z: StackOrder> Registry<S, Z> {
    pub fn with_stack_order(surface: S, stack_order: Z) -> Self {
        Self {
            surface,
            stack_order,
            instances: Vec::new(),
            seed: 1,
        }
    }

    /// Mounts a new message at the bottom of the stack.
    ///
    /// If the surface fails to mount, the error is returned and the registry
    /// is left untouched apart from the consumed id and z-index. An exhausted
    /// stacking order is an error too and consumes nothing.
    pub fn create(&mut self, options: MessageOptions) -> Result<MessageHandle> {
        let z_index = self
            .stack_order
            .next_z_index()
            .ok_or_else(|| Error::ZIndex("no z-index left above the newest message".into()))?;
        let id = NotificationId::new(self.seed);
        self.seed += 1;
        let offset = options.offset;

        let props = MessageProps {
            id,
            z_index,
            options,
            on_destroy: Completion::new(id),
        };

        let node = self.surface.mount_detached(props)?;
        self.surface.attach(&node);
        self.instances.push(Instance {
            id,
            z_index,
            offset,
            node,
            lifecycle: Lifecycle::Visible,
        });
        self.reflow();

        tracing::debug!(%id, z_index, live = self.instances.len(), "message created");
        Ok(MessageHandle { id })
    }

    /// Removes the message a completion signal belongs to and unmounts it.
    ///
    /// Returns `false` when the message is already gone, which happens when a
    /// completion is delivered twice.
    pub fn complete(&mut self, signal: Completion) -> bool {
        let id = signal.id();
        let Some(index) = self.position(id) else {
            tracing::trace!(%id, "completion for unknown message ignored");
            return false;
        };

        let instance = self.instances.remove(index);
        self.surface.unmount(instance.node);
        self.reflow();

        tracing::debug!(%id, live = self.instances.len(), "message destroyed");
        true
    }

    /// Asks a message to hide itself.
    ///
    /// The record stays until its completion arrives. Unknown ids and
    /// messages that are already hiding are left alone. Returns `true` if the
    /// message is live.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.hide_at(index);
                true
            }
            None => {
                tracing::trace!(%id, "dismiss for unknown message ignored");
                false
            }
        }
    }

    /// Dismisses every live message, in stacking order.
    pub fn clear_all(&mut self) {
        for index in 0..self.instances.len() {
            self.hide_at(index);
        }
    }

    /// The most recently created live message.
    pub fn last_instance(&self) -> Option<&Instance<S::Node>> {
        self.instances.last()
    }

    /// Bottom edge of the message stacked directly above `id`.
    ///
    /// Returns 0 for the first message and for ids that are not live.
    pub fn bottom_offset_before(&self, id: NotificationId) -> f32 {
        match self.position(id) {
            Some(index) if index > 0 => self.surface.bottom_offset(&self.instances[index - 1].node),
            _ => 0.0,
        }
    }

    /// Where the message's top edge belongs: its own offset below its predecessor.
    pub fn top_offset(&self, id: NotificationId) -> f32 {
        self.get(id)
            .map_or(0.0, |instance| instance.offset + self.bottom_offset_before(id))
    }

    /// Re-places every node from top to bottom.
    ///
    /// Measurements can change between reads, so this must run again after
    /// any height update.
    pub fn reflow(&mut self) {
        let mut previous_bottom = 0.0;
        for instance in &self.instances {
            let top = instance.offset + previous_bottom;
            self.surface.place(&instance.node, top);
            previous_bottom = self.surface.bottom_offset(&instance.node);
        }
    }

    pub fn get(&self, id: NotificationId) -> Option<&Instance<S::Node>> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    /// Lifecycle of any id this registry issued, `None` for ids it never did.
    #[must_use]
    pub fn lifecycle(&self, id: NotificationId) -> Option<Lifecycle> {
        match self.get(id) {
            Some(instance) => Some(instance.lifecycle),
            None if id.value() >= 1 && id.value() < self.seed => Some(Lifecycle::Destroyed),
            None => None,
        }
    }

    /// Live messages in stacking order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance<S::Node>> {
        self.instances.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.instances.iter().position(|instance| instance.id == id)
    }

    fn hide_at(&mut self, index: usize) {
        let instance = &mut self.instances[index];
        if instance.lifecycle == Lifecycle::Visible {
            instance.lifecycle = Lifecycle::Hiding;
            self.surface.hide(&instance.node);
            tracing::debug!(id = %instance.id, "message hiding");
        }
    }
}
