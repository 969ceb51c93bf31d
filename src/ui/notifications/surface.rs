// SPDX-License-Identifier: MPL-2.0
//! Rendering surface the registry drives.
//!
//! The registry never touches widgets itself. It asks a [`Surface`] to mount,
//! position, hide, measure and unmount nodes, and treats the returned node
//! as opaque.

use super::notification::MessageProps;
use crate::error::Result;

pub trait Surface {
    /// Opaque handle to one mounted message.
    type Node;

    /// Renders a message into an offscreen container.
    ///
    /// Returns once the node is fully initialized, so it can be hidden and
    /// measured before it is ever visible.
    fn mount_detached(&mut self, props: MessageProps) -> Result<Self::Node>;

    /// Moves a detached node into the visible layer.
    fn attach(&mut self, node: &Self::Node);

    /// Sets the distance from the top of the layer to the node's top edge.
    fn place(&mut self, node: &Self::Node, top: f32);

    /// Starts the node's exit transition. Hiding an already hidden node is a no-op.
    fn hide(&mut self, node: &Self::Node);

    /// Current bottom edge of the node: its top plus its measured height.
    fn bottom_offset(&self, node: &Self::Node) -> f32;

    /// Releases everything the surface holds for the node.
    fn unmount(&mut self, node: Self::Node);
}
