// SPDX-License-Identifier: MPL-2.0
//! Iced rendering surface for messages.
//!
//! `ToastLayer` owns the rendered state of every message: whether it is
//! mounted or attached, where it sits, how tall it is, its auto-dismiss timer
//! and its exit transition. The registry drives it through [`Surface`];
//! time only advances when the host forwards [`Message::Tick`].

use super::notification::{Completion, MessageProps, NotificationId};
use super::registry::Registry;
use super::surface::Surface;
use crate::error::{Error, Result};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::StackOrder;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, text, Container, Row, Stack, Text};
use iced::{alignment, time, Element, Length, Padding, Subscription};
use std::time::{Duration, Instant};

/// How often timers are checked while messages are on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Messages for message layer state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a message was pressed.
    Close(NotificationId),
    /// Tick for checking auto-dismiss and transition timers.
    Tick(Instant),
    /// The rendered height of a message.
    ///
    /// Until one arrives, the height is estimated from the content with line
    /// wrapping taken into account. Only the host can send it, after laying
    /// the message out itself.
    Measured(NotificationId, f32),
}

/// Exit transition selected by a message's transition name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeUp,
    Fade,
    None,
}

impl Transition {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade-up" => Transition::FadeUp,
            "fade" => Transition::Fade,
            "none" => Transition::None,
            other => {
                tracing::warn!(transition = other, "unknown transition, using fade-up");
                Transition::FadeUp
            }
        }
    }

    #[must_use]
    pub fn exit_duration(self) -> Duration {
        match self {
            Transition::FadeUp => Duration::from_millis(300),
            Transition::Fade => Duration::from_millis(200),
            Transition::None => Duration::ZERO,
        }
    }
}

/// Timers that fired during one [`ToastLayer::tick`].
#[derive(Debug, Default)]
pub struct Tick {
    /// Visible messages whose display duration elapsed.
    pub expired: Vec<NotificationId>,
    /// Hiding messages whose exit transition finished.
    pub finished: Vec<Completion>,
}

#[derive(Debug)]
struct Toast {
    props: MessageProps,
    transition: Transition,
    mounted_at: Instant,
    hiding_since: Option<Instant>,
    top: f32,
    height: f32,
    opacity: f32,
}

impl Toast {
    fn new(props: MessageProps) -> Self {
        let lines = props
            .options
            .content
            .line_count(sizing::MESSAGE_CHARS_PER_LINE);
        let height =
            sizing::MESSAGE_MIN_HEIGHT + (lines - 1) as f32 * sizing::MESSAGE_LINE_HEIGHT;
        Self {
            transition: Transition::from_name(&props.options.transition_name),
            props,
            mounted_at: Instant::now(),
            hiding_since: None,
            top: 0.0,
            height,
            opacity: 1.0,
        }
    }

    fn id(&self) -> NotificationId {
        self.props.id
    }

    /// Rendered top edge, shifted upwards while a fade-up exit runs.
    fn visual_top(&self) -> f32 {
        match self.transition {
            Transition::FadeUp => (self.top - (1.0 - self.opacity) * spacing::MD).max(0.0),
            Transition::Fade | Transition::None => self.top,
        }
    }
}

/// Iced implementation of [`Surface`].
#[derive(Debug, Default)]
pub struct ToastLayer {
    detached: Vec<Toast>,
    attached: Vec<Toast>,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances auto-dismiss and exit transition timers to `now`.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick::default();
        for toast in &mut self.attached {
            match toast.hiding_since {
                None => {
                    let expired = toast
                        .props
                        .options
                        .duration
                        .auto_dismiss()
                        .is_some_and(|delay| now.saturating_duration_since(toast.mounted_at) >= delay);
                    if expired {
                        tick.expired.push(toast.id());
                    }
                }
                Some(since) => {
                    let exit = toast.transition.exit_duration();
                    let elapsed = now.saturating_duration_since(since);
                    if elapsed >= exit {
                        toast.opacity = 0.0;
                        tick.finished.push(toast.props.on_destroy.clone());
                    } else {
                        toast.opacity = 1.0 - elapsed.as_secs_f32() / exit.as_secs_f32();
                    }
                }
            }
        }
        tick
    }

    /// Records a rendered height. Non-finite or non-positive values are ignored.
    pub fn measure(&mut self, id: NotificationId, height: f32) {
        if !height.is_finite() || height <= 0.0 {
            return;
        }
        if let Some(toast) = self.find_mut(&id) {
            toast.height = height;
        }
    }

    #[must_use]
    pub fn is_attached(&self, id: NotificationId) -> bool {
        self.attached.iter().any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn is_hiding(&self, id: NotificationId) -> bool {
        self.find(&id).is_some_and(|toast| toast.hiding_since.is_some())
    }

    #[must_use]
    pub fn top(&self, id: NotificationId) -> Option<f32> {
        self.find(&id).map(|toast| toast.top)
    }

    /// Number of mounted nodes, attached or not.
    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.detached.len() + self.attached.len()
    }

    fn find(&self, id: &NotificationId) -> Option<&Toast> {
        self.attached
            .iter()
            .chain(self.detached.iter())
            .find(|toast| toast.id() == *id)
    }

    fn find_mut(&mut self, id: &NotificationId) -> Option<&mut Toast> {
        self.attached
            .iter_mut()
            .chain(self.detached.iter_mut())
            .find(|toast| toast.id() == *id)
    }
}

impl Surface for ToastLayer {
    type Node = NotificationId;

    fn mount_detached(&mut self, props: MessageProps) -> Result<Self::Node> {
        let id = props.id;
        if self.find(&id).is_some() {
            return Err(Error::Mount(format!("{id} is already mounted")));
        }
        self.detached.push(Toast::new(props));
        Ok(id)
    }

    fn attach(&mut self, node: &Self::Node) {
        if let Some(index) = self.detached.iter().position(|toast| toast.id() == *node) {
            let toast = self.detached.remove(index);
            self.attached.push(toast);
        }
    }

    fn place(&mut self, node: &Self::Node, top: f32) {
        if let Some(toast) = self.find_mut(node) {
            toast.top = top;
        }
    }

    fn hide(&mut self, node: &Self::Node) {
        if let Some(toast) = self.find_mut(node) {
            toast.hiding_since.get_or_insert_with(Instant::now);
        }
    }

    fn bottom_offset(&self, node: &Self::Node) -> f32 {
        self.find(node).map_or(0.0, |toast| toast.top + toast.height)
    }

    fn unmount(&mut self, node: Self::Node) {
        self.attached.retain(|toast| toast.id() != node);
        self.detached.retain(|toast| toast.id() != node);
    }
}

impl<Z: StackOrder> Registry<ToastLayer, Z> {
    /// Applies timers: expired messages are dismissed, finished exits destroyed.
    pub fn tick(&mut self, now: Instant) {
        let Tick { expired, finished } = self.surface_mut().tick(now);
        for id in expired {
            self.dismiss(id);
        }
        for signal in finished {
            self.complete(signal);
        }
    }

    /// Handles a message layer message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
            Message::Measured(id, height) => {
                self.surface_mut().measure(*id, *height);
                self.reflow();
            }
        }
    }

    /// Timer subscription, only active while messages are on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }

    /// Renders every attached message, higher z-index on top.
    pub fn view(&self) -> Element<'_, Message> {
        let mut toasts: Vec<&Toast> = self.surface().attached.iter().collect();
        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }
        toasts.sort_by_key(|toast| toast.props.z_index);

        toasts
            .into_iter()
            .fold(
                Stack::new().width(Length::Fill).height(Length::Fill),
                |stack, toast| {
                    stack.push(
                        Container::new(view_toast(toast))
                            .width(Length::Fill)
                            .align_x(alignment::Horizontal::Center)
                            .padding(Padding::ZERO.top(toast.visual_top())),
                    )
                },
            )
            .into()
    }
}

fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let options = &toast.props.options;
    let accent = options.kind.color();
    let opacity = toast.opacity;

    let icon = Text::new(options.kind.icon())
        .size(sizing::ICON_MD)
        .style(move |_theme: &iced::Theme| text::Style {
            color: Some(iced::Color {
                a: opacity,
                ..accent
            }),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(
            Container::new(options.content.view())
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if options.show_close {
        content = content.push(
            button(Text::new("\u{2715}").size(typography::BODY_SM))
                .on_press(Message::Close(toast.id()))
                .padding(spacing::XXS)
                .style(button_styles::close),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::MESSAGE_WIDTH))
        .height(Length::Fixed(toast.height))
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(container_styles::message(accent, opacity))
        .into()
}
