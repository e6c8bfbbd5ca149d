//! The per-widget event loop.
//!
//! Owns every deadline for one widget: the rotation timer, the fade
//! completion deadline, and the debounced resize recomputation. A
//! deadline is cancelled by overwriting its `Option`, so at most one
//! rotation timer exists per widget and every re-arm site is a cancel
//! followed by a fresh deadline.

use std::sync::Arc;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::config::SlideshowOptions;
use crate::controller::{SlideshowSm, Step};
use crate::dom::Dom;
use crate::events::{Direction, WidgetCommand};
use crate::registry::SlideRegistry;
use crate::transition;

pub async fn run(
    dom: Arc<dyn Dom>,
    registry: SlideRegistry,
    opts: SlideshowOptions,
    mut sm: SlideshowSm,
    mut commands: Receiver<WidgetCommand>,
    cancel: CancellationToken,
) -> Result<()> {
    let mut rotate_at: Option<Instant> = None;
    let mut fade_done: Option<(Instant, usize)> = None;
    let mut resize_at: Option<Instant> = None;

    // Initial geometry pass, then arm the first auto-advance.
    transition::update_dimensions(dom.as_ref(), &registry, &opts, sm.index_on(), sm.index_to());
    if sm.start() == Step::ArmTimer {
        rotate_at = Some(Instant::now() + opts.wait_time);
    }

    loop {
        select! {
            // Commands drain before timers fire so a resize burst
            // coalesces into a single recomputation, matching the FIFO
            // dispatch of a browser event loop.
            biased;

            _ = cancel.cancelled() => break,

            maybe_cmd = commands.recv() => {
                let Some(cmd) = maybe_cmd else { break };
                match cmd {
                    WidgetCommand::Next | WidgetCommand::Prev => {
                        let direction = if cmd == WidgetCommand::Next {
                            Direction::Next
                        } else {
                            Direction::Prev
                        };
                        match sm.navigate(direction) {
                            Step::BeginTransition { from, to } => {
                                debug!(from, to, ?direction, "manual navigation");
                                start_transition(
                                    dom.as_ref(), &registry, &opts, from, to,
                                    &mut rotate_at, &mut fade_done,
                                );
                            }
                            _ => trace!("navigation ignored while transitioning"),
                        }
                    }
                    WidgetCommand::HoverEnter => {
                        if opts.hover_pause && sm.hover_enter() {
                            rotate_at = None;
                        }
                    }
                    WidgetCommand::HoverExit => {
                        if opts.hover_pause && sm.hover_exit() {
                            rotate_at = Some(Instant::now() + opts.wait_time);
                        }
                    }
                    WidgetCommand::Resize => {
                        // Cancel-and-reschedule: one deferred recomputation
                        // per burst, never a poll loop.
                        resize_at = Some(Instant::now());
                    }
                }
            }

            // Deadline expressions are wrapped in async blocks so a
            // disabled branch never inspects its empty `Option`; select!
            // evaluates branch expressions before checking preconditions.
            _ = async { sleep_until(fade_done.map(|(at, _)| at).unwrap_or_else(Instant::now)).await },
                if fade_done.is_some() =>
            {
                if let Some((_, target)) = fade_done.take() {
                    trace!(target, "fade complete");
                    if sm.fade_complete(target) {
                        rotate_at = Some(Instant::now() + opts.wait_time);
                    }
                }
            }

            _ = async { sleep_until(rotate_at.unwrap_or_else(Instant::now)).await },
                if rotate_at.is_some() =>
            {
                rotate_at = None;
                if let Step::BeginTransition { from, to } = sm.timer_fired() {
                    debug!(from, to, "auto advance");
                    start_transition(
                        dom.as_ref(), &registry, &opts, from, to,
                        &mut rotate_at, &mut fade_done,
                    );
                }
            }

            _ = async { sleep_until(resize_at.unwrap_or_else(Instant::now)).await },
                if resize_at.is_some() =>
            {
                resize_at = None;
                trace!("resize settled, recomputing dimensions");
                transition::update_dimensions(
                    dom.as_ref(), &registry, &opts, sm.index_on(), sm.index_to(),
                );
            }
        }
    }

    Ok(())
}

fn start_transition(
    dom: &dyn Dom,
    registry: &SlideRegistry,
    opts: &SlideshowOptions,
    from: usize,
    to: usize,
    rotate_at: &mut Option<Instant>,
    fade_done: &mut Option<(Instant, usize)>,
) {
    *rotate_at = None;
    transition::begin(dom, registry, opts, from, to);
    *fade_done = Some((Instant::now() + opts.fade_time, to));
}
