/// Host events delivered into a running widget task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    /// The right control was activated: advance one slide.
    Next,
    /// The left control was activated: retreat one slide.
    Prev,
    /// The pointer entered the container.
    HoverEnter,
    /// The pointer left the container.
    HoverExit,
    /// The viewport changed; geometry is recomputed once the burst settles.
    Resize,
}

/// Manual navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}
