use kurbo::{Point, Vec2};

use crate::input::event::{PointerAction, PointerEvent};
use crate::layout::params::ChildId;

/// Gesture routing state of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteState {
    /// No gesture is captured.
    #[default]
    Idle,
    /// Events of the current gesture go to this child.
    Routing(ChildId),
}

/// What the router needs from the container it routes for.
pub(crate) trait PointerTargets {
    /// Child under a down event at `position` (container coordinates).
    fn hit(&self, position: Point) -> Option<ChildId>;

    /// Top-left of the child's bounds, or `None` if it no longer exists.
    fn origin_of(&self, id: ChildId) -> Option<Vec2>;

    /// Offer an event, already in child coordinates.
    fn deliver(&mut self, id: ChildId, event: &PointerEvent) -> bool;

    /// The container's own handler.
    fn fallback(&mut self, event: &PointerEvent) -> bool;
}

#[derive(Debug, Default)]
pub(crate) struct PointerRouter {
    state: RouteState,
}

impl PointerRouter {
    pub(crate) fn state(&self) -> RouteState {
        self.state
    }

    pub(crate) fn target(&self) -> Option<ChildId> {
        match self.state {
            RouteState::Idle => None,
            RouteState::Routing(id) => Some(id),
        }
    }

    pub(crate) fn dispatch(&mut self, targets: &mut dyn PointerTargets, event: PointerEvent) -> bool {
        if event.action == PointerAction::Down {
            self.cancel_active(targets, event);
            return self.begin(targets, event);
        }

        let RouteState::Routing(id) = self.state else {
            return targets.fallback(&event);
        };
        let Some(origin) = targets.origin_of(id) else {
            tracing::trace!(%id, "route target vanished");
            self.state = RouteState::Idle;
            return targets.fallback(&event);
        };

        let local = event.translated(origin);
        targets.deliver(id, &local);
        if event.ends_gesture() {
            tracing::trace!(%id, action = ?event.action, "route finished");
            self.state = RouteState::Idle;
        }
        true
    }

    /// Send a cancel to the active target (if any) at `at`'s location and go idle.
    pub(crate) fn cancel_active(&mut self, targets: &mut dyn PointerTargets, at: PointerEvent) {
        let RouteState::Routing(id) = std::mem::take(&mut self.state) else {
            return;
        };
        let Some(origin) = targets.origin_of(id) else {
            return;
        };
        tracing::trace!(%id, "cancelling active route");
        let cancel = at.with_action(PointerAction::Cancel).translated(origin);
        targets.deliver(id, &cancel);
    }

    /// Cancel the active route without a triggering event (mode switch, target removal).
    ///
    /// The cancel is delivered at the target's local origin.
    pub(crate) fn force_cancel(&mut self, targets: &mut dyn PointerTargets) {
        let RouteState::Routing(id) = std::mem::take(&mut self.state) else {
            return;
        };
        tracing::trace!(%id, "forced route cancel");
        targets.deliver(id, &PointerEvent::new(PointerAction::Cancel, Point::ZERO));
    }

    fn begin(&mut self, targets: &mut dyn PointerTargets, event: PointerEvent) -> bool {
        let hit = targets
            .hit(event.position)
            .and_then(|id| targets.origin_of(id).map(|origin| (id, origin)));
        let Some((id, origin)) = hit else {
            tracing::trace!(x = event.position.x, y = event.position.y, "down missed all slices");
            return targets.fallback(&event);
        };

        let local = event.translated(origin);
        if targets.deliver(id, &local) {
            tracing::trace!(%id, "route started");
            self.state = RouteState::Routing(id);
            true
        } else {
            targets.fallback(&local.at(Point::ZERO))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/router.rs"]
mod tests;
