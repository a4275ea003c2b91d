//! Click ripples on product, school and regional buttons.

use crate::scheduler::Scheduler;
use crate::task::Task;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(u64);

/// Button a ripple is drawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RippleHost {
    Product(usize),
    School(usize),
    Regional(usize),
}

/// A click inside a host, in the host's own coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Click {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub host: RippleHost,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// A circle covering the host, centred on the click.
    fn centred(id: RippleId, host: RippleHost, click: Click) -> Self {
        let size = click.width.max(click.height);
        Self { id, host, size, left: click.x - size / 2.0, top: click.y - size / 2.0 }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}

#[derive(Debug, Default)]
pub struct Ripples {
    live: Vec<Ripple>,
    next_id: u64,
}

impl Ripples {
    /// Spawns a ripple and schedules its removal after `ttl`.
    pub fn spawn(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        ttl: Duration,
        host: RippleHost,
        click: Click,
    ) -> RippleId {
        let id = RippleId(self.next_id);
        self.next_id += 1;

        self.live.push(Ripple::centred(id, host, click));
        scheduler.schedule(now, ttl, Task::RemoveRipple(id));
        id
    }

    /// Timer callback.
    pub fn remove(&mut self, id: RippleId) {
        self.live.retain(|ripple| ripple.id != id);
    }

    /// Ripples currently drawn inside `host`.
    pub fn for_host(&self, host: RippleHost) -> impl Iterator<Item = &Ripple> {
        self.live.iter().filter(move |ripple| ripple.host == host)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_click() {
        let mut scheduler = Scheduler::new();
        let mut ripples = Ripples::default();
        let host = RippleHost::School(1);
        let click = Click { x: 40.0, y: 10.0, width: 200.0, height: 48.0 };

        ripples.spawn(&mut scheduler, Duration::ZERO, Duration::from_millis(600), host, click);

        let ripple = ripples.for_host(host).next().copied().expect("spawned");
        assert!((ripple.size - 200.0).abs() < f64::EPSILON);
        assert!((ripple.left + 60.0).abs() < f64::EPSILON);
        assert!((ripple.top + 90.0).abs() < f64::EPSILON);
        assert_eq!(ripple.style(), "width: 200px; height: 200px; left: -60px; top: -90px;");
        assert_eq!(ripples.for_host(RippleHost::School(0)).count(), 0);
    }

    #[test]
    fn removal_is_scheduled() {
        let mut scheduler = Scheduler::new();
        let mut ripples = Ripples::default();
        let id = ripples.spawn(
            &mut scheduler,
            Duration::from_millis(100),
            Duration::from_millis(600),
            RippleHost::Product(0),
            Click::default(),
        );

        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(700)));
        let due = scheduler.pop_due(Duration::from_millis(700)).expect("due");
        assert_eq!(due.task, Task::RemoveRipple(id));

        ripples.remove(id);
        assert!(ripples.is_empty());
    }
}
