//! Cancellable single-shot timers advanced by the frame loop.
//!
//! Stands in for `setTimeout` so staggered starts can be cancelled
//! synchronously: after `cancel_all` nothing scheduled earlier will fire.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Pending<T> {
    id: TimerId,
    due_ms: f64,
    payload: T,
}

#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `payload` once `delay_ms` of ticks have elapsed. A zero delay
    /// fires on the next `advance`, even `advance(0.0)`.
    pub fn schedule(&mut self, delay_ms: f64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            payload,
        });
        id
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock and drain everything now due, earliest first
    /// (scheduling order on ties).
    pub fn advance(&mut self, dt_ms: f64) -> Vec<T> {
        self.now_ms += dt_ms.max(0.0);
        let now = self.now_ms;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)));
        due.into_iter().map(|p| p.payload).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(30.0, "c");
        q.schedule(10.0, "a");
        q.schedule(10.0, "b");
        assert!(q.advance(5.0).is_empty());
        assert_eq!(q.advance(30.0), vec!["a", "b", "c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10.0, 1);
        q.schedule(20.0, 2);
        assert!(q.cancel(a));
        assert!(!q.cancel(a));
        assert_eq!(q.advance(100.0), vec![2]);

        q.schedule(0.0, 3);
        q.cancel_all();
        assert!(q.advance(100.0).is_empty());
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, ());
        assert_eq!(q.advance(0.0).len(), 1);
    }
}
