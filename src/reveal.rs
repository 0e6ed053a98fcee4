//! One-shot viewport reveal.
//!
//! Each content section fades in the first time it scrolls past the
//! configured visibility threshold. The latch is strictly one-way: once a
//! section has revealed it stays revealed, and its observer is torn down.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Monotonic visibility flag fed by intersection callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) {
        if intersecting {
            self.visible = true;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Observe `target` and flip to `true` the first time at least `threshold`
/// of it is on screen. The observer stops after the first hit; if the node
/// ref never attaches the signal simply stays `false`.
pub fn use_in_view(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let (in_view, set_in_view) = signal(false);
    let latch = StoredValue::new(RevealLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            latch.update_value(|l| {
                for entry in &entries {
                    l.observe(entry.is_intersecting());
                }
            });
            if latch.with_value(|l| l.visible()) {
                set_in_view(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // reveal is one-way, so the subscription has nothing left to report
    Effect::new(move |_| {
        if in_view.get() {
            stop();
        }
    });

    in_view.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_on_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.visible());
        latch.observe(false);
        assert!(!latch.visible());
        latch.observe(true);
        assert!(latch.visible());
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        for _ in 0..5 {
            latch.observe(false);
        }
        assert!(latch.visible());
    }
}
