//! Sliding-window kinematic aggregation: mean ground speed and mean
//! vertical speed over the most recent GPS fixes.

use std::collections::VecDeque;

use itertools::Itertools;

use crate::geo::distance;
use crate::track::GpsSample;
use crate::units::Speed;

/// Mean ground speed over consecutive fixes, as the arithmetic mean of
/// per-pair speeds. Pairs with a non-positive time delta contribute 0:
/// duplicate or out-of-order fixes must never produce a negative or
/// infinite speed. Fewer than 2 fixes yields `Speed(0)`.
pub fn mean_speed(fixes: &[GpsSample]) -> Speed {
    if fixes.len() < 2 {
        return Speed::from_mps(0.0);
    }

    let speeds = fixes
        .iter()
        .tuple_windows()
        .map(|(prev, curr)| {
            let dt_s = (curr.epoch - prev.epoch).to_seconds();
            if dt_s > 0.0 {
                distance(prev.point, curr.point).meters() / dt_s
            } else {
                0.0
            }
        })
        .collect::<Vec<_>>();

    mean(&speeds)
}

/// Mean vertical speed over consecutive fixes. Pairs where either fix
/// is missing an altitude are skipped entirely (they carry no vertical
/// information); pairs with a non-positive time delta contribute 0.
/// An empty contribution list yields `Speed(0)`.
pub fn mean_vertical_speed(fixes: &[GpsSample]) -> Speed {
    if fixes.len() < 2 {
        return Speed::from_mps(0.0);
    }

    let rates = fixes
        .iter()
        .tuple_windows()
        .filter_map(|(prev, curr)| {
            let (prev_alt, curr_alt) = (prev.alt_m?, curr.alt_m?);
            let dt_s = (curr.epoch - prev.epoch).to_seconds();
            if dt_s > 0.0 {
                Some((curr_alt - prev_alt) / dt_s)
            } else {
                Some(0.0)
            }
        })
        .collect::<Vec<_>>();

    mean(&rates)
}

fn mean(values: &[f64]) -> Speed {
    if values.is_empty() {
        return Speed::from_mps(0.0);
    }
    Speed::from_mps(values.iter().sum::<f64>() / values.len() as f64)
}

/// Bounded FIFO of the most recent [GpsSample]s. On overflow the
/// oldest fix is evicted. The aggregation functions are pure over the
/// current contents; the window carries no other state.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    capacity: usize,
    fixes: VecDeque<GpsSample>,
}

impl SampleWindow {
    /// Builds a new [SampleWindow] bounded to `capacity` fixes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            fixes: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Pushes the newest fix, evicting the oldest on overflow.
    pub fn push(&mut self, fix: GpsSample) {
        if self.fixes.len() == self.capacity {
            self.fixes.pop_front();
        }
        self.fixes.push_back(fix);
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Mean ground speed over the current window contents.
    pub fn mean_speed(&self) -> Speed {
        mean_speed(&self.contents())
    }

    /// Mean vertical speed over the current window contents.
    pub fn mean_vertical_speed(&self) -> Speed {
        mean_vertical_speed(&self.contents())
    }

    /// Window contents, oldest first.
    pub fn contents(&self) -> Vec<GpsSample> {
        self.fixes.iter().copied().collect()
    }
}
