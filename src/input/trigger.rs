use super::bindings::Trigger;

/// Rising-edge detector for one analog trigger axis.
#[derive(Debug, Clone)]
pub struct TriggerEdge {
    threshold: i16,
    above: bool,
}

impl TriggerEdge {
    pub fn new(threshold: i16) -> Self {
        Self {
            threshold,
            above: false,
        }
    }

    /// Feed one axis sample. Returns true only on the transition from at or
    /// below the threshold to above it.
    pub fn sample(&mut self, value: i16) -> bool {
        let above = value > self.threshold;
        let fired = above && !self.above;
        self.above = above;
        fired
    }
}

/// Both trigger axes, driven by key presses.
///
/// A key has no analog travel, so a press is turned into a full-scale
/// sample for exactly one tick and released on the next.
#[derive(Debug, Clone)]
pub struct TriggerAxes {
    l2: TriggerEdge,
    r2: TriggerEdge,
    l2_pulse: bool,
    r2_pulse: bool,
}

impl TriggerAxes {
    pub fn new(threshold: i16) -> Self {
        Self {
            l2: TriggerEdge::new(threshold),
            r2: TriggerEdge::new(threshold),
            l2_pulse: false,
            r2_pulse: false,
        }
    }

    pub fn press(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::L2 => self.l2_pulse = true,
            Trigger::R2 => self.r2_pulse = true,
        }
    }

    /// Sample both axes once per tick and return the triggers that fired.
    pub fn sample(&mut self) -> Vec<Trigger> {
        let mut fired = Vec::new();
        if self.l2.sample(axis_value(std::mem::take(&mut self.l2_pulse))) {
            fired.push(Trigger::L2);
        }
        if self.r2.sample(axis_value(std::mem::take(&mut self.r2_pulse))) {
            fired.push(Trigger::R2);
        }
        fired
    }
}

fn axis_value(pressed: bool) -> i16 {
    if pressed { i16::MAX } else { 0 }
}
