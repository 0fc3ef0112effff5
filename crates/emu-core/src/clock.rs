//! Master clock configuration and the tick driver.

use crate::{Bus, Cpu, Tick, Ticks};

/// Master clock configuration for a system.
///
/// Each system has a master crystal that drives all timing. Components may
/// run at divided rates, but everything derives from this frequency.
#[derive(Debug, Clone, Copy)]
pub struct MasterClock {
    /// Crystal frequency in Hz (e.g., `3_500_000` for a 48K Spectrum CPU).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Ticks per frame at the given frame rate (integer division).
    #[must_use]
    pub const fn ticks_per_frame(&self, frames_per_second: u64) -> Ticks {
        Ticks::new(self.frequency_hz / frames_per_second)
    }
}

/// Why [`Clock::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The cycle budget was used up.
    Budget,
    /// The CPU returned the halt sentinel.
    Break,
}

/// Drives a CPU one tick at a time and accounts elapsed cycles.
///
/// The CPU is ticked exactly when the wait reported by its previous tick has
/// elapsed. A tick that overshoots the budget carries the excess into the
/// next run, so frame-sized runs stay aligned with real time.
#[derive(Debug, Clone)]
pub struct Clock {
    master: MasterClock,
    elapsed: Ticks,
    /// Cycles still owed by the last tick of the previous run.
    pending: u64,
}

impl Clock {
    #[must_use]
    pub const fn new(master: MasterClock) -> Self {
        Self {
            master,
            elapsed: Ticks::ZERO,
            pending: 0,
        }
    }

    #[must_use]
    pub const fn master(&self) -> MasterClock {
        self.master
    }

    /// Total cycles elapsed since creation.
    #[must_use]
    pub const fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    /// Run the CPU for `budget` cycles, or until it breaks.
    pub fn run<C: Cpu, B: Bus>(
        &mut self,
        cpu: &mut C,
        bus: &mut B,
        budget: Ticks,
    ) -> Result<RunOutcome, C::Fault> {
        let mut remaining = budget.get();
        if self.pending >= remaining {
            self.pending -= remaining;
            self.elapsed += Ticks::new(remaining);
            return Ok(RunOutcome::Budget);
        }
        remaining -= self.pending;
        self.elapsed += Ticks::new(self.pending);
        self.pending = 0;

        while remaining > 0 {
            match cpu.tick(bus)? {
                Tick::Cycles(n) => {
                    let n = u64::from(n);
                    if n > remaining {
                        self.pending = n - remaining;
                        self.elapsed += Ticks::new(remaining);
                        return Ok(RunOutcome::Budget);
                    }
                    remaining -= n;
                    self.elapsed += Ticks::new(n);
                }
                Tick::Break => return Ok(RunOutcome::Break),
            }
        }
        Ok(RunOutcome::Budget)
    }

    /// Run one frame's worth of cycles at the given frame rate.
    pub fn run_frame<C: Cpu, B: Bus>(
        &mut self,
        cpu: &mut C,
        bus: &mut B,
        frames_per_second: u64,
    ) -> Result<RunOutcome, C::Fault> {
        let budget = self.master.ticks_per_frame(frames_per_second);
        self.run(cpu, bus, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleBus;

    /// Fake CPU that asks for a fixed wait per tick and breaks on request.
    struct Fixed {
        wait: u32,
        ticks: u32,
        break_at: Option<u32>,
    }

    impl Cpu for Fixed {
        type Registers = ();
        type Fault = ();

        fn tick<B: Bus>(&mut self, _bus: &mut B) -> Result<Tick, ()> {
            self.ticks += 1;
            if self.break_at == Some(self.ticks) {
                return Ok(Tick::Break);
            }
            Ok(Tick::Cycles(self.wait))
        }

        fn pc(&self) -> u32 {
            0
        }

        fn registers(&self) {}

        fn is_halted(&self) -> bool {
            false
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn overshoot_carries_into_next_run() {
        let mut clock = Clock::new(MasterClock::new(1_000));
        let mut cpu = Fixed {
            wait: 4,
            ticks: 0,
            break_at: None,
        };
        let mut bus = SimpleBus::new();

        assert_eq!(clock.run(&mut cpu, &mut bus, Ticks::new(10)), Ok(RunOutcome::Budget));
        assert_eq!(cpu.ticks, 3);
        assert_eq!(clock.elapsed(), Ticks::new(10));

        // 2 cycles are still owed from the third tick.
        assert_eq!(clock.run(&mut cpu, &mut bus, Ticks::new(2)), Ok(RunOutcome::Budget));
        assert_eq!(cpu.ticks, 3);
        assert_eq!(clock.elapsed(), Ticks::new(12));
    }

    #[test]
    fn break_stops_the_run() {
        let mut clock = Clock::new(MasterClock::new(1_000));
        let mut cpu = Fixed {
            wait: 1,
            ticks: 0,
            break_at: Some(5),
        };
        let mut bus = SimpleBus::new();

        assert_eq!(clock.run(&mut cpu, &mut bus, Ticks::new(100)), Ok(RunOutcome::Break));
        assert_eq!(clock.elapsed(), Ticks::new(4));
    }

    #[test]
    fn frame_budget_from_master_clock() {
        let clock = Clock::new(MasterClock::new(3_500_000));
        assert_eq!(clock.master().ticks_per_frame(50), Ticks::new(70_000));
    }

    #[test]
    fn run_frame_uses_one_frame_of_cycles() {
        let mut clock = Clock::new(MasterClock::new(1_000));
        let mut cpu = Fixed {
            wait: 1,
            ticks: 0,
            break_at: None,
        };
        let mut bus = SimpleBus::new();

        assert_eq!(clock.run_frame(&mut cpu, &mut bus, 50), Ok(RunOutcome::Budget));
        assert_eq!(cpu.ticks, 20);
        assert_eq!(clock.elapsed(), Ticks::new(20));
    }
}
