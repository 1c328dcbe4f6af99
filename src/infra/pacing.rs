use std::thread;
use std::time::Duration;

use crate::engine::Pacer;

/// Настоящая пауза: поток просто спит заданное время.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Без пауз – для тестов и ботов.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _duration: Duration) {}
}
