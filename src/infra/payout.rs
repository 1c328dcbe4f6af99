use std::sync::{Arc, Mutex};

use crate::domain::PotDistribution;
use crate::engine::PayoutSink;

/// Получатель по умолчанию: только пишет выплату в лог.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingPayoutSink;

impl PayoutSink for LoggingPayoutSink {
    fn pay(&mut self, distribution: PotDistribution) {
        log::info!(
            "выплата банка {}: {} фишек игрокам {:?}",
            distribution.pot_id,
            distribution.amount,
            distribution.winners
        );
    }
}

/// Журнал выплат с общим доступом: одна копия уходит в движок,
/// другая остаётся у вызывающего кода, чтобы потом разложить фишки по стекам.
#[derive(Clone, Debug, Default)]
pub struct PayoutLog {
    inner: Arc<Mutex<Vec<PotDistribution>>>,
}

impl PayoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Снять копию всех полученных выплат.
    pub fn entries(&self) -> Vec<PotDistribution> {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl PayoutSink for PayoutLog {
    fn pay(&mut self, distribution: PotDistribution) {
        match self.inner.lock() {
            Ok(mut guard) => guard.push(distribution),
            Err(poisoned) => poisoned.into_inner().push(distribution),
        }
    }
}
