use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, PlayerId, PotDistribution, Seat, Street};
use crate::engine::game_loop::{HandEngine, HandPhase};
use crate::engine::pot::Pot;

/// Снэпшот раздачи: всё, что видно снаружи в данный момент.
/// Сериализуется (serde), удобно отдавать фронту или класть в лог.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSnapshot {
    pub phase: HandPhase,
    pub street: Street,
    pub board: Vec<Card>,
    pub hole_cards: BTreeMap<PlayerId, [Card; 2]>,
    pub seats: Vec<Seat>,
    pub pots: Vec<Pot>,
    /// Ставки текущей улицы.
    pub bets: BTreeMap<PlayerId, Chips>,
    pub current_bet_level: Chips,
    pub current_actor: Option<PlayerId>,
    pub distributions: Vec<PotDistribution>,
}

impl HandSnapshot {
    /// Снять состояние с живой раздачи.
    pub fn from_engine(engine: &HandEngine) -> Self {
        Self {
            phase: engine.phase(),
            street: engine.street(),
            board: engine.board().to_vec(),
            hole_cards: engine.all_hole_cards().clone(),
            seats: engine.seats().to_vec(),
            pots: engine.pots().to_vec(),
            bets: engine.bets().clone(),
            current_bet_level: engine.current_bet_level(),
            current_actor: engine.current_actor(),
            distributions: engine.distributions().to_vec(),
        }
    }

    pub fn total_pot(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }
}
