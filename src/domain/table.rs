use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::player::Seat;
use crate::domain::PlayerId;

/// Индекс места за столом (0 = дилер).
pub type SeatIndex = usize;

/// Ошибки конфигурации игры.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("small blind должен быть больше нуля")]
    ZeroSmallBlind,

    #[error("big blind должен быть больше нуля")]
    ZeroBigBlind,

    #[error("big blind ({big}) меньше small blind ({small})")]
    BigBelowSmall { small: Chips, big: Chips },

    #[error("не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ошибки рассадки (реестр мест собирается один раз на раздачу).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("для раздачи нужно минимум 2 игрока, передано {0}")]
    NotEnoughPlayers(usize),

    #[error("игрок {0} посажен дважды")]
    DuplicatePlayer(PlayerId),

    #[error("у игрока {0} пустой стек")]
    EmptyStack(PlayerId),
}

/// Конфиг игры: блайнды, анте, лимит времени, пейсинг, режим банков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Анте принимается в конфиге, но движком не списывается.
    #[serde(default)]
    pub antes: Chips,
    /// Лимит на ход в секундах. Принуждение к лимиту – забота внешнего драйвера.
    #[serde(default)]
    pub time_limit_secs: u32,
    /// Пауза, которую движок просит у `Pacer` после раздачи, открытия карт и выплаты.
    #[serde(default)]
    pub pace_delay_ms: u64,
    /// Делить банк на сайд-поты на шоудауне. По умолчанию один общий банк.
    #[serde(default)]
    pub split_side_pots: bool,
}

impl GameConfig {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            antes: Chips::ZERO,
            time_limit_secs: 0,
            pace_delay_ms: 0,
            split_side_pots: false,
        }
    }

    /// Собрать конфиг из JSON и сразу провалидировать.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_side_pots(mut self, enabled: bool) -> Self {
        self.split_side_pots = enabled;
        self
    }

    pub fn with_pace_delay_ms(mut self, delay_ms: u64) -> Self {
        self.pace_delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_blind.is_zero() {
            return Err(ConfigError::ZeroSmallBlind);
        }
        if self.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.big_blind < self.small_blind {
            return Err(ConfigError::BigBelowSmall {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        Ok(())
    }
}

/// Реестр мест: упорядоченный список, seats[0] – дилерская кнопка.
///
/// Состав мест фиксируется при создании раздачи и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    seats: Vec<Seat>,
}

impl Table {
    pub const DEALER: SeatIndex = 0;

    pub fn new(seats: Vec<Seat>) -> Result<Self, TableError> {
        if seats.len() < 2 {
            return Err(TableError::NotEnoughPlayers(seats.len()));
        }

        let mut seen = BTreeSet::new();
        for seat in &seats {
            if !seen.insert(seat.player_id) {
                return Err(TableError::DuplicatePlayer(seat.player_id));
            }
            if seat.stack.is_zero() {
                return Err(TableError::EmptyStack(seat.player_id));
            }
        }

        Ok(Self { seats })
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Пара к `len`. Созданный через `new` стол пустым не бывает.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn is_heads_up(&self) -> bool {
        self.seats.len() == 2
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat_at(&self, index: SeatIndex) -> Option<&Seat> {
        self.seats.get(index)
    }

    pub(crate) fn seat_at_mut(&mut self, index: SeatIndex) -> Option<&mut Seat> {
        self.seats.get_mut(index)
    }

    pub fn index_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.seats.iter().position(|s| s.player_id == player_id)
    }

    /// Поиск места по игроку. Незнакомый игрок – просто `None`.
    pub fn seat(&self, player_id: PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.player_id == player_id)
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats.iter().map(|s| s.player_id)
    }

    /// Сколько игроков ещё не сфолдило.
    pub fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_in_hand()).count()
    }

    pub fn any_all_in(&self) -> bool {
        self.seats.iter().any(|s| s.is_all_in())
    }
}
