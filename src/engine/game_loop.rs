use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, Chips, GameConfig, HandSummary, PlayerId, PlayerStatus, PotDistribution, Seat, SeatIndex,
    Street, Table,
};
use crate::engine::actions::Action;
use crate::engine::betting::{apply_bet, BetLedger};
use crate::engine::collaborators::Collaborators;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    actionable_count, hand_opening_pointer, next_eligible_seat, street_opening_pointer,
};
use crate::engine::pot::{Pot, PotAccountant};
use crate::engine::showdown::{distribute, distribute_uncontested, live_hands};
use crate::engine::validation::{validate_bet, BetRejection};
use crate::state::HandSnapshot;

/// Статус раздачи для внешнего кода после `start`/`act`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandStatus {
    /// Раздача идёт, ход у `current_actor()`.
    Ongoing,
    /// Ставка не принята: ничего не изменилось, ход остался у того же игрока.
    Rejected(BetRejection),
    /// Раздача закончилась (шоудаун или все сфолдили).
    Finished(HandSummary),
}

/// Фаза жизни раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandPhase {
    /// Создана, `start` ещё не вызывали.
    Created,
    /// Идёт торговля.
    Betting,
    /// Раздача завершена и больше ничего не принимает.
    Finished,
}

/// Одна раздача: от блайндов до выплаты банков.
///
/// Всё состояние принадлежит раздаче. Вызовы `act` должны приходить по одному:
/// внутренней синхронизации нет.
#[derive(Debug)]
pub struct HandEngine {
    config: GameConfig,
    table: Table,
    collaborators: Collaborators,
    phase: HandPhase,
    /// Раздача дошла до вскрытия.
    showdown: bool,
    /// Вся последовательность карт от источника: сначала карманные, потом борд.
    sequence: Vec<Card>,
    board: Vec<Card>,
    hole_cards: BTreeMap<PlayerId, [Card; 2]>,
    ledger: BetLedger,
    pots: PotAccountant,
    /// Указатель курсора хода (место).
    cursor: SeatIndex,
    /// Чей сейчас ход (место).
    current_actor: Option<SeatIndex>,
    /// Кто уже сделал ход на этой улице (блайнды не считаются).
    acted: BTreeSet<PlayerId>,
    history: HandHistory,
    distributions: Vec<PotDistribution>,
}

impl HandEngine {
    /// Создать раздачу. `seats[0]` – дилер.
    pub fn new(
        seats: Vec<Seat>,
        config: GameConfig,
        collaborators: Collaborators,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let table = Table::new(seats)?;
        let players: Vec<PlayerId> = table.player_ids().collect();

        Ok(Self {
            ledger: BetLedger::new(players.iter().copied(), config.big_blind),
            pots: PotAccountant::new(players),
            cursor: hand_opening_pointer(&table),
            config,
            table,
            collaborators,
            phase: HandPhase::Created,
            showdown: false,
            sequence: Vec::new(),
            board: Vec::new(),
            hole_cards: BTreeMap::new(),
            current_actor: None,
            acted: BTreeSet::new(),
            history: HandHistory::new(),
            distributions: Vec::new(),
        })
    }

    /// То же, что `new`, но со всеми соучастниками по умолчанию.
    pub fn with_default_collaborators(seats: Vec<Seat>, config: GameConfig) -> Result<Self, EngineError> {
        Self::new(seats, config, Collaborators::default())
    }

    /// Старт раздачи:
    /// - берёт последовательность карт у источника и раздаёт по 2 карты;
    /// - постит блайнды;
    /// - назначает первого ходящего.
    ///
    /// Если после блайндов ходить уже некому, борд сразу докатывается до шоудауна.
    pub fn start(&mut self) -> Result<HandStatus, EngineError> {
        if self.phase != HandPhase::Created {
            return Err(EngineError::HandAlreadyStarted);
        }

        let sequence = self.collaborators.card_source.draw_sequence();
        check_card_sequence(&sequence, self.table.len())?;
        self.sequence = sequence;
        self.phase = HandPhase::Betting;

        let dealer = self.dealer_id()?;
        self.history.push(HandEventKind::HandStarted {
            dealer,
            players: self.table.len(),
        });
        log::info!("раздача: {} игроков, дилер {}", self.table.len(), dealer);

        self.deal_hole_cards();
        self.post_blinds()?;

        if self.all_in_run_out_due() {
            return self.run_out_and_showdown();
        }
        self.move_turn()?;
        Ok(HandStatus::Ongoing)
    }

    /// Применить действие игрока.
    ///
    /// Ходить может только тот, на кого указывает курсор. Недопустимая ставка
    /// ничего не меняет и возвращается как `HandStatus::Rejected`.
    /// После каждого принятого действия проверяются: остался ли один игрок,
    /// не пора ли докатить борд из-за олл-инов, и закрылась ли улица.
    pub fn act(&mut self, player_id: PlayerId, action: Action) -> Result<HandStatus, EngineError> {
        match self.phase {
            HandPhase::Created => return Err(EngineError::HandNotStarted),
            HandPhase::Finished => return Err(EngineError::HandFinished),
            HandPhase::Betting => {}
        }

        let actor_idx = self
            .current_actor
            .ok_or(EngineError::Internal("нет текущего игрока во время торговли"))?;
        let expected = self
            .table
            .seat_at(actor_idx)
            .map(|s| s.player_id)
            .ok_or(EngineError::Internal("курсор указывает за пределы стола"))?;

        if player_id != expected {
            log::warn!("игрок {} пытается ходить вне очереди, ход у {}", player_id, expected);
            return Err(EngineError::NotPlayersTurn {
                player: player_id,
                expected,
            });
        }

        match action {
            Action::Fold => {
                let seat = self
                    .table
                    .seat_at_mut(actor_idx)
                    .ok_or(EngineError::Internal("курсор указывает за пределы стола"))?;
                seat.status = PlayerStatus::Folded;
                self.pots.mark_folded(player_id);
            }
            Action::Bet(amount) => {
                if let Err(reason) = validate_bet(&self.table, &self.ledger, player_id, amount) {
                    log::warn!("ставка {} игрока {} отклонена: {}", amount, player_id, reason);
                    self.history.push(HandEventKind::BetRejected {
                        player_id,
                        amount,
                        reason,
                    });
                    return Ok(HandStatus::Rejected(reason));
                }

                let seat = self
                    .table
                    .seat_at_mut(actor_idx)
                    .ok_or(EngineError::Internal("курсор указывает за пределы стола"))?;
                apply_bet(seat, &mut self.ledger, &mut self.pots, amount);
                self.acted.insert(player_id);
            }
        }

        let new_stack = self.table.seat_at(actor_idx).map(|s| s.stack).unwrap_or(Chips::ZERO);
        self.history.push(HandEventKind::PlayerActed {
            player_id,
            action,
            new_stack,
            pot_after: self.pots.total(),
        });
        log::debug!(
            "игрок {}: {:?}, стек {}, банк {}",
            player_id,
            action,
            new_stack,
            self.pots.total()
        );

        self.progress()
    }

    // ---------------------------------------------------------------------
    // Запросы (ничего не меняют)
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == HandPhase::Finished
    }

    /// Улица определяется числом открытых карт плюс флаг шоудауна.
    pub fn street(&self) -> Street {
        if self.showdown {
            Street::Showdown
        } else {
            Street::from_board_len(self.board.len())
        }
    }

    pub fn current_actor(&self) -> Option<PlayerId> {
        self.current_actor
            .and_then(|idx| self.table.seat_at(idx))
            .map(|s| s.player_id)
    }

    pub fn seats(&self) -> &[Seat] {
        self.table.seats()
    }

    /// Место игрока. Незнакомый игрок – `None`, это не ошибка.
    pub fn seat(&self, player_id: PlayerId) -> Option<&Seat> {
        self.table.seat(player_id)
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn hole_cards(&self, player_id: PlayerId) -> Option<[Card; 2]> {
        self.hole_cards.get(&player_id).copied()
    }

    pub fn all_hole_cards(&self) -> &BTreeMap<PlayerId, [Card; 2]> {
        &self.hole_cards
    }

    /// Ставки текущей улицы.
    pub fn bets(&self) -> &BTreeMap<PlayerId, Chips> {
        self.ledger.bets()
    }

    pub fn bet_of(&self, player_id: PlayerId) -> Chips {
        self.ledger.contribution(player_id)
    }

    /// Текущий уровень ставки (он же минимальный рейз).
    pub fn current_bet_level(&self) -> Chips {
        self.ledger.level()
    }

    pub fn pots(&self) -> &[Pot] {
        self.pots.pots()
    }

    pub fn total_pot(&self) -> Chips {
        self.pots.total()
    }

    /// Сколько игрок внёс за всю раздачу.
    pub fn total_contribution(&self, player_id: PlayerId) -> Chips {
        self.pots.contributed(player_id)
    }

    /// Чистая проверка ставки с причиной отказа.
    pub fn validate_bet(&self, player_id: PlayerId, amount: Chips) -> Result<(), BetRejection> {
        validate_bet(&self.table, &self.ledger, player_id, amount)
    }

    /// Чистая проверка ставки: можно ли игроку добавить `amount` прямо сейчас.
    pub fn is_valid_bet(&self, player_id: PlayerId, amount: Chips) -> bool {
        self.validate_bet(player_id, amount).is_ok()
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Выплаты, уже отправленные получателю.
    pub fn distributions(&self) -> &[PotDistribution] {
        &self.distributions
    }

    /// Полный снимок состояния.
    pub fn snapshot(&self) -> HandSnapshot {
        HandSnapshot::from_engine(self)
    }

    // ---------------------------------------------------------------------
    // Раздача карт и блайнды
    // ---------------------------------------------------------------------

    fn dealer_id(&self) -> Result<PlayerId, EngineError> {
        self.table
            .seat_at(Table::DEALER)
            .map(|s| s.player_id)
            .ok_or(EngineError::Internal("у стола нет дилера"))
    }

    /// Место i получает карты [2i, 2i+1] последовательности.
    fn deal_hole_cards(&mut self) {
        for (idx, seat) in self.table.seats().iter().enumerate() {
            let cards = [self.sequence[2 * idx], self.sequence[2 * idx + 1]];
            self.hole_cards.insert(seat.player_id, cards);
            self.history.push(HandEventKind::HoleCardsDealt {
                player_id: seat.player_id,
                cards,
            });
        }
        self.pace();
    }

    /// Блайнды ставят два места, на которые последовательно попадает курсор.
    fn post_blinds(&mut self) -> Result<(), EngineError> {
        let small_blind = self.config.small_blind;
        let big_blind = self.config.big_blind;

        self.move_turn()?;
        self.post_blind(small_blind)?;
        self.move_turn()?;
        self.post_blind(big_blind)?;

        self.current_actor = None;
        Ok(())
    }

    fn post_blind(&mut self, amount: Chips) -> Result<(), EngineError> {
        let seat = self
            .table
            .seat_at_mut(self.cursor)
            .ok_or(EngineError::Internal("курсор указывает за пределы стола"))?;
        let paid = apply_bet(seat, &mut self.ledger, &mut self.pots, amount);
        let player_id = seat.player_id;

        self.history.push(HandEventKind::BlindPosted { player_id, amount: paid });
        log::debug!("игрок {} ставит блайнд {}", player_id, paid);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Переходы улиц
    // ---------------------------------------------------------------------

    /// Передать ход следующему, кто может ходить.
    fn move_turn(&mut self) -> Result<(), EngineError> {
        let next = next_eligible_seat(self.table.seats(), self.cursor)
            .ok_or(EngineError::TurnCursorExhausted)?;
        self.cursor = next;
        self.current_actor = Some(next);
        Ok(())
    }

    fn progress(&mut self) -> Result<HandStatus, EngineError> {
        if self.table.in_hand_count() == 1 {
            return self.finish_uncontested();
        }
        if self.all_in_run_out_due() {
            return self.run_out_and_showdown();
        }
        if self.street_closed() {
            return self.close_street();
        }
        self.move_turn()?;
        Ok(HandStatus::Ongoing)
    }

    /// Торговать больше некому: ходить может максимум один игрок,
    /// и он уже покрыл каждый олл-ин на этой улице.
    fn all_in_run_out_due(&self) -> bool {
        let seats = self.table.seats();
        if !self.table.any_all_in() {
            return false;
        }

        if actionable_count(seats) > 1 {
            return false;
        }
        let last_actionable = seats.iter().find(|s| s.can_act());

        let max_all_in = seats
            .iter()
            .filter(|s| s.is_all_in())
            .map(|s| self.ledger.contribution(s.player_id))
            .max()
            .unwrap_or(Chips::ZERO);

        last_actionable.map_or(true, |s| self.ledger.contribution(s.player_id) >= max_all_in)
    }

    /// Улица закрыта: каждый либо сфолдил, либо в олл-ине, либо уже ходил,
    /// ставки всех, кто может ходить, равны, и ни один олл-ин их не превышает.
    fn street_closed(&self) -> bool {
        let seats = self.table.seats();

        let everyone_settled = seats
            .iter()
            .all(|s| !s.can_act() || self.acted.contains(&s.player_id));
        if !everyone_settled {
            return false;
        }

        let mut live_bets = seats
            .iter()
            .filter(|s| s.can_act())
            .map(|s| self.ledger.contribution(s.player_id));
        let Some(level) = live_bets.next() else {
            return true;
        };
        if live_bets.any(|b| b != level) {
            return false;
        }

        seats
            .iter()
            .filter(|s| s.is_all_in())
            .all(|s| self.ledger.contribution(s.player_id) <= level)
    }

    fn close_street(&mut self) -> Result<HandStatus, EngineError> {
        if self.street() == Street::River {
            return self.showdown();
        }

        self.reveal_next_street();
        self.reset_street();
        self.cursor = street_opening_pointer();
        self.move_turn()?;
        Ok(HandStatus::Ongoing)
    }

    /// Открыть карты следующей улицы из зарезервированных позиций последовательности.
    fn reveal_next_street(&mut self) {
        let Some(street) = self.street().next() else {
            return;
        };
        let count = street.cards_to_reveal();
        let start = 2 * self.table.len() + self.board.len();
        self.board.extend_from_slice(&self.sequence[start..start + count]);

        self.history.push(HandEventKind::BoardDealt {
            street,
            cards: self.board.clone(),
        });
        log::info!("{:?}: {}", street, format_cards(&self.board));
        self.pace();
    }

    fn reset_street(&mut self) {
        self.ledger.reset_street();
        self.acted.clear();
    }

    /// Все в олл-ине: открываем оставшиеся улицы подряд без торговли.
    fn run_out_and_showdown(&mut self) -> Result<HandStatus, EngineError> {
        log::info!("торговля окончена олл-инами, открываем борд до конца");
        self.current_actor = None;
        while self.board.len() < 5 {
            self.reveal_next_street();
            self.reset_street();
        }
        self.showdown()
    }

    // ---------------------------------------------------------------------
    // Завершение раздачи
    // ---------------------------------------------------------------------

    /// Шоудаун: руки живых игроков уходят оценщику, банки – получателю выплат.
    /// Ошибка оценщика фатальна: раздача остаётся завершённой без выплат.
    fn showdown(&mut self) -> Result<HandStatus, EngineError> {
        self.showdown = true;
        self.current_actor = None;
        self.phase = HandPhase::Finished;

        let hands = live_hands(&self.table, &self.hole_cards);
        for hand in &hands {
            self.history.push(HandEventKind::ShowdownReveal {
                player_id: hand.player_id,
                hole_cards: hand.hole_cards,
            });
        }
        log::info!("шоудаун: {} игроков, борд {}", hands.len(), format_cards(&self.board));

        let groups = self.collaborators.evaluator.evaluate(&hands, &self.board)?;
        let pots = self.pots.settle(self.config.split_side_pots).to_vec();
        let distributions = distribute(&pots, &groups);

        Ok(self.pay_out(distributions, false))
    }

    /// Все, кроме одного, сфолдили.
    fn finish_uncontested(&mut self) -> Result<HandStatus, EngineError> {
        let winner = self
            .table
            .seats()
            .iter()
            .find(|s| s.is_in_hand())
            .map(|s| s.player_id)
            .ok_or(EngineError::Internal("не осталось ни одного игрока в раздаче"))?;

        self.current_actor = None;
        self.phase = HandPhase::Finished;
        log::info!("игрок {} забирает банк без вскрытия", winner);

        let pots = self.pots.settle(self.config.split_side_pots).to_vec();
        let distributions = distribute_uncontested(&pots, winner);

        Ok(self.pay_out(distributions, true))
    }

    fn pay_out(&mut self, distributions: Vec<PotDistribution>, uncontested: bool) -> HandStatus {
        for distribution in &distributions {
            log::info!(
                "банк {} ({} фишек) -> {:?} {}",
                distribution.pot_id,
                distribution.amount,
                distribution.winners,
                format_cards(&distribution.winning_cards)
            );
            self.history.push(HandEventKind::PotDistributed(distribution.clone()));
            self.collaborators.payout_sink.pay(distribution.clone());
            self.pace();
        }
        self.distributions = distributions;

        let summary = HandSummary {
            street_reached: self.street(),
            board: self.board.clone(),
            total_pot: self.pots.total(),
            uncontested,
            distributions: self.distributions.clone(),
        };
        self.history.push(HandEventKind::HandFinished {
            street_reached: summary.street_reached,
            total_pot: summary.total_pot,
        });

        HandStatus::Finished(summary)
    }

    fn pace(&mut self) {
        let delay = Duration::from_millis(self.config.pace_delay_ms);
        self.collaborators.pacer.pause(delay);
    }
}

/// Последовательность карт должна покрыть карманные карты и 5 карт борда без повторов.
fn check_card_sequence(sequence: &[Card], players: usize) -> Result<(), EngineError> {
    let needed = 2 * players + 5;
    if sequence.len() < needed {
        return Err(EngineError::CardSequenceTooShort {
            needed,
            got: sequence.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for card in sequence {
        if !seen.insert(*card) {
            return Err(EngineError::DuplicateCard(*card));
        }
    }
    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
