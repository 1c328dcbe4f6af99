//! Курсор хода: чистые функции над списком мест.
//!
//! Сам курсор – это просто индекс места; здесь только правила, как его двигать.

use crate::domain::{Seat, SeatIndex, Table};

/// Найти следующее по кругу место, игрок которого может ходить
/// (не сфолдил и не в олл-ине). Стартовое место не рассматривается.
///
/// Если ходить некому – `None`, а не бесконечный цикл.
pub fn next_eligible_seat(seats: &[Seat], from: SeatIndex) -> Option<SeatIndex> {
    let n = seats.len();
    if n == 0 {
        return None;
    }

    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&idx| seats[idx].can_act())
}

/// Откуда стартует курсор в начале раздачи.
///
/// 3+ игроков: с дилера, первый `next` попадает на место после кнопки (SB).
/// Heads-up: на шаг раньше дилера, чтобы первый `next` попал на самого дилера –
/// дилер ставит small blind.
pub fn hand_opening_pointer(table: &Table) -> SeatIndex {
    if table.is_heads_up() {
        table.len() - 1
    } else {
        Table::DEALER
    }
}

/// Откуда стартует курсор на каждой новой улице (первый `next` даёт первого ходящего).
///
/// Поиск всегда начинается с кнопки: первым ходит первое живое место после дилера.
/// В heads-up это не-дилер, а дилер ходит последним.
pub fn street_opening_pointer() -> SeatIndex {
    Table::DEALER
}

/// Сколько игроков ещё может делать ставки.
pub fn actionable_count(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.can_act()).count()
}
