use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Пять подряд идущих бит.
const FIVE_IN_A_ROW: RankMask = 0b1_1111;

/// Колесо A2345: туз + четыре младших.
const WHEEL: RankMask = (1 << 12) | 0b1111;

pub fn rank_bit(rank: Rank) -> RankMask {
    1 << ((rank as u8) - 2)
}

pub fn mask_of<I>(ranks: I) -> RankMask
where
    I: IntoIterator<Item = Rank>,
{
    ranks.into_iter().fold(0, |mask, r| mask | rank_bit(r))
}

/// Старшая карта стрита в маске, если стрит есть.
/// Колесо A2345 считается стритом до пятёрки.
pub fn straight_high(mask: RankMask) -> Option<Rank> {
    // Окно из пяти бит сдвигаем от бродвея (T..A) вниз к 2..6.
    for low in (0..=8u8).rev() {
        let window = FIVE_IN_A_ROW << low;
        if mask & window == window {
            return Rank::from_value(low + 6);
        }
    }
    if mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }
    None
}
