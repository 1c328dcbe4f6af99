use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    fn from_id(id: u32) -> HandCategory {
        Self::ALL
            .get(id as usize)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        }
    }
}

const CATEGORY_SHIFT: u32 = 20;
const NIBBLE: u32 = 0x0F;

impl HandRank {
    /// Упаковка: `[категория:4][r0:4][r1:4][r2:4][r3:4][r4:4]`.
    ///
    /// `tiebreak` – ранги в порядке сравнения (от значимого к младшему),
    /// недостающие хвостовые позиции заполняются нулями.
    pub fn pack(category: HandCategory, tiebreak: &[Rank]) -> Self {
        let mut value = (category as u32) << CATEGORY_SHIFT;
        for (i, rank) in tiebreak.iter().take(5).enumerate() {
            let shift = 16 - 4 * i as u32;
            value |= (*rank as u32) << shift;
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        HandCategory::from_id((self.0 >> CATEGORY_SHIFT) & NIBBLE)
    }

    /// Ранги для сравнения; пустые позиции пропускаются.
    pub fn tiebreak(&self) -> Vec<Rank> {
        (0..5)
            .filter_map(|i| {
                let shift = 16 - 4 * i;
                Rank::from_value(((self.0 >> shift) & NIBBLE) as u8)
            })
            .collect()
    }
}

pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "Twos",
        Rank::Three => "Threes",
        Rank::Four => "Fours",
        Rank::Five => "Fives",
        Rank::Six => "Sixes",
        Rank::Seven => "Sevens",
        Rank::Eight => "Eights",
        Rank::Nine => "Nines",
        Rank::Ten => "Tens",
        Rank::Jack => "Jacks",
        Rank::Queen => "Queens",
        Rank::King => "Kings",
        Rank::Ace => "Aces",
    }
}

/// Человеческое описание руки: `"Two pair, Kings and Sevens"`, `"Straight, Five high"`.
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    let tb = rank.tiebreak();
    let first = tb.first().copied();
    let second = tb.get(1).copied();

    match (cat, first, second) {
        (HandCategory::OnePair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind, Some(r), _) => {
            format!("{}, {}", cat.name(), rank_name(r))
        }
        (HandCategory::TwoPair, Some(hi), Some(lo)) => {
            format!("{}, {} and {}", cat.name(), rank_name(hi), rank_name(lo))
        }
        (HandCategory::FullHouse, Some(trips), Some(pair)) => {
            format!("{}, {} over {}", cat.name(), rank_name(trips), rank_name(pair))
        }
        (HandCategory::StraightFlush, Some(Rank::Ace), _) => "Royal flush".to_string(),
        (
            HandCategory::HighCard
            | HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::StraightFlush,
            Some(r),
            _,
        ) => format!("{}, {:?} high", cat.name(), r),
        _ => cat.name().to_string(),
    }
}
