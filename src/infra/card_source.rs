use crate::domain::card::{parse_cards, Card, CardParseError};
use crate::domain::deck::Deck;
use crate::engine::{CardSource, RandomSource};

/// Источник по умолчанию: полная 52-карточная колода, перемешанная RNG.
#[derive(Clone, Debug, Default)]
pub struct ShuffledDeck<R> {
    rng: R,
}

impl<R: RandomSource> ShuffledDeck<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> CardSource for ShuffledDeck<R> {
    fn draw_sequence(&mut self) -> Vec<Card> {
        let mut deck = Deck::standard_52();
        self.rng.shuffle(&mut deck.cards);
        deck.into_sequence()
    }
}

/// Заранее заданная последовательность – для тестов и реплея раздач.
///
/// Каждый вызов отдаёт одну и ту же последовательность.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedCards {
    cards: Vec<Card>,
}

impl FixedCards {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Из строк вида `["Ah", "Kd", ...]`.
    pub fn parse<'a, I>(ids: I) -> Result<Self, CardParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Ok(Self::new(parse_cards(ids)?))
    }

    /// Из строки через пробел: `"Ah Kd 7c ..."`.
    pub fn from_line(line: &str) -> Result<Self, CardParseError> {
        Self::parse(line.split_whitespace())
    }
}

impl CardSource for FixedCards {
    fn draw_sequence(&mut self) -> Vec<Card> {
        self.cards.clone()
    }
}
