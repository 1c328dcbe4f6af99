// src/bin/poker_hand_cli.rs

use std::env;

use holdem_hand_engine::domain::{Chips, GameConfig, PlayerId, Seat};
use holdem_hand_engine::engine::{Action, Collaborators, HandEngine, HandStatus};
use holdem_hand_engine::infra::{DeterministicRng, NoPacing, PayoutLog, ShuffledDeck};

/// Сколько действий максимум даём ботам, чтобы не зациклиться на баге.
const MAX_ACTIONS: usize = 500;

fn main() {
    env_logger::init();

    // Необязательные аргументы: число игроков и seed колоды.
    let mut args = env::args().skip(1);
    let players: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("poker_hand_cli: {} игроков, seed {}", players, seed);

    if let Err(e) = run(players, seed) {
        eprintln!("ошибка: {}", e);
        std::process::exit(1);
    }
}

fn run(players: usize, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let seats: Vec<Seat> = (0..players)
        .map(|i| Seat::new(i as PlayerId + 1, Chips::new(1_000 + 250 * i as u64)))
        .collect();
    let config = GameConfig::new(Chips::new(10), Chips::new(20)).with_side_pots(true);

    let payouts = PayoutLog::new();
    let collaborators = Collaborators::default()
        .with_card_source(ShuffledDeck::new(DeterministicRng::from_u64(seed)))
        .with_pacer(NoPacing)
        .with_payout_sink(payouts.clone());

    let mut engine = HandEngine::new(seats, config, collaborators)?;
    let mut status = engine.start()?;

    for step in 0..MAX_ACTIONS {
        if matches!(status, HandStatus::Finished(_)) {
            break;
        }
        let Some(actor) = engine.current_actor() else {
            break;
        };

        let action = bot_action(&engine, actor, step);
        println!("[{:?}] игрок {} -> {:?}", engine.street(), actor, action);
        status = engine.act(actor, action)?;

        if let HandStatus::Rejected(reason) = &status {
            // Бот ошибся: в этот раз просто сбрасываем.
            println!("  отклонено: {}", reason);
            status = engine.act(actor, Action::Fold)?;
        }
    }

    match &status {
        HandStatus::Finished(summary) => {
            println!();
            println!("=========== ИТОГ ===========");
            println!("улица: {:?}, банк: {}", summary.street_reached, summary.total_pot);
            println!(
                "борд: {}",
                summary
                    .board
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            for d in payouts.entries() {
                println!("  банк {}: {} -> {:?}", d.pot_id, d.amount, d.winners);
            }
        }
        other => println!("раздача не закончилась: {:?}", other),
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}

/// Простейший бот: колл или чек, иногда двойной рейз, иначе олл-ин или фолд.
///
/// Уровень ставки в движке не всегда равен максимальной ставке на улице,
/// поэтому бот сначала пробует дотянуться до максимума, потом до уровня.
fn bot_action(engine: &HandEngine, player: PlayerId, step: usize) -> Action {
    let own = engine.bet_of(player);
    let max_bet = engine.bets().values().copied().max().unwrap_or(Chips::ZERO);
    let call = max_bet.saturating_sub(own);
    let level_call = engine.current_bet_level().saturating_sub(own);

    if step % 7 == 3 && !call.is_zero() && engine.is_valid_bet(player, call * 2) {
        return Action::Bet(call * 2);
    }
    for amount in [call, level_call] {
        if engine.is_valid_bet(player, amount) {
            return Action::Bet(amount);
        }
    }

    let stack = engine.seat(player).map(|s| s.stack).unwrap_or(Chips::ZERO);
    if stack <= call && engine.is_valid_bet(player, stack) {
        return Action::Bet(stack);
    }
    Action::Fold
}
