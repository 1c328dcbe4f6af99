use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Chips, PlayerId, PotId};
use crate::engine::pot::Pot;

/// Посчитать сайд-поты из сумм, которые внесли игроки.
///
/// Вход: `contributions[player]` = сколько суммарно фишек поставил игрок (во всех улицах),
/// `live` = кто не сфолдил.
/// Выход: список банков от младшего уровня к старшему.
///
/// Фишки сфолдивших идут в банки, но сами они ни на что не претендуют.
/// Соседние уровни с одинаковым составом претендентов склеиваются,
/// уровень без претендентов доливается в предыдущий банк.
pub fn compute_side_pots(
    contributions: &BTreeMap<PlayerId, Chips>,
    live: &BTreeSet<PlayerId>,
) -> Vec<Pot> {
    // Уровни вкладов по возрастанию, без нулей и повторов.
    let levels: BTreeSet<Chips> = contributions
        .values()
        .copied()
        .filter(|c| !c.is_zero())
        .collect();

    let mut pots: Vec<Pot> = Vec::new();
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let level_diff = level - prev_level;

        let contributors = contributions.values().filter(|c| **c >= level).count() as u64;
        let amount = level_diff * contributors;

        let eligible: Vec<PlayerId> = contributions
            .iter()
            .filter(|(p, c)| **c >= level && live.contains(*p))
            .map(|(p, _)| *p)
            .collect();

        match pots.last_mut() {
            Some(last) if eligible.is_empty() || last.eligible == eligible => {
                last.amount += amount;
            }
            _ => {
                let id = pots.len() as PotId;
                pots.push(Pot {
                    id,
                    amount,
                    eligible,
                });
            }
        }

        prev_level = level;
    }

    // Самый младший уровень без претендентов: отдаём его следующему банку.
    if pots.len() > 1 && pots[0].eligible.is_empty() {
        let orphan = pots.remove(0);
        pots[0].amount += orphan.amount;
        for (idx, pot) in pots.iter_mut().enumerate() {
            pot.id = idx as PotId;
        }
    }

    pots
}
