//! Movement-phase orchestration (§4.D steps 1-9) and the phase-machine
//! transition graph (§4.E).

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::error::Result;
use crate::game::{Dislodgement, Game, GamePhase, Nation, Order, OrderResult, Season, State};
use crate::map::{CountryId, Map, ProvinceId};

use super::kruijswijk;

/// Runs movement adjudication on the game's current (OrderWriting) state,
/// stamps results into it, applies successful moves, and opens either a
/// Retreating phase or the next OrderWriting/CreatingDisbanding phase.
#[instrument(skip(game), fields(game_id = game.id))]
pub fn calculate_orders(game: &mut Game) -> Result<()> {
    let map = game.map.clone();
    let prior = game.current_state().clone();

    let mut flat: Vec<(CountryId, ProvinceId, Order)> = Vec::new();
    for (&country, nation) in &prior.nations {
        for unit in &nation.units {
            let order = prior
                .orders
                .get(&country)
                .and_then(|m| m.get(&unit.province))
                .cloned()
                .unwrap_or(Order::Hold { province: unit.province, result: OrderResult::Unprocessed });
            flat.push((country, unit.province, order));
        }
    }
    // HashMap iteration order is randomized per-process; sort so the
    // adjudicator's dependency-stack indices (and therefore which entry a
    // cycle traversal starts from) are reproducible across runs.
    flat.sort_by_key(|(country, province, _)| (*country, *province));
    let flat: Vec<(CountryId, Order)> = flat.into_iter().map(|(country, _, order)| (country, order)).collect();

    let result = kruijswijk::adjudicate(&map, &prior, flat);
    let has_dislodgements = !result.dislodged.is_empty();

    let mut new_nations = prior.nations.clone();
    for (country, order) in &result.orders {
        if let Order::Move { province, dest, coast, result: OrderResult::Success, .. } = order {
            if let Some(nation) = new_nations.get_mut(country) {
                if let Some(unit) = nation.units.iter_mut().find(|u| u.province == *province) {
                    unit.province = *dest;
                    unit.coast = coast.clone();
                }
            }
        }
    }

    let mut dislodgements: HashMap<ProvinceId, Dislodgement> = HashMap::new();
    for (victim_province, dislodgement) in &result.dislodged {
        if let Some(nation) = new_nations.get_mut(&dislodgement.country) {
            nation.units.retain(|u| u.province != *victim_province);
        }
        dislodgements.insert(*victim_province, dislodgement.clone());
    }

    // Stamp results (including synthetic holds) into the now-historical
    // movement state.
    let mut stamped_orders: HashMap<CountryId, HashMap<ProvinceId, Order>> = HashMap::new();
    for (country, order) in &result.orders {
        if let Some(p) = order.province() {
            stamped_orders.entry(*country).or_default().insert(p, order.clone());
        }
    }
    {
        let historical = game.current_state_mut();
        historical.orders = stamped_orders;
        historical.dislodgements = dislodgements.clone();
        historical.contested = result.contested.clone();
    }

    let (next_phase, next_season, next_date) = if has_dislodgements {
        (GamePhase::Retreating, prior.season, prior.date)
    } else {
        match prior.season {
            Season::Spring => (GamePhase::OrderWriting, Season::Fall, prior.date),
            Season::Fall => (GamePhase::CreatingDisbanding, Season::Spring, prior.date + 1),
        }
    };

    if next_phase == GamePhase::CreatingDisbanding {
        super::build::enter_creating_disbanding(&map, &mut new_nations);
    }

    let next_dislodgements = if has_dislodgements { dislodgements } else { HashMap::new() };
    let next_state = State {
        date: next_date,
        season: next_season,
        nations: new_nations,
        orders: HashMap::new(),
        retreats: HashMap::new(),
        dislodgements: next_dislodgements,
        adjustments: HashMap::new(),
        contested: result.contested,
    };

    game.history.push(next_state);
    game.set_phase(next_phase);
    info!(next_phase = ?next_phase, has_dislodgements, "movement phase resolved");
    Ok(())
}

/// Advances `season`/`date` one half-year, per §4.E's transition table for
/// the no-dislodgement case. Exposed for reuse by the retreat resolver.
pub(super) fn advance_season(season: Season, date: u16) -> (Season, u16) {
    match season {
        Season::Spring => (Season::Fall, date),
        Season::Fall => (Season::Spring, date + 1),
    }
}

pub(super) fn winner_if_any(map: &Map, nations: &HashMap<CountryId, Nation>) -> Option<CountryId> {
    let total_scs = map.provinces_by_id().iter().filter(|p| p.is_supply_center).count();
    nations
        .iter()
        .find(|(_, n)| n.supply_centers.len() * 2 > total_scs)
        .map(|(&c, _)| c)
}
