//! Retreat-phase resolution (§4.E).
//!
//! All submitted retreats share dest resolution: a retreat fails iff any
//! other submitted retreat names the same destination. Dislodged units
//! with no retreat order (and those whose retreat fails) are disbanded.

use std::collections::HashMap;

use tracing::instrument;

use crate::error::{EngineError, Result};
use crate::game::{Game, GamePhase, Order, OrderResult, Unit};
use crate::map::{CountryId, Map, ProvinceId};

use super::phase::advance_season;

/// Whether `order` is a legal retreat for the dislodged unit recorded at
/// `province` in the current state, per §4.E.
pub fn valid_retreat(map: &Map, game: &Game, province: ProvinceId, order: &Order) -> bool {
    let Order::Retreat { province: p, dest, coast, .. } = order else { return false };
    if *p != province {
        return false;
    }
    let state = game.current_state();
    let Some(dislodgement) = state.dislodgements.get(&province) else { return false };

    let is_fleet = dislodgement.unit.unit_type == crate::map::UnitType::Fleet;
    let reachable = map.adjacent(province, dislodgement.unit.coast.as_deref(), is_fleet);
    if !reachable.iter().any(|(p, _)| *p == *dest) {
        return false;
    }
    if Some(*dest) == dislodgement.from {
        return false;
    }
    if state.contested.contains(dest) {
        return false;
    }
    if state.unit_at(*dest).is_some() {
        return false;
    }
    let Ok(dest_province) = map.province(*dest) else { return false };
    if is_fleet && dest_province.has_coasts() && coast.is_none() {
        return false;
    }
    true
}

pub fn submit_retreat(game: &mut Game, username: &str, country: CountryId, order: Order) -> Result<()> {
    if game.phase != GamePhase::Retreating {
        return Err(EngineError::invalid_state("retreats may only be submitted during retreating"));
    }
    if game.owner_of_country(country) != Some(username) {
        return Err(EngineError::permission_denied("user does not control this country"));
    }
    let Some(province) = order.province() else {
        return Err(EngineError::invalid_submission("order has no acting province"));
    };
    let state = game.current_state();
    let dislodgement = state
        .dislodgements
        .get(&province)
        .ok_or_else(|| EngineError::invalid_submission("no dislodged unit at this province"))?;
    if dislodgement.country != country {
        return Err(EngineError::permission_denied("dislodged unit does not belong to this country"));
    }

    if let Order::Disband { .. } = &order {
        let mut order = order;
        order.set_result(OrderResult::Unprocessed);
        game.current_state_mut().retreats.entry(country).or_default().insert(province, order);
        return Ok(());
    }

    let map = game.map.clone();
    if !valid_retreat(&map, game, province, &order) {
        return Err(EngineError::invalid_submission("retreat order is not legal for this unit"));
    }

    let mut order = order;
    order.set_result(OrderResult::Unprocessed);
    game.current_state_mut().retreats.entry(country).or_default().insert(province, order);
    Ok(())
}

/// Resolves the retreat phase: applies every unbounced retreat, disbands
/// every remaining dislodged unit (no order, a losing bounce, or an
/// explicit Disband), then opens the next phase per §4.E.
#[instrument(skip(game), fields(game_id = game.id))]
pub fn calculate_retreats(game: &mut Game) -> Result<()> {
    let map = game.map.clone();
    let prior = game.current_state().clone();

    let mut dest_counts: HashMap<ProvinceId, u32> = HashMap::new();
    for orders in prior.retreats.values() {
        for order in orders.values() {
            if let Order::Retreat { dest, .. } = order {
                *dest_counts.entry(*dest).or_insert(0) += 1;
            }
        }
    }

    let mut nations = prior.nations.clone();
    let mut stamped: HashMap<CountryId, HashMap<ProvinceId, Order>> = HashMap::new();

    for (&province, dislodgement) in &prior.dislodgements {
        let submitted = prior.retreats.get(&dislodgement.country).and_then(|m| m.get(&province)).cloned();
        let resolved = match submitted {
            Some(Order::Retreat { dest, coast, .. }) => {
                let succeeds = dest_counts.get(&dest).copied().unwrap_or(0) <= 1;
                let mut order = Order::Retreat { province, dest, coast: coast.clone(), result: OrderResult::Unprocessed };
                if succeeds {
                    order.set_result(OrderResult::Success);
                    if let Some(nation) = nations.get_mut(&dislodgement.country) {
                        nation.units.push(Unit { unit_type: dislodgement.unit.unit_type, province: dest, coast });
                    }
                } else {
                    order.set_result(OrderResult::Fail);
                }
                order
            }
            Some(Order::Disband { country, unit, .. }) => {
                Order::Disband { country, unit, result: OrderResult::Success }
            }
            _ => Order::Disband { country: dislodgement.country, unit: province, result: OrderResult::Success },
        };
        stamped.entry(dislodgement.country).or_default().insert(province, resolved);
    }

    {
        let historical = game.current_state_mut();
        historical.retreats = stamped;
    }

    let (next_season, next_date) = advance_season(prior.season, prior.date);
    let next_phase = if prior.season == crate::game::Season::Fall {
        super::build::enter_creating_disbanding(&map, &mut nations);
        GamePhase::CreatingDisbanding
    } else {
        GamePhase::OrderWriting
    };

    game.history.push(crate::game::State {
        date: next_date,
        season: next_season,
        nations,
        orders: HashMap::new(),
        retreats: HashMap::new(),
        dislodgements: HashMap::new(),
        adjustments: HashMap::new(),
        contested: std::collections::HashSet::new(),
    });
    game.set_phase(next_phase);
    Ok(())
}
