//! Adjustment-phase (build/disband) resolution (§4.E).
//!
//! Supply-center reassignment happens on entry to `CreatingDisbanding`
//! (called from the movement and retreat resolvers); this module handles
//! submission validation, quota application, civil disorder, and the
//! win check that follows adjustment.

use std::collections::HashMap;

use tracing::instrument;

use crate::error::{EngineError, Result};
use crate::game::{Game, GamePhase, Nation, Order, OrderResult, Season, Unit};
use crate::map::{CountryId, Map, ProvinceId, UnitType};

use super::phase::winner_if_any;

/// Recomputes supply-center ownership from unit occupancy and each
/// nation's `to_build` quota. Called once, at the moment a state first
/// enters `CreatingDisbanding`.
pub(super) fn enter_creating_disbanding(map: &Map, nations: &mut HashMap<CountryId, Nation>) {
    let mut occupant: HashMap<ProvinceId, CountryId> = HashMap::new();
    for (&country, nation) in nations.iter() {
        for unit in &nation.units {
            occupant.insert(unit.province, country);
        }
    }

    for province in map.provinces_by_id() {
        if !province.is_supply_center {
            continue;
        }
        let Some(&owner) = occupant.get(&province.id) else { continue };
        for (&country, nation) in nations.iter_mut() {
            if country == owner {
                if !nation.supply_centers.contains(&province.id) {
                    nation.supply_centers.push(province.id);
                }
            } else {
                nation.supply_centers.retain(|&p| p != province.id);
            }
        }
    }

    for nation in nations.values_mut() {
        nation.to_build = nation.supply_centers.len() as i32 - nation.units.len() as i32;
    }
}

/// Validates a submitted Build/Disband/Pass order against the current
/// quota and occupancy, per §4.E.
pub fn valid_adjustment(map: &Map, country: CountryId, nation: &Nation, order: &Order) -> bool {
    match order {
        Order::Build { country: c, province, unit_type, coast, .. } => {
            if *c != country || nation.to_build <= 0 {
                return false;
            }
            let Ok(prov) = map.province(*province) else { return false };
            if !prov.is_supply_center || prov.home_country != Some(country) {
                return false;
            }
            if !nation.supply_centers.contains(province) {
                return false;
            }
            if nation.units.iter().any(|u| u.province == *province) {
                return false;
            }
            if *unit_type == UnitType::Fleet && prov.kind == crate::map::ProvinceKind::Land {
                return false;
            }
            if prov.has_coasts() && *unit_type == UnitType::Fleet && coast.is_none() {
                return false;
            }
            true
        }
        Order::Disband { country: c, unit, .. } => *c == country && nation.to_build < 0 && nation.units.iter().any(|u| u.province == *unit),
        Order::Pass { country: c, .. } => *c == country,
        _ => false,
    }
}

/// Resolves the adjustment phase: applies every nation's submitted
/// Build/Disband orders (capped at quota, backfilled with civil
/// disorder for any disband shortfall), checks the win condition, and
/// opens the next Spring OrderWriting phase.
#[instrument(skip(game), fields(game_id = game.id))]
pub fn calculate_adjustments(game: &mut Game) -> Result<()> {
    let map = game.map.clone();
    let prior = game.current_state().clone();
    let mut nations = prior.nations.clone();

    for (&country, nation) in prior.nations.iter() {
        let submitted = prior.adjustments.get(&country).cloned().unwrap_or_default();
        if nation.to_build > 0 {
            let mut built = 0i32;
            for order in &submitted {
                if built >= nation.to_build {
                    break;
                }
                if let Order::Build { province, unit_type, coast, .. } = order {
                    let n = nations.get_mut(&country).unwrap();
                    n.units.push(Unit { unit_type: *unit_type, province: *province, coast: coast.clone() });
                    built += 1;
                }
            }
        } else if nation.to_build < 0 {
            let needed = (-nation.to_build) as usize;
            let mut disbanded: Vec<ProvinceId> = Vec::new();
            for order in &submitted {
                if disbanded.len() >= needed {
                    break;
                }
                if let Order::Disband { unit, .. } = order {
                    disbanded.push(*unit);
                }
            }
            if disbanded.len() < needed {
                disbanded.extend(civil_disorder(&map, country, nation, needed - disbanded.len(), &disbanded));
            }
            let n = nations.get_mut(&country).unwrap();
            n.units.retain(|u| !disbanded.contains(&u.province));
        }
        nations.get_mut(&country).unwrap().to_build = 0;
    }

    let winner = winner_if_any(&map, &nations);

    let (next_season, next_date) = (Season::Spring, prior.date);
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
    game.set_phase(GamePhase::OrderWriting);

    if let Some(country) = winner {
        if let Some(username) = game.owner_of_country(country) {
            game.winner = Some(username.to_string());
            game.won = crate::game::WonState::Won;
        }
    }

    Ok(())
}

fn civil_disorder(map: &Map, country: CountryId, nation: &Nation, count: usize, already: &[ProvinceId]) -> Vec<ProvinceId> {
    let mut candidates: Vec<(ProvinceId, u32)> = nation
        .units
        .iter()
        .map(|u| u.province)
        .filter(|p| !already.contains(p))
        .map(|p| (p, distance_to_home(map, p, country)))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0 .0.cmp(&b.0 .0)));
    candidates.into_iter().take(count).map(|(p, _)| p).collect()
}

fn distance_to_home(map: &Map, from: ProvinceId, country: CountryId) -> u32 {
    let home: std::collections::HashSet<ProvinceId> = map
        .provinces_by_id()
        .iter()
        .filter(|p| p.is_supply_center && p.home_country == Some(country))
        .map(|p| p.id)
        .collect();
    if home.contains(&from) {
        return 0;
    }

    use std::collections::{HashSet, VecDeque};
    let mut visited: HashSet<ProvinceId> = HashSet::new();
    visited.insert(from);
    let mut queue = VecDeque::new();
    queue.push_back((from, 0u32));
    while let Some((p, dist)) = queue.pop_front() {
        for next in map.adjacent_ignore_coasts(p) {
            if visited.contains(&next) {
                continue;
            }
            if home.contains(&next) {
                return dist + 1;
            }
            visited.insert(next);
            queue.push_back((next, dist + 1));
        }
    }
    u32::MAX
}

/// Enforces §4.E validity and quota for adjustment-phase submissions
/// before they are recorded on the game.
pub fn submit_adjustment(game: &mut Game, username: &str, country: CountryId, order: Order) -> Result<()> {
    if game.phase != GamePhase::CreatingDisbanding {
        return Err(EngineError::invalid_state("adjustments may only be submitted during creating/disbanding"));
    }
    if game.owner_of_country(country) != Some(username) {
        return Err(EngineError::permission_denied("user does not control this country"));
    }
    let map = game.map.clone();
    let state = game.current_state();
    let nation = state
        .nations
        .get(&country)
        .ok_or_else(|| EngineError::not_found(format!("country {}", country.0)))?;

    if !valid_adjustment(&map, country, nation, &order) {
        return Err(EngineError::invalid_submission("adjustment order is not valid for this country's quota"));
    }

    let existing = state.adjustments.get(&country).map(|v| v.len()).unwrap_or(0);
    let quota = nation.to_build.unsigned_abs() as usize;
    if matches!(order, Order::Build { .. } | Order::Disband { .. }) && existing >= quota {
        return Err(EngineError::invalid_submission("adjustment quota already satisfied"));
    }

    let mut order = order;
    order.set_result(OrderResult::Unprocessed);
    let state = game.current_state_mut();
    state.adjustments.entry(country).or_default().push(order);
    Ok(())
}
