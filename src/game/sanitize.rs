//! Per-viewer sanitized projection of a game (§4.F): hides orders,
//! retreats, and adjustments that belong to countries other than the
//! viewer's, for whichever phase is currently open.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::map::CountryId;

use super::{Game, GamePhase, State};

/// A deeply-copied, viewer-scoped view of a game suitable for handing to
/// a transport layer to serialize to a client.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedGame {
    pub id: u64,
    pub name: String,
    pub map: String,
    pub users: Vec<String>,
    pub players: HashMap<CountryId, Option<String>>,
    pub winner: Option<String>,
    pub won: super::WonState,
    pub phase: GamePhase,
    pub history: Vec<SanitizedState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedState {
    pub date: u16,
    pub season: super::Season,
    pub nations: HashMap<CountryId, super::Nation>,
    /// Orders keyed by country, present only for the viewer's own country
    /// while the phase that produced them is still open.
    pub orders: HashMap<CountryId, HashMap<crate::map::ProvinceId, Value>>,
    pub retreats: HashMap<CountryId, HashMap<crate::map::ProvinceId, Value>>,
    pub dislodgements: HashMap<crate::map::ProvinceId, super::Dislodgement>,
    pub adjustments: HashMap<CountryId, Vec<Value>>,
    pub contested: std::collections::HashSet<crate::map::ProvinceId>,
}

/// Produces the view of `game` visible to `viewer` (a country, or `None`
/// for a spectator who sees nothing hidden-phase-specific).
pub fn sanitize(game: &Game, viewer: Option<CountryId>) -> SanitizedGame {
    let history = game
        .history
        .iter()
        .enumerate()
        .map(|(i, state)| sanitize_state(state, viewer, i + 1 == game.history.len(), game.phase))
        .collect();

    SanitizedGame {
        id: game.id,
        name: game.name.clone(),
        map: game.map_path.clone(),
        users: game.users.clone(),
        players: game.players.clone(),
        winner: game.winner.clone(),
        won: game.won,
        phase: game.phase,
        history,
    }
}

fn sanitize_state(state: &State, viewer: Option<CountryId>, is_current: bool, phase: GamePhase) -> SanitizedState {
    let visible = |country: &CountryId| -> bool {
        if !is_current {
            return true;
        }
        match phase {
            GamePhase::OrderWriting | GamePhase::Retreating | GamePhase::CreatingDisbanding => {
                Some(*country) == viewer
            }
            GamePhase::CountryClaiming => true,
        }
    };

    let orders = state
        .orders
        .iter()
        .filter(|(c, _)| visible(c))
        .map(|(c, m)| (*c, m.iter().map(|(p, o)| (*p, o.export())).collect()))
        .collect();

    let retreats = state
        .retreats
        .iter()
        .filter(|(c, _)| visible(c))
        .map(|(c, m)| (*c, m.iter().map(|(p, o)| (*p, o.export())).collect()))
        .collect();

    let adjustments = state
        .adjustments
        .iter()
        .filter(|(c, _)| visible(c))
        .map(|(c, v)| (*c, v.iter().map(|o| o.export()).collect()))
        .collect();

    SanitizedState {
        date: state.date,
        season: state.season,
        nations: state.nations.clone(),
        orders,
        retreats,
        dislodgements: state.dislodgements.clone(),
        adjustments,
        contested: state.contested.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::order::Order;
    use crate::game::OrderResult;
    use crate::map::standard;

    #[test]
    fn own_orders_visible_others_hidden_during_order_writing() {
        let map = standard::build();
        let mut game = Game::new(1, "test", "standard", &map, 7).unwrap();
        let countries: Vec<CountryId> = game.map.countries().iter().map(|c| c.id).collect();
        for (i, c) in countries.iter().enumerate() {
            game.claim_country(&format!("user{i}"), *c).unwrap();
        }
        let me = countries[0];
        let other = countries[1];
        let par = game.map.province_by_code("par").unwrap_or_else(|| game.map.provinces_by_id().first().unwrap()).id;
        game.current_state_mut().orders.entry(me).or_default().insert(
            par,
            Order::Hold { province: par, result: OrderResult::Unprocessed },
        );
        game.current_state_mut().orders.entry(other).or_default().insert(
            par,
            Order::Hold { province: par, result: OrderResult::Unprocessed },
        );

        let view = sanitize(&game, Some(me));
        let current = view.history.last().unwrap();
        assert!(current.orders.contains_key(&me));
        assert!(!current.orders.contains_key(&other));
    }

    #[test]
    fn all_orders_visible_once_phase_is_historical() {
        let map = standard::build();
        let mut game = Game::new(1, "test", "standard", &map, 7).unwrap();
        let countries: Vec<CountryId> = game.map.countries().iter().map(|c| c.id).collect();
        for (i, c) in countries.iter().enumerate() {
            game.claim_country(&format!("user{i}"), *c).unwrap();
        }
        let other = countries[1];
        let par = game.map.provinces_by_id().first().unwrap().id;
        game.current_state_mut().orders.entry(other).or_default().insert(
            par,
            Order::Hold { province: par, result: OrderResult::Success },
        );
        game.append_state(1901, super::super::Season::Fall, game.current_state().nations.clone());

        let view = sanitize(&game, Some(countries[0]));
        let historical = &view.history[0];
        assert!(historical.orders.contains_key(&other));
    }
}
