//! Game state: the mutable record of a single Diplomacy game, its
//! history of turns, and the accessors/write operations the phase
//! machine and adjudicator are built on.

pub mod order;
pub mod sanitize;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{EngineError, Result};
use crate::map::{CountryId, Map, ProvinceId, UnitType};

pub use order::{Order, OrderResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Fall,
}

impl Season {
    pub fn flip(self) -> Season {
        match self {
            Season::Spring => Season::Fall,
            Season::Fall => Season::Spring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    CountryClaiming,
    OrderWriting,
    Retreating,
    CreatingDisbanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WonState {
    Playing,
    Won,
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub province: ProvinceId,
    #[serde(default)]
    pub coast: Option<String>,
}

/// A dislodged unit awaiting a retreat order, or disbanded outright if
/// none is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dislodgement {
    pub unit: Unit,
    /// The attacker's origin, or `None` if the attacker arrived by convoy
    /// (§4.C: an attacker that convoyed in does not bar its own origin
    /// from the dislodged unit's retreat options).
    pub from: Option<ProvinceId>,
    pub country: CountryId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nation {
    pub supply_centers: Vec<ProvinceId>,
    pub units: Vec<Unit>,
    pub neutral: bool,
    pub to_build: i32,
}

/// One half-year half-phase snapshot. `orders`/`retreats`/`adjustments`
/// are populated while the matching phase is open and frozen, with
/// `result` fields stamped in, once adjudication runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub date: u16,
    pub season: Season,
    pub nations: HashMap<CountryId, Nation>,
    pub orders: HashMap<CountryId, HashMap<ProvinceId, Order>>,
    pub retreats: HashMap<CountryId, HashMap<ProvinceId, Order>>,
    pub dislodgements: HashMap<ProvinceId, Dislodgement>,
    pub adjustments: HashMap<CountryId, Vec<Order>>,
    pub contested: std::collections::HashSet<ProvinceId>,
}

impl State {
    /// An empty state for `map` with every country present but unsettled
    /// — used as the seed before initial unit placement, and by tests.
    pub fn empty_for(map: &Map, date: u16, season: Season) -> State {
        let nations = map
            .countries()
            .iter()
            .map(|c| (c.id, Nation::default()))
            .collect();
        State {
            date,
            season,
            nations,
            orders: HashMap::new(),
            retreats: HashMap::new(),
            dislodgements: HashMap::new(),
            adjustments: HashMap::new(),
            contested: std::collections::HashSet::new(),
        }
    }

    /// Seeds nations with the map's initial supply centers and a unit on
    /// each home center whose province specifies a `startUnit`.
    pub fn with_standard_setup(map: &Map, date: u16, season: Season) -> State {
        let mut state = State::empty_for(map, date, season);
        for country in map.countries() {
            let nation = state.nations.entry(country.id).or_default();
            nation.supply_centers = country.initial_supply_centers.clone();
            for &sc in &country.initial_supply_centers {
                let Ok(province) = map.province(sc) else { continue };
                let Some(unit_type) = province.start_unit else { continue };
                let coast = province.coasts.first().cloned();
                nation.units.push(Unit { unit_type, province: sc, coast });
            }
        }
        state
    }

    pub fn unit_at(&self, province: ProvinceId) -> Option<(&CountryId, &Unit)> {
        self.nations
            .iter()
            .find_map(|(c, n)| n.units.iter().find(|u| u.province == province).map(|u| (c, u)))
    }

    pub fn owner_of_supply_center(&self, province: ProvinceId) -> Option<CountryId> {
        self.nations
            .iter()
            .find(|(_, n)| n.supply_centers.contains(&province))
            .map(|(c, _)| *c)
    }
}

/// A `Game` together with the live pruned [`Map`] it plays on. The map
/// itself is not part of the persisted document (§6): persistence stores
/// only `map_path`, and reattaching `map` after a reload is the loader's
/// job (it already owns the `.dipmap` search path via `EngineConfig`).
#[derive(Debug, Clone)]
pub struct Game {
    pub id: u64,
    pub name: String,
    pub map_path: String,
    pub map: Map,
    pub users: Vec<String>,
    pub players: HashMap<CountryId, Option<String>>,
    pub winner: Option<String>,
    pub won: WonState,
    pub phase: GamePhase,
    pub history: Vec<State>,
}

/// The persisted shape of a `Game` (§6): everything but the live `Map`,
/// which is addressed by `map_path` and reattached by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    pub id: u64,
    pub name: String,
    pub map: String,
    pub users: Vec<String>,
    pub players: HashMap<CountryId, Option<String>>,
    pub winner: Option<String>,
    pub won: WonState,
    pub phase: GamePhase,
    pub history: Vec<State>,
}

impl Game {
    /// Builds a new game on `map`, pruned for `player_count` players, with
    /// standard starting positions and phase `CountryClaiming`.
    #[instrument(skip(map), fields(game_id = id))]
    pub fn new(id: u64, name: impl Into<String>, map_path: impl Into<String>, map: &Map, player_count: u32) -> Result<Game> {
        let pruned = map.pruned(player_count)?;
        let initial = State::with_standard_setup(&pruned, 1901, Season::Spring);
        let players = pruned.countries().iter().map(|c| (c.id, None)).collect();
        Ok(Game {
            id,
            name: name.into(),
            map_path: map_path.into(),
            map: pruned,
            users: Vec::new(),
            players,
            winner: None,
            won: WonState::Playing,
            phase: GamePhase::CountryClaiming,
            history: vec![initial],
        })
    }

    /// Projects this game into its persisted document form (§6). The map
    /// graph is addressed by path, not embedded.
    pub fn to_document(&self) -> GameDocument {
        GameDocument {
            id: self.id,
            name: self.name.clone(),
            map: self.map_path.clone(),
            users: self.users.clone(),
            players: self.players.clone(),
            winner: self.winner.clone(),
            won: self.won,
            phase: self.phase,
            history: self.history.clone(),
        }
    }

    /// Reconstructs a `Game` from its persisted document, reattaching the
    /// already-loaded `map` (the caller is responsible for loading the
    /// `.dipmap` file named by `doc.map` and pruning it to the right
    /// player count before calling this).
    pub fn from_document(doc: GameDocument, map: Map) -> Game {
        Game {
            id: doc.id,
            name: doc.name,
            map_path: doc.map,
            map,
            users: doc.users,
            players: doc.players,
            winner: doc.winner,
            won: doc.won,
            phase: doc.phase,
            history: doc.history,
        }
    }

    pub fn current_state(&self) -> &State {
        self.history.last().expect("history is never empty")
    }

    pub fn current_state_mut(&mut self) -> &mut State {
        self.history.last_mut().expect("history is never empty")
    }

    /// The user who controls `country`, if claimed.
    pub fn owner_of_country(&self, country: CountryId) -> Option<&str> {
        self.players.get(&country).and_then(|o| o.as_deref())
    }

    pub fn country_of_user<'a>(&'a self, username: &str) -> Option<CountryId> {
        self.players
            .iter()
            .find(|(_, u)| u.as_deref() == Some(username))
            .map(|(c, _)| *c)
    }

    #[instrument(skip(self))]
    pub fn claim_country(&mut self, username: &str, country: CountryId) -> Result<()> {
        if self.phase != GamePhase::CountryClaiming {
            return Err(EngineError::invalid_state("countries may only be claimed during country claiming"));
        }
        let slot = self
            .players
            .get_mut(&country)
            .ok_or_else(|| EngineError::not_found(format!("country {}", country.0)))?;
        if slot.is_some() {
            return Err(EngineError::invalid_submission("country already claimed"));
        }
        *slot = Some(username.to_string());
        if !self.users.iter().any(|u| u == username) {
            self.users.push(username.to_string());
        }
        if self.players.values().all(|p| p.is_some()) {
            self.phase = GamePhase::OrderWriting;
        }
        Ok(())
    }

    /// Spawns a unit into the current state. Errors if the province is
    /// already occupied.
    pub fn spawn_unit(&mut self, country: CountryId, unit: Unit) -> Result<()> {
        let occupied = self.current_state().unit_at(unit.province).is_some();
        if occupied {
            return Err(EngineError::internal(format!(
                "province {} already occupied",
                unit.province.0
            )));
        }
        let state = self.current_state_mut();
        let nation = state
            .nations
            .get_mut(&country)
            .ok_or_else(|| EngineError::not_found(format!("country {}", country.0)))?;
        nation.units.push(unit);
        Ok(())
    }

    /// Removes the unit at `province` from the current state, if any.
    pub fn remove_unit(&mut self, province: ProvinceId) {
        let state = self.current_state_mut();
        for nation in state.nations.values_mut() {
            nation.units.retain(|u| u.province != province);
        }
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Appends a fresh state carrying `nations` forward, with orders,
    /// retreats, dislodgements, and adjustments cleared. Used by the
    /// phase machine when opening a new half-phase.
    pub fn append_state(&mut self, date: u16, season: Season, nations: HashMap<CountryId, Nation>) {
        self.history.push(State {
            date,
            season,
            nations,
            orders: HashMap::new(),
            retreats: HashMap::new(),
            dislodgements: HashMap::new(),
            adjustments: HashMap::new(),
            contested: std::collections::HashSet::new(),
        });
    }

    /// Submits (or overwrites) `order` for the unit at `order.province()`,
    /// enforcing §4.C submission rules for the OrderWriting phase.
    #[instrument(skip(self, order))]
    pub fn submit_order(&mut self, username: &str, country: CountryId, order: Order) -> Result<()> {
        if self.phase != GamePhase::OrderWriting {
            return Err(EngineError::invalid_state("orders may only be submitted during order writing"));
        }
        if self.owner_of_country(country) != Some(username) {
            return Err(EngineError::permission_denied("user does not control this country"));
        }

        if let Order::Cancel { province } = &order {
            let state = self.current_state_mut();
            state.orders.entry(country).or_default().remove(province);
            return Ok(());
        }

        let Some(province) = order.province() else {
            return Err(EngineError::invalid_submission("order has no acting province"));
        };
        let map = self.map.clone();
        let state = self.current_state();
        let unit = state
            .nations
            .get(&country)
            .and_then(|n| n.units.iter().find(|u| u.province == province))
            .ok_or_else(|| EngineError::invalid_submission("no such unit under this country"))?
            .clone();

        let legal = order::valid_orders(&map, state, &unit);
        if !legal.iter().any(|l| l.id() == order.id()) {
            return Err(EngineError::invalid_submission("order is not among this unit's valid orders"));
        }

        let state = self.current_state_mut();
        state.orders.entry(country).or_default().insert(province, order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::standard;

    #[test]
    fn new_game_starts_in_country_claiming() {
        let map = standard::build();
        let game = Game::new(1, "test", "standard", &map, 7).unwrap();
        assert_eq!(game.phase, GamePhase::CountryClaiming);
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn claiming_every_country_opens_order_writing() {
        let map = standard::build();
        let mut game = Game::new(1, "test", "standard", &map, 7).unwrap();
        let countries: Vec<CountryId> = game.map.countries().iter().map(|c| c.id).collect();
        for (i, c) in countries.iter().enumerate() {
            game.claim_country(&format!("user{i}"), *c).unwrap();
        }
        assert_eq!(game.phase, GamePhase::OrderWriting);
    }

    #[test]
    fn claiming_twice_fails() {
        let map = standard::build();
        let mut game = Game::new(1, "test", "standard", &map, 7).unwrap();
        let country = game.map.countries()[0].id;
        game.claim_country("alice", country).unwrap();
        assert!(game.claim_country("bob", country).is_err());
    }

    #[test]
    fn standard_setup_places_starting_units() {
        let map = standard::build();
        let state = State::with_standard_setup(&map, 1901, Season::Spring);
        let total_units: usize = state.nations.values().map(|n| n.units.len()).sum();
        assert_eq!(total_units, 22);
    }

    #[test]
    fn document_round_trip_preserves_game_fields() {
        let map = standard::build();
        let game = Game::new(1, "test", "standard", &map, 7).unwrap();
        let doc = game.to_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: GameDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, game.id);
        assert_eq!(back.name, game.name);
        assert_eq!(back.map, game.map_path);
        assert_eq!(back.phase, game.phase);
        assert_eq!(back.history.len(), game.history.len());
    }
}
