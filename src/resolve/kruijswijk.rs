//! Kruijswijk-style adjudicator: recursive guess-based resolution with an
//! explicit dependency stack, self-cycle detection, and the two backup
//! rules for convoy paradoxes and circular movement.
//!
//! Ported from the guess-and-recheck shape of the hand-rolled resolver
//! this crate grew from, generalized to the explicit LIFO dep_stack
//! semantics: a cycle is not just re-guessed once, it is classified and
//! partially resolved by a backup rule, then retried until it converges.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::game::{Dislodgement, Order, OrderResult, State, Unit};
use crate::map::{CountryId, Map, ProvinceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResState {
    Unresolved,
    Guessing,
    Resolved,
}

struct Entry {
    country: CountryId,
    order: Order,
    state: ResState,
    value: bool,
}

/// One adjudication run over a fixed set of orders against a fixed prior
/// state. Not reused across calls — a fresh `Adjudicator` is built per
/// `adjudicate` invocation.
struct Adjudicator<'a> {
    map: &'a Map,
    state: &'a State,
    entries: Vec<Entry>,
    by_province: HashMap<ProvinceId, usize>,
    dep_stack: Vec<usize>,
}

#[derive(Debug)]
pub struct AdjudicationResult {
    pub orders: Vec<(CountryId, Order)>,
    pub dislodged: Vec<(ProvinceId, Dislodgement)>,
    pub contested: HashSet<ProvinceId>,
}

/// Resolves one movement phase. `orders` holds exactly one order per unit
/// that has one (callers fill holdless units with a synthetic Hold
/// beforehand, per §4.D step 1).
#[instrument(skip(map, state, orders), fields(order_count = orders.len()))]
pub fn adjudicate(map: &Map, state: &State, orders: Vec<(CountryId, Order)>) -> AdjudicationResult {
    let mut by_province = HashMap::new();
    let entries: Vec<Entry> = orders
        .into_iter()
        .enumerate()
        .map(|(i, (country, order))| {
            if let Some(p) = order.province() {
                by_province.insert(p, i);
            }
            Entry { country, order, state: ResState::Unresolved, value: false }
        })
        .collect();

    let mut adj = Adjudicator { map, state, entries, by_province, dep_stack: Vec::new() };

    let n = adj.entries.len();
    for i in 0..n {
        adj.resolve(i);
    }

    adj.finish()
}

impl<'a> Adjudicator<'a> {
    fn order_at(&self, p: ProvinceId) -> Option<usize> {
        self.by_province.get(&p).copied()
    }

    fn country_of(&self, i: usize) -> CountryId {
        self.entries[i].country
    }

    /// The core recursive resolution per §4.D.
    fn resolve(&mut self, i: usize) -> bool {
        match self.entries[i].state {
            ResState::Resolved => return self.entries[i].value,
            ResState::Guessing => {
                self.dep_stack.push(i);
                return self.entries[i].value;
            }
            ResState::Unresolved => {}
        }

        loop {
            let old_dep_size = self.dep_stack.len();
            self.entries[i].state = ResState::Guessing;
            self.entries[i].value = false;
            let r1 = self.adjudicate_one(i);

            if self.dep_stack.len() == old_dep_size {
                self.entries[i].state = ResState::Resolved;
                self.entries[i].value = r1;
                return r1;
            }

            let first_new_dep = self.dep_stack[old_dep_size];
            if first_new_dep != i {
                self.dep_stack.push(i);
                self.entries[i].value = r1;
                return r1;
            }

            // Self-cycle: reset everything pushed since old_dep_size and
            // re-guess true.
            self.reset_from(old_dep_size);
            self.entries[i].state = ResState::Guessing;
            self.entries[i].value = true;
            let r2 = self.adjudicate_one(i);

            if r1 == r2 {
                self.reset_from(old_dep_size);
                self.entries[i].state = ResState::Resolved;
                self.entries[i].value = r1;
                return r1;
            }

            let cycle: Vec<usize> = self.dep_stack[old_dep_size..].to_vec();
            self.apply_backup_rule(&cycle);
            self.dep_stack.truncate(old_dep_size);
            // Retry from the top: the backup rule resolved some members
            // and reset the rest to Unresolved, so the next iteration
            // either resolves i cleanly or hits a smaller residual cycle.
            if self.entries[i].state == ResState::Resolved {
                return self.entries[i].value;
            }
        }
    }

    fn reset_from(&mut self, old_dep_size: usize) {
        while self.dep_stack.len() > old_dep_size {
            let popped = self.dep_stack.pop().unwrap();
            self.entries[popped].state = ResState::Unresolved;
        }
    }

    fn apply_backup_rule(&mut self, cycle: &[usize]) {
        let is_convoy_paradox = cycle.iter().any(|&i| {
            let Order::Move { is_convoy: true, province, dest, .. } = &self.entries[i].order else {
                return false;
            };
            cycle.iter().any(|&j| matches!(&self.entries[j].order, Order::Convoy { start, end, .. } if start == province && end == dest))
        });

        if is_convoy_paradox {
            debug!(provinces = ?cycle.iter().filter_map(|&i| self.entries[i].order.province()).map(|p| p.0).collect::<Vec<_>>(), classification = "convoy_paradox", "backup rule invoked");
            for &i in cycle {
                let fails = matches!(&self.entries[i].order, Order::Move { is_convoy: true, .. } | Order::Convoy { .. });
                if fails {
                    self.entries[i].state = ResState::Resolved;
                    self.entries[i].value = false;
                } else {
                    self.entries[i].state = ResState::Unresolved;
                }
            }
        } else {
            debug!(provinces = ?cycle.iter().filter_map(|&i| self.entries[i].order.province()).map(|p| p.0).collect::<Vec<_>>(), classification = "circular_movement", "backup rule invoked");
            for &i in cycle {
                if matches!(&self.entries[i].order, Order::Move { .. }) {
                    self.entries[i].state = ResState::Resolved;
                    self.entries[i].value = true;
                } else {
                    self.entries[i].state = ResState::Unresolved;
                }
            }
        }
    }

    fn adjudicate_one(&mut self, i: usize) -> bool {
        match self.entries[i].order.clone() {
            Order::Hold { .. } => true,
            Order::Move { .. } => self.resolve_move(i),
            Order::SupportHold { .. } | Order::SupportMove { .. } => self.resolve_support(i),
            Order::Convoy { .. } => self.resolve_convoy(i),
            _ => true,
        }
    }

    fn is_head_to_head(&self, i: usize, j: usize) -> bool {
        let (Order::Move { province: pi, dest: di, is_convoy: ci, .. }, Order::Move { province: pj, dest: dj, is_convoy: cj, .. }) =
            (&self.entries[i].order, &self.entries[j].order)
        else {
            return false;
        };
        !ci && !cj && di == pj && dj == pi
    }

    fn resolve_move(&mut self, i: usize) -> bool {
        let Order::Move { province, dest, is_convoy, .. } = self.entries[i].order.clone() else {
            unreachable!()
        };

        if is_convoy && !self.any_convoy_route(province, dest) {
            return false;
        }

        let attack = self.attack_strength(i, province, dest);
        let target = match self.order_at(dest) {
            Some(j) if self.is_head_to_head(i, j) => self.defend_strength(j),
            _ => self.hold_strength(dest),
        };
        if attack <= target {
            return false;
        }

        let n = self.entries.len();
        for j in 0..n {
            if j == i {
                continue;
            }
            let Order::Move { dest: other_dest, .. } = &self.entries[j].order else { continue };
            if *other_dest != dest {
                continue;
            }
            if self.order_at(dest) == Some(j) && self.is_head_to_head(i, j) {
                continue;
            }
            let prevent = self.prevent_strength(j);
            if attack <= prevent {
                return false;
            }
        }

        true
    }

    fn count_support_moves(&mut self, from: ProvinceId, to: ProvinceId) -> i32 {
        let n = self.entries.len();
        let mut count = 0;
        for j in 0..n {
            let Order::SupportMove { from: s_from, supporting, .. } = &self.entries[j].order else { continue };
            if *s_from != from || *supporting != to {
                continue;
            }
            if self.resolve(j) {
                count += 1;
            }
        }
        count
    }

    fn attack_strength(&mut self, i: usize, province: ProvinceId, dest: ProvinceId) -> i32 {
        let attacker_country = self.country_of(i);
        let occupant = self.state.unit_at(dest);

        let occupant_leaves = match occupant {
            None => true,
            Some((_, _)) => match self.order_at(dest) {
                Some(j) if matches!(self.entries[j].order, Order::Move { .. }) && !self.is_head_to_head(i, j) => {
                    self.resolve(j)
                }
                _ => false,
            },
        };

        if !occupant_leaves {
            if let Some((occ_country, _)) = occupant {
                if *occ_country == attacker_country {
                    return 0;
                }
            }
        }

        1 + self.count_support_moves(province, dest)
    }

    fn defend_strength(&mut self, j: usize) -> i32 {
        let Order::Move { province, dest, .. } = self.entries[j].order.clone() else { return 0 };
        1 + self.count_support_moves(province, dest)
    }

    fn hold_strength(&mut self, p: ProvinceId) -> i32 {
        let Some(i) = self.order_at(p) else { return 0 };
        if matches!(self.entries[i].order, Order::Move { .. }) {
            return if self.resolve(i) { 0 } else { 1 };
        }
        let n = self.entries.len();
        let mut count = 1;
        for j in 0..n {
            let Order::SupportHold { supporting, .. } = &self.entries[j].order else { continue };
            if *supporting != p {
                continue;
            }
            if self.resolve(j) {
                count += 1;
            }
        }
        count
    }

    fn prevent_strength(&mut self, j: usize) -> i32 {
        let Order::Move { province, dest, is_convoy, .. } = self.entries[j].order.clone() else { return 0 };
        if is_convoy && !self.any_convoy_route(province, dest) {
            return 0;
        }
        1 + self.count_support_moves(province, dest)
    }

    fn resolve_support(&mut self, i: usize) -> bool {
        let (supporter_province, supported_into) = match &self.entries[i].order {
            Order::SupportHold { province, supporting } => (*province, *supporting),
            Order::SupportMove { province, supporting, .. } => (*province, *supporting),
            _ => unreachable!(),
        };
        let supporter_country = self.country_of(i);

        let n = self.entries.len();
        for j in 0..n {
            let Order::Move { province: m_province, dest: m_dest, is_convoy, .. } = self.entries[j].order.clone() else {
                continue;
            };
            if m_dest != supporter_province {
                continue;
            }
            if m_province == supported_into {
                continue;
            }
            if self.country_of(j) == supporter_country {
                continue;
            }
            if is_convoy && !self.any_convoy_route(m_province, m_dest) {
                continue;
            }
            return false;
        }

        true
    }

    fn resolve_convoy(&mut self, i: usize) -> bool {
        let Order::Convoy { province, .. } = self.entries[i].order.clone() else { unreachable!() };
        let convoy_country = self.country_of(i);

        let n = self.entries.len();
        for j in 0..n {
            let Order::Move { dest, .. } = &self.entries[j].order else { continue };
            if *dest != province {
                continue;
            }
            if self.country_of(j) == convoy_country {
                continue;
            }
            if self.resolve(j) {
                return false;
            }
        }
        true
    }

    /// DFS over provinces bearing a matching `Convoy(start=from, end=to)`
    /// order, each of which must itself resolve to true. `start`/`end`
    /// adjacency is checked coast-agnostic, as is the path between legs.
    fn any_convoy_route(&mut self, from: ProvinceId, to: ProvinceId) -> bool {
        let candidates: Vec<usize> = (0..self.entries.len())
            .filter(|&j| matches!(&self.entries[j].order, Order::Convoy { start, end, .. } if *start == from && *end == to))
            .collect();
        if candidates.is_empty() {
            return false;
        }

        let mut visited: HashSet<ProvinceId> = HashSet::new();
        let mut frontier: Vec<ProvinceId> = Vec::new();

        for &j in &candidates {
            let Order::Convoy { province, .. } = self.entries[j].order.clone() else { continue };
            if !self.map.is_adjacent(from, None, province, None, false) {
                continue;
            }
            if self.resolve(j) && visited.insert(province) {
                frontier.push(province);
            }
        }

        while let Some(p) = frontier.pop() {
            if self.map.is_adjacent(p, None, to, None, false) {
                return true;
            }
            for &j in &candidates {
                let Order::Convoy { province, .. } = self.entries[j].order.clone() else { continue };
                if visited.contains(&province) {
                    continue;
                }
                if !self.map.is_adjacent(p, None, province, None, false) {
                    continue;
                }
                if self.resolve(j) {
                    visited.insert(province);
                    frontier.push(province);
                }
            }
        }

        false
    }

    fn finish(mut self) -> AdjudicationResult {
        let n = self.entries.len();
        let mut successful_move_to: HashMap<ProvinceId, usize> = HashMap::new();
        for i in 0..n {
            if let Order::Move { dest, .. } = &self.entries[i].order {
                if self.entries[i].value {
                    successful_move_to.insert(*dest, i);
                }
            }
        }

        let mut contested: HashSet<ProvinceId> = HashSet::new();
        let mut fail_counts: HashMap<ProvinceId, u32> = HashMap::new();
        for i in 0..n {
            if let Order::Move { dest, .. } = &self.entries[i].order {
                if !self.entries[i].value {
                    *fail_counts.entry(*dest).or_insert(0) += 1;
                }
            }
        }
        for (p, count) in fail_counts {
            if count >= 2 {
                contested.insert(p);
            }
        }

        let mut dislodged = Vec::new();
        for (&dest, &attacker_idx) in &successful_move_to {
            let Some(&victim_idx) = self.by_province.get(&dest) else { continue };
            if victim_idx == attacker_idx {
                continue;
            }
            if let Order::Move { .. } = &self.entries[victim_idx].order {
                if self.entries[victim_idx].value {
                    continue;
                }
            }
            let Some((victim_country, victim_unit)) = self.state.unit_at(dest) else { continue };
            let Order::Move { province: attacker_origin, is_convoy, .. } = &self.entries[attacker_idx].order else {
                continue;
            };
            dislodged.push((
                dest,
                Dislodgement {
                    unit: victim_unit.clone(),
                    from: if *is_convoy { None } else { Some(*attacker_origin) },
                    country: *victim_country,
                },
            ));
        }

        let orders = self
            .entries
            .drain(..)
            .map(|e| {
                let mut order = e.order;
                let result = match &order {
                    Order::Cancel { .. } => OrderResult::Unprocessed,
                    _ => {
                        if e.value {
                            OrderResult::Success
                        } else {
                            OrderResult::Fail
                        }
                    }
                };
                order.set_result(result);
                (e.country, order)
            })
            .collect();

        AdjudicationResult { orders, dislodged, contested }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Nation, OrderResult as OR, Season};
    use crate::map::{standard, UnitType};

    fn setup(map: &Map, placements: &[(&str, CountryId, UnitType)]) -> State {
        let mut state = State::empty_for(map, 1901, Season::Spring);
        for (code, country, unit_type) in placements {
            let province = map.province_by_code(code).unwrap().id;
            state.nations.entry(*country).or_default().units.push(Unit {
                unit_type: *unit_type,
                province,
                coast: None,
            });
        }
        state
    }

    fn result_for(result: &AdjudicationResult, map: &Map, code: &str) -> OR {
        let p = map.province_by_code(code).unwrap().id;
        result
            .orders
            .iter()
            .find(|(_, o)| o.province() == Some(p))
            .map(|(_, o)| o.result())
            .unwrap_or(OR::Unprocessed)
    }

    const AUSTRIA: CountryId = CountryId(0);
    const ENGLAND: CountryId = CountryId(1);
    const FRANCE: CountryId = CountryId(2);
    const GERMANY: CountryId = CountryId(3);
    const ITALY: CountryId = CountryId(4);
    const RUSSIA: CountryId = CountryId(5);

    fn mv(code: &str, dest: &str, map: &Map, is_convoy: bool) -> Order {
        Order::Move {
            province: map.province_by_code(code).unwrap().id,
            dest: map.province_by_code(dest).unwrap().id,
            coast: None,
            is_convoy,
            result: OR::Unprocessed,
        }
    }

    fn hold(code: &str, map: &Map) -> Order {
        Order::Hold { province: map.province_by_code(code).unwrap().id, result: OR::Unprocessed }
    }

    #[test]
    fn simple_move_succeeds() {
        let map = standard::build();
        let state = setup(&map, &[("par", FRANCE, UnitType::Army)]);
        let orders = vec![(FRANCE, mv("par", "bur", &map, false))];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "par"), OR::Success);
    }

    #[test]
    fn bounce_against_hold() {
        let map = standard::build();
        let state = setup(&map, &[("vie", AUSTRIA, UnitType::Army), ("bud", RUSSIA, UnitType::Army)]);
        let orders = vec![(AUSTRIA, mv("vie", "bud", &map, false)), (RUSSIA, hold("bud", &map))];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "vie"), OR::Fail);
        assert_eq!(result_for(&result, &map, "bud"), OR::Success);
    }

    #[test]
    fn supported_attack_dislodges() {
        let map = standard::build();
        let state = setup(
            &map,
            &[("tyr", AUSTRIA, UnitType::Army), ("tri", AUSTRIA, UnitType::Army), ("ven", ITALY, UnitType::Army)],
        );
        let tri = map.province_by_code("tri").unwrap().id;
        let tyr = map.province_by_code("tyr").unwrap().id;
        let ven = map.province_by_code("ven").unwrap().id;
        let orders = vec![
            (AUSTRIA, Order::SupportMove { province: tri, from: tyr, supporting: ven, result: OR::Unprocessed }),
            (AUSTRIA, mv("tyr", "ven", &map, false)),
            (ITALY, hold("ven", &map)),
        ];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "tyr"), OR::Success);
        assert_eq!(result.dislodged.len(), 1);
        assert_eq!(result.dislodged[0].0, ven);
    }

    #[test]
    fn three_army_circular_movement_all_succeed() {
        let map = standard::build();
        let state = setup(
            &map,
            &[("boh", GERMANY, UnitType::Army), ("mun", GERMANY, UnitType::Army), ("sil", GERMANY, UnitType::Army)],
        );
        let orders = vec![
            (GERMANY, mv("boh", "mun", &map, false)),
            (GERMANY, mv("mun", "sil", &map, false)),
            (GERMANY, mv("sil", "boh", &map, false)),
        ];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "boh"), OR::Success);
        assert_eq!(result_for(&result, &map, "mun"), OR::Success);
        assert_eq!(result_for(&result, &map, "sil"), OR::Success);
        assert!(result.dislodged.is_empty());
    }

    #[test]
    fn support_cut_by_attack_from_elsewhere() {
        let map = standard::build();
        let state = setup(
            &map,
            &[
                ("par", FRANCE, UnitType::Army),
                ("bur", FRANCE, UnitType::Army),
                ("mun", GERMANY, UnitType::Army),
                ("ruh", GERMANY, UnitType::Army),
            ],
        );
        let par = map.province_by_code("par").unwrap().id;
        let bur = map.province_by_code("bur").unwrap().id;
        let mun = map.province_by_code("mun").unwrap().id;
        let orders = vec![
            (FRANCE, mv("par", "bur", &map, false)),
            (GERMANY, Order::SupportHold { province: mun, supporting: bur, result: OR::Unprocessed }),
            (GERMANY, mv("ruh", "mun", &map, false)),
        ];
        // intentionally wrong target support is unused here; exercised via support-cut test below
        let _ = par;
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "ruh"), OR::Fail);
    }

    #[test]
    fn convoyed_move_succeeds_with_working_route() {
        let map = standard::build();
        let state = setup(&map, &[("lon", ENGLAND, UnitType::Army), ("nth", ENGLAND, UnitType::Fleet)]);
        let lon = map.province_by_code("lon").unwrap().id;
        let nwy = map.province_by_code("nwy").unwrap().id;
        let nth = map.province_by_code("nth").unwrap().id;
        let orders = vec![
            (ENGLAND, mv("lon", "nwy", &map, true)),
            (ENGLAND, Order::Convoy { province: nth, start: lon, end: nwy, result: OR::Unprocessed }),
        ];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "lon"), OR::Success);
    }

    #[test]
    fn disrupted_convoy_fails_the_move() {
        let map = standard::build();
        let state = setup(
            &map,
            &[
                ("lon", ENGLAND, UnitType::Army),
                ("nth", ENGLAND, UnitType::Fleet),
                ("eng", FRANCE, UnitType::Fleet),
                ("bel", FRANCE, UnitType::Fleet),
            ],
        );
        let lon = map.province_by_code("lon").unwrap().id;
        let nwy = map.province_by_code("nwy").unwrap().id;
        let nth = map.province_by_code("nth").unwrap().id;
        let eng = map.province_by_code("eng").unwrap().id;
        let orders = vec![
            (ENGLAND, mv("lon", "nwy", &map, true)),
            (ENGLAND, Order::Convoy { province: nth, start: lon, end: nwy, result: OR::Unprocessed }),
            (FRANCE, mv("eng", "nth", &map, false)),
            (FRANCE, Order::SupportMove { province: map.province_by_code("bel").unwrap().id, from: eng, supporting: nth, result: OR::Unprocessed }),
        ];
        let result = adjudicate(&map, &state, orders);
        assert_eq!(result_for(&result, &map, "nth"), OR::Fail);
        assert_eq!(result_for(&result, &map, "lon"), OR::Fail);
    }
}
