//! Order model: the tagged variants a unit (or a country, for builds and
//! passes) can submit, their legality enumeration, and their canonical
//! JSON export form.

use serde::{Deserialize, Serialize};

use crate::map::{CountryId, Map, ProvinceId, UnitType};

use super::{Nation, State, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderResult {
    Unprocessed,
    Success,
    Fail,
    Dislodged,
}

/// One order. `province` is the ordered unit's current position for every
/// unit-order case; `Build`/`Disband`/`Pass` act on behalf of a country
/// rather than an existing unit, and `Cancel` withdraws a previously
/// submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Order {
    Hold {
        province: ProvinceId,
        #[serde(skip)]
        result: OrderResult,
    },
    Move {
        province: ProvinceId,
        dest: ProvinceId,
        coast: Option<String>,
        #[serde(rename = "isConvoy")]
        is_convoy: bool,
        #[serde(skip)]
        result: OrderResult,
    },
    SupportHold {
        province: ProvinceId,
        supporting: ProvinceId,
        #[serde(skip)]
        result: OrderResult,
    },
    SupportMove {
        province: ProvinceId,
        from: ProvinceId,
        supporting: ProvinceId,
        #[serde(skip)]
        result: OrderResult,
    },
    Convoy {
        province: ProvinceId,
        start: ProvinceId,
        end: ProvinceId,
        #[serde(skip)]
        result: OrderResult,
    },
    Retreat {
        province: ProvinceId,
        dest: ProvinceId,
        coast: Option<String>,
        #[serde(skip)]
        result: OrderResult,
    },
    Build {
        country: CountryId,
        province: ProvinceId,
        #[serde(rename = "unitType")]
        unit_type: UnitType,
        coast: Option<String>,
        #[serde(skip)]
        result: OrderResult,
    },
    Disband {
        country: CountryId,
        unit: ProvinceId,
        #[serde(skip)]
        result: OrderResult,
    },
    Pass {
        country: CountryId,
        #[serde(skip)]
        result: OrderResult,
    },
    Cancel {
        province: ProvinceId,
    },
}

impl Order {
    /// Stable identity used for logging and as the adjudicator's
    /// dependency-stack key. Deterministic given the order's contents.
    pub fn id(&self) -> String {
        match self {
            Order::Hold { province, .. } => format!("hold:{}", province.0),
            Order::Move { province, dest, is_convoy, .. } => {
                format!("move:{}:{}:{}", province.0, dest.0, is_convoy)
            }
            Order::SupportHold { province, supporting, .. } => {
                format!("supporthold:{}:{}", province.0, supporting.0)
            }
            Order::SupportMove { province, from, supporting, .. } => {
                format!("supportmove:{}:{}:{}", province.0, from.0, supporting.0)
            }
            Order::Convoy { province, start, end, .. } => {
                format!("convoy:{}:{}:{}", province.0, start.0, end.0)
            }
            Order::Retreat { province, dest, .. } => format!("retreat:{}:{}", province.0, dest.0),
            Order::Build { country, province, .. } => format!("build:{}:{}", country.0, province.0),
            Order::Disband { country, unit, .. } => format!("disband:{}:{}", country.0, unit.0),
            Order::Pass { country, .. } => format!("pass:{}", country.0),
            Order::Cancel { province } => format!("cancel:{}", province.0),
        }
    }

    pub fn province(&self) -> Option<ProvinceId> {
        match self {
            Order::Hold { province, .. }
            | Order::Move { province, .. }
            | Order::SupportHold { province, .. }
            | Order::SupportMove { province, .. }
            | Order::Convoy { province, .. }
            | Order::Retreat { province, .. }
            | Order::Build { province, .. }
            | Order::Cancel { province } => Some(*province),
            Order::Disband { unit, .. } => Some(*unit),
            Order::Pass { .. } => None,
        }
    }

    pub fn result(&self) -> OrderResult {
        match self {
            Order::Hold { result, .. }
            | Order::Move { result, .. }
            | Order::SupportHold { result, .. }
            | Order::SupportMove { result, .. }
            | Order::Convoy { result, .. }
            | Order::Retreat { result, .. }
            | Order::Build { result, .. }
            | Order::Disband { result, .. }
            | Order::Pass { result, .. } => *result,
            Order::Cancel { .. } => OrderResult::Unprocessed,
        }
    }

    pub fn set_result(&mut self, new: OrderResult) {
        match self {
            Order::Hold { result, .. }
            | Order::Move { result, .. }
            | Order::SupportHold { result, .. }
            | Order::SupportMove { result, .. }
            | Order::Convoy { result, .. }
            | Order::Retreat { result, .. }
            | Order::Build { result, .. }
            | Order::Disband { result, .. }
            | Order::Pass { result, .. } => *result = new,
            Order::Cancel { .. } => {}
        }
    }

    /// Canonical serialization form used both for persistence and for the
    /// sanitizer's public view (§4.F): a JSON object tagged by `type`.
    pub fn export(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("Order serialization is infallible")
    }
}

/// Enumerates every syntactically valid order for `unit` standing in
/// `state` on `map` — occupancy and ownership are deliberately not
/// consulted (§4.C): those are adjudication-time concerns, not
/// submission-time ones.
pub fn valid_orders(map: &Map, state: &State, unit: &Unit) -> Vec<Order> {
    let p = unit.province;
    let mut out = vec![Order::Hold { province: p, result: OrderResult::Unprocessed }];

    let is_fleet = unit.unit_type == UnitType::Fleet;

    for (dest, dest_coast) in map.adjacent(p, unit.coast.as_deref(), is_fleet) {
        if map.province(dest).map(|pr| pr.has_coasts()).unwrap_or(false) && is_fleet {
            let coasts = map.fleet_coasts_to(p, unit.coast.as_deref(), dest);
            if coasts.is_empty() {
                out.push(Order::Move {
                    province: p,
                    dest,
                    coast: dest_coast,
                    is_convoy: false,
                    result: OrderResult::Unprocessed,
                });
            } else {
                for c in coasts {
                    out.push(Order::Move {
                        province: p,
                        dest,
                        coast: Some(c),
                        is_convoy: false,
                        result: OrderResult::Unprocessed,
                    });
                }
            }
        } else {
            out.push(Order::Move {
                province: p,
                dest,
                coast: dest_coast,
                is_convoy: false,
                result: OrderResult::Unprocessed,
            });
        }
    }

    if !is_fleet {
        for dest in convoy_reachable(map, state, p) {
            out.push(Order::Move { province: p, dest, coast: None, is_convoy: true, result: OrderResult::Unprocessed });
        }
    }

    for reachable in map.adjacent_ignore_coasts(p) {
        out.push(Order::SupportHold { province: p, supporting: reachable, result: OrderResult::Unprocessed });
    }

    for (other_province, other_unit) in occupied_provinces(state) {
        if other_province == p {
            continue;
        }
        for (to, _) in map.adjacent(p, unit.coast.as_deref(), is_fleet) {
            if could_move(map, state, &other_unit, to) {
                out.push(Order::SupportMove {
                    province: p,
                    from: other_province,
                    supporting: to,
                    result: OrderResult::Unprocessed,
                });
            }
        }
    }

    if is_fleet {
        if let Ok(province) = map.province(p) {
            if province.kind == crate::map::ProvinceKind::Sea || province.kind == crate::map::ProvinceKind::Coastal {
                for start in map.adjacent_ignore_coasts(p) {
                    if !is_coastal_land(map, start) {
                        continue;
                    }
                    for end in map.adjacent_ignore_coasts(p) {
                        if end == start || !is_coastal_land(map, end) {
                            continue;
                        }
                        out.push(Order::Convoy { province: p, start, end, result: OrderResult::Unprocessed });
                    }
                }
            }
        }
    }

    out
}

fn is_coastal_land(map: &Map, p: ProvinceId) -> bool {
    map.province(p)
        .map(|pr| pr.kind != crate::map::ProvinceKind::Sea)
        .unwrap_or(false)
}

fn could_move(map: &Map, state: &State, unit: &Unit, to: ProvinceId) -> bool {
    let is_fleet = unit.unit_type == UnitType::Fleet;
    let direct = map
        .adjacent(unit.province, unit.coast.as_deref(), is_fleet)
        .into_iter()
        .any(|(p, _)| p == to);
    if direct {
        return true;
    }
    !is_fleet && convoy_reachable(map, state, unit.province).contains(&to)
}

fn occupied_provinces(state: &State) -> Vec<(ProvinceId, Unit)> {
    state
        .nations
        .values()
        .flat_map(|n: &Nation| n.units.iter().map(|u| (u.province, u.clone())))
        .collect()
}

/// Armies reachable by at least one potential convoy chain through sea
/// provinces currently occupied by a fleet, regardless of whether those
/// fleets have been (or will be) ordered to convoy. A reachability check
/// only — actual success is decided at adjudication.
fn convoy_reachable(map: &Map, state: &State, from: ProvinceId) -> Vec<ProvinceId> {
    use std::collections::{HashSet, VecDeque};

    let fleet_provinces: HashSet<ProvinceId> = state
        .nations
        .values()
        .flat_map(|n| n.units.iter())
        .filter(|u| u.unit_type == UnitType::Fleet)
        .map(|u| u.province)
        .filter(|p| {
            map.province(*p)
                .map(|pr| pr.kind == crate::map::ProvinceKind::Sea || pr.kind == crate::map::ProvinceKind::Coastal)
                .unwrap_or(false)
        })
        .collect();

    let mut reachable = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(from);
    visited.insert(from);

    while let Some(p) = queue.pop_front() {
        for next in map.adjacent_ignore_coasts(p) {
            if visited.contains(&next) {
                continue;
            }
            visited.insert(next);
            if fleet_provinces.contains(&next) {
                queue.push_back(next);
            } else if is_coastal_land(map, next) && next != from {
                reachable.push(next);
            }
        }
    }

    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::standard;

    fn unit_at(map: &Map, code: &str, unit_type: UnitType) -> Unit {
        Unit { unit_type, province: map.province_by_code(code).unwrap().id, coast: None }
    }

    #[test]
    fn hold_always_present() {
        let map = standard::build();
        let state = State::empty_for(&map, 1901, super::super::Season::Spring);
        let u = unit_at(&map, "par", UnitType::Army);
        let orders = valid_orders(&map, &state, &u);
        assert!(orders.iter().any(|o| matches!(o, Order::Hold { .. })));
    }

    #[test]
    fn army_move_options_are_adjacent_land_routes() {
        let map = standard::build();
        let state = State::empty_for(&map, 1901, super::super::Season::Spring);
        let u = unit_at(&map, "par", UnitType::Army);
        let orders = valid_orders(&map, &state, &u);
        let moves: Vec<ProvinceId> = orders
            .iter()
            .filter_map(|o| match o {
                Order::Move { dest, is_convoy: false, .. } => Some(*dest),
                _ => None,
            })
            .collect();
        let bur = map.province_by_code("bur").unwrap().id;
        assert!(moves.contains(&bur));
    }

    #[test]
    fn fleet_split_coast_move_requires_coast() {
        let map = standard::build();
        let state = State::empty_for(&map, 1901, super::super::Season::Spring);
        let mut u = unit_at(&map, "mar", UnitType::Fleet);
        u.coast = None;
        let orders = valid_orders(&map, &state, &u);
        let spa = map.province_by_code("spa").unwrap().id;
        let spa_moves: Vec<&Option<String>> = orders
            .iter()
            .filter_map(|o| match o {
                Order::Move { dest, coast, is_convoy: false, .. } if *dest == spa => Some(coast),
                _ => None,
            })
            .collect();
        assert!(spa_moves.iter().all(|c| c.is_some()));
    }

    #[test]
    fn order_id_is_stable() {
        let map = standard::build();
        let par = map.province_by_code("par").unwrap().id;
        let bur = map.province_by_code("bur").unwrap().id;
        let a = Order::Move { province: par, dest: bur, coast: None, is_convoy: false, result: OrderResult::Unprocessed };
        let b = Order::Move { province: par, dest: bur, coast: None, is_convoy: false, result: OrderResult::Success };
        assert_eq!(a.id(), b.id());
    }
}
