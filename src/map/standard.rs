//! Builds the classic 34-supply-center, 7-country board from
//! [`super::standard_data`] and parses it through [`super::Map::from_dipmap_json`]'s
//! underlying builder — the same path any externally supplied `.dipmap`
//! file goes through. No code downstream of this module is aware the
//! standard board is compiled in rather than loaded from disk.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::dipmap::{
    DipmapCountry, DipmapFile, DipmapInfo, DipmapProvince, DipmapRoute, RouteKind,
};
use super::standard_data::{self, StdCoast, StdCountry, StdKind};
use super::{Map, ProvinceKind};

fn coast_name(c: StdCoast) -> Option<String> {
    match c {
        StdCoast::None => None,
        other => Some(other.name().to_string()),
    }
}

fn province_kind(k: StdKind) -> ProvinceKind {
    match k {
        StdKind::Land => ProvinceKind::Land,
        StdKind::Sea => ProvinceKind::Sea,
        StdKind::Coastal => ProvinceKind::Coastal,
    }
}

fn dipmap_file() -> DipmapFile {
    let provinces = standard_data::ALL_PROVINCES
        .iter()
        .map(|&p| {
            let info = &standard_data::PROVINCE_INFO[p as usize];
            DipmapProvince {
                id: info.abbr.to_string(),
                name: Some(info.name.to_string()),
                kind: province_kind(info.kind),
                coasts: if info.coasts.is_empty() {
                    None
                } else {
                    Some(info.coasts.iter().map(|c| c.name().to_string()).collect())
                },
                start_unit: None,
                water: matches!(info.kind, StdKind::Sea),
                is_supply_center: Some(info.is_supply_center),
            }
        })
        .collect();

    let countries = [
        StdCountry::Austria,
        StdCountry::England,
        StdCountry::France,
        StdCountry::Germany,
        StdCountry::Italy,
        StdCountry::Russia,
        StdCountry::Turkey,
    ]
    .iter()
    .map(|&country| {
        let supply_centers = standard_data::PROVINCE_INFO
            .iter()
            .filter(|info| info.home_country == Some(country))
            .map(|info| info.abbr.to_string())
            .collect();
        DipmapCountry { id: country.id().to_string(), name: None, supply_centers }
    })
    .collect();

    let mut seen: HashSet<(u8, Option<String>, u8, Option<String>)> = HashSet::new();
    let mut routes = Vec::new();
    for a in standard_data::ADJACENCIES.iter() {
        let from = a.from as u8;
        let to = a.to as u8;
        let from_coast = coast_name(a.from_coast);
        let to_coast = coast_name(a.to_coast);
        let reverse = (to, to_coast.clone(), from, from_coast.clone());
        if seen.contains(&reverse) {
            continue;
        }
        seen.insert((from, from_coast.clone(), to, to_coast.clone()));

        let kind = match (a.army_ok, a.fleet_ok) {
            (true, true) => RouteKind::Convoy,
            (true, false) => RouteKind::Land,
            (false, true) => RouteKind::Sea,
            (false, false) => unreachable!("adjacency entry with neither army nor fleet passable"),
        };

        routes.push(DipmapRoute {
            p0: standard_data::PROVINCE_INFO[a.from as usize].abbr.to_string(),
            p1: standard_data::PROVINCE_INFO[a.to as usize].abbr.to_string(),
            p0_coast: from_coast,
            p1_coast: to_coast,
            kind,
        });
    }

    DipmapFile {
        info: DipmapInfo {
            name: "standard".to_string(),
            date: "1901-spring-movement".to_string(),
            image: None,
        },
        provinces,
        routes,
        countries,
        country_groups: None,
        player_configurations: None,
    }
}

/// Builds a fresh `Map` for the standard board. Prefer [`standard`] unless
/// a non-shared instance is needed (e.g. for a test that mutates it).
pub fn build() -> Map {
    Map::from_parsed(dipmap_file()).expect("built-in standard board must parse")
}

static STANDARD: LazyLock<Map> = LazyLock::new(build);

/// The shared standard-board instance, used by [`Map::standard`].
pub(super) fn instance() -> &'static Map {
    &STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_error() {
        let map = build();
        assert_eq!(map.name, "standard");
    }

    #[test]
    fn standard_accessor_is_stable() {
        let a = instance() as *const Map;
        let b = instance() as *const Map;
        assert_eq!(a, b);
    }
}
