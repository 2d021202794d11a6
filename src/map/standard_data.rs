//! Raw province and adjacency tables for the classic 34-supply-center,
//! 7-country board.
//!
//! This module is the one place the crate hardcodes a board. Everything
//! downstream (`Map`, the adjudicator, move generation) operates on the
//! generic [`crate::map::Map`] model built from these tables by
//! [`super::standard::build`]; nothing outside this file knows that the
//! standard board happens to have 75 provinces.

/// The number of provinces on the standard board.
pub const PROVINCE_COUNT: usize = 75;

/// The number of supply centers on the standard board.
pub const SUPPLY_CENTER_COUNT: usize = 34;

/// A province index on the standard board, in alphabetical order by
/// 3-letter abbreviation. `#[repr(u8)]` so it doubles as an array index
/// while this table is being converted into a generic `Map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StdProvince {
    Adr = 0,
    Aeg = 1,
    Alb = 2,
    Ank = 3,
    Apu = 4,
    Arm = 5,
    Bal = 6,
    Bar = 7,
    Bel = 8,
    Ber = 9,
    Bla = 10,
    Boh = 11,
    Bot = 12,
    Bre = 13,
    Bud = 14,
    Bul = 15,
    Bur = 16,
    Cly = 17,
    Con = 18,
    Den = 19,
    Eas = 20,
    Edi = 21,
    Eng = 22,
    Fin = 23,
    Gal = 24,
    Gas = 25,
    Gol = 26,
    Gre = 27,
    Hel = 28,
    Hol = 29,
    Ion = 30,
    Iri = 31,
    Kie = 32,
    Lon = 33,
    Lvn = 34,
    Lvp = 35,
    Mao = 36,
    Mar = 37,
    Mos = 38,
    Mun = 39,
    Naf = 40,
    Nao = 41,
    Nap = 42,
    Nrg = 43,
    Nth = 44,
    Nwy = 45,
    Par = 46,
    Pic = 47,
    Pie = 48,
    Por = 49,
    Pru = 50,
    Rom = 51,
    Ruh = 52,
    Rum = 53,
    Ser = 54,
    Sev = 55,
    Sil = 56,
    Ska = 57,
    Smy = 58,
    Spa = 59,
    Stp = 60,
    Swe = 61,
    Syr = 62,
    Tri = 63,
    Tun = 64,
    Tus = 65,
    Tyr = 66,
    Tys = 67,
    Ukr = 68,
    Ven = 69,
    Vie = 70,
    Wal = 71,
    War = 72,
    Wes = 73,
    Yor = 74,
}

pub const ALL_PROVINCES: [StdProvince; PROVINCE_COUNT] = {
    use StdProvince::*;
    [
        Adr, Aeg, Alb, Ank, Apu, Arm, Bal, Bar, Bel, Ber, Bla, Boh, Bot, Bre, Bud, Bul, Bur, Cly,
        Con, Den, Eas, Edi, Eng, Fin, Gal, Gas, Gol, Gre, Hel, Hol, Ion, Iri, Kie, Lon, Lvn, Lvp,
        Mao, Mar, Mos, Mun, Naf, Nao, Nap, Nrg, Nth, Nwy, Par, Pic, Pie, Por, Pru, Rom, Ruh, Rum,
        Ser, Sev, Sil, Ska, Smy, Spa, Stp, Swe, Syr, Tri, Tun, Tus, Tyr, Tys, Ukr, Ven, Vie, Wal,
        War, Wes, Yor,
    ]
};

/// Coast specifier for split-coast provinces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdCoast {
    None,
    North,
    South,
    East,
}

impl StdCoast {
    pub const fn name(self) -> &'static str {
        match self {
            StdCoast::None => "",
            StdCoast::North => "nc",
            StdCoast::South => "sc",
            StdCoast::East => "ec",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdKind {
    Land,
    Sea,
    Coastal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StdCountry {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

pub const ALL_COUNTRIES: [StdCountry; 7] = [
    StdCountry::Austria,
    StdCountry::England,
    StdCountry::France,
    StdCountry::Germany,
    StdCountry::Italy,
    StdCountry::Russia,
    StdCountry::Turkey,
];

impl StdCountry {
    pub const fn id(self) -> &'static str {
        match self {
            StdCountry::Austria => "austria",
            StdCountry::England => "england",
            StdCountry::France => "france",
            StdCountry::Germany => "germany",
            StdCountry::Italy => "italy",
            StdCountry::Russia => "russia",
            StdCountry::Turkey => "turkey",
        }
    }
}

pub struct StdProvinceInfo {
    pub abbr: &'static str,
    pub name: &'static str,
    pub kind: StdKind,
    pub is_supply_center: bool,
    pub home_country: Option<StdCountry>,
    pub coasts: &'static [StdCoast],
}

pub static PROVINCE_INFO: [StdProvinceInfo; PROVINCE_COUNT] = [
    StdProvinceInfo { abbr: "adr", name: "Adriatic Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "aeg", name: "Aegean Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "alb", name: "Albania", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ank", name: "Ankara", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Turkey), coasts: &[] },
    StdProvinceInfo { abbr: "apu", name: "Apulia", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "arm", name: "Armenia", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "bal", name: "Baltic Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "bar", name: "Barents Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "bel", name: "Belgium", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ber", name: "Berlin", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Germany), coasts: &[] },
    StdProvinceInfo { abbr: "bla", name: "Black Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "boh", name: "Bohemia", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "bot", name: "Gulf of Bothnia", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "bre", name: "Brest", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::France), coasts: &[] },
    StdProvinceInfo { abbr: "bud", name: "Budapest", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::Austria), coasts: &[] },
    StdProvinceInfo { abbr: "bul", name: "Bulgaria", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[StdCoast::East, StdCoast::South] },
    StdProvinceInfo { abbr: "bur", name: "Burgundy", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "cly", name: "Clyde", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "con", name: "Constantinople", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Turkey), coasts: &[] },
    StdProvinceInfo { abbr: "den", name: "Denmark", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "eas", name: "Eastern Mediterranean", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "edi", name: "Edinburgh", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::England), coasts: &[] },
    StdProvinceInfo { abbr: "eng", name: "English Channel", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "fin", name: "Finland", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "gal", name: "Galicia", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "gas", name: "Gascony", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "gol", name: "Gulf of Lyon", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "gre", name: "Greece", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "hel", name: "Heligoland Bight", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "hol", name: "Holland", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ion", name: "Ionian Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "iri", name: "Irish Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "kie", name: "Kiel", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Germany), coasts: &[] },
    StdProvinceInfo { abbr: "lon", name: "London", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::England), coasts: &[] },
    StdProvinceInfo { abbr: "lvn", name: "Livonia", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "lvp", name: "Liverpool", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::England), coasts: &[] },
    StdProvinceInfo { abbr: "mao", name: "Mid-Atlantic Ocean", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "mar", name: "Marseilles", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::France), coasts: &[] },
    StdProvinceInfo { abbr: "mos", name: "Moscow", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::Russia), coasts: &[] },
    StdProvinceInfo { abbr: "mun", name: "Munich", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::Germany), coasts: &[] },
    StdProvinceInfo { abbr: "naf", name: "North Africa", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "nao", name: "North Atlantic Ocean", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "nap", name: "Naples", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Italy), coasts: &[] },
    StdProvinceInfo { abbr: "nrg", name: "Norwegian Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "nth", name: "North Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "nwy", name: "Norway", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "par", name: "Paris", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::France), coasts: &[] },
    StdProvinceInfo { abbr: "pic", name: "Picardy", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "pie", name: "Piedmont", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "por", name: "Portugal", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "pru", name: "Prussia", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "rom", name: "Rome", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Italy), coasts: &[] },
    StdProvinceInfo { abbr: "ruh", name: "Ruhr", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "rum", name: "Rumania", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ser", name: "Serbia", kind: StdKind::Land, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "sev", name: "Sevastopol", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Russia), coasts: &[] },
    StdProvinceInfo { abbr: "sil", name: "Silesia", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ska", name: "Skagerrak", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "smy", name: "Smyrna", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Turkey), coasts: &[] },
    StdProvinceInfo { abbr: "spa", name: "Spain", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[StdCoast::North, StdCoast::South] },
    StdProvinceInfo { abbr: "stp", name: "St. Petersburg", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Russia), coasts: &[StdCoast::North, StdCoast::South] },
    StdProvinceInfo { abbr: "swe", name: "Sweden", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "syr", name: "Syria", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "tri", name: "Trieste", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Austria), coasts: &[] },
    StdProvinceInfo { abbr: "tun", name: "Tunisia", kind: StdKind::Coastal, is_supply_center: true, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "tus", name: "Tuscany", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "tyr", name: "Tyrolia", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "tys", name: "Tyrrhenian Sea", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ukr", name: "Ukraine", kind: StdKind::Land, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "ven", name: "Venice", kind: StdKind::Coastal, is_supply_center: true, home_country: Some(StdCountry::Italy), coasts: &[] },
    StdProvinceInfo { abbr: "vie", name: "Vienna", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::Austria), coasts: &[] },
    StdProvinceInfo { abbr: "wal", name: "Wales", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "war", name: "Warsaw", kind: StdKind::Land, is_supply_center: true, home_country: Some(StdCountry::Russia), coasts: &[] },
    StdProvinceInfo { abbr: "wes", name: "Western Mediterranean", kind: StdKind::Sea, is_supply_center: false, home_country: None, coasts: &[] },
    StdProvinceInfo { abbr: "yor", name: "Yorkshire", kind: StdKind::Coastal, is_supply_center: false, home_country: None, coasts: &[] },
];

/// One directed edge: (from, from_coast) -> (to, to_coast) with passability flags.
/// Symmetric: every entry has a matching reverse entry.
#[derive(Debug, Clone, Copy)]
pub struct StdAdjacency {
    pub from: StdProvince,
    pub from_coast: StdCoast,
    pub to: StdProvince,
    pub to_coast: StdCoast,
    pub army_ok: bool,
    pub fleet_ok: bool,
}

const fn fleet(from: StdProvince, fc: StdCoast, to: StdProvince, tc: StdCoast) -> StdAdjacency {
    StdAdjacency { from, from_coast: fc, to, to_coast: tc, army_ok: false, fleet_ok: true }
}
const fn army(from: StdProvince, to: StdProvince) -> StdAdjacency {
    StdAdjacency { from, from_coast: StdCoast::None, to, to_coast: StdCoast::None, army_ok: true, fleet_ok: false }
}
const fn both(from: StdProvince, to: StdProvince) -> StdAdjacency {
    StdAdjacency { from, from_coast: StdCoast::None, to, to_coast: StdCoast::None, army_ok: true, fleet_ok: true }
}

const N: StdCoast = StdCoast::None;
const NC: StdCoast = StdCoast::North;
const SC: StdCoast = StdCoast::South;
const EC: StdCoast = StdCoast::East;

use StdProvince::*;

pub const ADJACENCY_COUNT: usize = 434;

/// Complete adjacency table for the standard board, grouped the way the
/// underlying rulebook graph is usually transcribed: sea-to-sea,
/// sea-to-coastal, inland-to-inland, inland-to-coastal, coastal-both,
/// coastal-fleet-only, coastal-army-only.
pub static ADJACENCIES: [StdAdjacency; ADJACENCY_COUNT] = [
    fleet(Adr, N, Ion, N), fleet(Ion, N, Adr, N),
    fleet(Aeg, N, Eas, N), fleet(Eas, N, Aeg, N),
    fleet(Aeg, N, Ion, N), fleet(Ion, N, Aeg, N),
    fleet(Bal, N, Bot, N), fleet(Bot, N, Bal, N),
    fleet(Eng, N, Iri, N), fleet(Iri, N, Eng, N),
    fleet(Eng, N, Mao, N), fleet(Mao, N, Eng, N),
    fleet(Eng, N, Nth, N), fleet(Nth, N, Eng, N),
    fleet(Gol, N, Tys, N), fleet(Tys, N, Gol, N),
    fleet(Gol, N, Wes, N), fleet(Wes, N, Gol, N),
    fleet(Hel, N, Nth, N), fleet(Nth, N, Hel, N),
    fleet(Ion, N, Eas, N), fleet(Eas, N, Ion, N),
    fleet(Ion, N, Tys, N), fleet(Tys, N, Ion, N),
    fleet(Iri, N, Mao, N), fleet(Mao, N, Iri, N),
    fleet(Iri, N, Nao, N), fleet(Nao, N, Iri, N),
    fleet(Mao, N, Nao, N), fleet(Nao, N, Mao, N),
    fleet(Mao, N, Wes, N), fleet(Wes, N, Mao, N),
    fleet(Nao, N, Nrg, N), fleet(Nrg, N, Nao, N),
    fleet(Nth, N, Nrg, N), fleet(Nrg, N, Nth, N),
    fleet(Nth, N, Ska, N), fleet(Ska, N, Nth, N),
    fleet(Nrg, N, Bar, N), fleet(Bar, N, Nrg, N),
    fleet(Tys, N, Wes, N), fleet(Wes, N, Tys, N),
    fleet(Adr, N, Alb, N), fleet(Alb, N, Adr, N),
    fleet(Adr, N, Apu, N), fleet(Apu, N, Adr, N),
    fleet(Adr, N, Tri, N), fleet(Tri, N, Adr, N),
    fleet(Adr, N, Ven, N), fleet(Ven, N, Adr, N),
    fleet(Aeg, N, Bul, SC), fleet(Bul, SC, Aeg, N),
    fleet(Aeg, N, Con, N), fleet(Con, N, Aeg, N),
    fleet(Aeg, N, Gre, N), fleet(Gre, N, Aeg, N),
    fleet(Aeg, N, Smy, N), fleet(Smy, N, Aeg, N),
    fleet(Bal, N, Ber, N), fleet(Ber, N, Bal, N),
    fleet(Bal, N, Den, N), fleet(Den, N, Bal, N),
    fleet(Bal, N, Kie, N), fleet(Kie, N, Bal, N),
    fleet(Bal, N, Lvn, N), fleet(Lvn, N, Bal, N),
    fleet(Bal, N, Pru, N), fleet(Pru, N, Bal, N),
    fleet(Bal, N, Swe, N), fleet(Swe, N, Bal, N),
    fleet(Bar, N, Nwy, N), fleet(Nwy, N, Bar, N),
    fleet(Bar, N, Stp, NC), fleet(Stp, NC, Bar, N),
    fleet(Bla, N, Ank, N), fleet(Ank, N, Bla, N),
    fleet(Bla, N, Arm, N), fleet(Arm, N, Bla, N),
    fleet(Bla, N, Bul, EC), fleet(Bul, EC, Bla, N),
    fleet(Bla, N, Con, N), fleet(Con, N, Bla, N),
    fleet(Bla, N, Rum, N), fleet(Rum, N, Bla, N),
    fleet(Bla, N, Sev, N), fleet(Sev, N, Bla, N),
    fleet(Bot, N, Fin, N), fleet(Fin, N, Bot, N),
    fleet(Bot, N, Lvn, N), fleet(Lvn, N, Bot, N),
    fleet(Bot, N, Stp, SC), fleet(Stp, SC, Bot, N),
    fleet(Bot, N, Swe, N), fleet(Swe, N, Bot, N),
    fleet(Eas, N, Smy, N), fleet(Smy, N, Eas, N),
    fleet(Eas, N, Syr, N), fleet(Syr, N, Eas, N),
    fleet(Eng, N, Bel, N), fleet(Bel, N, Eng, N),
    fleet(Eng, N, Bre, N), fleet(Bre, N, Eng, N),
    fleet(Eng, N, Lon, N), fleet(Lon, N, Eng, N),
    fleet(Eng, N, Pic, N), fleet(Pic, N, Eng, N),
    fleet(Eng, N, Wal, N), fleet(Wal, N, Eng, N),
    fleet(Gol, N, Mar, N), fleet(Mar, N, Gol, N),
    fleet(Gol, N, Pie, N), fleet(Pie, N, Gol, N),
    fleet(Gol, N, Spa, SC), fleet(Spa, SC, Gol, N),
    fleet(Gol, N, Tus, N), fleet(Tus, N, Gol, N),
    fleet(Hel, N, Den, N), fleet(Den, N, Hel, N),
    fleet(Hel, N, Hol, N), fleet(Hol, N, Hel, N),
    fleet(Hel, N, Kie, N), fleet(Kie, N, Hel, N),
    fleet(Ion, N, Alb, N), fleet(Alb, N, Ion, N),
    fleet(Ion, N, Apu, N), fleet(Apu, N, Ion, N),
    fleet(Ion, N, Gre, N), fleet(Gre, N, Ion, N),
    fleet(Ion, N, Nap, N), fleet(Nap, N, Ion, N),
    fleet(Ion, N, Tun, N), fleet(Tun, N, Ion, N),
    fleet(Iri, N, Lvp, N), fleet(Lvp, N, Iri, N),
    fleet(Iri, N, Wal, N), fleet(Wal, N, Iri, N),
    fleet(Mao, N, Bre, N), fleet(Bre, N, Mao, N),
    fleet(Mao, N, Gas, N), fleet(Gas, N, Mao, N),
    fleet(Mao, N, Naf, N), fleet(Naf, N, Mao, N),
    fleet(Mao, N, Por, N), fleet(Por, N, Mao, N),
    fleet(Mao, N, Spa, NC), fleet(Spa, NC, Mao, N),
    fleet(Mao, N, Spa, SC), fleet(Spa, SC, Mao, N),
    fleet(Nao, N, Cly, N), fleet(Cly, N, Nao, N),
    fleet(Nao, N, Lvp, N), fleet(Lvp, N, Nao, N),
    fleet(Nth, N, Bel, N), fleet(Bel, N, Nth, N),
    fleet(Nth, N, Den, N), fleet(Den, N, Nth, N),
    fleet(Nth, N, Edi, N), fleet(Edi, N, Nth, N),
    fleet(Nth, N, Hol, N), fleet(Hol, N, Nth, N),
    fleet(Nth, N, Lon, N), fleet(Lon, N, Nth, N),
    fleet(Nth, N, Nwy, N), fleet(Nwy, N, Nth, N),
    fleet(Nth, N, Yor, N), fleet(Yor, N, Nth, N),
    fleet(Nrg, N, Cly, N), fleet(Cly, N, Nrg, N),
    fleet(Nrg, N, Edi, N), fleet(Edi, N, Nrg, N),
    fleet(Nrg, N, Nwy, N), fleet(Nwy, N, Nrg, N),
    fleet(Ska, N, Den, N), fleet(Den, N, Ska, N),
    fleet(Ska, N, Nwy, N), fleet(Nwy, N, Ska, N),
    fleet(Ska, N, Swe, N), fleet(Swe, N, Ska, N),
    fleet(Tys, N, Nap, N), fleet(Nap, N, Tys, N),
    fleet(Tys, N, Rom, N), fleet(Rom, N, Tys, N),
    fleet(Tys, N, Tun, N), fleet(Tun, N, Tys, N),
    fleet(Tys, N, Tus, N), fleet(Tus, N, Tys, N),
    fleet(Wes, N, Naf, N), fleet(Naf, N, Wes, N),
    fleet(Wes, N, Spa, SC), fleet(Spa, SC, Wes, N),
    fleet(Wes, N, Tun, N), fleet(Tun, N, Wes, N),
    army(Boh, Gal), army(Gal, Boh),
    army(Boh, Mun), army(Mun, Boh),
    army(Boh, Sil), army(Sil, Boh),
    army(Boh, Tyr), army(Tyr, Boh),
    army(Boh, Vie), army(Vie, Boh),
    army(Bud, Gal), army(Gal, Bud),
    army(Bud, Vie), army(Vie, Bud),
    army(Bur, Mun), army(Mun, Bur),
    army(Bur, Par), army(Par, Bur),
    army(Bur, Ruh), army(Ruh, Bur),
    army(Gal, Sil), army(Sil, Gal),
    army(Gal, Ukr), army(Ukr, Gal),
    army(Gal, Vie), army(Vie, Gal),
    army(Gal, War), army(War, Gal),
    army(Mos, Ukr), army(Ukr, Mos),
    army(Mos, War), army(War, Mos),
    army(Mun, Ruh), army(Ruh, Mun),
    army(Mun, Sil), army(Sil, Mun),
    army(Mun, Tyr), army(Tyr, Mun),
    army(Sil, War), army(War, Sil),
    army(Tyr, Vie), army(Vie, Tyr),
    army(Ukr, War), army(War, Ukr),
    army(Bud, Rum), army(Rum, Bud),
    army(Bud, Ser), army(Ser, Bud),
    army(Bud, Tri), army(Tri, Bud),
    army(Bur, Bel), army(Bel, Bur),
    army(Bur, Gas), army(Gas, Bur),
    army(Bur, Mar), army(Mar, Bur),
    army(Bur, Pic), army(Pic, Bur),
    army(Gal, Rum), army(Rum, Gal),
    army(Gas, Mar), army(Mar, Gas),
    army(Mos, Lvn), army(Lvn, Mos),
    army(Mos, Sev), army(Sev, Mos),
    army(Mos, Stp), army(Stp, Mos),
    army(Mun, Ber), army(Ber, Mun),
    army(Mun, Kie), army(Kie, Mun),
    army(Par, Bre), army(Bre, Par),
    army(Par, Gas), army(Gas, Par),
    army(Par, Pic), army(Pic, Par),
    army(Ruh, Bel), army(Bel, Ruh),
    army(Ruh, Hol), army(Hol, Ruh),
    army(Ruh, Kie), army(Kie, Ruh),
    army(Ser, Alb), army(Alb, Ser),
    army(Ser, Bul), army(Bul, Ser),
    army(Ser, Gre), army(Gre, Ser),
    army(Ser, Rum), army(Rum, Ser),
    army(Ser, Tri), army(Tri, Ser),
    army(Sil, Ber), army(Ber, Sil),
    army(Sil, Pru), army(Pru, Sil),
    army(Tyr, Pie), army(Pie, Tyr),
    army(Tyr, Tri), army(Tri, Tyr),
    army(Tyr, Ven), army(Ven, Tyr),
    army(Ukr, Rum), army(Rum, Ukr),
    army(Ukr, Sev), army(Sev, Ukr),
    army(Vie, Tri), army(Tri, Vie),
    army(War, Lvn), army(Lvn, War),
    army(War, Pru), army(Pru, War),
    both(Alb, Gre), both(Gre, Alb),
    both(Alb, Tri), both(Tri, Alb),
    both(Ank, Arm), both(Arm, Ank),
    both(Ank, Con), both(Con, Ank),
    both(Apu, Nap), both(Nap, Apu),
    both(Apu, Ven), both(Ven, Apu),
    both(Bel, Hol), both(Hol, Bel),
    both(Bel, Pic), both(Pic, Bel),
    both(Ber, Kie), both(Kie, Ber),
    both(Ber, Pru), both(Pru, Ber),
    both(Bre, Gas), both(Gas, Bre),
    both(Bre, Pic), both(Pic, Bre),
    both(Cly, Edi), both(Edi, Cly),
    both(Cly, Lvp), both(Lvp, Cly),
    both(Con, Smy), both(Smy, Con),
    both(Den, Kie), both(Kie, Den),
    both(Den, Swe), both(Swe, Den),
    army(Edi, Lvp), army(Lvp, Edi),
    both(Edi, Yor), both(Yor, Edi),
    army(Fin, Nwy), army(Nwy, Fin),
    both(Fin, Swe), both(Swe, Fin),
    both(Lon, Wal), both(Wal, Lon),
    both(Lon, Yor), both(Yor, Lon),
    both(Lvp, Wal), both(Wal, Lvp),
    both(Mar, Pie), both(Pie, Mar),
    both(Naf, Tun), both(Tun, Naf),
    both(Nwy, Swe), both(Swe, Nwy),
    both(Pie, Tus), both(Tus, Pie),
    army(Pie, Ven), army(Ven, Pie),
    both(Pru, Lvn), both(Lvn, Pru),
    both(Rom, Nap), both(Nap, Rom),
    both(Rom, Tus), both(Tus, Rom),
    army(Rom, Ven), army(Ven, Rom),
    both(Sev, Arm), both(Arm, Sev),
    both(Sev, Rum), both(Rum, Sev),
    army(Smy, Arm), army(Arm, Smy),
    both(Smy, Syr), both(Syr, Smy),
    both(Tri, Ven), both(Ven, Tri),
    army(Wal, Yor), army(Yor, Wal),
    fleet(Con, N, Bul, EC), fleet(Bul, EC, Con, N),
    fleet(Con, N, Bul, SC), fleet(Bul, SC, Con, N),
    fleet(Gre, N, Bul, SC), fleet(Bul, SC, Gre, N),
    fleet(Rum, N, Bul, EC), fleet(Bul, EC, Rum, N),
    fleet(Gas, N, Spa, NC), fleet(Spa, NC, Gas, N),
    fleet(Mar, N, Spa, SC), fleet(Spa, SC, Mar, N),
    fleet(Por, N, Spa, NC), fleet(Spa, NC, Por, N),
    fleet(Por, N, Spa, SC), fleet(Spa, SC, Por, N),
    fleet(Fin, N, Stp, SC), fleet(Stp, SC, Fin, N),
    fleet(Lvn, N, Stp, SC), fleet(Stp, SC, Lvn, N),
    fleet(Nwy, N, Stp, NC), fleet(Stp, NC, Nwy, N),
    army(Con, Bul), army(Bul, Con),
    army(Gre, Bul), army(Bul, Gre),
    army(Rum, Bul), army(Bul, Rum),
    army(Gas, Spa), army(Spa, Gas),
    army(Mar, Spa), army(Spa, Mar),
    army(Por, Spa), army(Spa, Por),
    army(Fin, Stp), army(Stp, Fin),
    army(Lvn, Stp), army(Stp, Lvn),
    army(Nwy, Stp), army(Stp, Nwy),
    army(Ank, Smy), army(Smy, Ank),
    army(Apu, Rom), army(Rom, Apu),
    army(Lvp, Yor), army(Yor, Lvp),
    army(Tus, Ven), army(Ven, Tus),
    army(Arm, Syr), army(Syr, Arm),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_count_is_75() {
        assert_eq!(ALL_PROVINCES.len(), PROVINCE_COUNT);
    }

    #[test]
    fn supply_center_count_is_34() {
        let sc = PROVINCE_INFO.iter().filter(|p| p.is_supply_center).count();
        assert_eq!(sc, SUPPLY_CENTER_COUNT);
    }

    #[test]
    fn adjacency_count_is_434() {
        assert_eq!(ADJACENCIES.len(), ADJACENCY_COUNT);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for a in ADJACENCIES.iter() {
            let reverse_exists = ADJACENCIES.iter().any(|r| {
                r.from as u8 == a.to as u8
                    && r.to as u8 == a.from as u8
                    && r.from_coast.name() == a.to_coast.name()
                    && r.to_coast.name() == a.from_coast.name()
                    && r.army_ok == a.army_ok
                    && r.fleet_ok == a.fleet_ok
            });
            assert!(reverse_exists, "missing reverse adjacency for {} -> {}", a.from as u8, a.to as u8);
        }
    }
}
