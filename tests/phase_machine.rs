//! End-to-end coverage of the phase machine: movement, retreat, and
//! adjustment resolution driven through a real [`Game`].

use diplomacy_engine::game::{Game, GamePhase, Order, OrderResult, Season, Unit};
use diplomacy_engine::map::{standard, CountryId, UnitType};
use diplomacy_engine::resolve::{build, phase, retreat};

const AUSTRIA: CountryId = CountryId(0);
const FRANCE: CountryId = CountryId(2);

fn new_game() -> Game {
    let map = standard::build();
    Game::new(1, "test", "standard", &map, 7).unwrap()
}

fn place(game: &mut Game, country: CountryId, code: &str, unit_type: UnitType) {
    let province = game.map.province_by_code(code).unwrap().id;
    game.remove_unit(province);
    game.spawn_unit(country, Unit { unit_type, province, coast: None }).unwrap();
}

fn order_hold(game: &mut Game, country: CountryId, code: &str) {
    let p = game.map.province_by_code(code).unwrap().id;
    game.current_state_mut().orders.entry(country).or_default().insert(p, Order::Hold { province: p, result: OrderResult::Unprocessed });
}

fn order_move(game: &mut Game, country: CountryId, code: &str, dest_code: &str) {
    let map = game.map.clone();
    let p = map.province_by_code(code).unwrap().id;
    let dest = map.province_by_code(dest_code).unwrap().id;
    game.current_state_mut().orders.entry(country).or_default().insert(
        p,
        Order::Move { province: p, dest, coast: None, is_convoy: false, result: OrderResult::Unprocessed },
    );
}

fn order_support_move(game: &mut Game, country: CountryId, code: &str, from_code: &str, supporting_code: &str) {
    let map = game.map.clone();
    let p = map.province_by_code(code).unwrap().id;
    let from = map.province_by_code(from_code).unwrap().id;
    let supporting = map.province_by_code(supporting_code).unwrap().id;
    game.current_state_mut().orders.entry(country).or_default().insert(
        p,
        Order::SupportMove { province: p, from, supporting, result: OrderResult::Unprocessed },
    );
}

/// S6: Marseille (with Spanish support) dislodges Paris; the dislodged
/// army retreats to Gascony, and the turn carries through to the next
/// OrderWriting phase.
#[test]
fn dislodge_retreat_and_phase_advance() {
    let mut game = new_game();
    game.set_phase(GamePhase::OrderWriting);

    place(&mut game, FRANCE, "par", UnitType::Army);
    place(&mut game, FRANCE, "bur", UnitType::Army);
    place(&mut game, FRANCE, "mar", UnitType::Army);
    place(&mut game, AUSTRIA, "spa", UnitType::Army);

    order_hold(&mut game, FRANCE, "par");
    order_support_move(&mut game, FRANCE, "bur", "mar", "par");
    order_move(&mut game, FRANCE, "mar", "par");
    order_support_move(&mut game, AUSTRIA, "spa", "mar", "par");

    phase::calculate_orders(&mut game).unwrap();
    assert_eq!(game.phase, GamePhase::Retreating);

    let par = game.map.province_by_code("par").unwrap().id;
    assert!(game.current_state().dislodgements.contains_key(&par));

    let gas = game.map.province_by_code("gas").unwrap().id;
    game.current_state_mut().retreats.entry(FRANCE).or_default().insert(
        par,
        Order::Retreat { province: par, dest: gas, coast: None, result: OrderResult::Unprocessed },
    );

    retreat::calculate_retreats(&mut game).unwrap();
    assert_eq!(game.phase, GamePhase::OrderWriting);
    assert_eq!(game.current_state().season, Season::Fall);
    assert!(game.current_state().unit_at(gas).is_some());
    assert!(game.current_state().unit_at(par).is_none());
}

/// S1: an unopposed move always succeeds and frees its origin province.
#[test]
fn simple_move_through_game() {
    let mut game = new_game();
    game.set_phase(GamePhase::OrderWriting);
    place(&mut game, FRANCE, "par", UnitType::Army);
    order_move(&mut game, FRANCE, "par", "bur");

    phase::calculate_orders(&mut game).unwrap();

    let bur = game.map.province_by_code("bur").unwrap().id;
    let par = game.map.province_by_code("par").unwrap().id;
    assert!(game.current_state().unit_at(bur).is_some());
    assert!(game.current_state().unit_at(par).is_none());
    assert_eq!(game.phase, GamePhase::OrderWriting);
    assert_eq!(game.current_state().season, Season::Fall);
}

/// S2: two armies contesting the same empty province both bounce, and
/// the province is recorded as contested.
#[test]
fn mutual_bounce_contests_the_province() {
    let mut game = new_game();
    game.set_phase(GamePhase::OrderWriting);
    place(&mut game, FRANCE, "par", UnitType::Army);
    place(&mut game, FRANCE, "mar", UnitType::Army);
    order_move(&mut game, FRANCE, "par", "bur");
    order_move(&mut game, FRANCE, "mar", "bur");

    phase::calculate_orders(&mut game).unwrap();

    let bur = game.map.province_by_code("bur").unwrap().id;
    assert!(game.current_state().unit_at(bur).is_none());
    let historical = &game.history[game.history.len() - 2];
    assert!(historical.contested.contains(&bur));
}

/// Adjudication over the same (state, orders) pair is deterministic.
#[test]
fn adjudication_is_deterministic() {
    let mut a = new_game();
    a.set_phase(GamePhase::OrderWriting);
    place(&mut a, FRANCE, "par", UnitType::Army);
    order_move(&mut a, FRANCE, "par", "bur");
    let mut b = a.clone();

    phase::calculate_orders(&mut a).unwrap();
    phase::calculate_orders(&mut b).unwrap();

    let bur = a.map.province_by_code("bur").unwrap().id;
    assert_eq!(a.current_state().unit_at(bur).is_some(), b.current_state().unit_at(bur).is_some());
    assert_eq!(a.phase, b.phase);
}

/// A Fall turn with no dislodgements runs straight through adjustment and
/// back to a fresh Spring OrderWriting phase, one history entry ahead.
#[test]
fn fall_turn_with_no_dislodgements_reaches_adjustment() {
    let mut game = new_game();
    game.set_phase(GamePhase::OrderWriting);
    {
        let state = game.current_state_mut();
        state.season = Season::Fall;
    }
    place(&mut game, FRANCE, "par", UnitType::Army);
    order_hold(&mut game, FRANCE, "par");

    let history_len_before = game.history.len();
    phase::calculate_orders(&mut game).unwrap();
    assert_eq!(game.phase, GamePhase::CreatingDisbanding);
    assert_eq!(game.history.len(), history_len_before + 1);

    build::calculate_adjustments(&mut game).unwrap();
    assert_eq!(game.phase, GamePhase::OrderWriting);
    assert_eq!(game.current_state().season, Season::Spring);
}
