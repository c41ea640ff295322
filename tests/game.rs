//! Table integration tests.

use termjack::{
    Action, ActionError, BetError, Card, DealError, DoubleRule, GameState, Outcome, ShoeError,
    ShowdownError, Table, TableOptions, TieRule,
};

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().copied().map(Card::new).collect()
}

/// Opens betting, bets for every seat and deals from the given draws.
fn dealt_table(options: TableOptions, seats: usize, bet: f64, draws: &[u8]) -> Table {
    let mut table = Table::new(options, seats, 1);
    table.shoe.stack(&cards(draws));
    table.start_round();
    for seat in 0..seats {
        table.place_bet(seat, bet).unwrap();
    }
    table.deal().unwrap();
    table
}

fn assert_balance(table: &Table, expected: f64) {
    let balance = table.ledger().balance();
    assert!(
        (balance - expected).abs() < 1e-9,
        "balance {balance}, expected {expected}"
    );
}

#[test]
fn basic_round_flow() {
    let mut table = dealt_table(
        TableOptions::default(),
        1,
        10.0,
        &[
            8, 7, // player
            6, 10, // house
            4,  // player hit
            5,  // house draw
        ],
    );
    assert_eq!(table.state(), GameState::PlayerTurn);
    assert_balance(&table, 90.0);
    assert_eq!(table.bet(0), Some(10.0));

    let hit_card = table.hit(0, 0).unwrap();
    assert_eq!(hit_card.rank, 4);
    assert_eq!(table.current_hand().unwrap().total(), 19);

    table.stand(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);

    let drawn = table.house_play().unwrap();
    assert_eq!(drawn, cards(&[5]));
    assert_eq!(table.state(), GameState::RoundOver);

    let result = table.showdown().unwrap();
    assert_eq!(result.seats.len(), 1);
    assert_eq!(result.house_total, 21);
    assert!(!result.house_bust);
    assert_eq!(result.seats[0].hands[0].resolution.outcome, Outcome::HouseWin);
    assert_balance(&table, 90.0);
    assert_eq!(table.state(), GameState::Settled);
}

#[test]
fn player_bust_ends_turn_and_loses() {
    let mut table = dealt_table(
        TableOptions::default(),
        1,
        10.0,
        &[10, 6, 10, 9, 12],
    );

    table.hit(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);

    assert!(table.house_play().unwrap().is_empty());
    let result = table.showdown().unwrap();
    let hand = result.seats[0].hands[0];
    assert_eq!(hand.player_total, 26);
    assert_eq!(hand.resolution.description, "Player busts");
    assert_balance(&table, 90.0);
    assert!((result.seats[0].net + 10.0).abs() < 1e-9);
}

#[test]
fn house_bust_pays_double() {
    let mut table = dealt_table(
        TableOptions::default(),
        1,
        10.0,
        &[10, 10, 10, 6, 9],
    );

    table.stand(0, 0).unwrap();
    assert_eq!(table.house_play().unwrap(), cards(&[9]));

    let result = table.showdown().unwrap();
    assert!(result.house_bust);
    assert_eq!(result.house_total, 25);
    assert_eq!(result.seats[0].hands[0].resolution.outcome, Outcome::PlayerWin);
    assert_balance(&table, 110.0);
    assert!((result.seats[0].hands[0].balance - 110.0).abs() < 1e-9);
}

#[test]
fn ties_follow_the_tie_rule() {
    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[10, 9, 10, 9]);
    table.stand(0, 0).unwrap();
    table.house_play().unwrap();
    let result = table.showdown().unwrap();
    assert_eq!(result.seats[0].hands[0].resolution.outcome, Outcome::HouseWin);
    assert_eq!(
        result.seats[0].hands[0].resolution.description,
        "Tie goes to dealer"
    );
    assert_balance(&table, 90.0);
    assert_eq!(table.ledger().history().codes().collect::<Vec<_>>(), [-1]);

    let options = TableOptions::default().with_tie_rule(TieRule::Push);
    let mut table = dealt_table(options, 1, 10.0, &[10, 9, 10, 9]);
    table.stand(0, 0).unwrap();
    table.house_play().unwrap();
    let result = table.showdown().unwrap();
    assert_eq!(result.seats[0].hands[0].resolution.outcome, Outcome::Tie);
    assert_balance(&table, 100.0);
    assert_eq!(table.ledger().statistics().ties, 1);
    assert_eq!(table.ledger().history().codes().collect::<Vec<_>>(), [0]);
}

#[test]
fn double_down_draws_one_card_and_doubles_stake() {
    let mut table = dealt_table(
        TableOptions::default(),
        1,
        10.0,
        &[5, 6, 10, 7, 10],
    );
    assert_eq!(
        table.available_actions(),
        [Action::Hit, Action::Stand, Action::Double]
    );

    let card = table.double_down(0, 0).unwrap();
    assert_eq!(card.rank, 10);
    assert_eq!(table.state(), GameState::HouseTurn);
    assert_balance(&table, 80.0);

    let hand = table.seat(0).unwrap().hand(0).unwrap();
    assert!(hand.is_doubled());
    assert_eq!(hand.len(), 3);
    assert!((hand.stake() - 20.0).abs() < 1e-9);

    table.house_play().unwrap();
    let result = table.showdown().unwrap();
    assert_eq!(result.seats[0].hands[0].player_total, 21);
    assert_balance(&table, 120.0);
}

#[test]
fn double_down_needs_funds_and_eligibility() {
    let options = TableOptions::default().with_initial_balance(15.0);
    let mut table = dealt_table(options, 1, 10.0, &[5, 6, 10, 7]);
    assert_eq!(
        table.double_down(0, 0).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_balance(&table, 5.0);
    assert_eq!(table.state(), GameState::PlayerTurn);
    assert_eq!(table.current_hand().unwrap().len(), 2);

    let options = TableOptions::default().with_double_rule(DoubleRule::Restricted);
    let mut table = dealt_table(options, 1, 10.0, &[10, 7, 10, 7]);
    assert_eq!(table.available_actions(), [Action::Hit, Action::Stand]);
    assert_eq!(table.double_down(0, 0).unwrap_err(), ActionError::CannotDouble);

    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[2, 3, 10, 7, 4]);
    table.hit(0, 0).unwrap();
    assert_eq!(table.available_actions(), [Action::Hit, Action::Stand]);
    assert_eq!(table.double_down(0, 0).unwrap_err(), ActionError::CannotDouble);
}

#[test]
fn split_plays_both_hands_in_order() {
    let mut table = dealt_table(
        TableOptions::default(),
        1,
        10.0,
        &[
            8, 8, // player pair
            10, 7, // house 17
            3,  // first split hand
            10, // second split hand
        ],
    );
    assert_eq!(
        table.available_actions(),
        [Action::Hit, Action::Stand, Action::Double, Action::Split]
    );

    table.split(0, 0).unwrap();
    assert_balance(&table, 80.0);
    assert_eq!(table.seat(0).unwrap().number_of_hands(), 2);
    assert_eq!(table.current_turn().hand, 0);
    assert_eq!(table.available_actions(), [Action::Hit, Action::Stand]);
    assert_eq!(table.split(0, 0).unwrap_err(), ActionError::CannotSplit);

    table.hit(0, 0).unwrap();
    assert_eq!(table.current_hand().unwrap().total(), 11);
    // Two cards again, but a second split is never offered.
    assert_eq!(
        table.available_actions(),
        [Action::Hit, Action::Stand, Action::Double]
    );
    assert_eq!(table.stand(0, 1).unwrap_err(), ActionError::NotYourTurn);
    table.stand(0, 0).unwrap();

    assert_eq!(table.current_turn().hand, 1);
    table.hit(0, 1).unwrap();
    table.stand(0, 1).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);

    assert!(table.house_play().unwrap().is_empty());
    let result = table.showdown().unwrap();
    let hands = &result.seats[0].hands;
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].resolution.outcome, Outcome::HouseWin);
    assert_eq!(hands[1].resolution.outcome, Outcome::PlayerWin);
    assert_eq!(hands[1].player_total, 18);
    assert_balance(&table, 100.0);
    assert_eq!(table.ledger().history().len(), 2);
}

#[test]
fn split_requires_pair_and_funds() {
    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[10, 13, 10, 7]);
    assert_eq!(table.available_actions(), [Action::Hit, Action::Stand, Action::Double]);
    assert_eq!(table.split(0, 0).unwrap_err(), ActionError::CannotSplit);

    let options = TableOptions::default().with_initial_balance(12.0);
    let mut table = dealt_table(options, 1, 10.0, &[4, 4, 10, 7]);
    assert_eq!(table.split(0, 0).unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(table.seat(0).unwrap().number_of_hands(), 1);
    assert_balance(&table, 2.0);
}

#[test]
fn twenty_one_ends_turn() {
    // Opening 21 is skipped entirely.
    let table = dealt_table(TableOptions::default(), 1, 10.0, &[1, 13, 10, 7]);
    assert_eq!(table.state(), GameState::HouseTurn);
    assert!(table.available_actions().is_empty());

    // Reaching 21 by hitting also moves on.
    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[5, 6, 10, 7, 10]);
    table.hit(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);
}

#[test]
fn seats_play_in_order() {
    let mut table = dealt_table(
        TableOptions::default(),
        2,
        10.0,
        &[
            10, 8, // seat 1
            9, 9, // seat 2
            10, 7, // house
        ],
    );
    assert_balance(&table, 80.0);
    assert_eq!(table.stand(1, 0).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(table.stand(2, 0).unwrap_err(), ActionError::SeatNotFound);
    assert_eq!(table.stand(0, 1).unwrap_err(), ActionError::HandNotFound);

    table.stand(0, 0).unwrap();
    assert_eq!(table.current_turn().seat, 1);
    table.play(Action::Stand).unwrap();

    table.house_play().unwrap();
    let result = table.showdown().unwrap();
    assert_eq!(result.seats.len(), 2);
    assert_eq!(result.seats[0].hands[0].resolution.outcome, Outcome::PlayerWin);
    assert_eq!(result.seats[1].hands[0].resolution.outcome, Outcome::PlayerWin);
    assert_balance(&table, 120.0);
}

#[test]
fn later_seat_dealt_twenty_one_is_skipped() {
    let draws = [
        10, 8, // seat 1
        1, 13, // seat 2, 21
        10, 7, // house
    ];
    let mut table = dealt_table(TableOptions::default(), 2, 10.0, &draws);
    assert_eq!(table.current_turn().seat, 0);

    table.stand(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);
    assert!(table.available_actions().is_empty());
    assert_eq!(table.hit(1, 0).unwrap_err(), ActionError::InvalidState);

    // Busting and doubling move past it the same way.
    let draws = [10, 6, 1, 13, 10, 7, 9];
    let mut table = dealt_table(TableOptions::default(), 2, 10.0, &draws);
    table.hit(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);

    let draws = [5, 6, 1, 13, 10, 7, 2];
    let mut table = dealt_table(TableOptions::default(), 2, 10.0, &draws);
    table.double_down(0, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);
}

#[test]
fn middle_seat_dealt_twenty_one_is_skipped() {
    let draws = [
        9, 9, // seat 1
        1, 12, // seat 2, 21
        10, 6, // seat 3
        10, 7, // house
    ];
    let mut table = dealt_table(TableOptions::default(), 3, 10.0, &draws);

    table.stand(0, 0).unwrap();
    assert_eq!(table.state(), GameState::PlayerTurn);
    assert_eq!(table.current_turn().seat, 2);
    assert_eq!(table.stand(1, 0).unwrap_err(), ActionError::NotYourTurn);
    table.stand(2, 0).unwrap();
    assert_eq!(table.state(), GameState::HouseTurn);
}

#[test]
fn early_seats_leave_the_minimum_for_later_seats() {
    let mut table = Table::new(TableOptions::default(), 2, 1);
    table.start_round();

    assert!((table.max_bet(0) - 95.0).abs() < 1e-9);
    assert_eq!(table.place_bet(0, 96.0).unwrap_err(), BetError::InsufficientFunds);
    assert_balance(&table, 100.0);

    table.place_bet(0, 95.0).unwrap();
    assert!((table.max_bet(1) - 5.0).abs() < 1e-9);
    assert_eq!(table.place_bet(1, 5.01).unwrap_err(), BetError::InsufficientFunds);
    table.place_bet(1, 5.0).unwrap();
    assert_balance(&table, 0.0);

    // Once every seat has bet, a seat may rebet up to its own stake.
    assert!((table.max_bet(0) - 95.0).abs() < 1e-9);
    table.place_bet(0, 50.0).unwrap();
    assert_balance(&table, 45.0);

    table.deal().unwrap();
    assert_eq!(table.bet(0), Some(50.0));
    assert_eq!(table.bet(1), Some(5.0));
}

#[test]
fn out_of_range_player_count_seats_one() {
    assert_eq!(Table::new(TableOptions::default(), 0, 1).seat_count(), 1);
    assert_eq!(Table::new(TableOptions::default(), 4, 1).seat_count(), 1);
    assert_eq!(Table::new(TableOptions::default(), 3, 1).seat_count(), 3);
}

#[test]
fn bet_errors() {
    let mut table = Table::new(TableOptions::default(), 1, 1);
    assert_eq!(table.place_bet(0, 10.0).unwrap_err(), BetError::InvalidState);

    table.start_round();
    assert_eq!(
        table.place_bet(0, 4.99).unwrap_err(),
        BetError::BelowMinimum(5.0)
    );
    assert_eq!(
        table.place_bet(0, 100.01).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(table.place_bet(1, 10.0).unwrap_err(), BetError::SeatNotFound);

    table.place_bet(0, 100.0).unwrap();
    assert_balance(&table, 0.0);
    // Rebetting replaces the stake.
    table.place_bet(0, 20.0).unwrap();
    assert_balance(&table, 80.0);

    // A round abandoned before the deal refunds its bets.
    table.clear_round();
    assert_balance(&table, 100.0);
    assert_eq!(table.state(), GameState::Idle);
}

#[test]
fn deal_and_action_errors() {
    let mut table = Table::new(TableOptions::default(), 2, 1);
    assert_eq!(table.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(table.hit(0, 0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.house_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(table.showdown().unwrap_err(), ShowdownError::InvalidState);

    table.start_round();
    table.place_bet(0, 10.0).unwrap();
    assert_eq!(table.deal().unwrap_err(), DealError::MissingBet(1));
}

#[test]
fn shoe_errors_surface_through_actions() {
    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[5, 6, 10, 7]);
    table.shoe.stack(&[Card::new(14)]);
    assert_eq!(
        table.hit(0, 0).unwrap_err(),
        ActionError::Shoe(ShoeError::RankExhausted(14))
    );
    assert_eq!(table.current_hand().unwrap().len(), 2);
}

#[test]
fn cleared_cards_return_to_the_shoe() {
    let mut table = dealt_table(TableOptions::default(), 1, 10.0, &[5, 6, 10, 7]);
    table.stand(0, 0).unwrap();
    table.house_play().unwrap();
    table.showdown().unwrap();

    table.start_round();
    assert_eq!(table.shoe.pending_returns().len(), 4);
    assert!(table.house().is_empty());
    assert!(table.seat(0).unwrap().hand(0).unwrap().is_empty());
    assert_eq!(table.shoe.cards_drawn(), 4);
}

#[test]
fn history_is_capped_across_many_rounds() {
    let options = TableOptions::default().with_initial_balance(10_000.0);
    let mut table = Table::new(options, 1, 2024);
    let mut played = 0;

    for _ in 0..105 {
        table.start_round();
        table.place_bet(0, 5.0).unwrap();
        table.deal().unwrap();
        while table.state() == GameState::PlayerTurn {
            table.play(Action::Stand).unwrap();
        }
        table.house_play().unwrap();
        let result = table.showdown().unwrap();
        played += result.seats[0].hands.len();

        assert!(table.ledger().history().len() <= 100);
        if played <= 100 {
            assert_eq!(table.ledger().history().len(), played);
        }
        assert!(table.house().total() >= 17);
    }

    assert_eq!(table.ledger().history().len(), 100);
    assert_eq!(table.ledger().statistics().total, 105);
    // 105 rounds of at least four cards cross the reshuffle threshold.
    assert!(table.shoe.reshuffles() >= 1);
}
