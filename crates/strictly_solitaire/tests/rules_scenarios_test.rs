//! Scenario tests for move legality, driven through drags.

use strictly_solitaire::{
    Card, DropOutcome, DropTarget, FoundationSlot, Move, MoveError, Offset, Pickup, Idle, Rank,
    Source, Suit, Table, TableauSlot,
};

fn table(tableau: [Vec<Card>; 7], foundations: [Vec<Card>; 4], waste: Vec<Card>) -> Table {
    Table::from_piles(tableau, foundations, vec![], waste)
}

fn drop_waste(table: Table, target: DropTarget) -> (Table, DropOutcome) {
    let Pickup::Lifted(dragging) = Idle::new(table).pick_up(Source::Waste, Offset::default()) else {
        panic!("Waste top should lift");
    };
    let (idle, outcome) = dragging.release(&[target]);
    (idle.into_table(), outcome.expect("no invariant violation"))
}

#[test]
fn test_ace_of_hearts_starts_empty_foundation() {
    let start = table(Default::default(), Default::default(), vec![Card::face_up(Rank::Ace, Suit::Heart)]);
    let target = DropTarget::Foundation(FoundationSlot::First);
    let (after, outcome) = drop_waste(start, target);

    assert_eq!(outcome, DropOutcome::Committed(Move::new(Source::Waste, target)));
    let ids: Vec<_> = after.foundation(FoundationSlot::First).cards().iter().map(Card::id).collect();
    assert_eq!(ids, vec![Card::face_up(Rank::Ace, Suit::Heart).id()]);
    assert!(after.waste().is_empty());
}

#[test]
fn test_three_on_ace_rejected() {
    let mut foundations: [Vec<Card>; 4] = Default::default();
    foundations[0] = vec![Card::face_up(Rank::Ace, Suit::Heart)];
    let start = table(Default::default(), foundations, vec![Card::face_up(Rank::Three, Suit::Heart)]);

    let (after, outcome) = drop_waste(start.clone(), DropTarget::Foundation(FoundationSlot::First));
    assert_eq!(outcome, DropOutcome::Reverted);
    assert_eq!(after, start);
}

#[test]
fn test_only_king_starts_empty_tableau() {
    let target = DropTarget::Tableau(TableauSlot::Fourth);

    let queen = table(Default::default(), Default::default(), vec![Card::face_up(Rank::Queen, Suit::Spade)]);
    let (after, outcome) = drop_waste(queen.clone(), target);
    assert_eq!(outcome, DropOutcome::Reverted);
    assert_eq!(after, queen);

    let king = table(Default::default(), Default::default(), vec![Card::face_up(Rank::King, Suit::Spade)]);
    let (after, outcome) = drop_waste(king, target);
    assert!(matches!(outcome, DropOutcome::Committed(_)));
    assert_eq!(after.tableau(TableauSlot::Fourth).len(), 1);
}

#[test]
fn test_alternating_colors_on_tableau() {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[2] = vec![Card::face_up(Rank::Seven, Suit::Spade)];
    let target = DropTarget::Tableau(TableauSlot::Third);

    let red = table(tableau.clone(), Default::default(), vec![Card::face_up(Rank::Six, Suit::Heart)]);
    let (after, outcome) = drop_waste(red, target);
    assert!(matches!(outcome, DropOutcome::Committed(_)));
    assert_eq!(after.tableau(TableauSlot::Third).len(), 2);

    let black = table(tableau, Default::default(), vec![Card::face_up(Rank::Six, Suit::Club)]);
    let (after, outcome) = drop_waste(black.clone(), target);
    assert_eq!(outcome, DropOutcome::Reverted);
    assert_eq!(after, black);
}

#[test]
fn test_run_cannot_go_to_foundation() {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = vec![
        Card::face_up(Rank::Two, Suit::Heart),
        Card::face_up(Rank::Ace, Suit::Spade),
    ];
    let mut foundations: [Vec<Card>; 4] = Default::default();
    foundations[0] = vec![Card::face_up(Rank::Ace, Suit::Heart)];
    let mut start = table(tableau, foundations, vec![]);

    let mv = Move::new(
        Source::Tableau {
            slot: TableauSlot::First,
            start: 0,
        },
        DropTarget::Foundation(FoundationSlot::First),
    );
    let before = start.clone();
    assert!(matches!(start.apply_move(mv), Err(MoveError::Rejected(_, _))));
    assert_eq!(start, before);
}

#[test]
fn test_run_moves_as_unit_and_exposes_card() {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = vec![
        Card::new(Rank::Four, Suit::Diamond),
        Card::face_up(Rank::Nine, Suit::Heart),
        Card::face_up(Rank::Eight, Suit::Club),
    ];
    tableau[1] = vec![Card::face_up(Rank::Ten, Suit::Spade)];
    let mut start = table(tableau, Default::default(), vec![]);

    start
        .apply_move(Move::new(
            Source::Tableau {
                slot: TableauSlot::First,
                start: 1,
            },
            DropTarget::Tableau(TableauSlot::Second),
        ))
        .expect("nine on ten");

    let first = start.tableau(TableauSlot::First);
    assert_eq!(first.len(), 1);
    assert!(first.top().is_some_and(Card::is_face_up));

    let ranks: Vec<_> = start.tableau(TableauSlot::Second).cards().iter().map(Card::rank).collect();
    assert_eq!(ranks, vec![Rank::Ten, Rank::Nine, Rank::Eight]);
}

#[test]
fn test_foundation_builds_a_through_king() {
    let mut waste: Vec<Card> = Vec::new();
    // Waste top must be the Ace, so push in reverse.
    for rank in [
        Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven,
        Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace,
    ] {
        waste.push(Card::face_up(rank, Suit::Diamond));
    }
    let mut current = table(Default::default(), Default::default(), waste);

    for expected in 1..=13 {
        let (after, outcome) = drop_waste(current, DropTarget::Foundation(FoundationSlot::Third));
        assert!(matches!(outcome, DropOutcome::Committed(_)));
        let foundation = after.foundation(FoundationSlot::Third);
        assert_eq!(foundation.len(), expected);
        let values: Vec<u8> = foundation.cards().iter().map(|c| c.rank().value()).collect();
        assert_eq!(values, (1..=expected as u8).collect::<Vec<_>>());
        current = after;
    }
    assert!(current.waste().is_empty());
}
