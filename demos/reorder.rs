extern crate lexorank;
use lexorank::*;

/// A list item keyed by its rank
struct Card {
    title: &'static str,
    rank: Rank,
}

fn print_board(cards: &[Card]) {
    let mut sorted: Vec<&Card> = cards.iter().collect();
    sorted.sort_by(|a, b| a.rank.as_str().cmp(b.rank.as_str()));
    for card in sorted {
        println!("  {:<16} {}", card.rank, card.title);
    }
}

/// Rank placing a card at 'idx' of the list sorted by rank, excluding 'moving'
fn rank_for_position(cards: &[Card], moving: usize, idx: usize) -> Result<Rank, LexoRankError> {
    let mut others: Vec<&Rank> = cards
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != moving)
        .map(|(_, c)| &c.rank)
        .collect();
    others.sort();

    match (idx.checked_sub(1).and_then(|i| others.get(i)), others.get(idx)) {
        (None, None) => Ok(Rank::initial(Bucket::Bucket0)),
        (None, Some(next)) => Ok(next.gen_prev()),
        (Some(prev), None) => Ok(prev.gen_next()),
        (Some(prev), Some(next)) => prev.between(next),
    }
}

fn main() -> Result<(), LexoRankError> {
    println!("Hello, ranks!");

    let titles = ["write outline", "design api", "implement", "test", "release"];
    let mut cards = Vec::new();
    let mut rank = Rank::initial(Bucket::Bucket0);
    for &title in titles.iter() {
        cards.push(Card { title, rank: rank.clone() });
        rank = rank.gen_next();
    }
    println!("initial board:");
    print_board(&cards);

    // drag "release" between "write outline" and "design api"
    cards[4].rank = rank_for_position(&cards, 4, 1)?;
    println!("moved 'release' to position 1:");
    print_board(&cards);

    // drag "test" to the top
    cards[3].rank = rank_for_position(&cards, 3, 0)?;
    println!("moved 'test' to the top:");
    print_board(&cards);

    // keep inserting right after the first card to watch key growth
    let first = cards.iter().map(|c| &c.rank).min().cloned().unwrap_or_else(Rank::min);
    let mut right = cards.iter().map(|c| &c.rank).filter(|r| **r > first).min().cloned()
        .unwrap_or_else(|| first.gen_next());
    for i in 0..12 {
        right = first.between(&right)?;
        println!("  insertion {:2}: {}", i + 1, right);
    }

    // rotate into the next bucket, as a rebalancing job would
    let rotated: Vec<Rank> = cards.iter().map(|c| c.rank.in_next_bucket()).collect();
    println!("rotated: {:?}", rotated);

    let middle = Rank::middle();
    println!("middle of bucket 0: {}", middle);

    let ctx = Context::new(NumeralSystem::Base10);
    let r = ctx.parse_rank("0|200000")?;
    println!("base-10 {} precedes {}", r.gen_prev(), r);

    Ok(())
}
